//! The street-corner reference scene: a lamp post with a curved arm and a
//! hanging lamp, a wooden bench, a brick wall and an asphalt floor.

use cgmath::Deg;

use crate::{
    data_structures::{
        light::{
            Attenuation, DirectionalLight, LightColors, LightSetup, PointLight, SpotLight,
        },
        material::Material,
        scene::{DrawDescriptor, SceneDescription, SemicircleArc, TextureSource},
        transform::Transform,
    },
    resources::mesh::MeshKind,
};

pub const STREET: &str = "street";
pub const BLACK_METAL: &str = "bmat";
pub const WALL: &str = "wall";
pub const LAMP: &str = "lamp";
pub const WOOD: &str = "wood";

pub const LAMP_MATERIAL: &str = "Lamp";
pub const BRICK_MATERIAL: &str = "Brick";
pub const GROUND_MATERIAL: &str = "Ground";
pub const WOOD_MATERIAL: &str = "Wood";

pub fn textures() -> Vec<TextureSource> {
    vec![
        TextureSource::new("textures/street.jpg", STREET),
        TextureSource::new("textures/blackmat.jpg", BLACK_METAL),
        TextureSource::new("textures/wall.jpg", WALL),
        TextureSource::new("textures/lamp.jpg", LAMP),
        TextureSource::new("textures/wood.jpg", WOOD),
    ]
}

pub fn materials() -> Vec<(String, Material)> {
    vec![
        (
            LAMP_MATERIAL.to_string(),
            Material::new([0.1, 0.1, 0.1], [0.8, 0.8, 0.8], 64.0),
        ),
        (
            BRICK_MATERIAL.to_string(),
            Material::new([0.5, 0.2, 0.1], [0.2, 0.2, 0.2], 16.0),
        ),
        (
            GROUND_MATERIAL.to_string(),
            Material::new([0.1, 0.1, 0.1], [0.1, 0.1, 0.1], 8.0),
        ),
        (
            WOOD_MATERIAL.to_string(),
            Material::new([0.55, 0.27, 0.07], [0.2, 0.2, 0.2], 32.0),
        ),
    ]
}

pub fn lights() -> LightSetup {
    let dim = LightColors::new([0.05, 0.05, 0.05], [0.2, 0.2, 0.2], [0.8, 0.8, 0.8]);
    LightSetup {
        use_lighting: true,
        directional: DirectionalLight::new(
            [-0.05, -0.3, -0.1],
            LightColors::new([0.3, 0.3, 0.3], [0.8, 0.8, 0.8], [0.0, 0.0, 0.0]),
        ),
        point_lights: vec![
            PointLight::new(
                [-4.0, 4.0, 0.0],
                LightColors::new([0.3, 0.3, 0.2], [1.2, 1.2, 0.9], [1.0, 1.0, 0.8]),
            )
            .with_attenuation(Attenuation::new(1.0, 0.05, 0.01)),
            PointLight::new(
                [4.0, 8.0, 0.0],
                LightColors::new([0.05, 0.05, 0.05], [0.3, 0.3, 0.3], [0.1, 0.1, 0.1]),
            ),
            PointLight::new([3.8, 5.5, 4.0], dim),
            PointLight::new([3.8, 3.5, 4.0], dim),
            PointLight::new(
                [-3.2, 6.0, -4.0],
                LightColors::new([0.05, 0.05, 0.05], [0.9, 0.9, 0.9], [0.1, 0.1, 0.1]),
            ),
            // warm light over the bench
            PointLight::new(
                [1.5, 2.0, 0.0],
                LightColors::new([0.2, 0.15, 0.1], [0.8, 0.6, 0.3], [0.9, 0.8, 0.7]),
            )
            .with_attenuation(Attenuation::new(1.0, 0.09, 0.032)),
        ],
        spot: SpotLight::new(
            [0.0, 2.0, 0.5],
            [0.0, -1.0, -0.5],
            LightColors::new([0.4, 0.4, 0.4], [0.3, 0.3, 0.3], [0.7, 0.7, 0.7]),
            Attenuation::new(1.0, 0.09, 0.032),
            Deg(35.0),
            Deg(50.0),
        ),
    }
}

fn object(mesh: MeshKind, scale: [f32; 3], rotation: [f32; 3], position: [f32; 3]) -> DrawDescriptor {
    DrawDescriptor::new(mesh, Transform::from_parts(scale, rotation, position))
}

fn metal(mesh: MeshKind, scale: [f32; 3], rotation: [f32; 3], position: [f32; 3]) -> DrawDescriptor {
    object(mesh, scale, rotation, position)
        .textured(BLACK_METAL)
        .with_material(LAMP_MATERIAL)
}

fn plank(scale: [f32; 3], x_rotation: f32, position: [f32; 3]) -> DrawDescriptor {
    object(MeshKind::Box, scale, [x_rotation, 0.0, 0.0], position)
        .textured(WOOD)
        .with_material(WOOD_MATERIAL)
}

pub fn objects() -> Vec<DrawDescriptor> {
    use MeshKind::{Box, Cylinder, Plane, Sphere};

    let mut objects = vec![
        // floor and wall
        object(Plane, [10.0, -1.0, 8.0], [0.0; 3], [0.0, -0.1, 4.0])
            .textured(STREET)
            .with_material(GROUND_MATERIAL),
        object(Plane, [10.0, 2.0, 6.0], [90.0, 0.0, 0.0], [0.0, 5.8, -4.0])
            .textured(WALL)
            .with_material(BRICK_MATERIAL),
        // lamp
        object(Sphere, [-0.5, 0.5, 0.5], [0.0; 3], [-0.6, 5.5, 0.0])
            .textured(LAMP)
            .with_material(LAMP_MATERIAL),
        metal(Cylinder, [0.6, 0.3, 0.6], [0.0, 90.0, 0.0], [-3.0, 0.15, 0.0]),
        metal(Cylinder, [0.2, 6.0, 0.2], [0.0, 90.0, 0.0], [-3.0, 0.15, 0.0]),
        metal(Cylinder, [0.3, 0.3, 0.3], [0.0, 90.0, 0.0], [-3.0, 5.0, 0.0]),
        metal(Cylinder, [0.3, 0.3, 0.3], [0.0, 90.0, 0.0], [-0.6, 6.0, 0.0]),
    ];

    let arm_segment = metal(Cylinder, [0.05, 0.2, 0.05], [0.0; 3], [0.0; 3]);
    objects.extend(SemicircleArc::new([-1.7, 6.1, 0.0], 1.2, 50).descriptors(&arm_segment));

    // bench seat
    objects.extend([
        plank([5.0, 0.1, 0.2], 0.0, [2.0, 1.2, 1.0]),
        plank([5.0, 0.1, 0.2], 45.0, [2.0, 1.4, 0.77]),
        plank([5.0, 0.1, 0.2], 0.0, [2.0, 1.2, 1.3]),
        plank([5.0, 0.1, 0.2], 0.0, [2.0, 1.2, 1.6]),
        plank([5.0, 0.1, 0.2], 45.0, [2.0, 1.1, 1.9]),
    ]);

    // legs and handles, one frame at each end of the bench
    for x in [-0.3, 4.3] {
        objects.extend([
            metal(Box, [0.1, 1.0, 0.1], [90.0, 0.0, 0.0], [x, 1.1, 1.4]),
            metal(Box, [0.1, 1.2, 0.1], [180.0, 0.0, 0.0], [x, 0.5, 1.7]),
            metal(Box, [0.1, 1.4, 0.1], [30.0, 0.0, 0.0], [x, 0.5, 0.8]),
        ]);
    }
    for x in [-0.3, 4.3] {
        objects.push(metal(Box, [0.1, 0.7, 0.1], [-40.0, 0.0, 0.0], [x, 1.2, 0.8]));
    }
    for x in [-0.3, 4.3] {
        objects.push(metal(Box, [0.1, 0.8, 0.1], [175.0, 0.0, 0.0], [x, 1.8, 0.57]));
    }

    // backrest
    objects.push(plank([5.0, 0.1, 0.9], 85.0, [2.0, 2.2, 0.64]));
    objects
}

pub fn street_corner() -> SceneDescription {
    SceneDescription {
        textures: textures(),
        materials: materials(),
        lights: lights(),
        objects: objects(),
    }
}
