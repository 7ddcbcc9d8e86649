//! Declarative scene data.
//!
//! A scene is a list of textures to load, materials to define, a light setup
//! and an ordered list of [`DrawDescriptor`]s. The descriptors are plain data;
//! [`Dispatcher::draw`](crate::render::Dispatcher::draw) is the only code that
//! turns them into shader writes and draw calls.

use std::{f32::consts::PI, path::PathBuf};

use cgmath::Vector3;

use crate::{
    data_structures::{light::LightSetup, material::Material, transform::Transform},
    resources::mesh::MeshKind,
};

/// How a draw is colored.
#[derive(Clone, Debug, PartialEq)]
pub enum Surface {
    /// Sample the texture registered under this tag.
    Texture(String),
    /// Flat RGBA color, no texture sampling.
    Color([f32; 4]),
}

/// One object of a scene: which mesh, where, and how it looks.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawDescriptor {
    pub mesh: MeshKind,
    pub transform: Transform,
    pub surface: Surface,
    pub uv_scale: [f32; 2],
    /// Material tag. `None` keeps whatever material the previous draw set.
    pub material: Option<String>,
}

impl DrawDescriptor {
    /// A white, untextured, material-less draw.
    pub fn new(mesh: MeshKind, transform: Transform) -> Self {
        Self {
            mesh,
            transform,
            surface: Surface::Color([1.0; 4]),
            uv_scale: [1.0, 1.0],
            material: None,
        }
    }

    pub fn textured(mut self, tag: impl Into<String>) -> Self {
        self.surface = Surface::Texture(tag.into());
        self
    }

    pub fn colored(mut self, color: [f32; 4]) -> Self {
        self.surface = Surface::Color(color);
        self
    }

    pub fn with_material(mut self, tag: impl Into<String>) -> Self {
        self.material = Some(tag.into());
        self
    }

    pub fn with_uv_scale(mut self, u: f32, v: f32) -> Self {
        self.uv_scale = [u, v];
        self
    }

    pub fn texture_tag(&self) -> Option<&str> {
        match &self.surface {
            Surface::Texture(tag) => Some(tag),
            Surface::Color(_) => None,
        }
    }
}

/// An image file to load and the tag to register it under.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureSource {
    pub path: PathBuf,
    pub tag: String,
}

impl TextureSource {
    pub fn new(path: impl Into<PathBuf>, tag: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            tag: tag.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneDescription {
    pub textures: Vec<TextureSource>,
    pub materials: Vec<(String, Material)>,
    pub lights: LightSetup,
    pub objects: Vec<DrawDescriptor>,
}

impl SceneDescription {
    /// Every mesh kind the objects use, in order of first use.
    pub fn mesh_kinds(&self) -> Vec<MeshKind> {
        let mut kinds = Vec::new();
        for object in &self.objects {
            if !kinds.contains(&object.mesh) {
                kinds.push(object.mesh);
            }
        }
        kinds
    }
}

/// Copies of one draw laid out along a half circle in the XY plane.
///
/// Segment `i` of `segments` sits at angle `180° * i / segments` around
/// `center`, rotated by that angle around Y and by 90° around Z, so that
/// consecutive segments overlap into a smooth curve. `segments + 1` copies
/// are produced, covering both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SemicircleArc {
    pub center: Vector3<f32>,
    pub radius: f32,
    pub segments: u32,
}

impl SemicircleArc {
    pub fn new(center: [f32; 3], radius: f32, segments: u32) -> Self {
        Self {
            center: center.into(),
            radius,
            segments,
        }
    }

    /// Places copies of `template`, keeping its mesh, scale, surface and
    /// material.
    pub fn descriptors(&self, template: &DrawDescriptor) -> Vec<DrawDescriptor> {
        let steps = self.segments.max(1) as f32;
        (0..=self.segments)
            .map(|i| {
                let angle = PI * (i as f32 / steps);
                let mut segment = template.clone();
                segment.transform.position = Vector3::new(
                    self.center.x + self.radius * angle.cos(),
                    self.center.y + self.radius * angle.sin(),
                    self.center.z,
                );
                segment.transform.rotation = Vector3::new(0.0, angle.to_degrees(), 90.0);
                segment
            })
            .collect()
    }
}
