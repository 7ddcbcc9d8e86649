//! Light parameters written into shader state once per scene.

use cgmath::{Deg, Vector3, Zero};

/// Distance falloff `1 / (constant + linear·d + quadratic·d²)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Attenuation {
    pub fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }
}

impl Default for Attenuation {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

/// Ambient, diffuse and specular contributions of a light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightColors {
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
}

impl LightColors {
    pub fn new(ambient: [f32; 3], diffuse: [f32; 3], specular: [f32; 3]) -> Self {
        Self {
            ambient: ambient.into(),
            diffuse: diffuse.into(),
            specular: specular.into(),
        }
    }
}

impl Default for LightColors {
    fn default() -> Self {
        Self {
            ambient: Vector3::zero(),
            diffuse: Vector3::zero(),
            specular: Vector3::zero(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vector3<f32>,
    pub colors: LightColors,
    pub active: bool,
}

impl DirectionalLight {
    pub fn new(direction: [f32; 3], colors: LightColors) -> Self {
        Self {
            direction: direction.into(),
            colors,
            active: true,
        }
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: -Vector3::unit_y(),
            colors: LightColors::default(),
            active: false,
        }
    }
}

/// An omnidirectional light. Lights without attenuation leave the shader's
/// attenuation uniforms untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vector3<f32>,
    pub colors: LightColors,
    pub attenuation: Option<Attenuation>,
    pub active: bool,
}

impl PointLight {
    pub fn new(position: [f32; 3], colors: LightColors) -> Self {
        Self {
            position: position.into(),
            colors,
            attenuation: None,
            active: true,
        }
    }

    pub fn with_attenuation(mut self, attenuation: Attenuation) -> Self {
        self.attenuation = Some(attenuation);
        self
    }
}

/// A cone light. Cutoff angles are half-angles of the inner (full intensity)
/// and outer (zero intensity) cones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub position: Vector3<f32>,
    pub direction: Vector3<f32>,
    pub colors: LightColors,
    pub attenuation: Attenuation,
    pub inner_cutoff: Deg<f32>,
    pub outer_cutoff: Deg<f32>,
    pub active: bool,
}

impl SpotLight {
    pub fn new(
        position: [f32; 3],
        direction: [f32; 3],
        colors: LightColors,
        attenuation: Attenuation,
        inner_cutoff: Deg<f32>,
        outer_cutoff: Deg<f32>,
    ) -> Self {
        Self {
            position: position.into(),
            direction: direction.into(),
            colors,
            attenuation,
            inner_cutoff,
            outer_cutoff,
            active: true,
        }
    }
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            position: Vector3::zero(),
            direction: -Vector3::unit_y(),
            colors: LightColors::default(),
            attenuation: Attenuation::default(),
            inner_cutoff: Deg(0.0),
            outer_cutoff: Deg(0.0),
            active: false,
        }
    }
}

/// The complete light topology of a scene: one directional light, a list of
/// point lights and one spot light.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightSetup {
    pub use_lighting: bool,
    pub directional: DirectionalLight,
    pub point_lights: Vec<PointLight>,
    pub spot: SpotLight,
}
