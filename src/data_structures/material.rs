use std::collections::HashMap;

use cgmath::Vector3;

use crate::error::{Result, SceneError};

/// Phong lighting preset applied to a draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub shininess: f32,
}

impl Material {
    pub fn new(diffuse: [f32; 3], specular: [f32; 3], shininess: f32) -> Self {
        Self {
            diffuse: diffuse.into(),
            specular: specular.into(),
            shininess,
        }
    }
}

/// Materials by tag. Each tag can be defined once; definitions are immutable.
#[derive(Clone, Debug, Default)]
pub struct MaterialRegistry {
    materials: HashMap<String, Material>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a material. Redefining a tag or giving a negative or non-finite
    /// shininess is rejected and leaves the registry unchanged.
    pub fn define(&mut self, tag: &str, material: Material) -> Result<()> {
        if !material.shininess.is_finite() || material.shininess < 0.0 {
            return Err(SceneError::InvalidShininess {
                tag: tag.to_string(),
                shininess: material.shininess,
            });
        }
        if self.materials.contains_key(tag) {
            return Err(SceneError::DuplicateMaterial(tag.to_string()));
        }
        self.materials.insert(tag.to_string(), material);
        log::debug!("defined material {tag:?}");
        Ok(())
    }

    /// Returns a copy of the material tagged `tag`.
    pub fn lookup(&self, tag: &str) -> Option<Material> {
        self.materials.get(tag).copied()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.materials.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.materials.keys().map(String::as_str)
    }
}
