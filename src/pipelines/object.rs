use cgmath::{Matrix4, SquareMatrix};

use crate::pipelines::shader::{self, UniformValue};

/// Per-draw values as they are laid out in the object uniform buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub uv_scale: [f32; 2],
    pub use_texture: u32,
    pub texture_unit: i32,
    pub diffuse: [f32; 3],
    pub shininess: f32,
    pub specular: [f32; 3],
    // Uniforms need 16 byte alignment, pad the block to 128 bytes
    _padding: u32,
}

impl ObjectUniform {
    pub fn new() -> Self {
        Self {
            model: Matrix4::identity().into(),
            color: [1.0; 4],
            uv_scale: [1.0, 1.0],
            use_texture: 0,
            texture_unit: 0,
            diffuse: [0.0; 3],
            shininess: 0.0,
            specular: [0.0; 3],
            _padding: 0,
        }
    }

    /// Writes `value` into the field named `name`.
    ///
    /// Returns `false` if the name is not part of this block or the value has
    /// the wrong type for it.
    pub fn apply(&mut self, name: &str, value: UniformValue) -> bool {
        match name {
            shader::MODEL => value.as_mat4().map(|m| self.model = m),
            shader::OBJECT_COLOR => value.as_vec4().map(|c| self.color = c),
            shader::UV_SCALE => value.as_vec2().map(|uv| self.uv_scale = uv),
            shader::USE_TEXTURE => value.as_bool().map(|b| self.use_texture = b as u32),
            shader::OBJECT_TEXTURE => value.as_int().map(|unit| self.texture_unit = unit),
            shader::MATERIAL_DIFFUSE => value.as_vec3().map(|d| self.diffuse = d),
            shader::MATERIAL_SPECULAR => value.as_vec3().map(|s| self.specular = s),
            shader::MATERIAL_SHININESS => value.as_float().map(|s| self.shininess = s),
            _ => None,
        }
        .is_some()
    }
}

impl Default for ObjectUniform {
    fn default() -> Self {
        Self::new()
    }
}
