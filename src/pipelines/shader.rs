//! The named-uniform interface the scene layer talks to.
//!
//! The scene never compiles or links shaders itself. It only pushes values by
//! name through [`ShaderUniforms`], which can be backed by a real GPU program,
//! by [`UniformState`](super::UniformState) or by a recording test double.

use cgmath::{Matrix4, Vector2, Vector3, Vector4};

pub const MODEL: &str = "model";
pub const OBJECT_COLOR: &str = "objectColor";
pub const OBJECT_TEXTURE: &str = "objectTexture";
pub const USE_TEXTURE: &str = "bUseTexture";
pub const USE_LIGHTING: &str = "bUseLighting";
pub const UV_SCALE: &str = "UVscale";
pub const MATERIAL_DIFFUSE: &str = "material.diffuseColor";
pub const MATERIAL_SPECULAR: &str = "material.specularColor";
pub const MATERIAL_SHININESS: &str = "material.shininess";

/// Setters for named shader uniforms.
///
/// Values hold until they are set again, so a draw sees whatever was written
/// last before it.
pub trait ShaderUniforms {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_int(&mut self, name: &str, value: i32);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_vec2(&mut self, name: &str, value: Vector2<f32>);
    fn set_vec3(&mut self, name: &str, value: Vector3<f32>);
    fn set_vec4(&mut self, name: &str, value: Vector4<f32>);
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>);
    /// Points a sampler uniform at a texture unit.
    fn set_sampler(&mut self, name: &str, unit: i32);
}

/// A single uniform value of any supported type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2(Vector2<f32>),
    Vec3(Vector3<f32>),
    Vec4(Vector4<f32>),
    Mat4(Matrix4<f32>),
    Sampler(i32),
}

impl UniformValue {
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            UniformValue::Bool(v) => Some(v),
            UniformValue::Int(v) => Some(v != 0),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match *self {
            UniformValue::Int(v) | UniformValue::Sampler(v) => Some(v),
            UniformValue::Bool(v) => Some(v as i32),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match *self {
            UniformValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vec2(&self) -> Option<[f32; 2]> {
        match *self {
            UniformValue::Vec2(v) => Some(v.into()),
            _ => None,
        }
    }

    pub fn as_vec3(&self) -> Option<[f32; 3]> {
        match *self {
            UniformValue::Vec3(v) => Some(v.into()),
            _ => None,
        }
    }

    pub fn as_vec4(&self) -> Option<[f32; 4]> {
        match *self {
            UniformValue::Vec4(v) => Some(v.into()),
            _ => None,
        }
    }

    pub fn as_mat4(&self) -> Option<[[f32; 4]; 4]> {
        match *self {
            UniformValue::Mat4(v) => Some(v.into()),
            _ => None,
        }
    }
}
