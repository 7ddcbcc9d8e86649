//! Shader-facing state: the uniform interface, the GPU layout of the object
//! and light uniform blocks, and the buffers they are uploaded into.
//!
//! - `shader` defines the [`ShaderUniforms`] interface and the uniform names
//! - `object` is the per-draw block (model matrix, color, texture, material)
//! - `light` is the light block and the one-shot light configuration
//!
//! [`UniformState`] is a retained CPU mirror of both blocks that implements
//! [`ShaderUniforms`], and [`UniformBuffers`] uploads it with wgpu.

use std::collections::HashSet;

use cgmath::{Matrix4, Vector2, Vector3, Vector4};
use wgpu::util::DeviceExt;

pub mod light;
pub mod object;
pub mod shader;

use light::LightsUniform;
use object::ObjectUniform;
use shader::{ShaderUniforms, UniformValue};

/// CPU copy of every uniform the scene writes.
#[derive(Clone, Debug, Default)]
pub struct UniformState {
    pub object: ObjectUniform,
    pub lights: LightsUniform,
    rejected: HashSet<String>,
}

impl UniformState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes a value to the block that owns `name`. Unknown names are
    /// logged once and otherwise ignored, as a GPU program ignores a
    /// uniform location it does not have.
    pub fn apply(&mut self, name: &str, value: UniformValue) -> bool {
        let accepted = self.lights.apply(name, value) || self.object.apply(name, value);
        if !accepted && self.rejected.insert(name.to_string()) {
            log::warn!("shader has no uniform {name:?} accepting {value:?}");
        }
        accepted
    }

    /// Uniform names that were written but matched no field.
    pub fn rejected(&self) -> impl Iterator<Item = &str> {
        self.rejected.iter().map(String::as_str)
    }
}

impl ShaderUniforms for UniformState {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.apply(name, UniformValue::Bool(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.apply(name, UniformValue::Int(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.apply(name, UniformValue::Float(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        self.apply(name, UniformValue::Vec2(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        self.apply(name, UniformValue::Vec3(value));
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        self.apply(name, UniformValue::Vec4(value));
    }

    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        self.apply(name, UniformValue::Mat4(value));
    }

    fn set_sampler(&mut self, name: &str, unit: i32) {
        self.apply(name, UniformValue::Sampler(unit));
    }
}

/// GPU buffers backing the object and light uniform blocks.
pub struct UniformBuffers {
    pub object: wgpu::Buffer,
    pub lights: wgpu::Buffer,
    pub bind_group_layout: wgpu::BindGroupLayout,
    pub bind_group: wgpu::BindGroup,
}

impl UniformBuffers {
    pub fn new(device: &wgpu::Device, state: &UniformState) -> Self {
        let object = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Object Uniform Buffer"),
            contents: bytemuck::cast_slice(&[state.object]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let lights = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Light Uniform Buffer"),
            contents: bytemuck::cast_slice(&[state.lights]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group_layout = mk_bind_group_layout(device);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: object.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: lights.as_entire_binding(),
                },
            ],
            label: Some("uniform_bind_group"),
        });
        Self {
            object,
            lights,
            bind_group_layout,
            bind_group,
        }
    }

    /// Copies the current object block. Call once per draw, before the draw
    /// is encoded.
    pub fn write_object(&self, queue: &wgpu::Queue, state: &UniformState) {
        queue.write_buffer(&self.object, 0, bytemuck::cast_slice(&[state.object]));
    }

    pub fn write_lights(&self, queue: &wgpu::Queue, state: &UniformState) {
        queue.write_buffer(&self.lights, 0, bytemuck::cast_slice(&[state.lights]));
    }
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    let uniform = |binding| wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    };
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[uniform(0), uniform(1)],
        label: Some("uniform_bind_group_layout"),
    })
}
