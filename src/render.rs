//! Per-draw shader state.
//!
//! The [`Dispatcher`] turns a draw's transform, surface and material into
//! uniform writes just before the draw call. Uniform values stay in the
//! shader until overwritten, so every draw has to set what it relies on:
//!
//! - [`Dispatcher::set_transformations`] writes `model`
//! - [`Dispatcher::set_texture`] and [`Dispatcher::set_solid_color`] decide
//!   between texture sampling and a flat color; the later call wins
//! - [`Dispatcher::set_uv_scale`] writes `UVscale`
//! - [`Dispatcher::set_material`] writes the `material.*` block
//!

use std::{cell::RefCell, collections::HashSet};

use cgmath::{Matrix4, Vector2, Vector4};

use crate::{
    config::{LookupPolicy, SceneConfig},
    context::Context,
    data_structures::{
        material::MaterialRegistry,
        scene::{DrawDescriptor, Surface},
        texture::TextureRegistry,
        transform::Transform,
    },
    error::{Result, SceneError},
    pipelines::shader::{self, ShaderUniforms},
};

/// What happened to a tag lookup during dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// The tag resolved and its values were written.
    Found,
    /// The tag did not resolve; a fallback (or nothing) was written.
    Missing,
    /// Nothing to look up in, nothing was written.
    Skipped,
}

/// Lookup results of a single draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawOutcome {
    pub texture: Lookup,
    pub material: Lookup,
}

/// Tags that already produced a lenient-mode warning.
///
/// A missing tag is usually drawn every frame; only its first miss is a
/// warning, later ones are logged at debug level.
#[derive(Debug, Default)]
pub struct MissLog {
    textures: RefCell<HashSet<String>>,
    materials: RefCell<HashSet<String>>,
}

impl MissLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a texture miss. Returns `true` the first time `tag` misses.
    pub fn note_texture(&self, tag: &str) -> bool {
        self.textures.borrow_mut().insert(tag.to_string())
    }

    /// Records a material miss. Returns `true` the first time `tag` misses.
    pub fn note_material(&self, tag: &str) -> bool {
        self.materials.borrow_mut().insert(tag.to_string())
    }

    pub fn missing_textures(&self) -> Vec<String> {
        let mut tags: Vec<_> = self.textures.borrow().iter().cloned().collect();
        tags.sort();
        tags
    }

    pub fn missing_materials(&self) -> Vec<String> {
        let mut tags: Vec<_> = self.materials.borrow().iter().cloned().collect();
        tags.sort();
        tags
    }

    pub fn clear(&self) {
        self.textures.borrow_mut().clear();
        self.materials.borrow_mut().clear();
    }
}

pub struct Dispatcher<'a> {
    textures: &'a TextureRegistry,
    materials: &'a MaterialRegistry,
    policy: LookupPolicy,
    missing_texture_color: [f32; 4],
    shared_misses: Option<&'a MissLog>,
    own_misses: MissLog,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        textures: &'a TextureRegistry,
        materials: &'a MaterialRegistry,
        config: &SceneConfig,
    ) -> Self {
        Self {
            textures,
            materials,
            policy: config.lookup_policy,
            missing_texture_color: config.missing_texture_color,
            shared_misses: None,
            own_misses: MissLog::new(),
        }
    }

    /// Records misses in `misses`, so repeated warnings are suppressed across
    /// dispatchers (e.g. one per frame).
    pub fn with_miss_log(mut self, misses: &'a MissLog) -> Self {
        self.shared_misses = Some(misses);
        self
    }

    pub fn misses(&self) -> &MissLog {
        self.shared_misses.unwrap_or(&self.own_misses)
    }

    pub fn push_model_matrix(&self, shader: &mut dyn ShaderUniforms, model: Matrix4<f32>) {
        shader.set_mat4(shader::MODEL, model);
    }

    pub fn set_transformations(&self, shader: &mut dyn ShaderUniforms, transform: &Transform) {
        self.push_model_matrix(shader, transform.to_matrix());
    }

    /// Disables texture sampling and sets a flat RGBA color.
    pub fn set_solid_color(&self, shader: &mut dyn ShaderUniforms, color: [f32; 4]) {
        shader.set_bool(shader::USE_TEXTURE, false);
        shader.set_vec4(shader::OBJECT_COLOR, Vector4::from(color));
    }

    /// Enables texture sampling from the unit the texture tagged `tag` is
    /// bound to.
    ///
    /// An unknown tag never reaches the sampler: strict mode fails without
    /// writing anything, lenient mode draws `missing_texture_color` instead.
    pub fn set_texture(&self, shader: &mut dyn ShaderUniforms, tag: &str) -> Result<Lookup> {
        let Some(unit) = self.textures.find_unit(tag) else {
            if self.policy.is_strict() {
                return Err(SceneError::UnknownTexture(tag.to_string()));
            }
            if self.misses().note_texture(tag) {
                log::warn!("texture {tag:?} is not registered, drawing a solid color instead");
            } else {
                log::debug!("texture {tag:?} still missing");
            }
            self.set_solid_color(shader, self.missing_texture_color);
            return Ok(Lookup::Missing);
        };
        if !self.textures.is_bound(unit) {
            log::warn!("texture {tag:?} was registered after the units were bound");
        }
        shader.set_bool(shader::USE_TEXTURE, true);
        shader.set_sampler(shader::OBJECT_TEXTURE, unit as i32);
        Ok(Lookup::Found)
    }

    pub fn set_uv_scale(&self, shader: &mut dyn ShaderUniforms, u: f32, v: f32) {
        shader.set_vec2(shader::UV_SCALE, Vector2::new(u, v));
    }

    /// Writes the material tagged `tag`.
    ///
    /// With no materials defined at all this writes nothing. An unknown tag
    /// also writes nothing; strict mode reports it as an error.
    pub fn set_material(&self, shader: &mut dyn ShaderUniforms, tag: &str) -> Result<Lookup> {
        if self.materials.is_empty() {
            return Ok(Lookup::Skipped);
        }
        match self.materials.lookup(tag) {
            Some(material) => {
                shader.set_vec3(shader::MATERIAL_DIFFUSE, material.diffuse);
                shader.set_vec3(shader::MATERIAL_SPECULAR, material.specular);
                shader.set_float(shader::MATERIAL_SHININESS, material.shininess);
                Ok(Lookup::Found)
            }
            None if self.policy.is_strict() => Err(SceneError::UnknownMaterial(tag.to_string())),
            None => {
                if self.misses().note_material(tag) {
                    log::warn!("material {tag:?} is not defined, keeping the previous material");
                } else {
                    log::debug!("material {tag:?} still missing");
                }
                Ok(Lookup::Missing)
            }
        }
    }

    /// Sets up and issues one draw: transform, surface, UV scale, material,
    /// then the draw call.
    pub fn draw(&self, ctx: &mut Context, object: &DrawDescriptor) -> Result<DrawOutcome> {
        self.set_transformations(ctx.shader, &object.transform);
        let texture = match &object.surface {
            Surface::Texture(tag) => self.set_texture(ctx.shader, tag)?,
            Surface::Color(color) => {
                self.set_solid_color(ctx.shader, *color);
                Lookup::Skipped
            }
        };
        let [u, v] = object.uv_scale;
        self.set_uv_scale(ctx.shader, u, v);
        let material = match &object.material {
            Some(tag) => self.set_material(ctx.shader, tag)?,
            None => Lookup::Skipped,
        };
        ctx.meshes.draw(object.mesh);
        Ok(DrawOutcome { texture, material })
    }
}
