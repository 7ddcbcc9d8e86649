//! Scene lifecycle.
//!
//! A [`SceneManager`] goes through two phases:
//!
//! 1. [`prepare`](SceneManager::prepare), exactly once: load and bind the
//!    textures, define the materials, write the lights and load every mesh
//!    kind the scene uses
//! 2. [`render`](SceneManager::render), once per frame: dispatch every draw
//!    descriptor in order
//!
//! [`teardown`](SceneManager::teardown) releases the GPU textures and ends
//! the scene. It can be called any number of times.

use std::fmt;

use crate::{
    config::SceneConfig,
    context::Context,
    data_structures::{
        material::MaterialRegistry, scene::SceneDescription, texture::TextureBackend,
        texture::TextureRegistry,
    },
    error::{Result, SceneError},
    pipelines::light::configure_lights,
    render::{Dispatcher, Lookup, MissLog},
    resources::{self, mesh::MeshKind},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Prepared,
    Released,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Phase {
    fn name(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Prepared => "prepared",
            Phase::Released => "released",
        }
    }
}

/// What [`SceneManager::prepare`] did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrepareReport {
    pub textures_loaded: usize,
    /// Tags of textures skipped in lenient mode.
    pub textures_failed: Vec<String>,
    pub materials_defined: usize,
    /// Tags of materials rejected in lenient mode.
    pub materials_rejected: Vec<String>,
    pub meshes_loaded: Vec<MeshKind>,
}

/// What a single [`SceneManager::render`] drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub draws: usize,
    pub texture_misses: usize,
    pub material_misses: usize,
}

impl FrameReport {
    pub fn is_clean(&self) -> bool {
        self.texture_misses == 0 && self.material_misses == 0
    }
}

pub struct SceneManager {
    config: SceneConfig,
    description: SceneDescription,
    textures: TextureRegistry,
    materials: MaterialRegistry,
    loaded_meshes: Vec<MeshKind>,
    misses: MissLog,
    phase: Phase,
}

impl SceneManager {
    pub fn new(description: SceneDescription, config: SceneConfig) -> Self {
        let textures = TextureRegistry::new(config.max_texture_units);
        Self {
            config,
            description,
            textures,
            materials: MaterialRegistry::new(),
            loaded_meshes: Vec::new(),
            misses: MissLog::new(),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn description(&self) -> &SceneDescription {
        &self.description
    }

    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    pub fn loaded_meshes(&self) -> &[MeshKind] {
        &self.loaded_meshes
    }

    /// Tags that failed to resolve during rendering so far.
    pub fn misses(&self) -> &MissLog {
        &self.misses
    }

    pub fn dispatcher(&self) -> Dispatcher<'_> {
        Dispatcher::new(&self.textures, &self.materials, &self.config).with_miss_log(&self.misses)
    }

    fn expect_phase(&self, expected: Phase, operation: &'static str) -> Result<()> {
        if self.phase != expected {
            return Err(SceneError::Phase {
                operation,
                phase: self.phase.name(),
            });
        }
        Ok(())
    }

    /// Loads everything the scene needs. Only allowed once, on an idle scene.
    ///
    /// If preparation fails, the textures loaded so far are released again and
    /// the scene stays idle.
    pub fn prepare(&mut self, ctx: &mut Context) -> Result<PrepareReport> {
        self.expect_phase(Phase::Idle, "prepare")?;
        self.misses.clear();
        match self.prepare_resources(ctx) {
            Ok(report) => {
                self.phase = Phase::Prepared;
                log::info!(
                    "scene prepared: {} textures, {} materials, {} mesh kinds, {} objects",
                    report.textures_loaded,
                    report.materials_defined,
                    report.meshes_loaded.len(),
                    self.description.objects.len(),
                );
                Ok(report)
            }
            Err(e) => {
                self.textures.release_all(ctx.textures);
                self.materials = MaterialRegistry::new();
                Err(e)
            }
        }
    }

    fn prepare_resources(&mut self, ctx: &mut Context) -> Result<PrepareReport> {
        let strict = self.config.lookup_policy.is_strict();
        let mut report = PrepareReport::default();

        for source in &self.description.textures {
            let path = resources::resolve_asset(&self.config.asset_root, &source.path);
            match self.textures.load_texture(
                ctx.textures,
                &path,
                &source.tag,
                self.config.flip_vertically,
            ) {
                Ok(_) => report.textures_loaded += 1,
                Err(e) if strict => return Err(e),
                Err(e) => {
                    log::warn!("skipping texture {:?}: {}", source.tag, e);
                    report.textures_failed.push(source.tag.clone());
                }
            }
        }
        self.textures.bind_all(ctx.textures);

        for (tag, material) in &self.description.materials {
            match self.materials.define(tag, *material) {
                Ok(()) => report.materials_defined += 1,
                Err(e) if strict => return Err(e),
                Err(e) => {
                    log::warn!("skipping material {tag:?}: {e}");
                    report.materials_rejected.push(tag.clone());
                }
            }
        }

        if strict {
            self.validate()?;
        }

        configure_lights(&self.description.lights, ctx.shader)?;

        for kind in self.description.mesh_kinds() {
            if !self.loaded_meshes.contains(&kind) {
                ctx.meshes.load(kind);
                self.loaded_meshes.push(kind);
                report.meshes_loaded.push(kind);
            }
        }

        Ok(report)
    }

    /// Checks that every tag a draw descriptor uses resolves.
    pub fn validate(&self) -> Result<()> {
        for object in &self.description.objects {
            if let Some(tag) = object.texture_tag()
                && self.textures.find_unit(tag).is_none()
            {
                return Err(SceneError::UnknownTexture(tag.to_string()));
            }
            if let Some(tag) = &object.material
                && !self.materials.is_empty()
                && !self.materials.contains(tag)
            {
                return Err(SceneError::UnknownMaterial(tag.clone()));
            }
        }
        Ok(())
    }

    /// Draws every object of the scene, in order. Registries are not touched.
    pub fn render(&self, ctx: &mut Context) -> Result<FrameReport> {
        self.expect_phase(Phase::Prepared, "render")?;
        let dispatcher = self.dispatcher();
        let mut report = FrameReport::default();
        for object in &self.description.objects {
            let outcome = dispatcher.draw(ctx, object)?;
            report.draws += 1;
            if outcome.texture == Lookup::Missing {
                report.texture_misses += 1;
            }
            if outcome.material == Lookup::Missing {
                report.material_misses += 1;
            }
        }
        log::debug!("rendered frame: {report:?}");
        Ok(report)
    }

    /// Releases every texture and ends the scene. Returns the number of
    /// textures released by this call.
    pub fn teardown(&mut self, textures: &mut dyn TextureBackend) -> usize {
        let released = self.textures.release_all(textures);
        if self.phase != Phase::Released {
            log::info!("scene released ({released} textures)");
        }
        self.phase = Phase::Released;
        released
    }
}
