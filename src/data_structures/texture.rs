//! Tagged texture registry.
//!
//! The registry owns every texture the scene loads, maps each tag to its GPU
//! handle, and assigns texture units by insertion order: the i-th texture
//! inserted is bound to unit i and is sampled through unit i when drawing.

use std::path::Path;

use crate::{
    error::{Result, SceneError},
    resources::{self, texture::DecodedImage},
};

/// Opaque identifier of a texture living in a [`TextureBackend`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureHandle(pub u32);

/// A registered texture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureEntry {
    pub tag: String,
    pub handle: TextureHandle,
}

/// GPU side of texture management.
///
/// Implemented by [`WgpuTextures`](crate::resources::texture::WgpuTextures)
/// and by test doubles.
pub trait TextureBackend {
    /// Creates a 2D texture with repeat wrapping, linear filtering and a full
    /// mip chain from `image`.
    fn upload(&mut self, image: &DecodedImage, label: &str) -> anyhow::Result<TextureHandle>;

    /// Makes `handle` the texture sampled through `unit`.
    fn bind(&mut self, unit: u32, handle: TextureHandle);

    /// Frees the GPU memory behind `handle`. The handle must not be used again.
    fn release(&mut self, handle: TextureHandle);
}

#[derive(Debug)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
    max_units: usize,
    bound: usize,
}

impl TextureRegistry {
    pub fn new(max_units: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_units,
            bound: 0,
        }
    }

    fn check_free_slot(&self, tag: &str) -> Result<()> {
        if self.entries.iter().any(|entry| entry.tag == tag) {
            return Err(SceneError::DuplicateTexture(tag.to_string()));
        }
        if self.entries.len() >= self.max_units {
            return Err(SceneError::TextureUnitsExhausted {
                max: self.max_units,
            });
        }
        Ok(())
    }

    /// Reads, decodes and uploads the image at `path`, then registers it under
    /// `tag`. Returns the texture unit the texture will be bound to.
    ///
    /// On any failure the registry is left as it was.
    pub fn load_texture(
        &mut self,
        backend: &mut dyn TextureBackend,
        path: &Path,
        tag: &str,
        flip_vertically: bool,
    ) -> Result<u32> {
        self.check_free_slot(tag)?;
        let bytes = resources::load_binary(path)?;
        let label = path.display().to_string();
        let image = DecodedImage::from_bytes(&bytes, &label, flip_vertically)?;
        self.insert(backend, &image, tag)
    }

    /// Uploads an already decoded image and registers it under `tag`.
    pub fn insert(
        &mut self,
        backend: &mut dyn TextureBackend,
        image: &DecodedImage,
        tag: &str,
    ) -> Result<u32> {
        self.check_free_slot(tag)?;
        let handle = backend.upload(image, tag)?;
        let unit = self.entries.len() as u32;
        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            handle,
        });
        log::info!(
            "loaded texture {tag:?}: {}x{}, {} channels, unit {unit}",
            image.width,
            image.height,
            image.channels.count(),
        );
        Ok(unit)
    }

    /// Binds every registered texture to consecutive units starting at 0, in
    /// insertion order. Returns the number of units bound.
    pub fn bind_all(&mut self, backend: &mut dyn TextureBackend) -> usize {
        for (unit, entry) in self.entries.iter().enumerate() {
            backend.bind(unit as u32, entry.handle);
        }
        self.bound = self.entries.len();
        log::debug!("bound {} texture units", self.bound);
        self.bound
    }

    pub fn find_handle(&self, tag: &str) -> Option<TextureHandle> {
        self.entries
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| entry.handle)
    }

    pub fn find_unit(&self, tag: &str) -> Option<u32> {
        self.entries
            .iter()
            .position(|entry| entry.tag == tag)
            .map(|unit| unit as u32)
    }

    /// Whether `unit` received its texture in the last [`bind_all`](Self::bind_all).
    pub fn is_bound(&self, unit: u32) -> bool {
        (unit as usize) < self.bound
    }

    pub fn entries(&self) -> &[TextureEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_units(&self) -> usize {
        self.max_units
    }

    /// Releases every texture through the backend and empties the registry.
    ///
    /// Calling it again releases nothing. Returns the number of textures freed.
    pub fn release_all(&mut self, backend: &mut dyn TextureBackend) -> usize {
        let released = self.entries.len();
        for entry in self.entries.drain(..) {
            backend.release(entry.handle);
        }
        self.bound = 0;
        if released > 0 {
            log::info!("released {released} textures");
        } else {
            log::debug!("texture registry already empty, nothing to release");
        }
        released
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new(crate::config::SceneConfig::DEFAULT_TEXTURE_UNITS)
    }
}
