//! Error type shared by the registries, the dispatcher and the scene manager.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while preparing or rendering a scene.
///
/// Lookup misses only surface as errors under [`LookupPolicy::Strict`];
/// in lenient mode they are logged and reported through
/// [`Lookup::Missing`](crate::render::Lookup::Missing) instead.
///
/// [`LookupPolicy::Strict`]: crate::config::LookupPolicy::Strict
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode image {label}: {source}")]
    Decode {
        label: String,
        #[source]
        source: image::ImageError,
    },

    #[error("image {label} has {channels} channels, only RGB (3) and RGBA (4) are supported")]
    UnsupportedChannels { label: String, channels: u8 },

    #[error("a texture tagged {0:?} is already registered")]
    DuplicateTexture(String),

    #[error("all {max} texture units are in use")]
    TextureUnitsExhausted { max: usize },

    #[error("a material tagged {0:?} is already defined")]
    DuplicateMaterial(String),

    #[error("material {tag:?} has invalid shininess {shininess}")]
    InvalidShininess { tag: String, shininess: f32 },

    #[error("no texture is registered under tag {0:?}")]
    UnknownTexture(String),

    #[error("no material is defined under tag {0:?}")]
    UnknownMaterial(String),

    #[error("{count} point lights configured but the shader only has {max} slots")]
    TooManyPointLights { count: usize, max: usize },

    #[error("{operation} is not allowed while the scene is {phase}")]
    Phase {
        operation: &'static str,
        phase: &'static str,
    },

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

pub type Result<T, E = SceneError> = std::result::Result<T, E>;
