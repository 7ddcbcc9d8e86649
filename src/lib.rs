//! scene-ngin
//!
//! Scene composition and shader-state management for static scenes built from
//! primitive meshes (planes, boxes, cylinders, spheres). The crate keeps track
//! of loaded textures and materials, computes model transforms and pushes the
//! per-draw uniform values into a shader program it does not own.
//!
//! High-level modules
//! - `config`: scene-wide settings such as the tag lookup policy
//! - `context`: the session object bundling shader, meshes and texture backend
//! - `data_structures`: registries, transforms, lights and scene descriptions
//! - `pipelines`: the shader uniform interface and GPU uniform layouts
//! - `resources`: image decoding, the wgpu texture backend, mesh interface
//! - `render`: per-draw shader state dispatch
//! - `scene`: the two-phase prepare/render lifecycle
//! - `reference`: the street-corner reference scene as data
//!

pub mod config;
pub mod context;
pub mod data_structures;
pub mod error;
pub mod logging;
pub mod pipelines;
pub mod reference;
pub mod render;
pub mod resources;
pub mod scene;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath;
pub use config::{LookupPolicy, SceneConfig};
pub use context::Context;
pub use error::SceneError;
pub use scene::SceneManager;
