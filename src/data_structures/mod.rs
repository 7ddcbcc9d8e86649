//! Scene data structures: registries, transforms, lights and draw descriptors.
//!
//! - `texture` holds the tagged texture registry and the texture backend trait
//! - `material` holds material presets looked up by tag
//! - `transform` composes model matrices from scale, rotation and translation
//! - `light` describes the directional, point and spot lights of a scene
//! - `scene` is the declarative description of a whole scene

pub mod light;
pub mod material;
pub mod scene;
pub mod texture;
pub mod transform;
