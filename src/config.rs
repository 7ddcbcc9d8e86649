//! Runtime configuration for scene preparation and draw dispatch.

use std::{path::PathBuf, str::FromStr};

/// How unresolved texture/material tags and failed image loads are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LookupPolicy {
    /// Log a warning and keep going with a degraded scene.
    #[default]
    Lenient,
    /// Fail the operation with a [`SceneError`](crate::error::SceneError).
    Strict,
}

impl LookupPolicy {
    pub fn is_strict(self) -> bool {
        matches!(self, LookupPolicy::Strict)
    }
}

impl FromStr for LookupPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(LookupPolicy::Lenient),
            "strict" => Ok(LookupPolicy::Strict),
            other => Err(format!("unknown lookup policy {other:?}, expected strict or lenient")),
        }
    }
}

/// Scene-wide settings.
///
/// Built with [`SceneConfig::default`] and adjusted with the `with_*`
/// methods, or read from the environment with [`SceneConfig::from_env`].
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub lookup_policy: LookupPolicy,
    /// Number of texture units the target hardware exposes.
    pub max_texture_units: usize,
    /// Flip decoded images so the first row is the bottom of the texture.
    pub flip_vertically: bool,
    /// Directory relative texture paths are resolved against.
    pub asset_root: PathBuf,
    /// Drawn instead of a texture whose tag could not be resolved.
    pub missing_texture_color: [f32; 4],
}

impl SceneConfig {
    pub const DEFAULT_TEXTURE_UNITS: usize = 16;
    pub const POLICY_VAR: &'static str = "SCENE_LOOKUP_POLICY";
    pub const ASSET_ROOT_VAR: &'static str = "SCENE_ASSET_ROOT";

    /// Defaults overridden by `SCENE_LOOKUP_POLICY` and `SCENE_ASSET_ROOT`.
    ///
    /// An unparsable policy value is logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(Self::POLICY_VAR) {
            match value.parse() {
                Ok(policy) => config.lookup_policy = policy,
                Err(e) => log::warn!("ignoring {}: {}", Self::POLICY_VAR, e),
            }
        }
        if let Ok(root) = std::env::var(Self::ASSET_ROOT_VAR) {
            config.asset_root = PathBuf::from(root);
        }
        config
    }

    pub fn with_lookup_policy(mut self, policy: LookupPolicy) -> Self {
        self.lookup_policy = policy;
        self
    }

    pub fn with_max_texture_units(mut self, units: usize) -> Self {
        self.max_texture_units = units;
        self
    }

    pub fn with_flip_vertically(mut self, flip: bool) -> Self {
        self.flip_vertically = flip;
        self
    }

    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    pub fn with_missing_texture_color(mut self, color: [f32; 4]) -> Self {
        self.missing_texture_color = color;
        self
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            lookup_policy: LookupPolicy::Lenient,
            max_texture_units: Self::DEFAULT_TEXTURE_UNITS,
            flip_vertically: true,
            asset_root: PathBuf::from("./assets"),
            missing_texture_color: [1.0, 0.0, 1.0, 1.0],
        }
    }
}
