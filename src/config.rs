//! Widget configuration, shared through Dioxus context

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::NavResult;

/// Timeout applied when the configuration doesn't name one (ms).
pub const DEFAULT_TIMEOUT_MS: u64 = 500;

/// Class-name prefix used by the main dropdown panel.
pub const DEFAULT_CLASS_NAMES: &str = "menu-primary";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub transition: TransitionConfig,
}

impl NavbarConfig {
    /// Decode a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(source: &str) -> NavResult<Self> {
        Ok(serde_json::from_str(source)?)
    }
}

/// Options for a CSS-class driven transition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Length of the enter/exit window in milliseconds
    pub timeout_ms: u64,
    /// Prefix for the generated `-enter`/`-exit` classes
    pub class_names: String,
    /// Run the enter transition when the element is shown at mount
    pub appear: bool,
    /// Drop the element from the output once it has exited
    pub unmount_on_exit: bool,
}

impl TransitionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            class_names: DEFAULT_CLASS_NAMES.to_string(),
            appear: false,
            unmount_on_exit: true,
        }
    }
}
