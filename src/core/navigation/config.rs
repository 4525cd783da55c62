//=========================================================================
// Navigation Config
//=========================================================================
//
// Externally configured key sets and wrap-around policy for a
// navigable container.
//
// Sources:
//   NavigationConfig::default()       → arrow keys + gamepad d-pad
//   NavigationConfig::new().with_*()  → fluent construction
//   NavigationConfig::from_toml_str() → host config files
//   NavigationConfig::to_toml_string() → writes them back
//
// TOML shape:
// ```toml
// wrap_around = true
// next_keys = [{ key = "ArrowDown" }, { key = "Tab" }]
// previous_keys = [{ key = "ArrowUp" }, { key = "Tab", modifiers = { shift = true } }]
// confirm_keys = [{ key = "Enter" }]
// ```
//
//=========================================================================

//=== External Crates =====================================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::{KeyCode, KeyMapping, NavigationAction};

//=== ConfigError =========================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid navigation config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot write navigation config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("{mapping:?} is bound to both {first:?} and {second:?}")]
    ConflictingMapping {
        mapping: KeyMapping,
        first: NavigationAction,
        second: NavigationAction,
    },
}

//=== NavigationConfig ====================================================

/// Key sets and wrap-around policy for one navigable container.
///
/// # Default Values
///
/// - **next**: ArrowDown, GamepadDPadDown
/// - **previous**: ArrowUp, GamepadDPadUp
/// - **confirm**: Enter, GamepadFaceBottom
/// - **wrap_around**: false
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Traversal cycles from last to first and first to last.
    pub wrap_around: bool,

    /// Bound on press and repeat to the next-handler.
    pub next_keys: Vec<KeyMapping>,

    /// Bound on press and repeat to the previous-handler.
    pub previous_keys: Vec<KeyMapping>,

    /// Bound on press only to the confirm-handler.
    pub confirm_keys: Vec<KeyMapping>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            next_keys: vec![
                KeyMapping::new(KeyCode::ArrowDown),
                KeyMapping::new(KeyCode::GamepadDPadDown),
            ],
            previous_keys: vec![
                KeyMapping::new(KeyCode::ArrowUp),
                KeyMapping::new(KeyCode::GamepadDPadUp),
            ],
            confirm_keys: vec![
                KeyMapping::new(KeyCode::Enter),
                KeyMapping::new(KeyCode::GamepadFaceBottom),
            ],
            wrap_around: false,
        }
    }
}

impl NavigationConfig {
    /// Empty key sets, wrap-around disabled.
    pub fn new() -> Self {
        Self {
            next_keys: Vec::new(),
            previous_keys: Vec::new(),
            confirm_keys: Vec::new(),
            wrap_around: false,
        }
    }

    //--- Fluent Construction ----------------------------------------------

    pub fn with_next_key(mut self, mapping: impl Into<KeyMapping>) -> Self {
        self.next_keys.push(mapping.into());
        self
    }

    pub fn with_previous_key(mut self, mapping: impl Into<KeyMapping>) -> Self {
        self.previous_keys.push(mapping.into());
        self
    }

    pub fn with_confirm_key(mut self, mapping: impl Into<KeyMapping>) -> Self {
        self.confirm_keys.push(mapping.into());
        self
    }

    pub fn with_wrap_around(mut self, enabled: bool) -> Self {
        self.wrap_around = enabled;
        self
    }

    //--- Loading ----------------------------------------------------------

    /// Parses and validates a TOML document. Missing fields take their
    /// default values.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the config as TOML that `from_toml_str` reads back unchanged.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Rejects a mapping that appears in more than one key set.
    ///
    /// Next and previous share phases, so a shared mapping would make one
    /// of them unreachable. Confirm only binds on press but still clashes
    /// with the press binding of the other two.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sets = [
            (NavigationAction::Next, &self.next_keys),
            (NavigationAction::Previous, &self.previous_keys),
            (NavigationAction::Confirm, &self.confirm_keys),
        ];

        for (i, (first, keys)) in sets.iter().enumerate() {
            for (second, other_keys) in sets.iter().skip(i + 1) {
                if let Some(mapping) = keys.iter().find(|m| other_keys.contains(m)) {
                    return Err(ConfigError::ConflictingMapping {
                        mapping: *mapping,
                        first: *first,
                        second: *second,
                    });
                }
            }
        }

        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
