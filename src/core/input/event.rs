//=========================================================================
// Input Event Types
//
// Defines the engine-independent representation of keyboard and gamepad
// input used by navigable containers.
//
// Responsibilities:
// - Represent physical keys in a stable, portable way
// - Carry modifier state (Shift, Ctrl, Alt) with every key event
// - Distinguish the three event phases: pressed, repeat, released
// - Describe configured key mappings (key + modifiers)
//
// Event Flow:
// ```text
// Platform Layer (winit, host engine)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputComponent::resolve (binding lookup)
//         ↓
//    NavigationAction (next / previous / confirm)
// ```
//
//=========================================================================

//=== External Crates =====================================================

use serde::{Deserialize, Serialize};

//=== KeyCode =============================================================

/// Physical key identifier.
///
/// Represents the physical key location, not the character produced.
/// `KeyW` is the same physical key on QWERTY and AZERTY layouts.
///
/// Coverage:
/// - Alphanumeric keys (A-Z, 0-9)
/// - Arrow keys
/// - Common special keys (Space, Enter, Escape, etc.)
/// - Gamepad directional pad and face buttons
///
/// Gamepad variants are never produced by the winit adapter; hosts with a
/// gamepad backend report them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    /// Directional navigation keys
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    /// Spacebar
    Space,

    /// Return/Enter key
    Enter,

    /// Escape key
    Escape,

    /// Tab key
    Tab,

    /// Backspace key
    Backspace,

    /// Delete key
    Delete,

    //--- Gamepad ----------------------------------------------------------

    /// Directional pad
    GamepadDPadUp,
    GamepadDPadDown,
    GamepadDPadLeft,
    GamepadDPadRight,

    /// Bottom face button (A on Xbox layouts, Cross on PlayStation)
    GamepadFaceBottom,

    /// Right face button (B on Xbox layouts, Circle on PlayStation)
    GamepadFaceRight,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt).
///
/// Modifiers must match exactly for a binding to trigger:
/// - Binding `Ctrl+S` will NOT match `Ctrl+Shift+S`
/// - Binding `S` will NOT match `Ctrl+S`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key held (either left or right).
    pub shift: bool,

    /// Ctrl key held (either left or right, Command on macOS).
    pub ctrl: bool,

    /// Alt key held (either left or right, Option on macOS).
    pub alt: bool,
}

//--- Modifier Constants --------------------------------------------------

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };

    /// Shift only.
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };

    /// Ctrl only.
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false };

    /// Alt only.
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true };
}

//=== InputPhase ==========================================================

/// Phase of a key event.
///
/// `Repeat` is emitted by the platform while a key is held down after the
/// initial `Pressed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputPhase {
    Pressed,
    Repeat,
    Released,
}

//=== KeyMapping ==========================================================

/// A configured key plus the exact modifier state it requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyMapping {
    pub key: KeyCode,

    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyMapping {
    /// Mapping for a key with no modifiers.
    pub const fn new(key: KeyCode) -> Self {
        Self { key, modifiers: Modifiers::NONE }
    }

    /// Mapping for a key with the given modifiers.
    pub const fn with_modifiers(key: KeyCode, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

impl From<KeyCode> for KeyMapping {
    fn from(key: KeyCode) -> Self {
        Self::new(key)
    }
}

//=== InputEvent ==========================================================

/// Low-level key event from the platform layer.
///
/// Events compare by type + key + modifiers, so two presses of the same
/// chord are equal and hash identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown {
        key: KeyCode,
        modifiers: Modifiers,
    },

    /// Key still held; emitted at the platform's auto-repeat rate.
    KeyRepeat {
        key: KeyCode,
        modifiers: Modifiers,
    },

    /// Key released.
    KeyUp {
        key: KeyCode,
        modifiers: Modifiers,
    },

    /// Unrecognized or unsupported event. Never resolves to an action.
    Unidentified
}

impl InputEvent {
    /// Builds an event for `key` in the given phase.
    pub fn key(key: KeyCode, modifiers: Modifiers, phase: InputPhase) -> Self {
        match phase {
            InputPhase::Pressed => Self::KeyDown { key, modifiers },
            InputPhase::Repeat => Self::KeyRepeat { key, modifiers },
            InputPhase::Released => Self::KeyUp { key, modifiers },
        }
    }

    /// Returns the (mapping, phase) pair this event carries, if any.
    pub fn chord(&self) -> Option<(KeyMapping, InputPhase)> {
        match *self {
            Self::KeyDown { key, modifiers } => {
                Some((KeyMapping::with_modifiers(key, modifiers), InputPhase::Pressed))
            }
            Self::KeyRepeat { key, modifiers } => {
                Some((KeyMapping::with_modifiers(key, modifiers), InputPhase::Repeat))
            }
            Self::KeyUp { key, modifiers } => {
                Some((KeyMapping::with_modifiers(key, modifiers), InputPhase::Released))
            }
            Self::Unidentified => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_constructor_matches_phase() {
        let down = InputEvent::key(KeyCode::Enter, Modifiers::NONE, InputPhase::Pressed);
        let held = InputEvent::key(KeyCode::Enter, Modifiers::NONE, InputPhase::Repeat);
        let up = InputEvent::key(KeyCode::Enter, Modifiers::NONE, InputPhase::Released);

        assert_eq!(down, InputEvent::KeyDown { key: KeyCode::Enter, modifiers: Modifiers::NONE });
        assert_eq!(held, InputEvent::KeyRepeat { key: KeyCode::Enter, modifiers: Modifiers::NONE });
        assert_eq!(up, InputEvent::KeyUp { key: KeyCode::Enter, modifiers: Modifiers::NONE });
    }

    #[test]
    fn chord_carries_modifiers() {
        let event = InputEvent::KeyRepeat { key: KeyCode::KeyS, modifiers: Modifiers::CTRL };
        let (mapping, phase) = event.chord().unwrap();

        assert_eq!(mapping, KeyMapping::with_modifiers(KeyCode::KeyS, Modifiers::CTRL));
        assert_eq!(phase, InputPhase::Repeat);
    }

    #[test]
    fn unidentified_has_no_chord() {
        assert_eq!(InputEvent::Unidentified.chord(), None);
    }

    #[test]
    fn same_key_different_modifiers_not_equal() {
        let a = InputEvent::KeyDown { key: KeyCode::KeyA, modifiers: Modifiers::NONE };
        let b = InputEvent::KeyDown { key: KeyCode::KeyA, modifiers: Modifiers::SHIFT };
        assert_ne!(a, b);
    }

    #[test]
    fn key_mapping_from_key_has_no_modifiers() {
        let mapping = KeyMapping::from(KeyCode::ArrowUp);
        assert_eq!(mapping.modifiers, Modifiers::NONE);
        assert_eq!(mapping.key, KeyCode::ArrowUp);
    }

    #[test]
    fn modifiers_default_is_none() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }
}
