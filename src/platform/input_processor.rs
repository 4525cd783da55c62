//=========================================================================
// Input Processor
//=========================================================================
//
// Converts winit keyboard events into navigation InputEvents.
//
// Architecture:
//   WindowEvent → InputProcessor → InputEvent → NavigableBox::handle_input
//
// Modifier state is cached from ModifiersChanged and applied to every
// following key event. Held keys arrive as pressed events flagged
// `repeat` and become `KeyRepeat`. Unmapped keys are filtered (None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, InputPhase, KeyCode, Modifiers};

//=== InputProcessor ======================================================

/// Stateful winit → InputEvent translator.
#[derive(Debug, Default, Clone)]
pub struct InputProcessor {
    current_modifiers: Modifiers,
}

impl InputProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Modifier State ---------------------------------------------------

    pub fn update_modifiers(&mut self, state: ModifiersState) {
        self.current_modifiers = Modifiers::from(state);
    }

    pub fn current_modifiers(&self) -> Modifiers {
        self.current_modifiers
    }

    //--- Event Processing -------------------------------------------------

    /// Handles any window event: caches modifier changes and translates
    /// keyboard input. Everything else yields `None`.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.update_modifiers(modifiers.state());
                None
            }
            WindowEvent::KeyboardInput { event, .. } => self.process_key_event(event),
            _ => None,
        }
    }

    /// Converts a key event, filtering unmapped keys.
    pub fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        let key = match key_event.physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };

        self.key_input_event(key, key_event.state, key_event.repeat)
    }

    fn key_input_event(&self, key: KeyCode, state: ElementState, repeat: bool) -> Option<InputEvent> {
        if key == KeyCode::Unidentified {
            return None;
        }
        Some(InputEvent::key(key, self.current_modifiers, phase_for(state, repeat)))
    }
}

/// Phase of a winit key event. A release is never a repeat.
pub fn phase_for(state: ElementState, repeat: bool) -> InputPhase {
    match (state, repeat) {
        (ElementState::Released, _) => InputPhase::Released,
        (ElementState::Pressed, true) => InputPhase::Repeat,
        (ElementState::Pressed, false) => InputPhase::Pressed,
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Winit normalizes platform keys (macOS Cmd → Ctrl, Option → Alt).
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

/// Physical keyboard keys. Gamepad codes have no keyboard source and are
/// fed by the host's gamepad layer directly.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Digits -------------------------------------------------------
            Digit0 => KeyCode::Digit0, Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2, Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4, Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6, Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8, Digit9 => KeyCode::Digit9,

            //--- Letters ------------------------------------------------------
            KeyA => KeyCode::KeyA, KeyB => KeyCode::KeyB, KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD, KeyE => KeyCode::KeyE, KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG, KeyH => KeyCode::KeyH, KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ, KeyK => KeyCode::KeyK, KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM, KeyN => KeyCode::KeyN, KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP, KeyQ => KeyCode::KeyQ, KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS, KeyT => KeyCode::KeyT, KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV, KeyW => KeyCode::KeyW, KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY, KeyZ => KeyCode::KeyZ,

            //--- Navigation ---------------------------------------------------
            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,
            Enter | NumpadEnter => KeyCode::Enter,
            Space => KeyCode::Space,
            Tab => KeyCode::Tab,
            Escape => KeyCode::Escape,
            Backspace => KeyCode::Backspace,
            Delete => KeyCode::Delete,

            _ => KeyCode::Unidentified,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
