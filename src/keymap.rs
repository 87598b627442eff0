//! Keymap interpretation: keycodes to symbolic keys, with modifier tracking.
//!
//! This models the slice of keymap behavior the engine needs: a compiled-in
//! us/pc105 table over evdev keycodes, shift/caps-aware character resolution,
//! and effective-modifier queries. The keymap is updated on *every* key
//! event, including ones the engine later ignores, so modifier state never
//! drifts.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Rule names selecting a keymap, in the rules/model/layout/variant/options
/// shape keymap compilers use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleNames {
    pub rules: String,
    pub model: String,
    pub layout: String,
    pub variant: String,
    pub options: String,
}

impl Default for RuleNames {
    fn default() -> Self {
        Self {
            rules: "evdev".into(),
            model: "pc105".into(),
            layout: "us".into(),
            variant: String::new(),
            options: String::new(),
        }
    }
}

/// A symbolic key identity, resolved from a keycode and the current
/// modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keysym {
    /// A character-producing key, already shift/caps resolved.
    Char(char),
    Backspace,
    Return,
    Tab,
    Escape,
    ShiftL,
    ShiftR,
    ControlL,
    ControlR,
    AltL,
    AltR,
    SuperL,
    SuperR,
    CapsLock,
    /// Keycode has no symbol on this keymap.
    NoSymbol,
}

/// Named modifier groups the engine can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Shift,
    Control,
    Alt,
    Super,
    Level3,
    Level5,
}

// evdev keycodes for the modifier keys of a pc105 board.
const KEY_LEFTSHIFT: u16 = 42;
const KEY_RIGHTSHIFT: u16 = 54;
const KEY_LEFTCTRL: u16 = 29;
const KEY_RIGHTCTRL: u16 = 97;
const KEY_LEFTALT: u16 = 56;
const KEY_RIGHTALT: u16 = 100;
const KEY_LEFTMETA: u16 = 125;
const KEY_RIGHTMETA: u16 = 126;
const KEY_CAPSLOCK: u16 = 58;

/// Keymap state: the fixed us/pc105 table plus live modifier tracking.
///
/// One instance per input session. `update_key` must be called for every
/// physical key transition before the event is interpreted further.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    shift: u8,
    control: u8,
    alt: u8,
    super_: u8,
    // Level3/Level5 have no keys on the us layout; they are tracked so the
    // engine's modifier mask query covers them uniformly.
    level3: u8,
    level5: u8,
    caps_lock: bool,
}

impl Keymap {
    /// Build a keymap from rule names. Only the evdev/pc105/us table is
    /// compiled in; anything else is a construction error.
    pub fn from_names(names: &RuleNames) -> Result<Self> {
        if names.layout != "us" {
            bail!("unsupported keyboard layout {:?}", names.layout);
        }
        if !names.variant.is_empty() {
            bail!("unsupported layout variant {:?}", names.variant);
        }
        Ok(Self::default())
    }

    /// Record a key transition, updating modifier state. Unconditional:
    /// called even for events the engine will not act on.
    pub fn update_key(&mut self, keycode: u16, pressed: bool) {
        let counter = match keycode {
            KEY_LEFTSHIFT | KEY_RIGHTSHIFT => &mut self.shift,
            KEY_LEFTCTRL | KEY_RIGHTCTRL => &mut self.control,
            KEY_LEFTALT | KEY_RIGHTALT => &mut self.alt,
            KEY_LEFTMETA | KEY_RIGHTMETA => &mut self.super_,
            KEY_CAPSLOCK => {
                if pressed {
                    self.caps_lock = !self.caps_lock;
                }
                return;
            }
            _ => return,
        };
        if pressed {
            *counter += 1;
        } else {
            // Guard against a release without a matching press (the host may
            // have delivered the press to a previous session)
            *counter = counter.saturating_sub(1);
        }
    }

    /// Whether any of the named modifiers is currently active.
    pub fn mods_active(&self, mods: &[Modifier]) -> bool {
        mods.iter().any(|m| match m {
            Modifier::Shift => self.shift > 0,
            Modifier::Control => self.control > 0,
            Modifier::Alt => self.alt > 0,
            Modifier::Super => self.super_ > 0,
            Modifier::Level3 => self.level3 > 0,
            Modifier::Level5 => self.level5 > 0,
        })
    }

    /// Resolve the symbolic key for a keycode under the current modifier
    /// state. Total: unknown keycodes resolve to `Keysym::NoSymbol`.
    pub fn keysym(&self, keycode: u16) -> Keysym {
        let shift = self.shift > 0;
        match keycode {
            14 => Keysym::Backspace,
            15 => Keysym::Tab,
            28 => Keysym::Return,
            1 => Keysym::Escape,
            KEY_LEFTSHIFT => Keysym::ShiftL,
            KEY_RIGHTSHIFT => Keysym::ShiftR,
            KEY_LEFTCTRL => Keysym::ControlL,
            KEY_RIGHTCTRL => Keysym::ControlR,
            KEY_LEFTALT => Keysym::AltL,
            KEY_RIGHTALT => Keysym::AltR,
            KEY_LEFTMETA => Keysym::SuperL,
            KEY_RIGHTMETA => Keysym::SuperR,
            KEY_CAPSLOCK => Keysym::CapsLock,
            57 => Keysym::Char(' '),
            _ => match self.keycode_char(keycode, shift) {
                Some(ch) => Keysym::Char(ch),
                None => Keysym::NoSymbol,
            },
        }
    }

    fn keycode_char(&self, keycode: u16, shift: bool) -> Option<char> {
        const DIGITS: &[u8] = b"1234567890";
        const DIGITS_SHIFTED: &[u8] = b"!@#$%^&*()";
        const TOP: &[u8] = b"qwertyuiop";
        const HOME: &[u8] = b"asdfghjkl";
        const BOTTOM: &[u8] = b"zxcvbnm";

        let letter = |base: &[u8], idx: usize| {
            let ch = base[idx] as char;
            // Caps lock inverts shift for letters only
            if shift != self.caps_lock {
                Some(ch.to_ascii_uppercase())
            } else {
                Some(ch)
            }
        };

        match keycode {
            2..=11 => {
                let idx = (keycode - 2) as usize;
                let row = if shift { DIGITS_SHIFTED } else { DIGITS };
                Some(row[idx] as char)
            }
            16..=25 => letter(TOP, (keycode - 16) as usize),
            30..=38 => letter(HOME, (keycode - 30) as usize),
            44..=50 => letter(BOTTOM, (keycode - 44) as usize),
            12 => Some(if shift { '_' } else { '-' }),
            13 => Some(if shift { '+' } else { '=' }),
            26 => Some(if shift { '{' } else { '[' }),
            27 => Some(if shift { '}' } else { ']' }),
            39 => Some(if shift { ':' } else { ';' }),
            40 => Some(if shift { '"' } else { '\'' }),
            41 => Some(if shift { '~' } else { '`' }),
            43 => Some(if shift { '|' } else { '\\' }),
            51 => Some(if shift { '<' } else { ',' }),
            52 => Some(if shift { '>' } else { '.' }),
            53 => Some(if shift { '?' } else { '/' }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // evdev keycodes used in tests
    const KC_R: u16 = 19;
    const KC_A: u16 = 30;
    const KC_1: u16 = 2;

    #[test]
    fn test_from_names_default() {
        assert!(Keymap::from_names(&RuleNames::default()).is_ok());
    }

    #[test]
    fn test_from_names_unsupported() {
        let names = RuleNames {
            layout: "de".into(),
            ..Default::default()
        };
        assert!(Keymap::from_names(&names).is_err());
    }

    #[test]
    fn test_plain_letter() {
        let keymap = Keymap::default();
        assert_eq!(keymap.keysym(KC_R), Keysym::Char('r'));
        assert_eq!(keymap.keysym(KC_A), Keysym::Char('a'));
    }

    #[test]
    fn test_shifted_letter_and_digit() {
        let mut keymap = Keymap::default();
        keymap.update_key(KEY_LEFTSHIFT, true);
        assert_eq!(keymap.keysym(KC_R), Keysym::Char('R'));
        assert_eq!(keymap.keysym(KC_1), Keysym::Char('!'));
        keymap.update_key(KEY_LEFTSHIFT, false);
        assert_eq!(keymap.keysym(KC_R), Keysym::Char('r'));
    }

    #[test]
    fn test_both_shifts_held() {
        let mut keymap = Keymap::default();
        keymap.update_key(KEY_LEFTSHIFT, true);
        keymap.update_key(KEY_RIGHTSHIFT, true);
        keymap.update_key(KEY_LEFTSHIFT, false);
        // Right shift is still down
        assert!(keymap.mods_active(&[Modifier::Shift]));
        assert_eq!(keymap.keysym(KC_R), Keysym::Char('R'));
    }

    #[test]
    fn test_caps_lock_letters_only() {
        let mut keymap = Keymap::default();
        keymap.update_key(KEY_CAPSLOCK, true);
        keymap.update_key(KEY_CAPSLOCK, false);
        assert_eq!(keymap.keysym(KC_R), Keysym::Char('R'));
        // Caps lock does not shift digits
        assert_eq!(keymap.keysym(KC_1), Keysym::Char('1'));
        // Shift under caps lock gives lowercase again
        keymap.update_key(KEY_LEFTSHIFT, true);
        assert_eq!(keymap.keysym(KC_R), Keysym::Char('r'));
    }

    #[test]
    fn test_modifier_queries() {
        let mut keymap = Keymap::default();
        assert!(!keymap.mods_active(&[Modifier::Control, Modifier::Alt]));
        keymap.update_key(KEY_RIGHTCTRL, true);
        assert!(keymap.mods_active(&[Modifier::Control, Modifier::Alt]));
        assert!(!keymap.mods_active(&[Modifier::Alt, Modifier::Super]));
        keymap.update_key(KEY_RIGHTCTRL, false);
        assert!(!keymap.mods_active(&[Modifier::Control]));
    }

    #[test]
    fn test_unmatched_release_is_harmless() {
        let mut keymap = Keymap::default();
        keymap.update_key(KEY_LEFTSHIFT, false);
        assert!(!keymap.mods_active(&[Modifier::Shift]));
        keymap.update_key(KEY_LEFTSHIFT, true);
        assert!(keymap.mods_active(&[Modifier::Shift]));
    }

    #[test]
    fn test_unknown_keycode() {
        let keymap = Keymap::default();
        assert_eq!(keymap.keysym(0), Keysym::NoSymbol);
        assert_eq!(keymap.keysym(999), Keysym::NoSymbol);
    }

    #[test]
    fn test_special_keys() {
        let keymap = Keymap::default();
        assert_eq!(keymap.keysym(14), Keysym::Backspace);
        assert_eq!(keymap.keysym(57), Keysym::Char(' '));
        assert_eq!(keymap.keysym(28), Keysym::Return);
    }
}
