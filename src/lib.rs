//! libhangul
//!
//! A Hangul input method engine: raw keycodes plus press/release state are
//! interpreted through a keyboard layout model, composed into syllable
//! blocks by a 2-set jamo automaton, and surfaced as committed text plus an
//! in-progress preedit with styling spans.
//!
//! Public API:
//! - `HangulEngine` - Per-session event adapter, the main entry point
//! - `EngineContext` / `Preedit` - Outward commit and preedit signals
//! - `Composer` / `TwoSetComposer` - Composition ruleset seam and the
//!   built-in dubeolsik automaton
//! - `Keymap` - Keycode interpretation with modifier tracking
//! - `Config` - Configuration with TOML load/save

use serde::{Deserialize, Serialize};

pub mod jamo;

pub mod layout;
pub use layout::{Jamo, TwoSetLayout};

pub mod keymap;
pub use keymap::{Keymap, Keysym, Modifier, RuleNames};

pub mod composer;
pub use composer::{Composer, TwoSetComposer};

pub mod context;
pub use context::{EngineContext, Preedit, Style, StylingSpan};

pub mod engine;
pub use engine::HangulEngine;

/// Engine configuration.
///
/// One `Config` describes one session's fixed setup: which keymap to build
/// and which composition method to run. Sessions never share mutable state,
/// so the config is read at construction and not consulted afterwards.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Keymap rule names (rules/model/layout/variant/options)
    pub keymap: RuleNames,

    /// Composition method id; "2" selects the 2-set (dubeolsik) layout
    pub method: String,

    /// Initial capacity of the flushed-preedit buffer. A handful of
    /// characters covers normal typing; the buffer grows if needed.
    pub preedit_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keymap: RuleNames::default(),
            method: "2".to_string(),
            preedit_capacity: 6,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
