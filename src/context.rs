//! Engine context for platform communication.
//!
//! Zero abstraction, as in the session/context split of full IME stacks:
//! after each call to `handle_key_event` the platform reads these fields to
//! apply the outward signals. No callbacks, no traits; just data transfer.

use serde::{Deserialize, Serialize};

/// Styling applied to a span of the preedit display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    /// The whole in-progress composition.
    Underline,
    /// The portion still owned by the composer (the active syllable).
    Selected,
}

/// A half-open range `[start, end)` over the preedit, in code points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylingSpan {
    pub start: usize,
    pub end: usize,
    pub style: Style,
}

/// The preedit-changed signal: replaces the entire preedit display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Preedit {
    /// Display string, empty when nothing is being composed.
    pub text: String,
    /// At most two spans: one underline over the whole text, one selected
    /// over the composer-owned suffix.
    pub styling: Vec<StylingSpan>,
    /// Caret position in code points; `None` means no caret is shown.
    pub caret: Option<usize>,
}

impl Preedit {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Outward engine state, refreshed on every key event.
///
/// `commits` holds the commit signals of the last handling pass in emission
/// order; a single pass can produce zero, one, or two (a composer-finalized
/// syllable followed by a forced flush). `preedit` always reflects the state
/// after the pass.
#[derive(Debug, Clone, Default)]
pub struct EngineContext {
    pub commits: Vec<String>,
    pub preedit: Preedit,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous pass's commit signals. Called at the start of each
    /// key event; the preedit is left alone since it is replaced wholesale
    /// at the end of the pass.
    pub fn begin_pass(&mut self) {
        self.commits.clear();
    }

    /// Concatenation of this pass's commit signals, for hosts that insert
    /// text in one operation.
    pub fn committed_text(&self) -> String {
        self.commits.concat()
    }

    /// Clear everything (session reset).
    pub fn clear(&mut self) {
        self.commits.clear();
        self.preedit = Preedit::default();
    }
}
