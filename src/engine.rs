//! The event adapter: key events in, commit/preedit signals out.
//!
//! `HangulEngine` owns one keymap, one composer, and a small buffer of
//! characters that were flushed out of the composer but not yet committed.
//! `handle_key_event` is the sole entry point; after it returns, the host
//! reads the engine context for the pass's commit signals and the refreshed
//! preedit.

use anyhow::{bail, Result};
use tracing::{debug, trace};
use unicode_normalization::UnicodeNormalization;

use crate::composer::{Composer, TwoSetComposer};
use crate::context::{EngineContext, Preedit, Style, StylingSpan};
use crate::keymap::{Keymap, Keysym, Modifier};
use crate::Config;

/// Modifiers that suppress composition: any of these held means the key is
/// a shortcut for the application, not input for the composer.
const MASKED_MODS: [Modifier; 5] = [
    Modifier::Control,
    Modifier::Alt,
    Modifier::Super,
    Modifier::Level3,
    Modifier::Level5,
];

/// One input session: keymap, composer, flushed-preedit buffer, context.
///
/// All state is owned; dropping the engine is the session teardown.
pub struct HangulEngine<C: Composer> {
    keymap: Keymap,
    composer: C,
    /// Characters flushed out of the composer that still show in the
    /// preedit until the next commit clears them.
    flushed: Vec<char>,
    context: EngineContext,
}

impl HangulEngine<TwoSetComposer> {
    /// Build an engine from configuration: keymap rule names plus the
    /// composition method id.
    pub fn new(config: &Config) -> Result<Self> {
        let keymap = Keymap::from_names(&config.keymap)?;
        let composer = match config.method.as_str() {
            "2" => TwoSetComposer::new(),
            other => bail!("unsupported composition method {:?}", other),
        };
        let mut engine = Self::with_parts(keymap, composer);
        engine.flushed.reserve(config.preedit_capacity);
        Ok(engine)
    }
}

impl<C: Composer> HangulEngine<C> {
    /// Assemble an engine from already-built parts. This is the seam for
    /// plugging in a different composition method.
    pub fn with_parts(keymap: Keymap, composer: C) -> Self {
        Self {
            keymap,
            composer,
            flushed: Vec::new(),
            context: EngineContext::new(),
        }
    }

    /// Outward state of the last handling pass.
    pub fn context(&self) -> &EngineContext {
        &self.context
    }

    /// The preedit as of the last handling pass.
    pub fn preedit(&self) -> &Preedit {
        &self.context.preedit
    }

    /// Handle one physical key transition.
    ///
    /// Returns whether the event was consumed by composition; `false` means
    /// the host should process the key itself. The preedit in the context is
    /// recomputed on every call, consumed or not.
    pub fn handle_key_event(&mut self, keycode: u16, pressed: bool) -> bool {
        self.context.begin_pass();

        // Modifier bookkeeping happens even for events we ignore
        self.keymap.update_key(keycode, pressed);

        // Releases never reach the composer
        let handled = if pressed {
            self.process_press(keycode)
        } else {
            false
        };

        self.update_preedit();
        debug!(keycode, pressed, handled, "key event");
        handled
    }

    fn process_press(&mut self, keycode: u16) -> bool {
        let sym = self.keymap.keysym(keycode);

        // Shift on its own never reaches the composer
        if matches!(sym, Keysym::ShiftL | Keysym::ShiftR) {
            return false;
        }

        if self.keymap.mods_active(&MASKED_MODS) {
            return false;
        }

        match sym {
            Keysym::NoSymbol => false,
            Keysym::Backspace => {
                if self.composer.backspace() {
                    true
                } else {
                    // Composer is idle; eat the tail of the flushed buffer
                    self.flushed.pop().is_some()
                }
            }
            sym => {
                let handled = self.composer.process(sym);

                let commit = self.composer.take_commit();
                if !commit.is_empty() {
                    self.emit_commit(commit.into_iter().collect());
                }

                // A rejected key forces whatever is in progress out verbatim
                if !handled {
                    self.flush();
                }
                handled
            }
        }
    }

    /// Move the composer's pending sequence into the flushed buffer, then
    /// commit the whole buffer.
    fn flush(&mut self) {
        self.flushed.extend(self.composer.flush());
        if !self.flushed.is_empty() {
            let text: String = self.flushed.iter().collect();
            self.flushed.clear();
            self.emit_commit(text);
        }
    }

    fn emit_commit(&mut self, text: String) {
        // Commit text is guaranteed NFC on the way out
        let text: String = text.nfc().collect();
        trace!(%text, "commit");
        self.context.commits.push(text);
    }

    /// Recompute the preedit from the flushed buffer plus the composer's
    /// pending sequence. Pure with respect to composer and buffer state.
    fn update_preedit(&mut self) {
        let mut chars = self.flushed.clone();
        chars.extend(self.composer.preedit());

        let base = self.flushed.len();
        let total = chars.len();

        let mut styling = Vec::new();
        if total > 0 {
            styling.push(StylingSpan {
                start: 0,
                end: total,
                style: Style::Underline,
            });
        }
        if total > base {
            styling.push(StylingSpan {
                start: base,
                end: total,
                style: Style::Selected,
            });
        }

        self.context.preedit = Preedit {
            text: chars.into_iter().collect(),
            styling,
            caret: (total > 0).then_some(total),
        };
    }

    /// Drop all composition state (host focus change, session restart).
    pub fn reset(&mut self) {
        self.composer.flush();
        self.composer.take_commit();
        self.flushed.clear();
        self.context.clear();
    }
}
