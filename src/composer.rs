//! Hangul composition: the `Composer` trait and the 2-set automaton.
//!
//! The composer consumes symbolic keys one at a time and maintains two
//! outputs: the pending (preedit) sequence still being composed, and a queue
//! of finalized code points that became definite as composition moved past
//! them. The engine drains the queue after every processed key.

use crate::jamo;
use crate::keymap::Keysym;
use crate::layout::{Jamo, TwoSetLayout};

/// A stateful composition ruleset.
///
/// The engine is generic over this trait so composition methods other than
/// the built-in 2-set layout can be plugged in.
pub trait Composer {
    /// Process one symbolic key. Returns false if the key was rejected, in
    /// which case no state changed.
    fn process(&mut self, sym: Keysym) -> bool;

    /// The current pending (uncommitted) sequence.
    fn preedit(&self) -> Vec<char>;

    /// Read and drain the finalized-character queue.
    fn take_commit(&mut self) -> Vec<char>;

    /// Delete the last pending element. Returns false if there was nothing
    /// to delete.
    fn backspace(&mut self) -> bool;

    /// Take the pending sequence, leaving the composer idle. Does not touch
    /// the finalized queue.
    fn flush(&mut self) -> Vec<char>;
}

/// The 2-set (dubeolsik) composition automaton.
///
/// One syllable is composed at a time from up to three slots: leading
/// consonant, medial vowel (possibly compound), trailing consonant (possibly
/// a cluster). When an incoming jamo cannot extend the current syllable, the
/// syllable is finalized onto the commit queue and a new one starts.
#[derive(Debug, Clone, Default)]
pub struct TwoSetComposer {
    layout: TwoSetLayout,
    cho: Option<char>,
    jung: Option<char>,
    jong: Option<char>,
    commit: Vec<char>,
}

impl TwoSetComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the current syllable slots as a single pending character, if
    /// any. A complete cho+jung pair composes; a lone jamo displays as its
    /// compatibility form.
    fn pending_char(&self) -> Option<char> {
        match (self.cho, self.jung) {
            (Some(cho), Some(jung)) => {
                let cho = jamo::choseong_index(cho)?;
                let jung = jamo::jungseong_index(jung)?;
                let jong = self.jong.and_then(jamo::jongseong_index).unwrap_or(0);
                jamo::compose_syllable(cho, jung, jong)
            }
            (Some(cho), None) => Some(cho),
            (None, Some(jung)) => Some(jung),
            (None, None) => None,
        }
    }

    /// Finalize the current syllable onto the commit queue and clear the
    /// slots.
    fn commit_pending(&mut self) {
        if let Some(ch) = self.pending_char() {
            self.commit.push(ch);
        }
        self.cho = None;
        self.jung = None;
        self.jong = None;
    }

    fn feed_consonant(&mut self, c: char) {
        if let Some(jong) = self.jong {
            // Try to extend the trailing consonant into a cluster
            if let Some(cluster) = jamo::combine_consonants(jong, c) {
                self.jong = Some(cluster);
            } else {
                self.commit_pending();
                self.cho = Some(c);
            }
        } else if self.jung.is_some() && self.cho.is_some() {
            // Syllable has cho+jung: the consonant becomes jongseong if it
            // can end a syllable (ㄸ/ㅃ/ㅉ cannot)
            if jamo::jongseong_index(c).is_some() {
                self.jong = Some(c);
            } else {
                self.commit_pending();
                self.cho = Some(c);
            }
        } else if self.jung.is_some() || self.cho.is_some() {
            // Lone vowel or lone consonant pending: it cannot absorb another
            // consonant, finalize it and start over
            self.commit_pending();
            self.cho = Some(c);
        } else {
            self.cho = Some(c);
        }
    }

    fn feed_vowel(&mut self, v: char) {
        if let Some(jong) = self.jong {
            // A vowel after a trailing consonant steals it as the new
            // syllable's leading consonant (한 + ㅣ → 하 + 니). Clusters
            // give up only their second element.
            let carried = match jamo::split_consonants(jong) {
                Some((first, second)) => {
                    self.jong = Some(first);
                    second
                }
                None => {
                    self.jong = None;
                    jong
                }
            };
            self.commit_pending();
            self.cho = Some(carried);
            self.jung = Some(v);
        } else if let Some(jung) = self.jung {
            if let Some(compound) = jamo::combine_vowels(jung, v) {
                self.jung = Some(compound);
            } else {
                self.commit_pending();
                self.jung = Some(v);
            }
        } else {
            // Attaches to a pending consonant, or starts a lone vowel
            self.jung = Some(v);
        }
    }
}

impl Composer for TwoSetComposer {
    fn process(&mut self, sym: Keysym) -> bool {
        let Keysym::Char(ch) = sym else {
            return false;
        };
        let Some(mapped) = self.layout.map(ch) else {
            return false;
        };
        match mapped {
            Jamo::Consonant(c) => self.feed_consonant(c),
            Jamo::Vowel(v) => self.feed_vowel(v),
        }
        true
    }

    fn preedit(&self) -> Vec<char> {
        self.pending_char().into_iter().collect()
    }

    fn take_commit(&mut self) -> Vec<char> {
        std::mem::take(&mut self.commit)
    }

    fn backspace(&mut self) -> bool {
        if let Some(jong) = self.jong.take() {
            // Clusters unwind one element at a time
            self.jong = jamo::split_consonants(jong).map(|(first, _)| first);
            true
        } else if let Some(jung) = self.jung.take() {
            self.jung = jamo::split_vowels(jung).map(|(base, _)| base);
            true
        } else if self.cho.take().is_some() {
            true
        } else {
            false
        }
    }

    fn flush(&mut self) -> Vec<char> {
        let pending = self.preedit();
        self.cho = None;
        self.jung = None;
        self.jong = None;
        pending
    }
}
