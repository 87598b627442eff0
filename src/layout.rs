//! Keyboard layout: symbolic keys to jamo.
//!
//! The 2-set (dubeolsik) layout maps the Latin letters of a us keyboard to
//! compatibility jamo. Shifted keys give the doubled consonants and the two
//! extra vowels; all other shifted letters fall back to their unshifted jamo,
//! matching how 2-set keyboards behave in practice.

/// A jamo produced by the layout, classified for the composition automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jamo {
    Consonant(char),
    Vowel(char),
}

impl Jamo {
    /// The compatibility jamo character.
    pub fn ch(self) -> char {
        match self {
            Jamo::Consonant(c) | Jamo::Vowel(c) => c,
        }
    }
}

/// The 2-set (dubeolsik) layout.
///
/// Stateless; lives as a unit struct so the composer can hold a layout value
/// and alternative layouts (3-set variants) can slot in later.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoSetLayout;

impl TwoSetLayout {
    /// Map a symbolic character key to a jamo. `None` means the key has no
    /// jamo on this layout and the composer must reject it.
    pub fn map(self, ch: char) -> Option<Jamo> {
        use Jamo::{Consonant, Vowel};
        let jamo = match ch {
            // Top row
            'q' => Consonant('ㅂ'),
            'Q' => Consonant('ㅃ'),
            'w' => Consonant('ㅈ'),
            'W' => Consonant('ㅉ'),
            'e' => Consonant('ㄷ'),
            'E' => Consonant('ㄸ'),
            'r' => Consonant('ㄱ'),
            'R' => Consonant('ㄲ'),
            't' => Consonant('ㅅ'),
            'T' => Consonant('ㅆ'),
            'y' | 'Y' => Vowel('ㅛ'),
            'u' | 'U' => Vowel('ㅕ'),
            'i' | 'I' => Vowel('ㅑ'),
            'o' => Vowel('ㅐ'),
            'O' => Vowel('ㅒ'),
            'p' => Vowel('ㅔ'),
            'P' => Vowel('ㅖ'),
            // Home row
            'a' | 'A' => Consonant('ㅁ'),
            's' | 'S' => Consonant('ㄴ'),
            'd' | 'D' => Consonant('ㅇ'),
            'f' | 'F' => Consonant('ㄹ'),
            'g' | 'G' => Consonant('ㅎ'),
            'h' | 'H' => Vowel('ㅗ'),
            'j' | 'J' => Vowel('ㅓ'),
            'k' | 'K' => Vowel('ㅏ'),
            'l' | 'L' => Vowel('ㅣ'),
            // Bottom row
            'z' | 'Z' => Consonant('ㅋ'),
            'x' | 'X' => Consonant('ㅌ'),
            'c' | 'C' => Consonant('ㅊ'),
            'v' | 'V' => Consonant('ㅍ'),
            'b' | 'B' => Vowel('ㅠ'),
            'n' | 'N' => Vowel('ㅜ'),
            'm' | 'M' => Vowel('ㅡ'),
            _ => return None,
        };
        Some(jamo)
    }
}
