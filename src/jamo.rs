//! Hangul jamo tables and syllable arithmetic.
//!
//! All functions here work on compatibility jamo (U+3131–U+3163), which is
//! what the keyboard layout produces and what lone jamo look like in a
//! preedit. Composition into precomposed syllables (U+AC00–U+D7A3) follows
//! the standard Unicode formula.

/// First code point of the precomposed syllable block (가).
pub const SYLLABLE_BASE: u32 = 0xAC00;

/// Number of medial vowels (jungseong).
pub const JUNGSEONG_COUNT: u32 = 21;

/// Number of trailing consonant slots, including the empty slot.
pub const JONGSEONG_COUNT: u32 = 28;

/// Leading consonant (choseong) index of a compatibility jamo, if it can
/// start a syllable.
pub fn choseong_index(ch: char) -> Option<u32> {
    match ch {
        'ㄱ' => Some(0),
        'ㄲ' => Some(1),
        'ㄴ' => Some(2),
        'ㄷ' => Some(3),
        'ㄸ' => Some(4),
        'ㄹ' => Some(5),
        'ㅁ' => Some(6),
        'ㅂ' => Some(7),
        'ㅃ' => Some(8),
        'ㅅ' => Some(9),
        'ㅆ' => Some(10),
        'ㅇ' => Some(11),
        'ㅈ' => Some(12),
        'ㅉ' => Some(13),
        'ㅊ' => Some(14),
        'ㅋ' => Some(15),
        'ㅌ' => Some(16),
        'ㅍ' => Some(17),
        'ㅎ' => Some(18),
        _ => None,
    }
}

/// Medial vowel (jungseong) index of a compatibility jamo.
pub fn jungseong_index(ch: char) -> Option<u32> {
    match ch {
        'ㅏ' => Some(0),
        'ㅐ' => Some(1),
        'ㅑ' => Some(2),
        'ㅒ' => Some(3),
        'ㅓ' => Some(4),
        'ㅔ' => Some(5),
        'ㅕ' => Some(6),
        'ㅖ' => Some(7),
        'ㅗ' => Some(8),
        'ㅘ' => Some(9),
        'ㅙ' => Some(10),
        'ㅚ' => Some(11),
        'ㅛ' => Some(12),
        'ㅜ' => Some(13),
        'ㅝ' => Some(14),
        'ㅞ' => Some(15),
        'ㅟ' => Some(16),
        'ㅠ' => Some(17),
        'ㅡ' => Some(18),
        'ㅢ' => Some(19),
        'ㅣ' => Some(20),
        _ => None,
    }
}

/// Trailing consonant (jongseong) index of a compatibility jamo, if it can
/// end a syllable. Index 0 is the empty slot, so real jongseong start at 1.
pub fn jongseong_index(ch: char) -> Option<u32> {
    match ch {
        'ㄱ' => Some(1),
        'ㄲ' => Some(2),
        'ㄳ' => Some(3),
        'ㄴ' => Some(4),
        'ㄵ' => Some(5),
        'ㄶ' => Some(6),
        'ㄷ' => Some(7),
        'ㄹ' => Some(8),
        'ㄺ' => Some(9),
        'ㄻ' => Some(10),
        'ㄼ' => Some(11),
        'ㄽ' => Some(12),
        'ㄾ' => Some(13),
        'ㄿ' => Some(14),
        'ㅀ' => Some(15),
        'ㅁ' => Some(16),
        'ㅂ' => Some(17),
        'ㅄ' => Some(18),
        'ㅅ' => Some(19),
        'ㅆ' => Some(20),
        'ㅇ' => Some(21),
        'ㅈ' => Some(22),
        'ㅊ' => Some(23),
        'ㅋ' => Some(24),
        'ㅌ' => Some(25),
        'ㅍ' => Some(26),
        'ㅎ' => Some(27),
        _ => None,
    }
}

/// Compose a precomposed syllable from choseong/jungseong/jongseong indices.
/// `jong` 0 means no trailing consonant.
pub fn compose_syllable(cho: u32, jung: u32, jong: u32) -> Option<char> {
    if cho >= 19 || jung >= JUNGSEONG_COUNT || jong >= JONGSEONG_COUNT {
        return None;
    }
    char::from_u32(SYLLABLE_BASE + (cho * JUNGSEONG_COUNT + jung) * JONGSEONG_COUNT + jong)
}

/// Combine two simple consonants into a jongseong cluster (ㄱ+ㅅ → ㄳ).
pub fn combine_consonants(base: char, add: char) -> Option<char> {
    match (base, add) {
        ('ㄱ', 'ㅅ') => Some('ㄳ'),
        ('ㄴ', 'ㅈ') => Some('ㄵ'),
        ('ㄴ', 'ㅎ') => Some('ㄶ'),
        ('ㄹ', 'ㄱ') => Some('ㄺ'),
        ('ㄹ', 'ㅁ') => Some('ㄻ'),
        ('ㄹ', 'ㅂ') => Some('ㄼ'),
        ('ㄹ', 'ㅅ') => Some('ㄽ'),
        ('ㄹ', 'ㅌ') => Some('ㄾ'),
        ('ㄹ', 'ㅍ') => Some('ㄿ'),
        ('ㄹ', 'ㅎ') => Some('ㅀ'),
        ('ㅂ', 'ㅅ') => Some('ㅄ'),
        _ => None,
    }
}

/// Split a jongseong cluster back into its two elements.
pub fn split_consonants(cluster: char) -> Option<(char, char)> {
    match cluster {
        'ㄳ' => Some(('ㄱ', 'ㅅ')),
        'ㄵ' => Some(('ㄴ', 'ㅈ')),
        'ㄶ' => Some(('ㄴ', 'ㅎ')),
        'ㄺ' => Some(('ㄹ', 'ㄱ')),
        'ㄻ' => Some(('ㄹ', 'ㅁ')),
        'ㄼ' => Some(('ㄹ', 'ㅂ')),
        'ㄽ' => Some(('ㄹ', 'ㅅ')),
        'ㄾ' => Some(('ㄹ', 'ㅌ')),
        'ㄿ' => Some(('ㄹ', 'ㅍ')),
        'ㅀ' => Some(('ㄹ', 'ㅎ')),
        'ㅄ' => Some(('ㅂ', 'ㅅ')),
        _ => None,
    }
}

/// Combine a base vowel with a following vowel into a compound (ㅗ+ㅏ → ㅘ).
pub fn combine_vowels(base: char, add: char) -> Option<char> {
    match (base, add) {
        ('ㅗ', 'ㅏ') => Some('ㅘ'),
        ('ㅗ', 'ㅐ') => Some('ㅙ'),
        ('ㅗ', 'ㅣ') => Some('ㅚ'),
        ('ㅜ', 'ㅓ') => Some('ㅝ'),
        ('ㅜ', 'ㅔ') => Some('ㅞ'),
        ('ㅜ', 'ㅣ') => Some('ㅟ'),
        ('ㅡ', 'ㅣ') => Some('ㅢ'),
        _ => None,
    }
}

/// Split a compound vowel back into its two elements.
pub fn split_vowels(compound: char) -> Option<(char, char)> {
    match compound {
        'ㅘ' => Some(('ㅗ', 'ㅏ')),
        'ㅙ' => Some(('ㅗ', 'ㅐ')),
        'ㅚ' => Some(('ㅗ', 'ㅣ')),
        'ㅝ' => Some(('ㅜ', 'ㅓ')),
        'ㅞ' => Some(('ㅜ', 'ㅔ')),
        'ㅟ' => Some(('ㅜ', 'ㅣ')),
        'ㅢ' => Some(('ㅡ', 'ㅣ')),
        _ => None,
    }
}

/// Whether a compatibility jamo is a consonant.
pub fn is_consonant(ch: char) -> bool {
    matches!(ch, 'ㄱ'..='ㅎ')
}

/// Whether a compatibility jamo is a vowel.
pub fn is_vowel(ch: char) -> bool {
    matches!(ch, 'ㅏ'..='ㅣ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_basic_syllable() {
        // ㄱ + ㅏ = 가
        let cho = choseong_index('ㄱ').unwrap();
        let jung = jungseong_index('ㅏ').unwrap();
        assert_eq!(compose_syllable(cho, jung, 0), Some('가'));
    }

    #[test]
    fn test_compose_with_jongseong() {
        // ㅎ + ㅏ + ㄴ = 한
        let cho = choseong_index('ㅎ').unwrap();
        let jung = jungseong_index('ㅏ').unwrap();
        let jong = jongseong_index('ㄴ').unwrap();
        assert_eq!(compose_syllable(cho, jung, jong), Some('한'));
    }

    #[test]
    fn test_compose_last_syllable() {
        // ㅎ + ㅣ + ㅎ = 힣, the last code point of the block
        let cho = choseong_index('ㅎ').unwrap();
        let jung = jungseong_index('ㅣ').unwrap();
        let jong = jongseong_index('ㅎ').unwrap();
        assert_eq!(compose_syllable(cho, jung, jong), Some('힣'));
    }

    #[test]
    fn test_compose_out_of_range() {
        assert_eq!(compose_syllable(19, 0, 0), None);
        assert_eq!(compose_syllable(0, 21, 0), None);
        assert_eq!(compose_syllable(0, 0, 28), None);
    }

    #[test]
    fn test_cluster_round_trip() {
        for base in "ㄱㄴㄹㅂ".chars() {
            for add in "ㄱㅁㅂㅅㅈㅌㅍㅎ".chars() {
                if let Some(cluster) = combine_consonants(base, add) {
                    assert_eq!(split_consonants(cluster), Some((base, add)));
                    // Every cluster is a valid jongseong but never a choseong
                    assert!(jongseong_index(cluster).is_some());
                    assert!(choseong_index(cluster).is_none());
                }
            }
        }
    }

    #[test]
    fn test_compound_vowel_round_trip() {
        assert_eq!(combine_vowels('ㅗ', 'ㅏ'), Some('ㅘ'));
        assert_eq!(split_vowels('ㅘ'), Some(('ㅗ', 'ㅏ')));
        assert_eq!(combine_vowels('ㅏ', 'ㅗ'), None);
    }

    #[test]
    fn test_classification() {
        assert!(is_consonant('ㄱ'));
        assert!(is_consonant('ㅄ'));
        assert!(!is_consonant('ㅏ'));
        assert!(is_vowel('ㅢ'));
        assert!(!is_vowel('ㅎ'));
        assert!(!is_vowel('a'));
    }

    #[test]
    fn test_double_consonant_not_jongseong() {
        // ㄸ, ㅃ, ㅉ can lead but never end a syllable
        for ch in "ㄸㅃㅉ".chars() {
            assert!(choseong_index(ch).is_some());
            assert_eq!(jongseong_index(ch), None);
        }
    }
}
