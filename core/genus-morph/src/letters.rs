use bitflags::bitflags;

bitflags! {
    /// Phonological classes of lower-case Cyrillic letters.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct LetterClass: u8 {
        const VOWEL = 1;
        const CONSONANT = 2;
        /// ж ч ш щ
        const SIBILANT = 4;
        /// к г х
        const VELAR = 8;
        /// ц, which patterns with the sibilants in noun endings
        const AFFRICATE = 16;
        /// й ь
        const SOFT_INDICATING = 32;

        const SIBILANT_OR_VELAR = Self::SIBILANT.bits() | Self::VELAR.bits();
        const NOUN_SIBILANT = Self::SIBILANT.bits() | Self::AFFRICATE.bits();
    }
}

impl LetterClass {
    pub fn of(c: char) -> LetterClass {
        match c {
            'а' | 'э' | 'ы' | 'у' | 'о' | 'я' | 'е' | 'ё' | 'ю' | 'и' => LetterClass::VOWEL,
            'ж' | 'ч' | 'ш' | 'щ' => LetterClass::CONSONANT | LetterClass::SIBILANT,
            'к' | 'г' | 'х' => LetterClass::CONSONANT | LetterClass::VELAR,
            'ц' => LetterClass::CONSONANT | LetterClass::AFFRICATE,
            'й' => LetterClass::CONSONANT | LetterClass::SOFT_INDICATING,
            'ь' => LetterClass::SOFT_INDICATING,
            'б' | 'в' | 'д' | 'з' | 'л' | 'м' | 'н' | 'п' | 'р' | 'с' | 'т' | 'ф' => LetterClass::CONSONANT,
            _ => LetterClass::empty(),
        }
    }

    /// True if `c` belongs to any class in `self`.
    pub fn matches(self, c: char) -> bool {
        LetterClass::of(c).intersects(self)
    }
}

pub fn is_vowel(c: char) -> bool {
    LetterClass::VOWEL.matches(c)
}

pub fn is_consonant(c: char) -> bool {
    LetterClass::CONSONANT.matches(c)
}

/// Last character of `s`.
pub(crate) fn last_char(s: &str) -> Option<char> {
    s.chars().next_back()
}

/// Character `n` places from the end of `s` (0 = last).
pub(crate) fn char_from_end(s: &str, n: usize) -> Option<char> {
    s.chars().rev().nth(n)
}

/// `s` without its last `n` characters.
pub(crate) fn drop_last_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return s;
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((offset, _)) => &s[..offset],
        None => "",
    }
}
