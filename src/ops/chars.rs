//! Letter classification.

use std::fmt;

use super::error::{OpError, OpResult};

/// Vowel/consonant verdict for a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Letter {
    Vowel,
    Consonant,
}

impl Letter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vowel => "Vowel",
            Self::Consonant => "Consonant",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an ASCII letter case-insensitively. a/e/i/o/u are vowels;
/// any non-alphabetic character is rejected.
pub fn vowel_or_consonant(c: char) -> OpResult<Letter> {
    if !c.is_ascii_alphabetic() {
        return Err(OpError::NotAlphabetic(c));
    }
    match c.to_ascii_lowercase() {
        'a' | 'e' | 'i' | 'o' | 'u' => Ok(Letter::Vowel),
        _ => Ok(Letter::Consonant),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(vowel_or_consonant('a'), Ok(Letter::Vowel));
        assert_eq!(vowel_or_consonant('E'), Ok(Letter::Vowel));
        assert_eq!(vowel_or_consonant('z'), Ok(Letter::Consonant));
        assert_eq!(vowel_or_consonant('Q'), Ok(Letter::Consonant));
        assert_eq!(Letter::Vowel.to_string(), "Vowel");
        assert_eq!(Letter::Consonant.as_str(), "Consonant");
    }

    #[test]
    fn non_letters_are_rejected() {
        assert_eq!(vowel_or_consonant('3'), Err(OpError::NotAlphabetic('3')));
        assert_eq!(vowel_or_consonant('!'), Err(OpError::NotAlphabetic('!')));
        assert_eq!(vowel_or_consonant('é'), Err(OpError::NotAlphabetic('é')));
    }
}
