use rkyv::{AlignedVec, Archive, Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A masculine noun lemma and its feminine counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct NounPair {
    pub masculine: String,
    pub feminine: String,
}

impl NounPair {
    pub fn new(masculine: impl Into<String>, feminine: impl Into<String>) -> Self {
        Self { masculine: masculine.into(), feminine: feminine.into() }
    }
}

/// Gender-paired noun lemmas, as shipped in a compiled lexicon file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct NounLexicon {
    pub version: u32,
    pub pairs: Vec<NounPair>,
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("invalid lexicon archive: {0}")]
    InvalidArchive(String),
    #[error("failed to serialize lexicon: {0}")]
    Serialize(String),
    #[error("unsupported lexicon version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },
}

impl NounLexicon {
    pub const VERSION: u32 = 1;

    pub fn new(pairs: Vec<NounPair>) -> Self {
        Self { version: Self::VERSION, pairs }
    }

    /// Validates and deserializes an rkyv archive produced by [`NounLexicon::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LexiconError> {
        // Archives must be aligned; file contents read into a Vec<u8> may not be.
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let lexicon: NounLexicon = rkyv::from_bytes(&aligned)
            .map_err(|e| LexiconError::InvalidArchive(e.to_string()))?;

        if lexicon.version != Self::VERSION {
            return Err(LexiconError::UnsupportedVersion {
                found: lexicon.version,
                expected: Self::VERSION,
            });
        }
        Ok(lexicon)
    }

    pub fn to_bytes(&self) -> Result<AlignedVec, LexiconError> {
        rkyv::to_bytes::<_, 1024>(self).map_err(|e| LexiconError::Serialize(e.to_string()))
    }
}

/// Requested gender for one discourse role (speaker or addressee).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TargetGender {
    Masculine,
    Feminine,
    #[default]
    Unchanged,
}

impl TargetGender {
    /// `Some(true)` for masculine, `Some(false)` for feminine, `None` when the
    /// role should be left alone.
    pub fn as_masculine(self) -> Option<bool> {
        match self {
            TargetGender::Masculine => Some(true),
            TargetGender::Feminine => Some(false),
            TargetGender::Unchanged => None,
        }
    }

    pub fn from_flag(is_male: bool) -> Self {
        if is_male {
            TargetGender::Masculine
        } else {
            TargetGender::Feminine
        }
    }
}
