use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::morphology::{Features, PartOfSpeech};

/// Byte range of a token inside the document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The syntactic governor of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Head {
    Root,
    Token(usize),
}

impl Head {
    pub fn token(self) -> Option<usize> {
        match self {
            Head::Token(index) => Some(index),
            Head::Root => None,
        }
    }
}

/// Dependency relation to the governor.
///
/// Only the labels the agreement rules inspect get their own variant; every
/// other label is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Relation {
    Root,
    NominalSubject,
    Copula,
    Conjunct,
    AdjectivalModifier,
    Oblique,
    Other(String),
}

impl Relation {
    pub fn label(&self) -> &str {
        match self {
            Relation::Root => "root",
            Relation::NominalSubject => "nsubj",
            Relation::Copula => "cop",
            Relation::Conjunct => "conj",
            Relation::AdjectivalModifier => "amod",
            Relation::Oblique => "obl",
            Relation::Other(label) => label,
        }
    }
}

impl FromStr for Relation {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "root" => Relation::Root,
            "nsubj" => Relation::NominalSubject,
            "cop" => Relation::Copula,
            "conj" => Relation::Conjunct,
            "amod" => Relation::AdjectivalModifier,
            "obl" => Relation::Oblique,
            other => Relation::Other(other.to_string()),
        })
    }
}

impl From<&str> for Relation {
    fn from(label: &str) -> Self {
        match label.parse() {
            Ok(relation) => relation,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One parsed word or punctuation unit.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedToken {
    pub index: usize,
    /// Surface form as it appears in the document.
    pub text: String,
    /// Lower-cased dictionary form; empty when unknown.
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub features: Features,
    /// `None` when the token is not attached to the tree.
    pub head: Option<Head>,
    pub relation: Option<Relation>,
    pub span: Span,
}

impl AnnotatedToken {
    pub fn new(index: usize, text: impl Into<String>, pos: PartOfSpeech) -> Self {
        let text = text.into();
        Self {
            index,
            lemma: text.to_lowercase(),
            span: Span::new(0, text.len()),
            text,
            pos,
            features: Features::default(),
            head: None,
            relation: None,
        }
    }

    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = lemma.into().to_lowercase();
        self
    }

    pub fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Attaches the token to `head` with the given relation label.
    pub fn attached(mut self, head: Head, relation: &str) -> Self {
        self.head = Some(head);
        self.relation = Some(Relation::from(relation));
        self
    }

    /// Governor index, if the governor is another token.
    pub fn governor(&self) -> Option<usize> {
        self.head.and_then(Head::token)
    }
}

/// Outgoing dependency edge: `relation` from the governor to `dependent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arc {
    pub relation: Relation,
    pub dependent: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SentenceError {
    #[error("token at position {position} has index {index}")]
    NonContiguousIndex { position: usize, index: usize },
    #[error("token {index} points at governor {head}, but the sentence has {len} tokens")]
    HeadOutOfRange { index: usize, head: usize, len: usize },
    #[error("token {index} is its own governor")]
    SelfLoop { index: usize },
    #[error("token {index} has an inverted span {start}..{end}")]
    InvertedSpan { index: usize, start: usize, end: usize },
    #[error("token {index} starts at {start}, before the previous token ends at {previous_end}")]
    OverlappingSpan { index: usize, start: usize, previous_end: usize },
}

/// A dependency-parsed sentence: tokens addressed by index plus the
/// governor -> dependents adjacency.
///
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSentence {
    tokens: Vec<AnnotatedToken>,
    outgoing: BTreeMap<usize, Vec<Arc>>,
}

impl ParsedSentence {
    pub fn new(tokens: Vec<AnnotatedToken>) -> Result<Self, SentenceError> {
        let len = tokens.len();
        let mut outgoing: BTreeMap<usize, Vec<Arc>> = BTreeMap::new();
        let mut previous_end = 0;

        for (position, token) in tokens.iter().enumerate() {
            if token.index != position {
                return Err(SentenceError::NonContiguousIndex { position, index: token.index });
            }
            if token.span.start > token.span.end {
                return Err(SentenceError::InvertedSpan {
                    index: token.index,
                    start: token.span.start,
                    end: token.span.end,
                });
            }
            if token.span.start < previous_end {
                return Err(SentenceError::OverlappingSpan {
                    index: token.index,
                    start: token.span.start,
                    previous_end,
                });
            }
            previous_end = token.span.end;

            if let Some(head) = token.governor() {
                if head >= len {
                    return Err(SentenceError::HeadOutOfRange { index: token.index, head, len });
                }
                if head == token.index {
                    return Err(SentenceError::SelfLoop { index: token.index });
                }
                let relation = token
                    .relation
                    .clone()
                    .unwrap_or_else(|| Relation::Other(String::new()));
                outgoing.entry(head).or_default().push(Arc { relation, dependent: token.index });
            }
        }

        Ok(Self { tokens, outgoing })
    }

    pub fn tokens(&self) -> &[AnnotatedToken] {
        &self.tokens
    }

    pub fn token(&self, index: usize) -> Option<&AnnotatedToken> {
        self.tokens.get(index)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Outgoing arcs of `index`, in dependent order.
    pub fn dependents(&self, index: usize) -> &[Arc] {
        self.outgoing.get(&index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Byte range covered by the whole sentence.
    pub fn span(&self) -> Option<Span> {
        let first = self.tokens.first()?;
        let last = self.tokens.last()?;
        Some(Span::new(first.span.start, last.span.end))
    }
}
