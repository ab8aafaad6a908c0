use std::convert::Infallible;

use genus_parser::{read_document, ConlluError};
use genus_protocol::ParsedSentence;

/// Source of dependency-parsed sentences for a document.
///
/// Implementations wrap whatever tokenizer, tagger and parser produced the
/// annotation. Spans of the returned tokens must index into `text`, and the
/// sentences must be in document order.
pub trait Annotator {
    type Error: std::error::Error + Send + Sync + 'static;

    fn annotate(&self, text: &str) -> Result<Vec<ParsedSentence>, Self::Error>;
}

/// Annotation read from CoNLL-U produced by an external parser.
#[derive(Debug, Clone)]
pub struct ConlluAnnotator {
    conllu: String,
}

impl ConlluAnnotator {
    pub fn new(conllu: impl Into<String>) -> Self {
        Self { conllu: conllu.into() }
    }
}

impl Annotator for ConlluAnnotator {
    type Error = ConlluError;

    fn annotate(&self, text: &str) -> Result<Vec<ParsedSentence>, ConlluError> {
        read_document(&self.conllu, text)
    }
}

/// Sentences that were already built by the caller.
#[derive(Debug, Clone, Default)]
pub struct Preparsed {
    sentences: Vec<ParsedSentence>,
}

impl Preparsed {
    pub fn new(sentences: Vec<ParsedSentence>) -> Self {
        Self { sentences }
    }
}

impl Annotator for Preparsed {
    type Error = Infallible;

    fn annotate(&self, _text: &str) -> Result<Vec<ParsedSentence>, Infallible> {
        Ok(self.sentences.clone())
    }
}
