pub mod annotator;
pub mod rewriter;

use genus_morph::Transformer;
use genus_protocol::TargetGender;
use log::debug;
use thiserror::Error;

pub use annotator::{Annotator, ConlluAnnotator, Preparsed};
pub use rewriter::{splice, Edit, RewriteOptions, Rewriter};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("annotation failed: {0}")]
    Annotation(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Rewrites `text` so that words agreeing with the speaker and the addressee
/// take the requested genders.
///
/// Text outside the rewritten words is copied byte for byte. Empty text is
/// returned as is without calling the annotator.
pub fn adjust_gender<A: Annotator>(
    text: &str,
    annotator: &A,
    transformer: &Transformer,
    speaker: TargetGender,
    addressee: TargetGender,
) -> Result<String, EngineError> {
    if text.is_empty() {
        return Ok(String::new());
    }

    // 1. Annotation (external pipeline)
    let sentences = annotator
        .annotate(text)
        .map_err(|err| EngineError::Annotation(Box::new(err)))?;
    debug!("annotated {} sentences", sentences.len());

    // 2. Selection, transformation, reassembly
    let options = RewriteOptions::new(speaker, addressee);
    Ok(Rewriter::new(transformer).rewrite(text, &sentences, options))
}

pub fn adjust_speaker_gender<A: Annotator>(
    text: &str,
    annotator: &A,
    transformer: &Transformer,
    speaker: TargetGender,
) -> Result<String, EngineError> {
    adjust_gender(text, annotator, transformer, speaker, TargetGender::Unchanged)
}

pub fn adjust_addressee_gender<A: Annotator>(
    text: &str,
    annotator: &A,
    transformer: &Transformer,
    addressee: TargetGender,
) -> Result<String, EngineError> {
    adjust_gender(text, annotator, transformer, TargetGender::Unchanged, addressee)
}
