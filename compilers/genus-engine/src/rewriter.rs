use genus_agreement::select;
use genus_morph::Transformer;
use genus_protocol::{ParsedSentence, Span, TargetGender};
use log::{trace, warn};
use rayon::prelude::*;

/// Target genders for one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteOptions {
    pub speaker: TargetGender,
    pub addressee: TargetGender,
}

impl RewriteOptions {
    pub fn new(speaker: TargetGender, addressee: TargetGender) -> Self {
        Self { speaker, addressee }
    }

    /// True if neither role asks for a change.
    pub fn is_noop(&self) -> bool {
        self.speaker == TargetGender::Unchanged && self.addressee == TargetGender::Unchanged
    }
}

/// Replacement of one token's span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub index: usize,
    pub span: Span,
    pub replacement: String,
}

pub struct Rewriter<'a> {
    transformer: &'a Transformer,
}

impl<'a> Rewriter<'a> {
    pub fn new(transformer: &'a Transformer) -> Self {
        Self { transformer }
    }

    /// Edits for one sentence in ascending token order. Selected tokens
    /// without an applicable rule produce no edit.
    pub fn plan(&self, sentence: &ParsedSentence, options: RewriteOptions) -> Vec<Edit> {
        let selection = select(sentence, options.speaker, options.addressee);
        selection
            .iter()
            .filter_map(|(index, masculine)| {
                let token = sentence.token(index)?;
                let replacement = self.transformer.transform(token, masculine)?;
                trace!("token {}: '{}' -> '{}'", index, token.text, replacement);
                Some(Edit { index, span: token.span, replacement })
            })
            .collect()
    }

    /// Rewrites `text` given its sentences in document order.
    pub fn rewrite(&self, text: &str, sentences: &[ParsedSentence], options: RewriteOptions) -> String {
        if options.is_noop() {
            return text.to_string();
        }

        let plans: Vec<Vec<Edit>> = sentences
            .par_iter()
            .map(|sentence| self.plan(sentence, options))
            .collect();

        splice(text, plans.iter().flatten())
    }
}

/// Copies `text`, substituting each edit's span with its replacement.
///
/// Edits must come in document order. An edit that starts before the end of
/// the previous one, or whose span is not a char-boundary slice of `text`,
/// is skipped.
pub fn splice<'e>(text: &str, edits: impl IntoIterator<Item = &'e Edit>) -> String {
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    for edit in edits {
        let Span { start, end } = edit.span;
        let valid = start >= cursor
            && start <= end
            && end <= text.len()
            && text.is_char_boundary(start)
            && text.is_char_boundary(end);
        if !valid {
            warn!("skipping edit of token {} at {}..{} (cursor at {})", edit.index, start, end, cursor);
            continue;
        }

        output.push_str(&text[cursor..start]);
        output.push_str(&edit.replacement);
        cursor = end;
    }

    output.push_str(&text[cursor..]);
    output
}
