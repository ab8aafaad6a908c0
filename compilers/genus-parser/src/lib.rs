//! CoNLL-U reader: turns the output of an external tagger and dependency
//! parser into [`ParsedSentence`]s whose spans point into the document text.

pub mod align;
pub mod conllu;
pub mod features;

use std::borrow::Cow;

use genus_protocol::{AnnotatedToken, Head, ParsedSentence, PartOfSpeech, SentenceError, UnknownLabel};
use log::{debug, warn};
use thiserror::Error;

use crate::align::Aligner;
use crate::conllu::{split_sentences, RawSentence, Row};
pub use crate::features::{parse_features, FeatureError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConlluError {
    #[error("line {line}: expected 10 tab-separated columns, found {found}")]
    MissingColumns { line: usize, found: usize },
    #[error("line {line}: invalid token id '{id}'")]
    InvalidId { line: usize, id: String },
    #[error("line {line}: invalid head '{head}'")]
    InvalidHead { line: usize, head: String },
    #[error("line {line}: {source}")]
    PartOfSpeech { line: usize, source: UnknownLabel },
    #[error("line {line}: {source}")]
    Features { line: usize, source: FeatureError },
    #[error("sentence at line {line}: {source}")]
    Sentence { line: usize, source: SentenceError },
    #[error("token '{form}' not found in the text after byte {offset}")]
    Unaligned { form: String, offset: usize },
}

/// Replaces `-LRB-`/`-RRB-` placeholders (any case) with round brackets.
pub fn normalize_brackets(s: &str) -> Cow<'_, str> {
    const PLACEHOLDERS: [(&str, &str); 2] = [("-lrb-", "("), ("-rrb-", ")")];

    let lower = s.to_ascii_lowercase();
    if !PLACEHOLDERS.iter().any(|(placeholder, _)| lower.contains(placeholder)) {
        return Cow::Borrowed(s);
    }

    // ASCII lowercasing keeps byte offsets, so `lower` indexes `s`.
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    'scan: while i < s.len() {
        for (placeholder, bracket) in PLACEHOLDERS {
            if lower[i..].starts_with(placeholder) {
                out.push_str(bracket);
                i += placeholder.len();
                continue 'scan;
            }
        }
        let Some(c) = s[i..].chars().next() else { break };
        out.push(c);
        i += c.len_utf8();
    }
    Cow::Owned(out)
}

fn token_from_row(row: &Row, index: usize, aligner: &mut Aligner) -> Result<AnnotatedToken, ConlluError> {
    let form = normalize_brackets(row.form);
    let pos = match row.upos {
        "_" => PartOfSpeech::Other,
        upos => upos
            .parse()
            .map_err(|source| ConlluError::PartOfSpeech { line: row.line, source })?,
    };
    let features =
        parse_features(row.feats).map_err(|source| ConlluError::Features { line: row.line, source })?;
    let span = aligner.locate(&form).map_err(|err| {
        warn!("line {}: {}", row.line, err);
        err
    })?;

    // "_" leaves the lemma unspecified.
    let lemma = match row.lemma {
        "_" => Cow::Borrowed(""),
        lemma => normalize_brackets(lemma),
    };
    let mut token = AnnotatedToken::new(index, &*form, pos)
        .with_lemma(lemma)
        .with_features(features)
        .with_span(span);

    token = match row.head {
        "_" => token,
        "0" => token.attached(Head::Root, "root"),
        head => {
            let governor = head
                .parse::<usize>()
                .ok()
                .filter(|&id| id > 0)
                .ok_or_else(|| ConlluError::InvalidHead { line: row.line, head: head.to_string() })?;
            token.attached(Head::Token(governor - 1), row.deprel)
        }
    };
    Ok(token)
}

fn build_sentence(raw: &RawSentence, aligner: &mut Aligner) -> Result<ParsedSentence, ConlluError> {
    let tokens = raw
        .rows
        .iter()
        .map(|row| token_from_row(row, row.id - 1, aligner))
        .collect::<Result<Vec<_>, _>>()?;
    ParsedSentence::new(tokens).map_err(|source| ConlluError::Sentence { line: raw.first_line, source })
}

/// Reads every sentence of `conllu` and aligns its tokens to `text`.
pub fn read_document(conllu: &str, text: &str) -> Result<Vec<ParsedSentence>, ConlluError> {
    let raw = split_sentences(conllu)?;
    let mut aligner = Aligner::new(text);
    let sentences = raw
        .iter()
        .map(|sentence| build_sentence(sentence, &mut aligner))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("read {} sentences, {} bytes aligned", sentences.len(), aligner.cursor());
    Ok(sentences)
}

/// Document text rebuilt from the `# text` comments, one sentence per line.
/// `None` if any sentence lacks the comment.
pub fn document_text(conllu: &str) -> Result<Option<String>, ConlluError> {
    let raw = split_sentences(conllu)?;
    let lines: Option<Vec<&str>> = raw.iter().map(|sentence| sentence.text).collect();
    Ok(lines.map(|lines| lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use genus_protocol::{Gender, Relation, Span};

    const SENTENCE: &str = "# text = Я сделал это (сам).\n\
        1\tЯ\tя\tPRON\t_\tCase=Nom|Number=Sing|Person=1\t2\tnsubj\t_\t_\n\
        2\tсделал\tсделать\tVERB\t_\tAspect=Perf|Gender=Masc|Number=Sing|Tense=Past|VerbForm=Fin\t0\troot\t_\t_\n\
        3\tэто\tэто\tPRON\t_\tCase=Acc|Gender=Neut|Number=Sing\t2\tobj\t_\t_\n\
        4\t-LRB-\t-lrb-\tPUNCT\t_\t_\t5\tpunct\t_\t_\n\
        5\tсам\tсам\tADJ\t_\tCase=Nom|Gender=Masc|Number=Sing\t2\tobl\t_\t_\n\
        6\t-RRB-\t-rrb-\tPUNCT\t_\t_\t5\tpunct\t_\t_\n\
        7\t.\t.\tPUNCT\t_\t_\t2\tpunct\t_\t_\n";

    #[test]
    fn test_reads_and_aligns() {
        let text = document_text(SENTENCE).unwrap().unwrap();
        assert_eq!(text, "Я сделал это (сам).");

        let sentences = read_document(SENTENCE, &text).unwrap();
        assert_eq!(sentences.len(), 1);
        let sentence = &sentences[0];
        assert_eq!(sentence.len(), 7);

        let verb = sentence.token(1).unwrap();
        assert_eq!(verb.text, "сделал");
        assert_eq!(verb.features.gender, Some(Gender::Masculine));
        assert_eq!(verb.head, Some(Head::Root));
        assert_eq!(verb.relation, Some(Relation::Root));
        assert_eq!(&text[verb.span.start..verb.span.end], "сделал");

        let bracket = sentence.token(3).unwrap();
        assert_eq!(bracket.text, "(");
        assert_eq!(bracket.lemma, "(");

        let pronoun = sentence.token(0).unwrap();
        assert_eq!(pronoun.governor(), Some(1));
        assert_eq!(pronoun.span, Span::new(0, 2));

        let dependents: Vec<_> = sentence.dependents(1).iter().map(|arc| arc.dependent).collect();
        assert_eq!(dependents, vec![0, 2, 4, 6]);
    }

    #[test]
    fn test_unspecified_lemma_is_empty() {
        let conllu = "1\tготовая\t_\tADJ\t_\tCase=Nom|Gender=Fem\t0\troot\t_\t_\n";
        let sentences = read_document(conllu, "готовая").unwrap();
        let token = sentences[0].token(0).unwrap();
        assert_eq!(token.text, "готовая");
        assert_eq!(token.lemma, "");
    }

    #[test]
    fn test_spans_continue_across_sentences() {
        let conllu = "1\tДа\tда\tPART\t_\t_\t0\troot\t_\t_\n\n1\tда\tда\tPART\t_\t_\t0\troot\t_\t_\n";
        let sentences = read_document(conllu, "Да, да").unwrap();
        assert_eq!(sentences[0].span(), Some(Span::new(0, 4)));
        assert_eq!(sentences[1].span(), Some(Span::new(6, 10)));
    }

    #[test]
    fn test_unaligned_form() {
        let err = read_document(SENTENCE, "Я сделал то.").unwrap_err();
        assert_eq!(err, ConlluError::Unaligned { form: "это".to_string(), offset: 15 });
    }

    #[test]
    fn test_disconnected_and_bad_heads() {
        let loose = "1\tДа\tда\tPART\t_\t_\t_\t_\t_\t_\n";
        let sentences = read_document(loose, "Да").unwrap();
        assert_eq!(sentences[0].token(0).unwrap().head, None);

        let bad = "1\tДа\tда\tPART\t_\t_\tx\troot\t_\t_\n";
        assert_eq!(
            read_document(bad, "Да").unwrap_err(),
            ConlluError::InvalidHead { line: 1, head: "x".to_string() }
        );

        let out_of_range = "1\tДа\tда\tPART\t_\t_\t5\tdep\t_\t_\n";
        assert!(matches!(
            read_document(out_of_range, "Да").unwrap_err(),
            ConlluError::Sentence { line: 1, source: SentenceError::HeadOutOfRange { .. } }
        ));
    }

    #[test]
    fn test_unknown_tags() {
        let bad_pos = "1\tДа\tда\tWORD\t_\t_\t0\troot\t_\t_\n";
        assert!(matches!(read_document(bad_pos, "Да"), Err(ConlluError::PartOfSpeech { line: 1, .. })));

        let bad_feats = "1\tДа\tда\tPART\t_\tGender=Com\t0\troot\t_\t_\n";
        assert!(matches!(read_document(bad_feats, "Да"), Err(ConlluError::Features { line: 1, .. })));
    }

    #[test]
    fn test_missing_text_comment() {
        let conllu = "1\tДа\tда\tPART\t_\t_\t0\troot\t_\t_\n";
        assert_eq!(document_text(conllu).unwrap(), None);
    }

    #[test]
    fn test_normalize_brackets() {
        assert_eq!(normalize_brackets("-LRB-"), "(");
        assert_eq!(normalize_brackets("-rRb-"), ")");
        assert_eq!(normalize_brackets("x-LRB-y-RRB-"), "x(y)");
        assert!(matches!(normalize_brackets("слово"), Cow::Borrowed("слово")));
    }
}
