use genus_protocol::{AnnotatedToken, ParsedSentence, Span};

/// Builds a sentence from tokens laid out left to right, one space apart,
/// so the spans match the text of a real document.
pub fn laid_out(tokens: Vec<AnnotatedToken>) -> ParsedSentence {
    let mut offset = 0;
    let tokens = tokens
        .into_iter()
        .map(|token| {
            let span = Span::new(offset, offset + token.text.len());
            offset = span.end + 1;
            token.with_span(span)
        })
        .collect();
    ParsedSentence::new(tokens).unwrap()
}

#[test]
fn test_laid_out_spans_follow_each_other() {
    use genus_protocol::PartOfSpeech;

    let sentence = laid_out(vec![
        AnnotatedToken::new(0, "Я", PartOfSpeech::Pronoun),
        AnnotatedToken::new(1, "был", PartOfSpeech::Auxiliary),
        AnnotatedToken::new(2, "готов", PartOfSpeech::Adjective),
    ]);
    let spans: Vec<_> = sentence.tokens().iter().map(|t| (t.span.start, t.span.end)).collect();
    assert_eq!(spans, vec![(0, 2), (3, 9), (10, 20)]);
}
