use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map, map_res},
    sequence::{separated_pair, tuple},
    IResult,
};

use crate::ConlluError;

/// Column count of a CoNLL-U word line.
pub const COLUMNS: usize = 10;

/// Value of the ID column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowId {
    /// Ordinary word, 1-based.
    Word(usize),
    /// Multiword token range such as `3-4`.
    Range(usize, usize),
    /// Empty node of the enhanced graph such as `5.1`.
    Empty(usize, usize),
}

/// One word line, borrowed from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    /// 1-based line number in the input.
    pub line: usize,
    pub id: usize,
    pub form: &'a str,
    pub lemma: &'a str,
    pub upos: &'a str,
    pub feats: &'a str,
    pub head: &'a str,
    pub deprel: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSentence<'a> {
    /// Line number of the sentence's first line.
    pub first_line: usize,
    /// Value of the `# text =` comment, if present.
    pub text: Option<&'a str>,
    pub rows: Vec<Row<'a>>,
}

fn number(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |digits: &str| digits.parse::<usize>())(input)
}

pub fn row_id(input: &str) -> IResult<&str, RowId> {
    all_consuming(alt((
        map(separated_pair(number, char('-'), number), |(first, last)| RowId::Range(first, last)),
        map(separated_pair(number, char('.'), number), |(word, node)| RowId::Empty(word, node)),
        map(number, RowId::Word),
    )))(input)
}

/// Returns the sentence text of a `# text = ...` comment line.
pub fn text_comment(line: &str) -> Option<&str> {
    let parsed: IResult<&str, _> = tuple((char('#'), space0, tag("text"), space0, char('='), space0))(line);
    parsed.ok().map(|(rest, _)| rest)
}

/// Parses one word line. Returns `None` for range and empty-node lines.
pub fn parse_row(line: &str, line_number: usize) -> Result<Option<Row<'_>>, ConlluError> {
    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() < COLUMNS {
        return Err(ConlluError::MissingColumns { line: line_number, found: columns.len() });
    }

    let id = match row_id(columns[0]) {
        Ok((_, RowId::Word(id))) if id > 0 => id,
        Ok((_, RowId::Range(..) | RowId::Empty(..))) => return Ok(None),
        _ => {
            return Err(ConlluError::InvalidId { line: line_number, id: columns[0].to_string() });
        }
    };

    Ok(Some(Row {
        line: line_number,
        id,
        form: columns[1],
        lemma: columns[2],
        upos: columns[3],
        feats: columns[5],
        head: columns[6],
        deprel: columns[7],
    }))
}

/// Splits CoNLL-U input into sentences. Blank lines end a sentence; comments
/// other than `# text` are ignored.
pub fn split_sentences(input: &str) -> Result<Vec<RawSentence<'_>>, ConlluError> {
    let mut sentences = Vec::new();
    let mut current: Option<RawSentence> = None;

    for (offset, line) in input.lines().enumerate() {
        let line_number = offset + 1;
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.trim().is_empty() {
            if let Some(sentence) = current.take() {
                if !sentence.rows.is_empty() {
                    sentences.push(sentence);
                }
            }
            continue;
        }

        let sentence = current.get_or_insert_with(|| RawSentence {
            first_line: line_number,
            text: None,
            rows: Vec::new(),
        });

        if line.starts_with('#') {
            if let Some(text) = text_comment(line) {
                sentence.text = Some(text);
            }
            continue;
        }

        if let Some(row) = parse_row(line, line_number)? {
            sentence.rows.push(row);
        }
    }

    if let Some(sentence) = current {
        if !sentence.rows.is_empty() {
            sentences.push(sentence);
        }
    }
    Ok(sentences)
}
