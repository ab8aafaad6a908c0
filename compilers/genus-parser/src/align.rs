use nom::{bytes::complete::take_until, IResult};

use crate::ConlluError;
use genus_protocol::Span;

/// Locates token forms in `text` one after another.
///
/// Each search starts where the previous token ended, so repeated words map
/// to successive occurrences and spans never overlap.
#[derive(Debug)]
pub struct Aligner<'t> {
    text: &'t str,
    cursor: usize,
}

impl<'t> Aligner<'t> {
    pub fn new(text: &'t str) -> Self {
        Self { text, cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Byte span of the next occurrence of `form`.
    pub fn locate(&mut self, form: &str) -> Result<Span, ConlluError> {
        let unaligned = || ConlluError::Unaligned { form: form.to_string(), offset: self.cursor };
        if form.is_empty() {
            return Err(unaligned());
        }

        let rest = &self.text[self.cursor..];
        let found: IResult<&str, &str> = take_until(form)(rest);
        let (remaining, skipped) = found.map_err(|_| unaligned())?;
        debug_assert!(remaining.starts_with(form));

        let start = self.cursor + skipped.len();
        let end = start + form.len();
        self.cursor = end;
        Ok(Span::new(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locates_in_order() {
        let mut aligner = Aligner::new("Я шёл, и я шёл.");
        assert_eq!(aligner.locate("Я").unwrap(), Span::new(0, 2));
        assert_eq!(aligner.locate("шёл").unwrap(), Span::new(3, 9));
        assert_eq!(aligner.locate(",").unwrap(), Span::new(9, 10));
        assert_eq!(aligner.locate("и").unwrap(), Span::new(11, 13));
        assert_eq!(aligner.locate("я").unwrap(), Span::new(14, 16));
        // second "шёл", not the first
        assert_eq!(aligner.locate("шёл").unwrap(), Span::new(17, 23));
        assert_eq!(aligner.cursor(), 23);
    }

    #[test]
    fn test_missing_form() {
        let mut aligner = Aligner::new("Я шёл.");
        aligner.locate("шёл").unwrap();
        let err = aligner.locate("Я").unwrap_err();
        assert_eq!(err, ConlluError::Unaligned { form: "Я".to_string(), offset: 9 });
    }
}
