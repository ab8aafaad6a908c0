use crate::letters::drop_last_chars;
use crate::tables::irregular_past;

/// Switches the gender of a lower-case past-tense form.
pub fn adjust_past_tense(form: &str, masculine: bool) -> Option<String> {
    if let Some(irregular) = irregular_past(form, masculine) {
        return Some(irregular.to_string());
    }

    if masculine {
        form.strip_suffix('а').map(str::to_string)
    } else if form.ends_with('л') {
        Some(format!("{}а", form))
    } else {
        // лез -> лезла pattern for stems that drop the л in the masculine
        Some(format!("{}ла", form))
    }
}

/// Splits a reflexive "-ся"/"-сь" ending off a lower-case verb form.
pub fn split_reflexive(form: &str) -> Option<&str> {
    if form.ends_with("ся") || form.ends_with("сь") {
        Some(drop_last_chars(form, 2))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_past_tense() {
        assert_eq!(adjust_past_tense("делал", false).as_deref(), Some("делала"));
        assert_eq!(adjust_past_tense("делала", true).as_deref(), Some("делал"));
        assert_eq!(adjust_past_tense("мог", false).as_deref(), Some("могла"));
        assert_eq!(adjust_past_tense("делал", true), None);
    }

    #[test]
    fn test_irregular_past_tense() {
        assert_eq!(adjust_past_tense("пришёл", false).as_deref(), Some("пришла"));
        assert_eq!(adjust_past_tense("несла", true).as_deref(), Some("нёс"));
    }

    #[test]
    fn test_split_reflexive() {
        assert_eq!(split_reflexive("одевался"), Some("одевал"));
        assert_eq!(split_reflexive("одевалась"), Some("одевала"));
        assert_eq!(split_reflexive("делал"), None);
    }
}
