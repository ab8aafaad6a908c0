use genus_protocol::{Features, UnknownLabel};
use log::trace;
use nom::{
    bytes::complete::take_while1,
    character::complete::char,
    combinator::all_consuming,
    multi::separated_list1,
    sequence::separated_pair,
    IResult,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    #[error("malformed FEATS column '{0}'")]
    Malformed(String),
    #[error(transparent)]
    UnknownValue(#[from] UnknownLabel),
}

fn feature_pairs(input: &str) -> IResult<&str, Vec<(&str, &str)>> {
    let name = take_while1(|c: char| c != '=' && c != '|');
    let value = take_while1(|c: char| c != '|');
    all_consuming(separated_list1(char('|'), separated_pair(name, char('='), value)))(input)
}

/// Parses a UD FEATS column (`Case=Nom|Gender=Masc`, or `_`).
///
/// Features the engine does not track are skipped; an unknown value of a
/// tracked feature is an error.
pub fn parse_features(column: &str) -> Result<Features, FeatureError> {
    let mut features = Features::new();
    if column == "_" || column.is_empty() {
        return Ok(features);
    }

    let (_, pairs) = feature_pairs(column).map_err(|_| FeatureError::Malformed(column.to_string()))?;
    for (name, value) in pairs {
        if !features.set(name, value)? {
            trace!("ignoring feature {}={}", name, value);
        }
    }
    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use genus_protocol::{Case, Gender, Number, Person, Tense, VerbForm};

    #[test]
    fn test_parses_tracked_features() {
        let features =
            parse_features("Aspect=Perf|Gender=Fem|Mood=Ind|Number=Sing|Tense=Past|VerbForm=Fin|Voice=Act").unwrap();
        assert_eq!(features.gender, Some(Gender::Feminine));
        assert_eq!(features.number, Some(Number::Singular));
        assert_eq!(features.tense, Some(Tense::Past));
        assert_eq!(features.verb_form, Some(VerbForm::Finite));
        assert_eq!(features.case, None);
    }

    #[test]
    fn test_empty_column() {
        assert_eq!(parse_features("_").unwrap(), Features::new());
    }

    #[test]
    fn test_person_and_case() {
        let features = parse_features("Case=Ins|Number=Sing|Person=1").unwrap();
        assert_eq!(features.case, Some(Case::Instrumental));
        assert_eq!(features.person, Some(Person::First));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse_features("Gender"), Err(FeatureError::Malformed(_))));
        assert!(matches!(parse_features("Case=Nom||Gender=Masc"), Err(FeatureError::Malformed(_))));
        assert!(matches!(parse_features("Gender=Com"), Err(FeatureError::UnknownValue(_))));
    }
}
