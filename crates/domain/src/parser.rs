use std::sync::OnceLock;

use regex::Regex;

use crate::{Name, Reps, Sets, Weight, catalog};

/// Exercise record extracted from one line of gym-log text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExercise {
    pub name: Name,
    pub sets: Sets,
    pub reps: Reps,
    pub weight: Option<Weight>,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("Non sembra un esercizio, prova ad es. 'panca piana 4x8 80kg'")]
    UnparseableInput,
}

/// Parses a free-form gym-log line such as "panca piana 4x8 80kg" into a
/// [`ParsedExercise`], without any network or AI call.
///
/// Sets and reps default to 3×10 when the line carries no sets×reps token.
/// A weight is only recognized when the number is followed by "kg".
pub fn parse_line(input: &str) -> Result<ParsedExercise, ParseError> {
    let trimmed = input.trim();

    if trimmed.chars().count() < 2 {
        return Err(ParseError::UnparseableInput);
    }

    let mut remaining = trimmed.to_string();
    let sets_reps = extract_sets_reps(&mut remaining);
    let weight = extract_weight(&mut remaining);

    let cleaned = remaining
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if cleaned.is_empty() {
        return Err(ParseError::UnparseableInput);
    }

    let name = resolve(&cleaned)?;
    let (sets, reps) = sets_reps.unwrap_or((Sets::DEFAULT, Reps::DEFAULT));

    Ok(ParsedExercise {
        name,
        sets,
        reps,
        weight,
    })
}

// The matched token is replaced by a single space so that the tokens around
// it do not join. Degenerate values are discarded after consumption.
fn extract_sets_reps(text: &mut String) -> Option<(Sets, Reps)> {
    let (range, sets, reps) = {
        let captures = sets_reps_regex()?.captures(text)?;
        (
            captures.get(0)?.range(),
            Sets::try_from(&captures[1]).ok(),
            Reps::try_from(&captures[2]).ok(),
        )
    };

    text.replace_range(range, " ");

    Some((sets?, reps?))
}

fn extract_weight(text: &mut String) -> Option<Weight> {
    let (range, value) = {
        let captures = weight_regex()?.captures(text)?;
        (captures.get(0)?.range(), captures[1].replace(',', "."))
    };

    text.replace_range(range, " ");

    Weight::try_from(value.as_str()).ok()
}

// Exact alias match, then longest alias key contained in the cleaned text
// (ties go to the lexicographically first key), then capitalization.
fn resolve(cleaned: &str) -> Result<Name, ParseError> {
    let alias = catalog::ALIASES.get(cleaned).or_else(|| {
        let mut longest: Option<&catalog::Alias> = None;

        for (key, alias) in catalog::ALIASES.iter() {
            if cleaned.contains(key) && key.len() > longest.map_or(0, |a| a.name.len()) {
                longest = Some(alias);
            }
        }

        longest
    });

    match alias {
        Some(alias) => Name::new(alias.canonical),
        None => Name::new(&capitalize(cleaned)),
    }
    .map_err(|_| ParseError::UnparseableInput)
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn sets_reps_regex() -> Option<&'static Regex> {
    static SETS_REPS: OnceLock<Option<Regex>> = OnceLock::new();
    SETS_REPS
        .get_or_init(|| Regex::new(r"(\d+)\s*[xX×]\s*(\d+)").ok())
        .as_ref()
}

fn weight_regex() -> Option<&'static Regex> {
    static WEIGHT: OnceLock<Option<Regex>> = OnceLock::new();
    WEIGHT
        .get_or_init(|| Regex::new(r"(\d+[.,]?\d*)\s*(?i:kg)").ok())
        .as_ref()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::full_line("panca piana 4x8 80kg", exercise("Panca piana", 4, 8, Some(80.0)))]
    #[case::spaced_separator("squat 3 x 10", exercise("Squat", 3, 10, None))]
    #[case::decimal_comma("curl manubri 80,5kg", exercise("Curl manubri", 3, 10, Some(80.5)))]
    #[case::exact_alias("stacco", exercise("Stacco da terra", 3, 10, None))]
    #[case::no_alias("corsa leggera", exercise("Corsa leggera", 3, 10, None))]
    #[case::uppercase_input("PANCA PIANA 4X8", exercise("Panca piana", 4, 8, None))]
    #[case::multiplication_sign("panca 4×8", exercise("Panca piana", 4, 8, None))]
    #[case::decimal_point("military press 42.5kg", exercise("Military press", 3, 10, Some(42.5)))]
    #[case::uppercase_unit("squat 5x5 100KG", exercise("Squat", 5, 5, Some(100.0)))]
    #[case::spaced_unit("squat 5x5 100 kg", exercise("Squat", 5, 5, Some(100.0)))]
    #[case::weight_before_name("80kg panca", exercise("Panca piana", 3, 10, Some(80.0)))]
    #[case::longest_contained_alias(
        "super set panca inclinata",
        exercise("Panca inclinata", 3, 10, None)
    )]
    #[case::contained_alias_with_noise("panca 100", exercise("Panca piana", 3, 10, None))]
    #[case::contained_alias_tie("croci panca", exercise("Croci con manubri", 3, 10, None))]
    #[case::first_sets_reps_token("panca 4x8 5x5", exercise("Panca piana", 4, 8, None))]
    #[case::bare_number_is_not_weight("corsa 30", exercise("Corsa 30", 3, 10, None))]
    #[case::surrounding_whitespace("  trazioni   3x6  ", exercise("Trazioni alla sbarra", 3, 6, None))]
    #[case::zero_sets("panca 0x8", exercise("Panca piana", 3, 10, None))]
    #[case::excessive_weight("panca 4x8 5000kg", exercise("Panca piana", 4, 8, None))]
    fn test_parse_line(#[case] input: &str, #[case] expected: ParsedExercise) {
        assert_eq!(parse_line(input), Ok(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("   ")]
    #[case::single_character("a")]
    #[case::tokens_only("4x8 80kg")]
    fn test_parse_line_unparseable(#[case] input: &str) {
        assert_eq!(parse_line(input), Err(ParseError::UnparseableInput));
    }

    #[test]
    fn test_parse_line_idempotence() {
        assert_eq!(
            parse_line("panca piana 4x8 80kg"),
            parse_line("panca piana 4x8 80kg")
        );
    }

    #[test]
    fn test_parse_error_message_names_an_example() {
        assert!(
            ParseError::UnparseableInput
                .to_string()
                .contains("panca piana 4x8 80kg")
        );
    }

    fn exercise(name: &str, sets: u32, reps: u32, weight: Option<f32>) -> ParsedExercise {
        ParsedExercise {
            name: Name::new(name).unwrap(),
            sets: Sets::new(sets).unwrap(),
            reps: Reps::new(reps).unwrap(),
            weight: weight.map(|w| Weight::new(w).unwrap()),
        }
    }
}
