use std::collections::BTreeSet;

use chrono::NaiveDate;
use log::debug;

use crate::{Name, ParsedExercise, parse_line};

/// Workout record built from the exercises logged in one chat message.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub date: NaiveDate,
    pub exercises: Vec<ParsedExercise>,
}

impl Workout {
    #[must_use]
    pub fn exercise_names(&self) -> BTreeSet<&Name> {
        self.exercises.iter().map(|e| &e.name).collect()
    }

    #[must_use]
    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().map(|e| u32::from(e.sets)).sum()
    }

    #[must_use]
    pub fn avg_weight(&self) -> Option<f32> {
        let weights = self
            .exercises
            .iter()
            .filter_map(|e| e.weight)
            .collect::<Vec<_>>();
        if weights.is_empty() {
            None
        } else {
            #[allow(clippy::cast_precision_loss)]
            Some(weights.iter().map(|w| f32::from(*w)).sum::<f32>() / weights.len() as f32)
        }
    }

    /// Total load in kg over all exercises with a stated weight.
    #[must_use]
    pub fn tonnage(&self) -> f32 {
        self.exercises
            .iter()
            .filter_map(|e| {
                e.weight.map(|w| {
                    #[allow(clippy::cast_precision_loss)]
                    let volume = (u32::from(e.sets) * u32::from(e.reps)) as f32;
                    volume * f32::from(w)
                })
            })
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMessage {
    pub exercises: Vec<ParsedExercise>,
    pub unparsed: Vec<String>,
}

/// Applies [`parse_line`] to every non-empty line of a chat message.
///
/// Lines the parser rejects are kept verbatim in `unparsed` so that the
/// caller can escalate them to its AI classifier or re-prompt the user.
#[must_use]
pub fn parse_message(text: &str) -> ParsedMessage {
    let mut exercises = Vec::new();
    let mut unparsed = Vec::new();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match parse_line(line) {
            Ok(exercise) => exercises.push(exercise),
            Err(err) => {
                debug!("failed to parse line \"{line}\": {err}");
                unparsed.push(line.to_string());
            }
        }
    }

    ParsedMessage {
        exercises,
        unparsed,
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Reps, Sets, Weight};

    #[test]
    fn test_parse_message() {
        let message = "panca piana 4x8 80kg\n\nsquat 5x5 100kg\nx\n4x8 60kg";

        assert_eq!(
            parse_message(message),
            ParsedMessage {
                exercises: vec![
                    exercise("Panca piana", 4, 8, Some(80.0)),
                    exercise("Squat", 5, 5, Some(100.0)),
                ],
                unparsed: vec!["x".to_string(), "4x8 60kg".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_message_empty() {
        assert_eq!(
            parse_message("\n  \n"),
            ParsedMessage {
                exercises: vec![],
                unparsed: vec![],
            }
        );
    }

    #[test]
    fn test_workout_exercise_names() {
        let workout = workout(vec![
            exercise("Panca piana", 4, 8, Some(80.0)),
            exercise("Panca piana", 3, 10, Some(60.0)),
            exercise("Squat", 5, 5, Some(100.0)),
        ]);

        assert_eq!(
            workout
                .exercise_names()
                .iter()
                .map(|n| n.as_ref().as_str())
                .collect::<Vec<_>>(),
            vec!["Panca piana", "Squat"]
        );
    }

    #[test]
    fn test_workout_total_sets() {
        let workout = workout(vec![
            exercise("Panca piana", 4, 8, Some(80.0)),
            exercise("Squat", 5, 5, None),
            exercise("Plank", 3, 1, None),
        ]);

        assert_eq!(workout.total_sets(), 12);
    }

    #[test]
    fn test_workout_avg_weight() {
        assert_eq!(workout(vec![]).avg_weight(), None);
        assert_eq!(
            workout(vec![exercise("Squat", 5, 5, None)]).avg_weight(),
            None
        );
        assert_approx_eq!(
            workout(vec![
                exercise("Panca piana", 4, 8, Some(80.0)),
                exercise("Squat", 5, 5, Some(100.0)),
                exercise("Plank", 3, 1, None),
            ])
            .avg_weight()
            .unwrap(),
            90.0,
            0.001
        );
    }

    #[test]
    fn test_workout_tonnage() {
        assert_approx_eq!(workout(vec![]).tonnage(), 0.0, 0.001);
        assert_approx_eq!(
            workout(vec![
                exercise("Panca piana", 4, 8, Some(80.0)),
                exercise("Squat", 5, 5, Some(100.0)),
                exercise("Plank", 3, 1, None),
            ])
            .tonnage(),
            5060.0,
            0.001
        );
    }

    fn workout(exercises: Vec<ParsedExercise>) -> Workout {
        Workout {
            date: NaiveDate::from_ymd_opt(2020, 2, 2).unwrap(),
            exercises,
        }
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
