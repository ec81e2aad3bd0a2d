use chrono::{DateTime, Utc};

use crate::{ExercisePage, PageError, ReadError, id::string_id};

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    /// Loads an exercise together with its grouped details.
    async fn get_exercise_page(&self, id: &ExerciseID) -> Result<ExercisePage, PageError>;
}

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercise(&self, id: &ExerciseID) -> Result<Option<Exercise>, ReadError>;
    async fn read_exercises(&self, ids: &[ExerciseID]) -> Result<Vec<Exercise>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    /// Absent when the stored value is not a recognizable timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

string_id!(ExerciseID);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", None)]
    #[case("1", Some(ExerciseID::from("1")))]
    #[case(
        "8c5a4f6e-5d0f-4a4f-9b9e-2f4c7a0e0b11",
        Some(ExerciseID::from("8c5a4f6e-5d0f-4a4f-9b9e-2f4c7a0e0b11"))
    )]
    fn test_exercise_id_resolve(#[case] segment: &str, #[case] expected: Option<ExerciseID>) {
        assert_eq!(ExerciseID::resolve(segment), expected);
    }

    #[test]
    fn test_exercise_id_route_segment() {
        let id = ExerciseID::from("abc");
        assert_eq!(id.to_string(), "abc");
        assert_eq!(id.to_string().parse::<ExerciseID>(), Ok(id));
    }
}
