use chrono::{DateTime, Utc};

use crate::{Exercise, ExerciseID, InviteCode, PageError, ReadError, id::string_id};

#[allow(async_fn_in_trait)]
pub trait MemberService {
    /// Resolves an invite code to the member and the member's exercises.
    async fn get_member_page(&self, invite_code: &InviteCode) -> Result<MemberPage, PageError>;
}

#[allow(async_fn_in_trait)]
pub trait MemberRepository {
    async fn read_member(&self, id: &MemberID) -> Result<Option<Member>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait MemberExerciseRepository {
    async fn read_member_exercises(
        &self,
        member_id: &MemberID,
    ) -> Result<Vec<MemberExercise>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberID,
    pub name: String,
    pub memo: String,
    pub tags: Vec<MemberTag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Member {
    /// First character of the name, used as avatar.
    #[must_use]
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    /// Time of the last change to the memo.
    #[must_use]
    pub fn memo_date(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }
}

string_id!(MemberID);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberTag {
    pub text: String,
    pub icon: String,
    pub color: TagColor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagColor {
    Primary,
    Warning,
    Other(String),
}

impl From<&str> for TagColor {
    fn from(value: &str) -> Self {
        match value {
            "PRIMARY" => TagColor::Primary,
            "WARNING" => TagColor::Warning,
            other => TagColor::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberExercise {
    pub id: MemberExerciseID,
    pub member_id: MemberID,
    pub exercise_id: ExerciseID,
    pub can_perform: bool,
}

string_id!(MemberExerciseID);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberExerciseEntry {
    pub exercise: Exercise,
    pub can_perform: bool,
}

/// Pairs every member exercise with its exercise.
///
/// Member exercises whose exercise is missing are dropped. The order of `member_exercises` is
/// kept.
#[must_use]
pub fn join_member_exercises(
    member_exercises: &[MemberExercise],
    exercises: &[Exercise],
) -> Vec<MemberExerciseEntry> {
    member_exercises
        .iter()
        .filter_map(|member_exercise| {
            exercises
                .iter()
                .find(|e| e.id == member_exercise.exercise_id)
                .map(|exercise| MemberExerciseEntry {
                    exercise: exercise.clone(),
                    can_perform: member_exercise.can_perform,
                })
        })
        .collect()
}

/// Distinct exercise IDs in order of first occurrence.
#[must_use]
pub fn exercise_ids(member_exercises: &[MemberExercise]) -> Vec<ExerciseID> {
    let mut ids: Vec<ExerciseID> = Vec::with_capacity(member_exercises.len());
    for member_exercise in member_exercises {
        if !ids.contains(&member_exercise.exercise_id) {
            ids.push(member_exercise.exercise_id.clone());
        }
    }
    ids
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPage {
    pub member: Member,
    pub exercises: Vec<MemberExerciseEntry>,
}

impl MemberPage {
    #[must_use]
    pub fn has_exercises(&self) -> bool {
        !self.exercises.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn exercise(id: &str, name: &str) -> Exercise {
        Exercise {
            id: id.into(),
            name: name.to_string(),
            created_at: Some(DateTime::<Utc>::UNIX_EPOCH),
        }
    }

    fn member_exercise(id: &str, exercise_id: &str, can_perform: bool) -> MemberExercise {
        MemberExercise {
            id: id.into(),
            member_id: "m".into(),
            exercise_id: exercise_id.into(),
            can_perform,
        }
    }

    fn member(name: &str, updated_at: Option<DateTime<Utc>>) -> Member {
        Member {
            id: "m".into(),
            name: name.to_string(),
            memo: String::new(),
            tags: vec![],
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            updated_at,
        }
    }

    #[test]
    fn test_join_member_exercises() {
        let exercises = vec![exercise("2", "데드리프트"), exercise("1", "벤치프레스")];
        let member_exercises = vec![
            member_exercise("a", "1", true),
            member_exercise("b", "3", true),
            member_exercise("c", "2", false),
        ];

        assert_eq!(
            join_member_exercises(&member_exercises, &exercises),
            vec![
                MemberExerciseEntry {
                    exercise: exercise("1", "벤치프레스"),
                    can_perform: true,
                },
                MemberExerciseEntry {
                    exercise: exercise("2", "데드리프트"),
                    can_perform: false,
                },
            ]
        );
    }

    #[test]
    fn test_join_member_exercises_keeps_duplicates() {
        let exercises = vec![exercise("1", "스쿼트")];
        let member_exercises = vec![
            member_exercise("a", "1", false),
            member_exercise("b", "1", true),
        ];

        assert_eq!(
            join_member_exercises(&member_exercises, &exercises)
                .iter()
                .map(|e| e.can_perform)
                .collect::<Vec<_>>(),
            vec![false, true]
        );
    }

    #[rstest]
    #[case::no_member_exercises(vec![], vec![exercise("1", "A")])]
    #[case::no_exercises(vec![member_exercise("a", "1", true)], vec![])]
    #[case::no_match(vec![member_exercise("a", "1", true)], vec![exercise("2", "B")])]
    fn test_join_member_exercises_empty(
        #[case] member_exercises: Vec<MemberExercise>,
        #[case] exercises: Vec<Exercise>,
    ) {
        assert_eq!(join_member_exercises(&member_exercises, &exercises), vec![]);
    }

    #[test]
    fn test_exercise_ids() {
        assert_eq!(
            exercise_ids(&[
                member_exercise("a", "2", true),
                member_exercise("b", "1", true),
                member_exercise("c", "2", false),
            ]),
            vec![ExerciseID::from("2"), ExerciseID::from("1")]
        );
        assert_eq!(exercise_ids(&[]), vec![]);
    }

    #[rstest]
    #[case("PRIMARY", TagColor::Primary)]
    #[case("WARNING", TagColor::Warning)]
    #[case("SUCCESS", TagColor::Other("SUCCESS".to_string()))]
    #[case("primary", TagColor::Other("primary".to_string()))]
    fn test_tag_color_from_str(#[case] value: &str, #[case] expected: TagColor) {
        assert_eq!(TagColor::from(value), expected);
    }

    #[rstest]
    #[case("김철수", '김')]
    #[case("Alice", 'A')]
    #[case("", '?')]
    fn test_member_initial(#[case] name: &str, #[case] expected: char) {
        assert_eq!(member(name, None).initial(), expected);
    }

    #[test]
    fn test_member_memo_date() {
        let updated_at = DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(3);

        assert_eq!(
            member("A", None).memo_date(),
            DateTime::<Utc>::UNIX_EPOCH
        );
        assert_eq!(member("A", Some(updated_at)).memo_date(), updated_at);
    }

    #[test]
    fn test_member_page_has_exercises() {
        let mut page = MemberPage {
            member: member("A", None),
            exercises: vec![],
        };
        assert!(!page.has_exercises());

        page.exercises.push(MemberExerciseEntry {
            exercise: exercise("1", "A"),
            can_perform: true,
        });
        assert!(page.has_exercises());
    }
}
