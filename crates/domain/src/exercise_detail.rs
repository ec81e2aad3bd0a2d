use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::{Exercise, ExerciseID, ReadError, id::string_id};

pub const MECHANICAL_MOVEMENT: &str = "기계적 움직임";
pub const STABILIZATION_MECHANISM: &str = "안정화 기전";

pub const ECCENTRIC: &str = "Eccentric";
pub const CONCENTRIC: &str = "Concentric";
pub const MUSCLE_ANALYSIS: &str = "근육 분석";

pub const PRIMARY_CATEGORY: &str = "Primary";

const DEFAULT_DESCENDING: &str = "Flexion";
const DEFAULT_ASCENDING: &str = "Extension";

#[allow(async_fn_in_trait)]
pub trait ExerciseDetailRepository {
    async fn read_exercise_details(
        &self,
        exercise_id: &ExerciseID,
    ) -> Result<Vec<ExerciseDetail>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseDetail {
    pub id: ExerciseDetailID,
    pub exercise_id: ExerciseID,
    pub movement_type: String,
    pub contraction_type: String,
    pub detail_category: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

string_id!(ExerciseDetailID);

/// Details of one movement type, keyed by contraction type in first-seen order.
pub type ContractionGroups = IndexMap<String, Vec<ExerciseDetail>>;

/// Details keyed by movement type and then by contraction type.
///
/// Keys keep the order in which they were first seen and every bucket keeps the order of
/// insertion. Only buckets that received at least one detail exist.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GroupedDetails(IndexMap<String, ContractionGroups>);

impl GroupedDetails {
    #[must_use]
    pub fn new(details: &[ExerciseDetail]) -> Self {
        details.iter().cloned().collect()
    }

    pub fn insert(&mut self, detail: ExerciseDetail) {
        let contraction_groups = self
            .0
            .entry(detail.movement_type.clone())
            .or_insert_with(IndexMap::new);
        let bucket = contraction_groups
            .entry(detail.contraction_type.clone())
            .or_insert_with(Vec::new);
        bucket.push(detail);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn movement(&self, movement_type: &str) -> Option<&ContractionGroups> {
        self.0.get(movement_type)
    }

    /// Returns an empty slice if the bucket does not exist.
    #[must_use]
    pub fn contraction(&self, movement_type: &str, contraction_type: &str) -> &[ExerciseDetail] {
        self.movement(movement_type)
            .and_then(|groups| groups.get(contraction_type))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContractionGroups)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<ExerciseDetail> for GroupedDetails {
    fn from_iter<T: IntoIterator<Item = ExerciseDetail>>(iter: T) -> Self {
        let mut grouped = Self::default();
        for detail in iter {
            grouped.insert(detail);
        }
        grouped
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExercisePage {
    pub exercise: Exercise,
    pub details: GroupedDetails,
}

impl ExercisePage {
    /// Phase labels of the mechanical movement, if it has an eccentric or concentric part.
    #[must_use]
    pub fn mechanics(&self) -> Option<MovementMechanics> {
        let eccentric = self.details.contraction(MECHANICAL_MOVEMENT, ECCENTRIC);
        let concentric = self.details.contraction(MECHANICAL_MOVEMENT, CONCENTRIC);

        if eccentric.is_empty() && concentric.is_empty() {
            return None;
        }

        Some(MovementMechanics {
            descending: primary_description(eccentric)
                .unwrap_or(DEFAULT_DESCENDING)
                .to_string(),
            ascending: primary_description(concentric)
                .unwrap_or(DEFAULT_ASCENDING)
                .to_string(),
        })
    }

    #[must_use]
    pub fn technical_cards(&self) -> Vec<DetailCard<'_>> {
        self.details
            .movement(MECHANICAL_MOVEMENT)
            .into_iter()
            .flatten()
            .filter(|(contraction_type, _)| {
                ![ECCENTRIC, CONCENTRIC, MUSCLE_ANALYSIS].contains(&contraction_type.as_str())
            })
            .map(DetailCard::from)
            .collect()
    }

    #[must_use]
    pub fn safety_cards(&self) -> Vec<DetailCard<'_>> {
        self.details
            .movement(STABILIZATION_MECHANISM)
            .into_iter()
            .flatten()
            .map(DetailCard::from)
            .collect()
    }

    #[must_use]
    pub fn has_details(&self) -> bool {
        !self.details.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementMechanics {
    pub descending: String,
    pub ascending: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailCard<'a> {
    pub title: &'a str,
    pub details: &'a [ExerciseDetail],
}

impl<'a> From<(&'a String, &'a Vec<ExerciseDetail>)> for DetailCard<'a> {
    fn from((title, details): (&'a String, &'a Vec<ExerciseDetail>)) -> Self {
        Self { title, details }
    }
}

fn primary_description(details: &[ExerciseDetail]) -> Option<&str> {
    details
        .iter()
        .find(|d| d.detail_category.as_deref() == Some(PRIMARY_CATEGORY))
        .and_then(|d| d.description.as_deref())
        .filter(|description| !description.is_empty())
}
