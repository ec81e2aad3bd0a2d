//! REST
//!
//! Read access to the PostgREST interface of the Supabase backend. Every repository call is a
//! single `GET` request without retries.

use std::fmt::Display;

use chrono::{DateTime, NaiveDateTime, Utc};
use gloo_net::http::{Request, Response};
use log::debug;
use muscle_atlas_domain as domain;
use muscle_atlas_web_app::Config;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Clone)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

/// Endpoint and credentials of the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub url: String,
    pub anon_key: String,
}

impl From<&Config> for Connection {
    fn from(value: &Config) -> Self {
        Self {
            url: value.supabase_url.clone(),
            anon_key: value.supabase_anon_key.clone(),
        }
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest> {
    pub connection: Connection,
    pub sender: S,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub const fn new(connection: Connection) -> Self {
        Self {
            connection,
            sender: GlooNetSendRequest,
        }
    }
}

impl<S: SendRequest> REST<S> {
    async fn fetch<T>(&self, query: &Query) -> Result<Vec<T>, domain::StorageError>
    where
        T: 'static + DeserializeOwned,
    {
        debug!("fetching {}", query.table);

        let request = Request::get(&query.url(&self.connection.url))
            .header("apikey", &self.connection.anon_key)
            .header(
                "Authorization",
                &format!("Bearer {}", self.connection.anon_key),
            )
            .header("Accept", "application/json")
            .build()
            .map_err(|err| domain::StorageError::Other(Box::new(err)))?;

        let Ok(response) = self.sender.send_request(request).await else {
            return Err(domain::StorageError::NoConnection);
        };

        if !response.ok() {
            return Err(domain::StorageError::Status {
                status: response.status(),
                text: response.status_text(),
            });
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|err| domain::StorageError::Deserialization(err.to_string()))
    }

    async fn fetch_all<T, D>(&self, query: &Query) -> Result<Vec<D>, domain::ReadError>
    where
        T: 'static + DeserializeOwned + TryInto<D, Error = domain::StorageError>,
    {
        Ok(self
            .fetch::<T>(query)
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<D>, _>>()?)
    }

    async fn fetch_optional<T, D>(&self, query: &Query) -> Result<Option<D>, domain::ReadError>
    where
        T: 'static + DeserializeOwned + TryInto<D, Error = domain::StorageError>,
    {
        Ok(at_most_one(self.fetch::<T>(query).await?)?
            .map(TryInto::try_into)
            .transpose()?)
    }
}

impl<S: SendRequest> domain::ExerciseRepository for REST<S> {
    async fn read_exercise(
        &self,
        id: &domain::ExerciseID,
    ) -> Result<Option<domain::Exercise>, domain::ReadError> {
        self.fetch_optional::<Exercise, _>(&Query::new(Table::Exercises).eq("id", id))
            .await
    }

    async fn read_exercises(
        &self,
        ids: &[domain::ExerciseID],
    ) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        self.fetch_all::<Exercise, _>(&Query::new(Table::Exercises).is_in("id", ids))
            .await
    }
}

impl<S: SendRequest> domain::ExerciseDetailRepository for REST<S> {
    async fn read_exercise_details(
        &self,
        exercise_id: &domain::ExerciseID,
    ) -> Result<Vec<domain::ExerciseDetail>, domain::ReadError> {
        self.fetch_all::<ExerciseDetail, _>(
            &Query::new(Table::ExerciseDetails).eq("exercise_id", exercise_id),
        )
        .await
    }
}

impl<S: SendRequest> domain::MemberRepository for REST<S> {
    async fn read_member(
        &self,
        id: &domain::MemberID,
    ) -> Result<Option<domain::Member>, domain::ReadError> {
        self.fetch_optional::<Member, _>(&Query::new(Table::Member).eq("id", id))
            .await
    }
}

impl<S: SendRequest> domain::MemberInviteRepository for REST<S> {
    async fn read_member_invite(
        &self,
        invite_code: &domain::InviteCode,
    ) -> Result<Option<domain::MemberInvite>, domain::ReadError> {
        self.fetch_optional::<MemberInvite, _>(
            &Query::new(Table::MemberInvite).eq("invite_code", invite_code),
        )
        .await
    }
}

impl<S: SendRequest> domain::MemberExerciseRepository for REST<S> {
    async fn read_member_exercises(
        &self,
        member_id: &domain::MemberID,
    ) -> Result<Vec<domain::MemberExercise>, domain::ReadError> {
        self.fetch_all::<MemberExercise, _>(
            &Query::new(Table::MemberExercises).eq("member_id", member_id),
        )
        .await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Table {
    Exercises,
    ExerciseDetails,
    Member,
    MemberInvite,
    MemberExercises,
}

/// Selection of all columns of a table, narrowed by filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: Table,
    filters: Vec<(String, String)>,
}

impl Query {
    #[must_use]
    pub fn new(table: Table) -> Self {
        Self {
            table,
            filters: vec![],
        }
    }

    #[must_use]
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.filters.push((column.to_string(), format!("eq.{value}")));
        self
    }

    #[must_use]
    pub fn is_in<T: Display>(mut self, column: &str, values: impl IntoIterator<Item = T>) -> Self {
        let values = values
            .into_iter()
            .map(|value| quote(&value.to_string()))
            .collect::<Vec<_>>()
            .join(",");
        self.filters
            .push((column.to_string(), format!("in.({values})")));
        self
    }

    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        let mut url = format!("{base_url}/rest/v1/{}?select=*", self.table);
        for (column, filter) in &self.filters {
            url.push('&');
            url.push_str(column);
            url.push('=');
            url.push_str(&urlencoding::encode(filter));
        }
        url
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

fn at_most_one<T>(rows: Vec<T>) -> Result<Option<T>, domain::StorageError> {
    if rows.len() > 1 {
        return Err(domain::StorageError::MultipleRows(rows.len()));
    }
    Ok(rows.into_iter().next())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = domain::StorageError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(domain::Exercise {
            id: value.id.into(),
            name: value.name,
            created_at: value.created_at.as_deref().and_then(parse_timestamp_lenient),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseDetail {
    pub id: String,
    pub exercise_id: String,
    pub movement_type: String,
    pub contraction_type: String,
    pub detail_category: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TryFrom<ExerciseDetail> for domain::ExerciseDetail {
    type Error = domain::StorageError;

    fn try_from(value: ExerciseDetail) -> Result<Self, Self::Error> {
        Ok(domain::ExerciseDetail {
            id: value.id.into(),
            exercise_id: value.exercise_id.into(),
            movement_type: value.movement_type,
            contraction_type: value.contraction_type,
            detail_category: value.detail_category,
            description: value.description,
            created_at: value.created_at.as_deref().and_then(parse_timestamp_lenient),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: Option<String>,
    pub memo: Option<String>,
    pub tags: Option<Vec<MemberTag>>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

impl TryFrom<Member> for domain::Member {
    type Error = domain::StorageError;

    fn try_from(value: Member) -> Result<Self, Self::Error> {
        Ok(domain::Member {
            id: value.id.into(),
            name: value.name.unwrap_or_default(),
            memo: value.memo.unwrap_or_default(),
            tags: value
                .tags
                .unwrap_or_default()
                .into_iter()
                .map(domain::MemberTag::from)
                .collect(),
            created_at: from_timestamp_millis(value.created_at)?,
            updated_at: value.updated_at.map(from_timestamp_millis).transpose()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberTag {
    pub text: String,
    pub icon: String,
    pub color: String,
}

impl From<MemberTag> for domain::MemberTag {
    fn from(value: MemberTag) -> Self {
        domain::MemberTag {
            color: domain::TagColor::from(value.color.as_str()),
            text: value.text,
            icon: value.icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberExercise {
    pub id: String,
    pub member_id: String,
    pub exercise_id: String,
    pub can_perform: bool,
}

impl TryFrom<MemberExercise> for domain::MemberExercise {
    type Error = domain::StorageError;

    fn try_from(value: MemberExercise) -> Result<Self, Self::Error> {
        Ok(domain::MemberExercise {
            id: value.id.into(),
            member_id: value.member_id.into(),
            exercise_id: value.exercise_id.into(),
            can_perform: value.can_perform,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberInvite {
    pub id: String,
    pub member_id: String,
    pub invite_code: String,
    pub expires_at: i64,
}

impl TryFrom<MemberInvite> for domain::MemberInvite {
    type Error = domain::StorageError;

    fn try_from(value: MemberInvite) -> Result<Self, Self::Error> {
        Ok(domain::MemberInvite {
            id: value.id.into(),
            member_id: value.member_id.into(),
            invite_code: value.invite_code.into(),
            expires_at: from_timestamp_millis(value.expires_at)?,
        })
    }
}

fn from_timestamp_millis(millis: i64) -> Result<DateTime<Utc>, domain::StorageError> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        domain::StorageError::Deserialization(format!("invalid timestamp: {millis}"))
    })
}

// Columns of type `timestamp` come without offset and are taken as UTC.
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, domain::StorageError> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|timestamp| timestamp.and_utc())
        })
        .map_err(|_| domain::StorageError::Deserialization(format!("invalid timestamp: {value}")))
}

fn parse_timestamp_lenient(value: &str) -> Option<DateTime<Utc>> {
    parse_timestamp(value)
        .inspect_err(|err| debug!("ignoring {err}"))
        .ok()
}
