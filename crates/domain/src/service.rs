use chrono::Utc;
use log::{debug, error};

use crate::{
    ExerciseDetailRepository, ExerciseID, ExercisePage, ExerciseRepository, ExerciseService,
    GroupedDetails, InviteCode, InviteExpiryPolicy, MemberExerciseRepository,
    MemberInviteRepository, MemberPage, MemberRepository, MemberService, PageError, exercise_ids,
    join_member_exercises,
};

#[derive(Clone)]
pub struct Service<R> {
    repository: R,
    invite_expiry: InviteExpiryPolicy,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            invite_expiry: InviteExpiryPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_invite_expiry(mut self, invite_expiry: InviteExpiryPolicy) -> Self {
        self.invite_expiry = invite_expiry;
        self
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                crate::ReadError::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository + ExerciseDetailRepository> ExerciseService for Service<R> {
    async fn get_exercise_page(&self, id: &ExerciseID) -> Result<ExercisePage, PageError> {
        debug!("loading exercise {id}");

        let Ok(Some(exercise)) = log_on_error!(self.repository.read_exercise(id), "get", "exercise")
        else {
            return Err(PageError::ExerciseNotFound);
        };

        let details = log_on_error!(
            self.repository.read_exercise_details(id),
            "get",
            "exercise details"
        )
        .unwrap_or_default();

        debug!("loaded exercise {id} with {} details", details.len());

        Ok(ExercisePage {
            exercise,
            details: GroupedDetails::new(&details),
        })
    }
}

impl<R> MemberService for Service<R>
where
    R: MemberInviteRepository + MemberRepository + MemberExerciseRepository + ExerciseRepository,
{
    async fn get_member_page(&self, invite_code: &InviteCode) -> Result<MemberPage, PageError> {
        debug!("loading member of invite {invite_code}");

        let Ok(Some(invite)) = log_on_error!(
            self.repository.read_member_invite(invite_code),
            "get",
            "member invite"
        ) else {
            return Err(PageError::InvalidInvite);
        };

        if !self.invite_expiry.admits(&invite, Utc::now()) {
            debug!("invite {invite_code} expired at {}", invite.expires_at);
            return Err(PageError::InvalidInvite);
        }

        let Ok(Some(member)) = log_on_error!(
            self.repository.read_member(&invite.member_id),
            "get",
            "member"
        ) else {
            return Err(PageError::MemberNotFound);
        };

        let member_exercises = log_on_error!(
            self.repository.read_member_exercises(&invite.member_id),
            "get",
            "member exercises"
        )
        .unwrap_or_default();

        let exercises = if member_exercises.is_empty() {
            vec![]
        } else {
            log_on_error!(
                self.repository
                    .read_exercises(&exercise_ids(&member_exercises)),
                "get",
                "exercises"
            )
            .map(|exercises| join_member_exercises(&member_exercises, &exercises))
            .unwrap_or_default()
        };

        debug!(
            "loaded member {} with {} exercises",
            member.id,
            exercises.len()
        );

        Ok(MemberPage { member, exercises })
    }
}
