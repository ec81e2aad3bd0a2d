use chrono::{DateTime, Utc};

use crate::{MemberID, ReadError, id::string_id};

#[allow(async_fn_in_trait)]
pub trait MemberInviteRepository {
    async fn read_member_invite(
        &self,
        invite_code: &InviteCode,
    ) -> Result<Option<MemberInvite>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInvite {
    pub id: MemberInviteID,
    pub member_id: MemberID,
    pub invite_code: InviteCode,
    pub expires_at: DateTime<Utc>,
}

impl MemberInvite {
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

string_id!(MemberInviteID);
string_id!(
    /// Token of an invite link, standing in for the member's identity.
    InviteCode
);

/// Decides whether an expired invite still resolves to its member.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InviteExpiryPolicy {
    #[default]
    Ignore,
    Reject,
}

impl InviteExpiryPolicy {
    #[must_use]
    pub fn admits(self, invite: &MemberInvite, now: DateTime<Utc>) -> bool {
        match self {
            InviteExpiryPolicy::Ignore => true,
            InviteExpiryPolicy::Reject => !invite.is_expired(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn invite(expires_at: DateTime<Utc>) -> MemberInvite {
        MemberInvite {
            id: "1".into(),
            member_id: "2".into(),
            invite_code: "abc".into(),
            expires_at,
        }
    }

    #[rstest]
    #[case::future(TimeDelta::seconds(1), false)]
    #[case::now(TimeDelta::zero(), true)]
    #[case::past(TimeDelta::seconds(-1), true)]
    fn test_member_invite_is_expired(#[case] offset: TimeDelta, #[case] expected: bool) {
        let now = DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(1000);
        assert_eq!(invite(now + offset).is_expired(now), expected);
    }

    #[rstest]
    #[case(InviteExpiryPolicy::Ignore, TimeDelta::days(1), true)]
    #[case(InviteExpiryPolicy::Ignore, TimeDelta::days(-1), true)]
    #[case(InviteExpiryPolicy::Reject, TimeDelta::days(1), true)]
    #[case(InviteExpiryPolicy::Reject, TimeDelta::days(-1), false)]
    fn test_invite_expiry_policy_admits(
        #[case] policy: InviteExpiryPolicy,
        #[case] offset: TimeDelta,
        #[case] expected: bool,
    ) {
        let now = DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(1000);
        assert_eq!(policy.admits(&invite(now + offset), now), expected);
    }

    #[test]
    fn test_invite_expiry_policy_default() {
        assert_eq!(InviteExpiryPolicy::default(), InviteExpiryPolicy::Ignore);
    }
}
