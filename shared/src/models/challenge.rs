//! Challenge (Appeal) Model

use serde::{Deserialize, Serialize};

/// Decision state of an appeal. A challenge is immutable once it leaves
/// Pending (administrative override aside).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum ChallengeStatus {
    Pending,
    Approved,
    Rejected,
}

/// Challenge — a citizen's contest of a challan, reviewed by an officer.
///
/// `user_id` is null for anonymous appeals. At most one Pending challenge
/// may exist per challan at any time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Challenge {
    pub id: i64,
    pub challan_id: i64,
    pub user_id: Option<i64>,
    pub reason: String,
    pub evidence_url: Option<String>,
    pub status: ChallengeStatus,
    pub submitted_at: i64,
    pub reviewed_by: Option<i64>,
    pub reviewed_at: Option<i64>,
}

/// Submit appeal payload (anonymous submitters leave no identity)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeCreate {
    pub challan: i64,
    pub reason: String,
    pub evidence_url: Option<String>,
}

/// Edit appeal payload — only while the challenge is still Pending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeUpdate {
    pub reason: Option<String>,
    pub evidence_url: Option<String>,
}

/// Officer decision on a pending appeal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppealDecision {
    Approved,
    Rejected,
}

/// Review appeal payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeReview {
    pub decision: AppealDecision,
}
