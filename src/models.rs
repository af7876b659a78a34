use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Pipeline stage of a prospect. Labels match what the product has always
/// shown and stored, so renaming a variant is a data migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Cold Lead")]
    ColdLead,
    #[serde(rename = "Contacted")]
    Contacted,
    #[serde(rename = "Qualified")]
    Qualified,
    #[serde(rename = "Proposal Sent")]
    ProposalSent,
    #[serde(rename = "Negotiation")]
    Negotiation,
    #[serde(rename = "Closed - Won")]
    ClosedWon,
    #[serde(rename = "Closed - Lost")]
    ClosedLost,
    #[serde(rename = "Follow-up Needed")]
    FollowUpNeeded,
}

impl Status {
    /// Every stage, in pipeline order.
    pub const ALL: [Status; 8] = [
        Status::ColdLead,
        Status::Contacted,
        Status::Qualified,
        Status::ProposalSent,
        Status::Negotiation,
        Status::ClosedWon,
        Status::ClosedLost,
        Status::FollowUpNeeded,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Status::ColdLead => "Cold Lead",
            Status::Contacted => "Contacted",
            Status::Qualified => "Qualified",
            Status::ProposalSent => "Proposal Sent",
            Status::Negotiation => "Negotiation",
            Status::ClosedWon => "Closed - Won",
            Status::ClosedLost => "Closed - Lost",
            Status::FollowUpNeeded => "Follow-up Needed",
        }
    }

    pub fn from_label(label: &str) -> Option<Status> {
        Status::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Caller-supplied fields of a prospect. The store assigns the id and both
/// timestamps on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProspectDraft {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub status: Status,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prospect {
    pub id: i64,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub status: Status,
    pub notes: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
