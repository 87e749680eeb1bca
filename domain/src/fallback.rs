//! Placeholder payloads for handled failures.
//!
//! Every category maps to a distinct sentinel `id` and an explanation the
//! orchestrator can relay. Builders return the tool's canonical output type,
//! so a fallback can never drift from the success shape.
//!
//! | Category | sentinel id |
//! |----------|-------------|
//! | `MissingCredential` | `sample` |
//! | `Transport` | `error` |
//! | `SchemaMismatch` | `invalid` |
//! | `Empty` | `empty` |
//! | `Unexpected` | `error` |

use crate::governance::{ProposalData, ProposalDetail, ProposalSummary, ProposalsData, Proposer};
use crate::tool::{Failure, FailureKind};

/// Proposer placed in synthetic records
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Explanation used when no Graph API key is configured
pub const MISSING_CREDENTIAL_MESSAGE: &str = "Please provide a valid Graph API key";

/// Why real data could not be returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureCategory {
    /// No API key configured; no request was attempted
    MissingCredential,
    /// Non-2xx status, network error or undecodable body
    Transport(String),
    /// Response did not match the declared schema
    SchemaMismatch(String),
    /// Well-formed response without matching records
    Empty(String),
    /// Anything else, e.g. a request that could not be constructed
    Unexpected(String),
}

impl FailureCategory {
    pub fn kind(&self) -> FailureKind {
        match self {
            FailureCategory::MissingCredential => FailureKind::MissingCredential,
            FailureCategory::Transport(_) => FailureKind::Transport,
            FailureCategory::SchemaMismatch(_) => FailureKind::SchemaMismatch,
            FailureCategory::Empty(_) => FailureKind::Empty,
            FailureCategory::Unexpected(_) => FailureKind::Unexpected,
        }
    }

    pub fn sentinel_id(&self) -> &'static str {
        match self {
            FailureCategory::MissingCredential => "sample",
            FailureCategory::Transport(_) | FailureCategory::Unexpected(_) => "error",
            FailureCategory::SchemaMismatch(_) => "invalid",
            FailureCategory::Empty(_) => "empty",
        }
    }

    /// Human-readable explanation
    pub fn reason(&self) -> &str {
        match self {
            FailureCategory::MissingCredential => MISSING_CREDENTIAL_MESSAGE,
            FailureCategory::Transport(reason)
            | FailureCategory::SchemaMismatch(reason)
            | FailureCategory::Empty(reason)
            | FailureCategory::Unexpected(reason) => reason,
        }
    }

    pub fn to_failure(&self) -> Failure {
        Failure::new(self.kind(), self.reason())
    }
}

impl std::fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind(), self.reason())
    }
}

/// Output types that can be substituted with a labeled placeholder.
pub trait Fallback: Sized {
    /// Build the placeholder; `now` (unix seconds) stamps the record.
    fn fallback(category: &FailureCategory, now: i64) -> Self;
}

impl Fallback for ProposalsData {
    fn fallback(category: &FailureCategory, now: i64) -> Self {
        let title = match category {
            FailureCategory::MissingCredential => "API Key Required",
            FailureCategory::Transport(_) => "Failed to fetch proposals",
            FailureCategory::SchemaMismatch(_) => "Invalid data format",
            FailureCategory::Empty(_) => "No active proposals found",
            FailureCategory::Unexpected(_) => "Error fetching proposals",
        };

        Self {
            proposals: vec![ProposalSummary {
                id: category.sentinel_id().to_string(),
                proposer: zero_proposer(),
                title: title.to_string(),
                status: "ACTIVE".to_string(),
                for_votes: "0".to_string(),
                against_votes: "0".to_string(),
                abstain_votes: "0".to_string(),
                created_timestamp: now.to_string(),
            }],
        }
    }
}

impl Fallback for ProposalData {
    fn fallback(category: &FailureCategory, now: i64) -> Self {
        let (title, status) = match category {
            FailureCategory::MissingCredential => ("API Key Required", "ACTIVE"),
            FailureCategory::Empty(_) => ("Proposal not found", "ERROR"),
            FailureCategory::Transport(_)
            | FailureCategory::SchemaMismatch(_)
            | FailureCategory::Unexpected(_) => ("Error fetching proposal", "ERROR"),
        };

        Self {
            proposal: ProposalDetail {
                id: category.sentinel_id().to_string(),
                proposer: zero_proposer(),
                title: title.to_string(),
                description: category.reason().to_string(),
                status: status.to_string(),
                created_timestamp: now.to_string(),
                created_block: "0".to_string(),
                start_block: "0".to_string(),
                end_block: "0".to_string(),
                for_votes: "0".to_string(),
                against_votes: "0".to_string(),
                abstain_votes: "0".to_string(),
                quorum_votes: "0".to_string(),
                proposal_threshold: "0".to_string(),
            },
        }
    }
}

fn zero_proposer() -> Proposer {
    Proposer {
        id: ZERO_ADDRESS.to_string(),
    }
}
