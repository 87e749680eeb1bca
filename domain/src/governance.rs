//! Nouns DAO governance records, proposal lookups and vote tallies.

use serde::{Deserialize, Serialize};

use crate::schema::{ResponseSchema, required_nullable};
use crate::tool::{ToolCall, ToolError};

/// Tool name for the active-proposal list
pub const GET_NOUNS_PROPOSALS: &str = "getNounsProposals";

/// Tool name for the proposal-by-id lookup
pub const GET_NOUNS_PROPOSAL_BY_ID: &str = "getNounsProposalById";

/// Account that submitted a proposal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Proposer {
    pub id: String,
}

/// List projection of a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ProposalSummary {
    pub id: String,
    pub proposer: Proposer,
    pub title: String,
    /// Upstream status, e.g. `ACTIVE`
    pub status: String,
    pub for_votes: String,
    pub against_votes: String,
    pub abstain_votes: String,
    /// Unix seconds, as a decimal string
    pub created_timestamp: String,
}

impl ProposalSummary {
    pub fn tally(&self) -> VoteTally {
        VoteTally::from_strings(&self.for_votes, &self.against_votes, &self.abstain_votes)
    }
}

/// Detail projection of a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ProposalDetail {
    pub id: String,
    pub proposer: Proposer,
    pub title: String,
    /// Long-form markdown body
    pub description: String,
    pub status: String,
    pub created_timestamp: String,
    pub created_block: String,
    pub start_block: String,
    pub end_block: String,
    pub for_votes: String,
    pub against_votes: String,
    pub abstain_votes: String,
    pub quorum_votes: String,
    pub proposal_threshold: String,
}

impl ProposalDetail {
    pub fn tally(&self) -> VoteTally {
        VoteTally::from_strings(&self.for_votes, &self.against_votes, &self.abstain_votes)
    }
}

/// Output `data` of the proposal-list tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProposalsData {
    pub proposals: Vec<ProposalSummary>,
}

/// Output `data` of the proposal-by-id tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProposalData {
    pub proposal: ProposalDetail,
}

/// Upstream reply envelope for the list query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProposalsResponse {
    pub data: ProposalsData,
}

impl ResponseSchema for ProposalsResponse {
    const NAME: &'static str = "ProposalsResponse";
}

/// `data` member of the by-id reply; `proposal` is `null` for unknown ids.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProposalLookup {
    #[serde(deserialize_with = "required_nullable")]
    pub proposal: Option<ProposalDetail>,
}

/// Upstream reply envelope for the by-id query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProposalResponse {
    pub data: ProposalLookup,
}

impl ResponseSchema for ProposalResponse {
    const NAME: &'static str = "ProposalResponse";
}

/// Typed parameters of the proposal-by-id tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalByIdParams {
    pub id: String,
}

impl TryFrom<&ToolCall> for ProposalByIdParams {
    type Error = ToolError;

    fn try_from(call: &ToolCall) -> Result<Self, Self::Error> {
        let id = call
            .require_string("id")
            .map_err(|e| ToolError::invalid_argument(e).with_details("id"))?;
        Ok(Self { id: id.to_string() })
    }
}

/// Parsed vote weights with per-choice shares.
///
/// Unparseable weights count as zero; shares are zero when nobody voted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteTally {
    pub for_votes: u128,
    pub against_votes: u128,
    pub abstain_votes: u128,
}

impl VoteTally {
    pub fn from_strings(for_votes: &str, against_votes: &str, abstain_votes: &str) -> Self {
        Self {
            for_votes: parse_weight(for_votes),
            against_votes: parse_weight(against_votes),
            abstain_votes: parse_weight(abstain_votes),
        }
    }

    pub fn total(&self) -> u128 {
        self.for_votes
            .saturating_add(self.against_votes)
            .saturating_add(self.abstain_votes)
    }

    pub fn for_percentage(&self) -> f64 {
        self.share(self.for_votes)
    }

    pub fn against_percentage(&self) -> f64 {
        self.share(self.against_votes)
    }

    pub fn abstain_percentage(&self) -> f64 {
        self.share(self.abstain_votes)
    }

    fn share(&self, votes: u128) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        votes as f64 / total as f64 * 100.0
    }
}

fn parse_weight(raw: &str) -> u128 {
    raw.trim().parse().unwrap_or(0)
}
