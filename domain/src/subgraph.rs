//! Subgraph datasets and GraphQL query documents.
//!
//! Query text is built here, purely, from typed parameters. The transport
//! that posts it lives behind `SubgraphPort` in the application layer.

use serde::{Deserialize, Serialize};

/// Indexed dataset a query is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    /// ENS name registry
    Ens,
    /// Nouns DAO governance
    NounsDao,
}

impl Dataset {
    /// Subgraph deployment id on The Graph's decentralized network
    pub fn default_subgraph_id(&self) -> &'static str {
        match self {
            Dataset::Ens => "5XqPmWe6gjyrJtFn9cLy237i4cWw2j9HcUJEXsP5qGtH",
            Dataset::NounsDao => "5qcR6rAfDMZCVGuZ6DDois7y4zyXqsyqvaqhE6NRRraW",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Dataset::Ens => "ens",
            Dataset::NounsDao => "nouns_dao",
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Number of proposals requested by the list query
pub const LATEST_PROPOSALS_LIMIT: usize = 9;

/// A GraphQL document ready to be posted as `{ "query": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphQuery {
    pub query: String,
}

impl GraphQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Exact-match lookup of one ENS name.
    ///
    /// The caller passes the name already lower-cased.
    pub fn domain_details(name: &str) -> Self {
        Self::new(format!(
            r#"query GetDomainDetails {{
  domains(where: {{name: "{}"}}) {{
    id
    name
    owner {{
      id
    }}
    resolver {{
      address
      texts
    }}
    createdAt
    expiryDate
  }}
}}"#,
            escape_string(name)
        ))
    }

    /// Most recently created ACTIVE proposals, newest first.
    pub fn latest_active_proposals() -> Self {
        Self::new(format!(
            r#"query LatestActiveProposals {{
  proposals(first: {}, orderBy: createdTimestamp, orderDirection: desc, where: {{ status: ACTIVE }}) {{
    id
    proposer {{
      id
    }}
    title
    status
    forVotes
    againstVotes
    abstainVotes
    createdTimestamp
  }}
}}"#,
            LATEST_PROPOSALS_LIMIT
        ))
    }

    /// Full detail record for one proposal.
    pub fn proposal_by_id(id: &str) -> Self {
        Self::new(format!(
            r#"query GetProposalById {{
  proposal(id: "{}") {{
    id
    proposer {{
      id
    }}
    title
    description
    status
    createdTimestamp
    createdBlock
    startBlock
    endBlock
    forVotes
    againstVotes
    abstainVotes
    quorumVotes
    proposalThreshold
  }}
}}"#,
            escape_string(id)
        ))
    }
}

/// Escape a value for use inside a GraphQL string literal.
fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
