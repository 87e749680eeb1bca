//! Domain layer for onchain-lens
//!
//! This crate contains the tool abstractions, subgraph record types, strict
//! response schemas and fallback payloads. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tools
//!
//! An orchestrator invokes named tools with JSON arguments. Each tool returns
//! a [`ToolOutcome`] whose `data` keeps the same shape whether it came from
//! the subgraph or from a [`Fallback`] builder.
//!
//! ## Datasets
//!
//! - **ENS**: name registry records ([`DomainRecord`])
//! - **Nouns DAO**: governance proposals ([`ProposalSummary`], [`ProposalDetail`])

pub mod ens;
pub mod fallback;
pub mod governance;
pub mod schema;
pub mod subgraph;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use ens::{
    DomainOwnerParams, DomainRecord, DomainResponse, DomainsData, GET_DOMAIN_OWNER, Owner,
    Resolver,
};
pub use fallback::{Fallback, FailureCategory, ZERO_ADDRESS};
pub use governance::{
    GET_NOUNS_PROPOSAL_BY_ID, GET_NOUNS_PROPOSALS, ProposalByIdParams, ProposalData,
    ProposalDetail, ProposalResponse, ProposalSummary, ProposalsData, ProposalsResponse, Proposer,
    VoteTally,
};
pub use schema::{ResponseSchema, SchemaMismatch};
pub use subgraph::{Dataset, GraphQuery};
pub use tool::{
    DefaultToolValidator, Failure, FailureKind, ParamType, ToolCall, ToolDefinition, ToolError,
    ToolHandler, ToolOutcome, ToolParameter, ToolSpec, ToolValidator,
};
