//! Application layer for onchain-lens
//!
//! This crate contains the tool use cases and the port definitions they
//! depend on. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    subgraph::{SubgraphError, SubgraphPort},
    tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::{
    GetDomainOwnerUseCase, GetNounsProposalsUseCase, GetProposalByIdUseCase,
    domain_owner_definition, nouns_proposals_definition, proposal_by_id_definition,
};
