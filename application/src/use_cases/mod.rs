//! Use cases
//!
//! One use case per subgraph tool. Each exposes a typed `execute` and
//! implements [`ToolHandler`](lens_domain::ToolHandler) for the registry.

pub mod get_domain_owner;
pub mod get_nouns_proposals;
pub mod get_proposal_by_id;
pub(crate) mod shared;

pub use get_domain_owner::{GetDomainOwnerUseCase, domain_owner_definition};
pub use get_nouns_proposals::{GetNounsProposalsUseCase, nouns_proposals_definition};
pub use get_proposal_by_id::{GetProposalByIdUseCase, proposal_by_id_definition};
