//! Proposal grid for `getNounsProposals`.

use std::collections::HashMap;

use colored::Colorize;
use lens_domain::util::{truncate_address, truncate_title};
use lens_domain::{Failure, ProposalSummary, ProposalsData};

use super::ToolView;
use super::format::{proposal_link, relative_time, vote_bar};

const TITLE_MAX_CHARS: usize = 70;
const BAR_WIDTH: usize = 30;

pub struct ProposalGridView;

impl ProposalGridView {
    fn card(proposal: &ProposalSummary, now: i64) -> String {
        let tally = proposal.tally();

        let mut out = String::new();
        out.push_str(&format!(
            "{} {}\n",
            format!("#{}", proposal.id).bold(),
            proposal.status.dimmed()
        ));
        out.push_str(&format!(
            "  {}\n",
            truncate_title(&proposal.title, TITLE_MAX_CHARS).bold()
        ));
        out.push_str(&format!(
            "  {}\n",
            format!(
                "Proposed {}",
                relative_time(&proposal.created_timestamp, now)
            )
            .dimmed()
        ));
        out.push_str(&format!(
            "  {}\n",
            format!("By: {}", truncate_address(&proposal.proposer.id)).dimmed()
        ));
        out.push_str(&format!(
            "  {}\n",
            format!("Total Votes: {}", tally.total()).dimmed()
        ));
        out.push_str(&format!("  {}\n", vote_bar(&tally, BAR_WIDTH)));
        out.push_str(&format!("  {}\n", proposal_link(&proposal.id).underline()));
        out
    }

    pub(crate) fn render_at(&self, data: &ProposalsData, now: i64) -> String {
        data.proposals
            .iter()
            .map(|p| Self::card(p, now))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ToolView for ProposalGridView {
    fn render(&self, data: &serde_json::Value, _failure: Option<&Failure>) -> Option<String> {
        let data: ProposalsData = serde_json::from_value(data.clone()).ok()?;
        Some(self.render_at(&data, chrono::Utc::now().timestamp()))
    }

    fn render_loading(&self, _args: &HashMap<String, serde_json::Value>) -> String {
        "Fetching latest Nouns proposals...".to_string()
    }
}
