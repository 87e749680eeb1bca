//! Proposal detail card for `getNounsProposalById`.

use std::collections::HashMap;

use colored::Colorize;
use lens_domain::util::truncate_address;
use lens_domain::{Failure, ProposalData, ProposalDetail, VoteTally};

use super::ToolView;
use super::format::{group_thousands, long_date, proposal_link, vote_bar};

const BAR_WIDTH: usize = 40;

pub struct ProposalDetailView;

impl ProposalDetailView {
    fn card(proposal: &ProposalDetail) -> String {
        let tally = proposal.tally();

        let mut out = String::new();
        out.push_str(&format!(
            "{}  {}\n",
            format!("[{}]", proposal.status).bold(),
            format!("Created {}", long_date(&proposal.created_timestamp)).dimmed()
        ));
        out.push_str(&format!(
            "{}\n",
            format!("#{} {}", proposal.id, proposal.title).bold()
        ));
        out.push_str(&format!(
            "{}\n\n",
            format!("By: {}", truncate_address(&proposal.proposer.id)).dimmed()
        ));

        out.push_str(&format!("Votes  {} total votes\n", group_thousands(tally.total())));
        out.push_str(&format!("{}\n", vote_bar(&tally, BAR_WIDTH)));
        out.push_str(&Self::choices(&tally));
        out.push('\n');

        for (label, value) in [
            ("Created Block", proposal.created_block.clone()),
            ("Start Block", proposal.start_block.clone()),
            ("End Block", proposal.end_block.clone()),
            ("Quorum", votes(&proposal.quorum_votes)),
        ] {
            out.push_str(&format!("  {}  {}\n", format!("{:<13}", label).dimmed(), value));
        }

        out.push_str(&format!("\n{}\n", "Description".cyan().bold()));
        out.push_str(&indent(&proposal.description, "  "));
        out.push_str(&format!("\n\n{}\n", proposal_link(&proposal.id).underline()));
        out
    }

    fn choices(tally: &VoteTally) -> String {
        format!(
            "  {} {}   {} {}   {} {}\n",
            "For".green().bold(),
            votes_count(tally.for_votes),
            "Against".red().bold(),
            votes_count(tally.against_votes),
            "Abstain".bright_black().bold(),
            votes_count(tally.abstain_votes),
        )
    }
}

fn votes_count(count: u128) -> String {
    format!("{} votes", group_thousands(count))
}

fn votes(raw: &str) -> String {
    votes_count(raw.trim().parse().unwrap_or(0))
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}

impl ToolView for ProposalDetailView {
    fn render(&self, data: &serde_json::Value, _failure: Option<&Failure>) -> Option<String> {
        let data: ProposalData = serde_json::from_value(data.clone()).ok()?;
        Some(Self::card(&data.proposal))
    }

    fn render_loading(&self, args: &HashMap<String, serde_json::Value>) -> String {
        match args.get("id").and_then(|v| v.as_str()) {
            Some(id) => format!("Fetching proposal #{}...", id),
            None => "Fetching proposal...".to_string(),
        }
    }
}
