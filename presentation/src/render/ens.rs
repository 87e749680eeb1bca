//! ENS profile card for `getDomainOwner`.

use std::collections::HashMap;

use colored::Colorize;
use lens_domain::util::truncate_address;
use lens_domain::{DomainRecord, DomainsData, Failure};

use super::ToolView;
use super::format::short_date;

pub struct EnsProfileView;

impl EnsProfileView {
    fn card(domain: &DomainRecord) -> String {
        let expires = domain
            .expiry_date
            .as_deref()
            .map(short_date)
            .unwrap_or_else(|| "Never".to_string());
        let records = if domain.text_keys().is_empty() {
            "None".to_string()
        } else {
            domain.text_keys().join(", ")
        };

        let mut out = String::new();
        out.push_str(&format!("{} {}\n", "[ENS]".cyan().bold(), domain.name.bold()));
        out.push_str(&format!("      {}\n\n", truncate_address(&domain.owner.id).dimmed()));
        out.push_str(&row("Created", &short_date(&domain.created_at)));
        out.push_str(&row("Expires", &expires));
        out.push_str(&row("Records", &records));
        out
    }
}

fn row(label: &str, value: &str) -> String {
    format!("  {}  {}\n", format!("{:<8}", label).dimmed(), value)
}

impl ToolView for EnsProfileView {
    fn render(&self, data: &serde_json::Value, failure: Option<&Failure>) -> Option<String> {
        let data: DomainsData = serde_json::from_value(data.clone()).ok()?;

        match data.domains.first() {
            Some(domain) => Some(Self::card(domain)),
            None => {
                let message = failure
                    .map(|f| f.message.as_str())
                    .unwrap_or("No ENS domain found");
                Some(format!("{} {}\n", "[ENS]".cyan().bold(), message.yellow()))
            }
        }
    }

    fn render_loading(&self, args: &HashMap<String, serde_json::Value>) -> String {
        match args.get("domain").and_then(|v| v.as_str()) {
            Some(domain) => format!("Looking up {}...", domain),
            None => "Looking up ENS domain...".to_string(),
        }
    }
}
