//! Formatting helpers shared by the tool views.

use chrono::DateTime;
use colored::Colorize;
use lens_domain::VoteTally;

/// Base URL of the public proposal page
pub const PROPOSAL_URL_BASE: &str = "https://nouns.wtf/vote";

pub fn proposal_link(id: &str) -> String {
    format!("{}/{}", PROPOSAL_URL_BASE, id)
}

fn parse_timestamp(timestamp: &str) -> Option<DateTime<chrono::Utc>> {
    let secs = timestamp.trim().parse::<i64>().ok()?;
    DateTime::from_timestamp(secs, 0)
}

/// `Mar 19, 2022`
pub fn short_date(timestamp: &str) -> String {
    parse_timestamp(timestamp)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// `March 19, 2022`
pub fn long_date(timestamp: &str) -> String {
    parse_timestamp(timestamp)
        .map(|dt| dt.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Human distance between `timestamp` and `now`, e.g. `3 days ago`.
pub fn relative_time(timestamp: &str, now: i64) -> String {
    let Some(delta) = timestamp
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|then| now.checked_sub(then))
    else {
        return "at an unknown time".to_string();
    };

    let secs = delta.unsigned_abs();
    if secs < 60 {
        return "just now".to_string();
    }

    let (amount, unit) = match secs {
        s if s < 3_600 => (s / 60, "minute"),
        s if s < 86_400 => (s / 3_600, "hour"),
        s if s < 30 * 86_400 => (s / 86_400, "day"),
        s if s < 365 * 86_400 => (s / (30 * 86_400), "month"),
        s => (s / (365 * 86_400), "year"),
    };
    let plural = if amount == 1 { "" } else { "s" };

    if delta >= 0 {
        format!("{} {}{} ago", amount, unit, plural)
    } else {
        format!("in {} {}{}", amount, unit, plural)
    }
}

/// `1234567` → `1,234,567`
pub fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Segment widths (for, against, abstain) of a bar `width` cells wide.
///
/// An empty tally yields an all-zero split.
pub fn bar_segments(tally: &VoteTally, width: usize) -> (usize, usize, usize) {
    if tally.total() == 0 {
        return (0, 0, 0);
    }

    let cells = |pct: f64| ((pct / 100.0) * width as f64).round() as usize;
    let for_cells = cells(tally.for_percentage()).min(width);
    let against_cells = cells(tally.against_percentage()).min(width - for_cells);
    let abstain_cells = cells(tally.abstain_percentage()).min(width - for_cells - against_cells);
    (for_cells, against_cells, abstain_cells)
}

/// Colored for/against/abstain bar, padded to `width` cells
pub fn vote_bar(tally: &VoteTally, width: usize) -> String {
    let (for_cells, against_cells, abstain_cells) = bar_segments(tally, width);
    let rest = width - for_cells - against_cells - abstain_cells;

    format!(
        "{}{}{}{}",
        "█".repeat(for_cells).green(),
        "█".repeat(against_cells).red(),
        "█".repeat(abstain_cells).bright_black(),
        "░".repeat(rest).dimmed()
    )
}
