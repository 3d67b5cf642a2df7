//! Handler for the `stats` command
//!
//! The dashboard view: totals, breakdowns by every enumerated field, the
//! per-day creation series, and resolution-time statistics.

use super::common::HandlerContext;
use crate::analytics::{GroupBy, ResolutionStats, count_by, resolution_stats, tickets_per_day};
use crate::cli::output::OutputFormatter;
use crate::core::{Status, Ticket};
use crate::error::Result;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::Path;

/// Handle the `stats` command
pub fn handle_stats_command(file: Option<&Path>, output: &OutputFormatter) -> Result<()> {
    let context = HandlerContext::open(file)?;
    let data = gather_stats(context.tickets());

    if output.is_json() {
        output_json(&data, output)?;
    } else {
        output_text(&data, output);
    }

    Ok(())
}

/// Everything the stats view displays
struct StatsData {
    total: usize,
    open: usize,
    in_progress: usize,
    resolved: usize,
    by_status: BTreeMap<String, usize>,
    by_priority: BTreeMap<String, usize>,
    by_category: BTreeMap<String, usize>,
    by_department: BTreeMap<String, usize>,
    per_day: Vec<(NaiveDate, usize)>,
    resolution: Option<ResolutionStats>,
}

fn gather_stats(tickets: &[Ticket]) -> StatsData {
    StatsData {
        total: tickets.len(),
        open: tickets.iter().filter(|t| t.status == Status::Open).count(),
        in_progress: tickets
            .iter()
            .filter(|t| t.status == Status::InProgress)
            .count(),
        resolved: tickets
            .iter()
            .filter(|t| t.status == Status::Resolved)
            .count(),
        by_status: count_by(tickets, GroupBy::Status),
        by_priority: count_by(tickets, GroupBy::Priority),
        by_category: count_by(tickets, GroupBy::Category),
        by_department: count_by(tickets, GroupBy::Department),
        per_day: tickets_per_day(tickets),
        resolution: resolution_stats(tickets),
    }
}

fn output_json(data: &StatsData, output: &OutputFormatter) -> Result<()> {
    output.print_json(&serde_json::json!({
        "total": data.total,
        "open": data.open,
        "in_progress": data.in_progress,
        "resolved": data.resolved,
        "by_status": data.by_status,
        "by_priority": data.by_priority,
        "by_category": data.by_category,
        "by_department": data.by_department,
        "per_day": data.per_day
            .iter()
            .map(|(date, count)| serde_json::json!({"date": date, "count": count}))
            .collect::<Vec<_>>(),
        "resolution": data.resolution,
    }))
}

fn output_text(data: &StatsData, output: &OutputFormatter) {
    output.info(&format!("Total tickets: {}", data.total));
    output.info(&format!("  Open: {}", data.open));
    output.info(&format!("  In progress: {}", data.in_progress));
    output.info(&format!("  Resolved: {}", data.resolved));

    display_counts(output, "By status:", &data.by_status);
    display_counts(output, "By priority:", &data.by_priority);
    display_counts(output, "By category:", &data.by_category);
    display_counts(output, "By department:", &data.by_department);

    if !data.per_day.is_empty() {
        output.info("");
        output.info("Tickets per day:");
        for (date, count) in &data.per_day {
            output.info(&format!("  {date}: {count}"));
        }
    }

    output.info("");
    if let Some(res) = &data.resolution {
        output.info("Resolution time (hours):");
        output.info(&format!("  Mean: {:.1}", res.mean_hours));
        output.info(&format!("  Fastest: {:.1}", res.min_hours));
        output.info(&format!("  Slowest: {:.1}", res.max_hours));
    } else {
        output.info("No resolved tickets yet");
    }
}

fn display_counts(output: &OutputFormatter, title: &str, counts: &BTreeMap<String, usize>) {
    if counts.is_empty() {
        return;
    }
    output.info("");
    output.info(title);
    for (value, count) in counts {
        output.info(&format!("  {value}: {count}"));
    }
}
