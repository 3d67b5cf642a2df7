//! Descriptive aggregation over the ticket collection
//!
//! Everything here derives display values from the in-memory collection;
//! nothing is cached or persisted.

use crate::core::Ticket;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Field to group counts by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Status,
    Priority,
    Category,
    Department,
}

/// Count tickets per distinct value of the chosen field
///
/// Keys are the display names (`"In Progress"`, `"IT Support"`, ...),
/// ordered alphabetically.
#[must_use]
pub fn count_by(tickets: &[Ticket], group: GroupBy) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for ticket in tickets {
        let key = match group {
            GroupBy::Status => ticket.status.to_string(),
            GroupBy::Priority => ticket.priority.to_string(),
            GroupBy::Category => ticket.category.to_string(),
            GroupBy::Department => ticket.department.to_string(),
        };
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Tickets created per calendar day, ascending by date
#[must_use]
pub fn tickets_per_day(tickets: &[Ticket]) -> Vec<(NaiveDate, usize)> {
    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for ticket in tickets {
        *per_day.entry(ticket.created_at.date()).or_insert(0) += 1;
    }
    per_day.into_iter().collect()
}

/// Resolution-time summary in hours
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolutionStats {
    pub mean_hours: f64,
    pub min_hours: f64,
    pub max_hours: f64,
}

/// Elapsed hours between creation and last update, over Resolved and Closed
/// tickets
///
/// `None` when no ticket has reached a terminal status.
#[must_use]
pub fn resolution_stats(tickets: &[Ticket]) -> Option<ResolutionStats> {
    let hours: Vec<f64> = tickets
        .iter()
        .filter(|t| t.status.is_resolved())
        .map(|t| (t.updated_at - t.created_at).num_seconds() as f64 / 3600.0)
        .collect();

    if hours.is_empty() {
        return None;
    }

    let sum: f64 = hours.iter().sum();
    let min = hours.iter().copied().fold(f64::INFINITY, f64::min);
    let max = hours.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(ResolutionStats {
        mean_hours: sum / hours.len() as f64,
        min_hours: min,
        max_hours: max,
    })
}
