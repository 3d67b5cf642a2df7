//! Linear filtering and search over the ticket collection
//!
//! Everything here is an O(n) scan. Results preserve collection order,
//! except [`recent_first`] which produces the newest-first ordering used by
//! list and dashboard views.

use crate::core::{Category, Priority, Status, Ticket};

/// Set-membership filter over status, priority, and category
///
/// A ticket matches when each of its three values is a member of the
/// corresponding set. An empty set matches nothing for that dimension,
/// mirroring a cleared multiselect.
#[derive(Debug, Clone)]
pub struct TicketFilter {
    pub statuses: Vec<Status>,
    pub priorities: Vec<Priority>,
    pub categories: Vec<Category>,
}

impl Default for TicketFilter {
    /// Match everything
    fn default() -> Self {
        Self {
            statuses: Status::ALL.to_vec(),
            priorities: Priority::ALL.to_vec(),
            categories: Category::ALL.to_vec(),
        }
    }
}

impl TicketFilter {
    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.statuses.contains(&ticket.status)
            && self.priorities.contains(&ticket.priority)
            && self.categories.contains(&ticket.category)
    }

    /// Apply the filter, preserving collection order
    #[must_use]
    pub fn apply<'a>(&self, tickets: &'a [Ticket]) -> Vec<&'a Ticket> {
        tickets.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Case-insensitive exact match on the ticket id
#[must_use]
pub fn find_by_id<'a>(tickets: &'a [Ticket], id: &str) -> Option<&'a Ticket> {
    tickets.iter().find(|t| t.id.matches(id))
}

/// Case-insensitive substring match against the email field
#[must_use]
pub fn find_by_email<'a>(tickets: &'a [Ticket], needle: &str) -> Vec<&'a Ticket> {
    let needle = needle.to_lowercase();
    tickets
        .iter()
        .filter(|t| t.email.to_lowercase().contains(&needle))
        .collect()
}

/// Case-insensitive substring match against subject or description
#[must_use]
pub fn find_by_keyword<'a>(tickets: &'a [Ticket], needle: &str) -> Vec<&'a Ticket> {
    let needle = needle.to_lowercase();
    tickets
        .iter()
        .filter(|t| {
            t.subject.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Newest-first ordering by creation time
#[must_use]
pub fn recent_first<'a>(tickets: &[&'a Ticket]) -> Vec<&'a Ticket> {
    let mut sorted = tickets.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}
