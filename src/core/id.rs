//! Ticket identifiers and sequential allocation
//!
//! Ids are strings of the form `TKT-001`. The allocator derives the next id
//! from the maximum numeric suffix in the current collection; suffixes are
//! never reused because tickets are never deleted.

use super::Ticket;
use crate::error::{Result, SupportTicketError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^TKT-(\d+)$").expect("id pattern is valid")
});

/// A ticket identifier (`TKT-%03d`)
///
/// Deserialization accepts any string so that manually edited data files can
/// still be loaded and inspected; the suffix is only validated when the
/// allocator needs it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Build an id from a numeric suffix, zero-padded to three digits
    #[must_use]
    pub fn from_suffix(suffix: u32) -> Self {
        Self(format!("TKT-{suffix:03}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric suffix, or `InvalidIdFormat` when the id does not match
    /// the `TKT-<digits>` shape
    pub fn suffix(&self) -> Result<u32> {
        let captures = ID_PATTERN
            .captures(&self.0)
            .ok_or_else(|| SupportTicketError::InvalidIdFormat {
                id: self.0.clone(),
            })?;
        captures[1]
            .parse()
            .map_err(|_| SupportTicketError::InvalidIdFormat {
                id: self.0.clone(),
            })
    }

    /// Case-insensitive id comparison, as used by every lookup
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TicketId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Allocate the next sequential id for the collection
///
/// Returns `TKT-001` for an empty collection. Any existing id that does not
/// match `TKT-<digits>` fails the whole allocation rather than being
/// skipped.
pub fn next_id(tickets: &[Ticket]) -> Result<TicketId> {
    let mut max_suffix = 0u32;
    for ticket in tickets {
        max_suffix = max_suffix.max(ticket.id.suffix()?);
    }
    Ok(TicketId::from_suffix(max_suffix + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketDraft;

    fn ticket_with_id(id: &str) -> Ticket {
        let mut ticket = Ticket::new(TicketId::from_suffix(1), TicketDraft::default());
        ticket.id = TicketId::from(id);
        ticket
    }

    #[test]
    fn test_first_id_is_tkt_001() {
        assert_eq!(next_id(&[]).unwrap().as_str(), "TKT-001");
    }

    #[test]
    fn test_next_id_skips_gaps() {
        let tickets = vec![ticket_with_id("TKT-001"), ticket_with_id("TKT-003")];
        assert_eq!(next_id(&tickets).unwrap().as_str(), "TKT-004");
    }

    #[test]
    fn test_next_id_exceeds_every_existing_suffix() {
        let tickets = vec![
            ticket_with_id("TKT-010"),
            ticket_with_id("TKT-002"),
            ticket_with_id("TKT-007"),
        ];
        let next = next_id(&tickets).unwrap();
        assert_eq!(next.as_str(), "TKT-011");
        for ticket in &tickets {
            assert!(next.suffix().unwrap() > ticket.id.suffix().unwrap());
        }
    }

    #[test]
    fn test_padding_widens_past_three_digits() {
        assert_eq!(TicketId::from_suffix(42).as_str(), "TKT-042");
        assert_eq!(TicketId::from_suffix(999).as_str(), "TKT-999");
        assert_eq!(TicketId::from_suffix(1000).as_str(), "TKT-1000");

        let tickets = vec![ticket_with_id("TKT-999")];
        assert_eq!(next_id(&tickets).unwrap().as_str(), "TKT-1000");
    }

    #[test]
    fn test_malformed_id_fails_allocation() {
        let tickets = vec![ticket_with_id("TKT-001"), ticket_with_id("TICKET-9")];
        let err = next_id(&tickets).unwrap_err();
        assert!(matches!(
            err,
            SupportTicketError::InvalidIdFormat { ref id } if id == "TICKET-9"
        ));
    }

    #[test]
    fn test_id_matching_is_case_insensitive() {
        let id = TicketId::from_suffix(3);
        assert!(id.matches("tkt-003"));
        assert!(id.matches(" TKT-003 "));
        assert!(!id.matches("TKT-004"));
    }
}
