//! Enumerated ticket fields
//!
//! Serde representations match the persisted document exactly (`"In
//! Progress"`, `"IT Support"`, ...). `FromStr` accepts the relaxed,
//! case-insensitive forms used on the command line (`in-progress`,
//! `it-support`).

use crate::error::SupportTicketError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ticket lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

impl Status {
    /// All variants, in lifecycle order
    pub const ALL: [Self; 4] = [Self::Open, Self::InProgress, Self::Resolved, Self::Closed];

    /// Whether the ticket has reached a terminal state
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Status {
    type Err = SupportTicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "in progress" | "in-progress" | "in_progress" | "inprogress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(SupportTicketError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// Ticket priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Priority {
    type Err = SupportTicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(SupportTicketError::InvalidPriority {
                value: s.to_string(),
            }),
        }
    }
}

/// Problem category, as offered on the original intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Teknis,
    Billing,
    Produk,
    Akun,
    Lainnya,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Teknis,
        Self::Billing,
        Self::Produk,
        Self::Akun,
        Self::Lainnya,
    ];
}

impl Default for Category {
    fn default() -> Self {
        Self::Lainnya
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Teknis => "Teknis",
            Self::Billing => "Billing",
            Self::Produk => "Produk",
            Self::Akun => "Akun",
            Self::Lainnya => "Lainnya",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Category {
    type Err = SupportTicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "teknis" => Ok(Self::Teknis),
            "billing" => Ok(Self::Billing),
            "produk" => Ok(Self::Produk),
            "akun" => Ok(Self::Akun),
            "lainnya" => Ok(Self::Lainnya),
            _ => Err(SupportTicketError::InvalidCategory {
                value: s.to_string(),
            }),
        }
    }
}

/// Destination department for the ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "IT Support")]
    ItSupport,
    #[serde(rename = "Customer Service")]
    CustomerService,
    Billing,
    Technical,
    Sales,
}

impl Department {
    pub const ALL: [Self; 5] = [
        Self::ItSupport,
        Self::CustomerService,
        Self::Billing,
        Self::Technical,
        Self::Sales,
    ];
}

impl Default for Department {
    fn default() -> Self {
        Self::ItSupport
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ItSupport => "IT Support",
            Self::CustomerService => "Customer Service",
            Self::Billing => "Billing",
            Self::Technical => "Technical",
            Self::Sales => "Sales",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Department {
    type Err = SupportTicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "it support" | "it-support" | "it_support" | "itsupport" | "it" => Ok(Self::ItSupport),
            "customer service" | "customer-service" | "customer_service" | "customerservice" => {
                Ok(Self::CustomerService)
            },
            "billing" => Ok(Self::Billing),
            "technical" => Ok(Self::Technical),
            "sales" => Ok(Self::Sales),
            _ => Err(SupportTicketError::InvalidDepartment {
                value: s.to_string(),
            }),
        }
    }
}
