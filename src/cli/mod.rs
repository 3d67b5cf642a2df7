//! Command-line interface
//!
//! One subcommand per user action; each handler performs a single
//! repository operation and renders the result through [`OutputFormatter`].

pub mod handlers;
pub mod output;

pub use output::OutputFormatter;

use crate::core::{Category, Department, Priority, Status};
use crate::export::ExportFormat;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// Flat-file support ticket tracker
#[derive(Parser, Debug)]
#[command(name = "support-ticket", version, about, long_about = None)]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the ticket data file (overrides configuration)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new support ticket
    ///
    /// Required fields not supplied as flags are gathered interactively.
    New {
        /// Requester name
        #[arg(long)]
        name: Option<String>,
        /// Requester email
        #[arg(long)]
        email: Option<String>,
        /// Requester phone number
        #[arg(long)]
        phone: Option<String>,
        /// Problem category (teknis, billing, produk, akun, lainnya)
        #[arg(long)]
        category: Option<Category>,
        /// Priority (low, medium, high)
        #[arg(long)]
        priority: Option<Priority>,
        /// Destination department (it-support, customer-service, billing, technical, sales)
        #[arg(long)]
        department: Option<Department>,
        /// One-line subject
        #[arg(long)]
        subject: Option<String>,
        /// Detailed description
        #[arg(long)]
        description: Option<String>,
    },

    /// List tickets, newest first
    List {
        /// Keep only these statuses (repeatable; default: all)
        #[arg(long = "status", value_name = "STATUS")]
        statuses: Vec<Status>,
        /// Keep only these priorities (repeatable; default: all)
        #[arg(long = "priority", value_name = "PRIORITY")]
        priorities: Vec<Priority>,
        /// Keep only these categories (repeatable; default: all)
        #[arg(long = "category", value_name = "CATEGORY")]
        categories: Vec<Category>,
        /// Show at most this many tickets
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Show one ticket with its comment thread
    Show {
        /// Ticket id, e.g. TKT-001
        id: String,
    },

    /// Update a ticket's status and assignment
    Update {
        /// Ticket id, e.g. TKT-001
        id: String,
        /// New status (open, in-progress, resolved, closed)
        #[arg(long)]
        status: Status,
        /// Assignee; an empty value clears the assignment
        #[arg(long, value_name = "NAME")]
        assign: Option<String>,
    },

    /// Append a comment to a ticket
    Comment {
        /// Ticket id, e.g. TKT-001
        id: String,
        /// Comment author (falls back to the configured default author)
        #[arg(long)]
        author: Option<String>,
        /// Comment text
        #[arg(short, long)]
        message: String,
    },

    /// Search tickets by id, email, or keyword
    #[command(group(ArgGroup::new("needle").required(true).multiple(false)))]
    Search {
        /// Exact id match (case-insensitive)
        #[arg(long, group = "needle")]
        id: Option<String>,
        /// Substring match against the requester email
        #[arg(long, group = "needle")]
        email: Option<String>,
        /// Substring match against subject or description
        #[arg(long, group = "needle")]
        keyword: Option<String>,
    },

    /// Dashboard counts and resolution statistics
    Stats,

    /// Export the whole collection
    Export {
        /// Output format (csv, json)
        #[arg(long, default_value = "csv")]
        format: ExportFormat,
        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}
