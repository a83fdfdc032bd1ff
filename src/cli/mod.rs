// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the ferret command-line interface.
//!
//! Two subcommands: `search` to query a catalog and `inspect` to examine
//! one. Both default to the catalog compiled into the binary and accept a
//! `--catalog` path to use another.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ferret",
    about = "Fuzzy page search for admin-panel navigation",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the page catalog and display ranked results
    Search {
        /// Search query
        query: String,

        /// Path to a catalog JSON file (defaults to the bundled catalog)
        #[arg(short, long)]
        catalog: Option<String>,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "8")]
        limit: usize,

        /// Emit results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Inspect a catalog: entry count, categories, keywords
    Inspect {
        /// Path to a catalog JSON file (defaults to the bundled catalog)
        #[arg(short, long)]
        catalog: Option<String>,
    },
}
