//! Output formatting for subnet results.
//!
//! This module renders descriptors and plans for the command line:
//! - [`terminal`] - Aligned, coloured tables
//! - [`csv`] - Quoted CSV rows
//! - [`json`] - serde_json documents

mod csv;
mod json;
mod terminal;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use csv::{plan_csv, subnet_csv};
pub use json::to_json;
pub use terminal::{format_field, plan_table, subnet_table};

/// How results are printed.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown output format '{other}' (use table, csv or json)"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
