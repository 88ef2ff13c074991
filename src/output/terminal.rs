//! Terminal output utilities.
//!
//! Plain aligned tables; colour is added by `colored` and switched off
//! automatically when stdout is not a terminal.

use crate::models::{AllocationPlan, SortOrder, SubnetDescriptor};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Key/value listing for a single subnet.
pub fn subnet_table(subnet: &SubnetDescriptor) -> String {
    let rows = [
        ("Network Address", subnet.network_address.to_string()),
        ("Broadcast Address", subnet.broadcast_address.to_string()),
        ("First Host", subnet.first_host.to_string()),
        ("Last Host", subnet.last_host.to_string()),
        ("Total Hosts", subnet.total_hosts.to_string()),
        ("Subnet Mask", subnet.subnet_mask.to_string()),
        ("Wildcard Mask", subnet.wildcard_mask.to_string()),
        ("CIDR Notation", subnet.cidr_notation.to_string()),
    ];
    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);

    rows.iter()
        .map(|(key, value)| format!("{}  {}\n", format!("{key:<width$}").bold(), value))
        .collect()
}

const PLAN_HEADERS: [&str; 10] = [
    "Name",
    "Required",
    "Network",
    "First Host",
    "Last Host",
    "Broadcast",
    "Subnet Mask",
    "Wildcard",
    "Hosts",
    "Free",
];

/// One row per allocated subnet, listed in `order`, followed by a summary line.
pub fn plan_table(plan: &AllocationPlan, order: SortOrder) -> String {
    let rows: Vec<[String; 10]> = plan
        .listed(order)
        .into_iter()
        .map(|s| {
            let required = s.required_hosts.unwrap_or(0);
            [
                s.name.clone().unwrap_or_default(),
                required.to_string(),
                s.network().to_string(),
                s.first_host.to_string(),
                s.last_host.to_string(),
                s.broadcast_address.to_string(),
                s.subnet_mask.to_string(),
                s.wildcard_mask.to_string(),
                s.total_hosts.to_string(),
                (s.total_hosts - i64::from(required)).to_string(),
            ]
        })
        .collect();

    let mut widths = PLAN_HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = PLAN_HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| format!("{h:<w$}"))
        .collect();
    out.push_str(&format!("{}\n", header.join("  ").trim_end().bold()));

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, w))| match i {
                0 => format!("{cell:<w$}").cyan().to_string(),
                2 => format!("{cell:<w$}").green().to_string(),
                _ => format!("{cell:<w$}"),
            })
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }

    out.push_str(&format!(
        "Base {base}: {used} of {size} addresses allocated, {free} free\n",
        base = plan.base,
        used = plan.allocated_addresses(),
        size = plan.base_size(),
        free = plan.free_addresses(),
    ));
    out
}
