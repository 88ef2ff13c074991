//! CSV output formatting for subnet results.

use super::terminal::format_field;
use crate::models::{AllocationPlan, SortOrder, SubnetDescriptor};

const SUBNET_HEADER: &str = r#""name","required_hosts","network","first_host","last_host","broadcast","subnet_mask","wildcard_mask","total_hosts""#;

/// CSV header plus one row.
pub fn subnet_csv(subnet: &SubnetDescriptor) -> String {
    format!("{SUBNET_HEADER}\n{}\n", csv_row(subnet))
}

/// CSV header plus one row per allocated subnet, listed in `order`.
pub fn plan_csv(plan: &AllocationPlan, order: SortOrder) -> String {
    log::debug!(
        "plan_csv() {} subnet(s) in {}",
        plan.subnets.len(),
        plan.base
    );
    let mut out = format!("{SUBNET_HEADER}\n");
    for subnet in plan.listed(order) {
        out.push_str(&csv_row(subnet));
        out.push('\n');
    }
    out
}

/// Double embedded quotes; `format_field` adds the surrounding pair.
fn escape_csv_field(input: &str) -> String {
    input.replace('"', "\"\"")
}

fn csv_row(s: &SubnetDescriptor) -> String {
    format!(
        r#"{name},{required},{network},{first},{last},{broadcast},{mask},{wildcard},{hosts}"#,
        name = format_field(escape_csv_field(s.name.as_deref().unwrap_or("")), 12),
        required = format_field(s.required_hosts.map(|h| h.to_string()).unwrap_or_default(), 8),
        network = format_field(s.network(), 20),
        first = format_field(s.first_host, 17),
        last = format_field(s.last_host, 17),
        broadcast = format_field(s.broadcast_address, 17),
        mask = format_field(s.subnet_mask, 17),
        wildcard = format_field(s.wildcard_mask, 17),
        hosts = format_field(s.total_hosts, 12),
    )
}
