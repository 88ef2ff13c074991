//! Command-line surface.
//!
//! Arguments arrive as raw text and go through the same validation as any
//! other caller, so a bad host count is an `InvalidHostCount` rather than a
//! clap usage error.

use crate::config::Config;
use crate::error::SubnetError;
use crate::models::{
    block_size, default_name, num_hosts, parse_host_count, parse_prefix, HostRequirement, Ipv4,
    SortOrder, SubnetMask, MAX_HOSTS,
};
use crate::output::{self, OutputFormat};
use crate::processing::cidr_from_host_count;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::error::Error;

#[derive(Parser, Debug)]
#[command(name = "subnet-vlsm")]
#[command(version, about = "IPv4 subnet calculator and VLSM allocator.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
    /// Output format: table, csv or json
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Network, broadcast and host range for an address and mask
    #[command(alias = "s")]
    Subnet {
        /// Address, e.g. 192.168.1.10
        address: String,
        /// Dotted mask (255.255.255.0) or prefix (24, /24)
        mask: String,
    },
    /// Lay out subnets for host requirements inside a base network
    #[command(alias = "v")]
    Vlsm {
        /// Base network, e.g. 192.168.1.0/24, or an address with --cidr
        base: String,
        /// Prefix length of the base network
        #[arg(long)]
        cidr: Option<String>,
        /// Requirement as NAME:HOSTS (or just HOSTS), repeatable
        #[arg(short = 'r', long = "require", required = true)]
        requirements: Vec<String>,
        /// Listing order: desc (largest first) or asc. Placement is always largest first
        #[arg(long)]
        order: Option<SortOrder>,
    },
    /// Smallest subnet that holds a number of hosts
    Hosts {
        /// Usable hosts needed
        hosts: String,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Preview of the subnet size picked for a host count.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct HostPreview {
    pub hosts: u32,
    pub prefix: u8,
    pub subnet_mask: SubnetMask,
    pub block_size: u64,
    pub usable_hosts: i64,
}

/// Run one command and return the rendered output.
pub fn run(cli: &CommandLine, config: &Config) -> Result<String, Box<dyn Error>> {
    let format = cli.format.unwrap_or(config.format);
    log::info!("#Start run() {:?} format={format}", cli.command);

    match &cli.command {
        Commands::Subnet { address, mask } => {
            let subnet = crate::compute_subnet(address, mask)?;
            Ok(match format {
                OutputFormat::Table => output::subnet_table(&subnet),
                OutputFormat::Csv => output::subnet_csv(&subnet),
                OutputFormat::Json => output::to_json(&subnet)? + "\n",
            })
        }
        Commands::Vlsm {
            base,
            cidr,
            requirements,
            order,
        } => {
            let (base, cidr) = base_network(base, cidr.as_deref())?;
            let requirements = parse_requirements(requirements)?;
            let order = order.unwrap_or(config.sort);
            let plan = crate::processing::allocate(base.addr, cidr, &requirements)?;
            log::info!(
                "Allocated {} subnet(s) in {}",
                plan.subnets.len(),
                plan.base
            );
            Ok(match format {
                OutputFormat::Table => output::plan_table(&plan, order),
                OutputFormat::Csv => output::plan_csv(&plan, order),
                OutputFormat::Json => output::to_json(&plan.listing(order))? + "\n",
            })
        }
        Commands::Hosts { hosts } => {
            let preview = host_preview(hosts)?;
            Ok(match format {
                OutputFormat::Table => format!(
                    "{hosts} hosts -> /{prefix} ({mask}), {size} addresses, {usable} usable\n",
                    hosts = preview.hosts,
                    prefix = preview.prefix,
                    mask = preview.subnet_mask,
                    size = preview.block_size,
                    usable = preview.usable_hosts,
                ),
                OutputFormat::Csv => format!(
                    "\"hosts\",\"prefix\",\"subnet_mask\",\"block_size\",\"usable_hosts\"\n{},{},{},{},{}\n",
                    output::format_field(preview.hosts, 0),
                    output::format_field(preview.prefix, 0),
                    output::format_field(preview.subnet_mask, 0),
                    output::format_field(preview.block_size, 0),
                    output::format_field(preview.usable_hosts, 0),
                ),
                OutputFormat::Json => output::to_json(&preview)? + "\n",
            })
        }
    }
}

/// Split `a.b.c.d/N` or combine `a.b.c.d` with `--cidr N`.
fn base_network(base: &str, cidr: Option<&str>) -> Result<(Ipv4, u8), Box<dyn Error>> {
    match (base.contains('/'), cidr) {
        (true, None) => {
            let base = Ipv4::new(base)?;
            Ok((base, base.mask))
        }
        (false, Some(cidr)) => {
            let mask = parse_prefix(cidr)?;
            let base = Ipv4::new(&format!("{base}/{mask}"))
                .map_err(|_| SubnetError::InvalidAddressFormat(base.to_string()))?;
            Ok((base, mask))
        }
        (true, Some(_)) => Err(format!("Prefix given twice: '{base}' and --cidr").into()),
        (false, None) => Err(format!("Missing prefix length for base '{base}'").into()),
    }
}

/// Parse `NAME:HOSTS` arguments, naming unnamed ones `Network A`, `Network B`, ...
fn parse_requirements(args: &[String]) -> Result<Vec<HostRequirement>, SubnetError> {
    args.iter()
        .enumerate()
        .map(|(i, arg)| {
            let mut req: HostRequirement = arg.parse()?;
            if req.name.is_empty() {
                req.name = default_name(i);
            }
            Ok(req)
        })
        .collect()
}

fn host_preview(hosts: &str) -> Result<HostPreview, SubnetError> {
    let hosts = parse_host_count(hosts, MAX_HOSTS)?;
    let prefix = cidr_from_host_count(hosts)?;
    Ok(HostPreview {
        hosts,
        prefix,
        subnet_mask: SubnetMask::from_prefix(prefix)?,
        block_size: block_size(prefix)?,
        usable_hosts: num_hosts(prefix)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String, Box<dyn Error>> {
        run_with(args, &Config::default())
    }

    fn run_with(args: &[&str], config: &Config) -> Result<String, Box<dyn Error>> {
        colored::control::set_override(false);
        let cli = CommandLine::try_parse_from(
            std::iter::once("subnet-vlsm").chain(args.iter().copied()),
        )?;
        run(&cli, config)
    }

    #[test]
    fn test_subnet_command() {
        let out = run_args(&["subnet", "192.168.1.0", "255.255.255.0"]).unwrap();
        assert!(out.contains("Broadcast Address  192.168.1.255"));

        let out = run_args(&["s", "10.0.0.5", "/30", "--format", "csv"]).unwrap();
        assert!(out.contains("\"10.0.0.4/30\""));
    }

    #[test]
    fn test_subnet_command_error() {
        let err = run_args(&["subnet", "192.168.1", "24"]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid IP address format: '192.168.1'");
    }

    #[test]
    fn test_vlsm_command() {
        let out = run_args(&[
            "vlsm",
            "192.168.1.0/24",
            "-r",
            "B:5",
            "-r",
            "A:10",
            "--format",
            "json",
        ])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["subnets"][0]["name"], "A");
        assert_eq!(value["subnets"][0]["network_address"], "192.168.1.0");
        assert_eq!(value["subnets"][1]["network_address"], "192.168.1.16");
    }

    #[test]
    fn test_vlsm_command_cidr_flag_and_default_names() {
        let out = run_args(&[
            "v", "10.0.0.0", "--cidr", "/26", "-r", "20", "-r", "5", "--order", "asc",
        ])
        .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].starts_with("Network B"));
        assert!(lines[1].contains("10.0.0.32/29"));
        assert!(lines[2].starts_with("Network A"));
        assert!(lines[2].contains("10.0.0.0/27"));
    }

    #[test]
    fn test_vlsm_command_sort_setting_keeps_largest_first_placement() {
        let config = Config {
            sort: SortOrder::Asc,
            ..Config::default()
        };
        let args = ["vlsm", "192.168.1.0/24", "-r", "A:10", "-r", "B:5", "-f", "csv"];

        let out = run_with(&args, &config).unwrap();
        let rows: Vec<&str> = out.lines().skip(1).collect();
        assert!(rows[0].trim_start().starts_with("\"B\""));
        assert!(rows[0].contains("\"192.168.1.16/29\""));
        assert!(rows[1].trim_start().starts_with("\"A\""));
        assert!(rows[1].contains("\"192.168.1.0/28\""));

        let desc = run_args(&args).unwrap();
        let mut asc_rows = rows.clone();
        asc_rows.sort();
        let mut desc_rows: Vec<&str> = desc.lines().skip(1).collect();
        desc_rows.sort();
        assert_eq!(asc_rows, desc_rows);
    }

    #[test]
    fn test_vlsm_command_json_listing() {
        let out = run_args(&[
            "vlsm", "10.0.0.0/24", "-r", "A:50", "-r", "B:100", "--order", "asc", "-f", "json",
        ])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["order"], "asc");
        assert_eq!(value["subnets"][0]["name"], "A");
        assert_eq!(value["subnets"][0]["network_address"], "10.0.0.128");
        assert_eq!(value["subnets"][1]["name"], "B");
        assert_eq!(value["subnets"][1]["network_address"], "10.0.0.0");
    }

    #[test]
    fn test_vlsm_command_errors() {
        let err = run_args(&["vlsm", "192.168.1.0/24", "-r", "A:300"]).unwrap_err();
        assert!(err.to_string().starts_with("One or more networks"));

        let err = run_args(&["vlsm", "192.168.1.0/24", "-r", "A:zero"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid host count 'zero' (must be 1-16777214)"
        );

        assert!(run_args(&["vlsm", "192.168.1.0", "-r", "A:3"]).is_err());
        assert!(run_args(&["vlsm", "192.168.1.0/24", "--cidr", "24", "-r", "A:3"]).is_err());
    }

    #[test]
    fn test_hosts_command() {
        let out = run_args(&["hosts", "10"]).unwrap();
        assert_eq!(
            out,
            "10 hosts -> /28 (255.255.255.240), 16 addresses, 14 usable\n"
        );

        let out = run_args(&["hosts", "10", "-f", "json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["prefix"], 28);
        assert_eq!(value["subnet_mask"], "255.255.255.240");

        assert!(run_args(&["hosts", "0"]).is_err());
    }
}
