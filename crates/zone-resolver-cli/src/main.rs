//! `zresolve` CLI -- resolve and inspect local times around DST transitions.
//!
//! ## Usage
//!
//! ```sh
//! # Resolve a nonexistent local time by pushing it past the gap
//! zresolve resolve --zone Europe/Paris --at 2026-03-29T02:30 --gap push-forward
//!
//! # Different policies for gaps and overlaps, JSON output
//! zresolve resolve --zone America/New_York --at 2026-11-01T01:30 \
//!     --gap post-transition --overlap pre-transition --json
//!
//! # Keep the offset of a previous value inside an overlap
//! zresolve resolve --zone Europe/Paris --at 2026-10-25T02:30 \
//!     --overlap retain-offset --previous 2026-10-25T01:30:00+02:00
//!
//! # Policies from a JSON config file ({"gap": "...", "overlap": "..."})
//! zresolve resolve --zone Europe/Paris --at 2026-03-29T02:30 --config resolver.json
//!
//! # Show whether a local time is unique, in a gap, or in an overlap
//! zresolve inspect --zone Europe/Paris --at 2026-10-25T02:30
//!
//! # List the available policies
//! zresolve policies
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::Level;
use zone_resolver::{
    classify, parse_zone, resolve_with_previous, Discontinuity, LocalTimeKind, ResolverConfig,
    ResolverPolicy,
};

const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Parser)]
#[command(
    name = "zresolve",
    version,
    about = "Resolve local times that fall in DST gaps and overlaps"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a local date-time to an offset date-time
    Resolve {
        /// IANA time zone (e.g., "Europe/Paris")
        #[arg(short, long)]
        zone: String,
        /// Local date-time (e.g., "2026-03-29T02:30")
        #[arg(short, long)]
        at: String,
        /// Policy for local times in a gap (default: strict)
        #[arg(long)]
        gap: Option<ResolverPolicy>,
        /// Policy for local times in an overlap (default: strict)
        #[arg(long)]
        overlap: Option<ResolverPolicy>,
        /// JSON file with "gap" and/or "overlap" policies; flags override it
        #[arg(short, long)]
        config: Option<String>,
        /// RFC 3339 date-time the local time was derived from
        #[arg(long)]
        previous: Option<String>,
        /// Print a JSON object instead of a bare date-time
        #[arg(long)]
        json: bool,
    },
    /// Show how a local date-time maps onto a zone
    Inspect {
        /// IANA time zone (e.g., "Europe/Paris")
        #[arg(short, long)]
        zone: String,
        /// Local date-time (e.g., "2026-10-25T02:30")
        #[arg(short, long)]
        at: String,
        /// Print a JSON object instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the available resolver policies
    Policies,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Resolve {
            zone,
            at,
            gap,
            overlap,
            config,
            previous,
            json,
        } => {
            let tz = parse_zone(&zone)?;
            let local = parse_local(&at)?;
            let previous = previous.as_deref().map(parse_previous).transpose()?;

            let config = load_config(config.as_deref())?.merge(ResolverConfig::new(gap, overlap));
            let resolver = config.build();

            let kind = classify(tz, local)
                .with_context(|| format!("Failed to classify {} in {}", local, tz))?;
            let resolved = resolve_with_previous(tz, local, previous, resolver.as_ref())
                .with_context(|| format!("Failed to resolve {} in {}", local, tz))?;

            if json {
                let value = json!({
                    "zone": tz.name(),
                    "local": local.to_string(),
                    "kind": kind.label(),
                    "resolved": resolved.to_rfc3339(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", resolved.to_rfc3339());
            }
        }
        Commands::Inspect { zone, at, json } => {
            let tz = parse_zone(&zone)?;
            let local = parse_local(&at)?;
            let kind = classify(tz, local)
                .with_context(|| format!("Failed to classify {} in {}", local, tz))?;

            if json {
                let mut value = json!({
                    "zone": tz.name(),
                    "local": local.to_string(),
                    "kind": kind.label(),
                });
                match kind {
                    LocalTimeKind::Unique(dt) => {
                        value["offset"] = json!(dt.offset().to_string());
                    }
                    LocalTimeKind::Gap(d) | LocalTimeKind::Overlap(d) => {
                        value["discontinuity"] = discontinuity_json(&d);
                    }
                }
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("zone:       {}", tz.name());
                println!("local:      {}", local);
                println!("kind:       {}", kind.label());
                match kind {
                    LocalTimeKind::Unique(dt) => println!("offset:     {}", dt.offset()),
                    LocalTimeKind::Gap(d) | LocalTimeKind::Overlap(d) => {
                        println!("transition: {}", d.transition().to_rfc3339());
                        println!("before:     {}", d.offset_before());
                        println!("after:      {}", d.offset_after());
                        println!("size:       {:+} min", d.size().num_minutes());
                    }
                }
            }
        }
        Commands::Policies => {
            for policy in ResolverPolicy::ALL {
                println!("{:<16} {}", policy.as_str(), policy.description());
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_local(raw: &str) -> Result<NaiveDateTime> {
    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw.trim(), fmt).ok())
        .with_context(|| {
            format!(
                "Invalid local date-time: '{}'. Expected YYYY-MM-DDTHH:MM[:SS[.fff]]",
                raw
            )
        })
}

fn parse_previous(raw: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .with_context(|| format!("Invalid previous date-time: '{}'. Expected RFC 3339", raw))
}

fn load_config(path: Option<&str>) -> Result<ResolverConfig> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            ResolverConfig::from_json(&raw)
                .with_context(|| format!("Failed to parse config file: {}", path))
        }
        None => Ok(ResolverConfig::default()),
    }
}

fn discontinuity_json(d: &Discontinuity) -> serde_json::Value {
    json!({
        "transition": d.transition().to_rfc3339(),
        "offset_before": d.offset_before().to_string(),
        "offset_after": d.offset_after().to_string(),
        "size_minutes": d.size().num_minutes(),
        "local_before": d.local_before().to_string(),
        "local_after": d.local_after().to_string(),
    })
}
