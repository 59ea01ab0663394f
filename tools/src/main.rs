//! orgscan: headless runner for the organisation diagnostics.
//!
//! Usage:
//!   orgscan roster.csv
//!   orgscan --config application.properties --json
//!   orgscan --app.report.path=roster.csv --app.hierarchy.depth=3

use anyhow::{anyhow, Context, Result};
use orgscan_core::{
    analyzer::OrgAnalyzer,
    config::{AnalyzerConfig, Properties, REPORT_PATH_KEY},
    hierarchy::HierarchyIndex,
    report,
    roster,
};
use std::env;
use std::io::{self, Write};
use std::path::Path;

const DEFAULT_CONFIG: &str = "application.properties";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let config_path = args
        .windows(2)
        .find(|w| w[0] == "--config")
        .map(|w| w[1].as_str())
        .unwrap_or(DEFAULT_CONFIG);

    let mut properties = if Path::new(config_path).exists() {
        Properties::load(config_path)?
    } else {
        log::warn!("{config_path} not found; relying on command-line properties");
        Properties::default()
    };
    properties.merge(Properties::from_args(&args));

    let report_path = positional(&args)
        .or_else(|| properties.get(REPORT_PATH_KEY).map(str::to_string))
        .ok_or_else(|| {
            anyhow!("Path to report is not specified (pass a CSV path or --{REPORT_PATH_KEY}=<path>)")
        })?;

    let config = AnalyzerConfig::from_properties(&properties)
        .with_context(|| format!("invalid configuration in {config_path}"))?;

    let employees = roster::read_employees(&report_path)?;
    let index = HierarchyIndex::build(&employees);
    let analyzer = OrgAnalyzer::new(config)?;
    log::debug!("config: {:?}", analyzer.config());
    let findings = analyzer.analyze(&employees, &index)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        report::write_json(&findings, &mut out)?;
    } else {
        report::write_text(&findings, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

/// First argument that is neither a flag nor the value of `--config`.
fn positional(args: &[String]) -> Option<String> {
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--config" {
            skip_next = true;
            continue;
        }
        if !arg.starts_with("--") {
            return Some(arg.clone());
        }
    }
    None
}
