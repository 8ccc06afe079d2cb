//! GPP Printer Inventory - command-line interface
//!
//! Renders the printer/group assignments of a domain's Group Policy
//! Preferences into an HTML page and opens it in the default viewer.

use std::path::PathBuf;
use std::process;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command, ValueEnum};
use gpp_printers::utils::{decode_sid_hex, generate_guid};
use gpp_printers::{
    Error, FileReportSink, InventoryConfig, Pipeline, ReportSink, SystemViewer, Viewer,
};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages (default)
    Info,
    /// Debug and all messages
    Debug,
    /// Trace and all messages (most verbose)
    Trace,
}

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    let log_level = if matches.get_flag("quiet") {
        LogLevel::Error
    } else {
        matches
            .get_one::<LogLevel>("verbose")
            .copied()
            .unwrap_or(LogLevel::Info)
    };
    init_logging(log_level);

    let outcome = match matches.subcommand() {
        Some(("sid", sub)) => run_sid(sub),
        Some(("guid", _)) => {
            println!("{}", generate_guid());
            Ok(())
        }
        Some(("report", sub)) => run_report(Some(sub)).await,
        _ => run_report(None).await,
    };

    if let Err(e) = outcome {
        report_failure(&e);
        process::exit(1);
    }
}

fn build_cli() -> Command {
    Command::new("gpp-printers")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Maps Group Policy printer deployments to the security groups that receive them")
        .long_about(
            "Scans every policy object under //<domain>/sysvol/<domain>/Policies for printer \
             preferences and renders a cross-linked HTML page of groups and printers. \
             Running without a subcommand is the same as `report`.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .value_parser(value_parser!(LogLevel))
                .default_value("info")
                .help("Set logging verbosity"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Suppress all output except errors"),
        )
        .subcommand(report_command())
        .subcommand(
            Command::new("sid")
                .about("Decode a hex-encoded binary security identifier")
                .arg(Arg::new("hex").value_name("HEX").required(true)),
        )
        .subcommand(Command::new("guid").about("Print a new random GUID"))
}

fn report_command() -> Command {
    Command::new("report")
        .about("Build the printer/group report for a domain")
        .arg(
            Arg::new("domain")
                .short('d')
                .long("domain")
                .value_name("FQDN")
                .help("Fully qualified domain name, e.g. ad.contoso.com (default: $USERDNSDOMAIN)"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Configuration file (JSON/YAML)"),
        )
        .arg(
            Arg::new("sysvol-prefix")
                .long("sysvol-prefix")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding <domain>/sysvol (default: //)"),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Where to write the report (default: temp directory)"),
        )
        .arg(
            Arg::new("file-name")
                .long("file-name")
                .value_name("NAME")
                .help("Report file name (default: printers.html)"),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .value_name("TEXT")
                .help("Document title"),
        )
        .arg(
            Arg::new("no-open")
                .long("no-open")
                .action(ArgAction::SetTrue)
                .help("Do not open the report in the default viewer"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("List the printer preference files that would be read"),
        )
}

fn init_logging(level: LogLevel) {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let filter_level = match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(format!("gpp_printers={}", filter_level)))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

fn load_config(matches: Option<&ArgMatches>) -> Result<InventoryConfig, Error> {
    let mut config = match matches.and_then(|m| m.get_one::<PathBuf>("config")) {
        Some(path) => InventoryConfig::load(path)?,
        None => InventoryConfig::default(),
    };

    if let Some(m) = matches {
        if let Some(domain) = m.get_one::<String>("domain") {
            config.domain = Some(domain.clone());
        }
        if let Some(prefix) = m.get_one::<PathBuf>("sysvol-prefix") {
            config.sysvol_prefix = prefix.clone();
        }
        if let Some(dir) = m.get_one::<PathBuf>("output-dir") {
            config.output_dir = Some(dir.clone());
        }
        if let Some(name) = m.get_one::<String>("file-name") {
            config.file_name = name.clone();
        }
        if let Some(title) = m.get_one::<String>("title") {
            config.title = title.clone();
        }
        if m.get_flag("no-open") {
            config.open_in_viewer = false;
        }
    }

    let config = config.with_env_domain();
    config.validate()?;
    Ok(config)
}

async fn run_report(matches: Option<&ArgMatches>) -> Result<(), Error> {
    let config = load_config(matches)?;
    let domain = config.require_domain()?;
    let pipeline = Pipeline::new(&config);

    if matches.map_or(false, |m| m.get_flag("dry-run")) {
        let catalog = pipeline.catalog(domain)?;
        for path in &catalog.paths {
            println!("{}", path.display());
        }
        info!(
            "Dry run: {} of {} policy object(s) carry printer preferences",
            catalog.paths.len(),
            catalog.policy_objects
        );
        return Ok(());
    }

    let report = pipeline.execute(domain)?;

    let sink = FileReportSink::in_dir(config.output_dir.as_deref(), &config.file_name);
    let written = sink.write(&report.document).await?;
    println!("{}", written.display());

    if config.open_in_viewer {
        SystemViewer.open(&written).await?;
    }
    Ok(())
}

fn run_sid(matches: &ArgMatches) -> Result<(), Error> {
    let hex = matches
        .get_one::<String>("hex")
        .ok_or_else(|| Error::Config("missing SID".into()))?;
    println!("{}", decode_sid_hex(hex)?);
    Ok(())
}

fn report_failure(e: &Error) {
    match e {
        Error::DomainResolution { .. } => {
            error!("{}", e);
            error!("The domain specified is incorrect. Please use a fully qualified domain name such as ad.contoso.com");
        }
        Error::NoPrinterPreferences { .. } => {
            error!("{}", e);
            error!("No policy object in this domain deploys printers through Group Policy Preferences");
        }
        _ => error!("{}", e),
    }
}
