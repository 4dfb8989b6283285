use std::time::Duration;

use color_eyre::eyre::WrapErr;
use log::{error, info};
use structopt::StructOpt;

use crate::config::Config;
use crate::error::Error;
use crate::fields::Fields;
use crate::public_ip::http::HttpFetcher;
use crate::update_dns::api::RecordStore;
use crate::update_dns::reconcile::{reconcile, ReconcileOutcome};
use crate::update_dns::route53::Route53;

mod config;
mod error;
mod fields;
mod public_ip;
mod update_dns;

const RUST_BACKTRACE: &str = "RUST_BACKTRACE";

/// A tool that facilitates interactions with Route 53
#[derive(StructOpt, Debug)]
#[structopt(name = "r53")]
pub(crate) struct R53 {
    /// Verbosity of output, 1 occurrence for debug, 2 occurrences for trace
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: usize,

    /// Silence all log output
    #[structopt(short, long)]
    pub quiet: bool,

    /// Hosted zone ID
    #[structopt(short, long)]
    pub zone: String,

    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(StructOpt, Debug)]
pub(crate) enum Command {
    /// Update a Route 53 record with the system's public IP
    Update(UpdateArgs),
}

#[derive(StructOpt, Debug)]
pub(crate) struct UpdateArgs {
    /// Record name, fully qualified (e.g. `home.example.com.`)
    #[structopt(short, long)]
    pub record: String,

    /// Record TTL in seconds
    #[structopt(short, long, default_value = "300")]
    pub ttl: u32,

    /// Service that echoes the caller's public IPv4 address
    #[structopt(long, default_value = "https://checkip.amazonaws.com/")]
    pub echo_url: String,

    /// Timeout in seconds for connecting to and reading from the echo service
    #[structopt(long)]
    pub timeout: Option<u64>,
}

fn main() -> color_eyre::Result<()> {
    if std::env::var_os(RUST_BACKTRACE).is_none() {
        std::env::set_var(RUST_BACKTRACE, "1");
    }

    let args: R53 = R53::from_args();

    color_eyre::install()?;
    stderrlog::new()
        .verbosity(args.verbose + 2)
        .quiet(args.quiet)
        .init()
        .wrap_err("Failed to initialize logging")?;

    match args.command {
        Command::Update(update) => run_update(args.zone, update),
    }
}

fn run_update(zone: String, args: UpdateArgs) -> color_eyre::Result<()> {
    let config = Config::new(zone, args.record, args.ttl)
        .map_err(|e| fatal(None, "Invalid arguments", e))?;
    let fields = Fields::new(&config);

    let route53 =
        Route53::from_env().map_err(|e| fatal(Some(fields), "Failed to load AWS SDK config", e))?;

    let fetcher = HttpFetcher::with_timeout(args.timeout.map(Duration::from_secs));
    let public_ip = public_ip::resolve(&fetcher, &args.echo_url)
        .map_err(|e| fatal(Some(fields), "Failed to get public IP", e))?;
    let fields = fields.with_ip(&public_ip);

    info!("{} Reconciling record with {}", fields, route53.describe());

    match reconcile(&route53, &config, &public_ip) {
        ReconcileOutcome::Unchanged => {
            info!("{} Not updating record; IP address unchanged", fields);
            Ok(())
        }
        ReconcileOutcome::Updated { change_id } => {
            info!("{} change_id={} Record updated", fields, change_id);
            Ok(())
        }
        ReconcileOutcome::Failed { stage, error } => {
            Err(fatal(Some(fields), &stage.to_string(), error))
        }
    }
}

/// Logs a stage failure with the context gathered so far and turns it into
/// the report `main` exits with.
fn fatal(fields: Option<Fields<'_>>, stage: &str, err: Error) -> color_eyre::Report {
    let report = color_eyre::Report::new(err).wrap_err(stage.to_string());
    match fields {
        Some(fields) => error!("{} {}", fields, error::chain(&report)),
        None => error!("{}", error::chain(&report)),
    }
    report
}
