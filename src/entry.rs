use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::{error, info, warn};

use kronos::args::KronosArgs;
use kronos::config::{apply_config, load_config, types::ConfigFile};
use kronos::domain::Threshold;
use kronos::engine::{FailurePolicy, ProbeSettings, RunReport, run_probe};
use kronos::error::AppResult;
use kronos::http::{ReqwestTransport, Transport};
use kronos::report::{LineReporter, RunSummary, export_json, summary_lines};
use kronos::shutdown::shutdown_channel;
use kronos::source::{JobSet, Prompt, collect_jobs};

use crate::shutdown_handlers::setup_signal_shutdown_handler;

/// Exit status when any call failed, errored or was skipped.
const EXIT_CALLS_FAILED: u8 = 1;

pub(crate) fn run() -> AppResult<ExitCode> {
    let (mut args, matches) = parse_args()?;

    crate::logger::init_logging(args.verbose, args.no_color);

    let config = load_config(args.config.as_deref())?;
    if let Some(config) = config.as_ref() {
        apply_config(&mut args, &matches, config)?;
    }

    let job_set = gather_jobs(&args, config.as_ref())?;
    let settings = ProbeSettings {
        workers: args.workers,
        threshold: resolve_threshold(&args, job_set.prompted_threshold.as_deref()),
        timeout: args.request_timeout,
        policy: FailurePolicy::from_flag(args.fail_fast),
    };
    if job_set.jobs.is_empty() {
        warn!("No calls to run. Use --csv, --url, a config file or --interactive.");
    }

    let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new(settings.timeout)?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let report = runtime.block_on(probe(job_set, &transport, &settings));
    let summary = RunSummary::from_report(&report);

    if !args.quiet {
        for line in summary_lines(&summary, &settings) {
            println!("{}", line);
        }
    }

    if let Some(path) = args.export_json.as_deref() {
        match runtime.block_on(export_json(path, &report, &settings)) {
            Ok(()) => info!("Wrote JSON report to {}", path),
            Err(err) => error!("Failed to write JSON report to {}: {}", path, err),
        }
    }

    if summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_CALLS_FAILED))
    }
}

fn parse_args() -> AppResult<(KronosArgs, ArgMatches)> {
    let matches = KronosArgs::command().get_matches();
    let args = KronosArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

/// Only prompts when asked to, or when a person is at the keyboard.
fn gather_jobs(args: &KronosArgs, config: Option<&ConfigFile>) -> AppResult<JobSet> {
    let stdin = std::io::stdin();
    let job_set = if args.interactive || stdin.is_terminal() {
        let mut prompt = Prompt::new(stdin.lock(), std::io::stdout());
        collect_jobs(args, config, Some(&mut prompt))?
    } else {
        collect_jobs(args, config, None::<&mut Prompt<std::io::StdinLock<'_>, std::io::Stdout>>)?
    };
    info!("Collected {} call(s).", job_set.jobs.len());
    Ok(job_set)
}

/// `--threshold` (or config) wins over the prompt answer. Anything that does
/// not parse falls back to the default with a warning.
fn resolve_threshold(args: &KronosArgs, prompted: Option<&str>) -> Threshold {
    args.threshold
        .as_deref()
        .or(prompted)
        .map_or_else(Threshold::default, Threshold::parse_or_default)
}

async fn probe(
    job_set: JobSet,
    transport: &Arc<dyn Transport>,
    settings: &ProbeSettings,
) -> RunReport {
    let (shutdown_tx, _shutdown_rx) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    let mut reporter = LineReporter::new(std::io::stdout());
    let report = run_probe(
        job_set.jobs,
        transport,
        settings,
        &mut reporter,
        &shutdown_tx,
    )
    .await;

    signal_handle.abort();
    report
}
