use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{anyhow, Context};
use clap::Parser;
use dotenvy::dotenv;
use common::types::{TrackRequest, TrackResponse};
use service::errors::ServiceError;
use service::itinerary::{service::decode_request, Itinerary, ItineraryConfig, ItineraryService};
use tracing::{error, info, warn};
use uuid::Uuid;

/// Rebuild a flight itinerary from an unordered list of tickets.
///
/// Reads `{"flights": [["A","B"], ...], "source": "A"}` and prints the route
/// as a JSON array.
#[derive(Parser, Debug)]
#[command(name = "track")]
#[command(version)]
struct Cli {
    /// Request file; `-` reads stdin
    #[arg(short, long, default_value = "-")]
    input: PathBuf,

    /// Reject tickets that admit no complete route from the source
    #[arg(short, long, default_value_t = false)]
    strict: bool,

    /// Pretty-print the output JSON
    #[arg(short, long, default_value_t = false)]
    pretty: bool,
}

/// The `--strict` flag can only turn strict mode on.
fn service_for(cli: &Cli, cfg: &configs::AppConfig) -> (ItineraryService, Duration) {
    let strict = cli.strict || cfg.itinerary.strict;
    let svc = ItineraryService::new(ItineraryConfig { strict, max_tickets: cfg.itinerary.max_tickets });
    (svc, Duration::from_secs(cfg.itinerary.timeout_secs))
}

fn read_input(path: &Path, mut stdin: impl Read) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut body = String::new();
        stdin.read_to_string(&mut body).context("reading stdin")?;
        return Ok(body);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Run the computation off the async thread, bounded by `timeout`.
///
/// Ctrl+C is only watched here, while the computation runs. An interrupt
/// during input reading gets the default signal behaviour.
async fn track_with_timeout(
    svc: ItineraryService,
    request: TrackRequest,
    timeout: Duration,
) -> anyhow::Result<Itinerary<String>> {
    let task = tokio::task::spawn_blocking(move || svc.track(request));
    tokio::select! {
        res = tokio::time::timeout(timeout, task) => {
            let joined = res.map_err(|_| anyhow!("itinerary timed out after {}s", timeout.as_secs()))?;
            let route = joined.context("itinerary task failed")??;
            Ok(route)
        }
        _ = tokio::signal::ctrl_c() => Err(anyhow!("interrupted")),
    }
}

fn run(body: &str, pretty: bool, svc: &ItineraryService, timeout: Duration) -> anyhow::Result<String> {
    let request = decode_request(body)?;

    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let result = rt.block_on(track_with_timeout(svc.clone(), request, timeout));
    // a timed-out blocking task would otherwise hold up runtime drop
    rt.shutdown_background();
    let response = TrackResponse::from(result?.into_vec());

    let out = if pretty { serde_json::to_string_pretty(&response)? } else { serde_json::to_string(&response)? };
    Ok(out)
}

fn execute(cli: &Cli, svc: &ItineraryService, timeout: Duration) -> anyhow::Result<String> {
    let body = read_input(&cli.input, std::io::stdin().lock())?;
    run(&body, cli.pretty, svc, timeout)
}

/// Stable code of a request rejection; `None` for I/O, timeout and other failures.
fn rejection_code(err: &anyhow::Error) -> Option<u16> {
    err.downcast_ref::<ServiceError>().map(ServiceError::code)
}

fn exit_status<T>(result: &anyhow::Result<T>) -> u8 {
    if result.is_ok() { 0 } else { 1 }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // .env first so RUST_LOG, CONFIG_PATH and TRACKER_STRICT apply
    dotenv().ok();
    let (cfg, cfg_problems) = configs::AppConfig::load_or_default();
    common::utils::logging::init_logging(&cfg.logging.format);
    for e in &cfg_problems {
        let reason = format!("{e:#}");
        warn!(service = "track", event = "config_fallback", %reason, "config problem; continuing");
    }

    let run_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "track", event = "panic", %run_id, pid, message = %info, "unhandled panic occurred");
    }));

    let (svc, timeout) = service_for(&cli, &cfg);
    info!(
        service = "track",
        event = "start",
        %run_id,
        pid,
        version,
        strict = svc.config().strict,
        max_tickets = ?cfg.itinerary.max_tickets,
        "track starting"
    );

    let result = execute(&cli, &svc, timeout);
    let status = exit_status(&result);
    match result {
        Ok(out) => {
            println!("{out}");
            info!(service = "track", event = "stop", %run_id, "track finished");
        }
        Err(e) => {
            match rejection_code(&e) {
                Some(code) => warn!(service = "track", event = "rejected", %run_id, code, error = %e, "request rejected"),
                None => {
                    let msg = format!("{e:#}");
                    error!(service = "track", event = "failed", %run_id, error = %msg, "track failed")
                }
            }
            eprintln!("error: {e:#}");
        }
    }
    ExitCode::from(status)
}
