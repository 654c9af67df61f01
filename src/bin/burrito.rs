//! burrito CLI: resolve parameters and write an export script.

use burrito::cli::{Cli, CliOptions, help_text};
use burrito::config::Config;
use burrito::engine::wrap;
use burrito::error::Error;
use burrito::resolver::Resolver;
use burrito::store::SsmStore;
use burrito::telemetry::{TelemetryConfig, init_telemetry};

fn main() {
    dotenvy::dotenv().ok();
    let (options, names) = match Cli::parse_normalized(std::env::args_os()).into_parts() {
        Ok(parts) => parts,
        Err(err) => {
            println!("{}", help_text());
            println!("Error: {err}\n");
            std::process::exit(err.exit_code());
        }
    };

    let code = match run(options, names) {
        Ok(()) => 0,
        Err(err) => {
            println!("Error: {err}");
            err.downcast_ref::<Error>().map_or(1, Error::exit_code)
        }
    };
    std::process::exit(code);
}

/// Everything that needs the runtime or telemetry lives here so both are
/// dropped (and flushed) before the process exits.
///
/// The OTLP exporters drive their gRPC channel on a runtime worker while
/// the guard blocks in shutdown, so the runtime needs a worker thread of
/// its own. Lookups are still awaited one at a time.
fn run(options: CliOptions, names: Vec<String>) -> anyhow::Result<()> {
    let config = Config::from_env();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let _guard = init_telemetry(TelemetryConfig {
            endpoint: config.otel_endpoint.clone(),
            service_name: "burrito".to_string(),
            log_level: config.log_level.clone(),
        })?;

        let store = SsmStore::connect(&options.region).await?;
        let resolver = Resolver::new(store).with_policy(options.key_policy);

        let wrapped = wrap(&resolver, &options.header_line, &names).await;
        tracing::info!(
            resolved = names.len() - wrapped.skipped.len(),
            skipped = wrapped.skipped.len(),
            "parameters collected"
        );

        wrapped.script.write_to(&options.output_path)?;
        Ok(())
    })
}
