use anyhow::Context;
use clap::Parser;
use hinted_koans::core::runner::DEFAULT_CHANNEL;
use hinted_koans::exercises;
use hinted_koans::utils::validation::{validate_known_ids, Validate};
use hinted_koans::utils::logger;
use hinted_koans::{CliConfig, Runner, StdoutSink, SuiteEntry, SuiteManifest};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting hinted-koans");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    if config.list {
        for id in exercises::exercise_ids() {
            println!("{}", id);
        }
        return Ok(());
    }

    let manifest = match &config.manifest {
        Some(path) => Some(
            SuiteManifest::from_file(path)
                .with_context(|| format!("loading manifest {}", path.display()))?,
        ),
        None => None,
    };

    // CLI selection wins over the manifest's; empty means the whole suite.
    let mut selected = config.exercise.clone();
    if selected.is_empty() {
        if let Some(m) = &manifest {
            selected = m.exercises.clone();
        }
    }

    if let Err(e) = validate_known_ids("exercises", &selected, &exercises::exercise_ids()) {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let entries: Vec<SuiteEntry> = exercises::builtin_suite()
        .into_iter()
        .filter(|entry| selected.is_empty() || selected.iter().any(|id| id == &entry.exercise.id))
        .collect();

    let channel = manifest
        .as_ref()
        .and_then(|m| m.channel())
        .unwrap_or(DEFAULT_CHANNEL);

    let mut runner = Runner::with_channel(StdoutSink, channel);
    let summary = runner.run_suite(&entries);

    if config.report_json {
        println!("{}", summary.to_json()?);
    }

    tracing::info!(
        "{} passed, {} failed of {} exercises",
        summary.passed,
        summary.failed,
        summary.total
    );

    if let Err(e) = summary.ensure_passed() {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("✅ All exercises passed");
    println!("✅ All exercises passed");

    Ok(())
}
