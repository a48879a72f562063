//! Car Price Predictor - Main Entry Point
//!
//! Loads the reference dataset and the model bundle once, then either serves
//! the terminal form or, with `--record`, predicts a single car and exits.

use anyhow::{Context, Result};
use car_price_predictor::{
    logging::{self, LogTarget},
    ui, AppConfig, ArtifactCache, Args, CarRecord, InferenceEngine, InputDomains,
    ResultPresenter,
};
use clap::Parser;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load_from_path(&args.config)?;
    args.apply_overrides(&mut config);
    let record = args.parse_record()?;

    // Initialize logging
    let target = if record.is_some() {
        LogTarget::Stderr
    } else {
        LogTarget::File(config.logging.file.clone())
    };
    logging::init(&config.logging, target)?;

    info!("Starting Car Price Predictor");
    info!(
        dataset = %config.artifacts.dataset_path.display(),
        bundle = %config.artifacts.bundle_path.display(),
        "Configuration loaded successfully"
    );

    // Load both artifacts before anything is shown
    let cache = ArtifactCache::new(
        &config.artifacts.dataset_path,
        &config.artifacts.bundle_path,
    );
    let dataset = cache
        .dataset()
        .map_err(|e| {
            error!(error = %e, "Failed to load reference dataset");
            e
        })
        .context("Failed to load reference dataset")?;
    let bundle = cache
        .bundle()
        .map_err(|e| {
            error!(error = %e, "Failed to load model bundle");
            e
        })
        .context("Failed to load model bundle")?;

    let domains = dataset.domains();
    let engine = InferenceEngine::new(bundle);

    for gap in engine.domain_gaps(&domains) {
        warn!(
            column = gap.field.column(),
            value = %gap.value,
            "Dataset category unknown to the fitted encoder; submitting it will fail"
        );
    }

    let presenter = ResultPresenter::new(&config.display);

    match record {
        Some(record) => run_headless(&engine, &domains, &presenter, &record),
        None => ui::run(ui::App::new(engine, &domains, presenter)),
    }
}

/// Predict one record given on the command line and print the result
fn run_headless(
    engine: &InferenceEngine,
    domains: &InputDomains,
    presenter: &ResultPresenter,
    record: &CarRecord,
) -> Result<()> {
    domains
        .check(record)
        .context("Record is outside the form's input domains")?;

    let result = engine.predict(record).context("Prediction failed")?;
    info!(
        price = result.price,
        label = %result.label,
        cluster = result.cluster,
        "Prediction successful"
    );

    print!("{}", presenter.render_text(&result, &engine.identity()));
    Ok(())
}
