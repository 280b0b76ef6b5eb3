mod bootstrap;

use anyhow::Result;
use weight_core::error::WeightError;
use weight_core::settings::Settings;
use weight_data::convert_json_to_csv;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("weight-export v{} starting", env!("CARGO_PKG_VERSION"));

    // Fail before asking anything if there is nothing to read.
    if !settings.input_dir.is_dir() {
        return Err(WeightError::InputDirNotFound(settings.input_dir.clone()).into());
    }

    let convert_to_kg = match settings.unit_choice() {
        Some(choice) => choice,
        None => bootstrap::ask_convert_to_kg(std::io::stdin().lock(), std::io::stdout())?,
    };

    let config = settings.conversion_config(convert_to_kg);
    tracing::info!(
        "Reading {} (weights in {})",
        config.input_dir.display(),
        config.unit()
    );

    let summary = convert_json_to_csv(&config)?;
    tracing::debug!("Run summary: {}", serde_json::to_string(&summary)?);

    println!(
        "Data has been converted and saved to '{}'.",
        summary.output_path.display()
    );

    Ok(())
}
