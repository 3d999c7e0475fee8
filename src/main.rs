use standard_atmosphere::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let altitudes = linspace(0.0, STRATOSPHERE_TOP, DEFAULT_PROFILE_POINTS);
    info!(
        points = altitudes.len(),
        top = STRATOSPHERE_TOP,
        "computing standard atmosphere"
    );

    let profile = checked_atmosphere(&altitudes)?;
    let report = RelativeVariation::from_profile(&profile)?;

    report.display();

    Ok(())
}
