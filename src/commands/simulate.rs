use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli::InputOverrides;
use crate::config::{resolve_config, ConfigSource, SimulatorConfig};
use crate::engine::Simulator;
use crate::formatting::ColorMode;
use crate::io::{create_writer, OutputFormat};
use crate::report::SimulationReport;

pub struct SimulateConfig {
    pub config: Option<PathBuf>,
    pub overrides: InputOverrides,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

pub fn simulate(config: SimulateConfig) -> Result<()> {
    let (file_config, source) = resolve_config(config.config.as_deref())
        .context("Failed to load configuration")?;
    match &source {
        ConfigSource::File(path) => log::info!("Using configuration from {}", path.display()),
        ConfigSource::Defaults => log::info!("No configuration file found, using defaults"),
    }

    let report = build_report(&file_config, &config.overrides, &source)?;

    let color = if config.plain {
        ColorMode::Never
    } else {
        ColorMode::from_env()
    };
    color.apply();

    let mut writer = create_writer(config.format, config.output.as_deref(), color)?;
    writer.write_report(&report)?;

    if let Some(path) = &config.output {
        log::info!("Report written to {}", path.display());
    }
    Ok(())
}

/// Run the engine on the effective inputs and assemble the report.
///
/// The engine reports input and assumption violations together.
pub fn build_report(
    file_config: &SimulatorConfig,
    overrides: &InputOverrides,
    source: &ConfigSource,
) -> Result<SimulationReport> {
    let configured = match overrides.time_horizon_months {
        Some(months) => file_config.inputs_with_horizon(months),
        None => file_config.to_inputs()?,
    };
    let inputs = overrides.apply(configured);
    if !overrides.is_empty() {
        log::debug!("Inputs after command-line overrides: {inputs:?}");
    }

    let result = Simulator::new()
        .with_assumptions(file_config.roi_assumptions())
        .with_payback_target(file_config.payback_target_months())
        .run(&inputs)?;

    let report = SimulationReport::new(
        file_config.profile(),
        inputs,
        file_config.roi_assumptions(),
        result,
    );
    Ok(match source {
        ConfigSource::File(path) => report.with_config_path(path.display().to_string()),
        ConfigSource::Defaults => report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SimulationError;

    #[test]
    fn test_overrides_flow_into_report() {
        let overrides = InputOverrides {
            time_horizon_months: Some(6),
            ..InputOverrides::default()
        };
        let report = build_report(
            &SimulatorConfig::default(),
            &overrides,
            &ConfigSource::File(PathBuf::from("mvsim.yaml")),
        )
        .unwrap();

        assert_eq!(report.inputs.time_horizon_months, 6);
        assert_eq!(report.result.roi_timeline.len(), 7);
        assert_eq!(report.metadata.config_path.as_deref(), Some("mvsim.yaml"));
    }

    #[test]
    fn test_input_and_assumption_violations_reported_together() {
        let mut config = SimulatorConfig::default();
        config.assumptions.days_per_month = 0.0;
        let overrides = InputOverrides {
            num_cameras: Some(0),
            ..InputOverrides::default()
        };

        let err = build_report(&config, &overrides, &ConfigSource::Defaults).unwrap_err();
        let err = err.downcast::<SimulationError>().unwrap();
        assert!(err.mentions_field("num_cameras"));
        assert!(err.mentions_field("days_per_month"));
    }

    #[test]
    fn test_month_override_bypasses_year_horizon() {
        let mut config = SimulatorConfig::default();
        config.implementation.time_horizon = u32::MAX;

        let err = build_report(&config, &InputOverrides::default(), &ConfigSource::Defaults)
            .unwrap_err()
            .downcast::<SimulationError>()
            .unwrap();
        assert!(err.mentions_field("time_horizon"));

        let overrides = InputOverrides {
            time_horizon_months: Some(4),
            ..InputOverrides::default()
        };
        let report = build_report(&config, &overrides, &ConfigSource::Defaults).unwrap();
        assert_eq!(report.result.roi_timeline.len(), 5);
    }
}
