use crate::cli::ConfigFileFormat;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const DEFAULT_YAML: &str = r#"# mvsim configuration
#
# Percentages are on a 0-100 scale. Missing keys use the values shown here.

application:
  type: "Surface defect inspection"
  process_description: "Visual inspection of machined parts at end of line"
  current_defect_rate: 2.0        # % of parts that are defective
  production_rate: 100.0          # parts per hour
  current_inspection_rate: 0.0    # % of defects caught by today's inspection
  hours_per_day: 18.0
  production_days_per_year: 250.0

expectations:
  max_fp_rate: 1.0                # tolerated false positive rate, %
  max_fn_rate: 5.0                # tolerated false negative rate, %
  cost_impact_fp: 2.0             # cost of one false positive
  cost_impact_fn: 50.0            # cost of one missed defect

implementation:
  system_cost: 10000.0
  num_cameras: 4
  overlap_factor: 1               # cameras covering the same point
  recurring_cost: 1200.0          # per year
  time_horizon: 3                 # years
  # time_horizon_months: 36       # takes precedence over time_horizon

current_performance:
  current_precision: 95.0
  current_recall: 90.0
  num_images: 1000

assumptions:
  days_per_month: 30.0
  months_per_year: 12.0
  payback_target_months: 18
"#;

const DEFAULT_TOML: &str = r#"# mvsim configuration
#
# Percentages are on a 0-100 scale. Missing keys use the values shown here.

[application]
type = "Surface defect inspection"
process_description = "Visual inspection of machined parts at end of line"
current_defect_rate = 2.0        # % of parts that are defective
production_rate = 100.0          # parts per hour
current_inspection_rate = 0.0    # % of defects caught by today's inspection
hours_per_day = 18.0
production_days_per_year = 250.0

[expectations]
max_fp_rate = 1.0                # tolerated false positive rate, %
max_fn_rate = 5.0                # tolerated false negative rate, %
cost_impact_fp = 2.0             # cost of one false positive
cost_impact_fn = 50.0            # cost of one missed defect

[implementation]
system_cost = 10000.0
num_cameras = 4
overlap_factor = 1               # cameras covering the same point
recurring_cost = 1200.0          # per year
time_horizon = 3                 # years
# time_horizon_months = 36       # takes precedence over time_horizon

[current_performance]
current_precision = 95.0
current_recall = 90.0
num_images = 1000

[assumptions]
days_per_month = 30.0
months_per_year = 12.0
payback_target_months = 18
"#;

pub fn default_config_template(format: ConfigFileFormat) -> &'static str {
    match format {
        ConfigFileFormat::Yaml => DEFAULT_YAML,
        ConfigFileFormat::Toml => DEFAULT_TOML,
    }
}

pub fn init_config(force: bool, format: ConfigFileFormat) -> Result<()> {
    let config_path = init_config_in(Path::new("."), force, format)?;
    println!("Created {} configuration file", config_path.display());
    Ok(())
}

fn init_config_in(dir: &Path, force: bool, format: ConfigFileFormat) -> Result<PathBuf> {
    let config_path = dir.join(format.file_name());

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, default_config_template(format))?;
    Ok(config_path)
}
