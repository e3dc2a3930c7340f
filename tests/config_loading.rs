//! Configuration files through to simulation inputs.

use indoc::indoc;
use mvsim::config::{load_config_from_path, resolve_config, ConfigSource};
use mvsim::{validate_config, ConfigError};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const CUSTOMER_YAML: &str = indoc! {"
    application:
      type: Bottle cap inspection
      process_description: Caps checked after torque station
      current_defect_rate: 2
      production_rate: 100
      current_inspection_rate: 70
    expectations:
      max_fp_rate: 1
      max_fn_rate: 5
      cost_impact_fp: 2
      cost_impact_fn: 50
    implementation:
      system_cost: 10000
      num_cameras: 2
      overlap_factor: 2
      recurring_cost: 1200
      time_horizon: 2
    current_performance:
      current_precision: 97
      current_recall: 80
      num_images: 2500
"};

#[test]
fn test_yaml_groups_map_onto_inputs() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("mvsim.yaml");
    fs::write(&path, CUSTOMER_YAML).unwrap();

    let config = load_config_from_path(&path).unwrap();
    let inputs = config.to_inputs().unwrap();

    assert_eq!(config.profile().application_type, "Bottle cap inspection");
    assert_eq!(config.profile().num_images, 2500);
    assert_eq!(inputs.hours_per_day, 18.0);
    assert_eq!(inputs.time_horizon_months, 24);
    assert_eq!(inputs.num_cameras, 2);
    assert_eq!(inputs.current_inspection_detection_rate_pct, 70.0);
    assert!(validate_config(&config).is_success());
}

#[test]
fn test_toml_and_yaml_agree() {
    let temp_dir = TempDir::new().unwrap();
    let yaml_path = temp_dir.path().join("a.yaml");
    let toml_path = temp_dir.path().join("b.toml");
    fs::write(&yaml_path, CUSTOMER_YAML).unwrap();
    fs::write(
        &toml_path,
        indoc! {r#"
            [application]
            type = "Bottle cap inspection"
            process_description = "Caps checked after torque station"
            current_defect_rate = 2.0
            production_rate = 100.0
            current_inspection_rate = 70.0

            [expectations]
            max_fp_rate = 1.0
            max_fn_rate = 5.0
            cost_impact_fp = 2.0
            cost_impact_fn = 50.0

            [implementation]
            system_cost = 10000.0
            num_cameras = 2
            overlap_factor = 2
            recurring_cost = 1200.0
            time_horizon = 2

            [current_performance]
            current_precision = 97.0
            current_recall = 80.0
            num_images = 2500
        "#},
    )
    .unwrap();

    assert_eq!(
        load_config_from_path(&yaml_path).unwrap(),
        load_config_from_path(&toml_path).unwrap()
    );
}

#[test]
fn test_months_override_years() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("mvsim.yml");
    fs::write(
        &path,
        indoc! {"
            implementation:
              time_horizon: 5
              time_horizon_months: 9
        "},
    )
    .unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.to_inputs().unwrap().time_horizon_months, 9);
}

#[test]
fn test_explicit_path_errors() {
    let temp_dir = TempDir::new().unwrap();

    let missing = temp_dir.path().join("missing.yaml");
    assert!(matches!(
        resolve_config(Some(&missing)),
        Err(ConfigError::NotFound(_))
    ));

    let unsupported = temp_dir.path().join("mvsim.json");
    fs::write(&unsupported, "{}").unwrap();
    assert!(matches!(
        resolve_config(Some(&unsupported)),
        Err(ConfigError::UnsupportedFormat(_))
    ));

    let malformed = temp_dir.path().join("mvsim.yaml");
    fs::write(&malformed, "implementation: [not, a, map]\n").unwrap();
    assert!(matches!(
        resolve_config(Some(&malformed)),
        Err(ConfigError::Yaml(_))
    ));
}

#[test]
fn test_explicit_path_is_reported_as_source() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("mvsim.yaml");
    fs::write(&path, CUSTOMER_YAML).unwrap();

    let (_, source) = resolve_config(Some(&path)).unwrap();
    assert_eq!(source, ConfigSource::File(path));
}
