use std::io::Write;

use crate::io::output::OutputWriter;
use crate::report::SimulationReport;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &SimulationReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulatorConfig;
    use crate::engine::run_simulation;

    #[test]
    fn test_json_contains_timeline_and_inputs() {
        let config = SimulatorConfig::default();
        let inputs = config.to_inputs().unwrap();
        let result = run_simulation(&inputs).unwrap();
        let report =
            SimulationReport::new(config.profile(), inputs, config.roi_assumptions(), result);

        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_report(&report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["inputs"]["num_cameras"], 4);
        assert_eq!(
            value["result"]["roi_timeline"]["roi"]
                .as_array()
                .unwrap()
                .len(),
            37
        );
        assert_eq!(value["assumptions"]["days_per_month"], 30.0);
        assert!(value["metadata"]["tool_version"].is_string());
    }
}
