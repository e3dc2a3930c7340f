use std::io::Write;

use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{CellAlignment, ContentArrangement, Table};

use super::{format_breakeven, format_currency, format_pct};
use crate::formatting::{ColorMode, Palette};
use crate::io::output::OutputWriter;
use crate::report::SimulationReport;

const RULE: &str = "───────────────────────────────────────────";

pub struct TerminalWriter<W: Write> {
    writer: W,
    palette: Palette,
    unicode_tables: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, color: ColorMode) -> Self {
        let use_color = color.should_use_color();
        Self {
            writer,
            palette: if use_color {
                Palette::new(ColorMode::Always)
            } else {
                Palette::plain()
            },
            unicode_tables: use_color,
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &SimulationReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_camera_requirements(report)?;
        self.write_financial_impact(report)?;
        self.write_timeline(report)?;
        self.write_payback(report)?;
        self.write_gap_analysis(report)?;
        self.write_advisories(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn section(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.palette.header(title))?;
        writeln!(self.writer, "{RULE}")?;
        Ok(())
    }

    fn new_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(if self.unicode_tables {
                UTF8_FULL
            } else {
                ASCII_FULL
            })
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    fn write_header(&mut self, report: &SimulationReport) -> anyhow::Result<()> {
        let p = self.palette;
        writeln!(self.writer, "{}", p.header("═══════════════════════════════════════════"))?;
        writeln!(self.writer, "{}", p.header("      MACHINE VISION APPLICATION SIMULATOR"))?;
        writeln!(self.writer, "{}", p.header("═══════════════════════════════════════════"))?;
        writeln!(
            self.writer,
            "Application: {}",
            p.bold(&report.application.application_type)
        )?;
        if !report.application.process_description.is_empty() {
            writeln!(self.writer, "Process: {}", report.application.process_description)?;
        }
        writeln!(
            self.writer,
            "{}",
            p.dim(&format!(
                "Current model evaluated on {} images",
                report.application.num_images
            ))
        )?;
        Ok(())
    }

    fn write_camera_requirements(&mut self, report: &SimulationReport) -> anyhow::Result<()> {
        self.section("Required Camera Precision and Recall")?;
        let req = &report.result.camera_requirement;
        writeln!(
            self.writer,
            "Required Camera Precision: {}",
            format_pct(req.required_precision_pct)
        )?;
        writeln!(
            self.writer,
            "Required Camera Recall:    {}",
            format_pct(req.required_recall_pct)
        )?;
        writeln!(
            self.writer,
            "Effective Recall with Overlap (x{}): {}",
            report.inputs.overlap_factor,
            format_pct(report.result.effective_recall_pct)
        )?;
        Ok(())
    }

    fn write_financial_impact(&mut self, report: &SimulationReport) -> anyhow::Result<()> {
        self.section("Financial Impact (per day)")?;
        let impact = &report.result.financial_impact;

        let mut table = self.new_table();
        table.set_header(vec!["", "Without System", "With System"]);
        table.add_row(vec![
            "Expected defects".to_string(),
            format!("{:.2}", impact.expected_defects),
            format!("{:.2}", impact.expected_defects),
        ]);
        table.add_row(vec![
            "Caught defects".to_string(),
            format!("{:.2}", impact.caught_defects),
            "-".to_string(),
        ]);
        table.add_row(vec![
            "Uncaught defects".to_string(),
            format!("{:.2}", impact.uncaught_defects),
            "-".to_string(),
        ]);
        table.add_row(vec![
            "False positives".to_string(),
            "-".to_string(),
            format!("{:.2}", impact.false_positive_count),
        ]);
        table.add_row(vec![
            "False negatives".to_string(),
            "-".to_string(),
            format!("{:.2}", impact.false_negative_count),
        ]);
        table.add_row(vec![
            "Cost due to false positives".to_string(),
            "-".to_string(),
            format_currency(impact.cost_of_false_positives),
        ]);
        table.add_row(vec![
            "Cost due to false negatives".to_string(),
            "-".to_string(),
            format_currency(impact.cost_of_false_negatives),
        ]);
        table.add_row(vec![
            "Total cost".to_string(),
            format_currency(impact.daily_cost_without_system),
            format_currency(impact.daily_cost_with_system),
        ]);
        right_align_numeric_columns(&mut table, 3);
        writeln!(self.writer, "{table}")?;

        let p = self.palette;
        let daily = report.result.daily_savings;
        writeln!(
            self.writer,
            "Cost saving: {} per day",
            p.signed(daily, &format_currency(daily))
        )?;
        writeln!(
            self.writer,
            "Annual saving ({} production days): {}",
            report.inputs.production_days_per_year,
            p.signed(
                report.result.annual_savings,
                &format_currency(report.result.annual_savings)
            )
        )?;
        Ok(())
    }

    fn write_timeline(&mut self, report: &SimulationReport) -> anyhow::Result<()> {
        self.section("ROI Timeline (cumulative, monthly)")?;
        let timeline = &report.result.roi_timeline;
        let comparison = &report.result.cost_comparison;

        let mut table = self.new_table();
        table.set_header(vec![
            "Month",
            "Cost",
            "Savings",
            "ROI",
            "Cost w/o System",
            "Cost with System",
        ]);
        for m in timeline.months() {
            let i = m as usize;
            table.add_row(vec![
                m.to_string(),
                format_currency(timeline.cumulative_cost[i]),
                format_currency(timeline.cumulative_savings[i]),
                format_currency(timeline.roi[i]),
                format_currency(comparison.without_system[i]),
                format_currency(comparison.with_system[i]),
            ]);
        }
        right_align_numeric_columns(&mut table, 6);
        writeln!(self.writer, "{table}")?;
        writeln!(
            self.writer,
            "Breakeven: {}",
            format_breakeven(report.result.breakeven_month)
        )?;
        Ok(())
    }

    fn write_payback(&mut self, report: &SimulationReport) -> anyhow::Result<()> {
        let payback = &report.result.payback;
        let summary = payback.summary();
        let line = if payback.meets_target {
            self.palette.good(&summary)
        } else {
            self.palette.warning(&summary)
        };
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.palette.bold(&line))?;
        Ok(())
    }

    fn write_gap_analysis(&mut self, report: &SimulationReport) -> anyhow::Result<()> {
        self.section("Performance Gap Analysis")?;
        let gap = &report.result.gap_analysis;
        let p = self.palette;
        writeln!(
            self.writer,
            "Precision Gap: {}",
            p.signed(-gap.precision_gap, &format_pct(gap.precision_gap))
        )?;
        writeln!(
            self.writer,
            "Recall Gap:    {}",
            p.signed(-gap.recall_gap, &format_pct(gap.recall_gap))
        )?;

        for area in gap.improvement_areas() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", p.bold(area.title()))?;
            for (i, suggestion) in area.suggestions().iter().enumerate() {
                writeln!(self.writer, "  {}. {}", i + 1, suggestion)?;
            }
        }
        Ok(())
    }

    fn write_advisories(&mut self, report: &SimulationReport) -> anyhow::Result<()> {
        if !report.result.has_advisories() {
            return Ok(());
        }
        self.section("Advisories")?;
        for advisory in &report.result.advisories {
            writeln!(self.writer, "  {} {}", self.palette.warning("!"), advisory)?;
        }
        Ok(())
    }
}

fn right_align_numeric_columns(table: &mut Table, columns: usize) {
    for index in 1..columns {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}
