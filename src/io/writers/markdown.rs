use std::io::Write;

use super::{format_breakeven, format_currency, format_pct};
use crate::io::output::OutputWriter;
use crate::report::SimulationReport;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &SimulationReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_requirements(report)?;
        self.write_financial_impact(report)?;
        self.write_timeline(report)?;
        self.write_gap_analysis(report)?;
        self.write_advisories(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &SimulationReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Machine Vision Simulation Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Version: {}", report.metadata.tool_version)?;
        if let Some(ref path) = report.metadata.config_path {
            writeln!(self.writer, "Configuration: `{path}`")?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Application:** {}",
            report.application.application_type
        )?;
        if !report.application.process_description.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", report.application.process_description)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_requirements(&mut self, report: &SimulationReport) -> anyhow::Result<()> {
        let req = &report.result.camera_requirement;
        writeln!(self.writer, "## Required Camera Precision and Recall")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Required camera precision | {} |",
            format_pct(req.required_precision_pct)
        )?;
        writeln!(
            self.writer,
            "| Required camera recall | {} |",
            format_pct(req.required_recall_pct)
        )?;
        writeln!(
            self.writer,
            "| Effective recall with overlap (x{}) | {} |",
            report.inputs.overlap_factor,
            format_pct(report.result.effective_recall_pct)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_financial_impact(&mut self, report: &SimulationReport) -> anyhow::Result<()> {
        let impact = &report.result.financial_impact;
        writeln!(self.writer, "## Financial Impact (per day)")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| | Without System | With System |")?;
        writeln!(self.writer, "|---|---:|---:|")?;
        writeln!(
            self.writer,
            "| Expected defects | {:.2} | {:.2} |",
            impact.expected_defects, impact.expected_defects
        )?;
        writeln!(
            self.writer,
            "| Caught / uncaught defects | {:.2} / {:.2} | - |",
            impact.caught_defects, impact.uncaught_defects
        )?;
        writeln!(
            self.writer,
            "| False positives / negatives | - | {:.2} / {:.2} |",
            impact.false_positive_count, impact.false_negative_count
        )?;
        writeln!(
            self.writer,
            "| Cost of false positives | - | {} |",
            format_currency(impact.cost_of_false_positives)
        )?;
        writeln!(
            self.writer,
            "| Cost of false negatives | - | {} |",
            format_currency(impact.cost_of_false_negatives)
        )?;
        writeln!(
            self.writer,
            "| **Total cost** | {} | {} |",
            format_currency(impact.daily_cost_without_system),
            format_currency(impact.daily_cost_with_system)
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Cost saving: **{}** per day",
            format_currency(report.result.daily_savings)
        )?;
        writeln!(
            self.writer,
            "- Annual saving: **{}**",
            format_currency(report.result.annual_savings)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_timeline(&mut self, report: &SimulationReport) -> anyhow::Result<()> {
        let timeline = &report.result.roi_timeline;
        let comparison = &report.result.cost_comparison;

        writeln!(self.writer, "## ROI Timeline")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Month | Cumulative Cost | Cumulative Savings | ROI | Cost w/o System | Cost with System |"
        )?;
        writeln!(self.writer, "|---:|---:|---:|---:|---:|---:|")?;
        for m in timeline.months() {
            let i = m as usize;
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} |",
                m,
                format_currency(timeline.cumulative_cost[i]),
                format_currency(timeline.cumulative_savings[i]),
                format_currency(timeline.roi[i]),
                format_currency(comparison.without_system[i]),
                format_currency(comparison.with_system[i]),
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Breakeven: {}",
            format_breakeven(report.result.breakeven_month)
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**{}**", report.result.payback.summary())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_gap_analysis(&mut self, report: &SimulationReport) -> anyhow::Result<()> {
        let gap = &report.result.gap_analysis;
        writeln!(self.writer, "## Performance Gap Analysis")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Precision gap: {}", format_pct(gap.precision_gap))?;
        writeln!(self.writer, "- Recall gap: {}", format_pct(gap.recall_gap))?;
        writeln!(self.writer)?;

        for area in gap.improvement_areas() {
            writeln!(self.writer, "### {}", area.title())?;
            writeln!(self.writer)?;
            for (i, suggestion) in area.suggestions().iter().enumerate() {
                writeln!(self.writer, "{}. {}", i + 1, suggestion)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_advisories(&mut self, report: &SimulationReport) -> anyhow::Result<()> {
        if !report.result.has_advisories() {
            return Ok(());
        }
        writeln!(self.writer, "## Advisories")?;
        writeln!(self.writer)?;
        for advisory in &report.result.advisories {
            writeln!(self.writer, "- {advisory}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}
