//! Output formatters for comparison reports

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{JobCompareError, Result};
use crate::output::report::*;
use crate::scoring::dimensions::{Dimension, DimensionScore};
use crate::scoring::ranker::{MatchLabel, RankedJob};
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

/// Trait for rendering a comparison report
pub trait OutputFormatter {
    fn format_report(&self, report: &ComparisonReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for machine consumers
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for shareable exports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Dispatches to the formatter for a requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_label(&self, label: MatchLabel) -> String {
        let color = match label {
            MatchLabel::Excellent => Color::Green,
            MatchLabel::Great => Color::BrightGreen,
            MatchLabel::Good => Color::Yellow,
            MatchLabel::Fair => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", label.to_string().color(color).bold())
        } else {
            format!("[{}]", label)
        }
    }

    fn format_bar(&self, score: u32) -> String {
        let filled = (score as usize + 5) / 10;
        let bar = format!("{}{}", "■".repeat(filled), "·".repeat(10 - filled.min(10)));
        let color = match score {
            80.. => Color::Green,
            60..=79 => Color::Yellow,
            _ => Color::Red,
        };
        self.colorize(&bar, color)
    }

    fn format_breakdown(&self, breakdown: &[DimensionScore]) -> String {
        let mut output = String::new();
        for entry in breakdown {
            output.push_str(&format!(
                "     {} {:<8} {} {:>3}\n",
                entry.icon,
                entry.label,
                self.format_bar(entry.score),
                entry.score
            ));
        }
        output
    }

    fn format_leaderboard_entry(&self, ranked: &RankedJob, best_index: Option<usize>) -> String {
        let badge = if Some(ranked.index) == best_index {
            format!(" {}", self.colorize("★ Best Match", Color::Magenta))
        } else {
            String::new()
        };

        let mut output = format!(
            "  #{} {} {} {}%{}\n",
            ranked.rank,
            self.colorize(&ranked.job.to_string(), Color::White),
            self.format_label(ranked.label),
            ranked.match_data.total,
            badge
        );
        if self.detailed {
            output.push_str(&self.format_breakdown(&ranked.match_data.breakdown));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ComparisonReport) -> Result<String> {
        let mut output = String::new();
        let best_index = report.best_match.as_ref().map(|best| best.index);

        output.push_str(&self.format_header("📊 JOB COMPARISON", 1));
        output.push_str(&format!(
            "Generated: {} | Jobs compared: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.summary.job_count
        ));

        match &report.leaderboard {
            Some(leaderboard) => {
                output.push_str(&self.format_header("🏆 Leaderboard", 2));
                for ranked in leaderboard {
                    output.push_str(&self.format_leaderboard_entry(ranked, best_index));
                }
            }
            None => {
                output.push_str(&self.format_header("📋 Job Scores", 2));
                output.push_str(&self.colorize("Add at least two jobs to rank them.\n", Color::BrightBlack));
                for card in &report.cards {
                    output.push_str(&format!(
                        "  {} {}%\n",
                        self.colorize(&card.job.to_string(), Color::White),
                        card.match_data.total
                    ));
                    output.push_str(&self.format_breakdown(&card.match_data.breakdown));
                }
            }
        }

        if let Some(best) = &report.best_match {
            output.push_str(&self.format_header("⭐ Best Match", 2));
            output.push_str(&format!(
                "{} @ {} (score {})\n",
                self.colorize(&best.title, Color::Cyan),
                best.company,
                best.job_score.score
            ));
            for reason in &best.job_score.reasons {
                output.push_str(&format!("  • {}\n", self.colorize(&reason.to_string(), Color::Green)));
            }
            if report.summary.picks_diverge {
                output.push_str(&self.colorize(
                    "  Note: the leaderboard leader differs from the best match pick.\n",
                    Color::BrightBlack,
                ));
            }
        }

        output.push_str(&self.format_header("Summary", 3));
        output.push_str(&format!("Average match: {:.1}%\n", report.summary.average_total));
        output.push_str(&format!("Trending jobs: {}\n", report.summary.hot_job_count));
        if let Some(card) = report.summary.highest_salary_index.and_then(|index| report.card(index)) {
            output.push_str(&format!("Highest salary: {} ({})\n", card.job, card.job.salary));
        }

        if self.detailed {
            output.push_str(&self.format_header("Weights", 3));
            for dimension in Dimension::ALL {
                output.push_str(&format!(
                    "  {} {}: {:.0}%\n",
                    dimension.icon(),
                    dimension.label(),
                    report.weights.get(dimension) * 100.0
                ));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ComparisonReport) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        rendered.map_err(|e| JobCompareError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_badge(label: MatchLabel) -> &'static str {
        match label {
            MatchLabel::Excellent => "🟢 Excellent Match",
            MatchLabel::Great => "🟡 Great Match",
            MatchLabel::Good => "🟠 Good Match",
            MatchLabel::Fair => "🔴 Fair Match",
        }
    }

    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|")
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ComparisonReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📊 Job Comparison Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Version:** {}\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.tool_version
            ));
            if let Some(source) = &report.metadata.source_file {
                let name = Path::new(source)
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_else(|| source.clone());
                output.push_str(&format!("**Source:** `{}`\n", name));
            }
            output.push('\n');
        }

        if let Some(leaderboard) = &report.leaderboard {
            output.push_str("## Leaderboard\n\n");
            output.push_str("| Rank | Job | Company | Match | Label |\n");
            output.push_str("|------|-----|---------|-------|-------|\n");
            for ranked in leaderboard {
                output.push_str(&format!(
                    "| {} | {} | {} | {}% | {} |\n",
                    ranked.rank,
                    Self::escape_cell(&ranked.job.title),
                    Self::escape_cell(&ranked.job.company),
                    ranked.match_data.total,
                    Self::markdown_badge(ranked.label)
                ));
            }
            output.push('\n');
        }

        if let Some(best) = &report.best_match {
            output.push_str("## ⭐ Best Match\n\n");
            output.push_str(&format!(
                "**{}** at {} (score {})\n\n",
                best.title, best.company, best.job_score.score
            ));
            for reason in &best.job_score.reasons {
                output.push_str(&format!("- {}\n", reason));
            }
            output.push('\n');
        }

        output.push_str("## Score Breakdown\n\n");
        output.push_str("| Job | Salary | Growth | Demand | Balance | Access | Total |\n");
        output.push_str("|-----|--------|--------|--------|---------|--------|-------|\n");
        for card in &report.cards {
            let scores: Vec<String> = card
                .match_data
                .breakdown
                .iter()
                .map(|entry| entry.score.to_string())
                .collect();
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_cell(&card.job.title),
                scores.join(" | "),
                card.match_data.total
            ));
        }
        output.push('\n');

        output.push_str("## Job Details\n\n");
        output.push_str("| Job | Company | Location | Salary | Requirement | Sector | Trending |\n");
        output.push_str("|-----|---------|----------|--------|-------------|--------|----------|\n");
        for card in &report.cards {
            let job = &card.job;
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                Self::escape_cell(&job.title),
                Self::escape_cell(&job.company),
                Self::escape_cell(&job.location),
                Self::escape_cell(&job.salary),
                Self::escape_cell(&job.requirement),
                Self::escape_cell(&job.sector),
                if job.is_hot { "🔥" } else { "" }
            ));
        }
        output.push('\n');

        output.push_str(&format!(
            "_Average match {:.1}% across {} jobs._\n",
            report.summary.average_total, report.summary.job_count
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::with_options(config.color_output, config.detailed, config.pretty_json, true)
    }

    pub fn generate_report(&self, report: &ComparisonReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// Resolve the `--save` target. A directory gets a generated file name
/// derived from the job list it was built from.
pub fn resolve_report_path(save: &Path, format: OutputFormat, source_name: &str) -> PathBuf {
    if save.is_dir() {
        save.join(suggest_filename(format, source_name, true))
    } else {
        save.to_path_buf()
    }
}

pub fn suggest_filename(format: OutputFormat, source_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(source_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_comparison{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_comparison{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_comparison{}.md", base_name, timestamp_suffix),
    }
}
