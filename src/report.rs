/*!
 * Reporting functionality for quotefs
 *
 * Renders the outcome of a run as console tables using the tabled library.
 */

use std::path::PathBuf;
use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::utils::format_file_size;
use crate::visitor::RewriteStatistics;

/// Outcome of one run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Root of the quote tree
    pub workspace: PathBuf,
    /// Time taken by the whole run
    pub duration: Duration,
    /// Files written by the quote store
    pub stored_files: Vec<PathBuf>,
    /// Nodes printed while listing the tree
    pub nodes_listed: usize,
    /// Rewrite totals, absent when rewriting was skipped
    pub rewrite: Option<RewriteStatistics>,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for run results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string
    pub fn generate_report(&self, report: &RunReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &RunReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Path relative to the workspace, for display
    fn format_path(&self, report: &RunReport, path: &std::path::Path) -> String {
        path.strip_prefix(&report.workspace)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    fn create_summary_table(&self, report: &RunReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = vec![
            SummaryRow {
                key: "📂 Workspace".to_string(),
                value: report.workspace.display().to_string(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "💬 Quotes Stored".to_string(),
                value: report.stored_files.len().to_string(),
            },
            SummaryRow {
                key: "🌳 Nodes Listed".to_string(),
                value: report.nodes_listed.to_string(),
            },
        ];

        match &report.rewrite {
            Some(stats) => {
                rows.push(SummaryRow {
                    key: "📄 Files Rewritten".to_string(),
                    value: stats.files_rewritten.to_string(),
                });
                rows.push(SummaryRow {
                    key: "📝 Lines Numbered".to_string(),
                    value: stats.lines_processed.to_string(),
                });
                rows.push(SummaryRow {
                    key: "📦 Size".to_string(),
                    value: format!(
                        "{} → {}",
                        format_file_size(stats.bytes_read),
                        format_file_size(stats.bytes_written)
                    ),
                });
            }
            None => rows.push(SummaryRow {
                key: "📄 Files Rewritten".to_string(),
                value: "skipped".to_string(),
            }),
        }

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_files_table(&self, report: &RunReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "#")]
            index: usize,

            #[tabled(rename = "Quote File")]
            path: String,
        }

        let rows: Vec<FileRow> = report
            .stored_files
            .iter()
            .enumerate()
            .map(|(i, path)| FileRow {
                index: i + 1,
                path: self.format_path(report, path),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn generate_console_report(&self, report: &RunReport) -> String {
        let files_table = self.create_files_table(report);
        let summary_table = self.create_summary_table(report);

        format!(
            "{}\n{}\n\n{}\n{}",
            "📋  STORED QUOTES", files_table, "✅  RUN COMPLETE", summary_table
        )
    }
}
