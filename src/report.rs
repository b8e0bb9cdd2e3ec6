/*!
 * Analysis reporting for skukozh
 *
 * Parses the delimited result artifact back into per-file entries and
 * renders aggregate plus per-file statistics with the tabled library.
 */

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::utils::format_file_size;

/// Statistics for one embedded file body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Relative path as recorded in the artifact
    pub path: String,
    /// Size of the embedded body in bytes
    pub size: u64,
    /// Non-whitespace character count of the body
    pub symbols: usize,
}

/// Aggregate statistics over one result artifact
#[derive(Debug, Clone, Default)]
pub struct AnalysisReport {
    /// Total artifact size in bytes
    pub total_bytes: u64,
    /// Non-whitespace character count of the whole artifact
    pub total_symbols: usize,
    /// Per-file entries, sorted by body size descending
    pub files: Vec<FileEntry>,
}

impl AnalysisReport {
    /// Parse a result artifact.
    ///
    /// Sections that are missing their `#START`/`#END` markers are skipped;
    /// a malformed artifact yields a report over whatever parsed.
    pub fn parse(content: &str) -> Self {
        let total_bytes = content.len() as u64;
        let total_symbols = count_symbols(content);

        let mut files = Vec::new();

        for section in content.split("#FILE ").skip(1) {
            let Some(path) = section.lines().next() else {
                continue;
            };
            let path = path.trim().to_string();

            let Some(body) = extract_body(section) else {
                continue;
            };

            files.push(FileEntry {
                path,
                size: body.len() as u64,
                symbols: count_symbols(body),
            });
        }

        files.sort_by(|a, b| b.size.cmp(&a.size));

        Self {
            total_bytes,
            total_symbols,
            files,
        }
    }
}

/// Body text between the fence line after `#START` and the closing fence
fn extract_body(section: &str) -> Option<&str> {
    const START_MARKER: &str = "#START\n```";
    const END_MARKER: &str = "```\n#END";

    let start = section.find(START_MARKER)? + START_MARKER.len();
    // Skip the language-identifier remainder of the fence line
    let fence_end = section[start..].find('\n')?;
    let body_start = start + fence_end + 1;

    let body_len = section[body_start..].find(END_MARKER)?;
    Some(&section[body_start..body_start + body_len])
}

fn count_symbols(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for analysis results
pub struct Reporter {
    format: ReportFormat,
    /// Number of largest files to show
    top_count: usize,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat, top_count: usize) -> Self {
        Self { format, top_count }
    }

    /// Generate a report string for an analysis
    pub fn generate_report(&self, report: &AnalysisReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &AnalysisReport) {
        println!("\n{}", self.generate_report(report));
    }

    fn create_summary_table(&self, report: &AnalysisReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "Total file size".to_string(),
                value: format_file_size(report.total_bytes),
            },
            SummaryRow {
                key: "Total symbols".to_string(),
                value: report.total_symbols.to_string(),
            },
            SummaryRow {
                key: "Files".to_string(),
                value: report.files.len().to_string(),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_files_table(&self, report: &AnalysisReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File")]
            path: String,

            #[tabled(rename = "Size (KB)")]
            size_kb: String,

            #[tabled(rename = "Symbols")]
            symbols: usize,
        }

        let rows: Vec<FileRow> = report
            .files
            .iter()
            .take(self.top_count)
            .map(|entry| FileRow {
                path: entry.path.clone(),
                size_kb: format!("{:.2}", entry.size as f64 / 1024.0),
                symbols: entry.symbols,
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn generate_console_report(&self, report: &AnalysisReport) -> String {
        let summary = self.create_summary_table(report);

        if report.files.is_empty() {
            return format!(
                "Analysis Report\n{}\n\nNo files found in the result file.",
                summary
            );
        }

        let files = self.create_files_table(report);

        format!(
            "Analysis Report\n{}\n\nTop {} largest files:\n{}",
            summary,
            self.top_count.min(report.files.len()),
            files
        )
    }
}
