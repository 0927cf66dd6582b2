// WHY: Rendering of summaries and run statistics for the CLI
// Keeps stdout formats and the stats file layout out of the pipeline

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::pipeline::Summary;

/// Output format for the summary on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Summary text followed by the frequency table
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Options controlling what a report includes
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub format: OutputFormat,
    /// Frequency table rows to include, 0 for all
    pub top: usize,
    pub include_table: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            top: 0,
            include_table: true,
        }
    }
}

#[derive(Serialize)]
struct FrequencyRow<'a> {
    form: &'a str,
    count: u32,
}

#[derive(Serialize)]
struct StatementReport<'a> {
    index: usize,
    text: &'a str,
    score: f64,
    selected: bool,
    words: &'a crate::normalizer::WordFormMap,
}

#[derive(Serialize)]
struct SummaryReport<'a> {
    rate: f64,
    summary: &'a str,
    statements: Vec<StatementReport<'a>>,
    frequency_table: Vec<FrequencyRow<'a>>,
}

fn frequency_rows<'a>(summary: &'a Summary, options: &ReportOptions) -> Vec<(&'a str, u32)> {
    let mut rows = summary.frequency_table.ranked();
    if options.top > 0 {
        rows.truncate(options.top);
    }
    rows
}

/// Render a summary in the requested format
pub fn render(summary: &Summary, options: &ReportOptions) -> Result<String> {
    match options.format {
        OutputFormat::Text => Ok(render_text(summary, options)),
        OutputFormat::Json => render_json(summary, options),
    }
}

/// Summary text, then a form/count table sorted by count
pub fn render_text(summary: &Summary, options: &ReportOptions) -> String {
    let mut out = String::new();
    out.push_str(&summary.text);
    out.push('\n');

    if options.include_table {
        let rows = frequency_rows(summary, options);
        let width = rows
            .iter()
            .map(|(form, _)| form.chars().count())
            .max()
            .unwrap_or(0)
            .max("form".len());

        out.push('\n');
        let _ = writeln!(out, "{:<width$}  count", "form");
        for (form, count) in rows {
            let _ = writeln!(out, "{:<width$}  {}", form, count);
        }
    }

    out
}

/// Summary, per-statement scores and the frequency table as JSON
pub fn render_json(summary: &Summary, options: &ReportOptions) -> Result<String> {
    let statements = summary
        .statements
        .iter()
        .map(|s| StatementReport {
            index: s.index(),
            text: s.text(),
            score: s.score,
            selected: summary.is_selected(s.index()),
            words: &s.word_forms,
        })
        .collect();

    let frequency_table = if options.include_table {
        frequency_rows(summary, options)
            .into_iter()
            .map(|(form, count)| FrequencyRow { form, count })
            .collect()
    } else {
        Vec::new()
    };

    let report = SummaryReport {
        rate: summary.rate,
        summary: &summary.text,
        statements,
        frequency_table,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

/// Statistics for one CLI run, written with `--stats-out`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunStats {
    /// Input file path or `<stdin>`
    pub input: String,
    pub chars_processed: u64,
    pub statements_detected: u64,
    pub statements_selected: u64,
    pub distinct_forms: u64,
    pub read_time_ms: u64,
    pub processing_time_ms: u64,
    /// Throughput in characters per second
    pub chars_per_sec: f64,
    /// Run status (success, failed)
    pub status: String,
    pub error: Option<String>,
    /// Extra counters keyed by name
    #[serde(default)]
    pub details: BTreeMap<String, u64>,
}

impl RunStats {
    pub fn success(
        input: String,
        chars_processed: u64,
        summary: &Summary,
        read_time_ms: u64,
        processing_time_ms: u64,
    ) -> Self {
        let chars_per_sec = if processing_time_ms > 0 {
            chars_processed as f64 / (processing_time_ms as f64 / 1000.0)
        } else {
            chars_processed as f64
        };

        let words: u64 = summary
            .statements
            .iter()
            .map(|s| s.statement.words.len() as u64)
            .sum();
        let content_words: u64 = summary
            .statements
            .iter()
            .map(|s| s.word_forms.len() as u64)
            .sum();

        Self {
            input,
            chars_processed,
            statements_detected: summary.statements.len() as u64,
            statements_selected: summary.selected.len() as u64,
            distinct_forms: summary.frequency_table.len() as u64,
            read_time_ms,
            processing_time_ms,
            chars_per_sec,
            status: "success".to_string(),
            error: None,
            details: BTreeMap::from([
                ("words".to_string(), words),
                ("distinct_content_words".to_string(), content_words),
            ]),
        }
    }

    pub fn failure(input: String, chars_processed: u64, error: &anyhow::Error) -> Self {
        Self {
            input,
            chars_processed,
            statements_detected: 0,
            statements_selected: 0,
            distinct_forms: 0,
            read_time_ms: 0,
            processing_time_ms: 0,
            chars_per_sec: 0.0,
            status: "failed".to_string(),
            error: Some(format!("{error:#}")),
            details: BTreeMap::new(),
        }
    }
}

/// Write run statistics as pretty JSON
pub async fn write_run_stats(path: &Path, stats: &RunStats) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let file = tokio::fs::File::create(path).await?;
    let mut writer = BufWriter::new(file);

    let content = serde_json::to_string_pretty(stats)?;
    writer.write_all(content.as_bytes()).await?;
    writer.write_all(b"\n").await?;

    writer.flush().await?;
    Ok(())
}
