//! Delimited-text and console output for scorecards and collected records.

use std::io::Write;
use std::path::Path;

use vendorscope_core::{ChannelScorecard, PostRecord};

use crate::error::StoreError;
use crate::score::ScoreTable;

const DELIMITER: char = ',';

const SCORECARD_HEADERS: [&str; 9] = [
    "Channel",
    "Total Posts",
    "Time Period (days)",
    "Posting Frequency (posts/week)",
    "Avg Views per Post",
    "Top Post Views",
    "Top Post Product",
    "Top Post Price",
    "Lending Score",
];

const RECORD_HEADERS: [&str; 9] = [
    "channel",
    "message_id",
    "timestamp",
    "raw_text",
    "views",
    "media_type",
    "media_path",
    "processed_text",
    "tokens",
];

/// Quotes a field when it contains the delimiter, quotes, or line breaks.
fn escape_field(field: &str) -> String {
    if field.contains(DELIMITER) || field.contains('"') || field.contains('\n') || field.contains('\r')
    {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_row<W: Write>(out: &mut W, fields: &[String]) -> std::io::Result<()> {
    let line = fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string());
    writeln!(out, "{line}")
}

fn scorecard_fields(row: &ChannelScorecard) -> Vec<String> {
    vec![
        row.channel.clone(),
        row.total_posts.to_string(),
        row.active_days.to_string(),
        format!("{:.2}", row.posts_per_week),
        format!("{:.2}", row.avg_views),
        row.max_views.to_string(),
        row.top_post_excerpt.clone(),
        row.top_post_price.clone(),
        format!("{:.2}", row.lending_score),
    ]
}

fn header_fields(headers: &[&str]) -> Vec<String> {
    headers.iter().map(|h| (*h).to_string()).collect()
}

fn create_file(path: &Path) -> Result<std::io::BufWriter<std::fs::File>, StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
            path: parent.display().to_string(),
            source: e,
        })?;
    }
    let file = std::fs::File::create(path).map_err(|e| StoreError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(std::io::BufWriter::new(file))
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |e| StoreError::Io {
        path: path.display().to_string(),
        source: e,
    }
}

impl ScoreTable {
    /// Writes the table as comma-separated UTF-8 text with a header row.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error from `out`.
    pub fn write_csv<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write_row(out, &header_fields(&SCORECARD_HEADERS))?;
        for row in self.rows() {
            write_row(out, &scorecard_fields(row))?;
        }
        out.flush()
    }

    /// Writes the table to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be created or written.
    pub fn save_csv(&self, path: &Path) -> Result<(), StoreError> {
        let mut file = create_file(path)?;
        self.write_csv(&mut file).map_err(io_err(path))
    }

    /// Renders the table as right-aligned columns for the console.
    #[must_use]
    pub fn render(&self) -> String {
        let header = header_fields(&SCORECARD_HEADERS);
        let body: Vec<Vec<String>> = self
            .rows()
            .iter()
            .map(|row| {
                scorecard_fields(row)
                    .into_iter()
                    .map(|f| f.replace(['\n', '\r'], " "))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = (0..header.len())
            .map(|col| {
                std::iter::once(&header[col])
                    .chain(body.iter().map(|r| &r[col]))
                    .map(|f| f.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let format_line = |fields: &[String]| -> String {
            fields
                .iter()
                .zip(&widths)
                .map(|(f, &w)| format!("{f:>w$}"))
                .collect::<Vec<_>>()
                .join("  ")
        };

        let mut lines = Vec::with_capacity(body.len() + 1);
        lines.push(format_line(header.as_slice()));
        lines.extend(body.iter().map(|r| format_line(r.as_slice())));
        lines.join("\n")
    }
}

/// Writes collected post records as comma-separated UTF-8 text.
///
/// Tokens are joined with a single space; absent values are empty fields.
///
/// # Errors
///
/// Propagates any I/O error from `out`.
pub fn write_records_csv<W: Write>(records: &[PostRecord], out: &mut W) -> std::io::Result<()> {
    write_row(out, &header_fields(&RECORD_HEADERS))?;
    for record in records {
        write_row(
            out,
            &[
                record.channel.clone(),
                record.message_id.to_string(),
                record.timestamp.to_rfc3339(),
                record.raw_text.clone().unwrap_or_default(),
                record.views.to_string(),
                record.media_type.to_string(),
                record.media_path.clone().unwrap_or_default(),
                record.processed_text.clone(),
                record.tokens.join(" "),
            ],
        )?;
    }
    out.flush()
}

/// Writes collected post records to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the file cannot be created or written.
pub fn save_records_csv(records: &[PostRecord], path: &Path) -> Result<(), StoreError> {
    let mut file = create_file(path)?;
    write_records_csv(records, &mut file).map_err(io_err(path))
}
