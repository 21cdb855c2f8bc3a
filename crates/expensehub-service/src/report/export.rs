//! CSV and JSON rendering of expense rows.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use expensehub_core::error::{AppError, ErrorKind};
use expensehub_core::result::AppResult;
use expensehub_entity::Id;
use expensehub_entity::expense::Expense;

/// Supported export document formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// A JSON array of row objects.
    Json,
}

impl ExportFormat {
    /// MIME type of the rendered document.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv; charset=utf-8",
            Self::Json => "application/json",
        }
    }

    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(AppError::validation(format!(
                "Unsupported export format '{other}' (expected csv or json)"
            ))),
        }
    }
}

/// A rendered export ready to be sent as a download.
#[derive(Debug, Clone)]
pub struct ExportDocument {
    /// Format of `body`.
    pub format: ExportFormat,
    /// Suggested download file name.
    pub filename: String,
    /// Document bytes.
    pub body: Vec<u8>,
}

/// One flattened expense line.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ExportRow {
    id: Id,
    owner_id: Id,
    category_id: Id,
    category: String,
    amount: String,
    currency: String,
    description: String,
    spent_on: NaiveDate,
}

impl ExportRow {
    pub(crate) fn new(expense: &Expense, category_name: Option<&str>) -> Self {
        Self {
            id: expense.id,
            owner_id: expense.owner_id,
            category_id: expense.category_id,
            category: category_name.unwrap_or_default().to_string(),
            amount: format_minor_units(expense.amount_cents),
            currency: expense.currency.clone(),
            description: expense.description.clone(),
            spent_on: expense.spent_on,
        }
    }
}

pub(crate) fn render(rows: &[ExportRow], format: ExportFormat) -> AppResult<ExportDocument> {
    let body = match format {
        ExportFormat::Csv => render_csv(rows)?,
        ExportFormat::Json => serde_json::to_vec_pretty(rows)?,
    };

    Ok(ExportDocument {
        format,
        filename: format!(
            "expenses-{}.{}",
            Utc::now().format("%Y%m%d"),
            format.extension()
        ),
        body,
    })
}

fn render_csv(rows: &[ExportRow]) -> AppResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        writer
            .write_record(CSV_HEADER)
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "CSV write failed", e))?;
    }
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::with_source(ErrorKind::Internal, "CSV write failed", e))?;
    }
    writer
        .into_inner()
        .map_err(|e| AppError::internal(format!("CSV flush failed: {e}")))
}

/// Header written when there are no rows for serde to derive it from.
const CSV_HEADER: [&str; 8] = [
    "id",
    "owner_id",
    "category_id",
    "category",
    "amount",
    "currency",
    "description",
    "spent_on",
];

fn format_minor_units(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
