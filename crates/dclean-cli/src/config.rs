//! Pipeline configuration.
//!
//! The defaults describe the orders/users run; a JSON file can override any
//! subset of fields.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use dclean_model::{SemanticType, TableSchema, ValueMapping};
use dclean_validate::RangeCheck;

/// Settings for one table's gate and schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// Columns that must exist before anything else runs.
    pub required: Vec<String>,
    /// Types to enforce.
    pub schema: TableSchema,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub orders: TableConfig,
    pub users: TableConfig,
    /// Text column normalized and remapped.
    pub status_column: String,
    /// Name of the remapped column appended to orders.
    pub status_clean_column: String,
    pub status_mapping: ValueMapping,
    /// Columns that receive a "was missing" flag.
    pub missing_flag_columns: Vec<String>,
    /// Range checks run on the cleaned orders. None by default.
    pub range_checks: Vec<RangeCheck>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let orders = TableConfig {
            required: strings(&[
                "order_id",
                "user_id",
                "amount",
                "quantity",
                "created_at",
                "status",
            ]),
            schema: TableSchema::new()
                .with_column("order_id", SemanticType::Integer)
                .with_column("user_id", SemanticType::Integer)
                .with_column("amount", SemanticType::Decimal)
                .with_column("quantity", SemanticType::Integer)
                .with_column("created_at", SemanticType::Timestamp)
                .with_column("status", SemanticType::Text),
        };
        let users = TableConfig {
            required: strings(&["user_id", "country", "signup_date"]),
            schema: TableSchema::new()
                .with_column("user_id", SemanticType::Integer)
                .with_column("country", SemanticType::Category)
                .with_column("signup_date", SemanticType::Timestamp),
        };
        Self {
            orders,
            users,
            status_column: "status".to_string(),
            status_clean_column: "status_clean".to_string(),
            status_mapping: ValueMapping::from_pairs_normalized([
                ("paid", "paid"),
                ("refund", "refund"),
                ("refunded", "refund"),
            ]),
            missing_flag_columns: strings(&["amount", "quantity"]),
            range_checks: Vec::new(),
        }
    }
}

impl PipelineConfig {
    /// Load a JSON configuration file. Omitted fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    /// Default configuration, or the file at `path` when given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize config")
    }
}
