//! Cleaning pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Load**: Read the raw orders and users CSV files
//! 2. **Gate**: Required columns and non-empty checks
//! 3. **Enforce**: Coerce columns to their declared types
//! 4. **Report**: Missingness snapshot of the enforced orders
//! 5. **Clean**: Normalize and remap status, add missing flags
//! 6. **Check**: Configured range checks on the cleaned orders
//! 7. **Persist**: Write the report and Parquet outputs, all or none
//!
//! The report is taken before any remapping so it reflects type-coercion
//! nulls only. Nothing is written until every earlier stage has passed.

use std::collections::BTreeSet;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span, warn};

use dclean_ingest::{RawSource, read_source};
use dclean_output::OutputBatch;
use dclean_transform::{
    MissingnessEntry, add_missing_flags, apply_mapping, enforce_schema, missingness_entries,
    normalize_text, report_table, unmapped_values,
};
use dclean_validate::QualityGate;

use crate::config::PipelineConfig;
use crate::paths::ProjectPaths;
use crate::types::{OutputPaths, RunResult};

// ============================================================================
// Stage 1: Load
// ============================================================================

/// Raw tables as read from disk.
#[derive(Debug, Clone)]
pub struct LoadedInputs {
    pub orders: DataFrame,
    pub users: DataFrame,
}

pub fn load(paths: &ProjectPaths) -> Result<LoadedInputs> {
    let orders = read_source(&paths.raw, RawSource::Orders)
        .with_context(|| format!("read {}", paths.raw_input(RawSource::Orders).display()))?;
    let users = read_source(&paths.raw, RawSource::Users)
        .with_context(|| format!("read {}", paths.raw_input(RawSource::Users).display()))?;

    info!(
        orders_rows = orders.height(),
        users_rows = users.height(),
        "loaded raw inputs"
    );
    Ok(LoadedInputs { orders, users })
}

// ============================================================================
// Stage 2: Gate
// ============================================================================

pub fn gate(inputs: &LoadedInputs, config: &PipelineConfig) -> Result<()> {
    QualityGate::new("orders_raw")
        .require(config.orders.required.iter().cloned())
        .check(&inputs.orders)?;
    QualityGate::new("users")
        .require(config.users.required.iter().cloned())
        .check(&inputs.users)?;
    Ok(())
}

// ============================================================================
// Stages 3-6: Enforce, Report, Clean, Check
// ============================================================================

/// Tables produced by the in-memory stages, ready to persist.
#[derive(Debug, Clone)]
pub struct CleanedTables {
    pub orders: DataFrame,
    pub users: DataFrame,
    pub missingness: Vec<MissingnessEntry>,
    pub report: DataFrame,
    pub unmapped_statuses: BTreeSet<String>,
}

/// Run enforcement, reporting, cleaning, and range checks.
pub fn clean(inputs: &LoadedInputs, config: &PipelineConfig) -> Result<CleanedTables> {
    let (orders, users) = info_span!("enforce").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let orders =
            enforce_schema(&inputs.orders, &config.orders.schema).context("enforce orders schema")?;
        let users =
            enforce_schema(&inputs.users, &config.users.schema).context("enforce users schema")?;
        debug!(duration_ms = start.elapsed().as_millis(), "enforce complete");
        Ok((orders, users))
    })?;

    // Snapshot missingness before anything is remapped.
    let missingness = missingness_entries(&orders).context("orders missingness")?;
    let report = report_table(&missingness)?;
    for entry in missingness.iter().filter(|e| e.missing_count > 0) {
        debug!(
            column = %entry.column,
            missing = entry.missing_count,
            rate = entry.missing_rate,
            "column has missing values"
        );
    }

    let (orders, unmapped_statuses) = info_span!("clean").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let status = orders
            .column(&config.status_column)
            .with_context(|| format!("status column '{}'", config.status_column))?;
        let normalized = normalize_text(status)?;
        let unmapped = unmapped_values(&normalized, &config.status_mapping)?;
        if !unmapped.is_empty() {
            warn!(
                column = %config.status_column,
                values = ?unmapped,
                "status values outside the controlled vocabulary"
            );
        }
        let status_clean = apply_mapping(&normalized, &config.status_mapping)?
            .with_name(config.status_clean_column.as_str().into());

        let mut with_status = orders.clone();
        with_status.with_column(status_clean)?;
        let flagged = add_missing_flags(&with_status, &config.missing_flag_columns)
            .context("add missing flags")?;
        debug!(duration_ms = start.elapsed().as_millis(), "clean complete");
        Ok((flagged, unmapped))
    })?;

    for check in &config.range_checks {
        check
            .check(&orders)
            .with_context(|| format!("range check on '{}'", check.column))?;
    }

    Ok(CleanedTables {
        orders,
        users,
        missingness,
        report,
        unmapped_statuses,
    })
}

// ============================================================================
// Stage 7: Persist
// ============================================================================

pub fn persist(cleaned: &CleanedTables, paths: &ProjectPaths) -> Result<OutputPaths> {
    let outputs = OutputPaths {
        missingness_report: paths.missingness_report(),
        orders_clean: paths.orders_clean(),
        users: paths.users_output(),
    };
    // Staged files are discarded if any write fails.
    let mut batch = OutputBatch::new();
    batch
        .stage_report_csv(&cleaned.report, &outputs.missingness_report)
        .context("write missingness report")?;
    batch
        .stage_parquet(&cleaned.orders, &outputs.orders_clean)
        .context("write cleaned orders")?;
    batch
        .stage_parquet(&cleaned.users, &outputs.users)
        .context("write users")?;
    batch.commit().context("publish outputs")?;
    info!(dir = %paths.processed.display(), "wrote processed outputs");
    Ok(outputs)
}

/// Run every stage once. With `dry_run` nothing is written.
pub fn run_pipeline(
    paths: &ProjectPaths,
    config: &PipelineConfig,
    dry_run: bool,
) -> Result<RunResult> {
    let span = info_span!("run", root = %paths.root.display(), dry_run);
    let _guard = span.enter();
    let start = Instant::now();

    let inputs = load(paths)?;
    gate(&inputs, config)?;
    let cleaned = clean(&inputs, config)?;
    let outputs = if dry_run {
        info!("dry run, skipping outputs");
        None
    } else {
        Some(persist(&cleaned, paths)?)
    };

    info!(duration_ms = start.elapsed().as_millis(), "pipeline complete");
    Ok(RunResult {
        root: paths.root.clone(),
        orders_rows: cleaned.orders.height(),
        orders_columns: cleaned.orders.width(),
        users_rows: cleaned.users.height(),
        missingness: cleaned.missingness,
        unmapped_statuses: cleaned.unmapped_statuses,
        outputs,
    })
}
