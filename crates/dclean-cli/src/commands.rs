use anyhow::Result;
use comfy_table::Table;
use tracing::info;

use dclean_cli::config::PipelineConfig;
use dclean_cli::paths::ProjectPaths;
use dclean_cli::pipeline::run_pipeline;
use dclean_cli::types::RunResult;

use crate::cli::RunArgs;
use crate::summary::apply_table_style;

pub fn run_once(args: &RunArgs) -> Result<RunResult> {
    let config = PipelineConfig::load_or_default(args.config.as_deref())?;
    if let Some(path) = &args.config {
        info!(path = %path.display(), "loaded pipeline config");
    }
    let paths = ProjectPaths::new(args.root.clone());
    run_pipeline(&paths, &config, args.dry_run)
}

pub fn run_config() -> Result<()> {
    let config = PipelineConfig::default();
    println!("{}", config.to_json_pretty()?);

    let mut table = Table::new();
    table.set_header(vec!["Table", "Column", "Type"]);
    apply_table_style(&mut table);
    for (label, table_config) in [("orders", &config.orders), ("users", &config.users)] {
        for spec in table_config.schema.columns() {
            table.add_row(vec![
                label.to_string(),
                spec.name.clone(),
                spec.semantic_type.to_string(),
            ]);
        }
    }
    eprintln!("{table}");

    let mut mapping = Table::new();
    mapping.set_header(vec!["Status value", "Maps to"]);
    apply_table_style(&mut mapping);
    for (raw, canonical) in config.status_mapping.entries() {
        mapping.add_row(vec![raw, canonical]);
    }
    eprintln!("{mapping}");
    Ok(())
}
