//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, DatasetArgs, OutputFormat};
use crate::config::{load_config, ViewerConfig};
use crate::controller::DataViewer;
use crate::error::{Error, Result};
use crate::render::{page_summary, render_page};
use crate::table::PageSize;
use serde_json::{json, Value};
use std::path::Path;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Show {
                dataset,
                page,
                page_size,
                sort,
                desc,
            } => {
                self.show(
                    &config,
                    dataset,
                    *page,
                    *page_size,
                    sort.as_deref(),
                    *desc,
                )
                .await
            }
            Commands::Columns { dataset } => self.columns(&config, dataset).await,
            Commands::Export { dataset, out_dir } => self.export(&config, dataset, out_dir).await,
        }
    }

    /// Load configuration, applying command-line overrides
    fn load_config(&self) -> Result<ViewerConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => ViewerConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
            config.validate()?;
        }

        debug!(base_url = %config.base_url, "Using backend");
        Ok(config)
    }

    /// Build a visible viewer for `args` and wait for its load
    async fn load_viewer(&self, config: &ViewerConfig, args: &DatasetArgs) -> Result<DataViewer> {
        let source = config.data_source()?;
        let mut viewer = DataViewer::new(args.dataset)
            .with_title(format!("{} ({})", args.id, args.dataset))
            .with_default_columns(config.columns.defaults_for(args.dataset))
            .with_inferrer(config.columns.inferrer())
            .with_page_size(config.page_size);

        viewer.set_identifier(args.id.clone());
        let request = viewer
            .set_visible(true)
            .ok_or(Error::MissingIdentifier)?;
        viewer.fetch(&source, request).await;

        if let Some(message) = viewer.error() {
            return Err(Error::Other(message.to_string()));
        }
        Ok(viewer)
    }

    /// Print one page
    async fn show(
        &self,
        config: &ViewerConfig,
        args: &DatasetArgs,
        page: usize,
        page_size: Option<PageSize>,
        sort: Option<&str>,
        desc: bool,
    ) -> Result<()> {
        let mut viewer = self.load_viewer(config, args).await?;
        let table = viewer.table_mut();

        if let Some(size) = page_size {
            table.set_page_size(size);
        }
        if let Some(field) = sort {
            table.sort_by(field);
            if desc {
                table.sort_by(field);
            }
        }
        table.go_to_page(page);

        let table = viewer.table();
        match self.cli.format {
            OutputFormat::Pretty => {
                println!("{}", viewer.title());
                println!("{}", render_page(table));
            }
            OutputFormat::Json => {
                for row in table.page_rows() {
                    self.output_message(&json!({
                        "type": "RECORD",
                        "record": row,
                    }));
                }
                self.output_message(&json!({
                    "type": "PAGE",
                    "page": table.page().current_page,
                    "page_count": table.page_count(),
                    "page_size": table.page().page_size,
                    "total_rows": table.total_rows(),
                    "sort": table.sort().field.as_ref().map(|field| json!({
                        "field": field,
                        "direction": table.sort().direction,
                    })),
                    "summary": page_summary(table),
                }));
            }
        }
        Ok(())
    }

    /// Print inferred columns
    async fn columns(&self, config: &ViewerConfig, args: &DatasetArgs) -> Result<()> {
        let viewer = self.load_viewer(config, args).await?;
        let columns = viewer.table().columns();

        match self.cli.format {
            OutputFormat::Pretty => {
                if columns.is_empty() {
                    println!("No data");
                }
                for column in columns {
                    println!(
                        "{:<24} {:<8} {}",
                        column.field, column.column_type, column.display_name
                    );
                }
            }
            OutputFormat::Json => {
                for column in columns {
                    self.output_message(&json!({
                        "type": "COLUMN",
                        "column": column,
                    }));
                }
            }
        }
        Ok(())
    }

    /// Write the CSV export
    async fn export(&self, config: &ViewerConfig, args: &DatasetArgs, out_dir: &Path) -> Result<()> {
        let viewer = self.load_viewer(config, args).await?;
        let summary = viewer.export_csv(out_dir)?;

        match self.cli.format {
            OutputFormat::Pretty => {
                println!(
                    "Wrote {} rows to {}",
                    summary.rows_written,
                    summary.path.display()
                );
            }
            OutputFormat::Json => {
                self.output_message(&json!({
                    "type": "EXPORT",
                    "path": summary.path,
                    "rows": summary.rows_written,
                    "loaded_at": viewer.loaded_at(),
                }));
            }
        }
        Ok(())
    }

    /// Output a JSON message
    fn output_message(&self, msg: &Value) {
        println!("{}", serde_json::to_string(msg).unwrap_or_default());
    }
}
