//! Command implementations.

use anyhow::{Context, Result};
use pharmacy_dwh_core::{Database, Pipeline, RunSummary, TransformOptions};

use crate::cli::{RunArgs, SeedArgs};
use crate::config::Config;

impl SeedArgs {
    pub fn execute(&self, config: &Config) -> Result<()> {
        let path = self.path.as_ref().unwrap_or(&config.source_path);
        let mut db = Database::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        db.seed_sample_data().context("Failed to seed sample data")?;

        println!("Sample OLTP data written to {}", path.display());
        Ok(())
    }
}

impl RunArgs {
    pub fn execute(&self, config: &Config) -> Result<()> {
        let summary = self.run_pipeline(config)?;

        if self.json {
            println!("{}", summary.warehouse.to_json()?);
        } else {
            print_summary(&summary);
        }
        Ok(())
    }

    /// The warehouse file is opened only once extract and transform have
    /// succeeded, so a failed run leaves no warehouse behind.
    fn run_pipeline(&self, config: &Config) -> Result<RunSummary> {
        let source_path = self.source.as_ref().unwrap_or(&config.source_path);
        let source = Database::open_existing(source_path)
            .with_context(|| format!("Failed to open source database {}", source_path.display()))?;

        let mut options = TransformOptions::default();
        if let Some(year) = self.reference_year.or(config.reference_year) {
            options.reference_year = year;
        }

        let mut summary = Pipeline::new(&source, options).extract_and_transform()?;

        if self.dry_run {
            tracing::info!("Dry run, skipping load");
        } else {
            let path = self.warehouse.as_ref().unwrap_or(&config.warehouse_path);
            let warehouse = Database::open(path)
                .with_context(|| format!("Failed to open warehouse {}", path.display()))?;
            Pipeline::load(&warehouse, &mut summary)?;
        }

        Ok(summary)
    }
}

fn print_summary(summary: &RunSummary) {
    let data = &summary.warehouse;
    println!("Extracted {} source rows", summary.extracted_rows);
    println!("  dim_patient:  {}", data.dim_patient.len());
    println!("  dim_medicine: {}", data.dim_medicine.len());
    println!("  dim_employee: {}", data.dim_employee.len());
    println!("  dim_date:     {}", data.dim_date.len());
    println!("  fact_sales:   {}", data.fact_sales.len());
    match summary.loaded {
        Some(_) => println!("Warehouse loaded"),
        None => println!("Dry run: warehouse not written"),
    }
}
