//! Extract → Transform → Load orchestration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::{Database, DbError, LoadSummary};
use crate::models::WarehouseData;
use crate::transform::{transform, TransformError, TransformOptions};

/// Pipeline errors, tagged with the stage that failed.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Extract failed: {0}")]
    Extract(#[source] DbError),

    #[error("Transform failed: {0}")]
    Transform(#[from] TransformError),

    #[error("Load failed: {0}")]
    Load(#[source] DbError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Outcome of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Rows read across all source collections
    pub extracted_rows: usize,
    /// Output of the transform stage
    pub warehouse: WarehouseData,
    /// `None` when no warehouse was attached
    pub loaded: Option<LoadSummary>,
}

/// One batch run against a source and an optional warehouse.
pub struct Pipeline<'a> {
    source: &'a Database,
    warehouse: Option<&'a Database>,
    options: TransformOptions,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline that transforms without loading.
    pub fn new(source: &'a Database, options: TransformOptions) -> Self {
        Self {
            source,
            warehouse: None,
            options,
        }
    }

    /// Attach the warehouse the results are loaded into.
    pub fn with_warehouse(mut self, warehouse: &'a Database) -> Self {
        self.warehouse = Some(warehouse);
        self
    }

    /// Run every stage. Nothing is written unless extract and transform both
    /// succeed.
    pub fn run(&self) -> PipelineResult<RunSummary> {
        let mut summary = self.extract_and_transform()?;

        match self.warehouse {
            Some(db) => Self::load(db, &mut summary)?,
            None => tracing::info!("No warehouse attached, skipping load"),
        }

        Ok(summary)
    }

    /// Run extract and transform only. The returned summary has no load
    /// result yet.
    pub fn extract_and_transform(&self) -> PipelineResult<RunSummary> {
        tracing::info!("Starting extract");
        let source = self.source.extract().map_err(PipelineError::Extract)?;

        tracing::info!(
            reference_year = self.options.reference_year,
            "Starting transform"
        );
        let warehouse = transform(&source, &self.options)?;
        tracing::debug!(row = ?warehouse.dim_patient.first(), "DimPatient sample");
        tracing::debug!(row = ?warehouse.dim_medicine.first(), "DimMedicine sample");
        tracing::debug!(row = ?warehouse.fact_sales.first(), "FactSale sample");

        Ok(RunSummary {
            extracted_rows: source.row_count(),
            warehouse,
            loaded: None,
        })
    }

    /// Load a transformed batch into `warehouse` and record the result.
    pub fn load(warehouse: &Database, summary: &mut RunSummary) -> PipelineResult<()> {
        tracing::info!("Starting load");
        let loaded = warehouse
            .load_warehouse(&summary.warehouse)
            .map_err(PipelineError::Load)?;
        summary.loaded = Some(loaded);
        Ok(())
    }
}
