//! Pharmacy DWH Core Library
//!
//! Batch ETL from the pharmacy's operational SQLite store into a star-schema
//! warehouse.
//!
//! # Architecture
//!
//! ```text
//!   pharmacy_oltp.db
//!         │
//!         ▼
//!   ┌─────────────┐    patients, doctors, employees,
//!   │   Extract   │    medicines ⋈ supplier,
//!   │ (db::source)│    transaction_details ⋈ transaction
//!   └──────┬──────┘
//!          ▼
//!   ┌─────────────────────────────────────────────┐
//!   │                 Transform                   │
//!   │  DimPatient  DimMedicine  DimEmployee  DimDate
//!   │        └──────────┴──────────┴───────┘      │
//!   │                     ▼                       │
//!   │                 FactSale                    │
//!   └──────────────────────┬──────────────────────┘
//!                          ▼
//!                  ┌──────────────┐
//!                  │     Load     │ ──► pharmacy_dwh.db
//!                  └──────────────┘
//! ```
//!
//! The whole batch is held in memory. A failure in any stage aborts the run
//! before anything is written.
//!
//! # Modules
//!
//! - [`db`]: SQLite access (source reader, sink writer, schemas, sample data)
//! - [`models`]: Source and warehouse record types
//! - [`transform`]: Dimension and fact builders
//! - [`pipeline`]: Stage sequencing and run summary

pub mod db;
pub mod models;
pub mod pipeline;
pub mod transform;

// Re-export commonly used types
pub use db::{Database, DbError, LoadSummary};
pub use models::{
    DimDate, DimEmployee, DimMedicine, DimPatient, FactSale, SourceData, WarehouseData,
};
pub use pipeline::{Pipeline, PipelineError, RunSummary};
pub use transform::{transform, TransformError, TransformOptions};
