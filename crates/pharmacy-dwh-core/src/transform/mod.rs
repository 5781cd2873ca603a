//! Transform stage: operational rows → surrogate-keyed dimensions and facts.
//!
//! Builders run in a fixed order. The four dimension builders are independent
//! of each other; the fact builder needs the key maps of all of them.
//!
//! ```text
//! patients ──► build_patients ──┐
//! medicines ─► build_medicines ─┤
//! employees ─► build_employees ─┼──► build_facts ──► fact_sales
//! sales ─┬───► build_dates      │    (date key recomputed per line item)
//!        └──────────────────────┘
//! ```

mod dimensions;
mod facts;
mod fields;

pub use dimensions::*;
pub use facts::*;
pub use fields::*;

use std::collections::HashMap;

use chrono::Datelike;
use thiserror::Error;

use crate::models::{SourceData, WarehouseData};

/// Transform errors. Every variant aborts the whole batch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("Sale line item {line_item_id} references unknown medicine {medicine_id}")]
    UnknownMedicine { line_item_id: i64, medicine_id: i64 },

    #[error("Sale line item {line_item_id} references unknown employee {employee_id}")]
    UnknownEmployee { line_item_id: i64, employee_id: i64 },

    #[error("Malformed transaction timestamp: {0:?}")]
    MalformedTimestamp(String),

    #[error("Patient {patient_id} has no readable birth year: {value:?}")]
    MalformedBirthDate { patient_id: i64, value: String },
}

pub type TransformResult<T> = Result<T, TransformError>;

/// Run-scoped inputs that are not part of the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// Year that patient ages are measured against
    pub reference_year: i32,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            reference_year: chrono::Local::now().year(),
        }
    }
}

/// Natural key → surrogate key lookup for one dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurrogateKeys {
    keys: HashMap<i64, i64>,
}

impl SurrogateKeys {
    /// Record the surrogate key for a natural key. A repeated natural key
    /// points at the most recently assigned surrogate.
    pub fn insert(&mut self, natural_key: i64, surrogate_key: i64) {
        self.keys.insert(natural_key, surrogate_key);
    }

    pub fn get(&self, natural_key: i64) -> Option<i64> {
        self.keys.get(&natural_key).copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Rows of one dimension together with their key lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension<T> {
    pub rows: Vec<T>,
    pub keys: SurrogateKeys,
}

impl<T> Default for Dimension<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            keys: SurrogateKeys::default(),
        }
    }
}

/// Build every dimension and the fact table from one extraction.
pub fn transform(
    source: &SourceData,
    options: &TransformOptions,
) -> TransformResult<WarehouseData> {
    let patients = build_patients(&source.patients, options.reference_year)?;
    let medicines = build_medicines(&source.medicines);
    let employees = build_employees(&source.employees);
    let dim_date = build_dates(&source.sale_line_items)?;

    let fact_sales = build_facts(
        &source.sale_line_items,
        &patients.keys,
        &medicines.keys,
        &employees.keys,
    )?;

    tracing::info!(
        dim_patient = patients.rows.len(),
        dim_medicine = medicines.rows.len(),
        dim_employee = employees.rows.len(),
        dim_date = dim_date.len(),
        fact_sales = fact_sales.len(),
        "Transform complete"
    );

    Ok(WarehouseData {
        dim_patient: patients.rows,
        dim_medicine: medicines.rows,
        dim_employee: employees.rows,
        dim_date,
        fact_sales,
    })
}
