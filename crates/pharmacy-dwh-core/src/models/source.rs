//! Operational (OLTP) source records.

use serde::{Deserialize, Serialize};

/// A patient row from the `patient` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Natural key
    pub patient_id: i64,
    pub first_name: String,
    /// Optional in the operational schema
    pub last_name: Option<String>,
    /// Calendar date, `YYYY-MM-DD`
    pub date_of_birth: String,
    pub phone_number: String,
}

/// A doctor row from the `doctor` table.
///
/// Extracted for completeness; no dimension is built from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub doctor_id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub specialization: String,
    pub license_number: String,
}

/// An employee row from the `employee` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    /// Natural key
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    /// Job role (e.g., "Pharmacist", "Cashier")
    pub role: String,
}

/// A medicine row joined with its supplier's name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    /// Natural key
    pub medicine_id: i64,
    pub supplier_id: i64,
    pub medicine_name: String,
    pub unit_price: f64,
    /// Integer flag; `1` means a prescription is required
    pub requires_recipe: i64,
    /// From the `supplier` join
    pub supplier_name: String,
}

/// A `transaction_details` row joined with its parent transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleLineItem {
    pub transaction_detail_id: i64,
    pub transaction_id: i64,
    pub medicine_id: i64,
    pub recipe_id: Option<i64>,
    pub quantity: i64,
    pub price_at_transaction: f64,
    /// NULL for walk-in sales
    pub patient_id: Option<i64>,
    pub employee_id: i64,
    /// `YYYY-MM-DD HH:MM:SS`
    pub transaction_time: String,
}

/// Everything the source reader pulls out of the operational store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SourceData {
    pub patients: Vec<Patient>,
    pub doctors: Vec<Doctor>,
    pub employees: Vec<Employee>,
    pub medicines: Vec<Medicine>,
    pub sale_line_items: Vec<SaleLineItem>,
}

impl SourceData {
    /// Total number of rows across all collections.
    pub fn row_count(&self) -> usize {
        self.patients.len()
            + self.doctors.len()
            + self.employees.len()
            + self.medicines.len()
            + self.sale_line_items.len()
    }
}
