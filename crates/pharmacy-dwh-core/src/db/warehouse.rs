//! Sink writer: persists dimension and fact rows into the warehouse.

use rusqlite::params;
use serde::{Deserialize, Serialize};

use super::{Database, DbResult};
use crate::models::{DimDate, DimEmployee, DimMedicine, DimPatient, FactSale, WarehouseData};

/// Rows written per warehouse table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub dim_patient: usize,
    pub dim_medicine: usize,
    pub dim_employee: usize,
    pub dim_date: usize,
    pub fact_sales: usize,
}

impl Database {
    /// Replace the warehouse contents with `data`.
    ///
    /// The schema is recreated first. Rows are inserted table by table with no
    /// enclosing transaction.
    pub fn load_warehouse(&self, data: &WarehouseData) -> DbResult<LoadSummary> {
        self.reset_warehouse_schema()?;

        let summary = LoadSummary {
            dim_patient: self.insert_dim_patients(&data.dim_patient)?,
            dim_medicine: self.insert_dim_medicines(&data.dim_medicine)?,
            dim_employee: self.insert_dim_employees(&data.dim_employee)?,
            dim_date: self.insert_dim_dates(&data.dim_date)?,
            fact_sales: self.insert_fact_sales(&data.fact_sales)?,
        };

        tracing::info!(
            dim_patient = summary.dim_patient,
            dim_medicine = summary.dim_medicine,
            dim_employee = summary.dim_employee,
            dim_date = summary.dim_date,
            fact_sales = summary.fact_sales,
            "Loaded warehouse"
        );

        Ok(summary)
    }

    fn insert_dim_patients(&self, rows: &[DimPatient]) -> DbResult<usize> {
        let mut stmt = self.conn.prepare(
            "INSERT INTO dim_patient (patient_key, patient_id, full_name, age) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for row in rows {
            stmt.execute(params![row.patient_key, row.patient_id, row.full_name, row.age])?;
        }
        Ok(rows.len())
    }

    fn insert_dim_medicines(&self, rows: &[DimMedicine]) -> DbResult<usize> {
        let mut stmt = self.conn.prepare(
            r#"
            INSERT INTO dim_medicine (
                medicine_key, medicine_id, medicine_name, requires_recipe, supplier_name
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )?;
        for row in rows {
            stmt.execute(params![
                row.medicine_key,
                row.medicine_id,
                row.medicine_name,
                row.requires_recipe,
                row.supplier_name,
            ])?;
        }
        Ok(rows.len())
    }

    fn insert_dim_employees(&self, rows: &[DimEmployee]) -> DbResult<usize> {
        let mut stmt = self.conn.prepare(
            "INSERT INTO dim_employee (employee_key, employee_id, full_name, role) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for row in rows {
            stmt.execute(params![row.employee_key, row.employee_id, row.full_name, row.role])?;
        }
        Ok(rows.len())
    }

    fn insert_dim_dates(&self, rows: &[DimDate]) -> DbResult<usize> {
        let mut stmt = self.conn.prepare(
            "INSERT INTO dim_date (date_key, full_date, year, month, day) VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for row in rows {
            stmt.execute(params![row.date_key, row.full_date, row.year, row.month, row.day])?;
        }
        Ok(rows.len())
    }

    fn insert_fact_sales(&self, rows: &[FactSale]) -> DbResult<usize> {
        let mut stmt = self.conn.prepare(
            r#"
            INSERT INTO fact_sales (
                date_key, medicine_key, patient_key, employee_key, transaction_id_oltp,
                quantity_sold, price_per_unit, total_line_amount
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )?;
        for row in rows {
            stmt.execute(params![
                row.date_key,
                row.medicine_key,
                row.patient_key,
                row.employee_key,
                row.transaction_id_oltp,
                row.quantity_sold,
                row.price_per_unit,
                row.total_line_amount,
            ])?;
        }
        Ok(rows.len())
    }

    /// Read back the fact table in insertion order, for inspecting a loaded
    /// warehouse.
    pub fn list_fact_sales(&self) -> DbResult<Vec<FactSale>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT date_key, medicine_key, patient_key, employee_key, transaction_id_oltp,
                   quantity_sold, price_per_unit, total_line_amount
            FROM fact_sales
            ORDER BY sales_key
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(FactSale {
                date_key: row.get(0)?,
                medicine_key: row.get(1)?,
                patient_key: row.get(2)?,
                employee_key: row.get(3)?,
                transaction_id_oltp: row.get(4)?,
                quantity_sold: row.get(5)?,
                price_per_unit: row.get(6)?,
                total_line_amount: row.get(7)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Read back the date dimension ordered by key, for inspecting a loaded
    /// warehouse.
    pub fn list_dim_dates(&self) -> DbResult<Vec<DimDate>> {
        let mut stmt = self.conn.prepare(
            "SELECT date_key, full_date, year, month, day FROM dim_date ORDER BY date_key",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(DimDate {
                date_key: row.get(0)?,
                full_date: row.get(1)?,
                year: row.get(2)?,
                month: row.get(3)?,
                day: row.get(4)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbError;

    fn sample_data() -> WarehouseData {
        WarehouseData {
            dim_patient: vec![DimPatient {
                patient_key: 1,
                patient_id: 1,
                full_name: "Budi Santoso".to_string(),
                age: 35,
            }],
            dim_medicine: vec![DimMedicine {
                medicine_key: 1,
                medicine_id: 1,
                medicine_name: "Paracetamol 500mg".to_string(),
                requires_recipe: "No".to_string(),
                supplier_name: "PT. Kimia Farma".to_string(),
            }],
            dim_employee: vec![DimEmployee {
                employee_key: 1,
                employee_id: 2,
                full_name: "Dewi Lestari".to_string(),
                role: "Cashier".to_string(),
            }],
            dim_date: vec![DimDate {
                date_key: 20251005,
                full_date: "2025-10-05".to_string(),
                year: 2025,
                month: 10,
                day: 5,
            }],
            fact_sales: vec![FactSale {
                date_key: 20251005,
                medicine_key: 1,
                patient_key: 1,
                employee_key: 1,
                transaction_id_oltp: 1,
                quantity_sold: 4,
                price_per_unit: 5000.0,
                total_line_amount: 20000.0,
            }],
        }
    }

    #[test]
    fn test_load_and_read_back() {
        let db = Database::open_in_memory().unwrap();
        let data = sample_data();

        let summary = db.load_warehouse(&data).unwrap();
        assert_eq!(summary.dim_patient, 1);
        assert_eq!(summary.fact_sales, 1);

        assert_eq!(db.list_fact_sales().unwrap(), data.fact_sales);
        assert_eq!(db.list_dim_dates().unwrap(), data.dim_date);
    }

    #[test]
    fn test_reload_is_full_refresh() {
        let db = Database::open_in_memory().unwrap();
        let data = sample_data();

        db.load_warehouse(&data).unwrap();
        db.load_warehouse(&data).unwrap();

        assert_eq!(db.count_rows("dim_patient").unwrap(), 1);
        assert_eq!(db.count_rows("fact_sales").unwrap(), 1);
    }

    #[test]
    fn test_duplicate_surrogate_key_rejected() {
        let db = Database::open_in_memory().unwrap();
        let mut data = sample_data();
        data.dim_date.push(data.dim_date[0].clone());

        assert!(matches!(db.load_warehouse(&data), Err(DbError::Sqlite(_))));
    }
}
