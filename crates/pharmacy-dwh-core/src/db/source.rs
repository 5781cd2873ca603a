//! Source reader: read queries against the operational store.

use super::{Database, DbResult};
use crate::models::{Doctor, Employee, Medicine, Patient, SaleLineItem, SourceData};

impl Database {
    /// Read all five source collections.
    pub fn extract(&self) -> DbResult<SourceData> {
        let data = SourceData {
            patients: self.list_patients()?,
            doctors: self.list_doctors()?,
            employees: self.list_employees()?,
            medicines: self.list_medicines()?,
            sale_line_items: self.list_sale_line_items()?,
        };

        tracing::info!(
            patients = data.patients.len(),
            doctors = data.doctors.len(),
            employees = data.employees.len(),
            medicines = data.medicines.len(),
            sale_line_items = data.sale_line_items.len(),
            "Extracted source data"
        );

        Ok(data)
    }

    /// List all patients in natural-key order.
    pub fn list_patients(&self) -> DbResult<Vec<Patient>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT patient_id, first_name, last_name, date_of_birth, phone_number
            FROM patient
            ORDER BY patient_id
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Patient {
                patient_id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                date_of_birth: row.get(3)?,
                phone_number: row.get(4)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List all doctors in natural-key order.
    pub fn list_doctors(&self) -> DbResult<Vec<Doctor>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT doctor_id, first_name, last_name, specialization, license_number
            FROM doctor
            ORDER BY doctor_id
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Doctor {
                doctor_id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                specialization: row.get(3)?,
                license_number: row.get(4)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List all employees in natural-key order.
    pub fn list_employees(&self) -> DbResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT employee_id, first_name, last_name, role
            FROM employee
            ORDER BY employee_id
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Employee {
                employee_id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                role: row.get(3)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List all medicines joined with their supplier name.
    ///
    /// Medicines whose supplier is missing are dropped by the inner join.
    pub fn list_medicines(&self) -> DbResult<Vec<Medicine>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT m.medicine_id, m.supplier_id, m.medicine_name, m.unit_price,
                   m.requires_recipe, s.supplier_name
            FROM medicine m
            JOIN supplier s ON m.supplier_id = s.supplier_id
            ORDER BY m.medicine_id
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Medicine {
                medicine_id: row.get(0)?,
                supplier_id: row.get(1)?,
                medicine_name: row.get(2)?,
                unit_price: row.get(3)?,
                requires_recipe: row.get(4)?,
                supplier_name: row.get(5)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List all sale line items joined with their parent transaction.
    pub fn list_sale_line_items(&self) -> DbResult<Vec<SaleLineItem>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT td.transaction_detail_id, td.transaction_id, td.medicine_id,
                   td.recipe_id, td.quantity, td.price_at_transaction,
                   t.patient_id, t.employee_id, t.transaction_time
            FROM transaction_details td
            JOIN [transaction] t ON td.transaction_id = t.transaction_id
            ORDER BY td.transaction_detail_id
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(SaleLineItem {
                transaction_detail_id: row.get(0)?,
                transaction_id: row.get(1)?,
                medicine_id: row.get(2)?,
                recipe_id: row.get(3)?,
                quantity: row.get(4)?,
                price_at_transaction: row.get(5)?,
                patient_id: row.get(6)?,
                employee_id: row.get(7)?,
                transaction_time: row.get(8)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
