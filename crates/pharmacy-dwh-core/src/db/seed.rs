//! Sample operational data set.

use rusqlite::params;

use super::{Database, DbResult};

impl Database {
    /// Recreate the OLTP schema and insert the sample pharmacy data.
    ///
    /// Five rows per reference entity, four transactions and five line items.
    /// Transaction 3 is a walk-in sale with no patient.
    pub fn seed_sample_data(&mut self) -> DbResult<()> {
        self.create_oltp_schema()?;

        let tx = self.transaction()?;
        {
            let mut patient = tx.prepare(
                "INSERT INTO patient (first_name, last_name, date_of_birth, phone_number) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (first, last, dob, phone) in [
                ("Budi", "Santoso", "1990-05-15", "081234567890"),
                ("Ani", "Wijaya", "1985-11-20", "081234567891"),
                ("Rina", "Maulida", "2001-01-30", "081234567892"),
                ("Joko", "Susilo", "1995-07-22", "081234567893"),
                ("Sari", "Puspita", "1988-03-12", "081234567894"),
            ] {
                patient.execute(params![first, last, dob, phone])?;
            }

            let mut doctor = tx.prepare(
                "INSERT INTO doctor (first_name, last_name, specialization, license_number) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (first, last, specialization, license) in [
                ("Dr. Cipto", "M", "General Practitioner", "DOC12345"),
                ("Dr. Sutomo", "", "Cardiologist", "DOC67890"),
                ("Dr. Sarah", "S", "Pediatrician", "DOC11223"),
                ("Dr. Adit", "P", "Dermatologist", "DOC44556"),
                ("Dr. Lisa", "A", "Neurologist", "DOC77889"),
            ] {
                doctor.execute(params![first, last, specialization, license])?;
            }

            let mut employee = tx.prepare(
                "INSERT INTO employee (first_name, last_name, role) VALUES (?1, ?2, ?3)",
            )?;
            for (first, last, role) in [
                ("Citra", "Kirana", "Pharmacist"),
                ("Dewi", "Lestari", "Cashier"),
                ("Agus", "Pranoto", "Admin"),
                ("Bambang", "Pamungkas", "Pharmacist"),
                ("Kartika", "Putri", "Cashier"),
            ] {
                employee.execute(params![first, last, role])?;
            }

            let mut supplier = tx.prepare(
                "INSERT INTO supplier (supplier_name, phone_number) VALUES (?1, ?2)",
            )?;
            for (name, phone) in [
                ("PT. Kimia Farma", "021-123456"),
                ("PT. Bio Farma", "022-789012"),
                ("PT. Sanbe Farma", "022-334455"),
                ("PT. Kalbe Farma", "021-667788"),
                ("PT. Dexa Medica", "021-990011"),
            ] {
                supplier.execute(params![name, phone])?;
            }

            let mut medicine = tx.prepare(
                "INSERT INTO medicine (supplier_id, medicine_name, unit_price, requires_recipe) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (supplier_id, name, price, recipe) in [
                (1, "Paracetamol 500mg", 5000.0, 0),
                (1, "Amoxicillin 500mg", 15000.0, 1),
                (2, "Vitamin C 1000mg", 25000.0, 0),
                (4, "Bodrex", 8000.0, 0),
                (3, "OBH Combi", 12000.0, 0),
            ] {
                medicine.execute(params![supplier_id, name, price, recipe])?;
            }

            let mut transaction = tx.prepare(
                "INSERT INTO [transaction] (patient_id, employee_id, total_amount, transaction_time) VALUES (?1, ?2, ?3, ?4)",
            )?;
            let mut detail = tx.prepare(
                "INSERT INTO transaction_details (transaction_id, medicine_id, quantity, price_at_transaction) VALUES (?1, ?2, ?3, ?4)",
            )?;

            // (patient, employee, stored total, time, [(medicine, quantity, price)])
            let sales: [(Option<i64>, i64, f64, &str, &[(i64, i64, f64)]); 4] = [
                (Some(1), 2, 20000.0, "2025-10-05 10:30:00", &[(1, 4, 5000.0)]),
                (
                    Some(2),
                    1,
                    58000.0,
                    "2025-10-06 14:00:00",
                    &[(3, 2, 25000.0), (4, 1, 8000.0)],
                ),
                (None, 5, 24000.0, "2025-10-06 15:15:00", &[(5, 2, 12000.0)]),
                (Some(4), 4, 30000.0, "2025-10-07 09:00:00", &[(2, 2, 15000.0)]),
            ];
            for (patient_id, employee_id, total, time, lines) in sales {
                transaction.execute(params![patient_id, employee_id, total, time])?;
                let transaction_id = tx.last_insert_rowid();
                for &(medicine_id, quantity, price) in lines {
                    detail.execute(params![transaction_id, medicine_id, quantity, price])?;
                }
            }
        }
        tx.commit()?;

        tracing::info!("Seeded sample OLTP data");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        let mut db = Database::open_in_memory().unwrap();
        db.seed_sample_data().unwrap();

        assert_eq!(db.count_rows("patient").unwrap(), 5);
        assert_eq!(db.count_rows("doctor").unwrap(), 5);
        assert_eq!(db.count_rows("employee").unwrap(), 5);
        assert_eq!(db.count_rows("supplier").unwrap(), 5);
        assert_eq!(db.count_rows("medicine").unwrap(), 5);
        assert_eq!(db.count_rows("transaction").unwrap(), 4);
        assert_eq!(db.count_rows("transaction_details").unwrap(), 5);
    }

    #[test]
    fn test_seed_twice_replaces_data() {
        let mut db = Database::open_in_memory().unwrap();
        db.seed_sample_data().unwrap();
        db.seed_sample_data().unwrap();

        assert_eq!(db.count_rows("patient").unwrap(), 5);
        assert_eq!(db.count_rows("transaction_details").unwrap(), 5);
    }

    #[test]
    fn test_walk_in_transaction_has_null_patient() {
        let mut db = Database::open_in_memory().unwrap();
        db.seed_sample_data().unwrap();

        let walk_ins: i64 = db
            .conn()
            .query_row(
                "SELECT COUNT(*) FROM [transaction] WHERE patient_id IS NULL",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(walk_ins, 1);
    }
}
