//! SQLite schema definitions.

/// Operational (OLTP) schema. Drops and recreates every table.
pub const OLTP_SCHEMA: &str = r#"
PRAGMA foreign_keys = OFF;

-- ============================================================================
-- Reference Data
-- ============================================================================

DROP TABLE IF EXISTS patient;
CREATE TABLE patient (
    patient_id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT,
    date_of_birth TEXT NOT NULL,
    phone_number TEXT UNIQUE NOT NULL
);

DROP TABLE IF EXISTS doctor;
CREATE TABLE doctor (
    doctor_id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT,
    specialization TEXT NOT NULL,
    license_number TEXT UNIQUE NOT NULL
);

DROP TABLE IF EXISTS employee;
CREATE TABLE employee (
    employee_id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT,
    role TEXT NOT NULL
);

DROP TABLE IF EXISTS supplier;
CREATE TABLE supplier (
    supplier_id INTEGER PRIMARY KEY AUTOINCREMENT,
    supplier_name TEXT UNIQUE NOT NULL,
    phone_number TEXT NOT NULL
);

DROP TABLE IF EXISTS medicine;
CREATE TABLE medicine (
    medicine_id INTEGER PRIMARY KEY AUTOINCREMENT,
    supplier_id INTEGER NOT NULL REFERENCES supplier(supplier_id),
    medicine_name TEXT NOT NULL,
    unit_price REAL NOT NULL,
    requires_recipe INTEGER NOT NULL DEFAULT 0
);

-- ============================================================================
-- Sales
-- ============================================================================

DROP TABLE IF EXISTS transaction_details;
CREATE TABLE transaction_details (
    transaction_detail_id INTEGER PRIMARY KEY AUTOINCREMENT,
    transaction_id INTEGER NOT NULL REFERENCES [transaction](transaction_id),
    medicine_id INTEGER NOT NULL REFERENCES medicine(medicine_id),
    recipe_id INTEGER,
    quantity INTEGER NOT NULL,
    price_at_transaction REAL NOT NULL
);

DROP TABLE IF EXISTS [transaction];
CREATE TABLE [transaction] (
    transaction_id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id INTEGER REFERENCES patient(patient_id),   -- NULL for walk-in sales
    employee_id INTEGER NOT NULL REFERENCES employee(employee_id),
    total_amount REAL NOT NULL,
    transaction_time TEXT NOT NULL                       -- 'YYYY-MM-DD HH:MM:SS'
);

PRAGMA foreign_keys = ON;
"#;

/// Warehouse (star) schema. Drops and recreates every table, so each load is a
/// full refresh.
pub const WAREHOUSE_SCHEMA: &str = r#"
-- ============================================================================
-- Dimensions
-- ============================================================================

DROP TABLE IF EXISTS dim_patient;
CREATE TABLE dim_patient (
    patient_key INTEGER PRIMARY KEY,
    patient_id INTEGER NOT NULL,
    full_name TEXT NOT NULL,
    age INTEGER NOT NULL
);

DROP TABLE IF EXISTS dim_medicine;
CREATE TABLE dim_medicine (
    medicine_key INTEGER PRIMARY KEY,
    medicine_id INTEGER NOT NULL,
    medicine_name TEXT NOT NULL,
    requires_recipe TEXT NOT NULL CHECK (requires_recipe IN ('Yes', 'No')),
    supplier_name TEXT NOT NULL
);

DROP TABLE IF EXISTS dim_employee;
CREATE TABLE dim_employee (
    employee_key INTEGER PRIMARY KEY,
    employee_id INTEGER NOT NULL,
    full_name TEXT NOT NULL,
    role TEXT NOT NULL
);

DROP TABLE IF EXISTS dim_date;
CREATE TABLE dim_date (
    date_key INTEGER PRIMARY KEY,                -- YYYYMMDD
    full_date TEXT NOT NULL,
    year INTEGER NOT NULL,
    month INTEGER NOT NULL,
    day INTEGER NOT NULL
);

-- ============================================================================
-- Facts
-- ============================================================================

-- patient_key is not a foreign key: 0 marks a walk-in sale
DROP TABLE IF EXISTS fact_sales;
CREATE TABLE fact_sales (
    sales_key INTEGER PRIMARY KEY AUTOINCREMENT,
    date_key INTEGER NOT NULL REFERENCES dim_date(date_key),
    medicine_key INTEGER NOT NULL REFERENCES dim_medicine(medicine_key),
    patient_key INTEGER NOT NULL DEFAULT 0,
    employee_key INTEGER NOT NULL REFERENCES dim_employee(employee_key),
    transaction_id_oltp INTEGER NOT NULL,
    quantity_sold INTEGER NOT NULL,
    price_per_unit REAL NOT NULL,
    total_line_amount REAL NOT NULL
);

CREATE INDEX idx_fact_sales_date ON fact_sales(date_key);
CREATE INDEX idx_fact_sales_medicine ON fact_sales(medicine_key);
"#;
