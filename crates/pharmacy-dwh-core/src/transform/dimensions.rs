//! Dimension builders.

use std::collections::HashSet;

use chrono::Datelike;

use super::fields::parse_sale_date;
use super::{
    date_key, full_name, naive_age, recipe_label, Dimension, TransformError, TransformResult,
};
use crate::models::{
    DimDate, DimEmployee, DimMedicine, DimPatient, Employee, Medicine, Patient, SaleLineItem,
};

/// Surrogate key for the row at `index`, starting from 1.
fn surrogate_key(index: usize) -> i64 {
    index as i64 + 1
}

/// Build the patient dimension in input order.
pub fn build_patients(
    patients: &[Patient],
    reference_year: i32,
) -> TransformResult<Dimension<DimPatient>> {
    let mut dimension = Dimension::default();

    for (index, patient) in patients.iter().enumerate() {
        let patient_key = surrogate_key(index);
        let age = naive_age(&patient.date_of_birth, reference_year).ok_or_else(|| {
            TransformError::MalformedBirthDate {
                patient_id: patient.patient_id,
                value: patient.date_of_birth.clone(),
            }
        })?;

        dimension.keys.insert(patient.patient_id, patient_key);
        dimension.rows.push(DimPatient {
            patient_key,
            patient_id: patient.patient_id,
            full_name: full_name(&patient.first_name, patient.last_name.as_deref()),
            age,
        });
    }

    Ok(dimension)
}

/// Build the medicine dimension in input order.
pub fn build_medicines(medicines: &[Medicine]) -> Dimension<DimMedicine> {
    let mut dimension = Dimension::default();

    for (index, medicine) in medicines.iter().enumerate() {
        let medicine_key = surrogate_key(index);
        dimension.keys.insert(medicine.medicine_id, medicine_key);
        dimension.rows.push(DimMedicine {
            medicine_key,
            medicine_id: medicine.medicine_id,
            medicine_name: medicine.medicine_name.clone(),
            requires_recipe: recipe_label(medicine.requires_recipe).to_string(),
            supplier_name: medicine.supplier_name.clone(),
        });
    }

    dimension
}

/// Build the employee dimension in input order.
pub fn build_employees(employees: &[Employee]) -> Dimension<DimEmployee> {
    let mut dimension = Dimension::default();

    for (index, employee) in employees.iter().enumerate() {
        let employee_key = surrogate_key(index);
        dimension.keys.insert(employee.employee_id, employee_key);
        dimension.rows.push(DimEmployee {
            employee_key,
            employee_id: employee.employee_id,
            full_name: full_name(&employee.first_name, employee.last_name.as_deref()),
            role: employee.role.clone(),
        });
    }

    dimension
}

/// Build the date dimension from the dates sales happened on.
///
/// One row per distinct date, in order of first occurrence.
pub fn build_dates(sales: &[SaleLineItem]) -> TransformResult<Vec<DimDate>> {
    let mut seen = HashSet::new();
    let mut dates = Vec::new();

    for sale in sales {
        let key = date_key(&sale.transaction_time)?;
        if !seen.insert(key) {
            continue;
        }

        let (full_date, date) = parse_sale_date(&sale.transaction_time)?;
        dates.push(DimDate {
            date_key: key,
            full_date: full_date.to_string(),
            year: date.year(),
            month: date.month(),
            day: date.day(),
        });
    }

    Ok(dates)
}
