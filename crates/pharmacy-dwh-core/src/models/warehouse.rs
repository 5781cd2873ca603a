//! Star-schema warehouse records.

use serde::{Deserialize, Serialize};

/// Patient dimension row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DimPatient {
    /// Surrogate key, 1-based in source order
    pub patient_key: i64,
    /// Natural key from the operational store
    pub patient_id: i64,
    pub full_name: String,
    /// Reference year minus birth year
    pub age: i32,
}

/// Medicine dimension row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DimMedicine {
    pub medicine_key: i64,
    pub medicine_id: i64,
    pub medicine_name: String,
    /// Either "Yes" or "No"
    pub requires_recipe: String,
    pub supplier_name: String,
}

/// Employee dimension row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DimEmployee {
    pub employee_key: i64,
    pub employee_id: i64,
    pub full_name: String,
    pub role: String,
}

/// Date dimension row, one per distinct sale date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DimDate {
    /// `YYYYMMDD` as an integer, e.g. 20251005
    pub date_key: i64,
    /// `YYYY-MM-DD`
    pub full_date: String,
    pub year: i32,
    /// 1-based
    pub month: u32,
    pub day: u32,
}

/// Sales fact row, one per sale line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactSale {
    pub date_key: i64,
    pub medicine_key: i64,
    /// 0 for walk-in sales
    pub patient_key: i64,
    pub employee_key: i64,
    /// Operational transaction identifier, not a dimension key
    pub transaction_id_oltp: i64,
    pub quantity_sold: i64,
    pub price_per_unit: f64,
    /// quantity_sold × price_per_unit
    pub total_line_amount: f64,
}

/// Full output of one transform run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WarehouseData {
    pub dim_patient: Vec<DimPatient>,
    pub dim_medicine: Vec<DimMedicine>,
    pub dim_employee: Vec<DimEmployee>,
    pub dim_date: Vec<DimDate>,
    pub fact_sales: Vec<FactSale>,
}

impl WarehouseData {
    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warehouse_json() {
        let data = WarehouseData {
            dim_date: vec![DimDate {
                date_key: 20251005,
                full_date: "2025-10-05".to_string(),
                year: 2025,
                month: 10,
                day: 5,
            }],
            ..Default::default()
        };

        let json = data.to_json().unwrap();
        assert!(json.contains("\"date_key\": 20251005"));
        assert!(json.contains("\"fact_sales\": []"));

        let parsed: WarehouseData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }
}
