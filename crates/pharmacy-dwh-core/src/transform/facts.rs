//! Fact builder.

use super::{date_key, SurrogateKeys, TransformError, TransformResult};
use crate::models::{FactSale, SaleLineItem};

/// Patient key recorded for a sale with no patient.
pub const NO_PATIENT_KEY: i64 = 0;

/// Build one fact row per sale line item.
///
/// Medicine and employee must resolve; a patient that is absent or unknown
/// falls back to [`NO_PATIENT_KEY`].
pub fn build_facts(
    sales: &[SaleLineItem],
    patient_keys: &SurrogateKeys,
    medicine_keys: &SurrogateKeys,
    employee_keys: &SurrogateKeys,
) -> TransformResult<Vec<FactSale>> {
    sales
        .iter()
        .map(|sale| -> TransformResult<FactSale> {
            let medicine_key = medicine_keys.get(sale.medicine_id).ok_or(
                TransformError::UnknownMedicine {
                    line_item_id: sale.transaction_detail_id,
                    medicine_id: sale.medicine_id,
                },
            )?;
            let employee_key = employee_keys.get(sale.employee_id).ok_or(
                TransformError::UnknownEmployee {
                    line_item_id: sale.transaction_detail_id,
                    employee_id: sale.employee_id,
                },
            )?;

            Ok(FactSale {
                date_key: date_key(&sale.transaction_time)?,
                medicine_key,
                patient_key: resolve_patient(sale, patient_keys),
                employee_key,
                transaction_id_oltp: sale.transaction_id,
                quantity_sold: sale.quantity,
                price_per_unit: sale.price_at_transaction,
                total_line_amount: sale.quantity as f64 * sale.price_at_transaction,
            })
        })
        .collect()
}

fn resolve_patient(sale: &SaleLineItem, patient_keys: &SurrogateKeys) -> i64 {
    let Some(patient_id) = sale.patient_id else {
        return NO_PATIENT_KEY;
    };

    patient_keys.get(patient_id).unwrap_or_else(|| {
        tracing::warn!(
            line_item_id = sale.transaction_detail_id,
            patient_id,
            "Patient not found in dimension, recording as walk-in"
        );
        NO_PATIENT_KEY
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(pairs: &[(i64, i64)]) -> SurrogateKeys {
        let mut keys = SurrogateKeys::default();
        for &(natural, surrogate) in pairs {
            keys.insert(natural, surrogate);
        }
        keys
    }

    fn sale(patient_id: Option<i64>, quantity: i64, price: f64) -> SaleLineItem {
        SaleLineItem {
            transaction_detail_id: 1,
            transaction_id: 11,
            medicine_id: 3,
            recipe_id: None,
            quantity,
            price_at_transaction: price,
            patient_id,
            employee_id: 2,
            transaction_time: "2025-10-06 14:00:00".to_string(),
        }
    }

    #[test]
    fn test_fact_row() {
        let facts = build_facts(
            &[sale(Some(5), 2, 25000.0)],
            &keys(&[(5, 4)]),
            &keys(&[(3, 1)]),
            &keys(&[(2, 6)]),
        )
        .unwrap();

        assert_eq!(
            facts,
            vec![FactSale {
                date_key: 20251006,
                medicine_key: 1,
                patient_key: 4,
                employee_key: 6,
                transaction_id_oltp: 11,
                quantity_sold: 2,
                price_per_unit: 25000.0,
                total_line_amount: 50000.0,
            }]
        );
    }

    #[test]
    fn test_walk_in_sale_gets_sentinel() {
        let facts = build_facts(
            &[sale(None, 1, 8000.0)],
            &keys(&[(5, 4)]),
            &keys(&[(3, 1)]),
            &keys(&[(2, 6)]),
        )
        .unwrap();
        assert_eq!(facts[0].patient_key, NO_PATIENT_KEY);
    }

    #[test]
    fn test_unknown_patient_gets_sentinel() {
        let facts = build_facts(
            &[sale(Some(404), 1, 8000.0)],
            &keys(&[(5, 4)]),
            &keys(&[(3, 1)]),
            &keys(&[(2, 6)]),
        )
        .unwrap();
        assert_eq!(facts[0].patient_key, NO_PATIENT_KEY);
    }

    #[test]
    fn test_unknown_medicine_is_fatal() {
        let result = build_facts(
            &[sale(None, 1, 8000.0)],
            &keys(&[]),
            &keys(&[]),
            &keys(&[(2, 6)]),
        );
        assert_eq!(
            result,
            Err(TransformError::UnknownMedicine {
                line_item_id: 1,
                medicine_id: 3
            })
        );
    }

    #[test]
    fn test_unknown_employee_is_fatal() {
        let result = build_facts(
            &[sale(None, 1, 8000.0)],
            &keys(&[]),
            &keys(&[(3, 1)]),
            &keys(&[]),
        );
        assert_eq!(
            result,
            Err(TransformError::UnknownEmployee {
                line_item_id: 1,
                employee_id: 2
            })
        );
    }

    #[test]
    fn test_total_is_recomputed() {
        let facts = build_facts(
            &[sale(None, 3, 12500.5)],
            &keys(&[]),
            &keys(&[(3, 1)]),
            &keys(&[(2, 6)]),
        )
        .unwrap();
        assert_eq!(facts[0].total_line_amount, 3.0 * 12500.5);
    }
}
