//! Refund estimate
//!
//! A deliberately simplified formula carried over unchanged for parity with
//! the original application. The constants are not real tax law and the
//! result is an on-screen estimate only.

use crate::record::Income;

/// Standard deduction constant used by the estimate
pub const STANDARD_DEDUCTION: f64 = 13_850.0;

/// Single flat bracket used by the estimate
pub const FLAT_TAX_RATE: f64 = 0.22;

/// Estimate the federal refund for the given income
///
/// total income = wages + interest income;
/// taxable = max(0, total - standard deduction);
/// tax = taxable * flat rate; refund = withheld - tax, rounded to the
/// nearest whole dollar. Negative values mean a balance due.
#[must_use]
pub fn calculate_refund(income: &Income) -> i64 {
    let total_income = income.wages + income.interest_income;
    let taxable_income = (total_income - STANDARD_DEDUCTION).max(0.0);
    let federal_tax = taxable_income * FLAT_TAX_RATE;
    (income.federal_withheld - federal_tax).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reference_example() {
        let income = Income {
            wages: 50_000.0,
            interest_income: 500.0,
            federal_withheld: 9_000.0,
            ..Income::default()
        };
        // taxable = 36650, tax = 8063, refund = 937
        assert_eq!(calculate_refund(&income), 937);
    }

    #[test]
    fn income_below_standard_deduction_refunds_all_withholding() {
        let income = Income {
            wages: 10_000.0,
            federal_withheld: 1_200.0,
            ..Income::default()
        };
        assert_eq!(calculate_refund(&income), 1_200);
    }

    #[test]
    fn balance_due_is_negative() {
        let income = Income {
            wages: 100_000.0,
            federal_withheld: 0.0,
            ..Income::default()
        };
        assert!(calculate_refund(&income) < 0);
    }

    proptest! {
        #[test]
        fn refund_never_exceeds_withholding(
            wages in 0.0f64..1_000_000.0,
            interest in 0.0f64..100_000.0,
            withheld in 0.0f64..200_000.0,
        ) {
            let income = Income {
                wages,
                interest_income: interest,
                federal_withheld: withheld,
                ..Income::default()
            };
            // Tax is never negative, so the refund can't beat the withholding.
            prop_assert!(calculate_refund(&income) <= withheld.round() as i64 + 1);
        }

        #[test]
        fn refund_is_monotonic_in_withholding(
            wages in 0.0f64..1_000_000.0,
            withheld in 0.0f64..100_000.0,
        ) {
            let lower = Income { wages, federal_withheld: withheld, ..Income::default() };
            let higher = Income { wages, federal_withheld: withheld + 100.0, ..Income::default() };
            prop_assert!(calculate_refund(&higher) >= calculate_refund(&lower));
        }
    }
}
