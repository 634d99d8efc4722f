//! Chargeable income derivation.
//!
//! This module derives gross income (Section 28), allowable deductions
//! including capped rent relief (Section 30), and the resulting chargeable
//! income for an individual.

use rust_decimal::Decimal;

use crate::config::{PitSchedule, RentRelief};
use crate::models::PitInput;

/// Intermediate figures of the chargeable income derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeableIncomeResult {
    /// Sum of all declared income.
    pub gross_income: Decimal,
    /// Rent relief after applying the cap.
    pub capped_rent_relief: Decimal,
    /// Direct deductions plus capped rent relief.
    pub total_deductions: Decimal,
    /// Gross income less deductions, never negative.
    pub chargeable_income: Decimal,
}

/// Sums employment income, business profit, investment income and other income.
pub fn calculate_gross_income(input: &PitInput) -> Decimal {
    input.employment_income + input.business_profit + input.investment_income + input.other_income
}

/// Returns the rent relief for `annual_rent_paid`, capped at the statutory maximum.
///
/// # Examples
///
/// ```
/// use tax_engine::calculation::calculate_rent_relief;
/// use tax_engine::config::PitSchedule;
/// use rust_decimal::Decimal;
///
/// let relief = PitSchedule::default().rent_relief;
///
/// // 20% of 1,000,000 is under the cap
/// assert_eq!(calculate_rent_relief(Decimal::from(1_000_000), &relief), Decimal::from(200_000));
///
/// // 20% of 3,000,000 would be 600,000; capped
/// assert_eq!(calculate_rent_relief(Decimal::from(3_000_000), &relief), Decimal::from(500_000));
/// ```
pub fn calculate_rent_relief(annual_rent_paid: Decimal, relief: &RentRelief) -> Decimal {
    (annual_rent_paid * relief.rate).min(relief.cap)
}

/// Sums the five direct deductions and the already-capped rent relief.
pub fn calculate_total_deductions(input: &PitInput, capped_rent_relief: Decimal) -> Decimal {
    input.pension_contribution
        + input.nhf_contribution
        + input.nhis_contribution
        + input.life_insurance_premium
        + input.mortgage_interest
        + capped_rent_relief
}

/// Derives chargeable income for an individual.
///
/// Deductions in excess of gross income are not carried forward; chargeable
/// income is clamped at zero.
pub fn calculate_chargeable_income(
    input: &PitInput,
    schedule: &PitSchedule,
) -> ChargeableIncomeResult {
    let gross_income = calculate_gross_income(input);
    let capped_rent_relief = calculate_rent_relief(input.annual_rent_paid, &schedule.rent_relief);
    let total_deductions = calculate_total_deductions(input, capped_rent_relief);
    let chargeable_income = (gross_income - total_deductions).max(Decimal::ZERO);

    ChargeableIncomeResult {
        gross_income,
        capped_rent_relief,
        total_deductions,
        chargeable_income,
    }
}
