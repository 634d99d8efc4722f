//! Personal Income Tax models.
//!
//! This module contains the fully-populated [`PitInput`] record consumed by
//! the PIT calculator and the [`PitResult`] it produces.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Declared income and deductions of an individual for one year of assessment.
///
/// Every field is a non-negative amount. Absent declarations are zero; see
/// the API request types for the normalization step that guarantees this.
///
/// # Example
///
/// ```
/// use tax_engine::models::PitInput;
/// use rust_decimal::Decimal;
///
/// let input = PitInput {
///     employment_income: Decimal::from(5_000_000),
///     ..PitInput::default()
/// };
/// assert_eq!(input.business_profit, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitInput {
    /// Salaries, wages and other employment income.
    pub employment_income: Decimal,
    /// Profit from a trade, business or profession.
    pub business_profit: Decimal,
    /// Dividends, interest and other investment income.
    pub investment_income: Decimal,
    /// Any other income.
    pub other_income: Decimal,
    /// Contributions to an approved pension scheme.
    pub pension_contribution: Decimal,
    /// National Housing Fund contributions.
    pub nhf_contribution: Decimal,
    /// National Health Insurance Scheme contributions.
    pub nhis_contribution: Decimal,
    /// Life insurance or deferred annuity premiums.
    pub life_insurance_premium: Decimal,
    /// Interest paid on a mortgage for an owner-occupied residence.
    pub mortgage_interest: Decimal,
    /// Rent paid during the year; relief is a capped share of this.
    pub annual_rent_paid: Decimal,
}

/// Tax charged on one slice of chargeable income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandTax {
    /// Human-readable description, e.g. `"Next 1,400,000.00 @ 15%"`.
    #[serde(rename = "band")]
    pub band_label: String,
    /// Tax charged on this slice.
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
}

/// The result of a Personal Income Tax computation.
///
/// Amounts serialize as JSON numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitResult {
    /// Sum of all declared income.
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_income: Decimal,
    /// Sum of direct deductions plus capped rent relief.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_deductions: Decimal,
    /// Gross income less deductions, floored at zero.
    #[serde(with = "rust_decimal::serde::float")]
    pub chargeable_income: Decimal,
    /// Total tax across all bands.
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_payable: Decimal,
    /// Per-band breakdown in ascending band order.
    pub tax_breakdown: Vec<BandTax>,
    /// Rent relief after applying the statutory cap.
    #[serde(with = "rust_decimal::serde::float")]
    pub capped_rent_relief: Decimal,
}
