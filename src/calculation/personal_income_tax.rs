//! Personal Income Tax calculation.
//!
//! Combines the chargeable income derivation with the progressive band walk
//! to produce a complete [`PitResult`].

use crate::config::PitSchedule;
use crate::models::{PitInput, PitResult};

use super::chargeable_income::calculate_chargeable_income;
use super::progressive_bands::apply_progressive_bands;

/// Computes Personal Income Tax for an individual.
///
/// # Arguments
///
/// * `input` - Fully populated declarations (absent values already zeroed)
/// * `schedule` - Rent relief parameters and the band table
///
/// # Returns
///
/// A [`PitResult`] with the intermediate figures and the per-band breakdown.
///
/// # Examples
///
/// ```
/// use tax_engine::calculation::compute_pit;
/// use tax_engine::config::PitSchedule;
/// use tax_engine::models::PitInput;
/// use rust_decimal::Decimal;
///
/// let input = PitInput {
///     employment_income: Decimal::from(5_000_000),
///     ..PitInput::default()
/// };
///
/// let result = compute_pit(&input, &PitSchedule::default());
///
/// assert_eq!(result.gross_income, Decimal::from(5_000_000));
/// assert_eq!(result.chargeable_income, Decimal::from(5_000_000));
/// assert_eq!(result.tax_payable, Decimal::from(714_000));
/// ```
pub fn compute_pit(input: &PitInput, schedule: &PitSchedule) -> PitResult {
    let income = calculate_chargeable_income(input, schedule);
    let bands = apply_progressive_bands(income.chargeable_income, &schedule.bands);

    PitResult {
        gross_income: income.gross_income,
        total_deductions: income.total_deductions,
        chargeable_income: income.chargeable_income,
        tax_payable: bands.tax_payable,
        tax_breakdown: bands.breakdown,
        capped_rent_relief: income.capped_rent_relief,
    }
}
