//! Progressive band tax calculation.
//!
//! This module walks a band table (the Fourth Schedule for Personal Income
//! Tax) and taxes successive slices of chargeable income at each band's rate.
//!
//! ## Band Walk
//!
//! - Band 1 taxes up to its own upper limit, and always produces a
//!   breakdown row when there is income to tax, even at 0%.
//! - Each later band taxes up to its width (`limit[i] - limit[i-1]`).
//! - The walk stops as soon as no income remains; later bands are omitted.
//! - The top band is unbounded and absorbs whatever is left.

use rust_decimal::Decimal;

use crate::config::TaxBand;
use crate::models::BandTax;

use super::formatting::{format_amount, format_percent};

/// The result of applying a band table to an amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressiveTaxResult {
    /// Total tax across all bands.
    pub tax_payable: Decimal,
    /// One row per band that received income, in ascending order.
    pub breakdown: Vec<BandTax>,
}

/// Applies a progressive band table to `chargeable_income`.
///
/// Tax is accumulated band by band. A non-positive amount produces no rows
/// and zero tax.
///
/// # Examples
///
/// ```
/// use tax_engine::calculation::apply_progressive_bands;
/// use tax_engine::config::PitSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = PitSchedule::default();
/// let result = apply_progressive_bands(Decimal::from(5_000_000), &schedule.bands);
///
/// assert_eq!(result.tax_payable, Decimal::from(714_000));
/// assert_eq!(result.breakdown.len(), 3);
/// assert_eq!(result.breakdown[0].band_label, "First 800,000.00 @ 0%");
/// assert_eq!(result.breakdown[1].band_label, "Next 1,400,000.00 @ 15%");
/// assert_eq!(result.breakdown[2].band_label, "Next 2,800,000.00 @ 18%");
/// ```
pub fn apply_progressive_bands(chargeable_income: Decimal, bands: &[TaxBand]) -> ProgressiveTaxResult {
    let mut tax_payable = Decimal::ZERO;
    let mut breakdown = Vec::new();
    let mut remaining = chargeable_income;
    let mut previous_limit = Decimal::ZERO;

    for (index, band) in bands.iter().enumerate() {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxable = match band.upper_limit {
            Some(limit) => remaining.min(limit - previous_limit),
            None => remaining,
        };
        let tax = taxable * band.rate;

        tax_payable += tax;
        remaining -= taxable;

        let position = if index == 0 { "First" } else { "Next" };
        breakdown.push(BandTax {
            band_label: format!(
                "{} {} @ {}",
                position,
                format_amount(taxable),
                format_percent(band.rate)
            ),
            tax,
        });

        if let Some(limit) = band.upper_limit {
            previous_limit = limit;
        }
    }

    ProgressiveTaxResult {
        tax_payable,
        breakdown,
    }
}
