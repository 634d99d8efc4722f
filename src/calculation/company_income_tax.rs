//! Company Income Tax calculation.
//!
//! This module classifies a company under the Section 202 small-company
//! definition and computes Company Income Tax and the development levy.
//!
//! ## Rate Structure
//!
//! - Small company: 0% Company Income Tax, 0% development levy
//! - Medium/large company: 30% Company Income Tax plus a 4% development levy,
//!   both on assessable profit
//!
//! A professional services company is never small, whatever its size.

use rust_decimal::Decimal;

use crate::config::CitSchedule;
use crate::models::{CitInput, CitResult, CompanyType};

use super::formatting::format_percent;

/// Classifies a company as small or medium/large.
///
/// A company is small when its turnover and fixed assets are both within the
/// thresholds (inclusive) and it does not provide professional services.
pub fn classify_company(input: &CitInput, schedule: &CitSchedule) -> CompanyType {
    let is_small = input.turnover <= schedule.small_company_turnover_threshold
        && input.fixed_assets <= schedule.small_company_fixed_assets_threshold
        && !input.is_professional_services;

    if is_small {
        CompanyType::Small
    } else {
        CompanyType::MediumOrLarge
    }
}

/// Computes Company Income Tax and the development levy for a company.
///
/// # Examples
///
/// ```
/// use tax_engine::calculation::compute_cit;
/// use tax_engine::config::CitSchedule;
/// use tax_engine::models::{CitInput, CompanyType};
/// use rust_decimal::Decimal;
///
/// let input = CitInput {
///     turnover: Decimal::from(10_000_000),
///     assessable_profit: Decimal::from(2_000_000),
///     fixed_assets: Decimal::from(1_000_000),
///     is_professional_services: true,
/// };
///
/// let result = compute_cit(&input, &CitSchedule::default());
///
/// assert_eq!(result.company_type, CompanyType::MediumOrLarge);
/// assert_eq!(result.total_tax_payable, Decimal::from(680_000));
/// assert_eq!(result.tax_rate_percent, "30%");
/// ```
pub fn compute_cit(input: &CitInput, schedule: &CitSchedule) -> CitResult {
    let company_type = classify_company(input, schedule);

    let (tax_rate, levy_rate) = match company_type {
        CompanyType::Small => (Decimal::ZERO, Decimal::ZERO),
        CompanyType::MediumOrLarge => (
            schedule.company_income_tax_rate,
            schedule.development_levy_rate,
        ),
    };

    let company_income_tax = input.assessable_profit * tax_rate;
    let development_levy = input.assessable_profit * levy_rate;

    CitResult {
        company_type,
        assessable_profit: input.assessable_profit,
        company_income_tax,
        development_levy,
        total_tax_payable: company_income_tax + development_levy,
        tax_rate_percent: format_percent(tax_rate),
        dev_levy_percent: format_percent(levy_rate),
    }
}
