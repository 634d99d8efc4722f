//! Request types for the Tax Engine API.
//!
//! This module defines the JSON request structures for the calculation
//! endpoints and the normalization step that turns a partial request into a
//! fully-populated calculator input. Absent or `null` amounts become zero;
//! negative amounts and amounts above [`MAX_DECLARED_AMOUNT`] are rejected.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{CitInput, PitInput};

/// Largest amount accepted for any single declared field (10^27 naira).
///
/// Ten fields at this value still sum within `Decimal`'s range, so the
/// calculators never overflow on a normalized input.
pub const MAX_DECLARED_AMOUNT: Decimal =
    Decimal::from_parts(3_892_314_112, 2_681_241_660, 54_210_108, false, 0);

/// Request body for the `/api/calculate_pit` endpoint.
///
/// Every field is optional. Amounts may be JSON numbers or numeric strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitRequest {
    /// Salaries, wages and other employment income.
    pub employment_income: Option<Decimal>,
    /// Profit from a trade, business or profession.
    pub business_profit: Option<Decimal>,
    /// Dividends, interest and other investment income.
    pub investment_income: Option<Decimal>,
    /// Any other income.
    pub other_income: Option<Decimal>,
    /// Contributions to an approved pension scheme.
    pub pension_contribution: Option<Decimal>,
    /// National Housing Fund contributions.
    pub nhf_contribution: Option<Decimal>,
    /// National Health Insurance Scheme contributions.
    pub nhis_contribution: Option<Decimal>,
    /// Life insurance or deferred annuity premiums.
    pub life_insurance_premium: Option<Decimal>,
    /// Mortgage interest on an owner-occupied residence.
    pub mortgage_interest: Option<Decimal>,
    /// Rent paid during the year.
    pub annual_rent_paid: Option<Decimal>,
}

/// A yes/no flag sent either as a JSON boolean or as `0`/`1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    /// `true` or `false`.
    Bool(bool),
    /// A numeric encoding; only `0` and `1` are accepted.
    Number(Decimal),
}

/// Request body for the `/api/calculate_cit` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CitRequest {
    /// Gross turnover for the year.
    pub turnover: Option<Decimal>,
    /// Profit assessable to tax.
    pub assessable_profit: Option<Decimal>,
    /// Total value of fixed assets.
    pub fixed_assets: Option<Decimal>,
    /// Whether the company provides professional services.
    pub is_professional_services: Option<FlagValue>,
}

impl TryFrom<PitRequest> for PitInput {
    type Error = EngineError;

    fn try_from(req: PitRequest) -> EngineResult<Self> {
        Ok(PitInput {
            employment_income: amount("employment_income", req.employment_income)?,
            business_profit: amount("business_profit", req.business_profit)?,
            investment_income: amount("investment_income", req.investment_income)?,
            other_income: amount("other_income", req.other_income)?,
            pension_contribution: amount("pension_contribution", req.pension_contribution)?,
            nhf_contribution: amount("nhf_contribution", req.nhf_contribution)?,
            nhis_contribution: amount("nhis_contribution", req.nhis_contribution)?,
            life_insurance_premium: amount("life_insurance_premium", req.life_insurance_premium)?,
            mortgage_interest: amount("mortgage_interest", req.mortgage_interest)?,
            annual_rent_paid: amount("annual_rent_paid", req.annual_rent_paid)?,
        })
    }
}

impl TryFrom<CitRequest> for CitInput {
    type Error = EngineError;

    fn try_from(req: CitRequest) -> EngineResult<Self> {
        Ok(CitInput {
            turnover: amount("turnover", req.turnover)?,
            assessable_profit: amount("assessable_profit", req.assessable_profit)?,
            fixed_assets: amount("fixed_assets", req.fixed_assets)?,
            is_professional_services: flag(
                "is_professional_services",
                req.is_professional_services,
            )?,
        })
    }
}

/// Defaults an absent amount to zero and rejects negatives and amounts above
/// [`MAX_DECLARED_AMOUNT`].
fn amount(field: &str, value: Option<Decimal>) -> EngineResult<Decimal> {
    let value = value.unwrap_or(Decimal::ZERO);
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not be negative (got {})", value),
        });
    }
    if value > MAX_DECLARED_AMOUNT {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not exceed {} (got {})", MAX_DECLARED_AMOUNT, value),
        });
    }
    Ok(value)
}

fn flag(field: &str, value: Option<FlagValue>) -> EngineResult<bool> {
    match value {
        None => Ok(false),
        Some(FlagValue::Bool(b)) => Ok(b),
        Some(FlagValue::Number(n)) if n == Decimal::ZERO => Ok(false),
        Some(FlagValue::Number(n)) if n == Decimal::ONE => Ok(true),
        Some(FlagValue::Number(n)) => Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must be true, false, 0 or 1 (got {})", n),
        }),
    }
}
