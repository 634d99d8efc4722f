//! Company Income Tax models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Declared figures of a company for one year of assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitInput {
    /// Gross turnover for the year.
    pub turnover: Decimal,
    /// Profit assessable to tax.
    pub assessable_profit: Decimal,
    /// Total value of fixed assets.
    pub fixed_assets: Decimal,
    /// Whether the company provides professional services.
    pub is_professional_services: bool,
}

/// Statutory size classification of a company.
///
/// # Example
///
/// ```
/// use tax_engine::models::CompanyType;
///
/// let json = serde_json::to_string(&CompanyType::MediumOrLarge).unwrap();
/// assert_eq!(json, "\"Medium/Large Company\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanyType {
    /// Exempt from Company Income Tax and the development levy.
    #[serde(rename = "Small Company")]
    Small,
    /// Taxed at the full rate plus the development levy.
    #[serde(rename = "Medium/Large Company")]
    MediumOrLarge,
}

impl CompanyType {
    /// Returns the display name of the classification.
    pub fn label(&self) -> &'static str {
        match self {
            CompanyType::Small => "Small Company",
            CompanyType::MediumOrLarge => "Medium/Large Company",
        }
    }
}

/// The result of a Company Income Tax computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitResult {
    /// The company's classification.
    pub company_type: CompanyType,
    /// Assessable profit as declared.
    #[serde(with = "rust_decimal::serde::float")]
    pub assessable_profit: Decimal,
    /// Company Income Tax charged.
    #[serde(with = "rust_decimal::serde::float")]
    pub company_income_tax: Decimal,
    /// Development levy charged.
    #[serde(with = "rust_decimal::serde::float")]
    pub development_levy: Decimal,
    /// Company Income Tax plus development levy.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_tax_payable: Decimal,
    /// Applied Company Income Tax rate, e.g. `"30%"`.
    pub tax_rate_percent: String,
    /// Applied development levy rate, e.g. `"4%"`.
    pub dev_levy_percent: String,
}
