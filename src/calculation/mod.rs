//! Calculation logic for the Tax Engine.
//!
//! This module contains all the calculation functions for determining tax,
//! including gross income and deduction derivation with capped rent relief,
//! the progressive band walk, Personal Income Tax, small company
//! classification and Company Income Tax with the development levy.

mod chargeable_income;
mod company_income_tax;
mod formatting;
mod personal_income_tax;
mod progressive_bands;

pub use chargeable_income::{
    ChargeableIncomeResult, calculate_chargeable_income, calculate_gross_income,
    calculate_rent_relief, calculate_total_deductions,
};
pub use company_income_tax::{classify_company, compute_cit};
pub use formatting::{format_amount, format_percent};
pub use personal_income_tax::compute_pit;
pub use progressive_bands::{ProgressiveTaxResult, apply_progressive_bands};
