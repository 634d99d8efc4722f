//! Configuration types for tax computation.
//!
//! This module contains the strongly-typed schedule structures that are
//! deserialized from YAML configuration files, together with the built-in
//! statutory schedule of the Nigeria Tax Act, 2025.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the statute a schedule was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatuteMetadata {
    /// A short code for the statute (e.g., "NTA2025").
    pub code: String,
    /// The human-readable name of the statute.
    pub name: String,
    /// The version of the schedule.
    pub version: String,
    /// The date from which the schedule applies.
    pub effective_date: NaiveDate,
    /// URL to the official statute text.
    pub source_url: String,
}

/// A single band of a progressive tax schedule.
///
/// `upper_limit` is the cumulative income at which the band ends. The last
/// band of a schedule has no upper limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBand {
    /// Cumulative upper limit of the band; `None` means unbounded.
    #[serde(default)]
    pub upper_limit: Option<Decimal>,
    /// The rate applied to income within the band, between 0 and 1.
    pub rate: Decimal,
}

impl TaxBand {
    /// Creates a band ending at `upper_limit`.
    pub fn bounded(upper_limit: Decimal, rate: Decimal) -> Self {
        Self {
            upper_limit: Some(upper_limit),
            rate,
        }
    }

    /// Creates the open-ended top band.
    pub fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_limit: None,
            rate,
        }
    }
}

/// Rent relief parameters (Section 30).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentRelief {
    /// Share of annual rent paid that is deductible.
    pub rate: Decimal,
    /// Maximum relief regardless of rent paid.
    pub cap: Decimal,
}

/// Personal Income Tax schedule (Section 30 and the Fourth Schedule).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitSchedule {
    /// Rent relief parameters.
    pub rent_relief: RentRelief,
    /// Progressive bands in ascending order.
    pub bands: Vec<TaxBand>,
}

impl PitSchedule {
    /// Checks the band table and relief parameters.
    ///
    /// Bands must be non-empty with strictly increasing positive limits, only
    /// the last band may (and must) be unbounded, and every rate must lie in
    /// `[0, 1]`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.rent_relief.rate < Decimal::ZERO || self.rent_relief.rate > Decimal::ONE {
            return Err(invalid("rent relief rate must be between 0 and 1"));
        }
        if self.rent_relief.cap < Decimal::ZERO {
            return Err(invalid("rent relief cap must not be negative"));
        }

        let Some((last, bounded)) = self.bands.split_last() else {
            return Err(invalid("at least one tax band is required"));
        };

        if last.upper_limit.is_some() {
            return Err(invalid("the last tax band must be unbounded"));
        }

        let mut previous = Decimal::ZERO;
        for (index, band) in bounded.iter().enumerate() {
            let limit = band.upper_limit.ok_or_else(|| {
                invalid(format!("band {} is unbounded but is not the last band", index + 1))
            })?;
            if limit <= previous {
                return Err(invalid(format!(
                    "band {} upper limit {} must exceed {}",
                    index + 1,
                    limit,
                    previous
                )));
            }
            previous = limit;
        }

        for (index, band) in self.bands.iter().enumerate() {
            if band.rate < Decimal::ZERO || band.rate > Decimal::ONE {
                return Err(invalid(format!(
                    "band {} rate {} must be between 0 and 1",
                    index + 1,
                    band.rate
                )));
            }
        }

        Ok(())
    }
}

impl Default for PitSchedule {
    fn default() -> Self {
        Self {
            rent_relief: RentRelief {
                rate: Decimal::new(20, 2),
                cap: Decimal::from(500_000),
            },
            bands: vec![
                TaxBand::bounded(Decimal::from(800_000), Decimal::ZERO),
                TaxBand::bounded(Decimal::from(2_200_000), Decimal::new(15, 2)),
                TaxBand::bounded(Decimal::from(9_000_000), Decimal::new(18, 2)),
                TaxBand::bounded(Decimal::from(13_000_000), Decimal::new(21, 2)),
                TaxBand::bounded(Decimal::from(25_000_000), Decimal::new(23, 2)),
                TaxBand::unbounded(Decimal::new(25, 2)),
            ],
        }
    }
}

/// Company Income Tax schedule (Section 202 small-company rules).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitSchedule {
    /// Highest turnover a small company may have.
    pub small_company_turnover_threshold: Decimal,
    /// Highest total fixed assets a small company may hold.
    pub small_company_fixed_assets_threshold: Decimal,
    /// Rate applied to the assessable profit of a non-small company.
    pub company_income_tax_rate: Decimal,
    /// Development levy rate applied to the assessable profit of a non-small company.
    pub development_levy_rate: Decimal,
}

impl CitSchedule {
    /// Checks thresholds are non-negative and rates lie in `[0, 1]`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.small_company_turnover_threshold < Decimal::ZERO
            || self.small_company_fixed_assets_threshold < Decimal::ZERO
        {
            return Err(invalid("small company thresholds must not be negative"));
        }
        for (name, rate) in [
            ("company income tax rate", self.company_income_tax_rate),
            ("development levy rate", self.development_levy_rate),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(invalid(format!("{} must be between 0 and 1", name)));
            }
        }
        Ok(())
    }
}

impl Default for CitSchedule {
    fn default() -> Self {
        Self {
            small_company_turnover_threshold: Decimal::from(50_000_000),
            small_company_fixed_assets_threshold: Decimal::from(250_000_000),
            company_income_tax_rate: Decimal::new(30, 2),
            development_levy_rate: Decimal::new(4, 2),
        }
    }
}

/// The complete tax configuration.
///
/// Aggregates the statute metadata with both schedules. Built once at
/// startup and shared read-only by every calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxConfig {
    metadata: StatuteMetadata,
    pit: PitSchedule,
    cit: CitSchedule,
}

impl TaxConfig {
    /// Creates a validated configuration from its component parts.
    pub fn new(metadata: StatuteMetadata, pit: PitSchedule, cit: CitSchedule) -> EngineResult<Self> {
        pit.validate()?;
        cit.validate()?;
        Ok(Self { metadata, pit, cit })
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        &self.metadata
    }

    /// Returns the Personal Income Tax schedule.
    pub fn pit(&self) -> &PitSchedule {
        &self.pit
    }

    /// Returns the Company Income Tax schedule.
    pub fn cit(&self) -> &CitSchedule {
        &self.cit
    }
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            metadata: StatuteMetadata {
                code: "NTA2025".to_string(),
                name: "Nigeria Tax Act, 2025".to_string(),
                version: "2026-01-01".to_string(),
                effective_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default(),
                source_url: "https://www.firs.gov.ng/nigeria-tax-act-2025".to_string(),
            },
            pit: PitSchedule::default(),
            cit: CitSchedule::default(),
        }
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidSchedule {
        message: message.into(),
    }
}
