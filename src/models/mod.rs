//! Core data models for the Tax Engine.
//!
//! This module contains the input and result records of both calculators.

mod cit;
mod pit;

pub use cit::{CitInput, CitResult, CompanyType};
pub use pit::{BandTax, PitInput, PitResult};
