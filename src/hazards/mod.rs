//! Heat index and air quality index computation.

pub mod error;
pub mod parser;
pub mod validation;

pub mod air_quality;
pub mod breakpoints;
pub mod heat_index;
pub mod report;
pub mod thresholds;

pub use error::HazardError;
pub use parser::*;
pub use validation::*;

pub use air_quality::{aggregate, aggregate_named, compute_individual_index, compute_pollutant_index, try_aggregate};
pub use breakpoints::{PollutantBreakpoint, INDEX_CEILING};
pub use heat_index::{classify_heat_index, compute_heat_index, heat_index_info, try_heat_index_info};
pub use report::HazardReport;
pub use thresholds::{pollutant_warnings, PollutantWarning};
