//! Farm Calculator
//!
//! Yield, cost, revenue and profit figures for crops grown under
//! environmental conditions.
//!
//! - `models`: plants with optional per-environment factor tables, crop
//!   entries, harvests and the active environment levels
//! - `calculator`: plant/crop/harvest yield and the economics built on it
//!
//! ```
//! use farm_calculator::{compute_crop_yield, CropEntry, EnvironmentFactors, Plant};
//!
//! let corn = Plant::new("corn", 3.0)
//!     .with_factor("sun", [("low", -50.0), ("medium", 0.0), ("high", 50.0)]);
//! let env: EnvironmentFactors = "sun=high, temperature=high".parse()?;
//!
//! assert_eq!(compute_crop_yield(&CropEntry::new(corn, 20), Some(&env))?, 90.0);
//! # Ok::<(), farm_calculator::CalcError>(())
//! ```

pub mod calculator;
pub mod error;
pub mod models;

pub use calculator::{
    compute_crop_cost, compute_crop_profit, compute_crop_revenue, compute_crop_yield,
    compute_plant_yield, compute_total_cost, compute_total_profit, compute_total_revenue,
    compute_total_yield, summarize_harvest, CropLine, HarvestSummary,
};
pub use error::{CalcError, Result};
pub use models::{CropEntry, EnvironmentFactors, FactorTable, Harvest, LevelTable, Plant};
