//! # garden_core - Garden Bed Costing Engine
//!
//! `garden_core` works out the materials needed to build a set of garden
//! beds: the length of wall (timber sleepers) around every bed and the soil
//! needed to fill them, plus what those materials cost.
//!
//! ## Quick Start
//!
//! ```rust
//! use garden_core::{GardenPlanner, Prices};
//!
//! let mut planner = GardenPlanner::with_prices(Prices::default());
//! planner.read_beds(["rectangle 2.0 1.0", "rectangle 2.0 2.0", "rectangle 2.0 1.0"])?;
//! planner.recalculate_totals();
//!
//! assert!((planner.total_cost() - 469.6).abs() < 1e-9);
//! # Ok::<(), garden_core::GardenError>(())
//! ```
//!
//! ## Modules
//!
//! - [`shapes`] - Bed shapes (rectangles) with area and perimeter
//! - [`planner`] - Bed collection, design parsing, totals and cost
//! - [`design_file`] - Loading and saving design files
//! - [`report`] - Console and JSON cost reports
//! - [`settings`] - Prices and fixed constants
//! - [`units`] - Metric unit wrappers
//! - [`errors`] - Structured error types

pub mod design_file;
pub mod errors;
pub mod planner;
pub mod report;
pub mod settings;
pub mod shapes;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use design_file::{load_design, save_design};
pub use errors::{GardenError, GardenResult};
pub use planner::{default_layout, GardenPlanner};
pub use report::CostReport;
pub use settings::{Prices, GARDEN_PLANNER_VERSION, SOIL_DEPTH};
pub use shapes::{Bed, Rectangle};
