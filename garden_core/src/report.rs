//! # Cost Report
//!
//! A snapshot of one costed design: the beds, the material totals and the
//! cost breakdown. It renders to the fixed-width console text and serializes
//! to JSON for scripted use.
//!
//! ## Example
//!
//! ```rust
//! use garden_core::planner::{default_layout, GardenPlanner};
//! use garden_core::report::CostReport;
//!
//! let mut planner = GardenPlanner::new(81.0, 17.0);
//! planner.add_beds(default_layout());
//! planner.recalculate_totals();
//!
//! let report = CostReport::from_planner(&planner);
//! assert!(report.render_text().contains("Total garden cost is: $ 469.60."));
//! ```

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::errors::{GardenError, GardenResult};
use crate::planner::GardenPlanner;
use crate::settings::{Prices, GARDEN_PLANNER_VERSION};
use crate::shapes::Bed;
use crate::units::{CubicMetres, Metres, SquareMetres};

/// Material totals and costs for one garden design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    /// Version banner of the planner that produced the report
    pub version: String,

    pub prices: Prices,

    /// Beds in design order
    pub beds: Vec<Bed>,

    pub total_area: SquareMetres,

    pub total_wall_length: Metres,

    pub soil_volume: CubicMetres,

    pub wall_cost: f64,

    pub soil_cost: f64,

    pub total_cost: f64,
}

impl CostReport {
    /// Snapshot the planner's beds and cached totals.
    ///
    /// The planner's totals are taken as they are; recalculate first if the
    /// layout has changed.
    pub fn from_planner(planner: &GardenPlanner) -> Self {
        CostReport {
            version: GARDEN_PLANNER_VERSION.to_string(),
            prices: planner.prices(),
            beds: planner.beds().to_vec(),
            total_area: planner.total_garden_area(),
            total_wall_length: planner.total_wall_length(),
            soil_volume: planner.soil_volume(),
            wall_cost: planner.wall_cost(),
            soil_cost: planner.soil_cost(),
            total_cost: planner.total_cost(),
        }
    }

    /// Console report, two decimal places on every quantity.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}", self.version);
        let _ = writeln!(out, "Garden design is:");
        for bed in &self.beds {
            let _ = writeln!(out, "    {}", bed);
        }
        let _ = writeln!(out, "Total garden area is: {:8.2} m2.", self.total_area.0);
        let _ = writeln!(out, "Total wall length is: {:8.2} m.", self.total_wall_length.0);
        let _ = writeln!(out, "Total soil required:  {:8.2} m3.", self.soil_volume.0);
        let _ = writeln!(out, "Total garden cost is: ${:7.2}.", self.total_cost);
        out
    }

    pub fn to_json(&self) -> GardenResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| GardenError::SerializationError {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::default_layout;

    fn default_report() -> CostReport {
        let mut planner = GardenPlanner::new(81.0, 17.0);
        planner.add_beds(default_layout());
        planner.recalculate_totals();
        CostReport::from_planner(&planner)
    }

    #[test]
    fn test_render_default_layout() {
        let expected = "\
Garden Planner v0.2
Garden design is:
    Rectangle 2.0 1.0
    Rectangle 2.0 2.0
    Rectangle 2.0 1.0
Total garden area is:     8.00 m2.
Total wall length is:    20.00 m.
Total soil required:      1.60 m3.
Total garden cost is: $ 469.60.
";
        assert_eq!(default_report().render_text(), expected);
    }

    #[test]
    fn test_cost_breakdown() {
        let report = default_report();
        assert!((report.wall_cost - 340.0).abs() < 1e-9);
        assert!((report.soil_cost - 129.6).abs() < 1e-9);
        assert!((report.total_cost - (report.wall_cost + report.soil_cost)).abs() < 1e-12);
    }

    #[test]
    fn test_empty_design_report() {
        let mut planner = GardenPlanner::new(81.0, 17.0);
        planner.recalculate_totals();
        let text = CostReport::from_planner(&planner).render_text();
        assert!(text.contains("Garden design is:\nTotal garden area is:     0.00 m2."));
        assert!(text.contains("Total garden cost is: $   0.00."));
    }

    #[test]
    fn test_report_json() {
        let report = default_report();
        let json = report.to_json().unwrap();
        assert!(json.contains("\"total_wall_length\": 20.0"));
        assert!(json.contains("\"shape\": \"Rectangle\""));

        let roundtrip: CostReport = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.beds, report.beds);
        assert!((roundtrip.total_cost - 469.6).abs() < 1e-9);
    }
}
