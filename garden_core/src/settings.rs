//! # Planner Settings
//!
//! Unit prices and fixed constants used when costing a garden.

use serde::{Deserialize, Serialize};

use crate::errors::{GardenError, GardenResult};
use crate::units::Metres;

/// Version banner printed at the top of every report
pub const GARDEN_PLANNER_VERSION: &str = "Garden Planner v0.2";

/// Fill depth used to turn bed area into soil volume (metres)
pub const SOIL_DEPTH: f64 = 0.2;

/// Soil depth as a typed length
pub fn soil_depth() -> Metres {
    Metres(SOIL_DEPTH)
}

// Example prices, roughly based on a local landscaping supplier.
/// 1 cubic metre of organic garden soil, less a 10% discount
pub const DEFAULT_SOIL_PRICE: f64 = 90.00 * 0.9;
/// 200x75mm hardwood sleeper, 3.0m long, priced per metre
pub const DEFAULT_WALL_PRICE: f64 = 51.00 / 3.0;

/// Unit material prices for a planner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    /// Price of garden soil per cubic metre
    pub soil_per_cubic_metre: f64,

    /// Price of bed wall material per linear metre
    pub wall_per_metre: f64,
}

impl Prices {
    pub fn new(soil_per_cubic_metre: f64, wall_per_metre: f64) -> Self {
        Prices {
            soil_per_cubic_metre,
            wall_per_metre,
        }
    }

    /// Validate that both prices are finite and non-negative.
    pub fn validate(&self) -> GardenResult<()> {
        check_price("soil_per_cubic_metre", self.soil_per_cubic_metre)?;
        check_price("wall_per_metre", self.wall_per_metre)
    }
}

impl Default for Prices {
    fn default() -> Self {
        Prices::new(DEFAULT_SOIL_PRICE, DEFAULT_WALL_PRICE)
    }
}

fn check_price(field: &str, price: f64) -> GardenResult<()> {
    if !price.is_finite() {
        return Err(GardenError::invalid_input(field, price.to_string(), "Price must be a finite number"));
    }
    if price < 0.0 {
        return Err(GardenError::invalid_input(field, price.to_string(), "Price cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prices() {
        let prices = Prices::default();
        assert!((prices.soil_per_cubic_metre - 81.0).abs() < 1e-9);
        assert!((prices.wall_per_metre - 17.0).abs() < 1e-9);
        assert!(prices.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_prices() {
        let err = Prices::new(-1.0, 17.0).validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        assert!(Prices::new(81.0, f64::NAN).validate().is_err());
        assert!(Prices::new(f64::INFINITY, 17.0).validate().is_err());
        assert!(Prices::new(0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_prices_serialization() {
        let prices = Prices::new(81.0, 17.0);
        let json = serde_json::to_string(&prices).unwrap();
        assert!(json.contains("soil_per_cubic_metre"));

        let roundtrip: Prices = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, prices);
    }
}
