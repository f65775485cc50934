//! # Unit Types
//!
//! Type-safe wrappers for the metric quantities the planner deals in. These
//! are plain f64 newtypes so JSON output stays as bare numbers.
//!
//! - Length: metres (m), used for bed dimensions and wall length
//! - Area: square metres (m2), used for bed and garden area
//! - Volume: cubic metres (m3), used for soil
//!
//! ## Example
//!
//! ```rust
//! use garden_core::units::{CubicMetres, Metres, SquareMetres};
//!
//! let area = SquareMetres(8.0);
//! let soil: CubicMetres = area * Metres(0.2);
//! assert!((soil.0 - 1.6).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metres(pub f64);

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMetres(pub f64);

/// Volume in cubic metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMetres(pub f64);

impl Mul<Metres> for Metres {
    type Output = SquareMetres;
    fn mul(self, rhs: Metres) -> SquareMetres {
        SquareMetres(self.0 * rhs.0)
    }
}

impl Mul<Metres> for SquareMetres {
    type Output = CubicMetres;
    fn mul(self, depth: Metres) -> CubicMetres {
        CubicMetres(self.0 * depth.0)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty, $suffix:literal) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl AddAssign for $type {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl fmt::Display for $type {
            /// Honours the caller's width/precision, then appends the unit.
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)?;
                f.write_str($suffix)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Metres, " m");
impl_arithmetic!(SquareMetres, " m2");
impl_arithmetic!(CubicMetres, " m3");
