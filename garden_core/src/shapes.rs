//! # Bed Shapes
//!
//! Garden beds are modelled as a closed set of shapes. Only rectangles exist
//! today; [`Bed`] wraps them so the planner can hold any shape in a single
//! collection, the same way a design file mixes bed lines.
//!
//! ## Example
//!
//! ```rust
//! use garden_core::shapes::{Bed, Rectangle};
//!
//! let bed = Bed::rectangle(2.0, 1.0);
//! assert_eq!(bed.area().0, 2.0);
//! assert_eq!(bed.perimeter().0, 6.0);
//! assert_eq!(bed.to_string(), "Rectangle 2.0 1.0");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::{Metres, SquareMetres};

/// A rectangular garden bed, dimensions in metres.
///
/// Dimensions are not validated: zero or negative values are stored as given
/// and flow straight into the area and perimeter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    width_m: f64,
    height_m: f64,
}

impl Rectangle {
    pub fn new(width_m: f64, height_m: f64) -> Self {
        Rectangle { width_m, height_m }
    }

    pub fn width(&self) -> Metres {
        Metres(self.width_m)
    }

    pub fn height(&self) -> Metres {
        Metres(self.height_m)
    }

    /// Internal area, width × height
    pub fn area(&self) -> SquareMetres {
        self.width() * self.height()
    }

    /// Total edge length, 2 × (width + height)
    pub fn perimeter(&self) -> Metres {
        (self.width() + self.height()) * 2.0
    }
}

impl fmt::Display for Rectangle {
    /// Same text as a design-file line, so a printed bed can be read back in.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug keeps the fractional part: 2.0 prints as "2.0", not "2".
        write!(f, "Rectangle {:?} {:?}", self.width_m, self.height_m)
    }
}

/// Any garden bed that can appear in a design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum Bed {
    Rectangle(Rectangle),
    // Future: Circle, L-shaped beds
}

impl Bed {
    /// Shorthand for a rectangular bed
    pub fn rectangle(width_m: f64, height_m: f64) -> Self {
        Bed::Rectangle(Rectangle::new(width_m, height_m))
    }

    pub fn area(&self) -> SquareMetres {
        match self {
            Bed::Rectangle(r) => r.area(),
        }
    }

    /// Wall length needed to border this bed
    pub fn perimeter(&self) -> Metres {
        match self {
            Bed::Rectangle(r) => r.perimeter(),
        }
    }

    pub fn shape_name(&self) -> &'static str {
        match self {
            Bed::Rectangle(_) => "Rectangle",
        }
    }
}

impl From<Rectangle> for Bed {
    fn from(rectangle: Rectangle) -> Self {
        Bed::Rectangle(rectangle)
    }
}

impl fmt::Display for Bed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bed::Rectangle(r) => fmt::Display::fmt(r, f),
        }
    }
}
