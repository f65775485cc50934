//! # Garden Planner
//!
//! A planning tool for costing garden layouts. A [`GardenPlanner`] holds the
//! beds of one design plus the unit prices of soil and wall material, and
//! works out the total wall length, total bed area and overall material cost.
//!
//! ## Recalculating
//!
//! Totals are cached. Adding or removing beds does **not** update them; call
//! [`GardenPlanner::recalculate_totals`] after changing the layout and before
//! reading totals or cost. [`GardenPlanner::totals_are_stale`] reports whether
//! the layout has changed since the last recalculation.
//!
//! ## Example
//!
//! ```rust
//! use garden_core::planner::GardenPlanner;
//!
//! let mut planner = GardenPlanner::new(81.0, 17.0);
//! planner.read_beds(["# two small beds", "rectangle 2 1", "RECTANGLE 2 2"])?;
//! planner.recalculate_totals();
//!
//! assert_eq!(planner.total_garden_area().0, 6.0);
//! assert_eq!(planner.total_wall_length().0, 14.0);
//! # Ok::<(), garden_core::errors::GardenError>(())
//! ```

use std::io::BufRead;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{GardenError, GardenResult};
use crate::settings::{soil_depth, Prices};
use crate::shapes::Bed;
use crate::units::{CubicMetres, Metres, SquareMetres};

/// Keyword that starts a rectangular bed line (matched case-insensitively)
const RECTANGLE_KEYWORD: &str = "rectangle";

/// Beds, prices and cached totals for one garden design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GardenPlanner {
    prices: Prices,
    beds: Vec<Bed>,
    total_wall_length: Metres,
    total_garden_area: SquareMetres,
    #[serde(skip)]
    stale: bool,
}

impl GardenPlanner {
    /// Create an empty planner with the given soil price (per m3) and wall
    /// price (per m).
    pub fn new(soil_per_cubic_metre: f64, wall_per_metre: f64) -> Self {
        Self::with_prices(Prices::new(soil_per_cubic_metre, wall_per_metre))
    }

    pub fn with_prices(prices: Prices) -> Self {
        GardenPlanner {
            prices,
            beds: Vec::new(),
            total_wall_length: Metres::default(),
            total_garden_area: SquareMetres::default(),
            stale: false,
        }
    }

    pub fn prices(&self) -> Prices {
        self.prices
    }

    // ------------------------------------------------------------------
    // Bed collection
    // ------------------------------------------------------------------

    /// All beds, in the order they were added.
    pub fn beds(&self) -> &[Bed] {
        &self.beds
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bed> {
        self.beds.iter()
    }

    pub fn bed_count(&self) -> usize {
        self.beds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beds.is_empty()
    }

    /// Append a bed to the end of the design.
    pub fn add_bed(&mut self, bed: impl Into<Bed>) {
        self.beds.push(bed.into());
        self.stale = true;
    }

    /// Append several beds, keeping their order.
    pub fn add_beds<I>(&mut self, beds: I)
    where
        I: IntoIterator,
        I::Item: Into<Bed>,
    {
        self.beds.extend(beds.into_iter().map(Into::into));
        self.stale = true;
    }

    /// Remove the bed at `index`, shifting later beds down.
    ///
    /// Returns `None` if the index is out of range.
    pub fn remove_bed(&mut self, index: usize) -> Option<Bed> {
        if index >= self.beds.len() {
            return None;
        }
        self.stale = true;
        Some(self.beds.remove(index))
    }

    pub fn clear_beds(&mut self) {
        self.beds.clear();
        self.stale = true;
    }

    // ------------------------------------------------------------------
    // Design parsing
    // ------------------------------------------------------------------

    /// Read bed definitions from design-file lines and append them.
    ///
    /// Blank lines and `#` comments are skipped. Every other line must be
    /// `rectangle <width> <height>`. The first bad line aborts the read and
    /// no bed from this call is added.
    ///
    /// Returns the number of beds added.
    pub fn read_beds<I, S>(&mut self, lines: I) -> GardenResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for (index, line) in lines.into_iter().enumerate() {
            if let Some(bed) = parse_bed_line(index + 1, line.as_ref())? {
                debug!(line = index + 1, %bed, "parsed bed");
                parsed.push(bed);
            }
        }

        let added = parsed.len();
        if added > 0 {
            self.add_beds(parsed);
        }
        Ok(added)
    }

    /// Read bed definitions from any buffered reader (file, stdin, bytes).
    pub fn read_beds_from<R: BufRead>(&mut self, reader: R) -> GardenResult<usize> {
        let lines = reader
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| GardenError::file_error("read", "<design input>", e.to_string()))?;
        self.read_beds(lines)
    }

    // ------------------------------------------------------------------
    // Totals and cost
    // ------------------------------------------------------------------

    /// Recompute total wall length and garden area from the current beds.
    ///
    /// Must be called after any change to the bed collection.
    pub fn recalculate_totals(&mut self) {
        self.total_wall_length = Metres::default();
        self.total_garden_area = SquareMetres::default();
        for bed in &self.beds {
            self.total_garden_area += bed.area();
            self.total_wall_length += bed.perimeter();
        }
        self.stale = false;
        debug!(
            beds = self.beds.len(),
            area_m2 = self.total_garden_area.0,
            wall_m = self.total_wall_length.0,
            "recalculated totals"
        );
    }

    /// True if beds were added or removed since the last recalculation.
    pub fn totals_are_stale(&self) -> bool {
        self.stale
    }

    /// Total length of all bed walls, as of the last recalculation.
    pub fn total_wall_length(&self) -> Metres {
        self.total_wall_length
    }

    /// Total area of all beds, as of the last recalculation.
    pub fn total_garden_area(&self) -> SquareMetres {
        self.total_garden_area
    }

    /// Soil needed to fill every bed to [`crate::settings::SOIL_DEPTH`].
    pub fn soil_volume(&self) -> CubicMetres {
        self.total_garden_area * soil_depth()
    }

    pub fn wall_cost(&self) -> f64 {
        self.total_wall_length.0 * self.prices.wall_per_metre
    }

    pub fn soil_cost(&self) -> f64 {
        self.soil_volume().0 * self.prices.soil_per_cubic_metre
    }

    /// Materials cost of the whole garden: walls plus soil.
    ///
    /// Uses the cached totals; does not recalculate.
    pub fn total_cost(&self) -> f64 {
        self.wall_cost() + self.soil_cost()
    }
}

impl<'a> IntoIterator for &'a GardenPlanner {
    type Item = &'a Bed;
    type IntoIter = std::slice::Iter<'a, Bed>;

    fn into_iter(self) -> Self::IntoIter {
        self.beds.iter()
    }
}

/// The built-in layout: two rectangles with a square in the middle.
pub fn default_layout() -> Vec<Bed> {
    vec![
        Bed::rectangle(2.0, 1.0),
        Bed::rectangle(2.0, 2.0),
        Bed::rectangle(2.0, 1.0),
    ]
}

/// Parse one design-file line.
///
/// Returns `Ok(None)` for blank and comment lines. `line_number` is 1-based
/// and only used for error reporting.
pub fn parse_bed_line(line_number: usize, raw: &str) -> GardenResult<Option<Bed>> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [keyword, width, height] if keyword.eq_ignore_ascii_case(RECTANGLE_KEYWORD) => {
            let width_m = parse_dimension(line_number, "width", width)?;
            let height_m = parse_dimension(line_number, "height", height)?;
            Ok(Some(Bed::rectangle(width_m, height_m)))
        }
        _ => Err(GardenError::malformed_line(line_number, line)),
    }
}

fn parse_dimension(line_number: usize, field: &str, token: &str) -> GardenResult<f64> {
    let value: f64 = token.parse().map_err(|_| {
        GardenError::invalid_dimension(line_number, field, token, "not a number")
    })?;
    if !value.is_finite() {
        return Err(GardenError::invalid_dimension(line_number, field, token, "must be finite"));
    }
    Ok(value)
}
