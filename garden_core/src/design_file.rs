//! # Design File I/O
//!
//! Reads and writes garden design files: plain UTF-8 text, one bed per line.
//!
//! ## File Format
//!
//! ```text
//! # Comments start with '#', blank lines are ignored
//! rectangle 2.0 1.0
//! RECTANGLE 2.0 2.0
//! ```
//!
//! The keyword is case-insensitive and fields may be separated by any run of
//! whitespace. Dimensions are in metres.
//!
//! Saves are atomic: the design is written to a `.tmp` sibling, synced, then
//! renamed over the target.
//!
//! ## Example
//!
//! ```rust,no_run
//! use garden_core::design_file::{load_design, save_design};
//! use garden_core::planner::GardenPlanner;
//! use std::path::Path;
//!
//! let mut planner = GardenPlanner::new(81.0, 17.0);
//! load_design(Path::new("garden.txt"), &mut planner)?;
//! save_design(&planner, Path::new("garden-copy.txt"))?;
//! # Ok::<(), garden_core::errors::GardenError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::errors::{GardenError, GardenResult};
use crate::planner::GardenPlanner;
use crate::settings::GARDEN_PLANNER_VERSION;

/// Load every bed in a design file into `planner`.
///
/// The whole file is read before any line is parsed, so an unreadable or
/// missing file is reported as a [`GardenError::FileError`] and never as a
/// parse error. On a parse error nothing is added to the planner.
///
/// Returns the number of beds added.
pub fn load_design(path: &Path, planner: &mut GardenPlanner) -> GardenResult<usize> {
    let contents = fs::read_to_string(path)
        .map_err(|e| GardenError::file_error("open", path.display().to_string(), e.to_string()))?;

    let added = planner.read_beds(contents.lines())?;
    info!(path = %path.display(), beds = added, "loaded garden design");
    Ok(added)
}

/// Render the planner's beds in design-file format.
///
/// The output starts with a comment header and loads back to the same beds.
pub fn to_design_text(planner: &GardenPlanner) -> String {
    let mut text = format!("# {}\n", GARDEN_PLANNER_VERSION);
    for bed in planner {
        text.push_str(&bed.to_string());
        text.push('\n');
    }
    text
}

/// Save the planner's beds to a design file with atomic write semantics.
pub fn save_design(planner: &GardenPlanner, path: &Path) -> GardenResult<()> {
    let text = to_design_text(planner);
    let tmp_path = path.with_extension("tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        GardenError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(text.as_bytes()).map_err(|e| {
        GardenError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        GardenError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        GardenError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!(path = %path.display(), beds = planner.bed_count(), "saved garden design");
    Ok(())
}
