//! The embedded marker catalogue.
//!
//! The dataset ships inside the binary and is validated before the app
//! starts. Index arithmetic in the picker and the grid split both assume a
//! complete set, so a bad dataset is a startup failure rather than a
//! partially loaded catalogue.

pub mod color;
mod marker_set;


pub use color::HexColor;
pub use marker_set::{Marker, MarkerSet};

use bevy::prelude::*;
use thiserror::Error;

/// Number of markers in the embedded SFAIH set.
pub const EXPECTED_MARKER_COUNT: usize = 101;

const EMBEDDED_CATALOGUE: &str = include_str!("../../assets/catalogue/sfaih_markers.json");

/// Reasons a catalogue can be rejected.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("catalogue data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("marker {code} has malformed color {value:?}")]
    InvalidHex { code: String, value: String },

    #[error("marker code {0} appears more than once")]
    DuplicateCode(String),

    #[error("catalogue contains no markers")]
    Empty,

    #[error("catalogue has {found} markers, expected {expected}")]
    WrongCount { expected: usize, found: usize },
}

/// Load the dataset compiled into the binary.
pub fn load_embedded() -> Result<MarkerSet, CatalogueError> {
    load_with_count(EMBEDDED_CATALOGUE, EXPECTED_MARKER_COUNT)
}

/// Parse `json` and require exactly `expected` markers.
pub fn load_with_count(json: &str, expected: usize) -> Result<MarkerSet, CatalogueError> {
    let set = MarkerSet::from_json(json)?;
    if set.len() != expected {
        return Err(CatalogueError::WrongCount {
            expected,
            found: set.len(),
        });
    }
    Ok(set)
}

/// Makes a loaded catalogue available to every other plugin.
pub struct CataloguePlugin {
    pub set: MarkerSet,
}

impl Plugin for CataloguePlugin {
    fn build(&self, app: &mut App) {
        info!(
            "Catalogue '{}' loaded with {} markers",
            self.set.name,
            self.set.len()
        );
        app.insert_resource(self.set.clone());
    }
}
