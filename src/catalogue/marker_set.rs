//! Marker records and the validated, read-only marker set.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::color::HexColor;
use super::CatalogueError;

/// A single marker pen in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Identifier printed on the pen cap, unique within a set
    pub code: String,
    /// Display label
    pub name: String,
    pub hex: HexColor,
}

/// The full catalogue. Inserted once at startup and never mutated.
#[derive(Resource, Debug, Clone)]
pub struct MarkerSet {
    pub name: String,
    markers: Vec<Marker>,
}

impl MarkerSet {
    /// Build a set, rejecting empty input and duplicate codes.
    pub fn new(name: impl Into<String>, markers: Vec<Marker>) -> Result<Self, CatalogueError> {
        if markers.is_empty() {
            return Err(CatalogueError::Empty);
        }

        let mut seen = HashSet::with_capacity(markers.len());
        for marker in &markers {
            if !seen.insert(marker.code.as_str()) {
                return Err(CatalogueError::DuplicateCode(marker.code.clone()));
            }
        }

        Ok(Self {
            name: name.into(),
            markers,
        })
    }

    /// Parse a set from its JSON form and validate it.
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let raw: RawMarkerSet = serde_json::from_str(json)?;

        let markers = raw
            .markers
            .into_iter()
            .map(|entry| {
                let hex = HexColor::parse(&entry.hex).map_err(|_| CatalogueError::InvalidHex {
                    code: entry.code.clone(),
                    value: entry.hex.clone(),
                })?;
                Ok(Marker {
                    code: entry.code,
                    name: entry.name,
                    hex,
                })
            })
            .collect::<Result<Vec<_>, CatalogueError>>()?;

        Self::new(raw.name, markers)
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Always false for a constructed set; kept alongside `len`.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Marker> {
        self.markers.get(index)
    }

    /// Look up a marker by its code.
    #[allow(dead_code)]
    pub fn find(&self, code: &str) -> Option<&Marker> {
        self.index_of(code).map(|index| &self.markers[index])
    }

    /// Position of the marker with `code`. Codes are unique, so this is the
    /// marker's only index.
    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.markers.iter().position(|m| m.code == code)
    }

    /// Split for the two catalogue grids: `len / 2` markers first, the
    /// remainder second.
    pub fn halves(&self) -> (&[Marker], &[Marker]) {
        self.markers.split_at(self.markers.len() / 2)
    }
}

/// On-disk shape. Hex values stay strings here so a bad color can be
/// reported together with the marker code it belongs to.
#[derive(Deserialize)]
struct RawMarkerSet {
    name: String,
    markers: Vec<RawMarker>,
}

#[derive(Deserialize)]
struct RawMarker {
    code: String,
    name: String,
    hex: String,
}
