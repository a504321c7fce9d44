use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// InvalidRecord – constructor-time validation failure
// ---------------------------------------------------------------------------

/// Rejection reason for a sighting that fails construction-time validation.
///
/// The upstream data sources do not enforce these constraints, so the
/// constructor does: the rest of the crate assumes well-formed entries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidRecord {
    /// The animal name was empty.
    #[error("animal name must not be empty")]
    EmptyAnimal,

    /// A numeric field carried a negative value.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: i64 },
}

// ---------------------------------------------------------------------------
// Sighting – one observation record
// ---------------------------------------------------------------------------

/// A single sighting: one observation of an animal type by a spotter in an
/// area, with an observed head count.
///
/// Immutable once constructed; fields are only reachable through accessors.
/// Field-identical duplicates are valid, distinct entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sighting {
    animal: String,
    spotter: i32,
    area: i32,
    count: i64,
}

impl Sighting {
    /// Build a validated sighting.
    ///
    /// Fails with [`InvalidRecord`] when `animal` is empty or any of
    /// `spotter` / `area` / `count` is negative.
    pub fn new(
        animal: impl Into<String>,
        spotter: i32,
        area: i32,
        count: i64,
    ) -> Result<Self, InvalidRecord> {
        let animal = animal.into();
        if animal.is_empty() {
            return Err(InvalidRecord::EmptyAnimal);
        }
        if spotter < 0 {
            return Err(InvalidRecord::Negative {
                field: "spotter",
                value: spotter as i64,
            });
        }
        if area < 0 {
            return Err(InvalidRecord::Negative {
                field: "area",
                value: area as i64,
            });
        }
        if count < 0 {
            return Err(InvalidRecord::Negative {
                field: "count",
                value: count,
            });
        }
        Ok(Sighting {
            animal,
            spotter,
            area,
            count,
        })
    }

    /// The type of animal observed.
    pub fn animal(&self) -> &str {
        &self.animal
    }

    /// ID of the spotter who logged the sighting.
    pub fn spotter(&self) -> i32 {
        self.spotter
    }

    /// ID of the area where the sighting occurred.
    pub fn area(&self) -> i32 {
        self.area
    }

    /// Number of individuals observed.
    pub fn count(&self) -> i64 {
        self.count
    }
}

impl fmt::Display for Sighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (count {}) by spotter {} in area {}",
            self.animal, self.count, self.spotter, self.area
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
