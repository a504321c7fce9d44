use crate::model::Sighting;

// ---------------------------------------------------------------------------
// SightingMonitor – the ordered collection and its query/removal passes
// ---------------------------------------------------------------------------

/// Monitors counts of different types of animal across sighting records.
///
/// Owns the records in insertion order. Order is semantically irrelevant to
/// query results but kept stable so output is reproducible. Queries are
/// read-only passes; the only mutators are `ingest` and the `remove_*`
/// operations, which never touch a record in place.
#[derive(Debug, Default)]
pub struct SightingMonitor {
    sightings: Vec<Sighting>,
}

impl SightingMonitor {
    /// Create an empty monitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append records, preserving their relative order.
    ///
    /// Malformed records cannot reach this point: construction already
    /// validated them.
    pub fn ingest(&mut self, records: impl IntoIterator<Item = Sighting>) {
        self.sightings.extend(records);
    }

    /// Every record in insertion order. Restartable: re-querying yields the
    /// same sequence unless the collection changed in between.
    pub fn iter(&self) -> impl Iterator<Item = &Sighting> {
        self.sightings.iter()
    }

    /// Records whose animal equals `animal` exactly (case-sensitive),
    /// in insertion order.
    pub fn by_animal<'a>(&'a self, animal: &'a str) -> impl Iterator<Item = &'a Sighting> {
        self.sightings.iter().filter(move |s| s.animal() == animal)
    }

    /// Records logged by the given spotter, in insertion order.
    pub fn by_spotter(&self, spotter: i32) -> impl Iterator<Item = &Sighting> {
        self.sightings.iter().filter(move |s| s.spotter() == spotter)
    }

    /// Records of `animal` in `area`, in insertion order. Empty when nothing
    /// matches.
    pub fn by_animal_in_area<'a>(&'a self, animal: &str, area: i32) -> Vec<&'a Sighting> {
        self.sightings
            .iter()
            .filter(|s| s.animal() == animal && s.area() == area)
            .collect()
    }

    /// Total observed count for `animal`, summed over all matching records.
    ///
    /// An aggregate reduction, not a record count: 0 when no record matches.
    pub fn count_of(&self, animal: &str) -> i64 {
        self.by_animal(animal).map(Sighting::count).sum()
    }

    /// Names from `animal_names` whose total count is at or below
    /// `threshold`, in the order given.
    ///
    /// Duplicate input names are evaluated independently and may each appear
    /// in the output. An animal with no sightings totals 0, so it qualifies
    /// whenever `threshold >= 0`.
    pub fn endangered<'a>(
        &self,
        animal_names: impl IntoIterator<Item = &'a str>,
        threshold: i64,
    ) -> Vec<&'a str> {
        animal_names
            .into_iter()
            .filter(|name| self.count_of(name) <= threshold)
            .collect()
    }

    /// Remove every record with a count of exactly zero, keeping the rest in
    /// their original relative order.
    pub fn remove_zero_counts(&mut self) {
        self.sightings.retain(|s| s.count() != 0);
    }

    /// Remove every record logged by the given spotter. Idempotent.
    pub fn remove_by_spotter(&mut self, spotter: i32) {
        self.sightings.retain(|s| s.spotter() != spotter);
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.sightings.len()
    }

    /// Whether the monitor holds no records.
    pub fn is_empty(&self) -> bool {
        self.sightings.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
