use anyhow::{Context, Result};

/// Minimal deterministic PRNG (64-bit LCG), enough for sample data.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Uniform value in `0..bound`.
    fn below(&mut self, bound: u64) -> u64 {
        (self.next_u64() >> 11) % bound
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = SimpleRng::new(42);

    let animals = ["Fox", "Owl", "Deer", "Wolf", "Badger", "Lynx", "Hare"];
    let spotters = 1..=6i32;
    let areas = 1..=4i32;

    let output_path = "sample_sightings.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["animal", "spotter", "area", "count"])?;

    let mut rows = 0usize;
    for spotter in spotters {
        for area in areas.clone() {
            for _ in 0..3 {
                let animal = animals[rng.below(animals.len() as u64) as usize];
                // Roughly one row in five is a zero-count sighting, so the
                // removal operations have something to chew on.
                let count = if rng.below(5) == 0 {
                    0
                } else {
                    1 + rng.below(12) as i64
                };

                writer.write_record([
                    animal.to_string(),
                    spotter.to_string(),
                    area.to_string(),
                    count.to_string(),
                ])?;
                rows += 1;
            }
        }
    }
    writer.flush().context("flushing CSV output")?;

    println!("Wrote {rows} sightings to {output_path}");
    Ok(())
}
