//! Writes a synthetic penguin dataset to `assets/penguins.csv`.
//!
//! Measurements are drawn from per-species normal distributions matching the
//! published Palmer penguins summary statistics, with a few NA cells mixed in
//! so the loader's skip path sees realistic input. Fully deterministic.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    /// Pick one element of a slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() as usize) % items.len()]
    }
}

/// Per-species measurement distributions: (mean, std dev) per column.
struct SpeciesProfile {
    name: &'static str,
    islands: &'static [&'static str],
    bill_length: (f64, f64),
    bill_depth: (f64, f64),
    body_mass: (f64, f64),
    rows: usize,
}

const PROFILES: [SpeciesProfile; 3] = [
    SpeciesProfile {
        name: "Adelie",
        islands: &["Torgersen", "Biscoe", "Dream"],
        bill_length: (38.8, 2.7),
        bill_depth: (18.3, 1.2),
        body_mass: (3700.0, 460.0),
        rows: 152,
    },
    SpeciesProfile {
        name: "Gentoo",
        islands: &["Biscoe"],
        bill_length: (47.5, 3.1),
        bill_depth: (15.0, 1.0),
        body_mass: (5076.0, 504.0),
        rows: 124,
    },
    SpeciesProfile {
        name: "Chinstrap",
        islands: &["Dream"],
        bill_length: (48.8, 3.3),
        bill_depth: (18.4, 1.1),
        body_mass: (3733.0, 384.0),
        rows: 68,
    },
];

fn main() {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/penguins.csv".to_string());

    if let Some(dir) = std::path::Path::new(&output_path).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).expect("Failed to create output directory");
        }
    }

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path).expect("Failed to create output file");

    writer
        .write_record([
            "species",
            "island",
            "bill_length_mm",
            "bill_depth_mm",
            "body_mass_g",
        ])
        .expect("Failed to write header");

    let mut total = 0usize;
    for profile in &PROFILES {
        for _ in 0..profile.rows {
            total += 1;

            let island = *rng.choose(profile.islands);
            let bill_length = rng.gauss(profile.bill_length.0, profile.bill_length.1);
            let bill_depth = rng.gauss(profile.bill_depth.0, profile.bill_depth.1);
            let body_mass = rng.gauss(profile.body_mass.0, profile.body_mass.1);

            // Roughly one row in forty loses its measurements, like the NA
            // rows in the source data.
            let row: [String; 5] = if rng.next_u64() % 40 == 0 {
                [
                    profile.name.to_string(),
                    island.to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                ]
            } else {
                [
                    profile.name.to_string(),
                    island.to_string(),
                    format!("{bill_length:.1}"),
                    format!("{bill_depth:.1}"),
                    format!("{body_mass:.0}"),
                ]
            };

            writer.write_record(&row).expect("Failed to write row");
        }
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {total} rows to {output_path}");
}
