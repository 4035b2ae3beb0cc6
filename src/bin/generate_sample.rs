//! Writes a deterministic sample sightings CSV to `assets/sightings.csv`
//! so the app has data on first launch.

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Population-ish clusters the sightings scatter around: (lat, lon, spread).
const CLUSTERS: [(f64, f64, f64); 6] = [
    (39.0, -98.0, 9.0),   // continental US
    (34.0, -118.0, 3.0),  // US west coast
    (51.0, 0.0, 4.0),     // UK / western Europe
    (-27.0, 140.0, 8.0),  // Australia
    (36.0, 138.0, 3.0),   // Japan
    (-12.0, -55.0, 7.0),  // Brazil
];

const SHAPES: [&str; 10] = [
    "light", "circle", "sphere", "disk", "triangle", "cylinder", "fireball",
    "formation", "chevron", "unknown",
];

const CITIES: [(&str, &str, &str); 5] = [
    ("san marcos", "tx", "us"),
    ("bristol", "", "gb"),
    ("perth", "", "au"),
    ("kyoto", "", "jp"),
    ("sao paulo", "", "br"),
];

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "assets/sightings.csv";
    std::fs::create_dir_all("assets").expect("creating assets directory");
    let mut writer = csv::Writer::from_path(output_path).expect("creating output file");

    writer
        .write_record([
            "datetime",
            "city",
            "state",
            "country",
            "shape",
            "duration (seconds)",
            "duration (hours/min)",
            "comments",
            "date posted",
            "latitude",
            "longitude",
        ])
        .expect("writing header");

    let rows = 600;
    for _ in 0..rows {
        let (clat, clon, spread) = *rng.pick(&CLUSTERS);
        let lat = rng.gauss(clat, spread).clamp(-89.9, 89.9);
        let lon = rng.gauss(clon, spread * 1.4).clamp(-179.9, 179.9);

        let year = 1945 + (rng.next_u64() % 69) as i32; // 1945..=2013
        let month = 1 + (rng.next_u64() % 12) as u32;
        let day = 1 + (rng.next_u64() % 28) as u32;
        let hour = (rng.next_u64() % 24) as u32;
        let minute = (rng.next_u64() % 60) as u32;

        let shape = *rng.pick(&SHAPES);
        // Log-uniform-ish spread from seconds to hours.
        let duration = (10.0_f64).powf(0.5 + rng.next_f64() * 3.5).round();
        let (city, st, country) = *rng.pick(&CITIES);

        writer
            .write_record([
                format!("{month}/{day}/{year} {hour}:{minute:02}"),
                city.to_string(),
                st.to_string(),
                country.to_string(),
                shape.to_string(),
                format!("{duration}"),
                String::new(),
                format!("{shape} moving overhead"),
                format!("{month}/{day}/{year}"),
                format!("{lat:.7}"),
                format!("{lon:.7}"),
            ])
            .expect("writing row");
    }

    writer.flush().expect("flushing output");
    println!("Wrote {rows} sightings to {output_path}");
}
