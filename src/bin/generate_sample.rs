use std::path::PathBuf;

use anyhow::{Context, Result};

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

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const REGIONS: &[&str] = &["north", "south", "east", "west"];
const N_ROWS: usize = 200;

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample.csv"));

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(&path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer.write_record(["id", "region", "temperature", "sales", "discount", "note"])?;

    for i in 0..N_ROWS {
        let temperature = rng.gauss(20.0, 6.0);
        // sales follow temperature, discount runs against it
        let sales = 50.0 + 3.5 * temperature + rng.gauss(0.0, 8.0);
        let discount = (30.0 - temperature + rng.gauss(0.0, 2.0)).max(0.0);
        let region = rng.pick(REGIONS);

        let id = (i + 1).to_string();
        let temperature = format!("{temperature:.1}");
        let sales = format!("{sales:.2}");
        let discount = format!("{discount:.1}");

        // every 25th row is missing its trailing cells
        if i % 25 == 24 {
            writer.write_record([id.as_str(), region, temperature.as_str()])?;
        } else {
            let note = if i % 10 == 0 { "promo" } else { "" };
            writer.write_record([
                id.as_str(),
                region,
                temperature.as_str(),
                sales.as_str(),
                discount.as_str(),
                note,
            ])?;
        }
    }

    writer.flush()?;
    log::info!("wrote {N_ROWS} rows to {}", path.display());
    println!("Wrote {N_ROWS} rows to {}", path.display());
    Ok(())
}
