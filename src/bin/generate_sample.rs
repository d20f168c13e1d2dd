use anyhow::{Context, Result};
use serde_json::json;

/// Header strings of the weather dataset, whitespace included.
const COLUMNS: [&str; 7] = [
    "pressure",
    "dewpoint",
    "humidity ",
    "cloud ",
    "sunshine",
    "         winddirection",
    "windspeed",
];

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

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

/// One plausible day: wet days are humid, cloudy and dark.
fn generate_day(rng: &mut SimpleRng) -> [f64; 7] {
    let wet = rng.next_f64() < 0.35;
    let (humidity, cloud, sunshine) = if wet {
        (
            rng.uniform(75.0, 98.0),
            rng.uniform(70.0, 100.0),
            rng.uniform(0.0, 3.0),
        )
    } else {
        (
            rng.uniform(35.0, 80.0),
            rng.uniform(0.0, 70.0),
            rng.uniform(3.0, 12.0),
        )
    };
    [
        rng.uniform(998.0, 1035.0).round(),
        rng.uniform(2.0, 26.0).round(),
        humidity.round(),
        cloud.round(),
        (sunshine * 10.0).round() / 10.0,
        (rng.uniform(0.0, 36.0).round() * 10.0).min(350.0),
        rng.uniform(4.0, 45.0).round(),
    ]
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let csv_path = "sample_weather.csv";
    let mut writer = csv::Writer::from_path(csv_path).context("creating sample CSV")?;
    writer.write_record(COLUMNS)?;
    let n_rows = 120;
    for _ in 0..n_rows {
        let day = generate_day(&mut rng);
        writer.write_record(day.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;

    // Standardised logistic weights leaning on humidity, cloud and sunshine.
    let model = json!({
        "feature_names": COLUMNS,
        "weights": [-0.35, 0.1, 1.4, 1.1, -1.2, 0.05, 0.2],
        "bias": -0.6,
        "scaler": {
            "mean": [1016.0, 14.0, 70.0, 50.0, 6.0, 175.0, 24.0],
            "scale": [10.0, 7.0, 15.0, 30.0, 3.5, 105.0, 12.0]
        },
        "threshold": 0.5
    });
    let model_path = "rain_model.json";
    let text = serde_json::to_string_pretty(&model)?;
    std::fs::write(model_path, text).context("writing model artifact")?;

    println!("Wrote {n_rows} rows to {csv_path} and a model to {model_path}");
    Ok(())
}
