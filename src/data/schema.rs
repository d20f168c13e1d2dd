//! Column schema shared by the CSV uploader, the manual form and the model.
//!
//! The names are the exact header strings of the original weather dataset,
//! stray whitespace included. Matching is byte-for-byte.

pub const PRESSURE: &str = "pressure";
pub const DEWPOINT: &str = "dewpoint";
pub const HUMIDITY: &str = "humidity ";
pub const CLOUD: &str = "cloud ";
pub const SUNSHINE: &str = "sunshine";
pub const WIND_DIRECTION: &str = "         winddirection";
pub const WIND_SPEED: &str = "windspeed";

/// Feature columns in the order the predictor consumes them.
pub const FEATURE_COLUMNS: [&str; 7] = [
    PRESSURE,
    DEWPOINT,
    HUMIDITY,
    CLOUD,
    SUNSHINE,
    WIND_DIRECTION,
    WIND_SPEED,
];

/// Name of the label column appended after a batch prediction.
pub const PREDICTION_COLUMN: &str = "Prediction";

/// One record of the seven weather measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRow {
    /// hPa
    pub pressure: f64,
    /// °C
    pub dewpoint: f64,
    /// %
    pub humidity: f64,
    /// %
    pub cloud: f64,
    /// hours
    pub sunshine: f64,
    /// degrees
    pub wind_direction: f64,
    /// km/h
    pub wind_speed: f64,
}

impl FeatureRow {
    /// Values in [`FEATURE_COLUMNS`] order.
    pub fn to_array(&self) -> [f64; 7] {
        [
            self.pressure,
            self.dewpoint,
            self.humidity,
            self.cloud,
            self.sunshine,
            self.wind_direction,
            self.wind_speed,
        ]
    }

    pub fn from_array(values: [f64; 7]) -> Self {
        let [pressure, dewpoint, humidity, cloud, sunshine, wind_direction, wind_speed] = values;
        Self {
            pressure,
            dewpoint,
            humidity,
            cloud,
            sunshine,
            wind_direction,
            wind_speed,
        }
    }
}
