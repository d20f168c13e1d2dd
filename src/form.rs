use std::ops::RangeInclusive;

use crate::data::schema::FeatureRow;

// ---------------------------------------------------------------------------
// Manual input bounds
// ---------------------------------------------------------------------------

pub const PRESSURE_RANGE: RangeInclusive<i32> = 900..=1100;
pub const DEWPOINT_RANGE: RangeInclusive<i32> = 0..=40;
pub const HUMIDITY_RANGE: RangeInclusive<i32> = 0..=100;
pub const CLOUD_RANGE: RangeInclusive<i32> = 0..=100;
pub const SUNSHINE_RANGE: RangeInclusive<f64> = 0.0..=12.0;
pub const WIND_DIRECTION_RANGE: RangeInclusive<i32> = 0..=360;
pub const WIND_SPEED_RANGE: RangeInclusive<i32> = 0..=100;

/// Sidebar form values, one per widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualInput {
    pub pressure: i32,
    pub dewpoint: i32,
    pub humidity: i32,
    pub cloud: i32,
    pub sunshine: f64,
    pub wind_direction: i32,
    pub wind_speed: i32,
}

impl Default for ManualInput {
    fn default() -> Self {
        Self {
            pressure: 1010,
            dewpoint: 10,
            humidity: 50,
            cloud: 40,
            sunshine: 6.0,
            wind_direction: 180,
            wind_speed: 10,
        }
    }
}

fn clamp_i32(v: i32, range: RangeInclusive<i32>) -> i32 {
    v.clamp(*range.start(), *range.end())
}

impl ManualInput {
    /// Copy with every field pulled into its documented range.
    pub fn clamped(&self) -> Self {
        let sunshine = if self.sunshine.is_nan() {
            *SUNSHINE_RANGE.start()
        } else {
            self.sunshine
                .clamp(*SUNSHINE_RANGE.start(), *SUNSHINE_RANGE.end())
        };
        Self {
            pressure: clamp_i32(self.pressure, PRESSURE_RANGE),
            dewpoint: clamp_i32(self.dewpoint, DEWPOINT_RANGE),
            humidity: clamp_i32(self.humidity, HUMIDITY_RANGE),
            cloud: clamp_i32(self.cloud, CLOUD_RANGE),
            sunshine,
            wind_direction: clamp_i32(self.wind_direction, WIND_DIRECTION_RANGE),
            wind_speed: clamp_i32(self.wind_speed, WIND_SPEED_RANGE),
        }
    }

    pub fn to_feature_row(&self) -> FeatureRow {
        let v = self.clamped();
        FeatureRow {
            pressure: v.pressure as f64,
            dewpoint: v.dewpoint as f64,
            humidity: v.humidity as f64,
            cloud: v.cloud as f64,
            sunshine: v.sunshine,
            wind_direction: v.wind_direction as f64,
            wind_speed: v.wind_speed as f64,
        }
    }
}
