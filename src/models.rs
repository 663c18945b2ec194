use serde::{Deserialize, Deserializer, Serialize};

/// One funded water-infrastructure initiative as it appears in the dataset.
///
/// Classification fields missing from a record, or set to `null`, load as
/// empty strings so the record still renders; they just never match a filter
/// on that field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub project_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub cost_million: Option<f64>,
    #[serde(default, deserialize_with = "whole_count")]
    pub beneficiaries: u64,
    #[serde(default, deserialize_with = "percent")]
    pub progress: u32,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl Project {
    /// Progress as a percentage, clamped to 0..=100.
    pub fn progress_percent(&self) -> u8 {
        self.progress.min(100) as u8
    }

    /// Progress as a bar fill fraction in 0.0..=1.0.
    pub fn progress_fraction(&self) -> f32 {
        self.progress_percent() as f32 / 100.0
    }

    pub fn cost(&self) -> f64 {
        self.cost_million.unwrap_or(0.0)
    }

    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Counts and percentages may arrive as floats; round to the nearest whole value.
fn whole_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    Ok(value.max(0.0).round() as u64)
}

fn percent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    Ok(value.clamp(0.0, 100.0).round() as u32)
}
