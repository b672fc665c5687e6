use anyhow::{Context, Result};
use polyarea::Orientation;
use serde::Serialize;

/// Final result of one run, rendered either as text or JSON.
#[derive(Debug, Serialize)]
pub struct AreaReport {
    pub input: String,
    pub vertices: usize,
    pub signed_area: f64,
    pub orientation: &'static str,
}

impl AreaReport {
    pub fn new(input: String, vertices: usize, signed_area: f64, orientation: Orientation) -> Self {
        Self {
            input,
            vertices,
            signed_area,
            orientation: orientation.as_str(),
        }
    }

    /// Two-line summary; `{:?}` keeps the decimal point on integral areas.
    pub fn render_text(&self) -> String {
        format!(
            "The surface area of the polygon specified in {}\nis {:?} magical, dimensionless units.\n",
            self.input, self.signed_area
        )
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serializing area report")
    }
}
