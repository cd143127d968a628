use std::env;

use serde::{Deserialize, Serialize};

/// Geometry and colours of generated pitch diagrams
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Horizontal distance between mora markers
    pub step: f32,
    pub margin: f32,
    pub high_y: f32,
    pub low_y: f32,
    pub radius: f32,
    pub stroke_width: f32,
    pub color: String,
    /// Print kana under the markers when the pattern carries them
    pub label: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            step: 30.0,
            margin: 10.0,
            high_y: 10.0,
            low_y: 35.0,
            radius: 5.0,
            stroke_width: 2.0,
            color: "#222".to_string(),
            label: true,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        let color = env::var("ACCENT_SVG_COLOR").unwrap_or_else(|_| "#222".to_string());

        Self {
            color,
            ..Self::default()
        }
    }
}
