// Render settings
// Beyond the fixed cube, this is the one tunable surface: it restates the
// built-in constants and lets a page override them at load time only.
// Loaded from an optional JSON block in the page:
//
//   <script id="cube-config" type="application/json">{ "angle_step": 0.02 }</script>
//
// Missing fields fall back to the defaults below; a missing block means all
// defaults.

use serde::Deserialize;

use crate::error::RenderError;

pub const CONFIG_ELEMENT_ID: &str = "cube-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub canvas_id: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub z_near: f32,
    pub z_far: f32,
    /// How far the cube is pushed down the -Z axis.
    pub camera_distance: f32,
    /// Radians added to the angle per frame (not per second).
    pub angle_step: f64,
    /// X rotation rate relative to the Y rotation.
    pub tumble_ratio: f64,
    pub clear_color: [f32; 4],
    pub log_level: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_id: "glCanvas".to_string(),
            canvas_width: 640,
            canvas_height: 480,
            fov_y: std::f32::consts::FRAC_PI_4,
            z_near: 0.1,
            z_far: 100.0,
            camera_distance: 6.0,
            angle_step: 0.01,
            tumble_ratio: 0.7,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            log_level: "info".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn from_json(text: &str) -> Result<Self, RenderError> {
        serde_json::from_str(text).map_err(|e| RenderError::Config(e.to_string()))
    }

    /// Reads the config block from the current document. No block means
    /// defaults.
    pub fn from_document() -> Result<Self, RenderError> {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(text) if !text.trim().is_empty() => Self::from_json(&text),
            _ => Ok(Self::default()),
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
