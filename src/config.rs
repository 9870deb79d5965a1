//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`PICNIC_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`PICNIC_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // PICNIC_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("PICNIC_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Picnic - Rainbow Cookie Scene".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Starting eye position [x, y, z]
    pub eye: [f32; 3],
    /// Starting look-at point [x, y, z]
    pub look_at: [f32; 3],
    /// Field of view in degrees
    pub fov: f32,
    /// Lower FOV slider bound in degrees
    pub fov_min: f32,
    /// Upper FOV slider bound in degrees
    pub fov_max: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 3.0, 6.0],
            look_at: [0.0, 0.0, 0.0],
            fov: 45.0,
            fov_min: 20.0,
            fov_max: 90.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Optional scene RON file; the built-in picnic scene is used when unset
    /// or unloadable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Directory searched for texture files
    pub assets_dir: String,
    /// Seed for the built-in scene's sprinkle placement
    pub sprinkle_seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            path: None,
            assets_dir: "assets/textures".to_string(),
            sprinkle_seed: 7,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Per-frame camera blend factor toward the goal waypoint
    pub lerp_factor: f32,
    /// Mouse orbit sensitivity
    pub orbit_sensitivity: f32,
    /// Scroll dolly speed
    pub dolly_speed: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            lerp_factor: 0.1,
            orbit_sensitivity: 0.005,
            dolly_speed: 0.5,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Key light direction [x, y, z]
    pub light_dir: [f32; 3],
    /// Ambient light strength
    pub ambient_strength: f32,
    /// Diffuse light strength
    pub diffuse_strength: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.08, 0.09, 0.12, 1.0],
            // Derived from the original key light at (2, 2, 2)
            light_dir: [0.577, 0.577, 0.577],
            ambient_strength: 0.45,
            diffuse_strength: 0.7,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Show the camera control panel
    pub show_panel: bool,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_panel: true,
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
