//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`MESHVIEW_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use meshview_mesh::MeshPaths;
use meshview_render::FigureStyle;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Mesh input file locations
    #[serde(default)]
    pub mesh: MeshConfig,
    /// Figure styling
    #[serde(default)]
    pub figure: FigureConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`MESHVIEW_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // MESHVIEW_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("MESHVIEW_").split("__"));

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
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Meshview - 2D FEM Mesh Viewer".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Mesh input file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshConfig {
    /// Points file path
    pub points: String,
    /// Elements file path
    pub elements: String,
    /// Dirichlet file path
    pub dirichlet: String,
    /// Neumann file path
    pub neumann: String,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            points: "points".to_string(),
            elements: "finite_elements".to_string(),
            dirichlet: "dirichlet".to_string(),
            neumann: "neumann".to_string(),
        }
    }
}

impl MeshConfig {
    /// Convert to loader paths
    pub fn to_mesh_paths(&self) -> MeshPaths {
        MeshPaths {
            points: self.points.clone().into(),
            elements: self.elements.clone().into(),
            dirichlet: self.dirichlet.clone().into(),
            neumann: self.neumann.clone().into(),
        }
    }
}

/// Figure styling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Alpha applied to element fills
    pub fill_alpha: f32,
    /// Marker radius as a fraction of the mesh extent
    pub marker_scale: f32,
    /// Outline half-width as a fraction of the mesh extent
    pub edge_width_scale: f32,
    /// Extra view margin around the mesh when fitting
    pub fit_margin: f32,
    /// Show the legend panel
    pub show_legend: bool,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            background_color: [1.0, 1.0, 1.0, 1.0],
            fill_alpha: 0.5,
            marker_scale: 0.008,
            edge_width_scale: 0.0012,
            fit_margin: 0.08,
            show_legend: true,
        }
    }
}

impl FigureConfig {
    /// Convert to a tessellation style
    pub fn to_figure_style(&self) -> FigureStyle {
        FigureStyle {
            fill_alpha: self.fill_alpha,
            marker_scale: self.marker_scale,
            edge_width_scale: self.edge_width_scale,
            ..FigureStyle::default()
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Zoom factor applied per scroll line
    pub zoom_step: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { zoom_step: 1.1 }
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
