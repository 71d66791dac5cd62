//! TOML configuration for the simulator driver.
//!
//! All settings have defaults so the driver runs without any config file.
//! The default landmark table and command sequence reproduce the built-in
//! demo environment: eight landmarks on a small grid (two of them sharing a
//! position) and an 18-command drive pattern.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::types::{Landmark, LandmarkMap, Pose2D, Twist2D};

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default = "default_landmarks")]
    pub landmarks: Vec<LandmarkEntry>,
    #[serde(default = "default_commands")]
    pub commands: Vec<CommandEntry>,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            landmarks: default_landmarks(),
            commands: default_commands(),
            output: OutputConfig::default(),
        }
    }
}

/// `[simulation]` section: time step and start pose.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Time step in seconds
    #[serde(default = "default_dt")]
    pub dt: f32,
    /// Start X position in meters
    #[serde(default)]
    pub start_x: f32,
    /// Start Y position in meters
    #[serde(default)]
    pub start_y: f32,
    /// Start heading in radians
    #[serde(default)]
    pub start_theta: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dt: default_dt(),
            start_x: 0.0,
            start_y: 0.0,
            start_theta: 0.0,
        }
    }
}

/// `[[landmarks]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct LandmarkEntry {
    pub id: String,
    pub x: f32,
    pub y: f32,
}

/// `[[commands]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandEntry {
    pub linear: f32,
    pub angular: f32,
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory for CSV export
    #[serde(default = "default_output_dir")]
    pub dir: String,
    /// Also write the full trace as trace.json
    #[serde(default)]
    pub json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            json: false,
        }
    }
}

impl Config {
    /// Load configuration from an explicit path, or fall back to
    /// `yantra-sim.toml` in the working directory, or defaults.
    ///
    /// Parse and read failures are logged and fall back to defaults rather
    /// than aborting the run.
    pub fn load(path: Option<&Path>) -> Config {
        match path {
            Some(path) => match fs::read_to_string(path) {
                Ok(contents) => match basic_toml::from_str(&contents) {
                    Ok(cfg) => {
                        log::info!("Loaded config from {}", path.display());
                        cfg
                    }
                    Err(e) => {
                        log::warn!("Failed to parse config {}: {}", path.display(), e);
                        Config::default()
                    }
                },
                Err(e) => {
                    log::warn!("Failed to read config {}: {}", path.display(), e);
                    Config::default()
                }
            },
            None => {
                if let Ok(contents) = fs::read_to_string("yantra-sim.toml") {
                    if let Ok(cfg) = basic_toml::from_str(&contents) {
                        log::info!("Loaded config from yantra-sim.toml");
                        return cfg;
                    }
                }
                Config::default()
            }
        }
    }

    /// Start pose from the `[simulation]` section.
    pub fn initial_pose(&self) -> Pose2D {
        Pose2D::new(
            self.simulation.start_x,
            self.simulation.start_y,
            self.simulation.start_theta,
        )
    }

    /// Build the landmark table, preserving entry order.
    pub fn landmark_map(&self) -> LandmarkMap {
        self.landmarks
            .iter()
            .map(|entry| Landmark::new(entry.id.clone(), entry.x, entry.y))
            .collect()
    }

    /// Build the command sequence.
    pub fn command_list(&self) -> Vec<Twist2D> {
        self.commands
            .iter()
            .map(|entry| Twist2D::new(entry.linear, entry.angular))
            .collect()
    }
}

fn default_dt() -> f32 {
    1.0
}

fn default_output_dir() -> String {
    "out".to_string()
}

fn default_landmarks() -> Vec<LandmarkEntry> {
    // Demo grid; "d" and "e" share a position, so their equal-range
    // observations resolve by table order.
    [
        ("a", 1.0, 1.0),
        ("b", 2.0, 1.0),
        ("c", 3.0, 1.0),
        ("d", 1.0, 2.0),
        ("e", 1.0, 2.0),
        ("f", 1.0, 3.0),
        ("g", 2.0, 2.0),
        ("h", 3.0, 3.0),
    ]
    .into_iter()
    .map(|(id, x, y)| LandmarkEntry {
        id: id.to_string(),
        x,
        y,
    })
    .collect()
}

fn default_commands() -> Vec<CommandEntry> {
    // Demo drive pattern: forward bursts with alternating turns
    [
        (0.4, 0.0),
        (0.1, 0.8),
        (0.5, 0.5),
        (0.2, 0.3),
        (0.2, 0.4),
        (0.4, -1.2),
        (0.2, -0.6),
        (0.1, 0.4),
        (0.4, 0.5),
        (0.2, 0.2),
        (0.1, 0.1),
        (0.3, 0.0),
        (0.4, 0.0),
        (0.2, -1.4),
        (0.2, -0.2),
        (0.5, -1.0),
        (0.5, 0.0),
        (0.5, 0.0),
    ]
    .into_iter()
    .map(|(linear, angular)| CommandEntry { linear, angular })
    .collect()
}
