use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_CARD_WIDTH, DEFAULT_REPETITIONS, DEFAULT_SPIN_DURATION_SECS,
    DEFAULT_TARGET_REPETITION, MAX_REPETITIONS, MAX_SPIN_DURATION_SECS, MIN_REPETITIONS,
    MIN_SPIN_DURATION_SECS,
};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Application configuration persisted to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfigData {
    /// Length of the spin animation in seconds
    #[serde(default = "default_spin_duration_secs")]
    pub spin_duration_secs: f32,

    /// Strip tile width in pixels, including spacing
    #[serde(default = "default_card_width")]
    pub card_width: f32,

    /// How many times the catalogue is repeated in the strip
    #[serde(default = "default_repetitions")]
    pub repetitions: usize,

    /// Repetition the strip lands in (must not be the first or last)
    #[serde(default = "default_target_repetition")]
    pub target_repetition: usize,

    /// Whether the full catalogue grids are shown below the strip
    #[serde(default = "default_show_catalogue")]
    pub show_catalogue: bool,

    /// Fixed seed for reproducible picks (entropy when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
}

fn default_spin_duration_secs() -> f32 {
    DEFAULT_SPIN_DURATION_SECS
}

fn default_card_width() -> f32 {
    DEFAULT_CARD_WIDTH
}

fn default_repetitions() -> usize {
    DEFAULT_REPETITIONS
}

fn default_target_repetition() -> usize {
    DEFAULT_TARGET_REPETITION
}

fn default_show_catalogue() -> bool {
    true
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            spin_duration_secs: default_spin_duration_secs(),
            card_width: default_card_width(),
            repetitions: default_repetitions(),
            target_repetition: default_target_repetition(),
            show_catalogue: default_show_catalogue(),
            rng_seed: None,
        }
    }
}

impl AppConfigData {
    /// Check values that would break the strip arithmetic
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_SPIN_DURATION_SECS..=MAX_SPIN_DURATION_SECS).contains(&self.spin_duration_secs) {
            return Err(format!(
                "spin_duration_secs must be between {} and {}, got {}",
                MIN_SPIN_DURATION_SECS, MAX_SPIN_DURATION_SECS, self.spin_duration_secs
            ));
        }
        if !self.card_width.is_finite() || self.card_width <= 0.0 {
            return Err(format!("card_width must be positive, got {}", self.card_width));
        }
        if !(MIN_REPETITIONS..=MAX_REPETITIONS).contains(&self.repetitions) {
            return Err(format!(
                "repetitions must be between {} and {}, got {}",
                MIN_REPETITIONS, MAX_REPETITIONS, self.repetitions
            ));
        }
        if self.target_repetition == 0 || self.target_repetition >= self.repetitions - 1 {
            return Err(format!(
                "target_repetition must be between 1 and {}, got {}",
                self.repetitions - 2,
                self.target_repetition
            ));
        }
        Ok(())
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: get_config_path(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Get the path to the config file (platform-appropriate location)
fn get_config_path() -> PathBuf {
    crate::paths::config_file()
}

/// Parse and validate config file contents
pub fn parse_config(json: &str) -> Result<AppConfigData, String> {
    let data: AppConfigData =
        serde_json::from_str(json).map_err(|e| format!("Configuration file was corrupted: {}", e))?;
    data.validate()
        .map_err(|e| format!("Configuration file has an invalid value: {}", e))?;
    Ok(data)
}

/// Result of loading config from disk
struct LoadConfigResult {
    config: AppConfig,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

/// Load configuration from disk
fn load_config() -> LoadConfigResult {
    let config_path = get_config_path();

    let (data, reset_reason) = if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(json) => match parse_config(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    (data, None)
                }
                Err(reason) => {
                    warn!("{}", reason);
                    (AppConfigData::default(), Some(reason))
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    AppConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (AppConfigData::default(), None)
    };

    LoadConfigResult {
        config: AppConfig {
            data,
            config_path,
            dirty: false,
        },
        reset_reason,
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config();
    config.data = result.config.data;
    config.config_path = result.config.config_path;
    config.dirty = result.config.dirty;

    // Set notification if config was reset due to an error
    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                save_config_system.run_if(on_message::<SaveConfigRequest>),
            );
    }
}
