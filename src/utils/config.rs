//! Walk configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::Coordinate;
use crate::validation::validate_coordinate;

/// Tunable parameters for the walk companion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Distance walked between consecutive paw prints (meters)
    pub paw_spacing_m: f64,
    /// Upper bound on live paw prints before the oldest is evicted
    pub max_paw_prints: usize,
    /// Distance at which a discovered landmark counts as nearby (meters)
    pub nearby_threshold_m: f64,
    /// Guidance stops once the walker is this close to the target (meters)
    pub min_guide_distance_m: f64,
    /// Search radius handed to the places collaborator (meters)
    pub places_search_radius_m: f64,
    /// Number of circle waypoints in a circular walk plan
    pub circle_waypoint_count: usize,
    /// Default circular walk radius (kilometers)
    pub default_walk_radius_km: f64,
    /// Position used until the first geolocation fix arrives
    pub fallback_position: Coordinate,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            paw_spacing_m: 10.0,
            max_paw_prints: 100,
            nearby_threshold_m: 60.0,
            min_guide_distance_m: 10.0,
            places_search_radius_m: 4000.0,
            circle_waypoint_count: 8,
            default_walk_radius_km: 2.0,
            fallback_position: Coordinate::new(53.0793, 8.8017),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    IoError {
        message: String,
    },
    SerializationError {
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{}' = '{}': {}", parameter, value, reason)
            }
            ConfigError::IoError { message } => {
                write!(f, "I/O error: {}", message)
            }
            ConfigError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl WalkConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().display().to_string();
        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;
        let config: WalkConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().display().to_string();
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to serialize config: {}", e),
            })?;
        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })
    }

    /// Check every parameter against its valid range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.paw_spacing_m.is_finite() || self.paw_spacing_m <= 0.0 {
            return Err(invalid(
                "paw_spacing_m",
                self.paw_spacing_m,
                "Paw spacing must be positive",
            ));
        }
        if self.max_paw_prints == 0 {
            return Err(invalid(
                "max_paw_prints",
                self.max_paw_prints,
                "At least one paw print must be allowed",
            ));
        }
        if !self.nearby_threshold_m.is_finite() || self.nearby_threshold_m <= 0.0 {
            return Err(invalid(
                "nearby_threshold_m",
                self.nearby_threshold_m,
                "Nearby threshold must be positive",
            ));
        }
        if !self.min_guide_distance_m.is_finite() || self.min_guide_distance_m < 0.0 {
            return Err(invalid(
                "min_guide_distance_m",
                self.min_guide_distance_m,
                "Guide distance must be non-negative",
            ));
        }
        if !self.places_search_radius_m.is_finite() || self.places_search_radius_m <= 0.0 {
            return Err(invalid(
                "places_search_radius_m",
                self.places_search_radius_m,
                "Search radius must be positive",
            ));
        }
        if self.circle_waypoint_count == 0 {
            return Err(invalid(
                "circle_waypoint_count",
                self.circle_waypoint_count,
                "A circular plan needs at least one waypoint",
            ));
        }
        if !self.default_walk_radius_km.is_finite() || self.default_walk_radius_km <= 0.0 {
            return Err(invalid(
                "default_walk_radius_km",
                self.default_walk_radius_km,
                "Walk radius must be positive",
            ));
        }
        validate_coordinate(&self.fallback_position).map_err(|e| ConfigError::InvalidParameter {
            parameter: "fallback_position".to_string(),
            value: format!(
                "({}, {})",
                self.fallback_position.lat, self.fallback_position.lng
            ),
            reason: e.to_string(),
        })
    }
}

fn invalid(parameter: &str, value: impl fmt::Display, reason: &str) -> ConfigError {
    ConfigError::InvalidParameter {
        parameter: parameter.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
