use crate::error::ConfigError;
use crate::network::NODE_FOOTPRINT;
use serde::{Deserialize, Serialize};

/// Bounds of the area nodes are placed on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub node_count: usize,
    pub surface: Surface,
    pub patient_zero_delay_ms: u64,
    pub scan_delay_ms: u64,
    pub log_capacity: usize,
    /// Fixed RNG seed; entropy is used when absent.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            node_count: crate::DEFAULT_NODE_COUNT,
            surface: Surface::default(),
            patient_zero_delay_ms: crate::PATIENT_ZERO_DELAY_MS,
            scan_delay_ms: crate::SCAN_DELAY_MS,
            log_capacity: crate::LOG_CAPACITY,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_count == 0 {
            return Err(ConfigError::invalid("node_count", "must be at least 1"));
        }
        if self.node_count > crate::NodeId::MAX as usize {
            return Err(ConfigError::invalid("node_count", "exceeds node id range"));
        }
        if self.log_capacity == 0 {
            return Err(ConfigError::invalid("log_capacity", "must be at least 1"));
        }
        if !(self.surface.width.is_finite() && self.surface.height.is_finite()) {
            return Err(ConfigError::invalid("surface", "dimensions must be finite"));
        }
        if self.surface.width < NODE_FOOTPRINT || self.surface.height < NODE_FOOTPRINT {
            return Err(ConfigError::invalid(
                "surface",
                format!("must be at least {}x{} to fit a node", NODE_FOOTPRINT, NODE_FOOTPRINT),
            ));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
