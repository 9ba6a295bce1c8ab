//! TOML batch definitions.
//!
//! A batch file lists stores and couriers; couriers name the stores they
//! may serve:
//!
//! ```toml
//! [[stores]]
//! name = "Store 1"
//! deliveries = [50, 50, 50]
//! commission_rate = 0.05
//!
//! [[couriers]]
//! name = "Motoboy 1"
//! fixed_fee = 2
//! stores = ["Store 1"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::dispatcher::Batch;
use crate::error::{DispatchError, Result};
use crate::models::{Courier, Store};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default)]
    pub stores: Vec<StoreConfig>,
    #[serde(default)]
    pub couriers: Vec<CourierConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub name: String,
    #[serde(default)]
    pub deliveries: Vec<f64>,
    pub commission_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierConfig {
    pub name: String,
    pub fixed_fee: f64,
    pub stores: Vec<String>,
}

impl BatchConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded batch file");
        Self::from_toml_str(&content)
    }

    /// Resolves the definition into domain values.
    ///
    /// Every store a courier names must be defined in the same file.
    pub fn build(&self) -> Result<Batch> {
        let known: HashSet<&str> = self.stores.iter().map(|s| s.name.as_str()).collect();

        for courier in &self.couriers {
            if let Some(unknown) = courier.stores.iter().find(|s| !known.contains(s.as_str())) {
                return Err(DispatchError::config(format!(
                    "courier '{}' references undefined store '{}'",
                    courier.name, unknown
                )));
            }
        }

        let stores = self
            .stores
            .iter()
            .map(|s| Store::new(&s.name, s.deliveries.clone(), s.commission_rate))
            .collect();
        let couriers = self
            .couriers
            .iter()
            .map(|c| Courier::new(&c.name, c.fixed_fee, c.stores.iter().cloned()))
            .collect();

        Ok(Batch::new(stores, couriers))
    }
}
