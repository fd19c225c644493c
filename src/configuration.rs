use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::holidayerror::Result;
use crate::time::calendar::holidayregistry::HolidayRegistry;

#[derive(Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrecomputationJsonProp {
    pub apply: bool,
    #[serde(default)]
    pub start_year: i32,
    #[serde(default)]
    pub end_year: i32
}

#[derive(Deserialize, Default)]
struct ConfigurationJsonProp {
    #[serde(default)]
    precomputation: PrecomputationJsonProp
}

/// Registry settings, e.g.
///
/// ```json
/// { "precomputation": { "apply": true, "start_year": 2000, "end_year": 2030 } }
/// ```
#[derive(Default, Clone, Copy, Debug)]
pub struct Configuration {
    precomputation: PrecomputationJsonProp
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn with_precomputation(start_year: i32, end_year: i32) -> Configuration {
        Configuration {
            precomputation: PrecomputationJsonProp { apply: true, start_year, end_year }
        }
    }

    pub fn precomputation(&self) -> PrecomputationJsonProp {
        self.precomputation
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        info!(path = %file_path.as_ref().display(), "loaded holiday configuration");
        Ok(Configuration { precomputation: json_prop.precomputation })
    }

    pub fn from_json_str(json: &str) -> Result<Configuration> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        Ok(Configuration { precomputation: json_prop.precomputation })
    }

    /// Creates a registry, generating the configured years up front.
    pub fn build_registry(&self) -> Result<HolidayRegistry> {
        let mut registry = HolidayRegistry::new()?;
        if self.precomputation.apply {
            let PrecomputationJsonProp { start_year, end_year, .. } = self.precomputation;
            registry.preload(start_year, end_year)?;
            info!(start_year, end_year, count = registry.len(), "precomputed holidays");
        }
        Ok(registry)
    }
}
