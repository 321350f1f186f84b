use serde::{Deserialize, Serialize};

use crate::core::{ChartConfiguration, ChartProjection};
use crate::error::{ChartError, ChartResult};
use crate::render::ChartRenderer;

use super::ChartWorkbench;

pub const CHART_CONFIGURATION_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfigurationJsonContractV1 {
    pub schema_version: u32,
    pub configuration: ChartConfiguration,
}

impl ChartConfiguration {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartConfigurationJsonContractV1 {
            schema_version: CHART_CONFIGURATION_JSON_SCHEMA_V1,
            configuration: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidConfiguration(format!(
                "failed to serialize configuration contract v1: {e}"
            ))
        })
    }

    /// Accepts either the bare configuration object or the v1 contract.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(configuration) = serde_json::from_str::<ChartConfiguration>(input) {
            return Ok(configuration);
        }
        let payload: ChartConfigurationJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidConfiguration(format!(
                    "failed to parse configuration json payload: {e}"
                ))
            })?;
        if payload.schema_version != CHART_CONFIGURATION_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidConfiguration(format!(
                "unsupported configuration schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.configuration)
    }
}

impl ChartProjection {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<R: ChartRenderer> ChartWorkbench<R> {
    /// Current configuration as a v1 contract, `None` when nothing is
    /// configured.
    pub fn configuration_json_contract_v1_pretty(&self) -> ChartResult<Option<String>> {
        self.configuration
            .as_ref()
            .map(ChartConfiguration::to_json_contract_v1_pretty)
            .transpose()
    }

    pub fn projection_json_pretty(&self) -> ChartResult<String> {
        self.projection().to_json_pretty()
    }
}
