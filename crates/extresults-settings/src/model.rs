use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Value accepted in the optional `schema` key.
pub const SCHEMA_CONFIG_V1: &str = "extresults.config.v1";

/// `extresults.toml` schema v1.
///
/// Every key is optional; a missing file and an empty file resolve the same way.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ExtResultsConfigV1 {
    /// Optional schema string for tooling (`extresults.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `strict` (default), `lenient` or `audit`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Identifier of the data source the results belong to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,

    /// Which diagnostics fail the run: `any`, `catastrophic` or `never`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// How many diagnostics to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_diagnostics: Option<u32>,
}
