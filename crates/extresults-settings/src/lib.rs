//! Config parsing and profile resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod policy;
mod presets;
mod resolve;

pub use model::{ExtResultsConfigV1, SCHEMA_CONFIG_V1};
pub use policy::{EffectiveConfig, FailOn};
pub use presets::PROFILES;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `extresults.toml` into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ExtResultsConfigV1> {
    let cfg: ExtResultsConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config (profile preset, then file values, then overrides).
pub fn resolve_config(
    cfg: ExtResultsConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg = parse_config_toml(
            r#"
schema = "extresults.config.v1"
profile = "lenient"
data_source = "disk.img"
fail_on = "catastrophic"
max_diagnostics = 50
"#,
        )
        .expect("parse");
        assert_eq!(cfg.profile.as_deref(), Some("lenient"));
        assert_eq!(cfg.data_source.as_deref(), Some("disk.img"));
        assert_eq!(cfg.max_diagnostics, Some(50));
    }

    #[test]
    fn empty_input_is_default() {
        assert_eq!(parse_config_toml("").expect("parse"), ExtResultsConfigV1::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_config_toml("scope = \"repo\"").is_err());
    }
}
