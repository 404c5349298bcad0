use crate::model::{ExtResultsConfigV1, SCHEMA_CONFIG_V1};
use crate::policy::{EffectiveConfig, FailOn};
use crate::presets::{self, DEFAULT_PROFILE, PROFILES};
use anyhow::Context;

/// Values supplied on the command line. Each one wins over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub data_source: Option<String>,
    pub max_diagnostics: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: ExtResultsConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref() {
        if schema != SCHEMA_CONFIG_V1 {
            anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
        }
    }

    let profile = overrides
        .profile
        .or(cfg.profile)
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

    let mut effective = presets::preset(&profile)
        .with_context(|| format!("unknown profile: {profile} (expected {})", PROFILES.join("|")))?;

    effective.data_source = overrides.data_source.or(cfg.data_source);

    if let Some(md) = overrides.max_diagnostics.or(cfg.max_diagnostics) {
        effective.max_diagnostics = md as usize;
    }

    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s).context("invalid fail_on")?;
    }

    Ok(ResolvedConfig { effective })
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "any" => Ok(FailOn::Any),
        "catastrophic" => Ok(FailOn::Catastrophic),
        "never" => Ok(FailOn::Never),
        other => anyhow::bail!("unknown fail_on: {other} (expected any|catastrophic|never)"),
    }
}
