use crate::policy::{EffectiveConfig, FailOn};

pub const DEFAULT_PROFILE: &str = "strict";
pub const PROFILES: &[&str] = &["strict", "lenient", "audit"];

const DEFAULT_MAX_DIAGNOSTICS: usize = 200;

/// Preset profiles are opinionated defaults. Returns `None` for unknown names.
pub fn preset(profile: &str) -> Option<EffectiveConfig> {
    let fail_on = match profile {
        "strict" => FailOn::Any,
        "lenient" => FailOn::Catastrophic,
        "audit" => FailOn::Never,
        _ => return None,
    };
    Some(EffectiveConfig {
        profile: profile.to_string(),
        data_source: None,
        fail_on,
        max_diagnostics: DEFAULT_MAX_DIAGNOSTICS,
    })
}
