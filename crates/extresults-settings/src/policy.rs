/// Which diagnostics turn a run into a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    /// Any diagnostic fails.
    Any,
    /// Only catastrophic diagnostics fail; the rest warn.
    Catastrophic,
    /// Diagnostics warn but never fail.
    Never,
}

impl FailOn {
    pub const fn as_str(self) -> &'static str {
        match self {
            FailOn::Any => "any",
            FailOn::Catastrophic => "catastrophic",
            FailOn::Never => "never",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub profile: String,
    /// `None` lets the caller derive one from the results file.
    pub data_source: Option<String>,
    pub fail_on: FailOn,
    pub max_diagnostics: usize,
}
