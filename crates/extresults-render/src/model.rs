#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableLevel {
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableDiagnostic {
    pub level: RenderableLevel,
    pub kind: String,
    pub message: String,
    pub cause: Option<String>,
}

/// How many items of each category made it into the model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderableCounts {
    pub derived_files: u32,
    pub artifacts: u32,
    pub attributes: u32,
    pub reports: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub diagnostics_emitted: u32,
    pub diagnostics_total: u32,
    pub truncated_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdictStatus,
    pub results_file: String,
    pub counts: RenderableCounts,
    pub diagnostics: Vec<RenderableDiagnostic>,
    pub data: RenderableData,
}
