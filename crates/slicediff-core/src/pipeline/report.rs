use serde::Serialize;

/// Pipeline processing stage, used for reporting and progress display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StageName {
    Enumerate,
    Load,
    Grayscale,
    Diff,
    Write,
}

impl std::fmt::Display for StageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enumerate => write!(f, "Enumerating files"),
            Self::Load => write!(f, "Loading images"),
            Self::Grayscale => write!(f, "Converting to grayscale"),
            Self::Diff => write!(f, "Computing differences"),
            Self::Write => write!(f, "Writing output"),
        }
    }
}

/// Outcome record for one pipeline stage. Created fresh by each stage and
/// never mutated after being appended to the run's report sequence.
#[derive(Clone, Debug, Serialize)]
pub struct StageReport {
    pub stage: StageName,
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_set_a: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_set_b: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slice_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written_count: Option<usize>,
}

impl StageReport {
    pub fn new(stage: StageName, ok: bool, message: impl Into<String>) -> Self {
        Self {
            stage,
            ok,
            message: message.into(),
            size_set_a: None,
            size_set_b: None,
            read_count: None,
            converted_count: None,
            slice_count: None,
            written_count: None,
        }
    }

    /// Report for a stage that did no work because an earlier stage failed.
    pub fn skipped(stage: StageName) -> Self {
        Self::new(stage, false, "skipped, a prior stage reported failure")
    }
}

/// Serialized to `run.json`: the ordered audit trail of the whole run.
#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    pub ok: bool,
    pub stages: Vec<StageReport>,
}

/// Progress reporting hooks for the pipeline.
///
/// Implementors can use this to drive progress bars or any other UI
/// feedback. All methods have default no-op implementations.
pub trait ProgressReporter {
    /// A new pipeline stage has started. `total_items` is the number of
    /// work items in this stage (e.g., slice count), if known.
    fn begin_stage(&self, _stage: StageName, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_pipeline` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
