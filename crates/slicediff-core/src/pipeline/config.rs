use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for one difference run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiffConfig {
    /// Input root directory containing both image-set subdirectories.
    pub input: PathBuf,
    /// Output root directory for the derived image tree and JSON summaries.
    pub output: PathBuf,
    /// Subdirectory (within the input root) holding the first image set.
    pub subdir_a: String,
    /// Subdirectory (within the input root) holding the second image set.
    pub subdir_b: String,
    /// Filename filter substring for the first set.
    #[serde(default = "default_filter")]
    pub filter_a: String,
    /// Filename filter substring for the second set.
    #[serde(default = "default_filter")]
    pub filter_b: String,
}

fn default_filter() -> String {
    "png".to_string()
}

impl DiffConfig {
    pub fn dir_a(&self) -> PathBuf {
        self.input.join(&self.subdir_a)
    }

    pub fn dir_b(&self) -> PathBuf {
        self.input.join(&self.subdir_b)
    }
}
