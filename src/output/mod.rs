//! Output folder management for analysis artifacts.
//!
//! A thin collaborator around the project's on-disk layout: fixed data,
//! script and output folders, plus one output subfolder per analysis
//! iteration. The analysis components themselves never touch the file
//! system; callers pass the iteration directory to whatever export layer
//! they use.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::Result;

const FOLDERS: [&str; 4] = [
    "00_Data/Original Data",
    "00_Data/Prepared Data",
    "01_Scripts",
    "02_Outputs",
];

/// Project folder layout, keyed by an iteration identifier.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    iteration: String,
    root: PathBuf,
}

impl OutputLayout {
    /// Layout rooted at the current working directory.
    pub fn new(iteration: impl Into<String>) -> Self {
        Self::with_root(iteration, ".")
    }

    /// Layout rooted at an explicit directory.
    pub fn with_root(iteration: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        OutputLayout {
            iteration: iteration.into(),
            root: root.into(),
        }
    }

    /// The iteration identifier this layout was created with.
    pub fn iteration(&self) -> &str {
        &self.iteration
    }

    /// Create the fixed project folders. Folders that already exist are
    /// left untouched.
    pub fn create_folder_structure(&self) -> Result<()> {
        for folder in FOLDERS {
            fs::create_dir_all(self.root.join(folder))?;
        }
        Ok(())
    }

    /// Directory for this layout's iteration, created if absent.
    pub fn iteration_dir(&self) -> Result<PathBuf> {
        self.iteration_dir_for(&self.iteration)
    }

    /// Directory for an arbitrary iteration, created if absent. Calling
    /// this repeatedly for the same iteration is harmless.
    pub fn iteration_dir_for(&self, iteration: &str) -> Result<PathBuf> {
        let path = self.root.join("02_Outputs").join(iteration);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Root directory of the layout.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
