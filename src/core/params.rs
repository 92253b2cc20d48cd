use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::DEFAULT_INDEX_WIDTH;

/// Run parameters suitable for JSON presets and the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeParams {
    /// Minimum number of digits in output names; wider indices are never truncated
    pub index_width: usize,
    /// If true, log and record per-file failures instead of aborting the run
    pub continue_on_error: bool,
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            index_width: DEFAULT_INDEX_WIDTH,
            continue_on_error: false,
        }
    }
}

impl NormalizeParams {
    pub fn validate(&self) -> Result<()> {
        if self.index_width == 0 {
            return Err(Error::InvalidArgument {
                arg: "index_width",
                value: self.index_width.to_string(),
            });
        }
        Ok(())
    }
}
