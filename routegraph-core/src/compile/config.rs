use serde::{Deserialize, Serialize};

use crate::model::{Canonicalizer, Precision};

/// Settings shared by compilation and every query on the compiled graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Rounding applied before coordinates become node keys
    pub precision: Precision,
}

impl GraphConfig {
    pub fn with_precision(precision: Precision) -> Self {
        Self { precision }
    }

    pub fn canonicalizer(&self) -> Canonicalizer {
        Canonicalizer::new(self.precision)
    }
}
