//! Per-token sentence boundary flags

use serde::{Deserialize, Serialize};

/// Whether a token starts a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryFlag {
    /// Token begins a new sentence
    Start,
    /// Token continues the current sentence
    Continue,
    /// Token was never examined (skipped excluded token)
    #[default]
    Unset,
}

impl BoundaryFlag {
    /// True only for [`BoundaryFlag::Start`]; unset tokens never start a sentence
    #[inline]
    pub fn is_start(self) -> bool {
        matches!(self, BoundaryFlag::Start)
    }

    /// Tri-state view: `Some(true)` start, `Some(false)` continue, `None` unset
    pub fn as_option(self) -> Option<bool> {
        match self {
            BoundaryFlag::Start => Some(true),
            BoundaryFlag::Continue => Some(false),
            BoundaryFlag::Unset => None,
        }
    }
}

impl From<bool> for BoundaryFlag {
    fn from(starts: bool) -> Self {
        if starts {
            BoundaryFlag::Start
        } else {
            BoundaryFlag::Continue
        }
    }
}
