//! Text transform results.

use serde::{Deserialize, Serialize};

/// One rewrite of the same input per named style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RephraseStyles {
    #[serde(rename = "Formal")]
    pub formal: String,
    #[serde(rename = "Creative")]
    pub creative: String,
    #[serde(rename = "Concise")]
    pub concise: String,
}

/// Output of the grammar pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarCorrection {
    pub corrected: String,
    pub message: String,
}

/// Output of the summarize operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub summary: String,
}

/// Output of the tone transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneTransform {
    pub transformed: String,
}

/// Register a tone transform rewrites towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneTarget {
    Formal,
    Casual,
    Concise,
}

impl Default for ToneTarget {
    fn default() -> Self {
        Self::Formal
    }
}

impl ToneTarget {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Casual => "casual",
            Self::Concise => "concise",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "formal" => Some(Self::Formal),
            "casual" => Some(Self::Casual),
            "concise" => Some(Self::Concise),
            _ => None,
        }
    }

    /// Resolve a requested tone.
    ///
    /// A missing tone falls back to [`ToneTarget::Formal`]; an unrecognised one
    /// yields `None`, which callers treat as a pass-through.
    pub fn resolve(requested: Option<&str>) -> Option<Self> {
        requested.map_or(Some(Self::default()), Self::from_str)
    }
}
