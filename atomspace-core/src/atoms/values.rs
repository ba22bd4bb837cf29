//! Truth, attention and scalar values attached to atoms.

use serde::{Deserialize, Serialize};

/// Simple truth value: a strength and the confidence held in it.
///
/// Both components live in `[0, 1]`. A confidence of zero means "no evidence";
/// such a value contributes nothing when merged into another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TruthValue {
    /// Probability / degree of truth
    pub strength: f64,
    /// Certainty in the strength value
    pub confidence: f64,
}

impl TruthValue {
    /// Default tolerance for [`TruthValue::approx_eq`].
    pub const EPSILON: f64 = 1e-4;

    /// Create a truth value, clamping both components into `[0, 1]`.
    pub fn new(strength: f64, confidence: f64) -> Self {
        Self {
            strength: strength.clamp(0.0, 1.0),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// This value with both components clamped into `[0, 1]`.
    pub fn normalized(self) -> Self {
        Self::new(self.strength, self.confidence)
    }

    /// Unknown: strength 0.5 with no confidence.
    pub fn unknown() -> Self {
        Self {
            strength: 0.5,
            confidence: 0.0,
        }
    }

    /// Certainly true.
    pub fn certain() -> Self {
        Self {
            strength: 1.0,
            confidence: 1.0,
        }
    }

    /// Certainly false.
    pub fn impossible() -> Self {
        Self {
            strength: 0.0,
            confidence: 1.0,
        }
    }

    /// Merge two truth values by confidence-weighted average.
    ///
    /// Strength is the confidence-weighted mean of both strengths; confidence
    /// is the sum of both confidences, capped at 1. Two zero-confidence values
    /// merge to [`TruthValue::unknown`].
    pub fn merge(&self, other: &TruthValue) -> TruthValue {
        let total_conf = self.confidence + other.confidence;
        if total_conf == 0.0 {
            return Self::unknown();
        }

        let strength =
            (self.strength * self.confidence + other.strength * other.confidence) / total_conf;
        TruthValue {
            strength,
            confidence: total_conf.min(1.0),
        }
    }

    /// Compare both components within `epsilon`.
    pub fn approx_eq(&self, other: &TruthValue, epsilon: f64) -> bool {
        (self.strength - other.strength).abs() < epsilon
            && (self.confidence - other.confidence).abs() < epsilon
    }
}

impl Default for TruthValue {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Attention value (importance metadata).
///
/// Stored and overwritable; no allocation policy acts on it here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AttentionValue {
    /// Short-term importance
    pub sti: f64,
    /// Long-term importance
    pub lti: f64,
    /// Very long-term importance flag
    pub vlti: bool,
}

impl AttentionValue {
    pub fn new(sti: f64, lti: f64, vlti: bool) -> Self {
        Self { sti, lti, vlti }
    }
}

/// Optional scalar payload of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<&str> for NodeValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for NodeValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for NodeValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for NodeValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for NodeValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl std::fmt::Display for NodeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}
