//! Score verdicts and the fixed threshold policy.

use serde::{Deserialize, Serialize};

/// Confidence at or above which a message is MALICIOUS outright.
pub const MALICIOUS_THRESHOLD: f64 = 0.85;

/// Confidence at or below which a message is SAFE outright.
pub const SAFE_THRESHOLD: f64 = 0.20;

/// Coarse classification of a message derived from the scorer's
/// confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScoreVerdict {
    /// Confidence at or below [`SAFE_THRESHOLD`].
    Safe,
    /// Between the thresholds; requires adjudication.
    Uncertain,
    /// Confidence at or above [`MALICIOUS_THRESHOLD`].
    Malicious,
}

impl ScoreVerdict {
    /// Applies the fixed threshold policy to a confidence value.
    ///
    /// The thresholds are not configurable per call; both boundary
    /// values are inclusive toward their adjacent verdicts.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= MALICIOUS_THRESHOLD {
            Self::Malicious
        } else if confidence <= SAFE_THRESHOLD {
            Self::Safe
        } else {
            Self::Uncertain
        }
    }
}

impl std::fmt::Display for ScoreVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Safe => write!(f, "SAFE"),
            Self::Uncertain => write!(f, "UNCERTAIN"),
            Self::Malicious => write!(f, "MALICIOUS"),
        }
    }
}

/// A scored message: verdict plus the raw confidence it came from.
///
/// Ephemeral; created per request and consumed by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Verdict derived from the confidence.
    pub verdict: ScoreVerdict,
    /// Probability in `[0, 1]` that the message is adversarial.
    pub confidence: f64,
}

impl Score {
    /// Builds a score from a raw confidence value.
    pub fn from_confidence(confidence: f64) -> Self {
        Self {
            verdict: ScoreVerdict::from_confidence(confidence),
            confidence,
        }
    }

    /// The degraded score used when the scoring service fails:
    /// UNCERTAIN with confidence 0, which routes into adjudication.
    pub fn inconclusive() -> Self {
        Self {
            verdict: ScoreVerdict::Uncertain,
            confidence: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_confidence_is_malicious() {
        assert_eq!(ScoreVerdict::from_confidence(0.9), ScoreVerdict::Malicious);
        assert_eq!(ScoreVerdict::from_confidence(1.0), ScoreVerdict::Malicious);
    }

    #[test]
    fn test_low_confidence_is_safe() {
        assert_eq!(ScoreVerdict::from_confidence(0.1), ScoreVerdict::Safe);
        assert_eq!(ScoreVerdict::from_confidence(0.0), ScoreVerdict::Safe);
    }

    #[test]
    fn test_middle_confidence_is_uncertain() {
        assert_eq!(ScoreVerdict::from_confidence(0.5), ScoreVerdict::Uncertain);
        assert_eq!(
            ScoreVerdict::from_confidence(0.201),
            ScoreVerdict::Uncertain
        );
        assert_eq!(
            ScoreVerdict::from_confidence(0.849),
            ScoreVerdict::Uncertain
        );
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        // 0.85 is MALICIOUS, 0.20 is SAFE.
        assert_eq!(ScoreVerdict::from_confidence(0.85), ScoreVerdict::Malicious);
        assert_eq!(ScoreVerdict::from_confidence(0.20), ScoreVerdict::Safe);
    }

    #[test]
    fn test_verdict_wire_format() {
        assert_eq!(
            serde_json::to_string(&ScoreVerdict::Malicious).unwrap(),
            "\"MALICIOUS\""
        );
        assert_eq!(
            serde_json::from_str::<ScoreVerdict>("\"SAFE\"").unwrap(),
            ScoreVerdict::Safe
        );
    }

    #[test]
    fn test_inconclusive_score() {
        let score = Score::inconclusive();
        assert_eq!(score.verdict, ScoreVerdict::Uncertain);
        assert_eq!(score.confidence, 0.0);
    }

    #[test]
    fn test_score_from_confidence() {
        let score = Score::from_confidence(0.92);
        assert_eq!(score.verdict, ScoreVerdict::Malicious);
        assert!((score.confidence - 0.92).abs() < f64::EPSILON);
    }
}
