use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("score must be a number, got '{0}'")]
    NotANumber(String),

    #[error("score {0} is outside 0-100")]
    OutOfRange(f64),
}

/// Deepfake probability in percent, always within `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ContextScore(f64);

impl ContextScore {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    pub fn new(percent: f64) -> Result<Self, ScoreError> {
        if !percent.is_finite() || !(Self::MIN..=Self::MAX).contains(&percent) {
            return Err(ScoreError::OutOfRange(percent));
        }
        Ok(Self(percent))
    }

    pub fn percent(&self) -> f64 { self.0 }
}

impl TryFrom<f64> for ContextScore {
    type Error = ScoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> { Self::new(value) }
}

impl FromStr for ContextScore {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('%').trim_end();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| ScoreError::NotANumber(s.trim().to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for ContextScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(ContextScore::new(0.0).is_ok());
        assert!(ContextScore::new(100.0).is_ok());
        assert_eq!(ContextScore::new(100.5), Err(ScoreError::OutOfRange(100.5)));
        assert_eq!(ContextScore::new(-0.1), Err(ScoreError::OutOfRange(-0.1)));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(ContextScore::new(f64::NAN).is_err());
        assert!(ContextScore::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse_accepts_percent_sign() {
        let score: ContextScore = "12.5%".parse().unwrap();
        assert_eq!(score.percent(), 12.5);
        assert_eq!(score.to_string(), "12.5");
    }

    #[test]
    fn test_parse_rejects_text() {
        assert_eq!(
            "high".parse::<ContextScore>(),
            Err(ScoreError::NotANumber("high".into()))
        );
    }
}
