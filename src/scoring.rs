//! Password strength scores
//!
//! The scoring algorithm itself lives outside this crate; `Scorer` is the
//! seam it plugs into.

use serde::Serialize;

/// Discrete strength score, always in `0..=4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MIN: Score = Score(0);
    pub const MAX: Score = Score(4);

    /// Clamp any integer into the valid range
    pub fn clamped(raw: i64) -> Self {
        Score(raw.clamp(0, Self::MAX.0 as i64) as u8)
    }

    /// Convert a JS number (NaN maps to the minimum)
    pub fn from_f64(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::MIN;
        }
        Self::clamped(raw.round() as i64)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> u8 {
        score.0
    }
}

/// Estimates password strength
pub trait Scorer {
    fn score(&self, candidate: &str) -> Score;
}

impl<F> Scorer for F
where
    F: Fn(&str) -> Score,
{
    fn score(&self, candidate: &str) -> Score {
        self(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped() {
        assert_eq!(Score::clamped(-3), Score::MIN);
        assert_eq!(Score::clamped(2).value(), 2);
        assert_eq!(Score::clamped(99), Score::MAX);
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Score::from_f64(f64::NAN), Score::MIN);
        assert_eq!(Score::from_f64(3.0).value(), 3);
        assert_eq!(Score::from_f64(f64::INFINITY), Score::MAX);
        assert_eq!(Score::from_f64(-1.0), Score::MIN);
    }

    #[test]
    fn test_closure_scorer() {
        let by_len = |p: &str| Score::clamped(p.len() as i64 / 4);
        assert_eq!(by_len.score(""), Score::MIN);
        assert_eq!(by_len.score("correct horse battery"), Score::MAX);
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Score::clamped(3)).unwrap(), "3");
    }
}
