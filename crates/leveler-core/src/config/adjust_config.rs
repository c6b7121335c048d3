//! Stepping-loop configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HARD_CAP, DEFAULT_STEP_DELAY_MS, STEP_LIMIT_SLACK};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AdjustConfig {
    /// Pause between steps in milliseconds. 0 disables. Default: 0.
    pub step_delay_ms: Option<u64>,
    /// Upper bound on steps for one record. Default: 20000.
    pub hard_cap: Option<u64>,
}

impl AdjustConfig {
    pub fn effective_step_delay(&self) -> Option<Duration> {
        match self.step_delay_ms.unwrap_or(DEFAULT_STEP_DELAY_MS) {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    pub fn effective_hard_cap(&self) -> u64 {
        self.hard_cap.unwrap_or(DEFAULT_HARD_CAP)
    }

    /// `min(|diff| * 2 + 10, hard_cap)`, rounded up to a whole step count.
    pub fn step_limit(&self, diff: f64) -> u64 {
        let natural = (diff.abs() * 2.0 + STEP_LIMIT_SLACK as f64).ceil();
        let cap = self.effective_hard_cap();
        if natural >= cap as f64 {
            cap
        } else {
            natural as u64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_limit_is_twice_distance_plus_slack() {
        let cfg = AdjustConfig::default();
        assert_eq!(cfg.step_limit(3.0), 16);
        assert_eq!(cfg.step_limit(-3.0), 16);
        assert_eq!(cfg.step_limit(2.5), 15);
    }

    #[test]
    fn step_limit_is_capped() {
        let cfg = AdjustConfig {
            hard_cap: Some(50),
            ..Default::default()
        };
        assert_eq!(cfg.step_limit(1_000_000.0), 50);
        assert_eq!(AdjustConfig::default().step_limit(1e300), DEFAULT_HARD_CAP);
    }

    #[test]
    fn zero_delay_disables_pause() {
        let cfg = AdjustConfig {
            step_delay_ms: Some(0),
            ..Default::default()
        };
        assert!(cfg.effective_step_delay().is_none());
        let cfg = AdjustConfig {
            step_delay_ms: Some(25),
            ..Default::default()
        };
        assert_eq!(cfg.effective_step_delay(), Some(Duration::from_millis(25)));
    }
}
