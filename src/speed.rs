use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 5;

/// Milliseconds between ticks for a speed level. Level 1 is the slowest.
pub fn level_to_interval_ms(level: u8) -> u64 {
    250 - u64::from(level) * 40
}

/// Speed level in `MIN_LEVEL..=MAX_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    pub fn new(level: u8) -> Option<Self> {
        (MIN_LEVEL..=MAX_LEVEL)
            .contains(&level)
            .then_some(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn interval(self) -> Duration {
        Duration::from_millis(level_to_interval_ms(self.0))
    }

    pub fn faster(self) -> Self {
        Self((self.0 + 1).min(MAX_LEVEL))
    }

    pub fn slower(self) -> Self {
        Self((self.0 - 1).max(MIN_LEVEL))
    }
}

impl Default for SpeedLevel {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for SpeedLevel {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or_else(|| {
            format!("speed level {level} outside {MIN_LEVEL}..={MAX_LEVEL}")
        })
    }
}

impl From<SpeedLevel> for u8 {
    fn from(level: SpeedLevel) -> u8 {
        level.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_table() {
        let intervals: Vec<u64> = (MIN_LEVEL..=MAX_LEVEL).map(level_to_interval_ms).collect();
        assert_eq!(intervals, vec![210, 170, 130, 90, 50]);
    }

    #[test]
    fn test_level_range() {
        assert!(SpeedLevel::new(0).is_none());
        assert!(SpeedLevel::new(6).is_none());
        assert_eq!(SpeedLevel::new(5).map(SpeedLevel::interval), Some(Duration::from_millis(50)));
    }

    #[test]
    fn test_faster_slower_saturate() {
        let top = SpeedLevel::new(MAX_LEVEL).unwrap();
        let bottom = SpeedLevel::new(MIN_LEVEL).unwrap();

        assert_eq!(top.faster(), top);
        assert_eq!(bottom.slower(), bottom);
        assert_eq!(SpeedLevel::default().faster().get(), 4);
        assert_eq!(SpeedLevel::default().slower().get(), 2);
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let level: SpeedLevel = serde_json::from_str("4").unwrap();
        assert_eq!(level.get(), 4);
        assert!(serde_json::from_str::<SpeedLevel>("9").is_err());
    }
}
