//! Ticker configuration type definitions

/// Compile-time ticker configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickerConfig {
    /// Price-swing percentage that would trip the alarm output.
    ///
    /// Carried from the legacy unit, where it was read at boot but never
    /// wired to any comparison against incoming prices. The alarm output
    /// itself is not driven by this firmware.
    pub alarm_percent: u8,
    /// Seconds the welcome banner stays up before the feed loop starts
    pub banner_secs: u8,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            alarm_percent: 10,
            banner_secs: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_legacy_unit() {
        let config = TickerConfig::default();
        assert_eq!(config.alarm_percent, 10);
        assert_eq!(config.banner_secs, 5);
    }
}
