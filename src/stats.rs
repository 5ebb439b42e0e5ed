use serde::Serialize;

/// Running insertion statistics of a [`ProbeMap`](crate::ProbeMap).
///
/// Counters are per-instance, so independent tables never interfere. All
/// three reflect inserts only; lookups leave them untouched.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProbeMapStats {
    /// Number of occupied slots.
    pub elements: u64,
    /// Number of inserts that found their primary slot occupied.
    pub collisions: u64,
    /// Cumulative slot advances performed while probing for a free slot.
    pub total_probes: u64,
}

impl ProbeMapStats {
    /// Mean number of probe advances per stored element.
    ///
    /// Returns `0.0` for an empty table instead of dividing by zero.
    pub fn average_probe_length(&self) -> f64 {
        if self.elements == 0 {
            0.0
        } else {
            self.total_probes as f64 / self.elements as f64
        }
    }
}

/// Summary returned by [`DictLoader::load`](crate::DictLoader::load).
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of well-formed records inserted into the table.
    pub loaded: u64,
    /// Number of malformed records skipped.
    pub skipped: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_probe_length() {
        let stats = ProbeMapStats {
            elements: 4,
            collisions: 2,
            total_probes: 6,
        };
        assert_eq!(stats.average_probe_length(), 1.5);
    }

    #[test]
    fn test_average_probe_length_empty() {
        let stats = ProbeMapStats::default();
        assert_eq!(stats.average_probe_length(), 0.0);
    }
}
