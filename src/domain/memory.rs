//! Memory domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of system memory usage, in KiB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryUsage {
    /// Total physical memory
    pub total_kib: u64,
    /// Memory in use
    pub used_kib: u64,
}

impl MemoryUsage {
    /// Create a memory usage snapshot from byte counts
    pub fn from_bytes(total: u64, used: u64) -> Self {
        Self {
            total_kib: total / 1024,
            used_kib: used / 1024,
        }
    }

    /// Available memory (total minus used)
    pub fn available_kib(&self) -> u64 {
        self.total_kib.saturating_sub(self.used_kib)
    }

    /// Used memory as a percentage of total
    ///
    /// Returns `None` when total memory is reported as zero.
    pub fn percent(&self) -> Option<f64> {
        if self.total_kib == 0 {
            return None;
        }
        Some(self.used_kib as f64 / self.total_kib as f64 * 100.0)
    }
}

impl fmt::Display for MemoryUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percent() {
            Some(pct) => write!(
                f,
                "{} / {} kB ({:.1}%)",
                self.used_kib, self.total_kib, pct
            ),
            None => write!(f, "{} / {} kB", self.used_kib, self.total_kib),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_percent() {
        let mem = MemoryUsage {
            total_kib: 1000,
            used_kib: 250,
        };
        assert_eq!(mem.percent(), Some(25.0));
        assert_eq!(mem.available_kib(), 750);
    }

    #[test]
    fn test_memory_zero_total() {
        let mem = MemoryUsage {
            total_kib: 0,
            used_kib: 0,
        };
        assert_eq!(mem.percent(), None);
        assert_eq!(mem.to_string(), "0 / 0 kB");
    }

    #[test]
    fn test_memory_from_bytes() {
        let mem = MemoryUsage::from_bytes(8 * 1024 * 1024, 2 * 1024 * 1024);
        assert_eq!(mem.total_kib, 8192);
        assert_eq!(mem.used_kib, 2048);
        assert_eq!(mem.to_string(), "2048 / 8192 kB (25.0%)");
    }
}
