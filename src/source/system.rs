//! Host metric source backed by sysinfo

use super::traits::MetricSource;
use crate::domain::{MemoryUsage, MetricId, Temperature, Uptime};
use crate::error::SampleError;

use sysinfo::{Components, System};

/// Sensor label fragments that identify CPU temperature sensors
const CPU_SENSOR_HINTS: &[&str] = &[
    "cpu",
    "package",
    "core",
    "tctl",
    "tdie",
    "k10temp",
    "coretemp",
    "x86_pkg_temp",
];

/// Metric source reading the local host
pub struct SystemSource {
    system: System,
    components: Components,
}

impl SystemSource {
    /// Create a new source and enumerate temperature sensors
    pub fn new() -> Self {
        Self {
            system: System::new(),
            components: Components::new_with_refreshed_list(),
        }
    }

    /// Current CPU temperature
    pub fn cpu_temperature(&mut self) -> Result<Temperature, SampleError> {
        self.components.refresh();

        let readings = self
            .components
            .list()
            .iter()
            .map(|c| (c.label(), c.temperature()));

        select_cpu_temperature(readings)
            .map(Temperature::from)
            .ok_or_else(|| SampleError::SensorNotFound(MetricId::CpuTemp.to_string()))
    }

    /// Current memory usage
    pub fn memory(&mut self) -> MemoryUsage {
        self.system.refresh_memory();
        MemoryUsage::from_bytes(self.system.total_memory(), self.system.used_memory())
    }

    /// Time since boot
    pub fn uptime(&self) -> Uptime {
        Uptime::from_secs(System::uptime())
    }
}

impl Default for SystemSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSource for SystemSource {
    fn sample(&mut self, metric: MetricId) -> Result<f64, SampleError> {
        match metric {
            MetricId::CpuTemp => Ok(self.cpu_temperature()?.as_celsius()),
            MetricId::MemoryPercent => {
                self.memory()
                    .percent()
                    .ok_or_else(|| SampleError::InvalidReading {
                        metric: metric.to_string(),
                        reason: "total memory reported as zero".to_string(),
                    })
            }
        }
    }

    fn name(&self) -> &str {
        "system"
    }
}

/// Pick the CPU temperature among labelled sensor readings
///
/// Returns the hottest sensor whose label looks like a CPU sensor, or `None`
/// when there is none. Non-finite readings are ignored.
fn select_cpu_temperature<'a>(readings: impl IntoIterator<Item = (&'a str, f32)>) -> Option<f32> {
    readings
        .into_iter()
        .filter(|(_, temp)| temp.is_finite())
        .filter(|(label, _)| {
            let label = label.to_lowercase();
            CPU_SENSOR_HINTS.iter().any(|hint| label.contains(hint))
        })
        .map(|(_, temp)| temp)
        .reduce(f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_prefers_cpu_sensors() {
        let readings = vec![
            ("nvme Composite", 70.0),
            ("coretemp Package id 0", 55.0),
            ("coretemp Core 1", 58.0),
            ("acpitz temp1", 40.0),
        ];
        assert_eq!(select_cpu_temperature(readings), Some(58.0));
    }

    #[test]
    fn test_select_ignores_non_cpu_sensors() {
        let readings = vec![("nvme Composite", 85.0), ("amdgpu edge", 60.0)];
        assert_eq!(select_cpu_temperature(readings), None);
    }

    #[test]
    fn test_select_ignores_non_finite() {
        let readings = vec![
            ("k10temp Tctl", f32::NAN),
            ("k10temp Tccd1", 47.0),
            ("acpitz temp1", 39.0),
        ];
        assert_eq!(select_cpu_temperature(readings), Some(47.0));

        let readings = vec![("k10temp Tctl", f32::INFINITY), ("acpitz temp1", 39.0)];
        assert_eq!(select_cpu_temperature(readings), None);
    }

    #[test]
    fn test_select_no_sensors() {
        let readings: Vec<(&str, f32)> = vec![];
        assert_eq!(select_cpu_temperature(readings), None);
    }

    #[test]
    fn test_system_source_memory_sample() {
        let mut source = SystemSource::new();
        // Any host running the tests reports some memory
        let pct = source.sample(MetricId::MemoryPercent).unwrap();
        assert!(pct > 0.0 && pct <= 100.0);
        assert_eq!(source.name(), "system");
    }
}
