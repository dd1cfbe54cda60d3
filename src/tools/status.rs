//! Freezer Batch Status Tool
//!
//! Provides runtime status information and usage instructions.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::about::ServiceInfo;
use crate::config::ServerConfig;

/// Batch calculation instructions for AI assistants
pub const BATCH_INSTRUCTIONS: &str = r#"
# Freezer Batch Instructions

A freezer batch turns one full bottle of spirit into a ready-to-pour cocktail:
pour some spirit off, add the other ingredients and a little water, then store
the bottle in the freezer.

## Choosing a Tool

| Situation | Tool |
|-----------|------|
| User names a classic from the catalogue and wants tested measurements | `calculate_reference_batch` |
| User names a catalogue recipe but wants a different dilution | `calculate_recipe_batch` |
| User has their own recipe | `calculate_freeform_batch` |
| Browsing | `list_recipes`, `get_recipe` |
| Unsure of an ingredient's ABV | `suggest_abv` |
| Converting a measurement | `convert_volume` |

## Freeform Recipes

Give one serving of the drink. Each ingredient has:
- `name`
- `amount` (>= 0)
- `unit`: ml, oz, cl, dash, barspoon, tsp, tbsp. Unknown units are treated as ml.
- `abv` (0-100)
- `is_base_spirit` (optional). If no ingredient is flagged, the strongest one is used.

Defaults: 750 ml bottle, 20% dilution water.

## Reading the Result

1. Pour `pour_off` out of the full bottle (save it for something else).
2. Add every entry in `ingredients_to_add`.
3. Add `water_to_add`.
4. Check `freeze_status`:
   - `safe` (22% ABV and up): stays pourable
   - `slushy` (15% to under 22%): thick but drinkable
   - `freeze` (under 15%): will freeze solid; reduce dilution or juice

Reference batches are rounded to quarter ounces so they can be measured with a jigger.
A result with an empty `base_spirit_name` means the recipe needs more input.
"#;

/// Runtime status of the freezer batch service
#[derive(Debug, Clone, Serialize)]
pub struct FreezerBatchStatus {
    /// Version, catalogue size and defaults applied to tool calls
    pub service: ServiceInfo,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    config: ServerConfig,
}

impl StatusTracker {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            config,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> FreezerBatchStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FreezerBatchStatus {
            service: ServiceInfo::new(&self.config),
            started_at: self.started_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_config() {
        let tracker = StatusTracker::new(ServerConfig::default());
        let status = tracker.get_status();
        assert_eq!(status.service.default_bottle_ml, 750.0);
        assert_eq!(status.service.reference_recipes, 13);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.service.version, crate::about::VERSION);
    }

    #[test]
    fn test_instructions_cover_every_tool() {
        for tool in [
            "calculate_reference_batch",
            "calculate_recipe_batch",
            "calculate_freeform_batch",
            "list_recipes",
            "get_recipe",
            "suggest_abv",
            "convert_volume",
        ] {
            assert!(BATCH_INSTRUCTIONS.contains(tool), "{}", tool);
        }
    }
}
