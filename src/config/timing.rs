use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::AccompanistError;
use serde::{Deserialize, Serialize};

/// How melody time is cut into chord slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Beats covered by each chord.
    pub beats_per_slot: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { beats_per_slot: 2 }
    }
}

impl TimingConfig {
    /// Ticks spanned by one chord slot.
    pub fn slot_duration(&self, ticks_per_beat: u32) -> u32 {
        ticks_per_beat.saturating_mul(self.beats_per_slot)
    }

    /// Number of chord slots needed to cover `total_ticks`, never less than 1.
    pub fn genome_length(&self, total_ticks: u64, ticks_per_beat: u32) -> usize {
        let slot = u64::from(self.slot_duration(ticks_per_beat));
        let slots = if slot == 0 { 0 } else { total_ticks.div_ceil(slot) };
        if slots == 0 {
            log::warn!("Melody spans no full slot, clamping genome length to 1");
            return 1;
        }
        slots as usize
    }
}

impl ConfigSection for TimingConfig {
    fn section_name() -> &'static str {
        "timing"
    }

    fn validate(&self) -> Result<(), AccompanistError> {
        if self.beats_per_slot == 0 {
            return Err(AccompanistError::Configuration(
                "Beats per slot must be at least 1".to_string()
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Timing".to_string(),
            fields: vec![FieldManifest {
                name: "beats_per_slot".to_string(),
                field_type: "integer".to_string(),
                default: serde_json::json!(Self::default().beats_per_slot),
                min: Some(1.0),
                max: Some(64.0),
                description: "Beats each accompaniment chord is held for".to_string(),
            }],
        }
    }
}
