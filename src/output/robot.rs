//! Robot mode JSON output implementation.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, instrument, trace, warn};

use crate::config::LoadedConfig;
use crate::controller::{Adjustment, ListEntry, PresetOutcome, Settings};
use crate::device::Setting;
use crate::error::MonitorError;
use crate::preset::Preset;

use super::{BuildInfo, Output, RobotFormat};

/// JSON output implementation for scripting.
///
/// Results are one JSON document on stdout. Errors are JSON on stderr.
pub struct RobotOutput {
    format: RobotFormat,
}

impl RobotOutput {
    #[instrument]
    pub fn new(format: RobotFormat) -> Self {
        debug!(?format, "Creating RobotOutput");
        Self { format }
    }

    /// Output any serializable data as JSON to stdout.
    #[instrument(skip(self, data), fields(format = ?self.format))]
    fn output_json<T: Serialize + ?Sized>(&self, data: &T) {
        let rendered = match self.format {
            RobotFormat::Json => serde_json::to_string_pretty(data),
            RobotFormat::JsonCompact => serde_json::to_string(data),
        };
        match rendered {
            Ok(json) => {
                trace!(json_len = json.len(), "JSON serialized");
                println!("{json}");
            }
            Err(e) => warn!(error = %e, "JSON serialization failed"),
        }
    }
}

/// JSON body for an error.
pub fn error_json(error: &MonitorError) -> Value {
    json!({
        "error": true,
        "message": error.to_string(),
        "suggestion": error.suggestion(),
        "recoverable": error.is_user_recoverable(),
    })
}

/// JSON body for a preset outcome.
pub fn preset_json(outcome: &PresetOutcome) -> Value {
    let steps: Vec<Value> = outcome
        .steps
        .iter()
        .map(|step| match &step.result {
            Ok(value) => json!({ "setting": step.setting, "value": value, "ok": true }),
            Err(err) => json!({
                "setting": step.setting,
                "value": step.value,
                "ok": false,
                "error": err.to_string(),
            }),
        })
        .collect();
    json!({
        "monitor": outcome.index,
        "preset": outcome.preset.name,
        "ok": outcome.is_success(),
        "steps": steps,
    })
}

impl Output for RobotOutput {
    #[instrument(skip(self))]
    fn success(&self, message: &str) {
        self.output_json(&json!({ "success": true, "message": message }));
    }

    #[instrument(skip(self))]
    fn error(&self, error: &MonitorError) {
        debug!(error = %error, "Robot: error");
        match serde_json::to_string_pretty(&error_json(error)) {
            Ok(json) => eprintln!("{json}"),
            Err(e) => warn!(error = %e, "JSON serialization failed"),
        }
    }

    #[instrument(skip(self))]
    fn warning(&self, message: &str) {
        debug!(message, "Robot: warning");
    }

    #[instrument(skip(self, entries), fields(count = entries.len()))]
    fn monitor_list(&self, entries: &[ListEntry], captured_at: DateTime<Utc>) {
        self.output_json(&json!({
            "captured_at": captured_at,
            "count": entries.len(),
            "monitors": entries,
        }));
    }

    #[instrument(skip(self))]
    fn settings(&self, index: i64, settings: &Settings) {
        self.output_json(&json!({
            "monitor": index,
            "brightness": settings.brightness,
            "contrast": settings.contrast,
        }));
    }

    #[instrument(skip(self))]
    fn setting_written(&self, index: i64, setting: Setting, value: u16) {
        self.output_json(&json!({
            "monitor": index,
            "setting": setting,
            "value": value,
            "ok": true,
        }));
    }

    #[instrument(skip(self))]
    fn adjusted(&self, index: i64, adjustment: &Adjustment) {
        self.output_json(&json!({
            "monitor": index,
            "setting": adjustment.setting,
            "previous": adjustment.previous,
            "delta": adjustment.delta,
            "value": adjustment.written,
            "ok": true,
        }));
    }

    #[instrument(skip(self, outcome), fields(preset = outcome.preset.name))]
    fn preset_applied(&self, outcome: &PresetOutcome) {
        self.output_json(&preset_json(outcome));
    }

    #[instrument(skip(self, presets))]
    fn preset_catalog(&self, presets: &[Preset]) {
        self.output_json(presets);
    }

    #[instrument(skip(self, loaded))]
    fn config_info(&self, loaded: &LoadedConfig) {
        self.output_json(loaded);
    }

    #[instrument(skip(self))]
    fn config_written(&self, path: &Path) {
        self.output_json(&json!({ "written": path.display().to_string(), "ok": true }));
    }

    #[instrument(skip(self))]
    fn version_info(&self, info: &BuildInfo) {
        self.output_json(info);
    }
}
