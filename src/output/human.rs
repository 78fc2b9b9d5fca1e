//! Human-friendly output implementation using `console` styles.

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{debug, instrument, trace};

use crate::config::{ConfigSource, LoadedConfig};
use crate::controller::{Adjustment, ListEntry, PresetOutcome, Reading, Settings};
use crate::device::Setting;
use crate::error::MonitorError;
use crate::preset::Preset;
use crate::theme::MonTheme;

use super::{BuildInfo, Output};

/// Styled terminal output implementation for human users.
///
/// Results go to stdout; errors and warnings go to stderr. Quiet mode drops
/// confirmation messages but keeps data and errors.
pub struct HumanOutput {
    theme: MonTheme,
    quiet: bool,
}

impl HumanOutput {
    #[instrument]
    pub fn new(quiet: bool) -> Self {
        debug!("Creating HumanOutput");
        Self {
            theme: MonTheme::default(),
            quiet,
        }
    }
}

impl Output for HumanOutput {
    #[instrument(skip(self))]
    fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        println!("{}", self.theme.success.apply_to(message));
    }

    #[instrument(skip(self))]
    fn error(&self, error: &MonitorError) {
        debug!(
            error = %error,
            recoverable = error.is_user_recoverable(),
            "Outputting error"
        );
        eprintln!("{}: {}", self.theme.error.apply_to("Error"), error);
        if let Some(suggestion) = error.suggestion() {
            trace!(suggestion, "Adding suggestion");
            eprintln!("{}: {}", self.theme.warning.apply_to("Hint"), suggestion);
        }
    }

    #[instrument(skip(self))]
    fn warning(&self, message: &str) {
        eprintln!("{}: {}", self.theme.warning.apply_to("Warning"), message);
    }

    #[instrument(skip(self, entries), fields(count = entries.len()))]
    fn monitor_list(&self, entries: &[ListEntry], _captured_at: DateTime<Utc>) {
        debug!("Outputting monitor list");
        println!(
            "{}",
            self.theme
                .header
                .apply_to(format!("Detected {} monitor(s):", entries.len()))
        );
        for entry in entries {
            trace!(index = entry.index, "Listing monitor");
            println!(
                "  {} {}",
                self.theme.index.apply_to(format!("[{}]", entry.index)),
                entry.descriptor
            );
            match &entry.reading {
                Reading::Ok(s) => println!(
                    "      {} {}%, {} {}%",
                    self.theme.label.apply_to("Brightness:"),
                    self.theme.value.apply_to(s.brightness),
                    self.theme.label.apply_to("Contrast:"),
                    self.theme.value.apply_to(s.contrast)
                ),
                Reading::Unreadable { reason } => println!(
                    "      {} {}",
                    self.theme.error.apply_to("Error reading settings:"),
                    reason
                ),
            }
        }
    }

    #[instrument(skip(self))]
    fn settings(&self, index: i64, settings: &Settings) {
        for setting in Setting::ALL {
            println!(
                "Monitor {index} {setting}: {}%",
                self.theme.value.apply_to(settings.get(setting))
            );
        }
    }

    #[instrument(skip(self))]
    fn setting_written(&self, index: i64, setting: Setting, value: u16) {
        self.success(&format!("Set monitor {index} {setting} to {value}%"));
    }

    #[instrument(skip(self))]
    fn adjusted(&self, index: i64, adjustment: &Adjustment) {
        self.success(&format!(
            "Adjusted monitor {index} {} {}% -> {}% ({:+})",
            adjustment.setting, adjustment.previous, adjustment.written, adjustment.delta
        ));
    }

    #[instrument(skip(self, outcome), fields(preset = outcome.preset.name))]
    fn preset_applied(&self, outcome: &PresetOutcome) {
        for step in &outcome.steps {
            match &step.result {
                Ok(value) => self.setting_written(outcome.index, step.setting, *value),
                Err(err) => self.error(err),
            }
        }
        if outcome.is_success() {
            self.success(&format!(
                "Applied '{}' preset to monitor {}",
                outcome.preset.name, outcome.index
            ));
        } else {
            self.warning(&format!(
                "Preset '{}' was only partly applied to monitor {}",
                outcome.preset.name, outcome.index
            ));
        }
    }

    #[instrument(skip(self, presets))]
    fn preset_catalog(&self, presets: &[Preset]) {
        println!("{}", self.theme.header.apply_to("Presets:"));
        for p in presets {
            println!(
                "  {:<10} {} {:>3}%  {} {:>3}%",
                self.theme.command.apply_to(p.name),
                self.theme.label.apply_to("brightness"),
                p.brightness,
                self.theme.label.apply_to("contrast"),
                p.contrast
            );
        }
    }

    #[instrument(skip(self, loaded))]
    fn config_info(&self, loaded: &LoadedConfig) {
        let path = loaded
            .path
            .as_ref()
            .map_or_else(|| "(none)".to_string(), |p| p.display().to_string());
        let source = match loaded.source {
            ConfigSource::Explicit => "explicit",
            ConfigSource::DefaultFile => "default file",
            ConfigSource::BuiltIn => "built-in defaults",
        };
        println!("{} {path}", self.theme.label.apply_to("path:           "));
        println!("{} {source}", self.theme.label.apply_to("source:         "));
        println!(
            "{} {}",
            self.theme.label.apply_to("default_monitor:"),
            loaded.config.default_monitor
        );
        println!(
            "{} {}",
            self.theme.label.apply_to("strict_exit:    "),
            loaded.config.strict_exit
        );
    }

    #[instrument(skip(self))]
    fn config_written(&self, path: &Path) {
        self.success(&format!("Wrote {}", path.display()));
    }

    #[instrument(skip(self))]
    fn version_info(&self, info: &BuildInfo) {
        println!("monctl {}", info.version);
        println!(
            "git: {}{}",
            info.git_sha,
            if info.git_dirty { " (dirty)" } else { "" }
        );
        println!("built: {}", info.build_timestamp);
        println!("rustc: {}", info.rustc_version);
        println!("target: {}", info.target);
    }
}
