//! Maps monitor commands onto controller operations.
//!
//! Every failure path renders a diagnostic through [`Output::error`]; the
//! returned [`CommandReport`] only tells the caller whether anything failed.

use tracing::{debug, instrument};

use crate::controller::DeviceController;
use crate::device::Setting;
use crate::error::MonitorError;
use crate::output::Output;

/// A command that operates on detected monitors.
///
/// `monitor: None` means the configured default monitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceCommand {
    List,
    Get {
        monitor: Option<i64>,
    },
    Set {
        setting: Setting,
        value: i64,
        monitor: Option<i64>,
    },
    Adjust {
        setting: Setting,
        delta: i64,
        monitor: Option<i64>,
    },
    Preset {
        name: String,
        monitor: Option<i64>,
    },
}

/// Summary of one dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandReport {
    pub ok: bool,
}

impl CommandReport {
    pub const fn succeeded() -> Self {
        Self { ok: true }
    }

    pub const fn failed() -> Self {
        Self { ok: false }
    }
}

pub struct Dispatcher<'a> {
    controller: &'a DeviceController<'a>,
    output: &'a dyn Output,
    default_monitor: i64,
}

impl<'a> Dispatcher<'a> {
    pub const fn new(
        controller: &'a DeviceController<'a>,
        output: &'a dyn Output,
        default_monitor: i64,
    ) -> Self {
        Self {
            controller,
            output,
            default_monitor,
        }
    }

    /// Run `command`, rendering its result or its failure.
    #[instrument(skip(self))]
    pub fn run(&self, command: &DeviceCommand) -> CommandReport {
        let report = match command {
            DeviceCommand::List => {
                let entries = self.controller.list();
                self.output
                    .monitor_list(&entries, self.controller.registry().captured_at());
                CommandReport::succeeded()
            }
            DeviceCommand::Get { monitor } => {
                let index = self.target(*monitor);
                self.report(self.controller.get(index), |s| self.output.settings(index, &s))
            }
            DeviceCommand::Set {
                setting,
                value,
                monitor,
            } => {
                let index = self.target(*monitor);
                self.report(self.controller.set(index, *setting, *value), |written| {
                    self.output.setting_written(index, *setting, written);
                })
            }
            DeviceCommand::Adjust {
                setting,
                delta,
                monitor,
            } => {
                let index = self.target(*monitor);
                self.report(self.controller.adjust(index, *setting, *delta), |adj| {
                    self.output.adjusted(index, &adj);
                })
            }
            DeviceCommand::Preset { name, monitor } => {
                let index = self.target(*monitor);
                match self.controller.apply_preset(index, name) {
                    Ok(outcome) => {
                        self.output.preset_applied(&outcome);
                        if outcome.is_success() {
                            CommandReport::succeeded()
                        } else {
                            CommandReport::failed()
                        }
                    }
                    Err(err) => self.fail(&err),
                }
            }
        };
        debug!(ok = report.ok, "Command finished");
        report
    }

    const fn target(&self, monitor: Option<i64>) -> i64 {
        match monitor {
            Some(index) => index,
            None => self.default_monitor,
        }
    }

    fn report<T>(
        &self,
        result: crate::error::Result<T>,
        render: impl FnOnce(T),
    ) -> CommandReport {
        match result {
            Ok(value) => {
                render(value);
                CommandReport::succeeded()
            }
            Err(err) => self.fail(&err),
        }
    }

    fn fail(&self, err: &MonitorError) -> CommandReport {
        debug!(
            transport = err.is_transport_error(),
            recoverable = err.is_user_recoverable(),
            "Command failed"
        );
        self.output.error(err);
        CommandReport::failed()
    }
}
