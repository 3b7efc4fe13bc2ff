use std::time::Duration;

use crate::controllers::run::events::run_event::RunOutcome;
use crate::controllers::run::settings::{ConfigError, RunSettings};
use crate::core::actions::render_frame::kinds::PlotStyleKinds;
use crate::core::actions::sort::kinds::SortAlgorithmKinds;
use crate::input::gui::app::ports::presenter::FinishedRun;

/// Button presses collected during one egui pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiAction {
    Create,
    Start,
    Stop,
    Reset,
}

/// Values bound to the control panel widgets.
pub struct GuiAppState {
    pub size: usize,
    pub delay_ms: u64,
    pub plot_style: PlotStyleKinds,
    pub algorithm: SortAlgorithmKinds,
}

impl Default for GuiAppState {
    fn default() -> Self {
        Self::from_settings(&RunSettings::default())
    }
}

impl GuiAppState {
    #[must_use]
    pub fn from_settings(settings: &RunSettings) -> Self {
        Self {
            size: settings.size(),
            delay_ms: settings.delay().as_millis() as u64,
            plot_style: settings.plot_style(),
            algorithm: settings.algorithm(),
        }
    }

    /// Overlays the widget values on `settings`, keeping fields the panel
    /// does not expose.
    pub fn apply_to(&self, settings: RunSettings) -> Result<RunSettings, ConfigError> {
        Ok(settings
            .with_size(self.size)?
            .with_delay(Duration::from_millis(self.delay_ms))?
            .with_plot_style(self.plot_style)
            .with_algorithm(self.algorithm))
    }
}

#[must_use]
pub fn status_line(
    running: bool,
    has_sequence: bool,
    algorithm: SortAlgorithmKinds,
    last_finished: Option<FinishedRun>,
) -> String {
    if running {
        return format!("{} sort running...", algorithm);
    }

    match (has_sequence, last_finished) {
        (false, _) => "No sequence. Press Create.".to_owned(),
        (true, Some(run)) if run.outcome == RunOutcome::Completed => {
            format!("Sorted in {} steps.", run.frames)
        }
        (true, Some(run)) => format!("Stopped after {} steps.", run.frames),
        (true, None) => "Ready. Press Start.".to_owned(),
    }
}
