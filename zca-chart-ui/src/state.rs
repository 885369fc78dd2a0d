//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Datasets are loaded once; visibility changes only replace the current figure.

use crate::dataset::Dataset;
use dioxus::prelude::*;
use zca_core::config::OverlayConfig;
use zca_overlay::{Figure, VisibilityCommand};

#[derive(Clone, Copy)]
pub struct AppState {
    /// Aligned datasets, filled once on mount
    pub datasets: Signal<Vec<Dataset>>,
    /// Key of the selected dataset
    pub selected_dataset: Signal<String>,
    pub config: Signal<OverlayConfig>,
    /// The figure as currently shown, visibility commands applied
    pub figure: Signal<Option<Figure>>,
    pub loading: Signal<bool>,
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            datasets: Signal::new(Vec::new()),
            selected_dataset: Signal::new(String::new()),
            config: Signal::new(OverlayConfig::default()),
            figure: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// Rebuild the figure from the selected dataset. Inputs are read with
    /// `peek` and do not subscribe the caller.
    pub fn rebuild(&mut self) {
        let selected = self.selected_dataset.peek().clone();
        let config = self.config.peek().clone();
        let result = self
            .datasets
            .peek()
            .iter()
            .find(|dataset| dataset.key == selected)
            .map(|dataset| dataset.build_figure(&config));
        match result {
            Some(Ok(figure)) => {
                self.error_msg.set(None);
                self.figure.set(Some(figure));
            }
            Some(Err(e)) => {
                log::error!("[ZCA] app: Failed to build figure for {}: {}", selected, e);
                self.error_msg.set(Some(format!("Failed to build chart for {}: {}", selected, e)));
                self.figure.set(None);
            }
            None => {
                log::warn!("[ZCA] app: No dataset named {}", selected);
                self.figure.set(None);
            }
        }
    }

    pub fn apply(&mut self, command: VisibilityCommand) {
        let next = (*self.figure.peek()).as_ref().map(|figure| figure.apply(command));
        if next.is_some() {
            self.figure.set(next);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
