use crate::input::{FormField, InputState};
use crate::keybinds::Keybinds;
use crate::samples::{builtin_samples, SamplePicker};
use crate::ui::layout::LayoutState;
use crate::ui::panel::PanelType;
use crate::view::{panel_lines, PanelKind, PanelView};
use crate::Config;
use agent_duel_backend::{
    BackendStatus, SampleProblem, SolveClient, SolveError, SolveRequest, SolveResult, Strategy,
};
use anyhow::Result;
use chrono::{DateTime, Local};
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::Frame;
use regex::Regex;
use std::future::Future;
use std::sync::OnceLock;
use tokio::sync::mpsc;

mod actions;
mod effects;
mod input;
mod render;
mod state;
mod types;

pub use state::{App, Slot};
pub use types::AppAsyncEvent;

fn secret_patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (r"sk-[A-Za-z0-9_\-]{4,}", "sk-[REDACTED]"),
            (r"Bearer\s+\S+", "Bearer [REDACTED]"),
        ]
        .into_iter()
        .filter_map(|(pattern, replacement)| {
            Regex::new(pattern).ok().map(|re| (re, replacement))
        })
        .collect()
    })
}

impl App {
    pub(super) fn report_error(&mut self, context: &str, error: impl std::fmt::Display) {
        let message = format!("{context}: {}", Self::redact_sensitive(&error.to_string()));
        self.last_error = Some(message.clone());
        tracing::warn!("{message}");
    }

    /// Error text plus a hint on what to do about it, for the details popup.
    pub(super) fn report_failure(
        &mut self,
        context: &str,
        error: impl std::fmt::Display,
        hint: &str,
    ) {
        self.report_error(context, error);
        if let Some(ref mut message) = self.last_error {
            message.push_str("\n\n");
            message.push_str(hint);
        }
        tracing::info!("Hint: {hint}");
    }

    pub(super) fn actionable_error(error: &SolveError) -> String {
        error.user_message().to_string()
    }

    pub(super) fn clear_error(&mut self) {
        self.last_error = None;
        self.show_error_details = false;
    }

    pub fn redact_sensitive(input: &str) -> String {
        secret_patterns()
            .iter()
            .fold(input.to_string(), |text, (re, replacement)| {
                re.replace_all(&text, *replacement).into_owned()
            })
    }

    pub(super) fn spawn_app_task<F>(&self, future: F)
    where
        F: Future<Output = AppAsyncEvent> + Send + 'static,
    {
        if let Some(tx) = self.app_async_tx.clone() {
            tokio::spawn(async move {
                let event = future.await;
                let _ = tx.send(event);
            });
        }
    }
}
