use super::*;

const MAX_SCROLL: u16 = 1_000;

impl App {
    /// Validates the form and fires both solve calls. Returns whether the
    /// submission was accepted.
    pub fn submit(&mut self) -> bool {
        let problem = self.input.problem.trim().to_string();
        if problem.is_empty() {
            self.banner = Some("Please enter a problem to solve".to_string());
            return false;
        }

        let mut request = SolveRequest::new(problem);
        if self.requires_credential() {
            let credential = self.input.credential.trim();
            if credential.is_empty() {
                self.banner = Some("Please enter your OpenAI API key".to_string());
                self.input.field = FormField::Credential;
                return false;
            }
            request = request.with_api_key(credential);
        }

        self.banner = None;
        self.clear_error();
        self.scroll_offset = 0;
        self.submitted_at = Some(Local::now());
        tracing::info!(
            "Submitting problem ({} chars) to both solvers",
            request.problem.chars().count()
        );

        for strategy in Strategy::ALL {
            self.dispatch(strategy, request.clone());
        }
        true
    }

    fn dispatch(&mut self, strategy: Strategy, request: SolveRequest) {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.slot_mut(strategy).begin(request_id);

        let client = self.client.clone();
        self.spawn_app_task(async move {
            let (result, hint) = match client.solve(strategy, &request).await {
                Ok(result) => (result, None),
                Err(e) => {
                    tracing::debug!("{} solver failed: {}", strategy, e);
                    (
                        SolveResult::failure(e.message()),
                        Some(App::actionable_error(&e)),
                    )
                }
            };
            AppAsyncEvent::SolveFinished {
                strategy,
                request_id,
                result,
                hint,
            }
        });
    }

    /// Health probe and sample list; both are best effort.
    pub fn start_background_probes(&mut self) {
        let client = self.client.clone();
        self.spawn_app_task(async move {
            AppAsyncEvent::HealthChecked {
                error: client.health_check().await.err().map(|e| e.to_string()),
            }
        });

        let client = self.client.clone();
        self.spawn_app_task(async move {
            match client.sample_problems().await {
                Ok(samples) => AppAsyncEvent::SamplesLoaded {
                    samples,
                    error: None,
                },
                Err(e) => AppAsyncEvent::SamplesLoaded {
                    samples: Vec::new(),
                    error: Some(e.to_string()),
                },
            }
        });
    }

    pub(super) fn open_sample_picker(&mut self) {
        if !self.samples.is_empty() {
            self.sample_picker = Some(SamplePicker::new());
        }
    }

    pub(super) fn load_selected_sample(&mut self) {
        let Some(picker) = self.sample_picker.take() else {
            return;
        };
        if let Some(sample) = self.samples.get(picker.selected) {
            self.input.set_problem(&sample.problem);
            self.banner = None;
        }
    }

    pub(super) fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll_offset) + delta).clamp(0, i32::from(MAX_SCROLL));
        self.scroll_offset = next as u16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_a_sample_fills_the_problem() {
        let mut app = App::default();
        app.banner = Some("Please enter a problem to solve".to_string());
        app.open_sample_picker();
        if let Some(ref mut picker) = app.sample_picker {
            picker.move_down(app.samples.len());
        }
        app.load_selected_sample();

        assert!(app.sample_picker.is_none());
        assert!(app.input.problem.starts_with("A train travels"));
        assert!(app.banner.is_none());
    }

    #[test]
    fn missing_credential_moves_focus_to_key_field() {
        let mut config = Config::default();
        config.backend.requires_client_credential = true;
        let mut app = App::new(config);
        app.input.problem = "2 + 2".to_string();

        assert!(!app.submit());
        assert_eq!(app.input.field, FormField::Credential);
        assert!(!app.is_solving());
    }

    #[test]
    fn scroll_is_bounded() {
        let mut app = App::default();
        app.scroll_by(-5);
        assert_eq!(app.scroll_offset, 0);
        app.scroll_by(5_000);
        assert_eq!(app.scroll_offset, MAX_SCROLL);
    }
}
