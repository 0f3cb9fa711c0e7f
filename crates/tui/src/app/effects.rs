use super::*;

impl App {
    pub fn process_async_events(&mut self) {
        let mut async_events = Vec::new();
        if let Some(ref mut rx) = self.app_async_rx {
            while let Ok(event) = rx.try_recv() {
                async_events.push(event);
            }
        }

        for event in async_events {
            match event {
                AppAsyncEvent::SolveFinished {
                    strategy,
                    request_id,
                    result,
                    hint,
                } => {
                    let failure = result.error.clone();
                    if !self.slot_mut(strategy).finish(request_id, result) {
                        tracing::debug!(
                            "Dropping stale {} response #{} (latest #{})",
                            strategy,
                            request_id,
                            self.slot(strategy).latest_request()
                        );
                        continue;
                    }
                    match failure {
                        Some(err) => {
                            let context = match strategy {
                                Strategy::Single => "Single agent call failed",
                                Strategy::Multi => "Multi agent call failed",
                            };
                            match hint {
                                Some(hint) => self.report_failure(context, err, &hint),
                                None => self.report_error(context, err),
                            }
                        }
                        None => tracing::info!("{} response #{} applied", strategy, request_id),
                    }
                }
                AppAsyncEvent::HealthChecked { error } => {
                    self.backend_status = match error {
                        None => BackendStatus::Online,
                        Some(reason) => BackendStatus::Offline(reason),
                    };
                    tracing::info!(
                        "Backend {} is {:?}",
                        self.client.base_url(),
                        self.backend_status
                    );
                }
                AppAsyncEvent::SamplesLoaded { samples, error } => {
                    if let Some(err) = error {
                        tracing::debug!("Keeping built-in samples: {}", err);
                    } else if !samples.is_empty() {
                        tracing::info!("Loaded {} sample problems from backend", samples.len());
                        self.samples = samples;
                        self.sample_picker = None;
                    }
                }
            }
        }
    }
}
