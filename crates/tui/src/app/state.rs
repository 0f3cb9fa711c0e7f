use super::*;
use std::time::Instant;

/// Client-side state for one strategy. Only the completion carrying the
/// latest request id may land here.
#[derive(Debug, Default)]
pub struct Slot {
    pub result: Option<SolveResult>,
    pub loading: bool,
    latest_request: u64,
    started_at: Option<Instant>,
}

impl Slot {
    pub fn begin(&mut self, request_id: u64) {
        self.result = None;
        self.loading = true;
        self.latest_request = request_id;
        self.started_at = Some(Instant::now());
    }

    /// Returns false when `request_id` has been superseded.
    pub fn finish(&mut self, request_id: u64, result: SolveResult) -> bool {
        if request_id != self.latest_request {
            return false;
        }
        self.result = Some(result);
        self.loading = false;
        self.started_at = None;
        true
    }

    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.started_at
            .map(|t| t.elapsed().as_secs())
            .unwrap_or_default()
    }

    pub fn view(&self) -> PanelView<'_> {
        PanelView::select(self.result.as_ref(), self.loading, self.elapsed_secs())
    }

    pub fn is_active(&self) -> bool {
        self.loading || self.result.is_some()
    }
}

pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub client: SolveClient,
    pub layout: LayoutState,
    pub input: InputState,
    pub keybinds: Keybinds,
    pub single: Slot,
    pub multi: Slot,
    pub next_request_id: u64,
    pub banner: Option<String>,
    pub samples: Vec<SampleProblem>,
    pub sample_picker: Option<SamplePicker>,
    pub backend_status: BackendStatus,
    pub submitted_at: Option<DateTime<Local>>,
    pub scroll_offset: u16,
    pub show_help: bool,
    pub drag_origin: Option<u16>,
    pub app_async_tx: Option<mpsc::UnboundedSender<AppAsyncEvent>>,
    pub app_async_rx: Option<mpsc::UnboundedReceiver<AppAsyncEvent>>,
    pub last_error: Option<String>,
    pub show_error_details: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    pub fn new(config: Config) -> Self {
        let (app_async_tx, app_async_rx) = mpsc::unbounded_channel();
        let client = SolveClient::new(
            &config.backend.base_url,
            config.backend.connect_timeout(),
        );
        let mut input = InputState::new(config.backend.requires_client_credential);
        input.credential = config.backend.openai_api_key.clone();

        Self {
            should_quit: false,
            config,
            client,
            layout: LayoutState::default(),
            input,
            keybinds: Keybinds,
            single: Slot::default(),
            multi: Slot::default(),
            next_request_id: 0,
            banner: None,
            samples: builtin_samples(),
            sample_picker: None,
            backend_status: BackendStatus::Unknown,
            submitted_at: None,
            scroll_offset: 0,
            show_help: false,
            drag_origin: None,
            app_async_tx: Some(app_async_tx),
            app_async_rx: Some(app_async_rx),
            last_error: None,
            show_error_details: false,
        }
    }

    pub fn requires_credential(&self) -> bool {
        self.config.backend.requires_client_credential
    }

    pub fn slot(&self, strategy: Strategy) -> &Slot {
        match strategy {
            Strategy::Single => &self.single,
            Strategy::Multi => &self.multi,
        }
    }

    pub(super) fn slot_mut(&mut self, strategy: Strategy) -> &mut Slot {
        match strategy {
            Strategy::Single => &mut self.single,
            Strategy::Multi => &mut self.multi,
        }
    }

    pub fn is_solving(&self) -> bool {
        self.single.loading || self.multi.loading
    }

    /// The comparison replaces the sample list once either side has
    /// something to show.
    pub fn results_visible(&self) -> bool {
        self.single.is_active() || self.multi.is_active()
    }
}
