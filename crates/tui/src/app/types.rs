use agent_duel_backend::{SampleProblem, SolveResult, Strategy};

pub enum AppAsyncEvent {
    SolveFinished {
        strategy: Strategy,
        request_id: u64,
        result: SolveResult,
        hint: Option<String>,
    },
    HealthChecked {
        error: Option<String>,
    },
    SamplesLoaded {
        samples: Vec<SampleProblem>,
        error: Option<String>,
    },
}
