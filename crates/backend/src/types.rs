use serde::{Deserialize, Serialize};
use std::fmt;

/// Agent name used for steps the client synthesizes itself.
pub const SYSTEM_AGENT: &str = "System";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Single,
    Multi,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Single, Strategy::Multi];

    pub fn path(&self) -> &'static str {
        match self {
            Strategy::Single => "/api/solve/single",
            Strategy::Multi => "/api/solve/multi",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Single => "single",
            Strategy::Multi => "multi",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub problem: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
}

impl SolveRequest {
    pub fn new(problem: impl Into<String>) -> Self {
        Self {
            problem: problem.into(),
            openai_api_key: None,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.openai_api_key = Some(key.into());
        self
    }

    /// Body for the given endpoint. The single endpoint never takes a key.
    pub fn for_strategy(&self, strategy: Strategy) -> SolveRequest {
        match strategy {
            Strategy::Single => SolveRequest::new(self.problem.clone()),
            Strategy::Multi => self.clone(),
        }
    }
}

/// Display category of the agent that produced a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRole {
    Proposer,
    Critic,
    #[serde(other)]
    Other,
}

/// Checked in order; the first needle found in the agent name wins.
const ROLE_TABLE: &[(&str, AgentRole)] = &[
    ("Agent 1", AgentRole::Proposer),
    ("Proposer", AgentRole::Proposer),
    ("Agent 2", AgentRole::Critic),
    ("Critic", AgentRole::Critic),
];

impl AgentRole {
    pub fn from_agent_name(name: &str) -> Self {
        ROLE_TABLE
            .iter()
            .find(|(needle, _)| name.contains(needle))
            .map(|(_, role)| *role)
            .unwrap_or(AgentRole::Other)
    }

    pub fn legend_label(&self) -> &'static str {
        match self {
            AgentRole::Proposer => "Agent 1 (Proposer)",
            AgentRole::Critic => "Agent 2 (Critic)",
            AgentRole::Other => "System",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningStep {
    pub agent: String,
    pub content: String,
    pub step_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<AgentRole>,
}

impl ReasoningStep {
    pub fn new(agent: impl Into<String>, content: impl Into<String>, step_number: u32) -> Self {
        Self {
            agent: agent.into(),
            content: content.into(),
            step_number,
            timestamp: None,
            role: None,
        }
    }

    /// Explicit tag from the backend when present, name lookup otherwise.
    pub fn role(&self) -> AgentRole {
        self.role
            .unwrap_or_else(|| AgentRole::from_agent_name(&self.agent))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    pub success: bool,
    pub final_answer: String,
    #[serde(default)]
    pub reasoning_steps: Vec<ReasoningStep>,
    pub total_steps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SolveResult {
    /// Result stored in a slot when the call itself failed.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            success: false,
            final_answer: "Error".to_string(),
            reasoning_steps: vec![ReasoningStep::new(
                SYSTEM_AGENT,
                format!("Error: {}", message),
                1,
            )],
            total_steps: 1,
            error: Some(message),
        }
    }

    /// The call completed without an error. Says nothing about whether the
    /// final answer is right.
    pub fn succeeded(&self) -> bool {
        self.success && self.error.is_none()
    }
}

/// Debate rounds shown under the multi-agent panel: three steps per round.
pub fn debate_rounds(total_steps: u32) -> u32 {
    total_steps.div_ceil(3)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleProblem {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<String>,
    pub problem: String,
    pub correct_answer: String,
    #[serde(default)]
    pub why_single_fails: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SampleProblemsResponse {
    pub problems: Vec<SampleProblem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BackendStatus {
    Unknown,
    Online,
    Offline(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_result_has_single_system_step() {
        let result = SolveResult::failure("connection refused");
        assert!(!result.success);
        assert_eq!(result.final_answer, "Error");
        assert_eq!(result.total_steps, 1);
        assert_eq!(result.error.as_deref(), Some("connection refused"));
        assert_eq!(result.reasoning_steps.len(), 1);
        assert_eq!(result.reasoning_steps[0].agent, "System");
        assert_eq!(result.reasoning_steps[0].content, "Error: connection refused");
        assert_eq!(result.reasoning_steps[0].step_number, 1);
    }

    #[test]
    fn debate_rounds_round_up() {
        assert_eq!(debate_rounds(7), 3);
        assert_eq!(debate_rounds(6), 2);
        assert_eq!(debate_rounds(1), 1);
        assert_eq!(debate_rounds(0), 0);
    }

    #[test]
    fn roles_follow_name_table() {
        assert_eq!(
            AgentRole::from_agent_name("Agent 1 (Proposer)"),
            AgentRole::Proposer
        );
        assert_eq!(
            AgentRole::from_agent_name("Agent 2 (Critic)"),
            AgentRole::Critic
        );
        assert_eq!(AgentRole::from_agent_name("Critic"), AgentRole::Critic);
        assert_eq!(AgentRole::from_agent_name("System"), AgentRole::Other);
        assert_eq!(AgentRole::from_agent_name("Gemma"), AgentRole::Other);
    }

    #[test]
    fn explicit_role_tag_wins_over_name() {
        let step: ReasoningStep = serde_json::from_value(serde_json::json!({
            "agent": "Agent 1",
            "content": "looks wrong",
            "step_number": 2,
            "role": "critic"
        }))
        .expect("decode step");
        assert_eq!(step.role(), AgentRole::Critic);

        let unknown: ReasoningStep = serde_json::from_value(serde_json::json!({
            "agent": "Agent 1",
            "content": "x",
            "step_number": 1,
            "role": "moderator"
        }))
        .expect("decode step with unknown role");
        assert_eq!(unknown.role(), AgentRole::Other);
    }

    #[test]
    fn request_body_omits_missing_key() {
        let body = serde_json::to_value(SolveRequest::new("2+2")).expect("encode");
        assert_eq!(body, serde_json::json!({ "problem": "2+2" }));

        let keyed = SolveRequest::new("2+2").with_api_key("sk-test");
        assert_eq!(
            serde_json::to_value(keyed.for_strategy(Strategy::Single)).expect("encode"),
            serde_json::json!({ "problem": "2+2" })
        );
        assert_eq!(
            serde_json::to_value(keyed.for_strategy(Strategy::Multi)).expect("encode"),
            serde_json::json!({ "problem": "2+2", "openai_api_key": "sk-test" })
        );
    }

    #[test]
    fn decodes_backend_result_with_timestamps() {
        let result: SolveResult = serde_json::from_value(serde_json::json!({
            "success": true,
            "final_answer": "10 apples",
            "reasoning_steps": [
                {"agent": "Agent 1 (Proposer)", "content": "15 - 3 + 8 = 20", "step_number": 1, "timestamp": "2025-01-01T00:00:00"},
                {"agent": "Agent 2 (Critic)", "content": "half of 20 is 10", "step_number": 2, "timestamp": null}
            ],
            "total_steps": 2,
            "error": null
        }))
        .expect("decode result");
        assert!(result.succeeded());
        assert_eq!(result.reasoning_steps[0].timestamp.as_deref(), Some("2025-01-01T00:00:00"));
        assert_eq!(result.reasoning_steps[1].timestamp, None);
    }

    #[test]
    fn success_flag_with_error_is_not_a_success() {
        let mut result = SolveResult::failure("rate limited");
        result.success = true;
        assert!(!result.succeeded());

        result.error = None;
        result.final_answer = "wrong, but delivered".to_string();
        assert!(result.succeeded());
    }
}
