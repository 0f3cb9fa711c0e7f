//! Pure view model for the two result panels.
//!
//! Nothing here touches the terminal: the app picks a [`PanelView`] from a
//! slot and turns it into styled lines, which the renderer draws.

use agent_duel_backend::{debate_rounds, AgentRole, SolveResult, Strategy};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelKind {
    Single,
    Multi,
}

impl PanelKind {
    pub fn strategy(&self) -> Strategy {
        match self {
            PanelKind::Single => Strategy::Single,
            PanelKind::Multi => Strategy::Multi,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::Single => "Single Agent",
            PanelKind::Multi => "Multi-Agent System (Debate)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            PanelKind::Single => "Single agent awaiting problem...",
            PanelKind::Multi => "Multi-Agent system awaiting problem...",
        }
    }

    pub fn loading_badge(&self) -> &'static str {
        match self {
            PanelKind::Single => "Processing...",
            PanelKind::Multi => "Debating...",
        }
    }

    pub fn loading_text(&self) -> &'static str {
        match self {
            PanelKind::Single => "Thinking...",
            PanelKind::Multi => "Agents are discussing the problem...",
        }
    }

    pub fn failure_badge(&self) -> &'static str {
        match self {
            PanelKind::Single => "❌ Failed",
            PanelKind::Multi => "⚠ Error",
        }
    }

    pub fn steps_heading(&self) -> &'static str {
        match self {
            PanelKind::Single => "Reasoning",
            PanelKind::Multi => "Agent Dialogue",
        }
    }

    fn failure_color(&self) -> Color {
        match self {
            PanelKind::Single => Color::Red,
            PanelKind::Multi => Color::Yellow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelView<'a> {
    Placeholder,
    Loading { elapsed_secs: u64 },
    Success(&'a SolveResult),
    Failure(&'a SolveResult),
}

impl<'a> PanelView<'a> {
    /// Loading wins over a stale result; the result decides between the
    /// success and failure views.
    pub fn select(result: Option<&'a SolveResult>, loading: bool, elapsed_secs: u64) -> Self {
        if loading {
            return PanelView::Loading { elapsed_secs };
        }
        match result {
            None => PanelView::Placeholder,
            Some(r) if r.succeeded() => PanelView::Success(r),
            Some(r) => PanelView::Failure(r),
        }
    }

    /// Border color for the panel frame.
    pub fn accent(&self, kind: PanelKind) -> Color {
        match self {
            PanelView::Placeholder => Color::DarkGray,
            PanelView::Loading { .. } => Color::Cyan,
            PanelView::Success(_) => Color::Green,
            PanelView::Failure(_) => kind.failure_color(),
        }
    }

    pub fn badge(&self, kind: PanelKind) -> Option<&'static str> {
        match self {
            PanelView::Placeholder => None,
            PanelView::Loading { .. } => Some(kind.loading_badge()),
            PanelView::Success(r) | PanelView::Failure(r) => Some(if r.success {
                "✓ Completed"
            } else {
                kind.failure_badge()
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepCategory {
    Neutral,
    Role(AgentRole),
}

impl StepCategory {
    pub fn color(&self) -> Color {
        match self {
            StepCategory::Neutral => Color::Gray,
            StepCategory::Role(AgentRole::Proposer) => Color::Blue,
            StepCategory::Role(AgentRole::Critic) => Color::Magenta,
            StepCategory::Role(AgentRole::Other) => Color::DarkGray,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepLine<'a> {
    pub number: u32,
    pub agent: &'a str,
    pub content: &'a str,
    pub category: StepCategory,
}

/// Steps in the order the backend sent them.
pub fn step_lines(kind: PanelKind, result: &SolveResult) -> Vec<StepLine<'_>> {
    result
        .reasoning_steps
        .iter()
        .map(|step| StepLine {
            number: step.step_number,
            agent: &step.agent,
            content: &step.content,
            category: match kind {
                PanelKind::Single => StepCategory::Neutral,
                PanelKind::Multi => StepCategory::Role(step.role()),
            },
        })
        .collect()
}

pub fn summary(kind: PanelKind, result: &SolveResult) -> String {
    match kind {
        PanelKind::Single => format!("Total Steps: {}", result.total_steps),
        PanelKind::Multi => format!(
            "Total Steps: {} | Debate Rounds: {}",
            result.total_steps,
            debate_rounds(result.total_steps)
        ),
    }
}

/// Body text for a panel, without the frame.
pub fn panel_lines(kind: PanelKind, view: &PanelView<'_>) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    match view {
        PanelView::Placeholder => vec![
            Line::default(),
            Line::styled(kind.placeholder().to_string(), dim).centered(),
        ],
        PanelView::Loading { elapsed_secs } => vec![
            Line::default(),
            Line::styled(
                format!("{} ({}s)", kind.loading_text(), elapsed_secs),
                Style::default().fg(Color::Cyan),
            )
            .centered(),
        ],
        PanelView::Success(result) | PanelView::Failure(result) => {
            let answer_color = if result.succeeded() {
                Color::Green
            } else {
                kind.failure_color()
            };
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("Final Answer: ", Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(
                        result.final_answer.clone(),
                        Style::default().fg(answer_color).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::default(),
            ];

            if kind == PanelKind::Multi {
                let legend: Vec<Span<'static>> = [AgentRole::Proposer, AgentRole::Critic, AgentRole::Other]
                    .into_iter()
                    .flat_map(|role| {
                        [
                            Span::styled("● ", Style::default().fg(StepCategory::Role(role).color())),
                            Span::raw(format!("{}  ", role.legend_label())),
                        ]
                    })
                    .collect();
                lines.push(Line::from(legend));
                lines.push(Line::default());
            }

            lines.push(Line::styled(
                format!("{}:", kind.steps_heading()),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ));
            for step in step_lines(kind, result) {
                let color = step.category.color();
                lines.push(Line::from(vec![
                    Span::styled(format!("Step {} ", step.number), dim),
                    Span::styled(
                        step.agent.to_string(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                ]));
                for text in step.content.lines() {
                    lines.push(Line::from(vec![
                        Span::styled("│ ", Style::default().fg(color)),
                        Span::raw(text.to_string()),
                    ]));
                }
                lines.push(Line::default());
            }

            lines.push(Line::styled(summary(kind, result), dim));
            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_duel_backend::ReasoningStep;

    fn result(success: bool, error: Option<&str>, total: u32) -> SolveResult {
        SolveResult {
            success,
            final_answer: "10".to_string(),
            reasoning_steps: vec![
                ReasoningStep::new("Agent 1 (Proposer)", "15 - 3 + 8 = 20", 1),
                ReasoningStep::new("Agent 2 (Critic)", "Half of 20\nis 10", 2),
                ReasoningStep::new("System", "Agents reached consensus!", 3),
            ],
            total_steps: total,
            error: error.map(str::to_string),
        }
    }

    fn text_of(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn selection_follows_precedence() {
        let ok = result(true, None, 3);
        let reported = result(false, None, 3);
        let errored = result(true, Some("boom"), 3);

        assert_eq!(PanelView::select(None, false, 0), PanelView::Placeholder);
        assert_eq!(
            PanelView::select(None, true, 4),
            PanelView::Loading { elapsed_secs: 4 }
        );
        assert_eq!(
            PanelView::select(Some(&ok), true, 0),
            PanelView::Loading { elapsed_secs: 0 }
        );
        assert_eq!(PanelView::select(Some(&ok), false, 0), PanelView::Success(&ok));
        assert_eq!(
            PanelView::select(Some(&reported), false, 0),
            PanelView::Failure(&reported)
        );
        assert_eq!(
            PanelView::select(Some(&errored), false, 0),
            PanelView::Failure(&errored)
        );
    }

    #[test]
    fn badge_tracks_success_flag_only() {
        let errored = result(true, Some("boom"), 3);
        let view = PanelView::select(Some(&errored), false, 0);
        assert_eq!(view.badge(PanelKind::Multi), Some("✓ Completed"));
        assert_eq!(view.accent(PanelKind::Multi), Color::Yellow);

        let failed = SolveResult::failure("down");
        let view = PanelView::select(Some(&failed), false, 0);
        assert_eq!(view.badge(PanelKind::Single), Some("❌ Failed"));
        assert_eq!(view.badge(PanelKind::Multi), Some("⚠ Error"));
    }

    #[test]
    fn multi_steps_keep_order_and_get_three_categories() {
        let r = result(true, None, 3);
        let steps = step_lines(PanelKind::Multi, &r);
        let agents: Vec<&str> = steps.iter().map(|s| s.agent).collect();
        assert_eq!(agents, vec!["Agent 1 (Proposer)", "Agent 2 (Critic)", "System"]);

        assert_eq!(steps[0].category, StepCategory::Role(AgentRole::Proposer));
        assert_eq!(steps[1].category, StepCategory::Role(AgentRole::Critic));
        assert_eq!(steps[2].category, StepCategory::Role(AgentRole::Other));
        let colors: std::collections::HashSet<Color> =
            steps.iter().map(|s| s.category.color()).collect();
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn single_steps_are_neutral() {
        let r = result(true, None, 3);
        assert!(step_lines(PanelKind::Single, &r)
            .iter()
            .all(|s| s.category == StepCategory::Neutral));
    }

    #[test]
    fn summary_counts_debate_rounds() {
        assert_eq!(
            summary(PanelKind::Multi, &result(true, None, 7)),
            "Total Steps: 7 | Debate Rounds: 3"
        );
        assert_eq!(
            summary(PanelKind::Multi, &result(true, None, 6)),
            "Total Steps: 6 | Debate Rounds: 2"
        );
        assert_eq!(summary(PanelKind::Single, &result(true, None, 6)), "Total Steps: 6");
    }

    #[test]
    fn lines_render_answer_steps_and_legend() {
        let r = result(true, None, 3);
        let text = text_of(&panel_lines(PanelKind::Multi, &PanelView::Success(&r)));
        assert!(text.starts_with("Final Answer: 10"));
        assert!(text.contains("Agent Dialogue:"));
        assert!(text.contains("● Agent 1 (Proposer)"));
        assert!(text.contains("│ Half of 20\n│ is 10"));
        assert!(text.ends_with("Total Steps: 3 | Debate Rounds: 1"));

        let first = text.find("Step 1 Agent 1").expect("step 1");
        let third = text.find("Step 3 System").expect("step 3");
        assert!(first < third);

        let single = text_of(&panel_lines(PanelKind::Single, &PanelView::Success(&r)));
        assert!(!single.contains("●"));
        assert!(single.contains("Reasoning:"));
    }

    #[test]
    fn placeholder_and_loading_text() {
        let text = text_of(&panel_lines(PanelKind::Multi, &PanelView::Placeholder));
        assert!(text.contains("Multi-Agent system awaiting problem..."));

        let text = text_of(&panel_lines(
            PanelKind::Single,
            &PanelView::Loading { elapsed_secs: 12 },
        ));
        assert!(text.contains("Thinking... (12s)"));
    }
}
