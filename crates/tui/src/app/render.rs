use super::*;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        self.layout.calculate_layout(
            area,
            self.input.credential_enabled(),
            self.results_visible(),
        );

        let panels = self.layout.get_panels().to_vec();

        for panel in panels {
            match panel.panel_type {
                PanelType::Topbar => self.render_topbar(frame, panel.rect),
                PanelType::Problem => self.render_problem_field(frame, panel.rect),
                PanelType::Credential => self.render_credential_field(frame, panel.rect),
                PanelType::Banner => self.render_banner(frame, panel.rect),
                PanelType::SingleResult => {
                    self.render_result_panel(frame, panel.rect, PanelKind::Single)
                }
                PanelType::Divider => self.render_divider(frame, panel.rect),
                PanelType::MultiResult => {
                    self.render_result_panel(frame, panel.rect, PanelKind::Multi)
                }
                PanelType::Samples => self.render_samples(frame, panel.rect),
                PanelType::Footer => self.render_footer(frame, panel.rect),
            }
        }

        if self.sample_picker.is_some() {
            self.render_sample_picker(frame, area);
        }

        if self.show_error_details {
            self.render_error_details(frame, area);
        }

        if self.show_help {
            self.render_help(frame, area);
        }
    }

    fn render_topbar(&self, frame: &mut Frame, area: Rect) {
        let (status, color) = match self.backend_status {
            BackendStatus::Unknown => ("○ checking".to_string(), Color::DarkGray),
            BackendStatus::Online => ("● online".to_string(), Color::Green),
            BackendStatus::Offline(ref reason) => {
                (format!("✗ offline: {}", truncate(reason, 48)), Color::Red)
            }
        };

        let mut spans = vec![
            Span::styled(" agent-duel ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("│ "),
            Span::raw(self.client.base_url().to_string()),
            Span::raw(" "),
            Span::styled(status, Style::default().fg(color)),
        ];

        if let Some(at) = self.submitted_at {
            spans.push(Span::raw(format!(" │ last run {}", at.format("%H:%M:%S"))));
        }

        if self.last_error.is_some() {
            spans.push(Span::styled(
                " │ ! error (Ctrl+E)",
                Style::default().fg(Color::Red),
            ));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black)),
            area,
        );
    }

    fn field_block(&self, title: &'static str, field: FormField) -> Block<'static> {
        let border_style = if self.input.field == field && !self.show_help {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title)
    }

    fn render_problem_field(&self, frame: &mut Frame, area: Rect) {
        let focused = self.input.field == FormField::Problem;
        let line = if self.input.problem.is_empty() && !focused {
            Line::styled(
                "Enter a complex math word problem...",
                Style::default().fg(Color::DarkGray),
            )
        } else {
            let visible = tail_to_width(&self.input.problem, area.width.saturating_sub(3));
            Line::raw(if focused {
                format!("{visible}█")
            } else {
                visible
            })
        };

        frame.render_widget(
            Paragraph::new(line).block(self.field_block(" Problem ", FormField::Problem)),
            area,
        );
    }

    fn render_credential_field(&self, frame: &mut Frame, area: Rect) {
        let focused = self.input.field == FormField::Credential;
        let line = if self.input.credential.is_empty() && !focused {
            Line::styled("sk-...", Style::default().fg(Color::DarkGray))
        } else {
            let masked = tail_to_width(&self.input.masked_credential(), area.width.saturating_sub(3));
            Line::raw(if focused { format!("{masked}█") } else { masked })
        };

        frame.render_widget(
            Paragraph::new(line).block(
                self.field_block(" OpenAI API Key ", FormField::Credential)
                    .title_bottom(Line::from(" only used for this session, never stored ").right_aligned()),
            ),
            area,
        );
    }

    fn render_banner(&self, frame: &mut Frame, area: Rect) {
        let line = if let Some(ref banner) = self.banner {
            Line::styled(format!(" ⚠ {banner}"), Style::default().fg(Color::Red))
        } else if self.is_solving() {
            Line::styled(" Solving...", Style::default().fg(Color::Cyan))
        } else {
            Line::styled(
                " Enter: solve with both agents",
                Style::default().fg(Color::DarkGray),
            )
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_result_panel(&self, frame: &mut Frame, area: Rect, kind: PanelKind) {
        let view = self.slot(kind.strategy()).view();
        let accent = view.accent(kind);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(format!(" {} ", kind.title()));
        if let Some(badge) = view.badge(kind) {
            block = block.title(
                Line::styled(
                    format!(" {badge} "),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                )
                .right_aligned(),
            );
        }

        let scroll = match view {
            PanelView::Success(_) | PanelView::Failure(_) => self.scroll_offset,
            _ => 0,
        };

        frame.render_widget(
            Paragraph::new(panel_lines(kind, &view))
                .block(block)
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0)),
            area,
        );
    }

    fn render_divider(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::default(); usize::from(area.height / 2)];
        lines.push(Line::styled(
            "VS",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_samples(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::styled("Sample Problems", Style::default().add_modifier(Modifier::BOLD)),
            Line::default(),
        ];
        for (i, sample) in self.samples.iter().enumerate() {
            let difficulty = sample
                .difficulty
                .as_deref()
                .map(|d| format!(" [{d}]"))
                .unwrap_or_default();
            lines.push(Line::from(vec![
                Span::styled(format!("{}.{} ", i + 1, difficulty), Style::default().fg(Color::Cyan)),
                Span::raw(sample.problem.clone()),
            ]));
            lines.push(Line::styled(
                format!("   expected: {}", sample.correct_answer),
                Style::default().fg(Color::DarkGray),
            ));
            if let Some(ref why) = sample.why_single_fails {
                lines.push(Line::styled(
                    format!("   why a single agent slips: {why}"),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                ));
            }
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            "How it works: the single agent reasons alone and often slips; the multi-agent \
             system has a proposer and a critic debate until they agree.",
            Style::default().fg(Color::Gray),
        ));

        frame.render_widget(
            Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Ctrl+P to load a sample "),
                )
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hint = if self.input.credential_enabled() {
            " Enter solve · Tab switch field · Ctrl+P samples · PgUp/PgDn scroll · F1 help · Ctrl+Q quit"
        } else {
            " Enter solve · Ctrl+P samples · PgUp/PgDn scroll · F1 help · Ctrl+Q quit"
        };
        frame.render_widget(
            Paragraph::new(Line::styled(hint, Style::default().fg(Color::DarkGray))),
            area,
        );
    }

    fn render_sample_picker(&self, frame: &mut Frame, area: Rect) {
        let popup_area = self.centered_rect(70, 50, area);
        let width = usize::from(popup_area.width.saturating_sub(6));

        let items: Vec<ListItem> = self
            .samples
            .iter()
            .map(|sample| ListItem::new(truncate(&sample.problem, width)))
            .collect();

        let mut state = ListState::default();
        state.select(self.sample_picker.as_ref().map(|p| p.selected));

        frame.render_widget(Clear, popup_area);
        frame.render_stateful_widget(
            List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Samples - Enter to load, Esc to close "),
                )
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                .highlight_symbol("> "),
            popup_area,
            &mut state,
        );
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let help_text = self.keybinds.help_text(self.input.credential_enabled());
        let popup_area = self.centered_rect(60, 70, area);

        frame.render_widget(Clear, popup_area);
        frame.render_widget(
            Paragraph::new(help_text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help - Press F1 to close "),
            ),
            popup_area,
        );
    }

    fn render_error_details(&self, frame: &mut Frame, area: Rect) {
        let popup_area = self.centered_rect(70, 40, area);
        let text = self
            .last_error
            .clone()
            .unwrap_or_else(|| "No error recorded.".to_string());

        frame.render_widget(Clear, popup_area);
        frame.render_widget(
            Paragraph::new(text)
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red))
                        .title(" Error details - Esc to close "),
                ),
            popup_area,
        );
    }

    fn centered_rect(&self, percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = ratatui::layout::Layout::default()
            .direction(ratatui::layout::Direction::Vertical)
            .constraints([
                ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
                ratatui::layout::Constraint::Percentage(percent_y),
                ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        ratatui::layout::Layout::default()
            .direction(ratatui::layout::Direction::Horizontal)
            .constraints([
                ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
                ratatui::layout::Constraint::Percentage(percent_x),
                ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

/// Keeps the end of `text` visible in a single-line field, like a scrolled input.
fn tail_to_width(text: &str, width: u16) -> String {
    let width = usize::from(width);
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    text.chars().skip(count - width).collect()
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
