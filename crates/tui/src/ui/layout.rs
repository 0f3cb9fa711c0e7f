use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::panel::{Panel, PanelType};

const MIN_SPLIT_PERCENT: u16 = 25;
const MAX_SPLIT_PERCENT: u16 = 75;
const TOPBAR_HEIGHT: u16 = 1;
const INPUT_HEIGHT: u16 = 3;
const BANNER_HEIGHT: u16 = 1;
const FOOTER_HEIGHT: u16 = 1;
pub const DIVIDER_WIDTH: u16 = 4;

pub struct LayoutState {
    split_percent: u16,
    cached_panels: Vec<Panel>,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            split_percent: 50,
            cached_panels: Vec::new(),
        }
    }
}

impl LayoutState {
    pub fn calculate_layout(&mut self, area: Rect, credential: bool, results: bool) -> &[Panel] {
        let mut constraints = vec![
            Constraint::Length(TOPBAR_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
        ];
        if credential {
            constraints.push(Constraint::Length(INPUT_HEIGHT));
        }
        constraints.push(Constraint::Length(BANNER_HEIGHT));
        constraints.push(Constraint::Min(3));
        constraints.push(Constraint::Length(FOOTER_HEIGHT));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut panels = Vec::with_capacity(9);
        let mut row = rows.iter().copied();
        let mut next_row = || row.next().unwrap_or_default();

        panels.push(Panel {
            panel_type: PanelType::Topbar,
            rect: next_row(),
        });
        panels.push(Panel {
            panel_type: PanelType::Problem,
            rect: next_row(),
        });
        if credential {
            panels.push(Panel {
                panel_type: PanelType::Credential,
                rect: next_row(),
            });
        }
        panels.push(Panel {
            panel_type: PanelType::Banner,
            rect: next_row(),
        });
        let content = next_row();
        let footer = next_row();

        if results {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(self.split_percent),
                    Constraint::Length(DIVIDER_WIDTH),
                    Constraint::Fill(1),
                ])
                .split(content);
            panels.push(Panel {
                panel_type: PanelType::SingleResult,
                rect: columns[0],
            });
            panels.push(Panel {
                panel_type: PanelType::Divider,
                rect: columns[1],
            });
            panels.push(Panel {
                panel_type: PanelType::MultiResult,
                rect: columns[2],
            });
        } else {
            panels.push(Panel {
                panel_type: PanelType::Samples,
                rect: content,
            });
        }

        panels.push(Panel {
            panel_type: PanelType::Footer,
            rect: footer,
        });

        self.cached_panels = panels;
        &self.cached_panels
    }

    pub fn get_panels(&self) -> &[Panel] {
        &self.cached_panels
    }

    pub fn split_percent(&self) -> u16 {
        self.split_percent
    }

    /// Moves the single/multi divider by `delta` columns of a `width` wide area.
    pub fn handle_drag(&mut self, delta: i32, width: u16) {
        if width == 0 {
            return;
        }
        let delta_percent = delta.saturating_mul(100) / i32::from(width);
        let new_split = (i32::from(self.split_percent) + delta_percent)
            .clamp(i32::from(MIN_SPLIT_PERCENT), i32::from(MAX_SPLIT_PERCENT));
        self.split_percent = new_split as u16;
    }

    pub fn get_rect(&self, panel_type: PanelType) -> Option<Rect> {
        self.cached_panels
            .iter()
            .find(|p| p.panel_type == panel_type)
            .map(|p| p.rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_split_into_three_columns() {
        let mut layout = LayoutState::default();
        let panels = layout.calculate_layout(Rect::new(0, 0, 104, 40), true, true);
        let kinds: Vec<PanelType> = panels.iter().map(|p| p.panel_type).collect();
        assert_eq!(
            kinds,
            vec![
                PanelType::Topbar,
                PanelType::Problem,
                PanelType::Credential,
                PanelType::Banner,
                PanelType::SingleResult,
                PanelType::Divider,
                PanelType::MultiResult,
                PanelType::Footer,
            ]
        );
        let divider = layout.get_rect(PanelType::Divider).expect("divider");
        assert_eq!(divider.width, DIVIDER_WIDTH);
    }

    #[test]
    fn samples_shown_without_results() {
        let mut layout = LayoutState::default();
        layout.calculate_layout(Rect::new(0, 0, 80, 30), false, false);
        assert!(layout.get_rect(PanelType::Samples).is_some());
        assert!(layout.get_rect(PanelType::Credential).is_none());
        assert!(layout.get_rect(PanelType::SingleResult).is_none());
    }

    #[test]
    fn drag_is_clamped() {
        let mut layout = LayoutState::default();
        layout.handle_drag(100, 100);
        assert_eq!(layout.split_percent(), MAX_SPLIT_PERCENT);
        layout.handle_drag(-200, 100);
        assert_eq!(layout.split_percent(), MIN_SPLIT_PERCENT);
    }

    #[test]
    fn wide_drag_does_not_wrap_around() {
        let mut layout = LayoutState::default();
        layout.handle_drag(40_000, 200);
        assert_eq!(layout.split_percent(), MAX_SPLIT_PERCENT);
        layout.handle_drag(-40_000, 200);
        assert_eq!(layout.split_percent(), MIN_SPLIT_PERCENT);
    }
}
