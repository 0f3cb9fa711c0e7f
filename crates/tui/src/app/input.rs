use super::*;

const PAGE: i32 = 10;
const WHEEL: i32 = 3;

impl App {
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => {
                if self.overlay_open() {
                    return Ok(false);
                }
                self.input.handle_paste(&text);
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn overlay_open(&self) -> bool {
        self.show_help || self.show_error_details || self.sample_picker.is_some()
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return Ok(true);
        }

        if key.code == KeyCode::F(1) {
            self.show_help = !self.show_help;
            return Ok(false);
        }

        if self.show_help {
            if key.code == KeyCode::Esc {
                self.show_help = false;
            }
            return Ok(false);
        }

        if self.show_error_details {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.show_error_details = false,
                KeyCode::Char('e') if ctrl => self.show_error_details = false,
                _ => {}
            }
            return Ok(false);
        }

        if let Some(ref mut picker) = self.sample_picker {
            match key.code {
                KeyCode::Esc => self.sample_picker = None,
                KeyCode::Up | KeyCode::Char('k') => picker.move_up(),
                KeyCode::Down | KeyCode::Char('j') => picker.move_down(self.samples.len()),
                KeyCode::Enter => self.load_selected_sample(),
                _ => {}
            }
            return Ok(false);
        }

        if ctrl {
            match key.code {
                KeyCode::Char('p') => self.open_sample_picker(),
                KeyCode::Char('e') => {
                    if self.last_error.is_some() {
                        self.show_error_details = true;
                    }
                }
                KeyCode::Char('u') => self.input.clear_field(),
                _ => {}
            }
            return Ok(false);
        }

        match key.code {
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Tab | KeyCode::BackTab => self.input.toggle_field(),
            KeyCode::Backspace => self.input.handle_backspace(),
            KeyCode::PageUp => self.scroll_by(-PAGE),
            KeyCode::PageDown => self.scroll_by(PAGE),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                self.input.handle_char(c)
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<bool> {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL),
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL),
            MouseEventKind::Down(MouseButton::Left) => {
                let on_divider = self
                    .layout
                    .get_rect(PanelType::Divider)
                    .is_some_and(|r| contains(r, mouse.column, mouse.row));
                self.drag_origin = on_divider.then_some(mouse.column);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(origin) = self.drag_origin {
                    let width = self.results_width();
                    let delta = i32::from(mouse.column) - i32::from(origin);
                    self.layout.handle_drag(delta, width);
                    self.drag_origin = Some(mouse.column);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.drag_origin = None,
            _ => {}
        }
        Ok(false)
    }

    fn results_width(&self) -> u16 {
        [
            PanelType::SingleResult,
            PanelType::Divider,
            PanelType::MultiResult,
        ]
        .iter()
        .filter_map(|p| self.layout.get_rect(*p))
        .map(|r| r.width)
        .sum()
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_event(press(KeyCode::Char(c), KeyModifiers::NONE))
                .expect("key");
        }
    }

    #[test]
    fn typing_then_enter_on_blank_shows_banner() {
        let mut app = App::default();
        type_text(&mut app, "  ");
        app.handle_event(press(KeyCode::Enter, KeyModifiers::NONE))
            .expect("enter");
        assert_eq!(app.banner.as_deref(), Some("Please enter a problem to solve"));
        assert!(!app.is_solving());
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = App::default();
        let quit = app
            .handle_event(press(KeyCode::Char('q'), KeyModifiers::CONTROL))
            .expect("ctrl-q");
        assert!(quit);
        assert!(app.should_quit);
    }

    #[test]
    fn picker_swallows_keys_until_closed() {
        let mut app = App::default();
        app.handle_event(press(KeyCode::Char('p'), KeyModifiers::CONTROL))
            .expect("open picker");
        assert!(app.sample_picker.is_some());

        type_text(&mut app, "j");
        assert!(app.input.problem.is_empty());
        app.handle_event(press(KeyCode::Enter, KeyModifiers::NONE))
            .expect("load");
        assert!(app.input.problem.starts_with("A train travels"));
        assert!(!app.is_solving());
    }

    #[test]
    fn question_mark_is_plain_text() {
        let mut app = App::default();
        type_text(&mut app, "How many?");
        assert_eq!(app.input.problem, "How many?");
        assert!(!app.show_help);
    }

    #[test]
    fn paste_is_ignored_under_overlays() {
        let mut app = App::default();
        app.show_help = true;
        app.handle_event(Event::Paste("text".to_string()))
            .expect("paste");
        assert!(app.input.problem.is_empty());
    }
}
