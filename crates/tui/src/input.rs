#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormField {
    Problem,
    Credential,
}

pub struct InputState {
    pub problem: String,
    pub credential: String,
    pub field: FormField,
    credential_enabled: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl InputState {
    pub fn new(credential_enabled: bool) -> Self {
        Self {
            problem: String::new(),
            credential: String::new(),
            field: FormField::Problem,
            credential_enabled,
        }
    }

    pub fn credential_enabled(&self) -> bool {
        self.credential_enabled
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Problem => &mut self.problem,
            FormField::Credential => &mut self.credential,
        }
    }

    pub fn handle_char(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn handle_paste(&mut self, text: &str) {
        let cleaned: String = match self.field {
            FormField::Problem => text.replace(['\r', '\n'], " "),
            FormField::Credential => text.chars().filter(|c| !c.is_whitespace()).collect(),
        };
        self.focused_mut().push_str(&cleaned);
    }

    pub fn handle_backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn clear_field(&mut self) {
        self.focused_mut().clear();
    }

    pub fn set_problem(&mut self, text: &str) {
        self.problem = text.to_string();
        self.field = FormField::Problem;
    }

    pub fn toggle_field(&mut self) {
        if !self.credential_enabled {
            self.field = FormField::Problem;
            return;
        }
        self.field = match self.field {
            FormField::Problem => FormField::Credential,
            FormField::Credential => FormField::Problem,
        };
    }

    pub fn masked_credential(&self) -> String {
        "•".repeat(self.credential.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_goes_to_focused_field() {
        let mut input = InputState::new(true);
        input.handle_char('4');
        input.toggle_field();
        input.handle_char('s');
        input.handle_char('k');
        assert_eq!(input.problem, "4");
        assert_eq!(input.credential, "sk");
        assert_eq!(input.masked_credential(), "••");

        input.handle_backspace();
        input.toggle_field();
        input.clear_field();
        assert_eq!(input.credential, "s");
        assert!(input.problem.is_empty());
    }

    #[test]
    fn credential_field_unreachable_when_disabled() {
        let mut input = InputState::new(false);
        input.toggle_field();
        assert_eq!(input.field, FormField::Problem);
    }

    #[test]
    fn paste_flattens_newlines_in_problem() {
        let mut input = InputState::new(true);
        input.handle_paste("Tom has\ntwice as many");
        assert_eq!(input.problem, "Tom has twice as many");

        input.toggle_field();
        input.handle_paste(" sk-abc\n");
        assert_eq!(input.credential, "sk-abc");
    }
}
