pub struct Keybinds;

impl Default for Keybinds {
    fn default() -> Self {
        Self
    }
}

impl Keybinds {
    pub fn help_text(&self, credential_enabled: bool) -> String {
        let mut text = String::from(
            r#"Keyboard Shortcuts:

Problem:
  Type          Edit the focused field
  Enter         Solve with both agents
  Ctrl + U      Clear the focused field
  Ctrl + P      Pick a sample problem
"#,
        );
        if credential_enabled {
            text.push_str("  Tab           Switch problem / API key\n");
        }
        text.push_str(
            r#"
Results:
  PgUp / PgDn   Scroll both panels
  Mouse wheel   Scroll both panels

General:
  F1            Toggle this help
  Ctrl + E      Show latest error details
  Esc           Close popup
  Ctrl + Q      Quit
"#,
        );
        text
    }
}
