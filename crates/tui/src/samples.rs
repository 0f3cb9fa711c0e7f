use agent_duel_backend::SampleProblem;

/// Shipped with the binary so the picker works before the backend answers.
pub fn builtin_samples() -> Vec<SampleProblem> {
    [
        (
            "Sarah has 15 apples. She gives 3 apples to her friend and then buys 8 more apples from the store. After that, she uses half of her apples to make a pie. How many apples does Sarah have left?",
            "10 apples",
            None,
        ),
        (
            "A train travels from City A to City B at 60 mph. The return journey from City B to City A takes 3 hours at 80 mph. What is the total distance of the round trip?",
            "480 miles",
            Some("Small model struggles with relationships between speed, time, and distance across multiple steps"),
        ),
        (
            "Tom has twice as many marbles as Jerry. Jerry has 5 more marbles than Bobby. If Bobby has 8 marbles, how many marbles do Tom, Jerry, and Bobby have in total?",
            "47 marbles",
            Some("Small model doesn't handle transitive relationships well"),
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (problem, answer, why))| SampleProblem {
        id: Some(i as u32 + 1),
        difficulty: None,
        problem: problem.to_string(),
        correct_answer: answer.to_string(),
        why_single_fails: why.map(str::to_string),
    })
    .collect()
}

#[derive(Debug, Clone)]
pub struct SamplePicker {
    pub selected: usize,
}

impl SamplePicker {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }
}

impl Default for SamplePicker {
    fn default() -> Self {
        Self::new()
    }
}
