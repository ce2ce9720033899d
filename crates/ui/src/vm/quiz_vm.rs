use services::Renderer;

/// Title shown in place of the question once the quiz is over.
pub const COMPLETED_TITLE: &str = "Quiz Completed!";
pub const LOADING_TEXT: &str = "Loading questions...";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuizVmPhase {
    #[default]
    Loading,
    Question,
    Completed,
    Failed,
}

/// Highlight of one answer button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OptionState {
    #[default]
    Idle,
    Selected,
    Correct,
    Incorrect,
}

impl OptionState {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Idle => "option",
            Self::Selected => "option selected",
            Self::Correct => "option correct",
            Self::Incorrect => "option incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub text: String,
    pub state: OptionState,
}

/// Plain-data picture of the quiz screen.
///
/// The controller mutates it through [`Renderer`]; components only read it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizVm {
    pub phase: QuizVmPhase,
    pub question_text: String,
    pub options: Vec<OptionVm>,
    pub feedback: Option<String>,
    pub score: usize,
    pub load_error: Option<String>,
}

impl QuizVm {
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("Points: {}", self.score)
    }

    /// Options are clickable only until the answer is revealed.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.options
            .iter()
            .any(|option| matches!(option.state, OptionState::Correct | OptionState::Incorrect))
    }
}

impl Renderer for QuizVm {
    fn show_question(&mut self, text: &str, options: &[String]) {
        self.phase = QuizVmPhase::Question;
        self.question_text = text.to_string();
        self.options = options
            .iter()
            .map(|text| OptionVm {
                text: text.clone(),
                state: OptionState::Idle,
            })
            .collect();
        self.feedback = None;
    }

    fn highlight_selected(&mut self, index: usize) {
        for (i, option) in self.options.iter_mut().enumerate() {
            option.state = if i == index {
                OptionState::Selected
            } else {
                OptionState::Idle
            };
        }
    }

    fn highlight_correct_and_incorrect(&mut self, correct_index: usize, selected_index: usize) {
        for (i, option) in self.options.iter_mut().enumerate() {
            option.state = if i == correct_index {
                OptionState::Correct
            } else if i == selected_index {
                OptionState::Incorrect
            } else {
                OptionState::Idle
            };
        }
    }

    fn show_feedback(&mut self, text: &str) {
        self.feedback = Some(text.to_string());
    }

    fn show_score(&mut self, score: usize) {
        self.score = score;
    }

    fn show_completion(&mut self, message: &str) {
        self.phase = QuizVmPhase::Completed;
        self.question_text = COMPLETED_TITLE.to_string();
        self.options.clear();
        self.feedback = Some(message.to_string());
    }

    fn show_load_error(&mut self, message: &str) {
        self.phase = QuizVmPhase::Failed;
        self.load_error = Some(message.to_string());
    }
}
