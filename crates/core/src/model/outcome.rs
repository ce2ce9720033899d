use std::fmt;

//
// ─── ANSWER FEEDBACK ──────────────────────────────────────────────────────────
//

/// Result of submitting an answer to one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub correct_index: usize,
    pub selected_index: usize,
    pub explanation: String,
}

impl AnswerFeedback {
    /// Text shown under the options once the answer is in.
    #[must_use]
    pub fn message(&self) -> String {
        let prefix = if self.correct { "Correct!" } else { "Oops!" };
        format!("{prefix} {}", self.explanation)
    }
}

//
// ─── SCORE TIER ───────────────────────────────────────────────────────────────
//

/// Band of the final percentage that selects the completion sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// 80% and above.
    Excellent,
    /// 60% to 79%.
    Good,
    /// Below 60%.
    Encouragement,
}

impl ScoreTier {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            _ => Self::Encouragement,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent job! You're a superstar learner!",
            Self::Good => "Good work! Keep practicing and you'll get even better!",
            Self::Encouragement => "Don't worry! Every quiz is a chance to learn something new.",
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Encouragement => "encouragement",
        };
        f.write_str(name)
    }
}

//
// ─── QUIZ OUTCOME ─────────────────────────────────────────────────────────────
//

/// Final tally of a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    score: usize,
    total: usize,
    percentage: u32,
    tier: ScoreTier,
}

impl QuizOutcome {
    /// Compute the outcome for `score` correct answers out of `total`.
    ///
    /// The percentage is rounded half up; a zero total counts as 0%.
    #[must_use]
    pub fn new(score: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let pct = (score as f64 / total as f64 * 100.0).round() as u32;
            pct
        };

        Self {
            score,
            total,
            percentage,
            tier: ScoreTier::from_percentage(percentage),
        }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        self.tier
    }

    /// Summary line plus the tier sentence, separated by a newline.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "You scored {} out of {} questions!\n{}",
            self.score,
            self.total,
            self.tier.message()
        )
    }
}
