use std::fmt;
use std::io::{self, BufRead, Write};

use quiz_core::model::QuizOutcome;
use services::{QuizController, Renderer};
use tracing::{debug, warn};

/// Prints quiz events as plain text lines.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(err) = self.out.write_fmt(args).and_then(|()| self.out.write_all(b"\n")) {
            warn!(error = %err, "failed to write to terminal");
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn show_question(&mut self, text: &str, options: &[String]) {
        self.line(format_args!("\n{text}"));
        for (index, option) in options.iter().enumerate() {
            self.line(format_args!("  {}) {option}", index + 1));
        }
        self.line(format_args!("Answer with an option number (q to quit):"));
    }

    fn highlight_selected(&mut self, index: usize) {
        self.line(format_args!("You picked {}.", index + 1));
    }

    fn highlight_correct_and_incorrect(&mut self, correct_index: usize, selected_index: usize) {
        if correct_index == selected_index {
            self.line(format_args!("[x] {} is right.", correct_index + 1));
        } else {
            self.line(format_args!(
                "[ ] {} is wrong, the answer was {}.",
                selected_index + 1,
                correct_index + 1
            ));
        }
    }

    fn show_feedback(&mut self, text: &str) {
        self.line(format_args!("{text}"));
        self.line(format_args!("Press Enter for the next question."));
    }

    fn show_score(&mut self, score: usize) {
        self.line(format_args!("Points: {score}"));
    }

    fn show_completion(&mut self, message: &str) {
        self.line(format_args!("\nQuiz Completed!"));
        self.line(format_args!("{message}"));
    }

    fn show_load_error(&mut self, message: &str) {
        self.line(format_args!("{message}"));
    }
}

/// Drive `controller` from `input`, one gesture per line.
///
/// A number picks that option and submits it, an empty line moves on, and
/// `q` stops early. Returns the outcome if the quiz was finished.
///
/// # Errors
///
/// Returns any error from reading `input`.
pub fn play<R: Renderer>(
    controller: &mut QuizController<R>,
    input: impl BufRead,
) -> io::Result<Option<QuizOutcome>> {
    let mut lines = input.lines();

    // Stop as soon as the quiz finishes so no further line is read.
    while !controller.session().is_finished() {
        let Some(line) = lines.next() else {
            break;
        };

        let line = line?;
        match line.trim() {
            "q" | "quit" => {
                debug!("player quit");
                break;
            }
            "" => controller.next(),
            raw => match raw.parse::<usize>() {
                Ok(number) if number >= 1 => {
                    controller.select_option(number - 1);
                    controller.submit();
                }
                _ => debug!(input = raw, "unrecognised input"),
            },
        }
    }

    Ok(controller.session().outcome().copied())
}
