//! Display capability the quiz controller drives.

/// Anything that can show a quiz to a person.
///
/// Implementations only display; they never change session state. User
/// gestures travel the other way, into `QuizController`.
pub trait Renderer {
    /// Show a new question. Clears feedback and highlights left over from the
    /// previous question.
    fn show_question(&mut self, text: &str, options: &[String]);

    /// Mark `index` as the chosen option, un-marking any earlier choice.
    fn highlight_selected(&mut self, index: usize);

    /// Reveal the right answer, and the chosen one if it differs.
    fn highlight_correct_and_incorrect(&mut self, correct_index: usize, selected_index: usize);

    fn show_feedback(&mut self, text: &str);

    fn show_score(&mut self, score: usize);

    /// Replace the question area with the end-of-quiz message.
    fn show_completion(&mut self, message: &str);

    /// Replace the loading indicator with a fatal load error.
    fn show_load_error(&mut self, message: &str);
}
