mod quiz;

pub use quiz::{QuizCard, QuizIntent, QuizView};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
