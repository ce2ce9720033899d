mod quiz_vm;

pub use quiz_vm::{COMPLETED_TITLE, LOADING_TEXT, OptionState, OptionVm, QuizVm, QuizVmPhase};
