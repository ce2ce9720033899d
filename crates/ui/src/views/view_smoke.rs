use services::{QuizController, Renderer};

use super::QuizIntent;
use super::test_harness::{render_card, setup_missing_source_harness, setup_view_harness};
use crate::vm::QuizVm;

const TWO_QUESTIONS: &str = r#"{
    "questions": [
        {
            "question": "Largest planet?",
            "options": ["Mars", "Jupiter", "Venus"],
            "correct": 1,
            "explanation": "Jupiter is the largest planet."
        },
        {
            "question": "Boiling point of water at sea level?",
            "options": ["90 C", "100 C"],
            "correct": 1,
            "explanation": "It boils at 100 C."
        }
    ]
}"#;

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_first_question() {
    let mut harness = setup_view_harness("first", TWO_QUESTIONS, 20);
    harness.rebuild();

    let html = harness.wait_until_loaded().await;

    assert!(html.contains("Largest planet?"), "missing question in {html}");
    assert!(html.contains("Jupiter"), "missing option in {html}");
    assert!(html.contains("Points: 0"), "missing score in {html}");
    assert!(html.contains("Submit"), "missing submit in {html}");
    assert!(!html.contains("Next"), "next shown too early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_plays_to_completion() {
    let mut harness = setup_view_harness("full", TWO_QUESTIONS, 20);
    harness.rebuild();
    harness.wait_until_loaded().await;

    harness.send(QuizIntent::Select(1));
    let html = harness.render();
    assert!(html.contains("option selected"), "missing selection in {html}");

    harness.send(QuizIntent::Submit);
    let html = harness.render();
    assert!(html.contains("option correct"), "missing reveal in {html}");
    assert!(html.contains("Correct! Jupiter is the largest planet."), "missing feedback in {html}");
    assert!(html.contains("Points: 1"), "score not updated in {html}");
    assert!(html.contains("Next"), "missing next in {html}");

    harness.send(QuizIntent::Next);
    harness.send(QuizIntent::Select(0));
    harness.send(QuizIntent::Submit);
    let html = harness.render();
    assert!(html.contains("option incorrect"), "missing wrong pick in {html}");
    assert!(html.contains("Oops! It boils at 100 C."), "missing feedback in {html}");

    harness.send(QuizIntent::Next);
    let html = harness.render();
    assert!(html.contains("Quiz Completed!"), "missing title in {html}");
    assert!(html.contains("You scored 1 out of 2 questions!"), "missing result in {html}");
    assert!(!html.contains("Submit"), "options still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_reports_missing_source() {
    let mut harness = setup_missing_source_harness("missing");
    harness.rebuild();

    let html = harness.wait_until_loaded().await;

    assert!(html.contains("Error loading quiz"), "missing error in {html}");
    assert!(html.contains("try again later"), "missing hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_reports_bad_format() {
    let mut harness = setup_view_harness("bad-format", "{}", 20);
    harness.rebuild();

    let html = harness.wait_until_loaded().await;

    assert!(
        html.contains("Invalid data format: questions array not found"),
        "missing format error in {html}"
    );
}

#[test]
fn quiz_card_shows_loading_text() {
    let html = render_card(QuizVm::default(), false, false);
    assert!(html.contains("Loading questions..."), "missing loading text in {html}");
    assert!(html.contains("Points: 0"), "missing score in {html}");
}

#[test]
fn quiz_card_renders_reveal_classes() {
    let mut vm = QuizVm::default();
    vm.show_question("Pick", &["a".to_string(), "b".to_string(), "c".to_string()]);
    vm.highlight_correct_and_incorrect(0, 2);

    let html = render_card(vm, false, true);

    assert!(html.contains("option correct"), "missing correct class in {html}");
    assert!(html.contains("option incorrect"), "missing incorrect class in {html}");
    assert!(html.contains("Next"), "missing next in {html}");
}

#[test]
fn quiz_card_renders_completion_from_controller() {
    let payload = serde_json::json!([
        { "question": "Q", "options": ["yes", "no"], "correct": 0 }
    ]);
    let mut controller = QuizController::with_seed(QuizVm::default(), 20, 1);
    controller.on_data_loaded(&payload).unwrap();
    controller.select_option(0);
    controller.submit();
    controller.next();

    let html = render_card(controller.renderer().clone(), false, false);

    assert!(html.contains("Quiz Completed!"), "missing title in {html}");
    assert!(html.contains("You scored 1 out of 1 questions!"), "missing score line in {html}");
    assert!(html.contains("Excellent job!"), "missing tier line in {html}");
}
