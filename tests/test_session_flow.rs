//! Quiz session behavior over a realistic extracted item list.

use quizmark::{QuizItem, QuizSession};

fn extracted_items() -> Vec<QuizItem> {
    vec![
        QuizItem {
            question: "What is 2+2?".to_string(),
            answers: vec!["4".to_string(), "5".to_string()],
            correct_answer_index: 0,
        },
        QuizItem {
            question: "Capital of France?".to_string(),
            answers: vec!["Paris".to_string(), "Lyon".to_string(), "Nice".to_string()],
            correct_answer_index: 0,
        },
    ]
}

#[test]
fn test_full_run_scores_correct_answers() {
    let mut session = QuizSession::new(extracted_items());
    assert_eq!(session.total_questions(), 2);

    // First answer highlighted after the question is the correct one.
    session.select_answer(0);
    assert_eq!(session.submit_answer(), Some(true));

    session.select_answer(2);
    assert_eq!(session.submit_answer(), Some(false));

    assert!(session.is_finished());
    assert_eq!(session.score(), 1);
}

#[test]
fn test_changing_selection_before_submit() {
    let mut session = QuizSession::new(extracted_items());
    session.select_answer(1);
    session.select_answer(0);
    assert_eq!(session.selected_answer(), Some(0));
    assert_eq!(session.submit_answer(), Some(true));
}

#[test]
fn test_restart_replays_the_same_quiz() {
    let mut session = QuizSession::new(extracted_items());
    session.select_answer(1);
    session.submit_answer();
    session.select_answer(0);
    session.submit_answer();
    assert!(session.is_finished());

    session.restart();
    assert!(!session.is_finished());
    assert_eq!(session.score(), 0);
    assert_eq!(session.current_item().unwrap().question, "What is 2+2?");
}
