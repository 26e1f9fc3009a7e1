use crate::support::{key, question};
use crossterm::event::KeyCode;
use trivialist::ui::components::QuestionCard;
use trivialist::ui::core::Action;

#[test]
fn test_answer_starts_hidden() {
    let card = QuestionCard::new(question(3, "Hottest planet?", 1));
    assert!(!card.is_revealed());
    assert_eq!(card.id(), 3);
}

#[test]
fn test_double_toggle_restores_state() {
    let mut card = QuestionCard::new(question(3, "Hottest planet?", 1));
    card.toggle_reveal();
    assert!(card.is_revealed());
    card.toggle_reveal();
    assert!(!card.is_revealed());
}

#[test]
fn test_toggle_is_local_to_one_card() {
    let mut first = QuestionCard::new(question(1, "One", 1));
    let second = QuestionCard::new(question(2, "Two", 1));

    first.handle_key(key(KeyCode::Char(' ')));
    assert!(first.is_revealed());
    assert!(!second.is_revealed());
}

#[test]
fn test_delete_intent_fires_immediately() {
    let mut card = QuestionCard::new(question(9, "Nine", 2));
    assert!(matches!(card.handle_key(key(KeyCode::Char('d'))), Action::DeleteQuestion(9)));
    assert!(matches!(card.request_delete(), Action::DeleteQuestion(9)));
}
