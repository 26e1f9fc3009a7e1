use crate::support::{key, page, page_of};
use crossterm::event::KeyCode;
use trivialist::constants::{ALERT_DELETE_QUESTION, ALERT_LOAD_QUESTIONS};
use trivialist::trivia::QuestionQuery;
use trivialist::ui::components::question_list::FetchState;
use trivialist::ui::components::QuestionListView;
use trivialist::ui::core::{Action, Component};

/// Issue a fetch and return its sequence number
fn issue(list: &mut QuestionListView, query: QuestionQuery) -> u64 {
    match list.issue_fetch(query) {
        Action::FetchQuestions { seq, .. } => seq,
        other => panic!("unexpected action: {:?}", other),
    }
}

fn loaded_list(ids: &[u32]) -> QuestionListView {
    let mut list = QuestionListView::new();
    let seq = issue(&mut list, QuestionQuery::default());
    list.apply_loaded(seq, page(ids));
    list
}

#[test]
fn test_fetch_state_transitions() {
    let mut list = QuestionListView::new();
    assert_eq!(list.state(), FetchState::Idle);

    let seq = issue(&mut list, QuestionQuery::default());
    assert_eq!(list.state(), FetchState::Loading);

    list.apply_loaded(seq, page(&[1, 2]));
    assert_eq!(list.state(), FetchState::Loaded);
    assert_eq!(list.question_ids(), vec![1, 2]);
    assert_eq!(list.total_count(), 2);
}

#[test]
fn test_sequence_numbers_increase() {
    let mut list = QuestionListView::new();
    let first = issue(&mut list, QuestionQuery::default());
    let second = issue(&mut list, QuestionQuery::search("a"));
    assert!(second > first);
}

#[test]
fn test_search_submit_issues_one_fetch_with_query() {
    let mut list = QuestionListView::new();
    match list.update(Action::SearchQuestions("".to_string())) {
        Action::FetchQuestions { query, .. } => assert_eq!(query, QuestionQuery::search("")),
        other => panic!("unexpected action: {:?}", other),
    }
    assert_eq!(list.current_query(), &QuestionQuery::search(""));
}

#[test]
fn test_stale_response_never_overwrites_newer_one() {
    let mut list = QuestionListView::new();
    let older = issue(&mut list, QuestionQuery::search("a"));
    let newer = issue(&mut list, QuestionQuery::search("ab"));

    list.apply_loaded(newer, page(&[2]));
    assert_eq!(list.state(), FetchState::Loaded);

    list.apply_loaded(older, page(&[1, 2, 3]));
    assert_eq!(list.question_ids(), vec![2]);
    assert_eq!(list.total_count(), 1);
    assert_eq!(list.state(), FetchState::Loaded);
}

#[test]
fn test_older_response_applies_while_newer_is_pending() {
    let mut list = QuestionListView::new();
    let older = issue(&mut list, QuestionQuery::search("a"));
    let newer = issue(&mut list, QuestionQuery::search("ab"));

    list.apply_loaded(older, page(&[1, 2, 3]));
    assert_eq!(list.question_ids(), vec![1, 2, 3]);
    assert_eq!(list.state(), FetchState::Loading);

    list.apply_loaded(newer, page(&[2]));
    assert_eq!(list.question_ids(), vec![2]);
    assert_eq!(list.state(), FetchState::Loaded);
}

#[test]
fn test_failure_keeps_previous_questions() {
    let mut list = loaded_list(&[5, 7, 9]);
    let seq = issue(&mut list, QuestionQuery::search("x"));

    match list.apply_failed(seq, "timeout") {
        Action::ShowAlert(message) => assert_eq!(message, ALERT_LOAD_QUESTIONS),
        other => panic!("unexpected action: {:?}", other),
    }
    assert_eq!(list.state(), FetchState::Error);
    assert_eq!(list.question_ids(), vec![5, 7, 9]);
    assert_eq!(list.total_count(), 3);
}

#[test]
fn test_stale_failure_is_ignored() {
    let mut list = QuestionListView::new();
    let older = issue(&mut list, QuestionQuery::default());
    let newer = issue(&mut list, QuestionQuery::default());
    list.apply_loaded(newer, page(&[1]));

    assert!(list.apply_failed(older, "late").is_none());
    assert_eq!(list.state(), FetchState::Loaded);
}

#[test]
fn test_delete_removes_exactly_one_entry() {
    let mut list = loaded_list(&[5, 7, 9]);

    assert!(list.update(Action::QuestionDeleted(7)).is_none());
    assert_eq!(list.question_ids(), vec![5, 9]);
    assert_eq!(list.total_count(), 2);
}

#[test]
fn test_delete_of_missing_id_keeps_total() {
    let mut list = loaded_list(&[5, 7, 9]);

    assert!(!list.remove_question(42));
    assert_eq!(list.question_ids(), vec![5, 7, 9]);
    assert_eq!(list.total_count(), 3);
}

#[test]
fn test_delete_failure_leaves_list_untouched() {
    let mut list = loaded_list(&[5, 7, 9]);

    match list.update(Action::DeleteFailed {
        id: 7,
        error: "422".to_string(),
    }) {
        Action::ShowAlert(message) => assert_eq!(message, ALERT_DELETE_QUESTION),
        other => panic!("unexpected action: {:?}", other),
    }
    assert_eq!(list.question_ids(), vec![5, 7, 9]);
    assert_eq!(list.total_count(), 3);
}

#[test]
fn test_category_selection_fetches_category() {
    let mut list = QuestionListView::new();
    match list.update(Action::SelectCategory(Some(4))) {
        Action::FetchQuestions { query, .. } => assert_eq!(query, QuestionQuery::Category(4)),
        other => panic!("unexpected action: {:?}", other),
    }
    match list.update(Action::SelectCategory(None)) {
        Action::FetchQuestions { query, .. } => assert_eq!(query, QuestionQuery::default()),
        other => panic!("unexpected action: {:?}", other),
    }
}

#[test]
fn test_keyboard_navigation_and_card_keys() {
    let mut list = loaded_list(&[5, 7, 9]);

    list.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(list.selected_index(), 1);
    list.handle_key_events(key(KeyCode::Char('k')));
    list.handle_key_events(key(KeyCode::Char('k')));
    assert_eq!(list.selected_index(), 2);

    list.handle_key_events(key(KeyCode::Char(' ')));
    assert!(list.cards()[2].is_revealed());
    assert!(!list.cards()[0].is_revealed());

    assert!(matches!(
        list.handle_key_events(key(KeyCode::Char('d'))),
        Action::DeleteQuestion(9)
    ));
}

#[test]
fn test_slash_focuses_search() {
    let mut list = loaded_list(&[1]);
    list.handle_key_events(key(KeyCode::Char('/')));
    assert!(list.is_search_focused());

    // While focused, list keys become text
    list.handle_key_events(key(KeyCode::Char('d')));
    assert_eq!(list.search_bar.query(), "d");
}

/// List showing the first page of an unfiltered listing with `total` matches
fn first_page_of(total: usize) -> QuestionListView {
    let mut list = QuestionListView::new();
    let seq = issue(&mut list, QuestionQuery::default());
    list.apply_loaded(seq, page_of(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], total));
    list
}

#[test]
fn test_page_count_follows_total() {
    let list = first_page_of(19);
    assert_eq!(list.current_page(), Some(1));
    assert_eq!(list.page_count(), 2);

    let mut small = QuestionListView::new();
    small.set_page_size(5);
    let seq = issue(&mut small, QuestionQuery::default());
    small.apply_loaded(seq, page_of(&[1, 2, 3, 4, 5], 19));
    assert_eq!(small.page_count(), 4);
}

#[test]
fn test_next_and_previous_page_keep_search_term() {
    let mut list = QuestionListView::new();
    let seq = issue(&mut list, QuestionQuery::search("what"));
    list.apply_loaded(seq, page_of(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 19));

    let next = match list.handle_key_events(key(KeyCode::Char('n'))) {
        Action::FetchQuestions { seq, query } => {
            assert_eq!(query, QuestionQuery::search("what").with_page(2).unwrap());
            seq
        }
        other => panic!("unexpected action: {:?}", other),
    };
    assert!(next > seq);
    assert_eq!(list.state(), FetchState::Loading);
    list.apply_loaded(next, page_of(&[11, 12], 19));
    assert_eq!(list.current_page(), Some(2));
    assert_eq!(list.question_ids(), vec![11, 12]);

    // Already on the last page
    assert!(list.handle_key_events(key(KeyCode::PageDown)).is_none());

    match list.handle_key_events(key(KeyCode::Char('p'))) {
        Action::FetchQuestions { query, .. } => assert_eq!(query, QuestionQuery::search("what")),
        other => panic!("unexpected action: {:?}", other),
    }
}

#[test]
fn test_no_previous_page_from_first_page() {
    let mut list = first_page_of(19);
    assert!(list.previous_page().is_none());
}

#[test]
fn test_category_listing_is_not_paged() {
    let mut list = QuestionListView::new();
    let seq = issue(&mut list, QuestionQuery::Category(1));
    list.apply_loaded(seq, page_of(&[1, 2], 25));

    assert_eq!(list.current_page(), None);
    assert!(list.next_page().is_none());
}

#[test]
fn test_stale_page_response_is_discarded() {
    let mut list = first_page_of(30);
    let second = match list.next_page() {
        Action::FetchQuestions { seq, .. } => seq,
        other => panic!("unexpected action: {:?}", other),
    };
    let search = issue(&mut list, QuestionQuery::search("cell"));

    list.apply_loaded(search, page_of(&[42], 1));
    list.apply_loaded(second, page_of(&[11, 12, 13], 30));

    assert_eq!(list.question_ids(), vec![42]);
    assert_eq!(list.current_page(), Some(1));
    assert_eq!(list.page_count(), 1);
    assert_eq!(list.state(), FetchState::Loaded);
}

#[test]
fn test_failed_page_fetch_stays_on_shown_page() {
    let mut list = first_page_of(30);
    let second = match list.next_page() {
        Action::FetchQuestions { seq, .. } => seq,
        other => panic!("unexpected action: {:?}", other),
    };
    list.apply_failed(second, "timeout");

    assert_eq!(list.current_page(), Some(1));
    match list.next_page() {
        Action::FetchQuestions { query, .. } => assert_eq!(query.page(), Some(2)),
        other => panic!("unexpected action: {:?}", other),
    }
}
