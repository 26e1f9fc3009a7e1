use crate::support::{question, science_and_art, FakeBackend};
use std::sync::Arc;
use trivialist::trivia::{Draft, QuestionQuery};
use trivialist::ui::core::{Action, TaskManager};

#[tokio::test]
async fn test_category_load_reports_loaded() {
    let backend = FakeBackend::with_catalog(science_and_art(), vec![]);
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_category_load(Arc::new(backend));
    match rx.recv().await {
        Some(Action::CategoriesLoaded(categories)) => assert_eq!(categories.len(), 2),
        other => panic!("unexpected action: {:?}", other),
    }
}

#[tokio::test]
async fn test_category_load_reports_failure() {
    let backend = FakeBackend::default();
    backend.set(|s| s.fail_categories = true);
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_category_load(Arc::new(backend));
    assert!(matches!(rx.recv().await, Some(Action::CategoriesFailed(_))));
}

#[tokio::test]
async fn test_fetch_carries_sequence_number() {
    let backend = FakeBackend::with_catalog(vec![], vec![question(5, "Who?", 1)]);
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_question_fetch(Arc::new(backend.clone()), 42, QuestionQuery::search("who"));
    match rx.recv().await {
        Some(Action::QuestionsLoaded { seq, page }) => {
            assert_eq!(seq, 42);
            assert_eq!(page.total_questions, 1);
        }
        other => panic!("unexpected action: {:?}", other),
    }
    assert_eq!(backend.queries(), vec![QuestionQuery::search("who")]);
}

#[tokio::test]
async fn test_failed_fetch_carries_sequence_number() {
    let backend = FakeBackend::default();
    backend.set(|s| s.fail_fetch = true);
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_question_fetch(Arc::new(backend), 3, QuestionQuery::default());
    assert!(matches!(rx.recv().await, Some(Action::QuestionsFailed { seq: 3, .. })));
}

#[tokio::test]
async fn test_delete_and_submit_results() {
    let backend = FakeBackend::with_catalog(vec![], vec![question(7, "Seven", 1)]);
    let (mut manager, mut rx) = TaskManager::new();

    manager.spawn_question_delete(Arc::new(backend.clone()), 7);
    assert!(matches!(rx.recv().await, Some(Action::QuestionDeleted(7))));

    backend.set(|s| s.fail_create = true);
    manager.spawn_question_submit(Arc::new(backend.clone()), Draft::default());
    assert!(matches!(rx.recv().await, Some(Action::AddFailed(_))));
}

#[tokio::test]
async fn test_finished_tasks_are_cleaned_up() {
    let backend = FakeBackend::default();
    let (mut manager, mut rx) = TaskManager::new();

    let id = manager.spawn_category_load(Arc::new(backend));
    assert_eq!(manager.task_count(), 1);
    assert_eq!(manager.pending_descriptions(), vec!["Load categories".to_string()]);

    rx.recv().await;
    // The task may still be winding down right after sending
    let mut cleaned = Vec::new();
    for _ in 0..50 {
        cleaned.extend(manager.cleanup_finished_tasks());
        if manager.task_count() == 0 {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }

    assert_eq!(cleaned, vec![id]);
    assert_eq!(manager.task_count(), 0);
}
