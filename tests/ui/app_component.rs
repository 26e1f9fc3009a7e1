use crate::support::{
    build_app, build_app_with_config, key, question, science_and_art, settle, type_text, FakeBackend,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use trivialist::config::Config;
use trivialist::constants::{ALERT_ADD_QUESTION, ALERT_LOAD_CATEGORIES, ALERT_LOAD_QUESTIONS};
use trivialist::trivia::{Draft, QuestionQuery};
use trivialist::ui::app_component::AppState;
use trivialist::ui::components::question_list::FetchState;
use trivialist::ui::core::{Component, EventType, View};

fn catalog() -> FakeBackend {
    FakeBackend::with_catalog(
        science_and_art(),
        vec![
            question(5, "What is a cell?", 1),
            question(7, "Who painted Guernica?", 2),
            question(9, "What is the title of the book?", 6),
        ],
    )
}

fn press(app: &mut trivialist::ui::AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(key(code))).unwrap();
}

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert_eq!(state.view, View::List);
    assert!(!state.show_logs);
}

#[tokio::test]
async fn test_mount_loads_categories_and_questions() {
    let backend = catalog();
    let mut app = build_app(&backend);

    app.mount();
    assert_eq!(app.list().state(), FetchState::Loading);
    settle(&mut app, 2).await;

    assert_eq!(app.directory().len(), 2);
    assert_eq!(app.list().question_ids(), vec![5, 7, 9]);
    assert_eq!(app.list().state(), FetchState::Loaded);
    assert_eq!(backend.queries(), vec![QuestionQuery::search("")]);

    // Children see the directory
    assert_eq!(app.form().category_options().len(), 2);
}

#[tokio::test]
async fn test_category_failure_alerts_and_keeps_app_usable() {
    let backend = catalog();
    backend.set(|s| s.fail_categories = true);
    let mut app = build_app(&backend);

    app.mount();
    settle(&mut app, 2).await;

    assert!(app.directory().is_empty());
    assert_eq!(app.alert().current(), Some(ALERT_LOAD_CATEGORIES));
    assert_eq!(app.list().question_ids(), vec![5, 7, 9]);
    assert!(app.form().category_options().is_empty());

    // The alert is modal until dismissed
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Enter);
    assert!(!app.alert().is_visible());
}

#[tokio::test]
async fn test_search_flow() {
    let backend = catalog();
    let mut app = build_app(&backend);
    app.mount();
    settle(&mut app, 2).await;

    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "title");
    assert_eq!(backend.queries().len(), 1);

    press(&mut app, KeyCode::Enter);
    settle(&mut app, 1).await;

    assert_eq!(
        backend.queries(),
        vec![
            QuestionQuery::search(""),
            QuestionQuery::search("title")
        ]
    );
    assert_eq!(app.list().question_ids(), vec![9]);
    assert_eq!(app.list().total_count(), 1);
}

#[tokio::test]
async fn test_fetch_failure_keeps_list_and_alerts() {
    let backend = catalog();
    let mut app = build_app(&backend);
    app.mount();
    settle(&mut app, 2).await;

    backend.set(|s| s.fail_fetch = true);
    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Enter);
    settle(&mut app, 1).await;

    assert_eq!(app.list().state(), FetchState::Error);
    assert_eq!(app.list().question_ids(), vec![5, 7, 9]);
    assert_eq!(app.alert().current(), Some(ALERT_LOAD_QUESTIONS));
}

#[tokio::test]
async fn test_delete_flow_without_refetch() {
    let backend = catalog();
    let mut app = build_app(&backend);
    app.mount();
    settle(&mut app, 2).await;

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('d'));
    settle(&mut app, 1).await;

    assert_eq!(backend.deleted(), vec![7]);
    assert_eq!(app.list().question_ids(), vec![5, 9]);
    assert_eq!(app.list().total_count(), 2);
    assert_eq!(backend.queries().len(), 1);
}

#[tokio::test]
async fn test_category_browsing_then_search_resets_panel() {
    let backend = catalog();
    let mut app = build_app(&backend);
    app.mount();
    settle(&mut app, 2).await;

    press(&mut app, KeyCode::Char('J'));
    settle(&mut app, 1).await;
    assert_eq!(app.panel().selected(), Some(1));
    assert_eq!(app.list().question_ids(), vec![5]);
    assert_eq!(backend.queries().last(), Some(&QuestionQuery::Category(1)));

    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Enter);
    settle(&mut app, 1).await;
    assert_eq!(app.panel().selected(), None);
    assert_eq!(app.list().question_ids(), vec![5, 7, 9]);
}

#[tokio::test]
async fn test_add_question_flow() {
    let backend = catalog();
    let mut app = build_app(&backend);
    app.mount();
    settle(&mut app, 2).await;

    press(&mut app, KeyCode::F(2));
    assert_eq!(app.view(), View::Add);

    type_text(&mut app, "2+2?");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "4");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    settle(&mut app, 1).await;

    assert_eq!(
        backend.created(),
        vec![Draft {
            question: "2+2?".to_string(),
            answer: "4".to_string(),
            difficulty: 2,
            category: 1,
        }]
    );
    assert_eq!(app.form().draft(), &Draft::default());
    assert!(app.form().show_success());
    // The list is not refreshed after adding
    assert_eq!(backend.queries().len(), 1);
}

#[tokio::test]
async fn test_add_failure_keeps_draft() {
    let backend = catalog();
    backend.set(|s| s.fail_create = true);
    let mut app = build_app(&backend);
    app.mount();
    settle(&mut app, 2).await;

    app.form_mut().set_question("Q");
    app.form_mut().set_answer("A");
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.view(), View::Add);
    press(&mut app, KeyCode::Enter);
    settle(&mut app, 1).await;

    assert_eq!(app.form().draft().question, "Q");
    assert_eq!(app.form().draft().answer, "A");
    assert!(!app.form().show_success());
    assert_eq!(app.alert().current(), Some(ALERT_ADD_QUESTION));
}

#[tokio::test]
async fn test_empty_form_never_reaches_backend() {
    let backend = catalog();
    let mut app = build_app(&backend);

    press(&mut app, KeyCode::F(2));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.active_task_count(), 0);
    assert!(backend.created().is_empty());
}

#[test]
fn test_quit_and_logs_keys() {
    let backend = catalog();
    let mut app = build_app(&backend);

    press(&mut app, KeyCode::Char('G'));
    assert!(app.is_showing_logs());
    press(&mut app, KeyCode::Esc);
    assert!(!app.is_showing_logs());

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
        .unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_render_shows_unknown_category() {
    let backend = catalog();
    let mut app = build_app(&backend);
    app.mount();
    settle(&mut app, 2).await;

    // Reveal the answer of the question whose category is not in the directory
    press(&mut app, KeyCode::Char('k'));
    press(&mut app, KeyCode::Char(' '));

    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let screen: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(screen.contains("unknown"));
    assert!(screen.contains("Answer: answer 9"));
    assert!(screen.contains("Science"));
}

#[test]
fn test_icon_theme_cycles_from_list_view() {
    let backend = catalog();
    let mut app = build_app(&backend);
    let before = app.icons().theme();

    press(&mut app, KeyCode::Char('i'));
    assert_ne!(app.icons().theme(), before);
    assert_eq!(app.list().icons.theme(), app.icons().theme());
}

#[tokio::test]
async fn test_paging_through_search_results() {
    let backend = catalog();
    backend.set(|s| s.page_size = Some(2));
    let mut config = Config::default();
    config.api.page_size = 2;
    let mut app = build_app_with_config(&backend, config);
    app.mount();
    settle(&mut app, 2).await;

    assert_eq!(app.list().question_ids(), vec![5, 7]);
    assert_eq!(app.list().total_count(), 3);
    assert_eq!(app.list().page_count(), 2);

    press(&mut app, KeyCode::Char('n'));
    settle(&mut app, 1).await;
    assert_eq!(app.list().question_ids(), vec![9]);
    assert_eq!(app.list().current_page(), Some(2));
    assert_eq!(backend.queries().last(), QuestionQuery::search("").with_page(2).as_ref());

    // A new search starts again from the first page
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "what");
    press(&mut app, KeyCode::Enter);
    settle(&mut app, 1).await;
    assert_eq!(backend.queries().last(), Some(&QuestionQuery::search("what")));
    assert_eq!(app.list().question_ids(), vec![5, 9]);
    assert_eq!(app.list().current_page(), Some(1));
}

#[tokio::test]
async fn test_tick_applies_background_results() {
    let backend = catalog();
    let mut app = build_app(&backend);
    app.mount();

    let mut redraws = 0;
    for _ in 0..50 {
        tokio::task::yield_now().await;
        if app.handle_event(EventType::Tick).unwrap() {
            redraws += 1;
        }
        if app.list().state() == FetchState::Loaded && !app.directory().is_empty() && !app.is_busy() {
            break;
        }
    }

    assert!(redraws > 0);
    assert_eq!(app.list().question_ids(), vec![5, 7, 9]);
    assert_eq!(app.directory().len(), 2);

    // Nothing pending, nothing to redraw
    assert!(!app.handle_event(EventType::Tick).unwrap());
}
