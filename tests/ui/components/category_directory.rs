use crate::support::science_and_art;
use trivialist::constants::ALERT_LOAD_CATEGORIES;
use trivialist::ui::components::category_directory::LoadState;
use trivialist::ui::components::CategoryDirectory;
use trivialist::ui::core::Action;

#[test]
fn test_loaded_directory() {
    let mut directory = CategoryDirectory::new();
    directory.begin_load();
    assert_eq!(directory.state(), LoadState::Loading);

    directory.apply_loaded(science_and_art());
    assert_eq!(directory.state(), LoadState::Loaded);
    assert_eq!(directory.len(), 2);
    assert!(directory.contains(2));
    assert_eq!(directory.name_of(1), "Science");
    assert_eq!(
        directory.options(),
        vec![(1, "Science".to_string()), (2, "Art".to_string())]
    );
}

#[test]
fn test_missing_id_is_unknown() {
    let mut directory = CategoryDirectory::new();
    directory.apply_loaded(science_and_art());
    assert_eq!(directory.name_of(6), "unknown");
}

#[test]
fn test_failed_load_alerts_and_stays_empty() {
    let mut directory = CategoryDirectory::new();
    directory.update(Action::LoadCategories);

    match directory.update(Action::CategoriesFailed("500".to_string())) {
        Action::ShowAlert(message) => assert_eq!(message, ALERT_LOAD_CATEGORIES),
        other => panic!("unexpected action: {:?}", other),
    }
    assert_eq!(directory.state(), LoadState::Failed);
    assert!(directory.is_empty());
    assert!(directory.options().is_empty());
}
