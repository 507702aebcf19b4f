use landmarks_core::{Catalog, Landmark, ModelData, NavigationTarget};
use uuid::Uuid;

fn setup() -> ModelData {
    let catalog = Catalog::from_landmarks(vec![
        Landmark::new(1, "Half Dome", "North America", "Granite dome."),
        Landmark::new(2, "Bryce Canyon", "North America", "Hoodoos."),
    ])
    .unwrap();
    ModelData::new(catalog)
}

#[test]
fn effective_mutations_bump_version() {
    let mut model = setup();
    let start = model.version();

    let id = model.create_collection(None);
    assert!(model.has_changed_since(start));

    let before_add = model.version();
    model.add_landmark(id, 1).unwrap();
    assert_eq!(model.version(), before_add + 1);
}

#[test]
fn noops_and_failures_keep_version() {
    let mut model = setup();
    let id = model.create_collection(None);
    model.add_landmark(id, 1).unwrap();
    let version = model.version();

    model.add_landmark(id, 1).unwrap();
    model.remove_landmark(id, 2).unwrap();
    assert!(model.add_landmark(id, 99).is_err());
    assert!(model.rename_collection(Uuid::new_v4(), "X").is_err());
    let favorites_id = model.favorites().id;
    assert!(model.delete_collection(favorites_id).is_err());
    model.set_search_text("");

    assert!(!model.has_changed_since(version));
}

#[test]
fn unchanged_rename_and_description_keep_version() {
    let mut model = setup();
    let id = model.create_collection(Some("Trip".to_string()));
    model.set_collection_description(id, "Weekend").unwrap();
    let version = model.version();

    model.rename_collection(id, "Trip").unwrap();
    model.set_collection_description(id, "Weekend").unwrap();
    assert!(!model.has_changed_since(version));

    model.rename_collection(id, "Road Trip").unwrap();
    assert_eq!(model.version(), version + 1);
}

#[test]
fn search_text_drives_search_results() {
    let mut model = setup();
    assert_eq!(model.search_results().len(), 2);

    model.set_search_text("canyon");
    let ids = model
        .search_results()
        .iter()
        .map(|landmark| landmark.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![2]);
    assert_eq!(model.search_text(), "canyon");
}

#[test]
fn navigation_validates_targets_and_pops() {
    let mut model = setup();
    assert!(model.navigate_to(NavigationTarget::Landmark(7)).is_err());
    assert!(model
        .navigate_to(NavigationTarget::Collection(Uuid::new_v4()))
        .is_err());

    model.navigate_to(NavigationTarget::Landmark(1)).unwrap();
    model.navigate_to(NavigationTarget::Landmark(2)).unwrap();
    assert_eq!(model.navigate_back(), Some(NavigationTarget::Landmark(2)));

    model.reset_navigation();
    assert!(model.navigation_path().is_empty());
    assert_eq!(model.navigate_back(), None);
}

#[test]
fn select_landmark_validates_and_clears() {
    let mut model = setup();
    assert!(model.select_landmark(Some(5)).is_err());
    assert!(model.selected_landmark().is_none());

    model.select_landmark(Some(2)).unwrap();
    assert_eq!(model.selected_landmark().map(|l| l.id), Some(2));
    model.select_landmark(None).unwrap();
    assert!(model.selected_landmark().is_none());
}
