use landmarks_core::{filter, filter_ids, seed_catalog, Landmark};

#[test]
fn empty_query_returns_catalog_unchanged() {
    let catalog = seed_catalog().unwrap();
    let result = filter(catalog.landmarks(), "");

    assert_eq!(result.len(), catalog.len());
    let ids = result.iter().map(|l| l.id).collect::<Vec<_>>();
    let expected = catalog.iter().map(|l| l.id).collect::<Vec<_>>();
    assert_eq!(ids, expected);
}

#[test]
fn canyon_query_returns_only_matching_entry() {
    let landmarks = vec![
        Landmark::new(1, "Half Dome", "North America", ""),
        Landmark::new(2, "Bryce Canyon", "North America", ""),
    ];
    let result = filter(&landmarks, "canyon");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Bryce Canyon");
}

#[test]
fn seed_search_keeps_catalog_order() {
    let catalog = seed_catalog().unwrap();
    let ids = filter_ids(catalog.landmarks(), "CANYON");
    assert_eq!(ids, vec![1004, 1008]);
}

#[test]
fn matching_handles_non_ascii_text() {
    let landmarks = vec![Landmark::new(
        1011,
        "Lençóis Maranhenses",
        "South America",
        "",
    )];
    assert_eq!(filter_ids(&landmarks, "LENÇÓIS"), vec![1011]);
}
