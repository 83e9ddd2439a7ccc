use crate::{
    catalogue::{self, CatalogueStore},
    config::Config,
    filter::{self, FilterQuery},
    loader::{self, LoadSource},
    sheet,
};

#[tokio::test]
async fn test_sheet_scenario() {
    let text = tokio::fs::read_to_string("src/tests/scenario1/catalogue.csv")
        .await
        .unwrap();
    let config = Config::default();
    let records = sheet::records(&text, &config);

    // Six source lines: one blank (dropped) and one untitled (discarded).
    assert_eq!(records.len(), 3);

    let roads = &records[0];
    assert_eq!(roads.title, "Road, Bridge & Culvert Renewal");
    assert_eq!(
        roads.summary,
        "Rehabilitate rural link roads.\nIncludes \"priority\" culverts."
    );
    assert_eq!(roads.cost_label, "4500000000");
    assert_eq!(roads.category, "Infrastructure");
    assert_eq!(roads.document_url, "/assets/pdfs/roads-renewal.pdf");
    assert_eq!(roads.thumbnail_url, "/assets/thumbs/roads%20renewal.jpg");

    let customs = &records[1];
    assert_eq!(customs.cost_label, "No costing available");
    assert_eq!(customs.document_url, "https://example.org/docs/customs.pdf");
    assert_eq!(customs.thumbnail_url, "/assets/thumbs/customs.jpg");

    // Ragged row: the missing trailing thumbnail column resolves to empty.
    let meals = &records[2];
    assert_eq!(meals.title, "School Meals Expansion");
    assert_eq!(meals.document_url, "/assets/pdfs/meals.pdf");
    assert_eq!(meals.thumbnail_url, "");

    let query = FilterQuery {
        text: "bridge".to_owned(),
        categories: ["Infrastructure".to_owned()].into(),
    };
    let matched = filter::filter(&records, &query);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].title, "Road, Bridge & Culvert Renewal");

    assert_eq!(
        catalogue::categories(&records),
        vec!["Infrastructure", "Social Protection", "Trade & Industry"]
    );
}

#[tokio::test]
async fn test_demo_fallback_without_sheet_url() {
    let config = Config::default();
    let store = CatalogueStore::new();
    let source = loader::load_into(&store, &config).await;
    assert_eq!(source, LoadSource::Demo);
    assert!(!source.is_remote());

    let records = store.snapshot();
    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0].thumbnail_url,
        "/assets/thumbs/nutrition-estates.jpg"
    );
    // Demo asset names resolve against configured base paths too.
    assert!(records.iter().all(|r| r.document_url.starts_with("/assets/pdfs/")));
}
