use std::path::Path;

use prediction::model::TrendLabel;
use prediction::scorer::select_trend;
use prediction::store::ModelStore;
use procurement::materials;

#[test]
fn registry_lookup_matches_names() {
    assert_eq!(materials::lookup("Ready Mixed Concrete").unwrap().file, "rmc.json");
    assert!(materials::lookup("Granite").is_none());
    assert_eq!(materials::names().len(), materials::MATERIALS.len());
}

#[test]
fn shipped_rule_files_load_and_score() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("rules");
    let store = ModelStore::load(&dir, materials::store_entries()).unwrap();

    for material in materials::names() {
        let model = store.get(&material).unwrap();
        let label = select_trend(model).unwrap();
        assert!(label.is_some(), "no prediction for {material}");
    }

    assert_eq!(
        select_trend(store.get("Cement").unwrap()).unwrap(),
        Some(TrendLabel::VeryHigh)
    );
    assert_eq!(
        select_trend(store.get("Ready Mixed Concrete").unwrap()).unwrap(),
        Some(TrendLabel::Low)
    );
}
