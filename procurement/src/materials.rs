use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A selectable building material and the rule file holding its
/// precomputed price-trend model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Material {
    pub name: &'static str,
    pub file: &'static str,
}

pub const MATERIALS: &[Material] = &[
    Material { name: "Cabling", file: "cabling.json" },
    Material { name: "Cement", file: "cement.json" },
    Material { name: "Ready Mixed Concrete", file: "rmc.json" },
    Material { name: "Timber", file: "timber.json" },
];

static BY_NAME: Lazy<HashMap<&'static str, &'static Material>> =
    Lazy::new(|| MATERIALS.iter().map(|material| (material.name, material)).collect());

pub fn lookup(name: &str) -> Option<&'static Material> {
    BY_NAME.get(name).copied()
}

pub fn names() -> Vec<String> {
    MATERIALS.iter().map(|material| material.name.to_string()).collect()
}

/// `(material, file name)` pairs in the shape `ModelStore::load` takes.
pub fn store_entries() -> impl Iterator<Item = (String, String)> {
    MATERIALS
        .iter()
        .map(|material| (material.name.to_string(), material.file.to_string()))
}
