#[derive(Clone, Copy, Debug)]
pub struct ModelCatalogEntry {
    pub name: &'static str,
    pub display_name: &'static str,
}

pub const DEFAULT_MODEL_NAME: &str = "anon_2151";

pub const MODEL_CATALOG: &[ModelCatalogEntry] = &[
    ModelCatalogEntry {
        name: "anon_2151",
        display_name: "Anon (2151)",
    },
    ModelCatalogEntry {
        name: "hina_1387",
        display_name: "Hina (1387)",
    },
    ModelCatalogEntry {
        name: "kkr_265",
        display_name: "Kokoro (265)",
    },
    ModelCatalogEntry {
        name: "ksm_270",
        display_name: "Kasumi (270)",
    },
    ModelCatalogEntry {
        name: "ksm_271",
        display_name: "Kasumi (271)",
    },
    ModelCatalogEntry {
        name: "mzm",
        display_name: "Mutsumi",
    },
    ModelCatalogEntry {
        name: "nidie",
        display_name: "Nidie",
    },
    ModelCatalogEntry {
        name: "tomorin",
        display_name: "Tomori",
    },
];

pub fn model_by_name(name: &str) -> Option<&'static ModelCatalogEntry> {
    let trimmed = name.trim();
    MODEL_CATALOG.iter().find(|entry| entry.name == trimmed)
}
