//! Test helpers for writing catalog and preference fixtures.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Write `contents` to `path`, failing the test on error.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// A small catalog: two Gwangju cafes and one in Naju.
pub(super) const CATALOG_JSON: &str = r#"[
    {
        "id": 1,
        "name": "Moonlight",
        "region": "gwangju",
        "address": "광주광역시 동구 충장로 12",
        "menu": "소금빵, 아메리카노",
        "parking": "가능",
        "atmosphere_norm": "조용한;아늑한",
        "taste_norm": "커피;빵",
        "coffee_score": 4.0,
        "dessert_score": 3.0,
        "popularity_score": 10
    },
    {
        "id": 2,
        "name": "Sunroom",
        "region": "gwangju",
        "menu": "딸기 케이크",
        "parking": "불가",
        "atmosphere_norm": "뷰 맛집",
        "coffee_score": 3.0,
        "photo_spot_flag": "Y"
    },
    {
        "id": 3,
        "name": "Pear Orchard",
        "region": "naju",
        "atmosphere_norm": "조용한",
        "coffee_score": 5.0
    }
]"#;

/// A temporary directory holding a catalog and a preference file.
pub(super) struct Workspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) catalog: Utf8PathBuf,
    pub(super) preferences: Utf8PathBuf,
    pub(super) weights: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let catalog = root.join("catalog.json");
        let preferences = root.join("preferences.json");
        let weights = root.join("weights.json");
        write_utf8(&catalog, CATALOG_JSON.as_bytes());
        Self {
            _dir: dir,
            root,
            catalog,
            preferences,
            weights,
        }
    }

    pub(super) fn write_preferences(&self, json: &str) {
        write_utf8(&self.preferences, json.as_bytes());
    }

    pub(super) fn write_weights(&self, json: &str) {
        write_utf8(&self.weights, json.as_bytes());
    }
}
