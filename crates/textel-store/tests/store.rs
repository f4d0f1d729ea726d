//! Integration tests for the JSON file store.

use textel_store::{CanvasRecord, CanvasStore, JsonFileStore};

#[test]
fn file_store_round_trips_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvases.json");
    let mut store = JsonFileStore::new(&path);

    let mut record = CanvasRecord::fresh("user-1", 3, 2, ".");
    record.x_border = "-".to_string();
    record.y_border = "|".to_string();
    store.save(&record).unwrap();
    assert!(path.exists());

    // A fresh store handle sees the same document.
    let reopened = JsonFileStore::new(&path);
    let loaded = reopened.load("user-1").unwrap().unwrap();
    assert_eq!(loaded, record);
}

#[test]
fn file_store_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("nope.json"));
    assert!(store.load("anyone").unwrap().is_none());
}

#[test]
fn file_store_holds_multiple_owners() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("canvases.json"));

    store.save(&CanvasRecord::fresh("alpha", 2, 2, ".")).unwrap();
    store.save(&CanvasRecord::fresh("beta", 4, 4, "#")).unwrap();

    assert_eq!(store.load("alpha").unwrap().unwrap().width, 2);
    assert_eq!(store.load("beta").unwrap().unwrap().background, "#");
}

#[test]
fn file_store_delete_removes_only_target() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("canvases.json"));

    store.save(&CanvasRecord::fresh("alpha", 2, 2, ".")).unwrap();
    store.save(&CanvasRecord::fresh("beta", 2, 2, ".")).unwrap();

    assert!(store.delete("alpha").unwrap());
    assert!(store.load("alpha").unwrap().is_none());
    assert!(store.load("beta").unwrap().is_some());
    assert!(!store.delete("alpha").unwrap());
}

#[test]
fn file_store_garbage_document_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvases.json");
    std::fs::write(&path, "not json").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(store.load("user-1").is_err());
}

#[test]
fn file_store_edit_session_across_handles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvases.json");

    {
        let mut store = JsonFileStore::new(&path);
        store.save(&CanvasRecord::fresh("user-1", 3, 2, ".")).unwrap();
    }
    {
        let mut store = JsonFileStore::new(&path);
        let mut record = store.load("user-1").unwrap().unwrap();
        let mut canvas = record.to_canvas().unwrap();
        canvas.rect("#", 1, 0, 1, 1, 0, " ");
        record.absorb(&canvas);
        store.save(&record).unwrap();
    }

    let store = JsonFileStore::new(&path);
    let record = store.load("user-1").unwrap().unwrap();
    assert_eq!(record.to_canvas().unwrap().render(), ".#.\n...");
}
