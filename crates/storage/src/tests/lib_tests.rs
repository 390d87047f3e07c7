use super::*;

fn item(id: i64, name: &str, calories: i64) -> Item {
    Item {
        id: ItemId(id),
        name: name.to_string(),
        calories,
    }
}

#[test]
fn load_is_empty_when_nothing_stored() {
    let storage = LocalItemStorage::new(MemoryKeyValueStore::new());
    assert!(storage.load().expect("load").is_empty());
}

#[test]
fn appends_in_insertion_order() {
    let mut storage = LocalItemStorage::new(MemoryKeyValueStore::new());
    storage.store_append(&item(0, "Eggs", 300)).expect("append");
    storage.store_append(&item(1, "Toast", 150)).expect("append");

    let loaded = storage.load().expect("load");
    assert_eq!(loaded, vec![item(0, "Eggs", 300), item(1, "Toast", 150)]);
}

#[test]
fn update_replaces_matching_item_only() {
    let mut storage = LocalItemStorage::new(MemoryKeyValueStore::new());
    storage.store_append(&item(0, "Eggs", 300)).expect("append");
    storage.store_append(&item(1, "Toast", 150)).expect("append");

    storage
        .update(&item(0, "Eggs Benedict", 320))
        .expect("update");

    let loaded = storage.load().expect("load");
    assert_eq!(loaded[0], item(0, "Eggs Benedict", 320));
    assert_eq!(loaded[1], item(1, "Toast", 150));
}

#[test]
fn update_of_unknown_id_leaves_collection_alone() {
    let mut storage = LocalItemStorage::new(MemoryKeyValueStore::new());
    storage.store_append(&item(0, "Eggs", 300)).expect("append");
    storage.update(&item(9, "Ghost", 1)).expect("update");
    assert_eq!(storage.load().expect("load"), vec![item(0, "Eggs", 300)]);
}

#[test]
fn remove_drops_item_by_id() {
    let mut storage = LocalItemStorage::new(MemoryKeyValueStore::new());
    storage.store_append(&item(0, "Eggs", 300)).expect("append");
    storage.store_append(&item(1, "Toast", 150)).expect("append");

    storage.remove(ItemId(0)).expect("remove");
    storage.remove(ItemId(42)).expect("remove missing");

    assert_eq!(storage.load().expect("load"), vec![item(1, "Toast", 150)]);
}

#[test]
fn clear_all_drops_the_key() {
    let mut storage = LocalItemStorage::new(MemoryKeyValueStore::new());
    storage.store_append(&item(0, "Eggs", 300)).expect("append");
    storage.clear_all().expect("clear");

    assert!(storage.load().expect("load").is_empty());
    assert_eq!(storage.backend().get(DEFAULT_COLLECTION_KEY).expect("get"), None);
}

#[test]
fn collection_is_one_json_blob_under_its_key() {
    let mut storage = LocalItemStorage::with_key(MemoryKeyValueStore::new(), "meals");
    storage.store_append(&item(0, "Eggs", 300)).expect("append");

    let blob = storage
        .backend()
        .get("meals")
        .expect("get")
        .expect("blob present");
    assert_eq!(blob, r#"[{"id":0,"name":"Eggs","calories":300}]"#);
    assert_eq!(storage.key(), "meals");
}

#[test]
fn malformed_blob_is_an_error() {
    let mut backend = MemoryKeyValueStore::new();
    backend
        .set(DEFAULT_COLLECTION_KEY, "not json".into())
        .expect("set");
    let storage = LocalItemStorage::new(backend);

    let err = storage.load().expect_err("malformed");
    assert!(err.to_string().contains("malformed collection"));
}

#[test]
fn file_store_creates_parent_dir_and_persists() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("nested").join("tracker.json");

    let mut store = FileKeyValueStore::open(&path).expect("open");
    assert_eq!(store.path(), path.as_path());
    assert!(temp.path().join("nested").exists());
    assert_eq!(store.get("items").expect("get"), None);

    store.set("items", "[]".into()).expect("set");
    store.set("other", "x".into()).expect("set");
    assert!(path.exists());

    let reopened = FileKeyValueStore::open(&path).expect("reopen");
    assert_eq!(reopened.get("items").expect("get").as_deref(), Some("[]"));
    assert_eq!(reopened.get("other").expect("get").as_deref(), Some("x"));
}

#[test]
fn file_store_remove_keeps_other_keys() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("tracker.json");

    let mut store = FileKeyValueStore::open(&path).expect("open");
    store.set("items", "[]".into()).expect("set");
    store.set("theme", "dark".into()).expect("set");
    store.remove("items").expect("remove");
    store.remove("missing").expect("remove missing");

    assert_eq!(store.get("items").expect("get"), None);
    assert_eq!(store.get("theme").expect("get").as_deref(), Some("dark"));
    assert!(!temp_path_for(&path).exists());
}

#[test]
fn temp_path_is_a_sibling() {
    let path = Path::new("data/tracker.json");
    assert_eq!(temp_path_for(path), Path::new("data/tracker.json.tmp"));
}
