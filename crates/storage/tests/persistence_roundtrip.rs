use shared::domain::{Item, ItemId};
use storage::{FileKeyValueStore, ItemPersistence, LocalItemStorage};

#[test]
fn collection_survives_reopening_the_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("tracker.json");

    let items = vec![
        Item {
            id: ItemId(0),
            name: "Steak Dinner".into(),
            calories: 1200,
        },
        Item {
            id: ItemId(1),
            name: "Cookie".into(),
            calories: 400,
        },
        Item {
            id: ItemId(4),
            name: "Eggs".into(),
            calories: 300,
        },
    ];

    {
        let mut storage = LocalItemStorage::new(FileKeyValueStore::open(&path).expect("open"));
        for item in &items {
            storage.store_append(item).expect("append");
        }
    }

    let storage = LocalItemStorage::new(FileKeyValueStore::open(&path).expect("reopen"));
    assert_eq!(storage.load().expect("load"), items);
}

#[test]
fn separate_keys_hold_separate_collections() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("tracker.json");

    let mut breakfast =
        LocalItemStorage::with_key(FileKeyValueStore::open(&path).expect("open"), "breakfast");
    let mut dinner =
        LocalItemStorage::with_key(FileKeyValueStore::open(&path).expect("open"), "dinner");

    breakfast
        .store_append(&Item {
            id: ItemId(0),
            name: "Oats".into(),
            calories: 150,
        })
        .expect("append");
    dinner
        .store_append(&Item {
            id: ItemId(0),
            name: "Pasta".into(),
            calories: 600,
        })
        .expect("append");
    breakfast.clear_all().expect("clear");

    assert!(breakfast.load().expect("load").is_empty());
    assert_eq!(dinner.load().expect("load").len(), 1);
}
