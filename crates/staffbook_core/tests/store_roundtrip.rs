use staffbook_core::{
    Employee, EmployeeTable, JsonTableStore, SqliteTableStore, StoreError, TableStore,
};

fn sample_table() -> EmployeeTable {
    // Ids deliberately out of numeric order: a faithful round-trip must
    // preserve insertion order, not re-sort by key.
    let rows = vec![
        Employee::new(3, "Carol", "Designer", 48_000.0),
        Employee::new(1, "Alice", "Engineer", 50_000.0),
        Employee::new(2, "Bob", "Manager", 60_000.0),
    ];
    EmployeeTable::from_rows(rows).unwrap()
}

#[test]
fn sqlite_save_then_load_is_lossless() {
    let mut store = SqliteTableStore::in_memory().unwrap();
    let table = sample_table();

    store.save(&table).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, table);
    let ids: Vec<_> = loaded.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn sqlite_save_replaces_prior_contents_wholesale() {
    let mut store = SqliteTableStore::in_memory().unwrap();
    store.save(&sample_table()).unwrap();

    let mut smaller = EmployeeTable::new();
    smaller
        .create(Employee::new(9, "Eve", "Auditor", 70_000.0))
        .unwrap();
    store.save(&smaller).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, smaller);
    assert_eq!(loaded.len(), 1);
}

#[test]
fn sqlite_fresh_file_loads_as_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteTableStore::open(dir.path().join("employees.db")).unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn sqlite_file_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.db");
    let table = sample_table();

    let mut store = SqliteTableStore::open(&path).unwrap();
    store.save(&table).unwrap();
    drop(store);

    let reopened = SqliteTableStore::open(&path).unwrap();
    assert_eq!(reopened.load().unwrap(), table);
}

#[test]
fn json_missing_file_loads_as_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonTableStore::new(dir.path().join("employees.json"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn json_save_then_load_is_lossless() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.json");
    let table = sample_table();

    let mut store = JsonTableStore::new(&path);
    store.save(&table).unwrap();

    // A fresh store instance over the same path sees identical data.
    assert_eq!(JsonTableStore::new(&path).load().unwrap(), table);

    // No temp file is left behind after the rename.
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("employees.json")]);
}

#[test]
fn json_rejects_snapshot_with_wrong_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.json");
    std::fs::write(
        &path,
        r#"{"columns":["Employee ID","Name","Role","Salary"],"employees":[]}"#,
    )
    .unwrap();

    let err = JsonTableStore::new(&path).load().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
}

#[test]
fn json_rejects_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.json");
    std::fs::write(&path, "not json at all").unwrap();

    let err = JsonTableStore::new(&path).load().unwrap_err();
    assert!(matches!(err, StoreError::Parse(_)));
}

#[test]
fn json_rejects_snapshot_with_duplicate_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.json");
    std::fs::write(
        &path,
        r#"{"columns":["Employee ID","Name","Position","Salary"],
            "employees":[
                {"id":1,"name":"Alice","position":"Engineer","salary":50000.0},
                {"id":1,"name":"Bob","position":"Manager","salary":60000.0}
            ]}"#,
    )
    .unwrap();

    let err = JsonTableStore::new(&path).load().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
}
