use staffbook_core::{Employee, EmployeeTable, EmployeeUpdate, TableError};

fn sample_table() -> EmployeeTable {
    let rows = vec![
        Employee::new(1, "Alice", "Engineer", 50_000.0),
        Employee::new(2, "Bob", "Manager", 60_000.0),
        Employee::new(3, "Carol", "Designer", 48_000.0),
    ];
    EmployeeTable::from_rows(rows).unwrap()
}

#[test]
fn create_appends_and_lookup_returns_exact_record() {
    let mut table = sample_table();
    table
        .create(Employee::new(4, "Dave", "Analyst", 45_000.0))
        .unwrap();

    assert_eq!(table.len(), 4);
    let found = table.lookup(4).unwrap();
    assert_eq!(found.name, "Dave");
    assert_eq!(found.position, "Analyst");
    assert_eq!(found.salary, 45_000.0);

    // New record lands at the end.
    let ids: Vec<_> = table.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn create_with_existing_id_is_rejected_and_table_unchanged() {
    let mut table = sample_table();
    let before = table.clone();

    let err = table
        .create(Employee::new(2, "Mallory", "Impostor", 99_000.0))
        .unwrap_err();

    assert_eq!(err, TableError::DuplicateKey(2));
    assert_eq!(table, before);
}

#[test]
fn update_delete_lookup_signal_not_found_and_leave_table_unchanged() {
    let mut table = sample_table();
    let before = table.clone();

    let patch = EmployeeUpdate {
        name: Some("Nobody".to_string()),
        ..EmployeeUpdate::default()
    };
    assert_eq!(table.update(42, &patch).unwrap_err(), TableError::NotFound(42));
    assert_eq!(table.delete(42).unwrap_err(), TableError::NotFound(42));
    assert_eq!(table.lookup(42).unwrap_err(), TableError::NotFound(42));
    assert_eq!(table, before);
}

#[test]
fn update_modifies_only_supplied_fields() {
    let mut table = sample_table();
    let patch = EmployeeUpdate {
        salary: Some(65_000.0),
        ..EmployeeUpdate::default()
    };
    table.update(2, &patch).unwrap();

    let bob = table.lookup(2).unwrap();
    assert_eq!(bob.name, "Bob");
    assert_eq!(bob.position, "Manager");
    assert_eq!(bob.salary, 65_000.0);
    assert_eq!(table.len(), 3);
}

#[test]
fn update_with_current_values_is_observably_identical() {
    let mut table = sample_table();
    let before = table.clone();

    let current = table.lookup(1).unwrap().clone();
    let patch = EmployeeUpdate {
        name: Some(current.name),
        position: Some(current.position),
        salary: Some(current.salary),
    };
    table.update(1, &patch).unwrap();

    assert_eq!(table, before);
}

#[test]
fn delete_preserves_relative_order_of_remaining_records() {
    let mut table = sample_table();
    table.delete(2).unwrap();

    assert_eq!(table.len(), 2);
    let ids: Vec<_> = table.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn full_lifecycle_scenario() {
    let mut table = EmployeeTable::new();
    assert!(table.is_empty());

    table
        .create(Employee::new(1, "Alice", "Engineer", 50_000.0))
        .unwrap();
    assert_eq!(table.len(), 1);

    let err = table
        .create(Employee::new(1, "Bob", "Manager", 60_000.0))
        .unwrap_err();
    assert_eq!(err, TableError::DuplicateKey(1));
    assert_eq!(table.len(), 1);
    assert_eq!(table.lookup(1).unwrap().name, "Alice");

    let patch = EmployeeUpdate {
        salary: Some(55_000.0),
        ..EmployeeUpdate::default()
    };
    table.update(1, &patch).unwrap();
    let alice = table.lookup(1).unwrap();
    assert_eq!(alice.salary, 55_000.0);
    assert_eq!(alice.name, "Alice");
    assert_eq!(alice.position, "Engineer");

    table.delete(1).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.lookup(1).unwrap_err(), TableError::NotFound(1));
}
