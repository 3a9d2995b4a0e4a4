#![forbid(unsafe_code)]
use nobet::{
    io, Cell, JsonStorage, Matcher, MonthLength, Person, PersonId, Roster, Storage,
};
use std::fs;
use tempfile::tempdir;

fn header(days: usize) -> String {
    let mut cols = vec!["person".to_string()];
    cols.extend((1..=days).map(|d| d.to_string()));
    cols.join(",")
}

fn row(id: &str, days: usize, duty: &[(usize, &str)]) -> String {
    let mut cells = vec![String::new(); days];
    for (day, value) in duty {
        cells[day - 1] = value.to_string();
    }
    format!("{id},{}", cells.join(","))
}

#[test]
fn reads_grid_with_empty_and_numeric_cells() {
    let csv = [
        header(31),
        row("ali", 31, &[(5, "1"), (12, "2")]),
        row("bea", 31, &[(8, "1,5")]),
    ]
    .join("\n");

    let roster = io::read_roster_csv(csv.as_bytes(), MonthLength::default()).unwrap();
    assert_eq!(roster.people.len(), 2);
    assert_eq!(roster.people[0].id, PersonId::new("ali"));
    assert_eq!(roster.people[0].shifts.len(), 31);
    assert_eq!(roster.people[1].shifts[7], Cell::Numeric(1.5));

    let matcher = Matcher::new(&roster);
    assert_eq!(matcher.duty_days(&PersonId::new("ali")).unwrap(), vec![5, 12]);
}

#[test]
fn blank_rows_and_trailing_blank_columns_are_tolerated() {
    let csv = [
        header(31),
        String::new(),
        format!("{},,", row("ali", 30, &[(30, "1")])),
    ]
    .join("\n");

    let roster = io::read_roster_csv(csv.as_bytes(), MonthLength::new(30).unwrap()).unwrap();
    assert_eq!(roster.people.len(), 1);
    assert_eq!(roster.people[0].shifts.len(), 30);
    assert!(roster.people[0].shifts[29].is_numeric());
}

#[test]
fn short_row_is_rejected() {
    let csv = [header(31), row("ali", 30, &[])].join("\n");
    let err = io::read_roster_csv(csv.as_bytes(), MonthLength::default()).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("line 2"), "{msg}");
    assert!(msg.contains("expected 31 day cells, found 30"), "{msg}");
}

#[test]
fn extra_value_past_the_month_is_rejected() {
    let csv = [header(31), row("ali", 31, &[(31, "1")])].join("\n");
    let err = io::read_roster_csv(csv.as_bytes(), MonthLength::new(30).unwrap()).unwrap_err();
    assert!(format!("{err:#}").contains("unexpected value in column 32"));
}

#[test]
fn non_numeric_cell_is_rejected() {
    let csv = [
        header(31),
        row("ali", 31, &[(5, "1")]),
        row("bea", 31, &[(3, "izinli")]),
    ]
    .join("\n");
    let err = io::read_roster_csv(csv.as_bytes(), MonthLength::default()).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("line 3"), "{msg}");
    assert!(msg.contains("person bea, day 3"), "{msg}");
}

#[test]
fn duplicate_and_empty_ids_are_rejected() {
    let csv = [header(31), row("ali", 31, &[]), row("ali", 31, &[])].join("\n");
    let err = io::read_roster_csv(csv.as_bytes(), MonthLength::default()).unwrap_err();
    assert!(format!("{err:#}").contains("duplicate person id ali"));

    let csv = [header(31), row(" ", 31, &[(1, "1")])].join("\n");
    let err = io::read_roster_csv(csv.as_bytes(), MonthLength::default()).unwrap_err();
    assert!(format!("{err:#}").contains("empty person id"));
}

#[test]
fn import_from_file_names_the_path_on_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.csv");
    let err = io::import_roster_csv(&path, MonthLength::default()).unwrap_err();
    assert!(format!("{err:#}").contains("missing.csv"));
}

#[test]
fn json_snapshot_roundtrip() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("roster.json"));
    let june = MonthLength::new(30).unwrap();
    let roster = Roster::with_people(
        june,
        vec![Person::on_days("ali", june, &[1, 15]), Person::on_days("bea", june, &[3])],
    );
    storage.save(&roster).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(loaded, roster);

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(storage.path()).unwrap()).unwrap();
    assert_eq!(raw["month_length"], 30);
    assert_eq!(raw["people"][0]["shifts"][0], 1.0);
    assert!(raw["people"][0]["shifts"][1].is_null());
}

#[test]
fn snapshot_with_invalid_month_length_fails_to_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(&path, r#"{"month_length": 40, "people": []}"#).unwrap();
    assert!(JsonStorage::open(&path).load().is_err());
}

fn snapshot_row(id: &str, cells: usize, duty: &[usize]) -> serde_json::Value {
    let shifts: Vec<Option<f64>> = (1..=cells)
        .map(|d| duty.contains(&d).then_some(1.0))
        .collect();
    serde_json::json!({ "id": id, "shifts": shifts })
}

fn write_snapshot(dir: &std::path::Path, people: Vec<serde_json::Value>) -> std::path::PathBuf {
    let path = dir.join("roster.json");
    let doc = serde_json::json!({ "month_length": 30, "people": people });
    fs::write(&path, doc.to_string()).unwrap();
    path
}

#[test]
fn snapshot_with_row_longer_than_month_fails_to_load() {
    let dir = tempdir().unwrap();
    let path = write_snapshot(
        dir.path(),
        vec![snapshot_row("A", 31, &[1, 31]), snapshot_row("B", 30, &[30])],
    );
    let err = JsonStorage::open(&path).load().unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("invalid roster in"), "{msg}");
    assert!(msg.contains("person A: expected 30 day cells, found 31"), "{msg}");
}

#[test]
fn snapshot_with_short_row_or_duplicate_id_fails_to_load() {
    let dir = tempdir().unwrap();
    let path = write_snapshot(
        dir.path(),
        vec![snapshot_row("A", 30, &[1]), snapshot_row("C", 1, &[])],
    );
    let err = JsonStorage::open(&path).load().unwrap_err();
    assert!(format!("{err:#}").contains("person C: expected 30 day cells, found 1"));

    let path = write_snapshot(
        dir.path(),
        vec![snapshot_row("B", 30, &[30]), snapshot_row("B", 30, &[2])],
    );
    let err = JsonStorage::open(&path).load().unwrap_err();
    assert!(format!("{err:#}").contains("duplicate person id B"));
}

#[test]
fn valid_snapshot_matches_on_the_last_day() {
    let dir = tempdir().unwrap();
    let path = write_snapshot(
        dir.path(),
        vec![snapshot_row("A", 30, &[1]), snapshot_row("B", 30, &[30])],
    );
    let roster = JsonStorage::open(&path).load().unwrap();
    let offers = Matcher::new(&roster)
        .suitable_for(&PersonId::new("A"), 1)
        .unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].days, vec![30]);
}

#[test]
fn malformed_roster_is_not_saved() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("roster.json"));
    let june = MonthLength::new(30).unwrap();
    let roster = Roster::with_people(
        june,
        vec![Person::on_days("A", MonthLength::default(), &[31])],
    );
    let err = storage.save(&roster).unwrap_err();
    assert!(format!("{err:#}").contains("expected 30 day cells, found 31"));
    assert!(!storage.path().exists());
}

#[test]
fn exports_offers() {
    let roster = Roster::with_people(
        MonthLength::default(),
        vec![
            Person::on_days("ali", MonthLength::default(), &[5]),
            Person::on_days("bea", MonthLength::default(), &[8, 14]),
        ],
    );
    let offers = Matcher::new(&roster)
        .suitable_for(&PersonId::new("ali"), 5)
        .unwrap();

    let dir = tempdir().unwrap();
    let json = dir.path().join("offers.json");
    let csv = dir.path().join("offers.csv");
    io::export_offers_json(&json, &offers).unwrap();
    io::export_offers_csv(&csv, &offers).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(json).unwrap()).unwrap();
    assert_eq!(raw, serde_json::json!([{ "person": "bea", "days": [8, 14] }]));
    assert_eq!(
        fs::read_to_string(csv).unwrap(),
        "person,day\nbea,8\nbea,14\n"
    );
}
