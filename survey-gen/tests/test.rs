use std::fs;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use rand::rngs::StdRng;
use rand::SeedableRng;
use survey_gen::generator::SurveyGenerator;
use survey_gen::survey::{SurveyRow, HEADER};
use survey_gen::writer::{export_to_path, WriteOptions};

fn make_generator(seed: u64) -> SurveyGenerator<StdRng> {
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    SurveyGenerator::with_today(StdRng::seed_from_u64(seed), today).unwrap()
}

fn options(count: u32) -> WriteOptions {
    WriteOptions {
        count,
        progress_interval: 1_000,
    }
}

#[test]
fn test_export_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("nested").join("surveys.csv");

    let mut ticks = 0;
    let summary = export_to_path(&path, &mut make_generator(1), options(5_000), |_| ticks += 1)
        .unwrap();

    assert_eq!(ticks, 5);
    assert_eq!(summary.progress.records, 5_000);
    assert_eq!(summary.bytes, fs::metadata(&path).unwrap().len());

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().next().unwrap(), HEADER.join(","));
    assert_eq!(contents.lines().count(), 5_001);
}

#[test]
fn test_exported_rows_are_consistent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surveys.csv");
    export_to_path(&path, &mut make_generator(2), options(10_000), |_| {}).unwrap();

    let earliest = NaiveDate::from_ymd_opt(2024, 10, 16).unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let mut reader = ReaderBuilder::new().from_path(&path).unwrap();
    let mut expected_id = 1;
    for row in reader.deserialize() {
        let row: SurveyRow = row.unwrap();
        assert!(row.is_consistent(), "{:?}", row);
        assert_eq!(row.customer_id, expected_id);
        assert!(row.survey_date >= earliest && row.survey_date < today);
        expected_id += 1;
    }
    assert_eq!(expected_id, 10_001);
}

#[test]
fn test_same_seed_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path_1 = dir.path().join("a.csv");
    let path_2 = dir.path().join("b.csv");
    export_to_path(&path_1, &mut make_generator(9), options(2_000), |_| {}).unwrap();
    export_to_path(&path_2, &mut make_generator(9), options(2_000), |_| {}).unwrap();

    assert_eq!(fs::read(&path_1).unwrap(), fs::read(&path_2).unwrap());
}

#[test]
fn test_existing_file_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surveys.csv");
    export_to_path(&path, &mut make_generator(4), options(3_000), |_| {}).unwrap();
    export_to_path(&path, &mut make_generator(4), options(10), |_| {}).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 11);
}

#[test]
fn test_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();

    let path = blocker.join("surveys.csv");
    let res = export_to_path(&path, &mut make_generator(1), options(10), |_| {});
    assert!(res.is_err());
}
