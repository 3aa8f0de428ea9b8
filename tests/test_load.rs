use std::fs;

use rand::Rng;

use csv_document_sort::error::DocumentError;
use csv_document_sort::reader::DocumentReader;

mod common;

#[test]
fn test_load_bids() -> Result<(), anyhow::Error> {
    common::setup();
    let document = DocumentReader::new().from_path("./tests/fixtures/bids.csv")?;
    assert_eq!(document.column_count(), 9);
    assert_eq!(document.row_count(), 9);
    assert_eq!(document.malformed_lines(), &[10]);
    assert_eq!(document.header_element(4)?, "WinningBid");
    assert!(document.path().is_some());

    assert_eq!(document.row_value(1, 0)?, "\"Table, Conference\"");
    assert_eq!(document.row_value_by_key(3, "WinningBid")?, "\"$1,900.00\"");
    assert_eq!(document.row_value_by_key(0, "VehicleID")?, "");
    assert_eq!(document.row_value_by_key(8, "ArticleTitle")?, "Bookshelf");
    assert!(document.rows().all(|row| row.len() == 9));
    Ok(())
}

#[test]
fn test_out_of_range_access() -> Result<(), anyhow::Error> {
    common::setup();
    let document = DocumentReader::new().from_path("./tests/fixtures/bids.csv")?;
    for index in [9, 10, usize::MAX] {
        assert!(matches!(document.row(index), Err(DocumentError::IndexOutOfRange { .. })));
        assert!(matches!(document.header_element(index), Err(DocumentError::IndexOutOfRange { .. })));
    }
    assert!(matches!(document.row_value(0, 9), Err(DocumentError::IndexOutOfRange { .. })));
    let error = document.row_value_by_key(0, "Price").unwrap_err();
    assert_eq!(error.to_string(), "key not found: Price");
    Ok(())
}

#[test]
fn test_open_failure_names_path() {
    common::setup();
    let error = DocumentReader::new().from_path("./tests/fixtures/missing.csv").unwrap_err();
    assert!(matches!(error, DocumentError::OpenFailure { .. }));
    assert!(error.to_string().contains("missing.csv"));
}

#[test]
fn test_empty_file() -> Result<(), anyhow::Error> {
    common::setup();
    let path = common::temp_file_name("./target/results/");
    fs::write(&path, "\n\n   \n")?;
    let result = DocumentReader::new().from_path(&path);
    fs::remove_file(&path)?;
    match result {
        Err(DocumentError::EmptyData { origin }) => assert!(origin.contains(path.file_name().unwrap().to_str().unwrap())),
        other => panic!("expected EmptyData, got {:?}", other),
    }
    Ok(())
}

fn random_value(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(1..8);
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

#[test]
fn test_row_count_matches_well_formed_lines() -> Result<(), anyhow::Error> {
    common::setup();
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let columns = rng.gen_range(1..6);
        let rows = rng.gen_range(0..40);
        let mut text = String::new();
        let mut malformed = 0;
        text.push_str(&(0..columns).map(|i| format!("c{i}")).collect::<Vec<String>>().join(","));
        text.push('\n');
        for _ in 0..rows {
            if rng.gen_bool(0.2) {
                text.push_str("   \n");
            }
            if rng.gen_bool(0.1) {
                let width = columns + rng.gen_range(1..3);
                text.push_str(&(0..width).map(|_| random_value(&mut rng)).collect::<Vec<String>>().join(","));
                text.push('\n');
                malformed += 1;
            }
            text.push_str(&(0..columns).map(|_| random_value(&mut rng)).collect::<Vec<String>>().join(","));
            text.push('\n');
        }
        let document = DocumentReader::new().from_text(&text)?;
        assert_eq!(document.column_count(), columns);
        assert_eq!(document.row_count(), rows);
        assert_eq!(document.malformed_lines().len(), malformed);
    }
    Ok(())
}
