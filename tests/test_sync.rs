use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use csv_document_sort::reader::DocumentReader;

mod common;

#[test]
fn test_sync_round_trip() -> Result<(), anyhow::Error> {
    common::setup();
    let path = common::copy_fixture("plain.csv")?;
    let original = fs::read_to_string(&path)?;

    let document = DocumentReader::new().from_path(&path)?;
    document.sync()?;
    assert_eq!(fs::read_to_string(&path)?, original);

    fs::remove_file(path)?;
    Ok(())
}

#[test]
fn test_sync_quoted_fixture_round_trip() -> Result<(), anyhow::Error> {
    common::setup();
    let path = common::copy_fixture("bids.csv")?;

    let document = DocumentReader::new().from_path(&path)?;
    document.sync()?;
    let lines = common::read_lines(path.clone())?;
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[2], "\"Table, Conference\",97990,Police,11/30/2016,$120.00,57220,,3170,General Fund");
    assert!(lines.iter().all(|line| !line.starts_with("Broken Row")));

    let reloaded = DocumentReader::new().from_path(&path)?;
    assert_eq!(reloaded.row_count(), 9);
    assert!(reloaded.malformed_lines().is_empty());

    fs::remove_file(path)?;
    Ok(())
}

#[test]
fn test_sync_mutations() -> Result<(), anyhow::Error> {
    common::setup();
    let path = common::copy_fixture("plain.csv")?;

    let mut document = DocumentReader::new().from_path(&path)?;
    assert!(document.set_value(2, "amount", "7"));
    assert!(document.delete_row(0));
    assert!(document.insert_row(document.row_count(), ["4", "delta", "12"]));
    assert!(!document.insert_row(document.row_count() + 1, ["5", "epsilon", "1"]));
    document.sync()?;

    let lines = common::read_lines(path.clone())?;
    assert_eq!(lines, vec!["id,name,amount", "1,alpha,10", "3,gamma,7", "4,delta,12"]);

    fs::remove_file(path)?;
    Ok(())
}

#[test]
fn test_sync_atomic_replaces_file() -> Result<(), anyhow::Error> {
    common::setup();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("plain.csv");
    fs::copy("./tests/fixtures/plain.csv", &path)?;
    #[cfg(unix)]
    fs::set_permissions(&path, fs::Permissions::from_mode(0o644))?;

    let mut document = DocumentReader::new().from_path(&path)?;
    assert!(document.set_value(0, "name", "BETA"));
    document.sync_atomic()?;

    assert_eq!(fs::read_to_string(&path)?, "id,name,amount\n2,BETA,5\n1,alpha,10\n3,gamma,bad\n");
    let entries: Vec<_> = fs::read_dir(dir.path())?.collect::<Result<Vec<_>, _>>()?;
    assert_eq!(entries.len(), 1);
    #[cfg(unix)]
    assert_eq!(fs::metadata(&path)?.permissions().mode() & 0o777, 0o644);
    Ok(())
}

#[test]
fn test_sync_fails_when_target_is_a_directory() -> Result<(), anyhow::Error> {
    common::setup();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("plain.csv");
    fs::copy("./tests/fixtures/plain.csv", &path)?;
    let document = DocumentReader::new().from_path(&path)?;

    fs::remove_file(&path)?;
    fs::create_dir(&path)?;
    let error = document.sync().unwrap_err();
    assert!(error.to_string().starts_with("failed to write"));
    assert!(error.to_string().contains("plain.csv"));
    Ok(())
}
