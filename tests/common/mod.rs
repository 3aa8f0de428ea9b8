use std::fs;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::str::FromStr;

use data_encoding::HEXLOWER;
use simple_logger::SimpleLogger;

pub fn setup() {
    // only the first test in a binary installs the logger
    let _ = SimpleLogger::new().with_level(log::LevelFilter::Warn).init();

    let results_dir_path = PathBuf::from_str("./target/results/").unwrap();
    if !results_dir_path.exists() {
        fs::create_dir_all(&results_dir_path).unwrap_or_else(|_|
            panic!("Failed to create results directory: {:?}", results_dir_path)
        );
    }
}

#[allow(dead_code)]
pub fn read_lines(path: PathBuf) -> Result<Vec<String>, anyhow::Error> {
    let reader = BufReader::new(File::open(path)?);
    let lines = reader.lines().map(|x| x.unwrap()).collect();
    Ok(lines)
}

#[allow(dead_code)]
pub fn temp_file_name(dir: &str) -> PathBuf {
    let mut result = PathBuf::from(dir);
    let name = HEXLOWER.encode(&rand::random::<[u8; 16]>());
    result.push(name);
    result
}

/// Copy a fixture to a fresh file under ./target/results/ so tests can overwrite it.
#[allow(dead_code)]
pub fn copy_fixture(name: &str) -> Result<PathBuf, anyhow::Error> {
    let mut path = temp_file_name("./target/results/");
    path.set_extension("csv");
    fs::copy(PathBuf::from("./tests/fixtures/").join(name), &path)?;
    Ok(path)
}
