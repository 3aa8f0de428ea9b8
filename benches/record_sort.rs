use std::fmt::{Display, Formatter};
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Error};
use benchmark_rs::benchmarks::Benchmarks;
use benchmark_rs::stopwatch::StopWatch;
use rand::Rng;
use simple_logger::SimpleLogger;

use csv_document_sort::comparator::KeyComparator;
use csv_document_sort::field::Field;
use csv_document_sort::field_type::FieldType;
use csv_document_sort::sort::{sort_by, Algorithm};

#[derive(Clone)]
pub struct BenchmarkConfig {
    algorithm: Algorithm,
    field_type: FieldType,
    description: String,
}

impl BenchmarkConfig {
    pub fn new(algorithm: Algorithm, field_type: FieldType, description: &str) -> BenchmarkConfig {
        BenchmarkConfig {
            algorithm,
            field_type,
            description: description.to_string(),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }
}

impl Display for BenchmarkConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "algorithm: {}, field type: {:?}, description: {}",
                 self.algorithm,
                 self.field_type,
                 self.description,
        )
    }
}

fn setup(bench_results_dir: &PathBuf) -> Result<(), anyhow::Error> {
    if bench_results_dir.exists() {
        fs::remove_dir_all(bench_results_dir.clone())
            .with_context(|| anyhow!("{}", bench_results_dir.to_string_lossy()))?;
    }
    fs::create_dir_all(bench_results_dir.clone())
        .with_context(|| anyhow!("{}", bench_results_dir.to_string_lossy()))?;
    Ok(())
}

fn create_records(count: usize, field_type: &FieldType) -> Vec<Vec<String>> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| {
            let key = match field_type {
                FieldType::String => format!("title-{:08x}", rng.gen::<u32>()),
                FieldType::Integer => rng.gen_range(0..1_000_000).to_string(),
                FieldType::Number => format!("${:.2}", rng.gen_range(0.0..10_000.0)),
                FieldType::Date => format!(
                    "{:02}/{:02}/{}",
                    rng.gen_range(1..=12),
                    rng.gen_range(1..=28),
                    rng.gen_range(2000..2020),
                ),
            };
            vec![i.to_string(), key]
        })
        .collect()
}

fn sort(stop_watch: &mut StopWatch, config: BenchmarkConfig, work: usize) -> Result<(), anyhow::Error> {
    stop_watch.pause();
    let mut records = create_records(work, config.field_type());
    let comparator = KeyComparator::new(vec![
        Field::new(1, config.field_type().clone()).with_strip_chars("$"),
    ]);
    log::info!("Start {} sort of {} records", config.algorithm(), work);
    stop_watch.resume();
    sort_by(config.algorithm(), &mut records, &comparator);
    stop_watch.pause();
    log::info!("Finish {} sort of {} records", config.algorithm(), work);
    Ok(())
}

#[test]
fn record_sort_bench() -> Result<(), Error> {
    SimpleLogger::new().init().unwrap();
    log::info!("Started record_sort_bench.");

    let bench_results_dir = PathBuf::from("./target/benchmarks/");
    setup(&bench_results_dir)?;

    let small: Vec<usize> = (1..=10).map(|i| i * 200).collect();
    let large: Vec<usize> = (1..=10).map(|i| i * 20_000).collect();

    let mut benchmarks = Benchmarks::new("record-sort");

    for field_type in [FieldType::String, FieldType::Integer, FieldType::Number, FieldType::Date] {
        let name = format!("{:?}", field_type).to_lowercase();
        benchmarks.add(
            &format!("selection-{name}"),
            sort,
            BenchmarkConfig::new(Algorithm::Selection, field_type.clone(), "selection sort, small inputs"),
            small.clone(),
            3,
            0,
        )?;

        benchmarks.add(
            &format!("quick-{name}-small"),
            sort,
            BenchmarkConfig::new(Algorithm::Quick, field_type.clone(), "quicksort, small inputs"),
            small.clone(),
            3,
            0,
        )?;

        benchmarks.add(
            &format!("quick-{name}-large"),
            sort,
            BenchmarkConfig::new(Algorithm::Quick, field_type.clone(), "quicksort, large inputs"),
            large.clone(),
            3,
            0,
        )?;
    }

    benchmarks.run()?;
    benchmarks.save_to_csv(bench_results_dir.clone(), true, true)?;
    benchmarks.save_to_json(bench_results_dir)?;

    log::info!("Finished record_sort_bench.");
    Ok(())
}
