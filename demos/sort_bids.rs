use std::env;
use std::path::PathBuf;

use anyhow::Error;
use simple_logger::SimpleLogger;

use csv_document_sort::comparator::{KeyComparator, Record};
use csv_document_sort::document::Document;
use csv_document_sort::field::Field;
use csv_document_sort::field_type::FieldType;
use csv_document_sort::order::Order;
use csv_document_sort::reader::DocumentReader;
use csv_document_sort::sort::{filter_eq, sort_by, Algorithm};

#[derive(Clone, Debug)]
struct Bid {
    title: String,
    id: String,
    close_date: String,
    amount: String,
    fund: String,
}

const TITLE: usize = 0;
const ID: usize = 1;
const CLOSE_DATE: usize = 2;
const AMOUNT: usize = 3;
const FUND: usize = 4;

impl Record for Bid {
    fn field(&self, position: usize) -> Option<&str> {
        match position {
            TITLE => Some(&self.title),
            ID => Some(&self.id),
            CLOSE_DATE => Some(&self.close_date),
            AMOUNT => Some(&self.amount),
            FUND => Some(&self.fund),
            _ => None,
        }
    }
}

fn load_bids(document: &Document) -> Result<Vec<Bid>, Error> {
    let mut bids = Vec::with_capacity(document.row_count());
    for row in document.rows() {
        bids.push(Bid {
            title: row.get_by_key("ArticleTitle")?.to_string(),
            id: row.get_by_key("ArticleID")?.to_string(),
            close_date: row.get_by_key("CloseDate")?.to_string(),
            amount: row.get_by_key("WinningBid")?.to_string(),
            fund: row.get_by_key("Fund")?.to_string(),
        });
    }
    Ok(bids)
}

fn display(heading: &str, bids: &[Bid]) {
    println!("{heading}");
    for bid in bids {
        println!("  {}: {} | {} | {} | {}", bid.id, bid.title, bid.amount, bid.close_date, bid.fund);
    }
}

fn sort_and_display(heading: &str, algorithm: Algorithm, bids: &[Bid], comparator: &KeyComparator) {
    let mut sorted = bids.to_vec();
    let stats = sort_by(algorithm, &mut sorted, comparator);
    display(
        &format!("{heading} ({algorithm} sort, {} comparisons, {} swaps)", stats.comparisons(), stats.swaps()),
        &sorted,
    );
}

// cargo run --example sort_bids -- ./tests/fixtures/bids.csv quick
pub fn main() -> Result<(), Error> {
    SimpleLogger::new().with_level(log::LevelFilter::Info).init()?;

    let mut args = env::args().skip(1);
    let path = args.next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("./tests/fixtures/bids.csv"));
    let algorithm: Algorithm = match args.next() {
        Some(name) => name.parse()?,
        None => Algorithm::Quick,
    };

    let document = DocumentReader::new().from_path(&path)?;
    let bids = load_bids(&document)?;
    println!("{} bids read from {}", bids.len(), path.display());

    let by_title = KeyComparator::new(vec![Field::new(TITLE, FieldType::String).with_str_name("ArticleTitle")]);
    sort_and_display("Sorted by title", algorithm, &bids, &by_title);

    let by_id = KeyComparator::new(vec![Field::new(ID, FieldType::Integer).with_str_name("ArticleID")]);
    sort_and_display("Sorted by id", algorithm, &bids, &by_id);

    let by_close_date = KeyComparator::new(vec![Field::new(CLOSE_DATE, FieldType::Date).with_str_name("CloseDate")])
        .with_order(Order::Desc);
    sort_and_display("Sorted by close date, latest first", algorithm, &bids, &by_close_date);

    let by_amount = KeyComparator::new(vec![
        Field::new(AMOUNT, FieldType::Number).with_str_name("WinningBid").with_strip_chars("$,"),
    ]);
    sort_and_display("Sorted by winning bid", algorithm, &bids, &by_amount);

    let fund = Field::new(FUND, FieldType::String).with_str_name("Fund");
    for name in ["Enterprise", "General Fund"] {
        display(&format!("Fund: {name}"), &filter_eq(&bids, &fund, name));
    }
    Ok(())
}
