//! This crate loads a delimited text table, for example CSV or TSV, into an editable in-memory
//! document and sorts records by typed keys.
//!
//! The first non-blank line of the input is the header, every other non-blank line is a row. A
//! field may be wrapped in double quotes to contain the separator. Quotes are kept in the values
//! and there is no escape for a quote inside a quoted field. Lines with a different number of
//! fields than the header are logged and dropped, the rest of the input still loads.
//!
//! Records, either the document rows themselves or domain types built from them, are ordered with
//! [selection sort](sort::selection_sort) or [quicksort](sort::quick_sort) through a
//! [Comparator](comparator::Comparator). [KeyComparator](comparator::KeyComparator) compares
//! string, integer, number and date fields and orders values it cannot convert last instead of
//! failing.
//!
//! # Examples
//! ```
//! use csv_document_sort::comparator::KeyComparator;
//! use csv_document_sort::field_type::FieldType;
//! use csv_document_sort::reader::DocumentReader;
//! use csv_document_sort::sort::Algorithm;
//!
//! fn sort_by_amount() -> Result<(), anyhow::Error> {
//!     let mut document = DocumentReader::new()
//!         .from_text("id,name,amount\n2,beta,5\n1,alpha,10\n3,gamma,bad\n")?;
//!
//!     let amount = document.field("amount", FieldType::Integer)?;
//!     document.sort_rows(Algorithm::Quick, &KeyComparator::new(vec![amount]));
//!
//!     let names: Vec<&str> = document.rows().map(|row| row.values()[1].as_str()).collect();
//!     assert_eq!(names, vec!["beta", "alpha", "gamma"]);
//!     Ok(())
//! }
//! ```
//!

pub(crate) mod config;
pub(crate) mod key;
pub(crate) mod writer;

pub mod comparator;
pub mod document;
pub mod error;
pub mod field;
pub mod field_type;
pub mod order;
pub mod reader;
pub mod row;
pub mod sort;
pub mod tokenizer;
