use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::field::Field;
use crate::key::Key;
use crate::order::Order;
use crate::row::{Row, RowView};

/// A total order over records. Comparing never fails, values that cannot be interpreted are given
/// a fixed place in the order instead.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use csv_document_sort::comparator::Comparator;
///
/// let by_len = |a: &String, b: &String| a.len().cmp(&b.len());
/// let by_len_then_text = by_len.then(|a: &String, b: &String| a.cmp(b));
/// assert_eq!(by_len_then_text.compare(&"ab".to_string(), &"b".to_string()), Ordering::Greater);
/// ```
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Invert this comparator.
    fn reversed(self) -> Reversed<Self> where Self: Sized {
        Reversed {
            comparator: self,
        }
    }

    /// Break ties of this comparator with `next`.
    fn then<C>(self, next: C) -> Then<Self, C> where Self: Sized, C: Comparator<T> {
        Then {
            first: self,
            next,
        }
    }
}

impl<T: ?Sized, F> Comparator<T> for F where F: Fn(&T, &T) -> Ordering {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[derive(Clone, Debug)]
pub struct Reversed<C> {
    comparator: C,
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.comparator.compare(b, a)
    }
}

#[derive(Clone, Debug)]
pub struct Then<A, B> {
    first: A,
    next: B,
}

impl<T: ?Sized, A: Comparator<T>, B: Comparator<T>> Comparator<T> for Then<A, B> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self.first.compare(a, b) {
            Ordering::Equal => self.next.compare(a, b),
            ordering => ordering,
        }
    }
}

/// A record whose fields can be addressed by position, for use with [KeyComparator].
///
/// Domain types implement this to map their attributes to field positions.
pub trait Record {
    fn field(&self, position: usize) -> Option<&str>;
}

impl Record for Row {
    fn field(&self, position: usize) -> Option<&str> {
        self.get(position)
    }
}

impl Record for RowView<'_> {
    fn field(&self, position: usize) -> Option<&str> {
        self.row().get(position)
    }
}

impl Record for Vec<String> {
    fn field(&self, position: usize) -> Option<&str> {
        self.get(position).map(String::as_str)
    }
}

/// Compares records by typed [Field] keys, in the order the fields were added.
///
/// A value that does not convert to its field's type, or a field missing from the record, makes
/// an invalid key. Invalid keys are equal to each other and order after every valid key in both
/// [Order::Asc] and [Order::Desc]. Each distinct invalid value is logged once per comparator.
///
/// # Examples
/// ```
/// use csv_document_sort::comparator::{Comparator, KeyComparator};
/// use csv_document_sort::field::Field;
/// use csv_document_sort::field_type::FieldType;
/// use csv_document_sort::order::Order;
///
/// let comparator = KeyComparator::new(vec![Field::new(2, FieldType::Integer)])
///     .with_order(Order::Desc);
/// let a = vec!["1".to_string(), "alpha".to_string(), "10".to_string()];
/// let b = vec!["2".to_string(), "beta".to_string(), "5".to_string()];
/// assert!(comparator.compare(&a, &b).is_lt());
/// ```
#[derive(Debug)]
pub struct KeyComparator {
    fields: Vec<Field>,
    order: Order,
    reported: RefCell<HashSet<(usize, String)>>,
}

impl KeyComparator {
    pub fn new(fields: Vec<Field>) -> KeyComparator {
        KeyComparator {
            fields,
            order: Order::Asc,
            reported: RefCell::new(HashSet::new()),
        }
    }

    /// Add a field used to break ties of the fields added before it
    pub fn add_field(mut self, field: Field) -> KeyComparator {
        self.fields.push(field);
        self
    }

    /// Set [Order]. The default is [Order::Asc]
    pub fn with_order(mut self, order: Order) -> KeyComparator {
        self.order = order;
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Number of distinct invalid values met so far.
    pub fn anomalies(&self) -> usize {
        self.reported.borrow().len()
    }

    fn key<R: Record + ?Sized>(&self, record: &R, field: &Field) -> Key {
        match record.field(field.index()) {
            Some(value) => {
                Key::new(value, field).unwrap_or_else(|e| {
                    self.report(field, value, &e.to_string());
                    Key::Invalid
                })
            }
            None => {
                self.report(field, "", "field is missing from the record");
                Key::Invalid
            }
        }
    }

    fn report(&self, field: &Field, value: &str, reason: &str) {
        if self.reported.borrow_mut().insert((field.index(), value.to_string())) {
            log::warn!(
                "Unusable sort key, field: {} ({}), value: {:?}, error: {}. Ordering it last.",
                field.index(),
                field.name(),
                value,
                reason,
            );
        }
    }
}

impl<R: Record + ?Sized> Comparator<R> for KeyComparator {
    fn compare(&self, a: &R, b: &R) -> Ordering {
        for field in &self.fields {
            let a_key = self.key(a, field);
            let b_key = self.key(b, field);
            let ordering = if a_key.is_invalid() || b_key.is_invalid() {
                a_key.cmp(&b_key)
            } else {
                match &self.order {
                    Order::Asc => a_key.cmp(&b_key),
                    Order::Desc => b_key.cmp(&a_key),
                }
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}
