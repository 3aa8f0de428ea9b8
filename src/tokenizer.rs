/// The quote character. A quoted field may contain the separator, there is no escape for the
/// quote character itself.
pub const QUOTE: char = '"';

/// Split a line into fields on `separator`, ignoring separators between quotes.
///
/// Every quote character toggles the quoted state. Quotes are kept in the field text, so
/// `"a,b",c` yields `"a,b"` and `c`. The result always has one more field than there are
/// separators outside quotes. An unmatched quote makes the rest of the line a single field.
///
/// # Examples
/// ```
/// use csv_document_sort::tokenizer::split_fields;
/// let fields = split_fields("1,\"Chair, oak\",$25", ',');
/// assert_eq!(fields, vec!["1", "\"Chair, oak\"", "$25"]);
/// ```
pub fn split_fields(line: &str, separator: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut quoted = false;
    let mut start = 0;
    for (i, c) in line.char_indices() {
        if c == QUOTE {
            quoted = !quoted;
        } else if c == separator && !quoted {
            fields.push(line[start..i].to_string());
            start = i + c.len_utf8();
        }
    }
    fields.push(line[start..].to_string());
    fields
}

/// True when `field` starts and ends with a quote character.
pub(crate) fn is_quoted(field: &str) -> bool {
    field.len() >= 2 && field.starts_with(QUOTE) && field.ends_with(QUOTE)
}
