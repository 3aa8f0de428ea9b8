use regex::Regex;

use crate::tokenizer::QUOTE;

#[derive(Clone, Debug)]
pub(crate) struct Config {
    field_separator: char,
    quote: char,
    ignore_lines: Option<Regex>,
    quote_on_write: bool,
    endl: char,
}

impl Config {
    pub(crate) fn new(
        field_separator: char,
        ignore_lines: Option<Regex>,
        quote_on_write: bool,
        endl: char,
    ) -> Config {
        Config {
            field_separator,
            quote: QUOTE,
            ignore_lines,
            quote_on_write,
            endl,
        }
    }

    pub(crate) fn field_separator(&self) -> char {
        self.field_separator
    }

    pub(crate) fn quote(&self) -> char {
        self.quote
    }

    pub(crate) fn ignore_lines(&self) -> &Option<Regex> {
        &self.ignore_lines
    }

    pub(crate) fn quote_on_write(&self) -> bool {
        self.quote_on_write
    }

    pub(crate) fn endl(&self) -> char {
        self.endl
    }
}
