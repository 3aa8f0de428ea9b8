use crate::field_type::FieldType;

/// Date format used by [FieldType::Date] fields unless set with [Field::with_date_format]
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Defines a field of a record used as a sort key.
///
/// # Examples
/// ```
/// // compare the fifth field as a number after stripping dollar signs and thousands separators
/// use csv_document_sort::field::Field;
/// use csv_document_sort::field_type::FieldType;
/// let field = Field::new(4, FieldType::Number)
///     .with_str_name("amount")
///     .with_strip_chars("$,");
/// ```
#[derive(Clone, Debug)]
pub struct Field {
    name: String,
    index: usize,
    field_type: FieldType,
    ignore_blanks: bool,
    ignore_case: bool,
    strip_chars: String,
    date_format: String,
}

impl Field {
    /// Create a new [Field]
    ///
    /// # Arguments
    /// * `index` - the position of the field in the record, starting at 0
    /// * `field_type` - the type of the field. See [FieldType] for supported types
    ///
    /// # Examples
    /// ```
    /// use csv_document_sort::field::Field;
    /// use csv_document_sort::field_type::FieldType;
    /// let field = Field::new(1, FieldType::Integer);
    /// ```
    pub fn new(
        index: usize,
        field_type: FieldType,
    ) -> Field {
        Field {
            name: String::new(),
            index,
            field_type,
            ignore_blanks: false,
            ignore_case: false,
            strip_chars: String::new(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Get the name for this field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the index for this field.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the [FieldType] for this field.
    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    /// Get the ignore blanks setting for this field
    pub fn ignore_blanks(&self) -> bool {
        self.ignore_blanks
    }

    /// Get the ignore case setting for this field.
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Get the characters removed before numeric conversion.
    pub fn strip_chars(&self) -> &str {
        &self.strip_chars
    }

    /// Get the date format for this field.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Specify a name for this field
    pub fn with_name(mut self, name: String) -> Field {
        self.name = name;
        self
    }

    /// Specify a name for this field as &str
    pub fn with_str_name(mut self, name: &str) -> Field {
        self.name = name.to_string();
        self
    }

    /// Specify the position of this field in the record, starting at 0.
    ///
    /// # Examples
    /// ```
    /// // the same key settings applied to another column
    /// use csv_document_sort::field::Field;
    /// use csv_document_sort::field_type::FieldType;
    /// let price = Field::new(4, FieldType::Number).with_strip_chars("$,");
    /// let reserve = price.clone().with_index(5).with_str_name("Reserve");
    /// assert_eq!(reserve.index(), 5);
    /// assert_eq!(reserve.strip_chars(), "$,");
    /// ```
    pub fn with_index(mut self, index: usize) -> Field {
        self.index = index;
        self
    }

    /// Specify the field type for this field. See [FieldType] for supported types.
    pub fn with_field_type(mut self, field_type: FieldType) -> Field {
        self.field_type = field_type;
        self
    }

    /// Specify whether to ignore blanks for comparison. When true the field will be trimmed before
    /// comparison. Integer, Number and Date fields are always trimmed.
    pub fn with_ignore_blanks(mut self, ignore_blanks: bool) -> Field {
        self.ignore_blanks = ignore_blanks;
        self
    }

    /// Specify whether to ignore case for comparison.
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Field {
        self.ignore_case = ignore_case;
        self
    }

    /// Specify characters to remove from Integer and Number fields before conversion, for example
    /// a currency sign.
    pub fn with_strip_chars(mut self, strip_chars: &str) -> Field {
        self.strip_chars = strip_chars.to_string();
        self
    }

    /// Specify the [chrono](https://docs.rs/chrono/latest/chrono/format/strftime/index.html)
    /// format of a Date field. The default is `%m/%d/%Y`.
    pub fn with_date_format(mut self, date_format: &str) -> Field {
        self.date_format = date_format.to_string();
        self
    }
}
