/// Field type
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// String, compared lexicographically
    String,
    /// Signed 64 bit integer
    Integer,
    /// 64 bit floating point number
    Number,
    /// Calendar date, parsed with the field's date format
    Date,
}
