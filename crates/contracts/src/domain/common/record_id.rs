/// Typed record identifier, convertible to/from its wire (string) form.
pub trait RecordId: Sized {
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}
