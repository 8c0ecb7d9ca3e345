use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating farm contact numbers
    /// Optional leading plus followed by 7-14 digits (at most 15 characters total)
    /// - Valid: "+919876543210", "0201234567", "5551234"
    /// - Invalid: "12345", "+91 98765 43210", "phone", "++91987654321"
    pub static ref CONTACT_NUMBER_REGEX: Regex = Regex::new(r"^\+?[0-9]{7,14}$").unwrap();
}
