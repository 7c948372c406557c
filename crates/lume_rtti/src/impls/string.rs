use alloc::string::{String, ToString};

use crate::impls::{int_from_text, parse_bool, parse_f64};
use crate::registry::VarTypeDesc;
use crate::ty::{VarType, VarTypeId};
use crate::var::DynVar;

/// Strings hold the canonical text form directly. Writing any other
/// representation stores that value's canonical text; numeric reads run the
/// same parse chain the numeric types use on [`from_text`](VarType::from_text).
impl VarType for String {
    const TYPE_ID: VarTypeId = VarTypeId::STRING;
    const TYPE_NAME: &'static str = "string";

    fn descriptor() -> &'static VarTypeDesc {
        static DESC: VarTypeDesc = VarTypeDesc::of::<String>();
        &DESC
    }

    fn default_value() -> Self {
        String::new()
    }

    fn to_bool(&self) -> bool {
        match parse_bool(self) {
            Some(value) => value,
            None => parse_f64(self).is_some_and(|value| value != 0.0),
        }
    }

    fn from_bool(value: bool) -> Self {
        value.to_text()
    }

    fn to_i8(&self) -> i8 {
        int_from_text!(self, i8)
    }

    fn from_i8(value: i8) -> Self {
        value.to_string()
    }

    fn to_i16(&self) -> i16 {
        int_from_text!(self, i16)
    }

    fn from_i16(value: i16) -> Self {
        value.to_string()
    }

    fn to_i32(&self) -> i32 {
        int_from_text!(self, i32)
    }

    fn from_i32(value: i32) -> Self {
        value.to_string()
    }

    fn to_i64(&self) -> i64 {
        int_from_text!(self, i64)
    }

    fn from_i64(value: i64) -> Self {
        value.to_string()
    }

    fn to_u8(&self) -> u8 {
        int_from_text!(self, u8)
    }

    fn from_u8(value: u8) -> Self {
        value.to_string()
    }

    fn to_u16(&self) -> u16 {
        int_from_text!(self, u16)
    }

    fn from_u16(value: u16) -> Self {
        value.to_string()
    }

    fn to_u32(&self) -> u32 {
        int_from_text!(self, u32)
    }

    fn from_u32(value: u32) -> Self {
        value.to_string()
    }

    fn to_u64(&self) -> u64 {
        int_from_text!(self, u64)
    }

    fn from_u64(value: u64) -> Self {
        value.to_string()
    }

    fn to_usize(&self) -> usize {
        int_from_text!(self, usize)
    }

    fn from_usize(value: usize) -> Self {
        value.to_string()
    }

    fn to_f32(&self) -> f32 {
        self.trim().parse::<f32>().unwrap_or(0.0)
    }

    fn from_f32(value: f32) -> Self {
        value.to_string()
    }

    fn to_f64(&self) -> f64 {
        self.trim().parse::<f64>().unwrap_or(0.0)
    }

    fn from_f64(value: f64) -> Self {
        value.to_string()
    }

    fn to_text(&self) -> String {
        self.clone()
    }

    fn from_text(text: &str) -> Self {
        String::from(text)
    }

    fn from_var(var: &dyn DynVar) -> Self {
        var.get_text()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::ty::VarType;

    #[test]
    fn text_form_is_the_value_itself() {
        let value = String::from("  raw text, kept verbatim ");
        assert_eq!(value.to_text(), value);
        assert_eq!(String::from_text("abc"), "abc");
    }

    #[test]
    fn numeric_writes_store_canonical_text() {
        assert_eq!(String::from_i32(-42), "-42");
        assert_eq!(String::from_f32(12.5), "12.5");
        assert_eq!(String::from_bool(true), "true");
    }

    #[test]
    fn numeric_reads_parse_with_fallback() {
        assert_eq!(String::from(" 57 ").to_i32(), 57);
        assert_eq!(String::from("57.9").to_i32(), 57);
        assert_eq!(String::from("2.75").to_f64(), 2.75);
        assert_eq!(String::from("words").to_u64(), 0);
        assert!(String::from("True").to_bool());
        assert!(!String::from("0").to_bool());
    }
}
