//! The primitive type catalog: `type`/`format` string constants and the
//! leaf [`Schema`] singletons built from them.
//!
//! The singletons are plain immutable values, not constructors. Clone one
//! wherever a leaf schema is needed:
//!
//! ```
//! use oas_forge::primitives::UUID;
//!
//! let id_schema = UUID.clone();
//! assert_eq!(id_schema.format.as_deref(), Some("uuid"));
//! ```

use once_cell::sync::Lazy;

use crate::models::Schema;

// Type kinds.
pub const OBJECT_TYPE: &str = "object";
pub const ARRAY_TYPE: &str = "array";
pub const INTEGER_TYPE: &str = "integer";
pub const NUMBER_TYPE: &str = "number";
pub const STRING_TYPE: &str = "string";
pub const BOOLEAN_TYPE: &str = "boolean";

// Format qualifiers.
pub const INT32_FORMAT: &str = "int32";
pub const INT64_FORMAT: &str = "int64";
pub const FLOAT_FORMAT: &str = "float";
pub const DOUBLE_FORMAT: &str = "double";
pub const BYTE_FORMAT: &str = "byte";
pub const BINARY_FORMAT: &str = "binary";
pub const DATE_FORMAT: &str = "date";
pub const DATETIME_FORMAT: &str = "date-time";
pub const PASSWORD_FORMAT: &str = "password";
pub const EMAIL_FORMAT: &str = "email";
pub const UUID_FORMAT: &str = "uuid";

// Parameter locations.
pub const IN_QUERY: &str = "query";
pub const IN_HEADER: &str = "header";
pub const IN_PATH: &str = "path";
pub const IN_COOKIE: &str = "cookie";

// Security scheme types.
pub const API_KEY_SCHEME: &str = "apiKey";
pub const HTTP_SCHEME: &str = "http";
pub const OAUTH2_SCHEME: &str = "oauth2";
pub const OPEN_ID_CONNECT_SCHEME: &str = "openIdConnect";

fn leaf(schema_type: &str, format: Option<&str>) -> Schema {
    Schema {
        schema_type: schema_type.to_string(),
        format: format.map(str::to_string),
        ..Default::default()
    }
}

pub static NUMBER: Lazy<Schema> = Lazy::new(|| leaf(NUMBER_TYPE, None));
pub static INT: Lazy<Schema> = Lazy::new(|| leaf(INTEGER_TYPE, None));
pub static INT32: Lazy<Schema> = Lazy::new(|| leaf(NUMBER_TYPE, Some(INT32_FORMAT)));
pub static INT64: Lazy<Schema> = Lazy::new(|| leaf(NUMBER_TYPE, Some(INT64_FORMAT)));
pub static FLOAT: Lazy<Schema> = Lazy::new(|| leaf(NUMBER_TYPE, Some(FLOAT_FORMAT)));
pub static DOUBLE: Lazy<Schema> = Lazy::new(|| leaf(NUMBER_TYPE, Some(DOUBLE_FORMAT)));
pub static STRING: Lazy<Schema> = Lazy::new(|| leaf(STRING_TYPE, None));
pub static BYTE: Lazy<Schema> = Lazy::new(|| leaf(STRING_TYPE, Some(BYTE_FORMAT)));
pub static BINARY: Lazy<Schema> = Lazy::new(|| leaf(STRING_TYPE, Some(BINARY_FORMAT)));
pub static DATE: Lazy<Schema> = Lazy::new(|| leaf(STRING_TYPE, Some(DATE_FORMAT)));
pub static DATETIME: Lazy<Schema> = Lazy::new(|| leaf(STRING_TYPE, Some(DATETIME_FORMAT)));
pub static PASSWORD: Lazy<Schema> = Lazy::new(|| leaf(STRING_TYPE, Some(PASSWORD_FORMAT)));
pub static EMAIL: Lazy<Schema> = Lazy::new(|| leaf(STRING_TYPE, Some(EMAIL_FORMAT)));
pub static UUID: Lazy<Schema> = Lazy::new(|| leaf(STRING_TYPE, Some(UUID_FORMAT)));
pub static BOOLEAN: Lazy<Schema> = Lazy::new(|| leaf(BOOLEAN_TYPE, None));
pub static OBJECT: Lazy<Schema> = Lazy::new(|| leaf(OBJECT_TYPE, None));
pub static ARRAY: Lazy<Schema> = Lazy::new(|| leaf(ARRAY_TYPE, None));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_singleton_has_no_format() {
        assert_eq!(STRING.schema_type, "string");
        assert_eq!(STRING.format, None);
    }

    #[test]
    fn formatted_singletons_pair_type_and_format() {
        assert_eq!(UUID.schema_type, "string");
        assert_eq!(UUID.format.as_deref(), Some("uuid"));
        assert_eq!(DATETIME.format.as_deref(), Some("date-time"));
        assert_eq!(INT64.schema_type, "number");
        assert_eq!(INT64.format.as_deref(), Some("int64"));
    }

    #[test]
    fn singletons_clone_to_fresh_equal_values() {
        let a = DATETIME.clone();
        let b = DATETIME.clone();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            r#"{"type":"string","format":"date-time"}"#
        );
    }
}
