//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.
//!
//! IDs are strings on the wire. The server allocates them from a monotonic
//! counter, but any string a client sends is a valid (possibly dangling) ID.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `from_sequence()`
/// - `From<String>`, `From<&str>` and `Into<String>` implementations
///
/// # Example
///
/// ```rust
/// # use juice_bar_core::define_id;
/// define_id!(JuiceId);
/// define_id!(OrderId);
///
/// let juice_id = JuiceId::from_sequence(1);
/// let order_id = OrderId::new("1");
///
/// assert_eq!(juice_id.as_str(), order_id.as_str());
/// // These are different types, so this won't compile:
/// // let _: JuiceId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Create an ID from a numeric sequence value.
            #[must_use]
            pub fn from_sequence(seq: u64) -> Self {
                Self(seq.to_string())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(JuiceId);
define_id!(OrderId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_sequence_is_decimal_string() {
        assert_eq!(JuiceId::from_sequence(6).as_str(), "6");
        assert_eq!(OrderId::from_sequence(42).to_string(), "42");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = JuiceId::new("3");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"3\"");

        let parsed: OrderId = serde_json::from_str("\"not-a-number\"").unwrap();
        assert_eq!(parsed.as_str(), "not-a-number");
    }
}
