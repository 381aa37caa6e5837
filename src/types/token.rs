// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! String-backed vendor tokens.
//!
//! The API keeps adding device types, working statuses and the like. A
//! closed Rust enum would turn every new value into a decode failure, so
//! these are modeled as open tokens: a string newtype with a curated set of
//! associated constants. Unknown values decode fine and compare unequal to
//! every constant.

/// Declares an open, string-backed token type with named constants.
macro_rules! open_token {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$const_meta:meta])*
                $konst:ident = $value:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name(::std::borrow::Cow<'static, str>);

        impl $name {
            $(
                $(#[$const_meta])*
                pub const $konst: Self = Self(::std::borrow::Cow::Borrowed($value));
            )*

            /// Every token that has a named constant.
            pub const KNOWN: &'static [Self] = &[$(Self::$konst),*];

            /// Creates a token from an arbitrary wire string.
            #[must_use]
            pub fn new(token: impl Into<String>) -> Self {
                Self(::std::borrow::Cow::Owned(token.into()))
            }

            /// Returns the wire representation.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` if the token matches one of the named constants.
            #[must_use]
            pub fn is_known(&self) -> bool {
                Self::KNOWN.contains(self)
            }

            /// Returns `true` if no value was present on the wire.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                String::deserialize(deserializer).map(Self::new)
            }
        }
    };
}

pub(crate) use open_token;

#[cfg(test)]
mod tests {
    open_token! {
        /// Test token.
        Fruit {
            APPLE = "apple",
            PEAR = "pear",
        }
    }

    #[test]
    fn constants_compare_with_decoded_values() {
        let decoded: Fruit = serde_json::from_str("\"apple\"").unwrap();
        assert_eq!(decoded, Fruit::APPLE);
        assert!(decoded.is_known());
    }

    #[test]
    fn unknown_values_are_preserved() {
        let decoded: Fruit = serde_json::from_str("\"durian\"").unwrap();
        assert!(!decoded.is_known());
        assert_eq!(decoded, "durian");
        assert_eq!(serde_json::to_string(&decoded).unwrap(), "\"durian\"");
    }

    #[test]
    fn non_string_is_rejected() {
        assert!(serde_json::from_str::<Fruit>("3").is_err());
    }

    #[test]
    fn default_is_empty() {
        assert!(Fruit::default().is_empty());
        assert_eq!(Fruit::KNOWN.len(), 2);
    }
}
