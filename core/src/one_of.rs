//! Codec for fields that hold one of several shapes with no discriminator.
//!
//! # Design
//! The Bot API never wraps these values in a tag. Decoding buffers the input
//! as a `serde_json::Value` and tries each candidate in the order it is
//! declared in the `one_of!` invocation; the first candidate that decodes is
//! accepted. When every candidate fails, the caller sees one error naming the
//! union rather than an aggregate of the per-candidate failures. Encoding
//! simply delegates to the variant that is held.
//!
//! Concrete shapes that carry their own `type` (or `status`, `source`) field
//! validate it through a zero-sized tag from `wire_tag!`, so the check is part
//! of that shape's structural decode and not a dispatch table.

/// Message carried by the error raised when no candidate of `union` matched.
///
/// `DecodeError` recognizes this prefix when classifying serde errors.
pub(crate) fn no_candidate(union: &str) -> String {
    format!("{NO_CANDIDATE_PREFIX}{union} matched")
}

pub(crate) const NO_CANDIDATE_PREFIX: &str = "no candidate of ";

/// Declares a union enum whose decoder tries each variant in declaration order.
macro_rules! one_of {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($ty:ty),
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant($ty),
            )+
        }

        impl $name {
            /// Candidate shapes in the order they are tried when decoding.
            pub const CANDIDATES: &'static [&'static str] = &[$(stringify!($variant)),+];
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                match self {
                    $( Self::$variant(inner) => ::serde::Serialize::serialize(inner, serializer), )+
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                $(
                    match <$ty as ::serde::Deserialize>::deserialize(&value) {
                        Ok(inner) => return Ok(Self::$variant(inner)),
                        Err(err) => ::tracing::trace!(
                            union = stringify!($name),
                            candidate = stringify!($variant),
                            %err,
                            "candidate rejected"
                        ),
                    }
                )+
                Err(<D::Error as ::serde::de::Error>::custom(
                    $crate::one_of::no_candidate(stringify!($name)),
                ))
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(inner: $ty) -> Self {
                    Self::$variant(inner)
                }
            }
        )+
    };
}

/// Declares zero-sized types that encode as, and only decode from, one string.
macro_rules! wire_tag {
    ($( $(#[$meta:meta])* $name:ident = $value:literal; )+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl $name {
                pub const VALUE: &'static str = $value;
            }

            impl ::serde::Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: ::serde::Serializer,
                {
                    serializer.serialize_str($value)
                }
            }

            impl<'de> ::serde::Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    let tag = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                    if tag == $value {
                        Ok($name)
                    } else {
                        Err(<D::Error as ::serde::de::Error>::invalid_value(
                            ::serde::de::Unexpected::Str(&tag),
                            &$value,
                        ))
                    }
                }
            }
        )+
    };
}

pub(crate) use one_of;
pub(crate) use wire_tag;
