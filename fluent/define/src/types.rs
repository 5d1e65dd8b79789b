//! Dimension types for generated extension methods.
//!
//! Every generated request method is a point in the space spanned by these
//! enums. The enumerator iterates them with [`strum::IntoEnumIterator`], so
//! declaration order is output order and adding a variant adds its methods.
//!
//! - [`Verb`] - HTTP verb baked into the method (or absent for `Send*`)
//! - [`BodyKind`] - How the request body is supplied
//! - [`ResponseKind`] - What the response is deserialized into
//! - [`Receiver`] - The type the extension method is attached to

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// HTTP verbs that get a dedicated method family.
///
/// ## Examples
///
/// ```
/// use fluent_define::Verb;
///
/// assert_eq!(Verb::Patch.to_string(), "Patch");
/// assert_eq!(Verb::Patch.wire_name(), "PATCH");
/// assert!(Verb::Put.carries_body());
/// assert!(!Verb::Head.carries_body());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Verb {
    /// Returns true for verbs whose requests conventionally carry a body.
    pub fn carries_body(self) -> bool {
        matches!(self, Verb::Post | Verb::Put | Verb::Patch)
    }

    /// Uppercase method name as sent on the wire (e.g. `"GET"`).
    pub fn wire_name(self) -> String {
        self.to_string().to_uppercase()
    }
}

/// How a request body is handed to a generated method.
///
/// A method with no `BodyKind` but a body-carrying verb takes pre-built
/// `HttpContent` instead.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
pub enum BodyKind {
    /// A raw string, wrapped as-is.
    String,
    /// Any object, serialized through the request's JSON serializer.
    Json,
}

/// Shape the response body is converted into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
pub enum ResponseKind {
    /// Deserialized JSON; the only generic kind.
    Json,
    String,
    Stream,
    Bytes,
}

impl ResponseKind {
    /// Human text used in the `<returns>` documentation line.
    pub fn result_description(self) -> &'static str {
        match self {
            ResponseKind::Json => "the JSON response body deserialized to an object of type T",
            ResponseKind::String => "the response body as a string",
            ResponseKind::Stream => "the response body as a Stream",
            ResponseKind::Bytes => "the response body as a byte array",
        }
    }
}

/// The type a generated extension method extends.
///
/// `Request` methods send directly. `Url` and `Str` methods wrap the URL in a
/// new request and delegate to the `Request` method of the same name.
///
/// ## Examples
///
/// ```
/// use fluent_define::Receiver;
///
/// assert_eq!(Receiver::Request.type_name(), "IFlurlRequest");
/// assert_eq!(Receiver::Str.param_name(), "url");
/// assert!(Receiver::Url.is_url_like());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Receiver {
    /// An already-built `IFlurlRequest`.
    Request,
    /// A `Url` value.
    Url,
    /// A plain `string` holding a URL.
    Str,
}

impl Receiver {
    /// Receivers that build a request from a URL before sending.
    pub const URL_LIKE: [Receiver; 2] = [Receiver::Url, Receiver::Str];

    /// Target-language type name of the receiver.
    pub fn type_name(self) -> &'static str {
        match self {
            Receiver::Request => "IFlurlRequest",
            Receiver::Url => "Url",
            Receiver::Str => "string",
        }
    }

    /// Name of the `this` parameter in generated signatures.
    pub fn param_name(self) -> &'static str {
        match self {
            Receiver::Request => "request",
            Receiver::Url | Receiver::Str => "url",
        }
    }

    pub fn is_url_like(self) -> bool {
        !matches!(self, Receiver::Request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn verbs_iterate_in_declaration_order() {
        let verbs: Vec<_> = Verb::iter().collect();
        assert_eq!(
            verbs,
            vec![
                Verb::Get,
                Verb::Post,
                Verb::Put,
                Verb::Patch,
                Verb::Delete,
                Verb::Head,
                Verb::Options
            ]
        );
    }

    #[test]
    fn only_post_put_patch_carry_body() {
        let carrying: Vec<_> = Verb::iter().filter(|v| v.carries_body()).collect();
        assert_eq!(carrying, vec![Verb::Post, Verb::Put, Verb::Patch]);
    }

    #[test]
    fn wire_names_are_uppercase() {
        assert_eq!(Verb::Options.wire_name(), "OPTIONS");
        assert_eq!(Verb::Get.wire_name(), "GET");
    }

    #[test]
    fn url_like_receivers_exclude_request() {
        assert!(!Receiver::URL_LIKE.contains(&Receiver::Request));
        assert!(Receiver::URL_LIKE.iter().all(|r| r.is_url_like()));
        assert!(!Receiver::Request.is_url_like());
    }

    #[test]
    fn receiver_serializes_by_variant_name() {
        let json = serde_json::to_string(&Receiver::Str).unwrap();
        assert_eq!(json, "\"Str\"");
    }
}
