//! Request-sending method descriptors and their enumeration.
//!
//! A [`RequestMethod`] fully describes one generated `*Async` method before
//! any text is produced. [`all_request_methods`] builds the complete, ordered
//! set from the cross product of the dimension enums in [`crate::types`].
//!
//! ## Combination Rules
//!
//! - A typed body ([`BodyKind`]) is only allowed when the verb is absent
//!   (runtime verb) or one of `Post`, `Put`, `Patch`.
//! - Every response kind is allowed for every verb.
//! - `ResponseKind::Json` methods are generic over the deserialized type.
//! - Every combination is emitted once per [`Receiver`], request first.
//!
//! ## Naming
//!
//! Names are `{Verb|Send}{Body}{Response}Async`. When the verb can carry a
//! body, the response token is prefixed with `Receive` so that a JSON body
//! (`PostJsonAsync`) never collides with a JSON response
//! (`PostReceiveJsonAsync`).

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::types::{BodyKind, Receiver, ResponseKind, Verb};

/// Description of one generated request-sending extension method.
///
/// ## Examples
///
/// ```
/// use fluent_define::{BodyKind, Receiver, RequestMethod, ResponseKind, Verb};
///
/// let method = RequestMethod::new(
///     Receiver::Request,
///     Some(Verb::Post),
///     Some(BodyKind::Json),
///     Some(ResponseKind::Json),
/// );
///
/// assert_eq!(method.name, "PostJsonReceiveJsonAsync");
/// assert!(method.is_generic);
/// assert!(method.has_body());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestMethod {
    /// Method identifier, without any type-parameter marker.
    pub name: String,
    /// The type this method extends.
    pub receiver: Receiver,
    /// Fixed verb, or `None` when the verb is a runtime parameter.
    pub verb: Option<Verb>,
    /// Typed body kind, or `None` for raw content (or no body at all).
    pub body: Option<BodyKind>,
    /// Response conversion, or `None` to return the raw response.
    pub response: Option<ResponseKind>,
    /// Whether the method declares a type parameter for deserialization.
    pub is_generic: bool,
    /// Human text describing the task result.
    pub result_description: String,
}

impl RequestMethod {
    /// Builds a descriptor, deriving the name, generic-ness and result text.
    pub fn new(
        receiver: Receiver,
        verb: Option<Verb>,
        body: Option<BodyKind>,
        response: Option<ResponseKind>,
    ) -> Self {
        Self {
            name: method_name(verb, body, response),
            receiver,
            verb,
            body,
            response,
            is_generic: response == Some(ResponseKind::Json),
            result_description: response
                .map_or("the received HttpResponseMessage", ResponseKind::result_description)
                .to_string(),
        }
    }

    /// Whether the generated signature accepts request content.
    ///
    /// A runtime verb might be anything, so it always accepts a body.
    pub fn has_body(&self) -> bool {
        accepts_body(self.verb, self.body)
    }

    /// Whether this method forwards to a `Request` sibling.
    pub fn is_delegating(&self) -> bool {
        self.receiver.is_url_like()
    }

    /// Returns true when `other` is the same combination on another receiver.
    pub fn same_shape(&self, other: &RequestMethod) -> bool {
        self.name == other.name
            && self.verb == other.verb
            && self.body == other.body
            && self.response == other.response
            && self.is_generic == other.is_generic
    }
}

/// Returns whether a typed body is permitted with the given verb.
pub fn supports_body(verb: Option<Verb>, body: Option<BodyKind>) -> bool {
    body.is_none() || verb.is_none_or(Verb::carries_body)
}

fn accepts_body(verb: Option<Verb>, body: Option<BodyKind>) -> bool {
    body.is_some() || verb.is_none_or(Verb::carries_body)
}

/// Derives the method name for a combination.
///
/// ## Examples
///
/// ```
/// use fluent_define::{method_name, BodyKind, ResponseKind, Verb};
///
/// assert_eq!(method_name(Some(Verb::Get), None, Some(ResponseKind::Json)), "GetJsonAsync");
/// assert_eq!(method_name(Some(Verb::Post), Some(BodyKind::Json), None), "PostJsonAsync");
/// assert_eq!(method_name(Some(Verb::Post), None, Some(ResponseKind::Json)), "PostReceiveJsonAsync");
/// assert_eq!(method_name(None, None, None), "SendAsync");
/// ```
pub fn method_name(
    verb: Option<Verb>,
    body: Option<BodyKind>,
    response: Option<ResponseKind>,
) -> String {
    let mut name = verb.map_or_else(|| "Send".to_string(), |v| v.to_string());
    if let Some(body) = body {
        name.push_str(&body.to_string());
    }
    if let Some(response) = response {
        if accepts_body(verb, body) {
            name.push_str("Receive");
        }
        name.push_str(&response.to_string());
    }
    name.push_str("Async");
    name
}

/// `None` followed by every value of `values`.
fn optional<T>(values: impl Iterator<Item = T>) -> impl Iterator<Item = Option<T>> {
    std::iter::once(None).chain(values.map(Some))
}

/// Enumerates every generated request method in output order.
///
/// Order is verb-major (runtime verb first), then body kind, then response
/// kind, then receiver. The result is identical on every call.
///
/// ## Examples
///
/// ```
/// use fluent_define::{all_request_methods, Receiver};
///
/// let methods = all_request_methods();
/// assert_eq!(methods[0].name, "SendAsync");
/// assert_eq!(methods[0].receiver, Receiver::Request);
/// assert_eq!(methods[1].receiver, Receiver::Url);
/// ```
pub fn all_request_methods() -> Vec<RequestMethod> {
    optional(Verb::iter())
        .flat_map(|verb| optional(BodyKind::iter()).map(move |body| (verb, body)))
        .filter(|&(verb, body)| supports_body(verb, body))
        .flat_map(|(verb, body)| {
            optional(ResponseKind::iter()).map(move |response| (verb, body, response))
        })
        .flat_map(|(verb, body, response)| {
            Receiver::iter().map(move |receiver| RequestMethod::new(receiver, verb, body, response))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn for_receiver(receiver: Receiver) -> Vec<RequestMethod> {
        all_request_methods()
            .into_iter()
            .filter(|m| m.receiver == receiver)
            .collect()
    }

    #[test]
    fn enumeration_is_deterministic() {
        assert_eq!(all_request_methods(), all_request_methods());
    }

    #[test]
    fn enumeration_covers_every_permitted_combination() {
        // 4 body-capable verb slots x 3 bodies x 5 responses
        // + 4 bodiless verbs x 1 body x 5 responses
        let per_receiver = 4 * 3 * 5 + 4 * 5;
        assert_eq!(for_receiver(Receiver::Request).len(), per_receiver);
        assert_eq!(for_receiver(Receiver::Url).len(), per_receiver);
        assert_eq!(for_receiver(Receiver::Str).len(), per_receiver);
        assert_eq!(all_request_methods().len(), per_receiver * 3);
    }

    #[test]
    fn every_combination_appears_once_per_receiver() {
        for receiver in Receiver::iter() {
            let combos: Vec<_> = for_receiver(receiver)
                .into_iter()
                .map(|m| (m.verb, m.body, m.response))
                .collect();
            let unique: HashSet<_> = combos.iter().copied().collect();
            assert_eq!(combos.len(), unique.len(), "duplicate combo for {receiver}");
        }
    }

    #[test]
    fn names_are_unique_per_receiver() {
        for receiver in Receiver::iter() {
            let methods = for_receiver(receiver);
            let names: HashSet<_> = methods.iter().map(|m| m.name.as_str()).collect();
            assert_eq!(names.len(), methods.len(), "name collision for {receiver}");
        }
    }

    #[test]
    fn typed_bodies_only_on_body_carrying_verbs() {
        for method in all_request_methods() {
            if method.body.is_some() {
                assert!(
                    method.verb.is_none_or(Verb::carries_body),
                    "{} has a typed body",
                    method.name
                );
            }
        }
    }

    #[test]
    fn bodiless_verbs_never_accept_content() {
        for method in all_request_methods() {
            if let Some(verb @ (Verb::Get | Verb::Head | Verb::Delete | Verb::Options)) = method.verb {
                assert!(!method.has_body(), "{} ({verb}) accepts a body", method.name);
            }
        }
    }

    #[test]
    fn runtime_verb_always_accepts_content() {
        assert!(
            all_request_methods()
                .iter()
                .filter(|m| m.verb.is_none())
                .all(RequestMethod::has_body)
        );
    }

    #[test]
    fn url_like_methods_follow_their_request_sibling() {
        let methods = all_request_methods();
        for chunk in methods.chunks(3) {
            let [request, url, string] = chunk else {
                panic!("receiver group of {} descriptors", chunk.len());
            };
            assert_eq!(request.receiver, Receiver::Request);
            assert_eq!(url.receiver, Receiver::Url);
            assert_eq!(string.receiver, Receiver::Str);
            assert!(url.same_shape(request));
            assert!(string.same_shape(request));
            assert!(url.is_delegating() && string.is_delegating());
            assert!(!request.is_delegating());
        }
    }

    #[test]
    fn generic_exactly_when_deserializing_json() {
        for method in all_request_methods() {
            assert_eq!(method.is_generic, method.response == Some(ResponseKind::Json));
        }
    }

    #[test]
    fn order_is_verb_major() {
        let methods = all_request_methods();
        let mut seen: Vec<Option<Verb>> = Vec::new();
        for method in &methods {
            if seen.last() != Some(&method.verb) {
                assert!(!seen.contains(&method.verb), "verb {:?} reappears", method.verb);
                seen.push(method.verb);
            }
        }
        assert_eq!(seen.first(), Some(&None));
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn receive_marker_only_where_a_body_is_possible() {
        assert_eq!(method_name(Some(Verb::Head), None, Some(ResponseKind::Bytes)), "HeadBytesAsync");
        assert_eq!(method_name(None, None, Some(ResponseKind::Stream)), "SendReceiveStreamAsync");
        assert_eq!(
            method_name(Some(Verb::Put), Some(BodyKind::String), Some(ResponseKind::Bytes)),
            "PutStringReceiveBytesAsync"
        );
        assert_eq!(method_name(None, Some(BodyKind::Json), None), "SendJsonAsync");
    }

    #[test]
    fn result_description_defaults_to_raw_response() {
        let method = RequestMethod::new(Receiver::Url, Some(Verb::Delete), None, None);
        assert_eq!(method.result_description, "the received HttpResponseMessage");
        assert!(!method.is_generic);
    }

    #[test]
    fn supports_body_rejects_get_with_json() {
        assert!(!supports_body(Some(Verb::Get), Some(BodyKind::Json)));
        assert!(supports_body(Some(Verb::Patch), Some(BodyKind::Json)));
        assert!(supports_body(None, Some(BodyKind::String)));
        assert!(supports_body(Some(Verb::Options), None));
    }
}
