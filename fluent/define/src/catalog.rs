//! The complete set of descriptors consumed by one generation run.

use serde::{Deserialize, Serialize};

use crate::fluent::{FluentMethod, all_fluent_methods};
use crate::request::{RequestMethod, all_request_methods};

/// Ordered request and fluent descriptors, rendered in this order.
///
/// ## Examples
///
/// ```
/// use fluent_define::{Catalog, Receiver, RequestMethod, Verb};
///
/// let standard = Catalog::standard();
/// assert!(!standard.request_methods.is_empty());
///
/// let single = Catalog::new(
///     vec![RequestMethod::new(Receiver::Request, Some(Verb::Get), None, None)],
///     vec![],
/// );
/// assert_eq!(single.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub request_methods: Vec<RequestMethod>,
    pub fluent_methods: Vec<FluentMethod>,
}

impl Catalog {
    pub fn new(request_methods: Vec<RequestMethod>, fluent_methods: Vec<FluentMethod>) -> Self {
        Self {
            request_methods,
            fluent_methods,
        }
    }

    /// Every request and fluent method the library exposes.
    pub fn standard() -> Self {
        Self::new(all_request_methods(), all_fluent_methods())
    }

    /// Number of descriptors (request plus fluent).
    pub fn len(&self) -> usize {
        self.request_methods.len() + self.fluent_methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.request_methods.is_empty() && self.fluent_methods.is_empty()
    }
}
