//! Convenient re-exports for building and inspecting descriptors.
//!
//! ```
//! use fluent_define::prelude::*;
//!
//! let catalog = Catalog::standard();
//! assert!(catalog.request_methods.iter().any(|m| m.verb == Some(Verb::Patch)));
//! ```

pub use crate::catalog::Catalog;
pub use crate::fluent::{FluentMethod, Param, all_fluent_methods};
pub use crate::request::{RequestMethod, all_request_methods};
pub use crate::types::{BodyKind, Receiver, ResponseKind, Verb};
