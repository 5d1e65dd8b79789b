//! Fluent Method Definition Library
//!
//! This crate declares, as data, every extension method that `fluent-gen`
//! renders into `GeneratedExtensions.cs`. Nothing here performs I/O; the
//! enumerators are pure and return identical sequences on every call.
//!
//! ## Core Types
//!
//! - [`RequestMethod`] - One `*Async` request-sending method
//! - [`FluentMethod`] / [`Param`] - One fluent builder mirror method
//! - [`Catalog`] - The ordered descriptors for a single generation run
//! - [`Verb`], [`BodyKind`], [`ResponseKind`], [`Receiver`] - The dimensions
//!   request methods are enumerated over
//!
//! ## Examples
//!
//! ```
//! use fluent_define::{all_request_methods, Receiver, Verb};
//!
//! let patch_methods: Vec<_> = all_request_methods()
//!     .into_iter()
//!     .filter(|m| m.verb == Some(Verb::Patch) && m.receiver == Receiver::Request)
//!     .collect();
//!
//! assert!(patch_methods.iter().any(|m| m.name == "PatchJsonAsync"));
//! ```

pub mod catalog;
pub mod fluent;
pub mod prelude;
pub mod request;
pub mod types;

// Re-export main types at crate root
pub use catalog::Catalog;
pub use fluent::{FluentMethod, Param, all_fluent_methods};
pub use request::{RequestMethod, all_request_methods, method_name, supports_body};
pub use types::{BodyKind, Receiver, ResponseKind, Verb};
