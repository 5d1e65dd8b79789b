//! Rendering of the generated extensions file, piece by piece.
//!
//! Each submodule writes one kind of block through a [`CodeWriter`]:
//!
//! - [`preamble`] - Header comment, `using` block, namespace and class
//!   opening, and the matching closing braces
//! - [`request_methods`] - One documented `*Async` method per
//!   [`RequestMethod`](fluent_define::RequestMethod)
//! - [`fluent_methods`] - One documented builder mirror per
//!   [`FluentMethod`](fluent_define::FluentMethod) and URL-like receiver
//!
//! Every block leaves the writer at the depth it found it.
//!
//! See [`crate::output`] for how the blocks are assembled and written.
//!
//! [`CodeWriter`]: crate::writer::CodeWriter

pub mod fluent_methods;
pub mod preamble;
pub mod request_methods;

pub use fluent_methods::write_fluent_method;
pub use preamble::{write_closing, write_preamble};
pub use request_methods::write_request_method;
