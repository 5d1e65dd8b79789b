//! Fluent extension code generator library.
//!
//! This crate renders the method descriptors declared in `fluent-define`
//! into `GeneratedExtensions.cs`, the fluent extension surface of
//! Flurl.Http. The generated file contains:
//!
//! - One `*Async` method per request descriptor, on `IFlurlRequest`, `Url`
//!   and `string`; the URL-like variants delegate to the `IFlurlRequest` one
//! - One builder mirror per fluent descriptor on `Url` and `string`
//!
//! ## Modules
//!
//! - [`writer`] - Line emitter with `@N` placeholders and brace tracking
//! - [`codegen`] - Rendering of the preamble and each method block
//! - [`output`] - Final assembly, destination checks and atomic writing
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use fluent_define::Catalog;
//! use fluent_gen::output::generate;
//!
//! let report = generate(Path::new("GeneratedExtensions.cs"), &Catalog::standard()).unwrap();
//! println!("{} lines written", report.lines);
//! ```

pub mod codegen;
pub mod errors;
pub mod output;
pub mod writer;
