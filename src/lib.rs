//! funcdoc — generate function reference docs from annotated Rust sources.
//!
//! Functions are documented with plain comments of the form
//!
//! ```text
//! // fn Add: adds *a* and *b* together.
//! // Further lines continue the description.
//! ```
//!
//! and described by a [`Registry`] of parameter/return types. Words wrapped in
//! `*...*` name the parameters, in order. Each annotated comment group becomes
//! a [`DocRecord`], which a [`render::Renderer`] turns into text, markdown or
//! JSON.

pub mod error;
pub mod model;
pub mod parser;
pub mod registry;
pub mod render;
pub mod signature;
mod toc;

pub use error::{ManifestError, ParseError, SignatureError, SyntaxError};
pub use model::DocRecord;
pub use parser::{extract, extract_str};
pub use registry::{Binding, FuncDescriptor, Registry, TypeRef};
