#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the `FeatherHub` crates.
//!
//! ## Usage
//! Every crate that defines an error enum depends on this crate directly:
//! ```toml
//! [dependencies]
//! fhub-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! The examples below are `ignore`d to avoid compiling in this crate; the `tests/ui` directory
//! holds compiled versions.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Result Alias**: Emits `<Stem>Result<T>` next to the enum, where `<Stem>` is the enum name
///   without its `Error` suffix (`FertilityError` → `FertilityResult<T>`).
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context(...)`
///   to any `Result` that can be converted into this error type.
/// * **Source Conversions**: Implements `From<T>` for variants carrying a `source` field (or a
///   field marked `#[source]`/`#[from]`), so upstream errors propagate with `?`.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` when an `Internal`
///   variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with **named-field** variants.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a source field must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use fhub_derive::fhub_error;
/// use std::borrow::Cow;
///
/// #[fhub_error]
/// pub enum LoaderError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> LoaderResult<String> {
///     std::fs::read_to_string(path).context("Reading knowledge base")
/// }
/// ```
#[proc_macro_attribute]
pub fn fhub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
