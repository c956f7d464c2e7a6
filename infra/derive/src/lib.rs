#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every Gamma crate.
//!
//! Right now this is a single attribute, [`gamma_error`], which turns a plain enum into
//! the workspace's standard error type. Consumers only need the crate as a regular
//! dependency; the generated code refers to `::thiserror`, so that crate must be a
//! dependency of the consumer as well.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Defines a domain error enum with the workspace conventions baked in.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` unless the enum already derives them.
/// * A `<Name>Ext<T>` trait exposing `.context(..)` on `Result<T, Name>`, and on
///   `Result<T, Source>` for every variant that wraps an upstream error.
/// * `From<Source>` for variants with a `source` field (or a `#[source]`/`#[from]` field).
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A module-local `format_context` helper for use inside `#[error(..)]` strings.
///
/// # Requirements
///
/// * Only enums with named-field variants are accepted.
/// * `context` fields must be typed `Option<Cow<'static, str>>`.
/// * Variants that wrap a source error must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use gamma_derive::gamma_error;
/// use std::borrow::Cow;
///
/// #[gamma_error]
/// pub enum FetchError {
///     #[error("Transport failure{}: {source}", format_context(.context))]
///     Network { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<String, FetchError> {
///     let body = blocking_get().context("Loading banners")?;
///     body.ok_or_else(|| "empty body".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn gamma_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
