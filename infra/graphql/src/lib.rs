//! # GraphQL data access
//!
//! A single process-wide [`GraphqlClient`] talks to the configured endpoint. Failures
//! surface as [`ClientError`], which [`normalize`] turns into the message list the UI
//! shows.
//!
//! ```rust,no_run
//! use gamma_graphql::{get_client, normalize};
//! use serde_json::{Value, json};
//!
//! # async fn run() {
//! let client = get_client(None);
//! let result = client.query::<_, Value>("query Banners { banners { id } }", &json!({})).await;
//! if let Err(e) = result {
//!     eprintln!("{}", normalize(Some(&e)));
//! }
//! # }
//! ```

mod client;
mod error;
mod normalize;
mod token;

pub use crate::client::{GraphqlClient, GraphqlClientBuilder, get_client, init_client};
pub use crate::error::{ClientError, ClientErrorExt, ErrorExtensions, RemoteError};
pub use crate::normalize::{
    Failure, GENERIC_REMOTE_ERROR, UNKNOWN_ERROR, classify, field_label, normalize,
    normalize_messages,
};
pub use crate::token::{FileTokenStore, MemoryTokenStore, TokenStore};
