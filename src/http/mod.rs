//! HTTP transport for the Klara API: URL construction, the authenticated
//! client, and the error taxonomy.

mod client;
mod error;
mod url;

pub use client::{KLARA_BASE_URL, KlaraClient, RequestSpec};
pub use error::ApiError;
pub use url::{build_url, serialize_query, substitute_path_params};
