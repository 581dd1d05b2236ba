//! URL pattern and query string matching.

mod query;
mod url;

pub use query::parse_query_string;
pub use url::UrlPattern;
