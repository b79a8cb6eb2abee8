pub mod config;
pub mod logging;

pub mod catalog;
pub mod env;
pub mod error;
pub mod feed;
pub mod fetch;
pub mod resolver;
pub mod template;
pub mod text;
pub mod url_model;
pub mod version;

pub use error::{FetchError, ParseError, ResolveError};
pub use resolver::{ResolvedRelease, Resolver};
