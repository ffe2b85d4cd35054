pub mod rest;
pub mod source;
pub mod types;
pub mod users;

pub use rest::{DEFAULT_BASE_URL, RestSource};
pub use source::{FetchError, PostSource};
pub use types::{Comment, Post, User};
