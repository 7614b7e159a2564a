pub mod config;
pub mod logging;

pub mod batch;
pub mod detect;
pub mod fetch;
pub mod markdown;
pub mod title;

pub use batch::fetch_titles;
pub use fetch::{fetch_title, TitleErrorKind, TitleFetchError, TitleFetchOptions, TitleFetchResult};
