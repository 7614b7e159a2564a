//! CLI command handlers, one per file.

mod detect;
mod linkify;
mod scan;
mod title;

pub use detect::run_detect;
pub use linkify::run_linkify;
pub use scan::run_scan;
pub use title::run_title;

#[cfg(test)]
pub(crate) use detect::describe_position;
#[cfg(test)]
pub(crate) use linkify::bare_urls;
#[cfg(test)]
pub(crate) use scan::describe_scan;
