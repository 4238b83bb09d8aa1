//! Content module - page content loading and text rendering

pub mod loader;
mod markdown;
mod page;

pub use loader::{load_template, LoadError};
pub use markdown::{md_to_html, md_to_html_opt};
pub use page::PageContent;
