//! HTTP handlers for the landing page, the shorten form, and redirects.

mod index;
mod redirect;
mod shorten;

pub use index::index_handler;
pub use redirect::redirect_handler;
pub use shorten::{shorten_handler, shorten_wrong_method_handler};
