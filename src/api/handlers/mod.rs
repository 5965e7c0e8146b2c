//! HTTP request handlers.
//!
//! [`dispatch_handler`] routes every authenticated request to one of the
//! operation handlers.

pub mod dispatch;
pub mod redirect;
pub mod shorten;

pub use dispatch::{Route, dispatch_handler, route};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
