//! HTTP request handlers.

pub mod metrics;
pub mod redirect;
pub mod save;

pub use metrics::metrics_handler;
pub use redirect::redirect_handler;
pub use save::save_handler;
