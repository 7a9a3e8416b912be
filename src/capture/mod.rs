// Internal modules - all access should go through api module
pub(crate) mod context;
pub(crate) mod error;
pub(crate) mod link;
pub(crate) mod listener;
pub(crate) mod record;

// Public API module - the only public interface for the capture system
pub mod api;
