//! Public API for the build session system
//!
//! This module provides the complete public API for the session system.
//! External modules should import from here rather than directly from
//! internal modules.

// Core event and outcome types
pub use crate::session::event::{BuildEventKind, PublishedScan};
pub use crate::session::outcome::BuildOutcome;

// Session manager and errors
pub use crate::session::error::SessionError;
pub use crate::session::manager::BuildSession;

// Traits
pub use crate::session::traits::{BuildListener, ListenerError};
