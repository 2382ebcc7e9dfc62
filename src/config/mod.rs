//! Config: retrieval, validation, and lookups for the assistant roster.
//!
//! DESIGN
//! ======
//! The application bootstrap fetches the configuration once through a
//! [`ConfigSource`] and threads the resulting [`SystemConfiguration`] into
//! the pure lookups in [`lookup`]. Fetching fails fast: a bad status, bad
//! JSON, or a missing `roles`/`settings` section is an error, never a
//! silently defaulted configuration. Lookups never fail.

pub mod client;
pub mod endpoint;
pub mod lookup;
pub mod types;

pub use client::{ConfigSource, HttpConfigClient, fetch_system_configuration};
pub use endpoint::ApiEndpoint;
pub use lookup::{get_display_name, get_mode_description, get_mode_icon, get_modes_for_role, get_quick_actions};
pub use types::{ConfigError, ModeConfig, QuickAction, RoleConfig, Settings, SystemConfiguration};
