//! Assistant roster configuration and display density control.
//!
//! [`config`] fetches and validates the `/api/v1/config` document and offers
//! pure lookups over it. [`util::density`] writes the root `data-density`
//! attribute through an injectable sink. The two are independent.

pub mod config;
pub mod util;

pub use config::{
    ConfigError, ConfigSource, HttpConfigClient, SystemConfiguration, fetch_system_configuration, get_display_name,
    get_mode_description, get_mode_icon, get_modes_for_role, get_quick_actions,
};
pub use util::density::{Density, DensityToggle, PresentationSink};
