//! Pure lookups over a fetched [`SystemConfiguration`].
//!
//! None of these fail. A missing role or mode yields a fixed fallback value
//! because a role without modes is a valid configuration. Fields of the
//! wrong JSON type count as missing.

use super::types::{ModeConfig, QuickAction, RoleConfig, SystemConfiguration};

/// Icon used when a role or mode has none configured.
pub const DEFAULT_ICON: &str = "User";

fn find_role<'a>(config: &'a SystemConfiguration, role_name: &str) -> Option<&'a RoleConfig> {
    config.roles.get(role_name)
}

fn find_mode<'a>(config: &'a SystemConfiguration, role_name: &str, mode_name: &str) -> Option<ModeConfig<'a>> {
    find_role(config, role_name)?.mode(mode_name)
}

/// Mode names defined for `role`. Empty for unknown roles or roles without modes.
#[must_use]
pub fn get_modes_for_role(config: &SystemConfiguration, role_name: &str) -> Vec<String> {
    find_role(config, role_name)
        .map(RoleConfig::mode_names)
        .unwrap_or_default()
}

/// Human-readable name for `role`, suffixed with the mode when one is given,
/// non-empty, and not the configured default.
///
/// Unknown roles, and roles without a `display_name`, fall back to
/// `"{role} Assistant"`.
#[must_use]
pub fn get_display_name(config: &SystemConfiguration, role_name: &str, mode: Option<&str>) -> String {
    let base = match find_role(config, role_name) {
        Some(r) => match r.display_name() {
            Some(name) => name.to_string(),
            None => format!("{role_name} Assistant"),
        },
        None => return format!("{role_name} Assistant"),
    };

    match mode {
        Some(m) if !m.is_empty() && config.default_mode() != Some(m) => {
            format!("{base} ({} Mode)", format_mode_name(m))
        }
        _ => base,
    }
}

/// Description of `mode` under `role`, or an empty string.
#[must_use]
pub fn get_mode_description(config: &SystemConfiguration, role_name: &str, mode_name: &str) -> String {
    find_mode(config, role_name, mode_name)
        .and_then(ModeConfig::description)
        .unwrap_or_default()
        .to_string()
}

/// Icon identifier for `mode` under `role`, or [`DEFAULT_ICON`].
#[must_use]
pub fn get_mode_icon(config: &SystemConfiguration, role_name: &str, mode_name: &str) -> String {
    find_mode(config, role_name, mode_name)
        .and_then(ModeConfig::icon)
        .unwrap_or(DEFAULT_ICON)
        .to_string()
}

/// Quick actions for `mode` under `role`, in configured order.
#[must_use]
pub fn get_quick_actions(config: &SystemConfiguration, role_name: &str, mode_name: &str) -> Vec<QuickAction> {
    find_mode(config, role_name, mode_name)
        .map(ModeConfig::quick_actions)
        .unwrap_or_default()
}

/// `debug_mode` -> `Debug Mode`, `deep-dive` -> `Deep-Dive`.
///
/// Underscores become spaces; every alphanumeric character that starts a
/// word (follows a non-alphanumeric character or the start) is uppercased.
#[must_use]
pub fn format_mode_name(mode: &str) -> String {
    let mut out = String::with_capacity(mode.len());
    let mut at_word_start = true;
    for c in mode.chars() {
        let c = if c == '_' { ' ' } else { c };
        if at_word_start && c.is_alphanumeric() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphanumeric();
    }
    out
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod tests;
