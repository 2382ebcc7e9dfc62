//! Display density toggle.
//!
//! Writes a `data-density` attribute on the document root. The write goes
//! through a [`PresentationSink`] so the owner of that global state is
//! visible at the call site and tests need no real document.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Attribute set on the root element.
pub const DENSITY_ATTRIBUTE: &str = "data-density";

// =============================================================================
// DENSITY
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Density {
    Compact,
    Cozy,
}

impl Density {
    pub const ALL: [Self; 2] = [Self::Compact, Self::Cozy];

    /// Attribute value written to the root element.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Cozy => "cozy",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Compact => "Compact",
            Self::Cozy => "Cozy",
        }
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown density '{0}' (expected 'compact' or 'cozy')")]
pub struct ParseDensityError(pub String);

impl FromStr for Density {
    type Err = ParseDensityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(Self::Compact),
            "cozy" => Ok(Self::Cozy),
            other => Err(ParseDensityError(other.to_string())),
        }
    }
}

// =============================================================================
// PRESENTATION SINK
// =============================================================================

/// Receiver of document-level presentation state. Writes cannot fail.
pub trait PresentationSink {
    fn set_density(&mut self, density: Density);
}

impl<T: PresentationSink + ?Sized> PresentationSink for &mut T {
    fn set_density(&mut self, density: Density) {
        (**self).set_density(density);
    }
}

/// In-memory stand-in for the document's root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    attributes: BTreeMap<String, String>,
}

impl DocumentRoot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Density currently applied, if the attribute holds a known value.
    #[must_use]
    pub fn density(&self) -> Option<Density> {
        self.attribute(DENSITY_ATTRIBUTE).and_then(|v| v.parse().ok())
    }

    /// Opening `<html>` tag carrying the current attributes.
    #[must_use]
    pub fn render_open_tag(&self) -> String {
        let mut tag = String::from("<html");
        for (name, value) in &self.attributes {
            tag.push(' ');
            tag.push_str(name);
            tag.push_str("=\"");
            tag.push_str(&escape_attribute(value));
            tag.push('"');
        }
        tag.push('>');
        tag
    }
}

impl PresentationSink for DocumentRoot {
    fn set_density(&mut self, density: Density) {
        self.set_attribute(DENSITY_ATTRIBUTE, density.as_str());
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// =============================================================================
// TOGGLE
// =============================================================================

/// One button of the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityAction {
    pub label: &'static str,
    pub density: Density,
}

/// Two-action control: "compact" and "cozy". Holds no state of its own.
pub struct DensityToggle<S> {
    sink: S,
}

impl<S: PresentationSink> DensityToggle<S> {
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// The fixed actions, in display order.
    #[must_use]
    pub fn actions(&self) -> [DensityAction; 2] {
        Density::ALL.map(|density| DensityAction { label: density.label(), density })
    }

    /// Apply `density` to the sink. Repeating the same action is a no-op.
    pub fn trigger(&mut self, density: Density) {
        self.sink.set_density(density);
    }

    pub fn compact(&mut self) {
        self.trigger(Density::Compact);
    }

    pub fn cozy(&mut self) {
        self.trigger(Density::Cozy);
    }

    #[must_use]
    pub fn into_inner(self) -> S {
        self.sink
    }
}

#[cfg(test)]
#[path = "density_test.rs"]
mod tests;
