use super::*;

#[derive(Default)]
struct RecordingSink {
    writes: Vec<Density>,
}

impl PresentationSink for RecordingSink {
    fn set_density(&mut self, density: Density) {
        self.writes.push(density);
    }
}

#[test]
fn compact_twice_leaves_compact() {
    let mut root = DocumentRoot::new();
    let mut toggle = DensityToggle::new(&mut root);
    toggle.compact();
    toggle.compact();
    assert_eq!(root.attribute(DENSITY_ATTRIBUTE), Some("compact"));
}

#[test]
fn cozy_overrides_compact() {
    let mut toggle = DensityToggle::new(DocumentRoot::new());
    toggle.compact();
    toggle.cozy();
    let root = toggle.into_inner();
    assert_eq!(root.attribute("data-density"), Some("cozy"));
    assert_eq!(root.density(), Some(Density::Cozy));
}

#[test]
fn each_trigger_writes_exactly_once() {
    let mut toggle = DensityToggle::new(RecordingSink::default());
    toggle.compact();
    toggle.trigger(Density::Cozy);
    toggle.compact();
    assert_eq!(toggle.into_inner().writes, vec![Density::Compact, Density::Cozy, Density::Compact]);
}

#[test]
fn actions_are_compact_then_cozy() {
    let toggle = DensityToggle::new(RecordingSink::default());
    let actions = toggle.actions();
    assert_eq!(actions[0], DensityAction { label: "Compact", density: Density::Compact });
    assert_eq!(actions[1], DensityAction { label: "Cozy", density: Density::Cozy });
}

#[test]
fn density_parses_known_tokens_only() {
    assert_eq!("compact".parse::<Density>(), Ok(Density::Compact));
    assert_eq!("cozy".parse::<Density>(), Ok(Density::Cozy));
    let err = "roomy".parse::<Density>().unwrap_err();
    assert!(err.to_string().contains("roomy"));
}

#[test]
fn density_display_matches_attribute_value() {
    assert_eq!(Density::Compact.to_string(), "compact");
    assert_eq!(Density::Cozy.to_string(), Density::Cozy.as_str());
}

#[test]
fn root_without_density_has_none() {
    let root = DocumentRoot::new();
    assert_eq!(root.density(), None);
    assert_eq!(root.render_open_tag(), "<html>");
}

#[test]
fn render_open_tag_includes_density_and_other_attributes() {
    let mut root = DocumentRoot::new();
    root.set_attribute("data-theme", "dark");
    root.set_density(Density::Compact);
    assert_eq!(root.render_open_tag(), r#"<html data-density="compact" data-theme="dark">"#);
}

#[test]
fn render_open_tag_escapes_values() {
    let mut root = DocumentRoot::new();
    root.set_attribute("title", r#"a "b" & <c>"#);
    assert_eq!(root.render_open_tag(), r#"<html title="a &quot;b&quot; &amp; &lt;c&gt;">"#);
}
