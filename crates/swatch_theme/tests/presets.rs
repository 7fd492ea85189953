use pretty_assertions::assert_eq;
use swatch_core::Color;
use swatch_theme::{ColorRole, ElevationLevel, SchemaVersion, ThemePreset};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(
        ids,
        vec!["current-dark", "current-light", "legacy-dark", "legacy-light"]
    );
}

#[test]
fn preset_ids_round_trip() {
    for preset in ThemePreset::all() {
        assert_eq!(ThemePreset::from_id(preset.id()), Some(*preset));
    }
    assert_eq!(ThemePreset::from_id("neon"), None);
}

#[test]
fn presets_validate_against_their_schema() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        theme
            .validate()
            .unwrap_or_else(|err| panic!("preset={preset:?}: {err}"));
        assert_eq!(theme.name(), preset.display_name());
    }
}

#[test]
fn light_and_dark_variants_have_distinct_primary() {
    for preset in [ThemePreset::LegacyLight, ThemePreset::CurrentLight] {
        let light = preset.theme();
        let dark = preset.counterpart().theme();

        assert!(!light.is_dark());
        assert!(dark.is_dark());
        assert_eq!(light.schema(), dark.schema());
        assert_ne!(
            light.color(ColorRole::Primary).unwrap(),
            dark.color(ColorRole::Primary).unwrap(),
            "Preset {:?} should have distinct light/dark primary colors",
            preset
        );
    }
}

#[test]
fn container_roles_exist_only_on_current_schema() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        let has_container = theme.color(ColorRole::SecondaryContainer).is_ok();
        assert_eq!(
            has_container,
            theme.schema() == SchemaVersion::Current,
            "preset={preset:?}"
        );
    }
}

#[test]
fn legacy_dark_stores_overlay_table() {
    let theme = ThemePreset::LegacyDark.theme();
    let level2 = theme.elevation(ElevationLevel::new(2).unwrap());
    assert_eq!(level2.to_canonical_string(), "rgb(35, 35, 35)");
}

#[test]
fn current_light_tonal_elevation() {
    let theme = ThemePreset::CurrentLight.theme();
    assert_eq!(theme.elevation(ElevationLevel::default()), Color::TRANSPARENT);
    assert_eq!(
        theme
            .elevation(ElevationLevel::new(1).unwrap())
            .to_canonical_string(),
        "rgb(249, 243, 242)"
    );
}
