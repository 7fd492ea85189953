//! Cross-family resolver properties

use pretty_assertions::assert_eq;
use swatch_components::prelude::*;
use swatch_core::{Color, DeviceMetrics, ScaleResolver};
use swatch_theme::{ColorRole, ElevationLevel, ThemeMode, ThemePreset};

fn with_cx<R>(preset: ThemePreset, f: impl FnOnce(&StyleContext<'_>) -> R) -> R {
    let theme = preset.theme();
    let scale = ScaleResolver::default();
    f(&StyleContext::new(&theme, &scale))
}

#[test]
fn disabled_wins_over_status_and_override_for_every_toggle() {
    let custom = Color::from_hex(0x00ff00);
    for preset in ThemePreset::all() {
        with_cx(*preset, |cx| {
            let expected = if cx.is_current() {
                cx.color(ColorRole::OnSurfaceDisabled).unwrap()
            } else {
                cx.color(ColorRole::Disabled).unwrap()
            };

            for status in [
                ToggleStatus::Unchecked,
                ToggleStatus::Checked,
                ToggleStatus::Indeterminate,
            ] {
                let state = ComponentVisualState::new()
                    .status(status)
                    .disabled(true)
                    .custom_color(custom);

                let checkbox = Checkbox::from(state).resolve(cx).unwrap();
                let radio = RadioButton::from(state).resolve(cx).unwrap();
                let toggle = ToggleButton::from(state).resolve(cx).unwrap();

                assert_eq!(checkbox.colors.foreground, expected);
                assert_eq!(radio.colors.foreground, expected);
                assert_eq!(toggle.colors.foreground, expected);
            }
        });
    }
}

#[test]
fn override_beats_roles_when_enabled() {
    let custom = Color::from_hex(0x00ff00);
    for preset in ThemePreset::all() {
        with_cx(*preset, |cx| {
            let state = ComponentVisualState::new().checked(true).custom_color(custom);
            assert_eq!(Checkbox::from(state).resolve(cx).unwrap().colors.foreground, custom);
            assert_eq!(ToggleButton::from(state).resolve(cx).unwrap().colors.foreground, custom);
        });
    }
}

#[test]
fn checked_checkbox_colors_per_schema() {
    with_cx(ThemePreset::CurrentLight, |cx| {
        let style = Checkbox::new(ToggleStatus::Checked).resolve(cx).unwrap();
        assert_eq!(
            style.colors.foreground,
            cx.color(ColorRole::OnSecondaryContainer).unwrap()
        );
    });
    with_cx(ThemePreset::LegacyLight, |cx| {
        let style = Checkbox::new(ToggleStatus::Checked).resolve(cx).unwrap();
        assert_eq!(
            style.colors.foreground.to_canonical_string(),
            "rgba(98, 0, 238, 0.87)"
        );
    });
}

#[test]
fn selection_ripple_is_faded_foreground() {
    with_cx(ThemePreset::CurrentDark, |cx| {
        let style = RadioButton::new(true).resolve(cx).unwrap();
        let expected = style.colors.foreground.fade(0.32).unwrap();
        assert!(style.colors.ripple.unwrap().same_as(&expected));
    });
}

#[test]
fn current_flat_surface_serializes_unchanged() {
    with_cx(ThemePreset::CurrentLight, |cx| {
        let surface = cx.color(ColorRole::Surface).unwrap();
        let style = Appbar::new().resolve(cx).unwrap();
        assert_eq!(
            style.background.to_canonical_string(),
            surface.to_canonical_string()
        );
    });
}

#[test]
fn legacy_dark_adaptive_level_two() {
    with_cx(ThemePreset::LegacyDark, |cx| {
        let level = ElevationLevel::new(2).unwrap();
        let color = resolve_surface_color(cx, level, None, false).unwrap();
        assert_eq!(color.to_canonical_string(), "rgb(35, 35, 35)");
    });
}

#[test]
fn legacy_dark_exact_appbar_is_primary() {
    let theme = ThemePreset::LegacyDark
        .theme()
        .derive()
        .mode(ThemeMode::Exact)
        .build()
        .unwrap();
    let scale = ScaleResolver::default();
    let cx = StyleContext::new(&theme, &scale);
    let style = Appbar::new()
        .elevation(ElevationLevel::new(3).unwrap())
        .resolve(&cx)
        .unwrap();
    assert_eq!(style.background, theme.color(ColorRole::Primary).unwrap());
}

#[test]
fn sizes_scale_with_device() {
    let theme = ThemePreset::CurrentLight.theme();
    let scale = ScaleResolver::new(DeviceMetrics::new(700.0, 1400.0, 2.0).unwrap());
    let cx = StyleContext::new(&theme, &scale);

    let checkbox = Checkbox::new(ToggleStatus::Unchecked).resolve(&cx).unwrap();
    assert_eq!(checkbox.border_radius, 27.0);
    assert_eq!(checkbox.padding, 9.0);
    // Grid-derived sizes are logical and do not scale
    assert_eq!(checkbox.icon_size, 24.0);
}

#[test]
fn style_records_serialize_camel_case() {
    with_cx(ThemePreset::CurrentLight, |cx| {
        let style = ToggleButton::new(true).resolve(cx).unwrap();
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["colors"]["background"], "rgba(40, 24, 5, 0.12)");
        assert_eq!(json["borderRadius"], 4.0);
        assert!(json["colors"].get("borderColor").is_none());
    });
}
