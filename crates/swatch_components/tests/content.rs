//! End-to-end content pass through the app bar

use pretty_assertions::assert_eq;
use swatch_components::prelude::*;
use swatch_core::{Color, ScaleResolver};
use swatch_theme::ThemePreset;

fn children() -> Vec<ContentNode> {
    vec![
        ContentNode::Empty,
        ContentNode::from(Element::slot(SlotKind::BackAction)),
        ContentNode::from(Element::slot(SlotKind::Content)),
        ContentNode::Flag(true),
        ContentNode::from(Element::other("avatar")),
        ContentNode::from(Element::slot(SlotKind::Action).color(Color::from_hex(0xff0000))),
    ]
}

#[test]
fn legacy_injects_contrast_color_and_keeps_explicit() {
    let theme = ThemePreset::LegacyDark.theme();
    let scale = ScaleResolver::default();
    let cx = StyleContext::new(&theme, &scale);

    let rendered = Appbar::new().render_content(&cx, &children(), &ContentFilter::default());
    assert_eq!(rendered.len(), 4);
    assert_eq!(rendered[0].color, Some(Color::WHITE));
    assert_eq!(rendered[1].color, Some(Color::WHITE));
    // Unrecognized elements pass through untouched
    assert_eq!(rendered[2], Element::other("avatar"));
    assert_eq!(rendered[3].color, Some(Color::from_hex(0xff0000)));
    // Legacy content after the first position gets the small leading margin
    assert_eq!(rendered[1].style.flatten().margin_left, Some(8.0));
}

#[test]
fn current_first_content_gets_leading_margin() {
    let theme = ThemePreset::CurrentLight.theme();
    let scale = ScaleResolver::default();
    let cx = StyleContext::new(&theme, &scale);

    let filter = ContentFilter::default().except([SlotKind::BackAction]);
    let rendered = Appbar::new().render_content(&cx, &children(), &filter);
    assert_eq!(rendered[0].kind, ElementKind::Slot(SlotKind::Content));
    assert_eq!(rendered[0].color, None);
    assert_eq!(rendered[0].style.flatten().margin_left, Some(12.0));
    assert_eq!(rendered[0].mode, Some(AppbarMode::Small));
}

#[test]
fn caller_style_is_appended_last() {
    let theme = ThemePreset::CurrentLight.theme();
    let scale = ScaleResolver::default();
    let cx = StyleContext::new(&theme, &scale);

    let nodes = vec![ContentNode::from(
        Element::slot(SlotKind::Content).style(StyleFragment::new().margin_left(2.0)),
    )];
    let rendered = Appbar::new().render_content(&cx, &nodes, &ContentFilter::default());
    assert_eq!(rendered[0].style.flatten().margin_left, Some(2.0));
    assert_eq!(rendered[0].style.len(), 3);
}

#[test]
fn allow_list_applies_after_deny_list() {
    let theme = ThemePreset::LegacyLight.theme();
    let scale = ScaleResolver::default();
    let cx = StyleContext::new(&theme, &scale);

    let filter = ContentFilter::default()
        .only([SlotKind::Content, SlotKind::Action])
        .except([SlotKind::Action]);
    let rendered = Appbar::new().render_content(&cx, &children(), &filter);
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].kind, ElementKind::Slot(SlotKind::Content));
    assert_eq!(rendered[0].color, Some(Color::BLACK));
}
