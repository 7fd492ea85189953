//! Style fragments and ordered fragment stacks
//!
//! Resolvers hand the rendering layer a [`StyleStack`]: an ordered list of
//! optional fragments. Later entries win field by field; flattening happens
//! at the boundary into the rendering layer.

use serde::Serialize;
use smallvec::SmallVec;
use swatch_core::Color;

/// Flexbox alignment keyword
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

/// Per-corner radii
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub fn all(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    pub fn top(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            ..Self::default()
        }
    }
}

/// A partial style; unset fields defer to earlier fragments
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleFragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_vertical: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<Align>,
    /// Stretch over the parent (absolute position, zero insets)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl StyleFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn margin_left(mut self, value: f32) -> Self {
        self.margin_left = Some(value);
        self
    }

    pub fn margin_right(mut self, value: f32) -> Self {
        self.margin_right = Some(value);
        self
    }

    pub fn margin_vertical(mut self, value: f32) -> Self {
        self.margin_vertical = Some(value);
        self
    }

    pub fn align_items(mut self, align: Align) -> Self {
        self.align_items = Some(align);
        self
    }

    pub fn align_self(mut self, align: Align) -> Self {
        self.align_self = Some(align);
        self
    }

    pub fn justify_content(mut self, align: Align) -> Self {
        self.justify_content = Some(align);
        self
    }

    pub fn absolute_fill(mut self) -> Self {
        self.absolute_fill = Some(true);
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Overlay `other` on top of `self`; set fields of `other` win
    pub fn merge(self, other: &StyleFragment) -> Self {
        Self {
            margin_left: other.margin_left.or(self.margin_left),
            margin_right: other.margin_right.or(self.margin_right),
            margin_vertical: other.margin_vertical.or(self.margin_vertical),
            align_items: other.align_items.or(self.align_items),
            align_self: other.align_self.or(self.align_self),
            justify_content: other.justify_content.or(self.justify_content),
            absolute_fill: other.absolute_fill.or(self.absolute_fill),
            background_color: other.background_color.or(self.background_color),
            color: other.color.or(self.color),
        }
    }
}

/// Ordered list of optional fragments; later entries win
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleStack(SmallVec<[Option<StyleFragment>; 4]>);

impl StyleStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment; `None` keeps its slot but contributes nothing
    pub fn push(&mut self, fragment: Option<StyleFragment>) {
        self.0.push(fragment);
    }

    pub fn with(mut self, fragment: Option<StyleFragment>) -> Self {
        self.push(fragment);
        self
    }

    /// Append every entry of `other` after the current entries
    pub fn extend(&mut self, other: &StyleStack) {
        self.0.extend(other.0.iter().copied());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Option<StyleFragment>> {
        self.0.iter()
    }

    /// Collapse the stack into one fragment
    pub fn flatten(&self) -> StyleFragment {
        self.0
            .iter()
            .flatten()
            .fold(StyleFragment::default(), |acc, fragment| acc.merge(fragment))
    }
}

impl From<StyleFragment> for StyleStack {
    fn from(fragment: StyleFragment) -> Self {
        Self::new().with(Some(fragment))
    }
}

impl FromIterator<Option<StyleFragment>> for StyleStack {
    fn from_iter<I: IntoIterator<Item = Option<StyleFragment>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_later_fragments_win() {
        let stack = StyleStack::new()
            .with(Some(StyleFragment::new().margin_left(12.0).align_items(Align::Center)))
            .with(None)
            .with(Some(StyleFragment::new().margin_left(4.0)));

        assert_eq!(
            stack.flatten(),
            StyleFragment::new().margin_left(4.0).align_items(Align::Center)
        );
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn test_empty_stack_flattens_to_default() {
        assert_eq!(StyleStack::new().flatten(), StyleFragment::default());
        assert_eq!(
            StyleStack::from_iter([None, None]).flatten(),
            StyleFragment::default()
        );
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut stack = StyleStack::from(StyleFragment::new().margin_left(8.0));
        stack.extend(&StyleStack::from(StyleFragment::new().margin_left(2.0)));
        assert_eq!(stack.flatten().margin_left, Some(2.0));
    }
}
