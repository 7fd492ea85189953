//! Content filtering and prop injection for container components
//!
//! A container (the app bar) walks its declared children, filters them by
//! allow/deny kind lists and hands recognized slots new props: a color and,
//! for the content slot, position-dependent spacing and alignment.
//!
//! Input nodes are never modified; every surviving node is returned as a
//! new value in the original order.
//!
//! # Example
//!
//! ```rust
//! use swatch_components::content::{
//!     render_content, ContentContext, ContentFilter, ContentNode, Element, SlotKind,
//! };
//! use swatch_theme::ThemePreset;
//!
//! let theme = ThemePreset::CurrentLight.theme();
//! let children = vec![
//!     ContentNode::Flag(false),
//!     ContentNode::from(Element::slot(SlotKind::BackAction)),
//!     ContentNode::from(Element::slot(SlotKind::Content)),
//! ];
//!
//! let cx = ContentContext::new(&theme);
//! let rendered = render_content(&children, &ContentFilter::default(), &cx);
//! assert_eq!(rendered.len(), 2);
//! // The content slot is second after filtering, so it gets no leading margin.
//! assert_eq!(rendered[1].style.flatten().margin_left, None);
//! ```

use serde::Serialize;
use swatch_core::Color;
use swatch_theme::{SchemaVersion, Theme};

use crate::components::appbar::AppbarMode;
use crate::style::{Align, StyleFragment, StyleStack};

/// Child kinds that receive injected props
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotKind {
    /// Title/subtitle block
    Content,
    /// Trailing icon action
    Action,
    /// Leading back arrow
    BackAction,
}

/// What a slot kind accepts from the container
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotCapabilities {
    pub color: bool,
    pub layout: bool,
    pub mode: bool,
}

impl SlotKind {
    pub fn capabilities(&self) -> SlotCapabilities {
        match self {
            SlotKind::Content => SlotCapabilities {
                color: true,
                layout: true,
                mode: true,
            },
            SlotKind::Action | SlotKind::BackAction => SlotCapabilities {
                color: true,
                layout: false,
                mode: false,
            },
        }
    }
}

/// Declared type of a child element
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Slot(SlotKind),
    /// Anything the container does not recognize, by type name
    Other(String),
}

impl From<SlotKind> for ElementKind {
    fn from(slot: SlotKind) -> Self {
        ElementKind::Slot(slot)
    }
}

/// A child element with the props the pass reads and injects
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub kind: ElementKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    pub style: StyleStack,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<AppbarMode>,
}

impl Element {
    pub fn new(kind: impl Into<ElementKind>) -> Self {
        Self {
            kind: kind.into(),
            color: None,
            style: StyleStack::new(),
            mode: None,
        }
    }

    pub fn slot(slot: SlotKind) -> Self {
        Self::new(slot)
    }

    pub fn other(name: impl Into<String>) -> Self {
        Self::new(ElementKind::Other(name.into()))
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn style(mut self, fragment: StyleFragment) -> Self {
        self.style.push(Some(fragment));
        self
    }
}

/// A declared child, including entries that render nothing
#[derive(Clone, Debug, PartialEq)]
pub enum ContentNode {
    /// Absent child
    Empty,
    /// Boolean left over from a conditional; never rendered
    Flag(bool),
    Element(Element),
}

impl From<Element> for ContentNode {
    fn from(element: Element) -> Self {
        ContentNode::Element(element)
    }
}

impl<T: Into<ContentNode>> From<Option<T>> for ContentNode {
    fn from(node: Option<T>) -> Self {
        node.map_or(ContentNode::Empty, Into::into)
    }
}

/// Allow/deny lists of element kinds
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentFilter {
    pub only: Option<Vec<ElementKind>>,
    pub except: Option<Vec<ElementKind>>,
}

impl ContentFilter {
    pub fn only(mut self, kinds: impl IntoIterator<Item = impl Into<ElementKind>>) -> Self {
        self.only = Some(kinds.into_iter().map(Into::into).collect());
        self
    }

    pub fn except(mut self, kinds: impl IntoIterator<Item = impl Into<ElementKind>>) -> Self {
        self.except = Some(kinds.into_iter().map(Into::into).collect());
        self
    }

    /// Deny-list first, then allow-list
    pub fn admits(&self, kind: &ElementKind) -> bool {
        let denied = self
            .except
            .as_ref()
            .is_some_and(|except| except.contains(kind));
        let allowed = self.only.as_ref().map_or(true, |only| only.contains(kind));
        !denied && allowed
    }
}

/// Resolution inputs for the pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentContext {
    pub dark: bool,
    pub schema: SchemaVersion,
    pub center_content: bool,
    pub mode: AppbarMode,
    /// Leading margin for the first content slot (current schema)
    pub first_spacing: f32,
    /// Leading margin for later content slots (legacy schema)
    pub subsequent_spacing: f32,
}

impl ContentContext {
    pub fn new(theme: &Theme) -> Self {
        let spacing = theme.spacing();
        Self {
            dark: theme.is_dark(),
            schema: theme.schema(),
            center_content: false,
            mode: AppbarMode::default(),
            first_spacing: spacing.xx_small,
            subsequent_spacing: spacing.xxx_small,
        }
    }

    pub fn center_content(mut self, center: bool) -> Self {
        self.center_content = center;
        self
    }

    pub fn mode(mut self, mode: AppbarMode) -> Self {
        self.mode = mode;
        self
    }

    /// Color injected when the child has none of its own
    fn default_color(&self) -> Option<Color> {
        match self.schema {
            SchemaVersion::Current => None,
            SchemaVersion::Legacy if self.dark => Some(Color::WHITE),
            SchemaVersion::Legacy => Some(Color::BLACK),
        }
    }

    fn spacing_fragment(&self, index: usize) -> Option<StyleFragment> {
        match self.schema {
            SchemaVersion::Current if index == 0 => {
                Some(StyleFragment::new().margin_left(self.first_spacing))
            }
            SchemaVersion::Legacy if index != 0 => {
                Some(StyleFragment::new().margin_left(self.subsequent_spacing))
            }
            _ => None,
        }
    }

    fn centering_fragment(&self) -> Option<StyleFragment> {
        if !self.center_content {
            return None;
        }
        Some(match self.schema {
            SchemaVersion::Current => StyleFragment::new()
                .absolute_fill()
                .align_items(Align::Center)
                .justify_content(Align::Center),
            SchemaVersion::Legacy => StyleFragment::new().align_items(Align::Center),
        })
    }

    fn inject(&self, element: &Element, index: usize) -> Element {
        let SlotCapabilities {
            color,
            layout,
            mode,
        } = match &element.kind {
            ElementKind::Slot(slot) => slot.capabilities(),
            ElementKind::Other(_) => return element.clone(),
        };

        let mut injected = element.clone();
        if color {
            injected.color = element.color.or_else(|| self.default_color());
        }
        if mode {
            injected.mode = Some(self.mode);
        }
        if layout {
            let mut style = StyleStack::new()
                .with(self.spacing_fragment(index))
                .with(self.centering_fragment());
            style.extend(&element.style);
            injected.style = style;
        }
        injected
    }
}

/// Filter `children` and inject props into recognized slots.
///
/// Empty and flag nodes are dropped, then the deny-list and the allow-list
/// apply. Position indices are assigned over the filtered sequence, so a
/// dropped leading node never shifts "first position" treatment.
pub fn render_content(
    children: &[ContentNode],
    filter: &ContentFilter,
    cx: &ContentContext,
) -> Vec<Element> {
    let rendered: Vec<Element> = children
        .iter()
        .filter_map(|node| match node {
            ContentNode::Element(element) => Some(element),
            ContentNode::Empty | ContentNode::Flag(_) => None,
        })
        .filter(|element| filter.admits(&element.kind))
        .enumerate()
        .map(|(index, element)| cx.inject(element, index))
        .collect();

    tracing::trace!(
        declared = children.len(),
        rendered = rendered.len(),
        schema = %cx.schema,
        "rendered container content"
    );
    rendered
}
