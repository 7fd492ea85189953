//! Component subcommands: flags in, resolved style out

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use swatch_components::prelude::*;
use swatch_core::Color;
use swatch_theme::ElevationLevel;

/// Flags shared by the toggle controls
#[derive(Args, Debug, Clone, Default)]
pub struct ToggleArgs {
    #[arg(long)]
    pub checked: bool,
    #[arg(long)]
    pub disabled: bool,
    /// Caller color override, any accepted color string
    #[arg(long)]
    pub color: Option<String>,
}

impl ToggleArgs {
    fn state(&self) -> Result<ComponentVisualState> {
        let mut state = ComponentVisualState::new()
            .checked(self.checked)
            .disabled(self.disabled);
        if let Some(color) = parse_color(self.color.as_deref())? {
            state = state.custom_color(color);
        }
        Ok(state)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum CheckboxStatusArg {
    #[default]
    Unchecked,
    Checked,
    Indeterminate,
}

impl From<CheckboxStatusArg> for ToggleStatus {
    fn from(status: CheckboxStatusArg) -> Self {
        match status {
            CheckboxStatusArg::Unchecked => ToggleStatus::Unchecked,
            CheckboxStatusArg::Checked => ToggleStatus::Checked,
            CheckboxStatusArg::Indeterminate => ToggleStatus::Indeterminate,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum AppbarModeArg {
    #[default]
    Small,
    Medium,
    Large,
    CenterAligned,
}

impl From<AppbarModeArg> for AppbarMode {
    fn from(mode: AppbarModeArg) -> Self {
        match mode {
            AppbarModeArg::Small => AppbarMode::Small,
            AppbarModeArg::Medium => AppbarMode::Medium,
            AppbarModeArg::Large => AppbarMode::Large,
            AppbarModeArg::CenterAligned => AppbarMode::CenterAligned,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum SegmentArg {
    First,
    #[default]
    Middle,
    Last,
    Single,
}

impl From<SegmentArg> for Segment {
    fn from(segment: SegmentArg) -> Self {
        match segment {
            SegmentArg::First => Segment::First,
            SegmentArg::Middle => Segment::Middle,
            SegmentArg::Last => Segment::Last,
            SegmentArg::Single => Segment::Single,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum DensityArg {
    #[default]
    Regular,
    Small,
    Medium,
    High,
}

impl From<DensityArg> for Density {
    fn from(density: DensityArg) -> Self {
        match density {
            DensityArg::Regular => Density::Regular,
            DensityArg::Small => Density::Small,
            DensityArg::Medium => Density::Medium,
            DensityArg::High => Density::High,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum InputModeArg {
    #[default]
    Flat,
    Outlined,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum CardModeArg {
    #[default]
    Elevated,
    Outlined,
    Contained,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum ImageArg {
    #[default]
    Image,
    Video,
    Flag,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum TextVariantArg {
    Caption,
    Headline,
    Paragraph,
    Subheading,
    Title,
}

impl From<TextVariantArg> for TextVariant {
    fn from(variant: TextVariantArg) -> Self {
        match variant {
            TextVariantArg::Caption => TextVariant::Caption,
            TextVariantArg::Headline => TextVariant::Headline,
            TextVariantArg::Paragraph => TextVariant::Paragraph,
            TextVariantArg::Subheading => TextVariant::Subheading,
            TextVariantArg::Title => TextVariant::Title,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Component {
    /// Surface color for a container at an elevation level
    Surface {
        #[arg(long, default_value_t = 0)]
        level: u8,
        #[arg(long)]
        elevated: bool,
        #[arg(long)]
        color: Option<String>,
    },

    /// App bar background, height and title font
    Appbar {
        #[arg(long, value_enum, default_value_t)]
        mode: AppbarModeArg,
        #[arg(long, default_value_t = 0)]
        level: u8,
        #[arg(long)]
        elevated: bool,
        #[arg(long)]
        color: Option<String>,
    },

    /// iOS-style checkbox
    Checkbox {
        #[arg(long, value_enum, default_value_t)]
        status: CheckboxStatusArg,
        #[arg(long)]
        disabled: bool,
        #[arg(long)]
        color: Option<String>,
    },

    /// iOS-style radio button
    Radio(ToggleArgs),

    /// Icon toggle button
    ToggleButton(ToggleArgs),

    /// One segment of a segmented control
    Segmented {
        #[arg(long)]
        checked: bool,
        #[arg(long)]
        disabled: bool,
        #[arg(long, value_enum, default_value_t)]
        segment: SegmentArg,
        #[arg(long, value_enum, default_value_t)]
        density: DensityArg,
        #[arg(long)]
        icon: bool,
        #[arg(long)]
        label: bool,
        #[arg(long)]
        show_selected_check: bool,
    },

    /// Flat or outlined text input
    TextInput {
        #[arg(long, value_enum, default_value_t)]
        mode: InputModeArg,
        #[arg(long)]
        disabled: bool,
        #[arg(long)]
        error: bool,
        #[arg(long)]
        dense: bool,
        #[arg(long)]
        label: bool,
    },

    /// List row
    ListItem {
        /// Rendered description line count
        #[arg(long, default_value_t = 0)]
        description_lines: usize,
    },

    /// List icon box
    ListIcon,

    /// List image
    ListImage {
        #[arg(long, value_enum, default_value_t)]
        variant: ImageArg,
    },

    /// Menu item
    Menu {
        #[arg(long)]
        disabled: bool,
        #[arg(long)]
        leading_icon: bool,
        #[arg(long)]
        trailing_icon: bool,
    },

    /// Drawer item
    DrawerItem {
        #[arg(long)]
        active: bool,
        #[arg(long)]
        icon: bool,
    },

    /// Collapsed drawer item (current schema only)
    DrawerCollapsed {
        #[arg(long)]
        active: bool,
        #[arg(long)]
        label: bool,
        /// Badge count; 0 draws a dot
        #[arg(long)]
        badge: Option<u32>,
    },

    /// Drawer section title and divider
    DrawerSection,

    /// Card colors
    Card {
        #[arg(long, value_enum, default_value_t)]
        mode: CardModeArg,
    },

    /// Card cover at a position among the card's children
    CardCover {
        #[arg(long)]
        index: Option<usize>,
        #[arg(long)]
        total: Option<usize>,
    },

    /// Legacy styled text
    Text {
        #[arg(value_enum)]
        variant: TextVariantArg,
    },

    /// Avatar image
    Avatar {
        #[arg(long)]
        size: Option<f32>,
        #[arg(long)]
        color: Option<String>,
    },
}

fn parse_color(input: Option<&str>) -> Result<Option<Color>> {
    input
        .map(|value| Color::parse(value).with_context(|| format!("Invalid color `{value}`")))
        .transpose()
}

fn level(level: u8) -> Result<ElevationLevel> {
    ElevationLevel::new(level).with_context(|| format!("Invalid elevation level {level}"))
}

fn to_value<T: Serialize>(style: &T) -> Result<Value> {
    serde_json::to_value(style).context("Failed to serialize style")
}

/// Resolve the selected component against `cx`
pub fn resolve(component: &Component, cx: &StyleContext<'_>) -> Result<Value> {
    tracing::debug!(?component, "resolving component style");
    match component {
        Component::Surface {
            level: lvl,
            elevated,
            color,
        } => {
            let custom = parse_color(color.as_deref())?;
            to_value(&resolve_surface_color(cx, level(*lvl)?, custom, *elevated)?)
        }
        Component::Appbar {
            mode,
            level: lvl,
            elevated,
            color,
        } => {
            let mut appbar = Appbar::new()
                .mode((*mode).into())
                .elevation(level(*lvl)?)
                .elevated(*elevated);
            if let Some(color) = parse_color(color.as_deref())? {
                appbar = appbar.background(color);
            }
            to_value(&appbar.resolve(cx)?)
        }
        Component::Checkbox {
            status,
            disabled,
            color,
        } => {
            let mut checkbox = Checkbox::new((*status).into()).disabled(*disabled);
            if let Some(color) = parse_color(color.as_deref())? {
                checkbox = checkbox.color(color);
            }
            to_value(&checkbox.resolve(cx)?)
        }
        Component::Radio(args) => to_value(&RadioButton::from(args.state()?).resolve(cx)?),
        Component::ToggleButton(args) => to_value(&ToggleButton::from(args.state()?).resolve(cx)?),
        Component::Segmented {
            checked,
            disabled,
            segment,
            density,
            icon,
            label,
            show_selected_check,
        } => {
            let button = SegmentedButton::new(*checked)
                .disabled(*disabled)
                .segment((*segment).into())
                .density((*density).into())
                .icon(*icon)
                .label(*label)
                .show_selected_check(*show_selected_check);
            to_value(&button.resolve(cx)?)
        }
        Component::TextInput {
            mode,
            disabled,
            error,
            dense,
            label,
        } => {
            let input = match mode {
                InputModeArg::Flat => TextInput::flat(),
                InputModeArg::Outlined => TextInput::outlined(),
            };
            let input = input
                .disabled(*disabled)
                .error(*error)
                .dense(*dense)
                .label(*label);
            to_value(&input.resolve(cx)?)
        }
        Component::ListItem { description_lines } => {
            to_value(&ListItem::new().description(*description_lines).resolve(cx)?)
        }
        Component::ListIcon => to_value(&ListIcon.resolve(cx)?),
        Component::ListImage { variant } => {
            let variant = match variant {
                ImageArg::Image => ListImageVariant::Image,
                ImageArg::Video => ListImageVariant::Video,
                ImageArg::Flag => ListImageVariant::Flag,
            };
            to_value(&ListImage::new(variant).resolve(cx)?)
        }
        Component::Menu {
            disabled,
            leading_icon,
            trailing_icon,
        } => {
            let item = MenuItem::new()
                .disabled(*disabled)
                .leading_icon(*leading_icon)
                .trailing_icon(*trailing_icon);
            to_value(&item.resolve(cx)?)
        }
        Component::DrawerItem { active, icon } => {
            to_value(&DrawerItem::new().active(*active).icon(*icon).resolve(cx)?)
        }
        Component::DrawerCollapsed {
            active,
            label,
            badge,
        } => {
            let mut item = DrawerCollapsedItem::new().active(*active).label(*label);
            match badge {
                Some(0) => item = item.badge(Badge::Dot),
                Some(count) => item = item.badge(Badge::Count(*count)),
                None => {}
            }
            to_value(&item.resolve(cx)?)
        }
        Component::DrawerSection => to_value(&DrawerSection.resolve(cx)?),
        Component::Card { mode } => {
            let mode = match mode {
                CardModeArg::Elevated => CardMode::Elevated,
                CardModeArg::Outlined => CardMode::Outlined,
                CardModeArg::Contained => CardMode::Contained,
            };
            to_value(&Card::new(mode).resolve(cx)?)
        }
        Component::CardCover { index, total } => {
            let cover = match (index, total) {
                (Some(index), Some(total)) => CardCover::new().position(*index, *total),
                (None, None) => CardCover::new(),
                _ => anyhow::bail!("--index and --total must be given together"),
            };
            to_value(&cover.resolve(cx)?)
        }
        Component::Text { variant } => to_value(&StyledText::new((*variant).into()).resolve(cx)?),
        Component::Avatar { size, color } => {
            let mut avatar = AvatarImage::new();
            if let Some(size) = size {
                avatar = avatar.size(*size);
            }
            if let Some(color) = parse_color(color.as_deref())? {
                avatar = avatar.background(color);
            }
            to_value(&avatar.resolve(cx)?)
        }
    }
}
