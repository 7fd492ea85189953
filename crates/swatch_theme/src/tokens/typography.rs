//! Typography tokens for theming

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Font weights
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
}

impl FontWeight {
    /// Numeric weight value
    pub fn value(&self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
        }
    }
}

/// Font role keys: the current type scale plus the legacy families
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FontRole {
    DisplayLarge,
    DisplayMedium,
    DisplaySmall,
    HeadlineLarge,
    HeadlineMedium,
    HeadlineSmall,
    TitleLarge,
    TitleMedium,
    TitleSmall,
    LabelLarge,
    LabelMedium,
    LabelSmall,
    BodyLarge,
    BodyMedium,
    BodySmall,

    // Legacy families
    Regular,
    Medium,
    Light,
    Thin,
}

impl FontRole {
    pub const TYPE_SCALE: [FontRole; 15] = [
        FontRole::DisplayLarge,
        FontRole::DisplayMedium,
        FontRole::DisplaySmall,
        FontRole::HeadlineLarge,
        FontRole::HeadlineMedium,
        FontRole::HeadlineSmall,
        FontRole::TitleLarge,
        FontRole::TitleMedium,
        FontRole::TitleSmall,
        FontRole::LabelLarge,
        FontRole::LabelMedium,
        FontRole::LabelSmall,
        FontRole::BodyLarge,
        FontRole::BodyMedium,
        FontRole::BodySmall,
    ];

    pub const LEGACY: [FontRole; 4] = [
        FontRole::Regular,
        FontRole::Medium,
        FontRole::Light,
        FontRole::Thin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FontRole::DisplayLarge => "displayLarge",
            FontRole::DisplayMedium => "displayMedium",
            FontRole::DisplaySmall => "displaySmall",
            FontRole::HeadlineLarge => "headlineLarge",
            FontRole::HeadlineMedium => "headlineMedium",
            FontRole::HeadlineSmall => "headlineSmall",
            FontRole::TitleLarge => "titleLarge",
            FontRole::TitleMedium => "titleMedium",
            FontRole::TitleSmall => "titleSmall",
            FontRole::LabelLarge => "labelLarge",
            FontRole::LabelMedium => "labelMedium",
            FontRole::LabelSmall => "labelSmall",
            FontRole::BodyLarge => "bodyLarge",
            FontRole::BodyMedium => "bodyMedium",
            FontRole::BodySmall => "bodySmall",
            FontRole::Regular => "regular",
            FontRole::Medium => "medium",
            FontRole::Light => "light",
            FontRole::Thin => "thin",
        }
    }
}

/// A concrete font: family, weight and metrics (logical units)
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontDescriptor {
    pub family: String,
    pub weight: FontWeight,
    pub size: f32,
    pub line_height: f32,
    pub letter_spacing: f32,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, weight: FontWeight, size: f32, line_height: f32) -> Self {
        Self {
            family: family.into(),
            weight,
            size,
            line_height,
            letter_spacing: 0.0,
        }
    }

    pub fn letter_spacing(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }
}

/// Role → font table of a theme
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontRoles {
    roles: FxHashMap<FontRole, FontDescriptor>,
}

impl FontRoles {
    pub fn get(&self, role: FontRole) -> Option<&FontDescriptor> {
        self.roles.get(&role)
    }

    pub fn contains(&self, role: FontRole) -> bool {
        self.roles.contains_key(&role)
    }

    pub fn set(&mut self, role: FontRole, font: FontDescriptor) {
        self.roles.insert(role, font);
    }

    pub fn with(mut self, role: FontRole, font: FontDescriptor) -> Self {
        self.set(role, font);
        self
    }

    /// Type scale used by the current schema
    pub fn type_scale() -> Self {
        const REGULAR: &str = "sans-serif";
        const MEDIUM: &str = "sans-serif-medium";
        use FontWeight::{Medium, Regular};

        let entry = |role, family, weight, size, line_height, tracking| {
            (
                role,
                FontDescriptor::new(family, weight, size, line_height).letter_spacing(tracking),
            )
        };

        Self {
            roles: [
                entry(FontRole::DisplayLarge, REGULAR, Regular, 57.0, 64.0, 0.0),
                entry(FontRole::DisplayMedium, REGULAR, Regular, 45.0, 52.0, 0.0),
                entry(FontRole::DisplaySmall, REGULAR, Regular, 36.0, 44.0, 0.0),
                entry(FontRole::HeadlineLarge, REGULAR, Regular, 32.0, 40.0, 0.0),
                entry(FontRole::HeadlineMedium, REGULAR, Regular, 28.0, 36.0, 0.0),
                entry(FontRole::HeadlineSmall, REGULAR, Regular, 24.0, 32.0, 0.0),
                entry(FontRole::TitleLarge, REGULAR, Regular, 22.0, 28.0, 0.0),
                entry(FontRole::TitleMedium, MEDIUM, Medium, 16.0, 24.0, 0.15),
                entry(FontRole::TitleSmall, MEDIUM, Medium, 14.0, 20.0, 0.1),
                entry(FontRole::LabelLarge, MEDIUM, Medium, 14.0, 20.0, 0.1),
                entry(FontRole::LabelMedium, MEDIUM, Medium, 12.0, 16.0, 0.5),
                entry(FontRole::LabelSmall, MEDIUM, Medium, 11.0, 16.0, 0.5),
                entry(FontRole::BodyLarge, REGULAR, Regular, 16.0, 24.0, 0.15),
                entry(FontRole::BodyMedium, REGULAR, Regular, 14.0, 20.0, 0.25),
                entry(FontRole::BodySmall, REGULAR, Regular, 12.0, 16.0, 0.4),
            ]
            .into_iter()
            .collect(),
        }
    }

    /// Font families used by the legacy schema
    pub fn legacy() -> Self {
        Self::default()
            .with(
                FontRole::Regular,
                FontDescriptor::new("sans-serif", FontWeight::Regular, 14.0, 20.0),
            )
            .with(
                FontRole::Medium,
                FontDescriptor::new("sans-serif-medium", FontWeight::Medium, 14.0, 20.0),
            )
            .with(
                FontRole::Light,
                FontDescriptor::new("sans-serif-light", FontWeight::Light, 14.0, 20.0),
            )
            .with(
                FontRole::Thin,
                FontDescriptor::new("sans-serif-thin", FontWeight::Thin, 14.0, 20.0),
            )
    }
}
