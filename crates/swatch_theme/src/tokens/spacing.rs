//! Spacing tokens for theming
//!
//! Values are logical; device adjustment happens in the scale resolver.

use serde::{Deserialize, Serialize};

/// Named spacing steps
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpacingToken {
    XxxxSmall,
    XxxSmall,
    XxSmall,
    XSmall,
    Small,
    Medium,
    XxMedium,
    Large,
    XLarge,
    XxLarge,
    XxxLarge,
    XxxxLarge,
}

impl SpacingToken {
    pub const ALL: [SpacingToken; 12] = [
        SpacingToken::XxxxSmall,
        SpacingToken::XxxSmall,
        SpacingToken::XxSmall,
        SpacingToken::XSmall,
        SpacingToken::Small,
        SpacingToken::Medium,
        SpacingToken::XxMedium,
        SpacingToken::Large,
        SpacingToken::XLarge,
        SpacingToken::XxLarge,
        SpacingToken::XxxLarge,
        SpacingToken::XxxxLarge,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SpacingToken::XxxxSmall => "xxxxSmall",
            SpacingToken::XxxSmall => "xxxSmall",
            SpacingToken::XxSmall => "xxSmall",
            SpacingToken::XSmall => "xSmall",
            SpacingToken::Small => "small",
            SpacingToken::Medium => "medium",
            SpacingToken::XxMedium => "xxMedium",
            SpacingToken::Large => "large",
            SpacingToken::XLarge => "xLarge",
            SpacingToken::XxLarge => "xxLarge",
            SpacingToken::XxxLarge => "xxxLarge",
            SpacingToken::XxxxLarge => "xxxxLarge",
        }
    }

    pub fn from_name(name: &str) -> Option<SpacingToken> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }
}

/// Spacing scale: a grid unit plus named steps
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingScale {
    /// Grid unit; `x(n)` is `unit * n`
    pub unit: f32,
    pub xxxx_small: f32,
    pub xxx_small: f32,
    pub xx_small: f32,
    pub x_small: f32,
    pub small: f32,
    pub medium: f32,
    pub xx_medium: f32,
    pub large: f32,
    pub x_large: f32,
    pub xx_large: f32,
    pub xxx_large: f32,
    pub xxxx_large: f32,
}

impl SpacingScale {
    /// Get spacing value by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::XxxxSmall => self.xxxx_small,
            SpacingToken::XxxSmall => self.xxx_small,
            SpacingToken::XxSmall => self.xx_small,
            SpacingToken::XSmall => self.x_small,
            SpacingToken::Small => self.small,
            SpacingToken::Medium => self.medium,
            SpacingToken::XxMedium => self.xx_medium,
            SpacingToken::Large => self.large,
            SpacingToken::XLarge => self.x_large,
            SpacingToken::XxLarge => self.xx_large,
            SpacingToken::XxxLarge => self.xxx_large,
            SpacingToken::XxxxLarge => self.xxxx_large,
        }
    }

    pub fn set(&mut self, token: SpacingToken, value: f32) {
        let slot = match token {
            SpacingToken::XxxxSmall => &mut self.xxxx_small,
            SpacingToken::XxxSmall => &mut self.xxx_small,
            SpacingToken::XxSmall => &mut self.xx_small,
            SpacingToken::XSmall => &mut self.x_small,
            SpacingToken::Small => &mut self.small,
            SpacingToken::Medium => &mut self.medium,
            SpacingToken::XxMedium => &mut self.xx_medium,
            SpacingToken::Large => &mut self.large,
            SpacingToken::XLarge => &mut self.x_large,
            SpacingToken::XxLarge => &mut self.xx_large,
            SpacingToken::XxxLarge => &mut self.xxx_large,
            SpacingToken::XxxxLarge => &mut self.xxxx_large,
        };
        *slot = value;
    }

    /// Grid step `n` (`x(4)` is 16 on the default scale)
    pub fn x(&self, n: u16) -> f32 {
        self.unit * n as f32
    }
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self {
            unit: 4.0,
            xxxx_small: 4.0,
            xxx_small: 8.0,
            xx_small: 12.0,
            x_small: 16.0,
            small: 20.0,
            medium: 24.0,
            xx_medium: 32.0,
            large: 40.0,
            x_large: 48.0,
            xx_large: 52.0,
            xxx_large: 56.0,
            xxxx_large: 64.0,
        }
    }
}
