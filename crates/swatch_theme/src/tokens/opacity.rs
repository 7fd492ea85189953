//! State-layer opacity tokens

/// Semantic opacity token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum OpacityToken {
    Level1,
    Level2,
    Level3,
    Level4,
}

/// Complete set of opacity tokens
#[derive(Clone, Debug, PartialEq)]
pub struct OpacityTokens {
    pub level1: f32,
    pub level2: f32,
    pub level3: f32,
    pub level4: f32,
}

impl OpacityTokens {
    /// Get opacity value by token key
    pub fn get(&self, token: OpacityToken) -> f32 {
        match token {
            OpacityToken::Level1 => self.level1,
            OpacityToken::Level2 => self.level2,
            OpacityToken::Level3 => self.level3,
            OpacityToken::Level4 => self.level4,
        }
    }
}

impl Default for OpacityTokens {
    fn default() -> Self {
        Self {
            level1: 0.08,
            level2: 0.12,
            level3: 0.16,
            level4: 0.38,
        }
    }
}
