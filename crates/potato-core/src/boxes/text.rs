//! Text-bearing boxes.

use super::{BoxBase, BoxTrait};
use serde::{Deserialize, Serialize};

/// Rich text; rendered with markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    #[serde(flatten)]
    pub base: BoxBase,
    pub text: String,
}

impl TextBox {
    pub fn new(base: BoxBase, text: impl Into<String>) -> Self {
        Self {
            base,
            text: text.into(),
        }
    }
}

impl BoxTrait for TextBox {
    fn base(&self) -> &BoxBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BoxBase {
        &mut self.base
    }

    fn content(&self) -> &str {
        &self.text
    }
}

/// Text shown verbatim, without markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlainTextBox {
    #[serde(flatten)]
    pub base: BoxBase,
    pub text: String,
}

impl PlainTextBox {
    pub fn new(base: BoxBase, text: impl Into<String>) -> Self {
        Self {
            base,
            text: text.into(),
        }
    }
}

impl BoxTrait for PlainTextBox {
    fn base(&self) -> &BoxBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BoxBase {
        &mut self.base
    }

    fn content(&self) -> &str {
        &self.text
    }
}

/// The frame title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleBox {
    #[serde(flatten)]
    pub base: BoxBase,
    pub text: String,
}

impl TitleBox {
    pub fn new(base: BoxBase, text: impl Into<String>) -> Self {
        Self {
            base,
            text: text.into(),
        }
    }
}

impl BoxTrait for TitleBox {
    fn base(&self) -> &BoxBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BoxBase {
        &mut self.base
    }

    fn content(&self) -> &str {
        &self.text
    }
}

/// Source code, highlighted according to `style.language`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBox {
    #[serde(flatten)]
    pub base: BoxBase,
    pub code: String,
}

impl CodeBox {
    pub fn new(base: BoxBase, code: impl Into<String>) -> Self {
        Self {
            base,
            code: code.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.base.style.language
    }
}

impl BoxTrait for CodeBox {
    fn base(&self) -> &BoxBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BoxBase {
        &mut self.base
    }

    fn content(&self) -> &str {
        &self.code
    }
}
