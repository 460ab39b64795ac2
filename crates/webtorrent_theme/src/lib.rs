//! Style constants for the torrent viewer UI.
//!
//! Each [`StyleBlock`] is an ordered list of CSS declarations. Blocks render either as an
//! inline `style` attribute value or as a camelCase JSON object for script-side consumers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// CSS properties used by the torrent viewer theme.
pub enum CssProperty {
    /// `align-items`
    AlignItems,
    /// `justify-content`
    JustifyContent,
    /// `font-size`
    FontSize,
    /// `display`
    Display,
    /// `height`
    Height,
    /// `grid-template-columns`
    GridTemplateColumns,
    /// `grid-template-rows`
    GridTemplateRows,
    /// `grid-gap`
    GridGap,
}

impl CssProperty {
    /// Returns the CSS property name.
    pub const fn token(self) -> &'static str {
        match self {
            Self::AlignItems => "align-items",
            Self::JustifyContent => "justify-content",
            Self::FontSize => "font-size",
            Self::Display => "display",
            Self::Height => "height",
            Self::GridTemplateColumns => "grid-template-columns",
            Self::GridTemplateRows => "grid-template-rows",
            Self::GridGap => "grid-gap",
        }
    }

    /// Returns the DOM style-object key for the property.
    pub const fn js_name(self) -> &'static str {
        match self {
            Self::AlignItems => "alignItems",
            Self::JustifyContent => "justifyContent",
            Self::FontSize => "fontSize",
            Self::Display => "display",
            Self::Height => "height",
            Self::GridTemplateColumns => "gridTemplateColumns",
            Self::GridTemplateRows => "gridTemplateRows",
            Self::GridGap => "gridGap",
        }
    }
}

/// An ordered set of CSS declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleBlock(pub &'static [(CssProperty, &'static str)]);

impl StyleBlock {
    /// Returns the declared value for `property`, if any.
    pub fn get(&self, property: CssProperty) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(declared, _)| *declared == property)
            .map(|(_, value)| *value)
    }

    /// Renders the block as an inline `style` attribute value.
    pub fn to_inline_style(&self) -> String {
        self.0
            .iter()
            .map(|(property, value)| format!("{}: {value};", property.token()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Renders the block as a camelCase style object.
    pub fn to_json(&self) -> Value {
        let object: Map<String, Value> = self
            .0
            .iter()
            .map(|(property, value)| (property.js_name().to_string(), Value::from(*value)))
            .collect();
        Value::Object(object)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named style blocks of the torrent viewer.
pub struct Theme {
    /// Left header column: vertically centered, packed to the start.
    pub header_column_left: StyleBlock,
    /// Right header column: vertically centered, packed to the end.
    pub header_column_right: StyleBlock,
    /// Body text of the privacy notice.
    pub privacy_notice_body: StyleBlock,
    /// Two-column button grid.
    pub button_container: StyleBlock,
}

/// The torrent viewer theme.
pub const THEME: Theme = Theme {
    header_column_left: StyleBlock(&[
        (CssProperty::AlignItems, "center"),
        (CssProperty::JustifyContent, "flex-start"),
    ]),
    header_column_right: StyleBlock(&[
        (CssProperty::AlignItems, "center"),
        (CssProperty::JustifyContent, "flex-end"),
    ]),
    privacy_notice_body: StyleBlock(&[(CssProperty::FontSize, "12px")]),
    button_container: StyleBlock(&[
        (CssProperty::Display, "grid"),
        (CssProperty::Height, "100%"),
        (CssProperty::GridTemplateColumns, "1fr 1fr"),
        (CssProperty::GridTemplateRows, "1fr"),
        (CssProperty::GridGap, "15px"),
    ]),
};

impl Theme {
    /// Returns every block keyed by its style-object name.
    pub fn blocks(&self) -> [(&'static str, StyleBlock); 4] {
        [
            ("headerColumnLeft", self.header_column_left),
            ("headerColumnRight", self.header_column_right),
            ("privacyNoticeBody", self.privacy_notice_body),
            ("buttonContainer", self.button_container),
        ]
    }

    /// Renders the whole theme as a nested camelCase style object.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.blocks()
                .into_iter()
                .map(|(name, block)| (name.to_string(), block.to_json()))
                .collect(),
        )
    }
}
