//! # CSS
//!
//! Conversion of a single font usage into CSS declarations.
//!
//! The declarations are returned twice: as CSS text for stylesheets and styled components, and as a style object for inline styles.
//! Both are produced from the same list of [`Declaration`]s and always describe the same properties and values.
//!
//! The conversion depends on the arguments of the usage only.
//! What else has been collected for the family does not affect the result.
//!
//! | Request              | Declaration                                 |
//! |----------------------|---------------------------------------------|
//! | `normal`, `ital:0`   | `font-style: normal`                        |
//! | `italic`, `ital:1`   | `font-style: italic`                        |
//! | `slnt:<v>`           | `font-style: oblique <-v>deg`               |
//! | weight, `wght:<v>`   | `font-weight: <v>`                          |
//! | `wdth:<v>`           | `font-stretch: <v>%`                        |
//! | any other axis       | `font-variation-settings: '<tag>' <v>, ...` |
//!
//! `font-style` and `font-weight` are always declared; they default to `normal` and `400`.
//! If several arguments determine the same property, the last one wins.
//!
//! # Example
//!
//! ```
//! # use gfont::css::{emit_css, StyleValue};
//! # use gfont::ctx::Context;
//! let ctx = Context::default();
//! let style = emit_css("Lato", "sans-serif", Some("bold"), &["italic"], &ctx).unwrap();
//! assert_eq!(
//!     style.css,
//!     "font-family: 'Lato', sans-serif; font-style: italic; font-weight: 700;"
//! );
//! assert_eq!(style.object.get("fontWeight"), Some(&StyleValue::Number(700.into())));
//! ```

use crate::axis::types::{AxisTag, AxisValue};
use crate::ctx::Context;
use crate::request::{Error, FontRequest};
use itertools::Itertools;
use std::fmt;

/// A CSS property set by [`emit`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Property {
    /// `font-family`
    FontFamily,
    /// `font-style`
    FontStyle,
    /// `font-weight`
    FontWeight,
    /// `font-stretch`
    FontStretch,
    /// `font-variation-settings`
    FontVariationSettings,
}

impl Property {
    /// The name of the property in CSS text.
    pub fn css_name(&self) -> &'static str {
        match self {
            Self::FontFamily => "font-family",
            Self::FontStyle => "font-style",
            Self::FontWeight => "font-weight",
            Self::FontStretch => "font-stretch",
            Self::FontVariationSettings => "font-variation-settings",
        }
    }

    /// The key of the property in a style object.
    pub fn object_key(&self) -> &'static str {
        match self {
            Self::FontFamily => "fontFamily",
            Self::FontStyle => "fontStyle",
            Self::FontWeight => "fontWeight",
            Self::FontStretch => "fontStretch",
            Self::FontVariationSettings => "fontVariationSettings",
        }
    }
}

/// The value of a declaration.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum StyleValue {
    /// A textual value such as `italic` or `'Lato', sans-serif`.
    Text(String),
    /// A plain number such as a weight.
    Number(AxisValue),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{}", number),
        }
    }
}

/// A single CSS declaration.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Declaration {
    /// The property.
    pub property: Property,
    /// The value.
    pub value: StyleValue,
}

/// Maps style-object keys (`fontFamily`, `fontWeight`, ...) to values in declaration order.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct StyleObject(Vec<(&'static str, StyleValue)>);

impl StyleObject {
    /// Returns the value of a key, or `None` if the key is not set.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// The keys and values in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StyleValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    /// The number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no key is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The styles of a font usage.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Style {
    /// The declarations as CSS text, e.g. `font-family: 'Lato', sans-serif; font-style: normal; font-weight: 400;`.
    pub css: String,
    /// The declarations as a style object.
    pub object: StyleObject,
}

impl Style {
    /// Creates the CSS text and the style object of a list of declarations.
    pub fn from_declarations(declarations: &[Declaration]) -> Self {
        let css = declarations
            .iter()
            .map(|x| format!("{}: {};", x.property.css_name(), x.value))
            .join(" ");
        let object = StyleObject(
            declarations
                .iter()
                .map(|x| (x.property.object_key(), x.value.clone()))
                .collect(),
        );

        Style { css, object }
    }
}

/// Parses the arguments of a font usage and returns its styles.
///
/// # Errors
///
/// Returns an error for malformed arguments if [`Context::policy`] is [`Policy::Strict`](crate::ctx::Policy::Strict).
pub fn emit_css(
    family: &str,
    fallback: &str,
    weight: Option<&str>,
    variations: &[&str],
    ctx: &Context,
) -> Result<Style, Error> {
    let request = FontRequest::parse(weight, variations, ctx)?;
    Ok(emit(family, fallback, &request))
}

/// Returns the styles of an already parsed font usage.
pub fn emit(family: &str, fallback: &str, request: &FontRequest) -> Style {
    Style::from_declarations(&declarations(family, fallback, request))
}

/// Returns the declarations of a font usage.
pub fn declarations(family: &str, fallback: &str, request: &FontRequest) -> Vec<Declaration> {
    let mut style = StyleValue::Text("normal".to_string());
    let mut weight = AxisValue::from(400);
    let mut stretch: Option<AxisValue> = None;
    let mut settings: Vec<(&AxisTag, AxisValue)> = Vec::new();

    for variation in &request.variations {
        let value = variation.value;

        match variation.tag.as_str() {
            "ital" => {
                let keyword = if value == AxisValue::from(0) {
                    "normal"
                } else {
                    "italic"
                };
                style = StyleValue::Text(keyword.to_string());
            }
            // positive `slnt` values lean to the left, positive oblique angles lean to the right
            "slnt" => style = StyleValue::Text(format!("oblique {}deg", value.negated())),
            "wght" => weight = value,
            "wdth" => stretch = Some(value),
            _ => {
                if let Some(setting) = settings.iter_mut().find(|(t, _)| *t == &variation.tag) {
                    setting.1 = value;
                } else {
                    settings.push((&variation.tag, value));
                }
            }
        }
    }

    let mut declarations = vec![
        Declaration {
            property: Property::FontFamily,
            value: StyleValue::Text(family_list(family, fallback)),
        },
        Declaration {
            property: Property::FontStyle,
            value: style,
        },
        Declaration {
            property: Property::FontWeight,
            value: StyleValue::Number(weight),
        },
    ];

    if let Some(stretch) = stretch {
        declarations.push(Declaration {
            property: Property::FontStretch,
            value: StyleValue::Text(format!("{}%", stretch)),
        });
    }

    if !settings.is_empty() {
        let value = settings
            .iter()
            .map(|(tag, value)| format!("'{}' {}", tag, value))
            .join(", ");
        declarations.push(Declaration {
            property: Property::FontVariationSettings,
            value: StyleValue::Text(value),
        });
    }

    declarations
}

/// Returns the value of `font-family`: the quoted family followed by the fallback.
fn family_list(family: &str, fallback: &str) -> String {
    let quoted = format!("'{}'", family.replace('\\', "\\\\").replace('\'', "\\'"));

    if fallback.is_empty() {
        quoted
    } else {
        format!("{}, {}", quoted, fallback)
    }
}
