//! Parsing of the style arguments of a single font usage.
//!
//! A font usage names a weight and a list of variation tokens.
//! The weight is a number (`"600"`) or a weight name (`"semi-bold"`).
//! A variation token is one of:
//!
//! - `normal`: the upright style, equivalent to `ital:0`,
//! - `italic`: the italic style, equivalent to `ital:1`,
//! - `<tag>:<value>`: an axis value, e.g. `wdth:75`, `slnt:-10`, or `GRAD:100`.
//!
//! The tag of a `<tag>:<value>` token consists of ASCII letters and must name an axis with a known default value (see [`axis::default_value`]).
//! The value is a signed decimal number.
//!
//! Malformed input is handled according to [`Context::policy`].
//!
//! # Example
//!
//! ```
//! # use gfont::ctx::Context;
//! # use gfont::request::FontRequest;
//! let ctx = Context::default();
//! let request = FontRequest::parse(Some("bold"), &["italic", "wdth:75"], &ctx).unwrap();
//! assert_eq!(request.variations.len(), 3);
//! ```

use crate::axis;
use crate::axis::types::{AxisTag, AxisValue};
use crate::ctx::{Context, Policy};
use crate::data::Axes;
use std::fmt;

/// The upright style token.
const NORMAL_TOKEN: &str = "normal";
/// The italic style token.
const ITALIC_TOKEN: &str = "italic";

/// The validated style arguments of a single font usage.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct FontRequest {
    /// The requested axis values in the order they were given.
    ///
    /// A weight argument is stored as a leading `wght` variation.
    pub variations: Vec<Variation>,
}

/// A single requested axis value.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Variation {
    /// The axis.
    pub tag: AxisTag,
    /// The requested value.
    pub value: AxisValue,
    /// The default value of the axis.
    pub default: AxisValue,
}

/// An error that may occur when parsing the style arguments of a font usage.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Error {
    /// The variation token is neither `normal`, `italic`, nor `<tag>:<value>`.
    InvalidToken(String),
    /// The axis has no known default value.
    UnknownAxis(String),
    /// The weight is neither a number from 1 to 1000 nor a weight name.
    InvalidWeight(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken(token) => write!(f, "The variation token {:?} is invalid.", token),
            Self::UnknownAxis(tag) => write!(f, "The axis {:?} has no known default value.", tag),
            Self::InvalidWeight(weight) => write!(f, "The weight {:?} is invalid.", weight),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl FontRequest {
    /// Parses a weight and a list of variation tokens.
    ///
    /// # Errors
    ///
    /// With [`Policy::Strict`], the first malformed argument is returned as an error.
    /// With [`Policy::Lenient`], malformed arguments are logged and skipped; this function then never returns an error.
    pub fn parse(
        weight: Option<&str>,
        variations: &[&str],
        ctx: &Context,
    ) -> Result<FontRequest, Error> {
        let mut request = FontRequest::default();

        if let Some(weight) = weight {
            match parse_weight(weight, ctx) {
                Ok(variation) => request.variations.push(variation),
                Err(error) => reject(error, ctx)?,
            }
        }

        for token in variations {
            match parse_token(token, ctx) {
                Ok(variation) => request.variations.push(variation),
                Err(error) => reject(error, ctx)?,
            }
        }

        Ok(request)
    }

    /// Returns the requested axis values.
    ///
    /// If an axis is requested more than once, the last value wins.
    pub fn axes(&self) -> Axes {
        self.variations
            .iter()
            .map(|x| (x.tag.clone(), x.value))
            .collect()
    }
}

/// Parses a weight argument into a `wght` variation.
fn parse_weight(weight: &str, ctx: &Context) -> Result<Variation, Error> {
    let value = axis::weight(weight).ok_or_else(|| Error::InvalidWeight(weight.to_string()))?;
    let tag = AxisTag::wght();
    let default = axis::default_value(&tag, ctx).unwrap_or_else(|| AxisValue::from(400));

    Ok(Variation {
        tag,
        value,
        default,
    })
}

/// Parses a single variation token.
///
/// ```ignore
/// let variation = parse_token("slnt:-5", &ctx)?;
/// assert_eq!(variation.tag.as_str(), "slnt");
/// ```
pub fn parse_token(token: &str, ctx: &Context) -> Result<Variation, Error> {
    let invalid = || Error::InvalidToken(token.to_string());

    let (tag, value) = match token {
        NORMAL_TOKEN => (AxisTag::ital(), AxisValue::from(0)),
        ITALIC_TOKEN => (AxisTag::ital(), AxisValue::from(1)),
        _ => {
            let (tag, value) = token.split_once(':').ok_or_else(invalid)?;
            let tag = AxisTag::new(tag).ok_or_else(invalid)?;
            let value = AxisValue::parse(value).ok_or_else(invalid)?;
            (tag, value)
        }
    };

    let default =
        axis::default_value(&tag, ctx).ok_or_else(|| Error::UnknownAxis(tag.to_string()))?;

    Ok(Variation {
        tag,
        value,
        default,
    })
}

/// Applies the policy of `ctx` to a malformed argument.
fn reject(error: Error, ctx: &Context) -> Result<(), Error> {
    match ctx.policy {
        Policy::Lenient => {
            log::warn!("ignoring font argument: {}", error);
            Ok(())
        }
        Policy::Strict => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> Context {
        Context::new(Policy::Strict)
    }

    fn described(request: &FontRequest) -> Vec<String> {
        request
            .variations
            .iter()
            .map(|x| format!("{}={}", x.tag, x.value))
            .collect()
    }

    #[test]
    fn test_parse_style_keywords() {
        let ctx = strict();
        assert_eq!(parse_token("normal", &ctx).unwrap().value, AxisValue::from(0));
        assert_eq!(parse_token("italic", &ctx).unwrap().value, AxisValue::from(1));
        assert_eq!(parse_token("italic", &ctx).unwrap().tag, AxisTag::ital());
    }

    #[test]
    fn test_parse_axis_tokens() {
        let ctx = strict();
        let variation = parse_token("slnt:-5", &ctx).unwrap();
        assert_eq!(variation.tag.as_str(), "slnt");
        assert_eq!(variation.value, AxisValue::from(-5));
        assert_eq!(variation.default, AxisValue::from(0));

        let variation = parse_token("opsz:22.2", &ctx).unwrap();
        assert_eq!(variation.value, AxisValue::new(22.2).unwrap());
        assert_eq!(variation.default, AxisValue::from(14));
    }

    #[test]
    fn test_parse_invalid_tokens() {
        let ctx = strict();
        for token in &["", "bold", "Italic", "wght", "wght:", ":400", "wght:abc", "wg1t:400", "wght=400", "wght:4:0"] {
            assert_eq!(
                parse_token(token, &ctx),
                Err(Error::InvalidToken(token.to_string())),
                "{:?}",
                token
            );
        }
    }

    #[test]
    fn test_parse_unknown_axis() {
        let ctx = strict();
        assert_eq!(
            parse_token("QWER:1", &ctx),
            Err(Error::UnknownAxis("QWER".to_string()))
        );
    }

    #[test]
    fn test_parse_weight_first() {
        let ctx = strict();
        let request = FontRequest::parse(Some("medium"), &["GRAD:100", "italic"], &ctx).unwrap();
        assert_eq!(described(&request), ["wght=500", "GRAD=100", "ital=1"]);
    }

    #[test]
    fn test_strict_policy_fails_on_first_error() {
        let ctx = strict();
        assert_eq!(
            FontRequest::parse(Some("fat"), &["italic"], &ctx),
            Err(Error::InvalidWeight("fat".to_string()))
        );
        assert_eq!(
            FontRequest::parse(None, &["italic", "slnt=-5", "QWER:1"], &ctx),
            Err(Error::InvalidToken("slnt=-5".to_string()))
        );
    }

    #[test]
    fn test_lenient_policy_skips_errors() {
        let ctx = Context::default();
        let request =
            FontRequest::parse(Some("fat"), &["italic", "slnt=-5", "QWER:1", "wdth:75"], &ctx)
                .unwrap();
        assert_eq!(described(&request), ["ital=1", "wdth=75"]);
    }

    #[test]
    fn test_axes_last_value_wins() {
        let ctx = strict();
        let request = FontRequest::parse(Some("400"), &["italic", "wght:700", "normal"], &ctx).unwrap();
        let axes = request.axes();
        assert_eq!(axes.len(), 2);
        assert_eq!(axes[&AxisTag::wght()], AxisValue::from(700));
        assert_eq!(axes[&AxisTag::ital()], AxisValue::from(0));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::UnknownAxis("QWER".to_string()).to_string(),
            "The axis \"QWER\" has no known default value."
        );
    }
}
