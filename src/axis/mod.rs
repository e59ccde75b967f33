//! # Style axes
//!
//! A font request describes a style as a set of axis values.
//! The registered axes are `ital`, `opsz`, `slnt`, `wdth`, and `wght`; variable fonts may define additional custom axes such as `GRAD` or `XTRA`.
//!
//! The Google Fonts API expects a value for every axis listed for a family.
//! Therefore, every axis known to this crate has a default value which is used to fill in the axes a particular request does not mention.
//! Axes without a default can not be requested (see [`default_value`]).
//!
//! *Reference:*
//! [Google Fonts CSS API v2](https://developers.google.com/fonts/docs/css2),
//! [OpenType axis registry](https://docs.microsoft.com/en-us/typography/opentype/spec/dvaraxisreg).

pub mod types;

use crate::ctx::Context;
use lazy_static::lazy_static;
use std::collections::HashMap;
use types::{AxisTag, AxisValue};

/// The smallest weight accepted by [`weight`].
const MIN_WEIGHT: f64 = 1.0;
/// The largest weight accepted by [`weight`].
const MAX_WEIGHT: f64 = 1000.0;

lazy_static! {
    /// The default values of the axes known to the Google Fonts API.
    ///
    /// Registered axes use the defaults of the OpenType axis registry.
    /// The defaults of custom axes are those of the families which introduced them (e.g. Roboto Flex for the parametric axes).
    static ref AXIS_DEFAULTS: HashMap<&'static str, f64> = vec![
        // registered
        ("ital", 0.0),
        ("opsz", 14.0),
        ("slnt", 0.0),
        ("wdth", 100.0),
        ("wght", 400.0),
        // custom
        ("CASL", 0.0),
        ("CRSV", 0.5),
        ("FILL", 0.0),
        ("GRAD", 0.0),
        ("MONO", 0.0),
        ("SOFT", 0.0),
        ("WONK", 0.0),
        ("XOPQ", 96.0),
        ("XTRA", 468.0),
        ("YOPQ", 79.0),
        ("YTAS", 750.0),
        ("YTDE", -203.0),
        ("YTFI", 738.0),
        ("YTLC", 514.0),
        ("YTUC", 712.0),
    ]
    .into_iter()
    .collect();

    /// Weight names mapped to their numeric weights.
    ///
    /// Keys are normalized by [`normalize_weight_name`].
    static ref WEIGHT_NAMES: HashMap<&'static str, i32> = vec![
        ("thin", 100),
        ("hairline", 100),
        ("extralight", 200),
        ("ultralight", 200),
        ("light", 300),
        ("regular", 400),
        ("normal", 400),
        ("book", 400),
        ("medium", 500),
        ("semibold", 600),
        ("demibold", 600),
        ("bold", 700),
        ("extrabold", 800),
        ("ultrabold", 800),
        ("black", 900),
        ("heavy", 900),
    ]
    .into_iter()
    .collect();
}

/// Returns the default value of an axis, or `None` if the axis is unknown.
///
/// Defaults registered in [`Context::axis_defaults`] take precedence over the built-in table.
///
/// ```
/// # use gfont::axis::default_value;
/// # use gfont::axis::types::AxisTag;
/// # use gfont::ctx::Context;
/// let ctx = Context::default();
/// let wdth = AxisTag::new("wdth").unwrap();
/// assert_eq!(default_value(&wdth, &ctx).unwrap().to_string(), "100");
/// assert!(default_value(&AxisTag::new("ABCD").unwrap(), &ctx).is_none());
/// ```
pub fn default_value(tag: &AxisTag, ctx: &Context) -> Option<AxisValue> {
    if let Some(&value) = ctx.axis_defaults.get(tag) {
        return Some(value);
    }

    AXIS_DEFAULTS
        .get(tag.as_str())
        .and_then(|&x| AxisValue::new(x))
}

/// Returns the weight for a numeric weight or a weight name, or `None` if `text` is neither.
///
/// Numeric weights must lie in the range from `1` to `1000` (both inclusive), the range accepted by `font-weight`.
/// Weight names are matched ignoring case, spaces, hyphens and underscores, so `"Semi Bold"`, `"semi-bold"`, and `"semibold"` all resolve to `600`.
///
/// ```
/// # use gfont::axis::weight;
/// assert_eq!(weight("600").unwrap().to_string(), "600");
/// assert_eq!(weight("extra bold").unwrap().to_string(), "800");
/// assert!(weight("fat").is_none());
/// ```
pub fn weight(text: &str) -> Option<AxisValue> {
    if let Some(value) = AxisValue::parse(text) {
        let x = value.get();
        return if (MIN_WEIGHT..=MAX_WEIGHT).contains(&x) {
            Some(value)
        } else {
            None
        };
    }

    WEIGHT_NAMES
        .get(normalize_weight_name(text).as_str())
        .map(|&x| AxisValue::from(x))
}

/// Lowercases a weight name and strips spaces, hyphens, and underscores.
fn normalize_weight_name(name: &str) -> String {
    name.chars()
        .filter(|x| !matches!(x, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
