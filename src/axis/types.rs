//! Types used to describe a single style axis.

use std::cmp;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The identifier of a style axis such as `wght`, `ital`, or `GRAD`.
///
/// A tag consists of one or more ASCII letters.
///
/// Tags are ordered the way the Google Fonts API expects axis lists: tags starting with a lowercase letter (the registered axes) precede tags starting with an uppercase letter (custom axes), and tags of the same class are ordered alphabetically.
///
/// ```
/// # use gfont::axis::types::AxisTag;
/// let mut tags = vec![
///     AxisTag::new("GRAD").unwrap(),
///     AxisTag::new("wght").unwrap(),
///     AxisTag::new("slnt").unwrap(),
/// ];
/// tags.sort();
/// assert_eq!(tags.iter().map(AxisTag::as_str).collect::<Vec<_>>(), ["slnt", "wght", "GRAD"]);
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct AxisTag(String);

impl AxisTag {
    /// Creates a tag, or returns `None` if `tag` is empty or contains anything other than ASCII letters.
    pub fn new(tag: &str) -> Option<AxisTag> {
        if !tag.is_empty() && tag.bytes().all(|x| x.is_ascii_alphabetic()) {
            Some(AxisTag(tag.to_string()))
        } else {
            None
        }
    }

    /// The tag of the italic axis.
    pub fn ital() -> AxisTag {
        AxisTag("ital".to_string())
    }

    /// The tag of the weight axis.
    pub fn wght() -> AxisTag {
        AxisTag("wght".to_string())
    }

    /// Returns the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the tag starts with an uppercase letter.
    ///
    /// By convention, such tags name custom axes while lowercase tags name registered axes.
    pub fn is_custom(&self) -> bool {
        self.0.bytes().next().map_or(false, |x| x.is_ascii_uppercase())
    }
}

impl cmp::PartialOrd for AxisTag {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl cmp::Ord for AxisTag {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.is_custom()
            .cmp(&other.is_custom())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl fmt::Display for AxisTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The numeric value of an axis.
///
/// Values are always finite and negative zero is stored as zero, which makes equality, hashing and ordering total.
/// The `Display` formatting writes the shortest representation that round-trips, so `130.0` is written as `130` and `22.2` as `22.2`.
#[derive(Debug, Clone, Copy)]
pub struct AxisValue(f64);

impl AxisValue {
    /// Creates a value, or returns `None` if `value` is not finite.
    pub fn new(value: f64) -> Option<AxisValue> {
        if value.is_finite() {
            // `-0.0 + 0.0` is `0.0`
            Some(AxisValue(value + 0.0))
        } else {
            None
        }
    }

    /// Parses a signed decimal number such as `-5`, `22.2`, `+100`, or `.5`.
    ///
    /// Exponents, `inf`, `NaN`, and surrounding whitespace are rejected.
    ///
    /// ```
    /// # use gfont::axis::types::AxisValue;
    /// assert_eq!(AxisValue::parse("130.0").unwrap().to_string(), "130");
    /// assert_eq!(AxisValue::parse("-5").unwrap().to_string(), "-5");
    /// assert!(AxisValue::parse("1e3").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<AxisValue> {
        let digits = text
            .strip_prefix('-')
            .or_else(|| text.strip_prefix('+'))
            .unwrap_or(text);

        let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));
        let is_digits = |x: &str| x.bytes().all(|b| b.is_ascii_digit());

        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        if !is_digits(integer) || !is_digits(fraction) {
            return None;
        }

        let value = text.strip_prefix('+').unwrap_or(text).parse::<f64>().ok()?;
        AxisValue::new(value)
    }

    /// Returns the value as a float.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns the value with its sign inverted.
    pub fn negated(self) -> AxisValue {
        AxisValue(-self.0 + 0.0)
    }
}

impl From<i32> for AxisValue {
    fn from(value: i32) -> Self {
        AxisValue(f64::from(value))
    }
}

impl PartialEq for AxisValue {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for AxisValue {}

impl Hash for AxisValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl cmp::PartialOrd for AxisValue {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl cmp::Ord for AxisValue {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for AxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
