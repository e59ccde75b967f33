//! The context with which fonts are collected and stylesheet URLs are built.

use crate::axis::types::{AxisTag, AxisValue};
use std::collections::BTreeMap;

/// The default base of the stylesheet URL.
pub const DEFAULT_BASE_URL: &str = "https://fonts.googleapis.com/css2?";
/// The default value of the `display` parameter.
pub const DEFAULT_DISPLAY: &str = "block";
/// The default `id` of the stylesheet `<link>` element.
pub const DEFAULT_LINK_ID: &str = "gfont-stylesheet";
/// The default delay in milliseconds before the first attempt to refresh the stylesheet link.
pub const DEFAULT_REFRESH_DELAY_MS: u64 = 8;

/// A context defines customization options.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Context {
    /// How malformed variation tokens, unknown axes, and invalid weights are handled.
    pub policy: Policy,
    /// Whether font usage is collected.
    ///
    /// If `false`, only CSS is produced and the stylesheet URL never lists any family.
    /// This is useful for components which are rendered where no stylesheet is ever requested.
    pub collect: bool,
    /// The base of the stylesheet URL, including the trailing `?`.
    pub base_url: String,
    /// The value of the `display` parameter appended to every stylesheet URL.
    ///
    /// The Google Fonts API accepts `auto`, `block`, `swap`, `fallback`, and `optional`.
    pub display: String,
    /// Whether a family requested only in its default style is listed without axes.
    ///
    /// `family=Lato` and `family=Lato:ital,wght@0,400` request the same font; the former is shorter.
    pub elide_defaults: bool,
    /// Default values of additional axes.
    ///
    /// Entries take precedence over the built-in defaults of [`axis::default_value`](crate::axis::default_value).
    pub axis_defaults: BTreeMap<AxisTag, AxisValue>,
    /// The `id` attribute of the stylesheet `<link>` element.
    pub link_id: String,
    /// The delay in milliseconds before the first attempt of a [`Refresh`](crate::refresh::Refresh).
    pub refresh_delay_ms: u64,
    /// The number of attempts after which a [`Refresh`](crate::refresh::Refresh) gives up waiting for the `<link>` element.
    ///
    /// `None` retries indefinitely.
    pub refresh_max_attempts: Option<u32>,
}

impl Context {
    /// Creates a context using the given policy and default values for all other options.
    pub fn new(policy: Policy) -> Self {
        Context {
            policy,
            collect: true,
            base_url: DEFAULT_BASE_URL.to_string(),
            display: DEFAULT_DISPLAY.to_string(),
            elide_defaults: true,
            axis_defaults: BTreeMap::new(),
            link_id: DEFAULT_LINK_ID.to_string(),
            refresh_delay_ms: DEFAULT_REFRESH_DELAY_MS,
            refresh_max_attempts: None,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new(Policy::Lenient)
    }
}

/// The handling of malformed input.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Policy {
    /// Malformed input is logged as a warning and skipped.
    ///
    /// The remaining input of a call is processed as usual.
    /// A font which is misconfigured in some detail still renders in its other styles.
    Lenient,
    /// Malformed input is reported as an error and nothing of the call is collected.
    ///
    /// This policy is useful in tests and during development, where a misconfigured font should fail loudly.
    Strict,
}

impl Policy {
    /// Returns the policy for the given name, or `None` if the name is invalid.
    pub fn from_name(name: &str) -> Option<Policy> {
        match name {
            "lenient" => Some(Policy::Lenient),
            "strict" => Some(Policy::Strict),
            _ => None,
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        Policy::Lenient
    }
}
