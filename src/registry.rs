//! The entry point for rendering code.

use crate::collector::Collector;
use crate::css::{self, Style};
use crate::ctx::Context;
use crate::request::{Error, FontRequest};
use crate::url;
use crate::util::html::escape_attribute;
use std::fmt;

/// Collects the fonts used by a page and returns their CSS.
///
/// A `GFont` combines a [`Collector`] with the [`css`] conversion:
/// every call to [`font`](Self::font) records the usage and returns matching CSS.
/// [`url`](Self::url) returns the stylesheet URL loading every font used so far.
///
/// Create one `GFont` per independently rendered page.
///
/// # Example
///
/// ```
/// # use gfont::GFont;
/// # use gfont::ctx::Context;
/// let mut g = GFont::new(Context::default());
///
/// let heading = g.font("Playfair Display", "serif", Some("bold"), &["italic"]).unwrap();
/// let body = g.font("Lato", "sans-serif", None, &[]).unwrap();
///
/// assert_eq!(
///     heading.css,
///     "font-family: 'Playfair Display', serif; font-style: italic; font-weight: 700;"
/// );
/// assert_eq!(
///     g.url(),
///     "https://fonts.googleapis.com/css2?family=Playfair+Display:ital,wght@1,700&family=Lato&display=block"
/// );
/// ```
pub struct GFont {
    ctx: Context,
    collector: Collector,
    listener: Option<Box<dyn FnMut(&str)>>,
}

impl GFont {
    /// Creates a `GFont` without any collected fonts.
    pub fn new(ctx: Context) -> Self {
        GFont {
            ctx,
            collector: Collector::new(),
            listener: None,
        }
    }

    /// The context.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// The fonts collected so far.
    pub fn collector(&self) -> &Collector {
        &self.collector
    }

    /// Sets the function called with the new stylesheet URL whenever a call to [`font`](Self::font) collects something new.
    ///
    /// The listener typically schedules a [`Refresh`](crate::refresh::Refresh) of the `<link>` element in a live document.
    /// Server-side rendering does not need a listener; it embeds [`link_tag`](Self::link_tag) once rendering is complete.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&str) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Records a font usage and returns its CSS.
    ///
    /// `weight` is a number (`"600"`) or a weight name (`"semi-bold"`); variations are `normal`, `italic`, or `<tag>:<value>` tokens.
    /// See [`request`](crate::request) for details.
    ///
    /// Nothing is recorded if [`Context::collect`] is `false`.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed arguments if [`Context::policy`] is [`Policy::Strict`](crate::ctx::Policy::Strict).
    pub fn font(
        &mut self,
        family: &str,
        fallback: &str,
        weight: Option<&str>,
        variations: &[&str],
    ) -> Result<Style, Error> {
        let request = FontRequest::parse(weight, variations, &self.ctx)?;

        if self.ctx.collect && self.collector.collect(family, &request) {
            let href = self.url();

            if let Some(listener) = self.listener.as_mut() {
                listener(&href);
            }
        }

        Ok(css::emit(family, fallback, &request))
    }

    /// Returns the stylesheet URL loading every font collected so far.
    pub fn url(&self) -> String {
        url::build(&self.collector, &self.ctx)
    }

    /// Returns a `<link>` element loading the stylesheet, for embedding into server-rendered markup.
    ///
    /// ```
    /// # use gfont::GFont;
    /// # use gfont::ctx::Context;
    /// let mut g = GFont::new(Context::default());
    /// g.font("Lato", "sans-serif", None, &[]).unwrap();
    /// assert_eq!(
    ///     g.link_tag(),
    ///     "<link id=\"gfont-stylesheet\" rel=\"stylesheet\" type=\"text/css\" \
    ///      href=\"https://fonts.googleapis.com/css2?family=Lato&amp;display=block\">"
    /// );
    /// ```
    pub fn link_tag(&self) -> String {
        format!(
            "<link id=\"{}\" rel=\"stylesheet\" type=\"text/css\" href=\"{}\">",
            escape_attribute(&self.ctx.link_id),
            escape_attribute(&self.url())
        )
    }
}

impl Default for GFont {
    fn default() -> Self {
        GFont::new(Context::default())
    }
}

impl fmt::Debug for GFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GFont")
            .field("ctx", &self.ctx)
            .field("collector", &self.collector)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
