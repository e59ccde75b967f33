//! # Collector
//!
//! The collector records which styles of which font families are in use.
//!
//! Font usage is registered one call site at a time.
//! The collector merges these registrations into one [`FontRecord`] per family, ignoring registrations that request a style already recorded.
//! The merged records are the input of [`url::build`](crate::url::build), which turns them into a single stylesheet URL.
//!
//! A collector is an ordinary value owned by its caller.
//! Pages rendered independently of each other (for example, concurrent server-side renders) should each use their own collector so that the fonts of one page do not leak into the stylesheet of another.
//!
//! # Example
//!
//! ```
//! # use gfont::collector::Collector;
//! # use gfont::ctx::Context;
//! let ctx = Context::default();
//! let mut collector = Collector::new();
//! assert_eq!(collector.register("Lato", Some("bold"), &["italic"], &ctx), Ok(true));
//! assert_eq!(collector.register("Lato", Some("700"), &["italic"], &ctx), Ok(false));
//! assert_eq!(
//!     collector.url(&ctx),
//!     "https://fonts.googleapis.com/css2?family=Lato:ital,wght@1,700&display=block"
//! );
//! ```

use crate::ctx::Context;
use crate::data::FontRecord;
use crate::request::{Error, FontRequest};
use crate::url;

/// The font families and styles requested so far.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Collector {
    /// The records in the order their families were first requested.
    records: Vec<FontRecord>,
}

impl Collector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Collector::default()
    }

    /// The records in the order their families were first requested.
    pub fn records(&self) -> &[FontRecord] {
        &self.records
    }

    /// Returns the record of a family, or `None` if the family has not been requested.
    pub fn get(&self, family: &str) -> Option<&FontRecord> {
        self.records.iter().find(|x| x.name == family)
    }

    /// Whether no family has been requested.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Parses and records a font usage.
    ///
    /// Returns whether the collector changed, i.e. whether the family, any of its axes, or the requested style is new.
    /// Registering the same usage twice returns `false` the second time.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed arguments if [`Context::policy`] is [`Policy::Strict`](crate::ctx::Policy::Strict).
    /// Nothing is recorded in that case.
    pub fn register(
        &mut self,
        family: &str,
        weight: Option<&str>,
        variations: &[&str],
        ctx: &Context,
    ) -> Result<bool, Error> {
        let request = FontRequest::parse(weight, variations, ctx)?;
        Ok(self.collect(family, &request))
    }

    /// Records an already parsed font usage.
    ///
    /// Returns whether the collector changed.
    pub fn collect(&mut self, family: &str, request: &FontRequest) -> bool {
        let mut changed = false;

        let position = match self.records.iter().position(|x| x.name == family) {
            Some(position) => position,
            None => {
                log::debug!("collect new family '{}'", family);
                self.records.push(FontRecord::new(family));
                changed = true;
                self.records.len() - 1
            }
        };

        let record = &mut self.records[position];

        for variation in &request.variations {
            if record.insert_tag(variation.tag.clone(), variation.default) {
                log::debug!("collect axis '{}' for '{}'", variation.tag, family);
                changed = true;
            }
        }

        let entry = request.axes();

        if record.insert_entry(entry) {
            log::debug!("collect style {:?} for '{}'", request.axes(), family);
            changed = true;
        }

        changed
    }

    /// Returns the stylesheet URL requesting every collected style.
    ///
    /// See [`url::build`].
    pub fn url(&self, ctx: &Context) -> String {
        url::build(self, ctx)
    }
}
