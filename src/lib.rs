//! # gfont
//!
//! *gfont* collects the fonts a web page uses and synthesizes the [Google Fonts](https://fonts.google.com) stylesheet URL that loads exactly these fonts.
//!
//! Rendering code declares a font where it is used, naming the family, a fallback, a weight, and variation tokens such as `italic` or `wdth:75`.
//! In return, it receives the matching CSS declarations.
//! Meanwhile, every declared style is collected and merged into a single stylesheet URL, so the page never lists its fonts in a central place.
//!
//! ```
//! # use gfont::GFont;
//! # use gfont::ctx::Context;
//! let mut g = GFont::new(Context::default());
//!
//! let caps = g.font("Roboto Flex", "sans-serif", Some("600"), &["slnt:-5"]).unwrap();
//! assert_eq!(
//!     caps.css,
//!     "font-family: 'Roboto Flex', sans-serif; font-style: oblique 5deg; font-weight: 600;"
//! );
//!
//! g.font("Roboto Flex", "sans-serif", Some("medium"), &["GRAD:100"]).unwrap();
//! assert_eq!(
//!     g.url(),
//!     "https://fonts.googleapis.com/css2?family=Roboto+Flex:slnt,wght,GRAD@-5,600,0;0,500,100&display=block"
//! );
//! ```
//!
//! ## Components
//!
//! - The [collector](crate::collector) merges font usages into one record per family.
//! - The [URL synthesis](crate::url) serializes the collected records for the Google Fonts CSS2 API.
//! - The [CSS conversion](crate::css) turns a single font usage into CSS text and a style object.
//! - The [refresh scheduling](crate::refresh) coalesces updates of a live `<link>` element.
//!
//! Inserting the `<link>` element into a document is left to the caller.

#![deny(missing_docs, missing_debug_implementations)]

pub mod axis;
pub mod collector;
pub mod css;
pub mod ctx;
pub mod data;
pub mod refresh;
mod registry;
pub mod request;
pub mod url;
mod util;

pub use registry::GFont;
