//! # Stylesheet URL
//!
//! Serialization of a [`Collector`] into a Google Fonts CSS2 API request.
//!
//! *Reference:* [Google Fonts CSS API v2](https://developers.google.com/fonts/docs/css2).
//!
//! The URL lists one `family` parameter per collected family, followed by the `display` parameter:
//!
//! ```text
//! https://fonts.googleapis.com/css2?family=Lato:ital,wght@0,400;1,700&family=Lora&display=block
//!                                   \__________________________________/ \_________/ \___________/
//!                                       family with axes and tuples        family       display
//! ```
//!
//! Spaces of a family name are replaced by `+`.
//! A family with axes lists the axes after a `:`, separated by commas and in the order of [`AxisTag`](crate::axis::types::AxisTag).
//! After an `@` follow the requested styles as tuples of axis values.
//! The values of a tuple are separated by commas and listed in the order of the axes; tuples are separated by semicolons.
//! The API requires the tuples to be sorted in ascending order.
//!
//! A family requested only in its default style is listed without axes (unless [`Context::elide_defaults`] is disabled).
//!
//! # Example
//!
//! ```
//! # use gfont::collector::Collector;
//! # use gfont::ctx::Context;
//! # use gfont::url::build;
//! let ctx = Context::default();
//! let mut collector = Collector::new();
//! collector.register("Lato", Some("bold"), &["italic"], &ctx).unwrap();
//! collector.register("Lato", None, &["normal"], &ctx).unwrap();
//! collector.register("Lora", None, &[], &ctx).unwrap();
//! assert_eq!(
//!     build(&collector, &ctx),
//!     "https://fonts.googleapis.com/css2?family=Lato:ital,wght@0,400;1,700&family=Lora&display=block"
//! );
//! ```

use crate::collector::Collector;
use crate::ctx::Context;
use crate::data::FontRecord;
use itertools::Itertools;

/// Returns the stylesheet URL requesting every style recorded by `collector`.
///
/// An empty collector results in a URL with the `display` parameter only.
pub fn build(collector: &Collector, ctx: &Context) -> String {
    let mut href = ctx.base_url.clone();

    for record in collector.records() {
        href.push_str(&family_parameter(record, ctx));
        href.push('&');
    }

    href.push_str("display=");
    href.push_str(&ctx.display);

    log::trace!("stylesheet url: {}", href);

    href
}

/// Returns the `family` parameter of a single record.
///
/// ```ignore
/// assert_eq!(family_parameter(&record, &ctx), "family=Roboto+Flex:slnt,wght@-5,600");
/// ```
pub fn family_parameter(record: &FontRecord, ctx: &Context) -> String {
    let name = record.name.split(' ').join("+");

    if record.tags().next().is_none() || (ctx.elide_defaults && record.is_default_only()) {
        return format!("family={}", name);
    }

    let tags = record.tags().join(",");
    let tuples = record
        .entries_with_defaults()
        .iter()
        .map(|x| x.iter().join(","))
        .join(";");

    format!("family={}:{}@{}", name, tags, tuples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctx::Policy;

    const BASE: &str = "https://fonts.googleapis.com/css2?";

    /// A font usage with whitespace-separated variation tokens.
    type Usage<'a> = (&'a str, Option<&'a str>, &'a str);

    fn collected(usages: &[Usage], ctx: &Context) -> Collector {
        let mut collector = Collector::new();

        for &(family, weight, variations) in usages {
            let variations: Vec<&str> = variations.split_whitespace().collect();
            collector
                .register(family, weight, &variations, ctx)
                .unwrap();
        }

        collector
    }

    fn query(usages: &[Usage]) -> String {
        let ctx = Context::new(Policy::Strict);
        let url = build(&collected(usages, &ctx), &ctx);
        url.strip_prefix(BASE).unwrap().to_string()
    }

    #[test]
    fn test_empty_collector() {
        let ctx = Context::default();
        assert_eq!(build(&Collector::new(), &ctx), format!("{}display=block", BASE));
    }

    #[test]
    fn test_configured_base_and_display() {
        let mut ctx = Context::default();
        ctx.base_url = "https://fonts.example.com/css2?".to_string();
        ctx.display = "swap".to_string();
        let collector = collected(&[("Lato", None, "")], &ctx);
        assert_eq!(
            build(&collector, &ctx),
            "https://fonts.example.com/css2?family=Lato&display=swap"
        );
    }

    #[test]
    fn test_spaces_in_family_name() {
        assert_eq!(
            query(&[("Playfair Display", None, "")]),
            "family=Playfair+Display&display=block"
        );
    }

    #[test]
    fn test_default_style_is_elided() {
        assert_eq!(query(&[("Lato", Some("400"), "normal")]), "family=Lato&display=block");
        assert_eq!(query(&[("Lato", Some("regular"), "")]), "family=Lato&display=block");
        assert_eq!(query(&[("Lato", None, "wdth:100")]), "family=Lato&display=block");
    }

    #[test]
    fn test_default_style_without_elision() {
        let mut ctx = Context::default();
        ctx.elide_defaults = false;
        let collector = collected(&[("Lato", Some("400"), "normal")], &ctx);
        assert_eq!(
            build(&collector, &ctx),
            format!("{}family=Lato:ital,wght@0,400&display=block", BASE)
        );
    }

    #[test]
    fn test_default_style_among_others_is_listed() {
        assert_eq!(
            query(&[("Lato", Some("400"), ""), ("Lato", Some("700"), "")]),
            "family=Lato:wght@400;700&display=block"
        );
    }

    #[test]
    fn test_italic_only() {
        assert_eq!(query(&[("Lora", None, "italic")]), "family=Lora:ital@1&display=block");
    }

    #[test]
    fn test_normal_and_italic() {
        assert_eq!(
            query(&[("Lora", None, "italic"), ("Lora", None, "normal")]),
            "family=Lora:ital@0;1&display=block"
        );
    }

    #[test]
    fn test_weights_sorted() {
        assert_eq!(
            query(&[
                ("Raleway", Some("900"), ""),
                ("Raleway", Some("thin"), ""),
                ("Raleway", Some("500"), ""),
            ]),
            "family=Raleway:wght@100;500;900&display=block"
        );
    }

    #[test]
    fn test_tuple_ordering() {
        assert_eq!(
            query(&[("Lato", Some("700"), "italic"), ("Lato", Some("400"), "normal")]),
            "family=Lato:ital,wght@0,400;1,700&display=block"
        );
    }

    #[test]
    fn test_tuple_ordering_with_filled_defaults() {
        assert_eq!(
            query(&[
                ("Lato", Some("300"), "italic"),
                ("Lato", Some("black"), ""),
                ("Lato", None, "italic"),
            ]),
            "family=Lato:ital,wght@0,900;1,300;1,400&display=block"
        );
    }

    #[test]
    fn test_tuples_merged_after_default_filling() {
        assert_eq!(
            query(&[
                ("Lato", Some("400"), ""),
                ("Lato", None, "normal"),
                ("Lato", Some("700"), ""),
            ]),
            "family=Lato:ital,wght@0,400;0,700&display=block"
        );
    }

    #[test]
    fn test_variable_axes() {
        assert_eq!(
            query(&[
                ("Roboto Flex", Some("600"), "slnt:-5"),
                ("Roboto Flex", Some("medium"), "GRAD:100"),
            ]),
            "family=Roboto+Flex:slnt,wght,GRAD@-5,600,0;0,500,100&display=block"
        );
    }

    #[test]
    fn test_custom_axis_after_registered_axes() {
        assert_eq!(
            query(&[("Roboto Flex", None, "GRAD:100"), ("Roboto Flex", None, "slnt:-5")]),
            "family=Roboto+Flex:slnt,GRAD@-5,0;0,100&display=block"
        );
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(
            query(&[("Roboto Flex", Some("400"), "opsz:22.2 wdth:130.0")]),
            "family=Roboto+Flex:opsz,wdth,wght@22.2,130,400&display=block"
        );
    }

    #[test]
    fn test_multiple_families() {
        assert_eq!(
            query(&[
                ("Raleway", Some("700"), ""),
                ("Lato", None, ""),
                ("Raleway", Some("300"), ""),
            ]),
            "family=Raleway:wght@300;700&family=Lato&display=block"
        );
    }

    #[test]
    fn test_order_independence_all_permutations() {
        let mut usages: Vec<Usage> = vec![
            ("Roboto Flex", Some("600"), "slnt:-5"),
            ("Roboto Flex", Some("medium"), "GRAD:100"),
            ("Roboto Flex", Some("400"), "opsz:22.2"),
            ("Roboto Flex", Some("semibold"), "wdth:130.0 slnt:-5 opsz:22.2 GRAD:100"),
            ("Roboto Flex", None, ""),
        ];
        let expected = query(&usages);

        for permutation in permutohedron::Heap::new(&mut usages) {
            assert_eq!(query(&permutation), expected);
        }
    }

    #[test]
    fn test_order_independence_random() {
        use rand::prelude::*;
        let mut rng = rand::thread_rng();

        let weights = ["100", "300", "400", "700", "900"];
        let styles = ["normal", "italic", "slnt:-10", "slnt:0", "wdth:75 italic"];
        let mut usages: Vec<Usage> = Vec::new();

        for &weight in &weights {
            for &style in &styles {
                usages.push(("Lato", Some(weight), style));
                usages.push(("Lora", None, style));
            }
        }

        // families keep their first-use order, so only the parameters are compared
        let parameters = |usages: &[Usage]| -> Vec<String> {
            query(usages).split('&').map(str::to_string).sorted().collect()
        };
        let expected = parameters(&usages);

        for _ in 0..100 {
            usages.shuffle(&mut rng);
            assert_eq!(parameters(&usages), expected);
        }
    }
}
