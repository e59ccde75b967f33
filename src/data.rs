//! The collected font usage of a single family.

use crate::axis::types::{AxisTag, AxisValue};
use itertools::Itertools;
use std::collections::BTreeMap;

/// Maps axes to values.
///
/// A `BTreeMap` is used since axes are always serialized in the order of [`AxisTag`].
pub type Axes = BTreeMap<AxisTag, AxisValue>;

/// The styles requested for a font family.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FontRecord {
    /// The name of the font family.
    pub name: String,
    /// Every axis ever requested for the family, mapped to the default value of the axis.
    tags: Axes,
    /// The distinct styles requested, in the order they were first requested.
    ///
    /// Each entry contains only the axes named by its request.
    entries: Vec<Axes>,
}

impl FontRecord {
    /// Creates a record without any requested style.
    pub fn new(name: &str) -> Self {
        FontRecord {
            name: name.to_string(),
            tags: Axes::new(),
            entries: Vec::new(),
        }
    }

    /// The requested axes in serialization order.
    pub fn tags(&self) -> impl Iterator<Item = &AxisTag> {
        self.tags.keys()
    }

    /// The default values of the requested axes in serialization order.
    pub fn defaults(&self) -> impl Iterator<Item = &AxisValue> {
        self.tags.values()
    }

    /// The distinct styles requested, in the order they were first requested.
    pub fn entries(&self) -> &[Axes] {
        &self.entries
    }

    /// Adds an axis with its default value.
    ///
    /// Returns whether the axis is new.
    pub fn insert_tag(&mut self, tag: AxisTag, default: AxisValue) -> bool {
        if self.tags.contains_key(&tag) {
            false
        } else {
            self.tags.insert(tag, default);
            true
        }
    }

    /// Adds a style.
    ///
    /// Returns whether no equal style has been added before.
    /// Every axis of `entry` must have been added using [`insert_tag`](Self::insert_tag).
    pub fn insert_entry(&mut self, entry: Axes) -> bool {
        debug_assert!(entry.keys().all(|x| self.tags.contains_key(x)));

        if self.entries.contains(&entry) {
            false
        } else {
            self.entries.push(entry);
            true
        }
    }

    /// Returns the requested styles with every axis of the family filled in.
    ///
    /// Axes that an entry does not name take their default value.
    /// Each returned tuple lists the values in the order of [`tags`](Self::tags).
    /// The tuples are distinct and sorted in ascending order, comparing values from left to right.
    ///
    /// The result is computed from scratch on every call.
    /// An axis added after an entry applies to that entry as well.
    pub fn entries_with_defaults(&self) -> Vec<Vec<AxisValue>> {
        self.entries
            .iter()
            .map(|entry| {
                self.tags
                    .iter()
                    .map(|(tag, default)| *entry.get(tag).unwrap_or(default))
                    .collect::<Vec<AxisValue>>()
            })
            .sorted()
            .dedup()
            .collect()
    }

    /// Whether the record requests nothing but the default style.
    ///
    /// This is the case if the family has no axes, or if every requested style reduces to the defaults of all axes.
    pub fn is_default_only(&self) -> bool {
        let entries = self.entries_with_defaults();

        match entries.as_slice() {
            [] => true,
            [entry] => entry.iter().eq(self.defaults()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(x: &str) -> AxisTag {
        AxisTag::new(x).unwrap()
    }

    fn axes(pairs: &[(&str, i32)]) -> Axes {
        pairs
            .iter()
            .map(|&(t, v)| (tag(t), AxisValue::from(v)))
            .collect()
    }

    fn described(record: &FontRecord) -> Vec<String> {
        record
            .entries_with_defaults()
            .iter()
            .map(|x| x.iter().join(","))
            .collect()
    }

    #[test]
    fn test_insert_tag_is_idempotent() {
        let mut record = FontRecord::new("Lato");
        assert!(record.insert_tag(tag("wght"), AxisValue::from(400)));
        assert!(!record.insert_tag(tag("wght"), AxisValue::from(400)));
    }

    #[test]
    fn test_tags_are_sorted_on_insertion() {
        let mut record = FontRecord::new("Roboto Flex");
        record.insert_tag(tag("wght"), AxisValue::from(400));
        record.insert_tag(tag("GRAD"), AxisValue::from(0));
        record.insert_tag(tag("slnt"), AxisValue::from(0));
        let tags: Vec<&str> = record.tags().map(AxisTag::as_str).collect();
        assert_eq!(tags, ["slnt", "wght", "GRAD"]);
    }

    #[test]
    fn test_insert_entry_deduplicates() {
        let mut record = FontRecord::new("Lato");
        record.insert_tag(tag("wght"), AxisValue::from(400));
        record.insert_tag(tag("ital"), AxisValue::from(0));
        assert!(record.insert_entry(axes(&[("wght", 700), ("ital", 1)])));
        assert!(record.insert_entry(axes(&[("ital", 1)])));
        assert!(!record.insert_entry(axes(&[("ital", 1), ("wght", 700)])));
        assert_eq!(record.entries().len(), 2);
    }

    #[test]
    fn test_entries_with_defaults_sorted() {
        let mut record = FontRecord::new("Lato");
        record.insert_tag(tag("wght"), AxisValue::from(400));
        record.insert_tag(tag("ital"), AxisValue::from(0));
        record.insert_entry(axes(&[("wght", 700), ("ital", 1)]));
        record.insert_entry(axes(&[("wght", 400), ("ital", 0)]));
        assert_eq!(described(&record), ["0,400", "1,700"]);
    }

    #[test]
    fn test_entries_with_defaults_merges_equal_tuples() {
        let mut record = FontRecord::new("Lato");
        record.insert_tag(tag("wght"), AxisValue::from(400));
        record.insert_tag(tag("ital"), AxisValue::from(0));
        record.insert_entry(axes(&[("wght", 400)]));
        record.insert_entry(axes(&[("ital", 0)]));
        record.insert_entry(axes(&[]));
        assert_eq!(record.entries().len(), 3);
        assert_eq!(described(&record), ["0,400"]);
    }

    #[test]
    fn test_entries_with_defaults_applies_later_tags() {
        let mut record = FontRecord::new("Roboto Flex");
        record.insert_tag(tag("wght"), AxisValue::from(400));
        record.insert_entry(axes(&[("wght", 600)]));
        assert_eq!(described(&record), ["600"]);

        record.insert_tag(tag("GRAD"), AxisValue::from(0));
        record.insert_entry(axes(&[("GRAD", 100)]));
        assert_eq!(described(&record), ["400,100", "600,0"]);
    }

    #[test]
    fn test_is_default_only() {
        let mut record = FontRecord::new("Lato");
        assert!(record.is_default_only());

        record.insert_tag(tag("wght"), AxisValue::from(400));
        record.insert_tag(tag("ital"), AxisValue::from(0));
        record.insert_entry(axes(&[("wght", 400), ("ital", 0)]));
        assert!(record.is_default_only());

        record.insert_entry(axes(&[("ital", 1)]));
        assert!(!record.is_default_only());
    }

    #[test]
    fn test_is_default_only_single_non_default() {
        let mut record = FontRecord::new("Lato");
        record.insert_tag(tag("wght"), AxisValue::from(400));
        record.insert_entry(axes(&[("wght", 300)]));
        assert!(!record.is_default_only());
    }
}
