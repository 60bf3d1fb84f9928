//! # Stream Groups

use crate::engine::NativeMatch;
use crate::results::{StreamCapture, StreamCaptureCollection};

/// The results from a single capturing group, positioned in stream-global
/// coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamGroup {
    /// The name of the group, if the pattern declared one.
    name: Option<String>,

    /// Global byte offset; 0 for an unsuccessful group.
    index: usize,

    /// The captured text; empty for an unsuccessful group.
    value: String,

    /// Whether the group participated in the match.
    success: bool,

    /// The group's captures.
    captures: StreamCaptureCollection,
}

impl StreamGroup {
    fn matched(
        name: Option<&str>,
        index: usize,
        value: String,
    ) -> Self {
        let captures =
            StreamCaptureCollection::new(vec![StreamCapture::new(index, value.clone())]);
        Self {
            name: name.map(str::to_string),
            index,
            value,
            success: true,
            captures,
        }
    }

    fn unmatched(name: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            index: 0,
            value: String::new(),
            success: false,
            captures: StreamCaptureCollection::default(),
        }
    }

    /// The name of the group, if the pattern declared one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Gets a value indicating whether the group matched.
    pub fn success(&self) -> bool {
        self.success
    }

    /// The global byte offset of the group's capture in the stream.
    ///
    /// An unsuccessful group reports 0 rather than an offset, preserving
    /// the underlying engine's placeholder convention.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The byte length of the group's capture.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Is the group's capture zero-length?
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// The text captured by the group.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The group's captures: one entry when the group matched, none
    /// otherwise.
    ///
    /// The bound engines report only the final capture of a repeated
    /// group, so there is never more than one.
    pub fn captures(&self) -> &StreamCaptureCollection {
        &self.captures
    }
}

/// Collection of [`StreamGroup`] items, in declared order (group 0, the
/// whole match, first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamGroupCollection {
    items: Vec<StreamGroup>,
}

impl StreamGroupCollection {
    /// Snapshot the groups of a native match.
    ///
    /// ## Arguments
    /// * `native` - the window-local match coordinates.
    /// * `text` - the window text the coordinates refer to.
    /// * `offset` - the global offset of the window, captured at
    ///   acceptance time.
    /// * `names` - group names in declared order, from the pattern.
    pub(crate) fn from_native(
        native: &NativeMatch,
        text: &str,
        offset: usize,
        names: &[Option<&str>],
    ) -> Self {
        let items = native
            .groups
            .iter()
            .zip(names)
            .map(|(span, name)| match span {
                Some((start, end)) => StreamGroup::matched(
                    *name,
                    offset + start,
                    text[*start..*end].to_string(),
                ),
                None => StreamGroup::unmatched(*name),
            })
            .collect();
        Self {
            items,
        }
    }

    /// Build the all-unsuccessful collection of a failed match.
    pub(crate) fn all_unmatched(names: &[Option<&str>]) -> Self {
        Self {
            items: names.iter().map(|name| StreamGroup::unmatched(*name)).collect(),
        }
    }

    /// Count of group items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Is the collection empty?
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Access a member of the collection by position (declared order).
    pub fn get(
        &self,
        index: usize,
    ) -> Option<&StreamGroup> {
        self.items.get(index)
    }

    /// Access a member of the collection by group name.
    pub fn by_name(
        &self,
        name: &str,
    ) -> Option<&StreamGroup> {
        self.items.iter().find(|group| group.name() == Some(name))
    }

    /// Iterate over the groups in declared order.
    pub fn iter(&self) -> core::slice::Iter<'_, StreamGroup> {
        self.items.iter()
    }
}

impl core::ops::Index<usize> for StreamGroupCollection {
    type Output = StreamGroup;

    fn index(
        &self,
        index: usize,
    ) -> &StreamGroup {
        &self.items[index]
    }
}

impl core::ops::Index<&str> for StreamGroupCollection {
    type Output = StreamGroup;

    fn index(
        &self,
        name: &str,
    ) -> &StreamGroup {
        match self.by_name(name) {
            Some(group) => group,
            None => panic!("no group named '{name}'"),
        }
    }
}

impl<'a> IntoIterator for &'a StreamGroupCollection {
    type Item = &'a StreamGroup;
    type IntoIter = core::slice::Iter<'a, StreamGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
