//! Space-delimited tag strings.
//!
//! # Responsibility
//! - Convert between tag lists and the persisted `" a b c "` wire form.
//! - Provide case-insensitive membership, add and delete helpers.
//! - Offer [`TagSet`] as the in-memory form with invariants enforced by type.
//!
//! # Invariants
//! - Wire form is `""` or starts and ends with exactly one space.
//! - No empty tokens, no tokens containing spaces.
//! - Canonical form strips leading `:`, dedups case-sensitively, sorts by code point.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Splits a tag string on single spaces, dropping empty tokens.
pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(' ')
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins tags into the wire form with one leading and one trailing space.
pub fn join_tags<S: AsRef<str>>(tags: &[S]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let mut out = String::from(" ");
    for tag in tags {
        out.push_str(tag.as_ref());
        out.push(' ');
    }
    out
}

/// Strips leading colons, removes duplicates and sorts, then joins.
pub fn canonify_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|tag| tag.as_ref())
        .collect::<TagSet>()
        .to_wire()
}

/// Returns whether `tag` is in `tags`, ignoring case.
pub fn has_tag<S: AsRef<str>>(tag: &str, tags: &[S]) -> bool {
    let needle = tag.to_lowercase();
    tags.iter().any(|candidate| candidate.as_ref().to_lowercase() == needle)
}

/// Appends each tag of `to_add` that is not already present (ignoring case).
///
/// Existing order is preserved and new tags keep their original case.
pub fn add_tags(to_add: &str, tags: &str) -> String {
    let mut current = parse_tags(tags);
    for tag in parse_tags(to_add) {
        if !has_tag(&tag, &current) {
            current.push(tag);
        }
    }
    join_tags(&current)
}

/// Removes every tag that equals one of `to_remove`, ignoring case.
pub fn del_tags(to_remove: &str, tags: &str) -> String {
    let removals = parse_tags(to_remove)
        .into_iter()
        .map(|tag| tag.to_lowercase())
        .collect::<Vec<_>>();
    let remaining = parse_tags(tags)
        .into_iter()
        .filter(|tag| !removals.contains(&tag.to_lowercase()))
        .collect::<Vec<_>>();
    join_tags(&remaining)
}

/// Ordered tag set in canonical form.
///
/// Serializes as the wire string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TagSet {
    tags: BTreeSet<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the persisted wire form, canonicalizing as it goes.
    pub fn from_wire(wire: &str) -> Self {
        let mut set = Self::new();
        set.insert(wire);
        set
    }

    /// Renders the persisted wire form.
    pub fn to_wire(&self) -> String {
        join_tags(&self.tags.iter().collect::<Vec<_>>())
    }

    /// Inserts each space-separated token of `tag` with leading `:` stripped.
    ///
    /// Returns `true` when at least one new tag was added.
    pub fn insert(&mut self, tag: &str) -> bool {
        let mut added = false;
        for token in tag.split(' ') {
            let token = token.trim_start_matches(':');
            if !token.is_empty() {
                added |= self.tags.insert(token.to_string());
            }
        }
        added
    }

    /// Removes all tags equal to `tag` ignoring case; returns how many were removed.
    pub fn remove_ignore_case(&mut self, tag: &str) -> usize {
        let needle = tag.to_lowercase();
        let before = self.tags.len();
        self.tags.retain(|existing| existing.to_lowercase() != needle);
        before - self.tags.len()
    }

    pub fn contains_ignore_case(&self, tag: &str) -> bool {
        let needle = tag.to_lowercase();
        self.tags.iter().any(|existing| existing.to_lowercase() == needle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl From<String> for TagSet {
    fn from(value: String) -> Self {
        Self::from_wire(&value)
    }
}

impl From<TagSet> for String {
    fn from(value: TagSet) -> Self {
        value.to_wire()
    }
}

impl Display for TagSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_wire())
    }
}
