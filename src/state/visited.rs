use crate::state::PageRecord;
use indexmap::IndexMap;

/// Visited pages keyed by their byte-exact absolute URL
///
/// Iteration follows insertion order, which for a crawl is breadth-first discovery
/// order. A URL can be inserted once; keys are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedIndex {
    pages: IndexMap<String, PageRecord>,
}

impl VisitedIndex {
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `url` has already been recorded
    pub fn contains(&self, url: &str) -> bool {
        self.pages.contains_key(url)
    }

    /// Records `url` unless it is already present
    ///
    /// Returns false and leaves the existing record untouched on a duplicate.
    pub fn insert(&mut self, url: impl Into<String>, record: PageRecord) -> bool {
        match self.pages.entry(url.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    /// Looks up the record for `url`
    pub fn get(&self, url: &str) -> Option<&PageRecord> {
        self.pages.get(url)
    }

    /// Number of visited pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns true if nothing was visited
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterates over `(url, record)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PageRecord)> {
        self.pages.iter().map(|(url, record)| (url.as_str(), record))
    }

    /// Iterates over visited URLs in insertion order
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a VisitedIndex {
    type Item = (&'a String, &'a PageRecord);
    type IntoIter = indexmap::map::Iter<'a, String, PageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
