use indexmap::IndexMap;

/// One observed use of a message at a call site.
///
/// Created by the scanner and never modified once added to a [`Catalog`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occurrence {
    /// Rendered `#. ` lines, empty when the call had no translator comment.
    pub comment: String,
    pub file: String,
    /// 1-based line of the marker call.
    pub line: usize,
    /// Plural text, only for plural markers.
    pub plural: Option<String>,
    pub format_hint: Option<&'static str>,
}

/// Messages keyed by their escaped msgid, in first-seen order.
#[derive(Debug, Default)]
pub struct Catalog {
    messages: IndexMap<String, Vec<Occurrence>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an occurrence under `msgid`, creating the entry if needed.
    pub fn add(&mut self, msgid: String, occurrence: Occurrence) {
        self.messages.entry(msgid).or_default().push(occurrence);
    }

    pub fn get(&self, msgid: &str) -> Option<&[Occurrence]> {
        self.messages.get(msgid).map(Vec::as_slice)
    }

    /// Number of distinct messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Total number of occurrences across all messages.
    pub fn occurrence_count(&self) -> usize {
        self.messages.values().map(Vec::len).sum()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.messages
            .iter()
            .map(|(msgid, occurrences)| (msgid.as_str(), occurrences.as_slice()))
    }

    /// Entries in insertion order, or ascending msgid order when `sorted`.
    pub fn entries(&self, sorted: bool) -> Vec<(&str, &[Occurrence])> {
        let mut entries: Vec<_> = self.iter().collect();
        if sorted {
            entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        }
        entries
    }
}
