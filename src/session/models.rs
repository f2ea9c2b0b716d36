/*!
 * Session state and handler outputs.
 */

use serde::{Deserialize, Serialize};

use crate::section::{ContentType, Fragment};

/// Maximum characters shown per section in a summary line
const SUMMARY_PREVIEW_CHARS: usize = 60;

/// In-memory state of one page-building run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Fragments in the order they were appended
    pub(crate) fragments: Vec<Fragment>,
    /// Sequence number of the next submission, advanced on every submit
    pub(crate) next_sequence: usize,
    /// Content type the next submission is produced with
    pub(crate) selected_type: ContentType,
    /// Raw value of the current input field
    pub(crate) pending_input: String,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn next_sequence(&self) -> usize {
        self.next_sequence
    }

    pub fn selected_type(&self) -> ContentType {
        self.selected_type
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Key of the input field currently collecting raw text, e.g. `h3_4`
    pub fn input_key(&self) -> String {
        format!("{}_{}", self.selected_type.input_prefix(), self.next_sequence)
    }

    /// One summary per appended section, numbered from 1
    pub fn summaries(&self) -> Vec<SectionSummary> {
        self.fragments
            .iter()
            .enumerate()
            .map(|(i, fragment)| SectionSummary::new(i + 1, fragment))
            .collect()
    }
}

/// Result of submitting the pending input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Whether a fragment was appended
    pub appended: bool,
    /// Sequence number consumed by this submission
    pub sequence: usize,
    /// Input key that must be blanked before the next round
    pub cleared_key: String,
}

/// Short listing entry for an appended section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    pub number: usize,
    pub preview: String,
}

impl SectionSummary {
    fn new(number: usize, fragment: &Fragment) -> Self {
        let flattened = fragment.as_str().replace('\n', " ");
        let preview = if flattened.chars().count() > SUMMARY_PREVIEW_CHARS {
            let cut: String = flattened.chars().take(SUMMARY_PREVIEW_CHARS).collect();
            format!("{}...", cut)
        } else {
            flattened
        };
        Self { number, preview }
    }
}

impl std::fmt::Display for SectionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Section {}: {}", self.number, self.preview)
    }
}
