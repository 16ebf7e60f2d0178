use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::entry::{NameExtractor, PlaylistEntry};
use super::{ENTRY_MARKER, PLAYLIST_HEADER};

/// One category and how many of its channels the output may keep.
/// Rules live in an ordered list: earlier rules get first claim on an
/// entry that matches more than one label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    pub label: String,
    pub quota: usize,
}

impl CategoryRule {
    pub fn new(label: impl Into<String>, quota: usize) -> Self {
        Self {
            label: label.into(),
            quota,
        }
    }
}

/// Outcome of one reduction pass.
#[derive(Debug)]
pub struct Reduction {
    /// Header line followed by (metadata, url) pairs in encounter order.
    pub lines: Vec<String>,
    /// Selected count per category label, zero included.
    pub counts: HashMap<String, usize>,
    pub total: usize,
}

/// Mutable counters for a single pass; created and consumed by `reduce`.
struct SelectionState {
    counts: HashMap<String, usize>,
    seen_names: HashSet<String>,
    total: usize,
    lines: Vec<String>,
}

impl SelectionState {
    fn new(rules: &[CategoryRule]) -> Self {
        Self {
            counts: rules.iter().map(|r| (r.label.clone(), 0)).collect(),
            seen_names: HashSet::new(),
            total: 0,
            lines: vec![PLAYLIST_HEADER.to_string()],
        }
    }
}

/// Runs the category-bounded selection pass over a playlist.
pub struct Selector {
    rules: Vec<CategoryRule>,
    global_cap: usize,
    names: NameExtractor,
}

impl Selector {
    pub fn new(rules: Vec<CategoryRule>, global_cap: usize) -> Self {
        Self {
            rules,
            global_cap,
            names: NameExtractor::new(),
        }
    }

    /// Single forward pass: pair up #EXTINF/URL lines, keep qualified,
    /// deduplicated entries while their category quota and the global cap
    /// allow, drop everything else silently. Never fails - malformed input
    /// just selects fewer entries.
    pub fn reduce<S: AsRef<str>>(&self, input: &[S]) -> Reduction {
        let mut state = SelectionState::new(&self.rules);
        let mut i = 0;

        // The last line can never open an entry: no URL line can follow it.
        while i + 1 < input.len() {
            let line = input[i].as_ref().trim();

            if line.starts_with(ENTRY_MARKER) {
                let url = input
                    .get(i + 1)
                    .map(|l| l.as_ref().trim())
                    .unwrap_or_default();
                self.consider(&mut state, line, url);
                i += 2;
            } else {
                i += 1;
            }

            if state.total >= self.global_cap {
                debug!("Global cap of {} reached, stopping scan", self.global_cap);
                break;
            }
        }

        info!(
            "Selected {} channels from {} input lines",
            state.total,
            input.len()
        );

        Reduction {
            lines: state.lines,
            counts: state.counts,
            total: state.total,
        }
    }

    /// Qualify one entry and let the first rule with quota left claim it.
    fn consider(&self, state: &mut SelectionState, metadata: &str, url: &str) {
        let entry = PlaylistEntry::new(metadata, url);
        if !entry.is_qualified() || !entry.has_stream_url() {
            return;
        }

        let name = self.names.display_name(metadata);
        if state.seen_names.contains(&name) {
            debug!("Duplicate channel name '{}', skipping", name);
            return;
        }

        // Labels match case-insensitively; quality markers above do not.
        let haystack = metadata.to_uppercase();
        for rule in &self.rules {
            if !haystack.contains(&rule.label.to_uppercase()) {
                continue;
            }
            let Some(count) = state.counts.get_mut(&rule.label) else {
                continue;
            };
            // A full category does not block later rules from claiming
            // the entry, but only one rule ever counts it.
            if *count < rule.quota {
                *count += 1;
                state.total += 1;
                state.lines.push(entry.metadata);
                state.lines.push(entry.url);
                state.seen_names.insert(name);
                return;
            }
        }
        // No rule matched or every match was at quota - drop silently.
    }
}
