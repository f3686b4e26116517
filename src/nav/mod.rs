//! Navigation state: the address line is the single source of truth.
//!
//! `NavState` is the logical cursor into the catalog, mirrored 1:1 into a
//! query string. `History` is the address-bar analog with back/forward.
//! `sync::NavigationSync` reconciles the current history entry with fetched
//! data.

pub mod pagination;
pub mod sync;

use crate::catalog_client::DEFAULT_LIST;

/// The single logical cursor into the catalog. `offset` is the zero-based
/// absolute index of the first item on the current page, always a multiple
/// of the page size that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub list: String,
    pub offset: u32,
}

impl Default for NavState {
    fn default() -> Self {
        NavState {
            list: DEFAULT_LIST.to_string(),
            offset: 0,
        }
    }
}

impl NavState {
    /// Encode into the query string shown on the address line.
    pub fn encode(&self) -> String {
        format!(
            "?list={}&offset={}",
            urlencoding::encode(&self.list),
            self.offset
        )
    }

    /// Parse a query string (with or without the leading `?`). Missing or
    /// invalid parameters fall back to the defaults, matching how the
    /// original page treats a hand-edited address.
    pub fn parse(query: &str) -> NavState {
        let mut state = NavState::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "list" => {
                    if let Ok(decoded) = urlencoding::decode(value)
                        && !decoded.is_empty()
                    {
                        state.list = decoded.into_owned();
                    }
                }
                "offset" => {
                    if let Ok(offset) = value.parse::<u32>() {
                        state.offset = offset;
                    }
                }
                _ => {}
            }
        }
        state
    }
}

/// Address-bar history: pushing a new entry truncates anything forward of
/// the cursor, exactly like a browser.
#[derive(Debug)]
pub struct History {
    entries: Vec<NavState>,
    cursor: usize,
}

impl History {
    pub fn new(initial: NavState) -> Self {
        History {
            entries: vec![initial],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &NavState {
        &self.entries[self.cursor]
    }

    /// Push a new entry, dropping forward history. Pushing the current entry
    /// again is a no-op.
    pub fn push(&mut self, state: NavState) {
        if *self.current() == state {
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(state);
        self.cursor += 1;
    }

    /// Move back one entry; returns whether the cursor moved.
    pub fn back(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Move forward one entry; returns whether the cursor moved.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }
}
