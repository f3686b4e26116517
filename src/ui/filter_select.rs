//! Searchable genre dropdown.
//!
//! A small state machine of its own, independent of navigation state:
//! closed, or open with a live search text and a cursor into the filtered
//! options.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::domain::models::Genre;

const PLACEHOLDER: &str = "Select a genre";

#[derive(Debug, PartialEq, Eq)]
enum DropdownState {
    Closed,
    Open { search: String, cursor: usize },
}

pub struct FilterSelect {
    genres: Vec<Genre>,
    selected: String,
    state: DropdownState,
}

impl FilterSelect {
    pub fn new(genres: Vec<Genre>, selected: String) -> Self {
        FilterSelect {
            genres,
            selected,
            state: DropdownState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DropdownState::Open { .. })
    }

    pub fn open(&mut self) {
        self.state = DropdownState::Open {
            search: String::new(),
            cursor: 0,
        };
    }

    /// Keep the trigger label honest when navigation changes the list out
    /// from under us (back/forward, hand-edited address).
    pub fn set_selected(&mut self, code: &str) {
        if self.selected != code {
            self.selected = code.to_string();
        }
    }

    /// Trigger label: the selected genre's display name, or a placeholder
    /// when the code matches no known genre (stale address parameter).
    pub fn label(&self) -> &str {
        self.genres
            .iter()
            .find(|g| g.code == self.selected)
            .map(|g| g.display_name.as_str())
            .unwrap_or(PLACEHOLDER)
    }

    /// Case-insensitive substring match on display names, live against the
    /// current search text.
    fn filtered(&self) -> Vec<&Genre> {
        let needle = match &self.state {
            DropdownState::Open { search, .. } => search.to_lowercase(),
            DropdownState::Closed => String::new(),
        };
        self.genres
            .iter()
            .filter(|g| g.display_name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Handle a key while open. Returns the selected genre code when the
    /// user confirms a choice; the dropdown closes and clears its search in
    /// both the select and dismiss cases.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<String> {
        let filtered_codes: Vec<String> = self.filtered().iter().map(|g| g.code.clone()).collect();
        let DropdownState::Open { search, cursor } = &mut self.state else {
            return None;
        };
        match key.code {
            KeyCode::Esc => {
                // the click-outside analog: close without changing selection
                self.state = DropdownState::Closed;
            }
            KeyCode::Enter => {
                let choice = filtered_codes.get(*cursor).cloned();
                self.state = DropdownState::Closed;
                if let Some(code) = choice {
                    self.selected = code.clone();
                    return Some(code);
                }
            }
            KeyCode::Up => {
                *cursor = cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                if *cursor + 1 < filtered_codes.len() {
                    *cursor += 1;
                }
            }
            KeyCode::Backspace => {
                search.pop();
                *cursor = 0;
            }
            KeyCode::Char(c) => {
                search.push(c);
                *cursor = 0;
            }
            _ => {}
        }
        None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let DropdownState::Open { search, cursor } = &self.state else {
            return;
        };
        let filtered = self.filtered();

        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Genres (type to search, Enter to select, Esc to close) ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let search_line = Paragraph::new(format!("Search: {search}_"))
            .style(Style::default().fg(Color::Yellow));
        let search_area = Rect { height: 1, ..inner };
        frame.render_widget(search_line, search_area);

        let list_area = Rect {
            y: inner.y + 1,
            height: inner.height.saturating_sub(1),
            ..inner
        };
        let items: Vec<ListItem> = filtered
            .iter()
            .map(|g| ListItem::new(g.display_name.clone()))
            .collect();
        let mut list_state = ListState::default();
        if !filtered.is_empty() {
            list_state.select(Some((*cursor).min(filtered.len() - 1)));
        }
        let list = List::new(items).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_stateful_widget(list, list_area, &mut list_state);
    }
}
