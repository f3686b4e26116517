//! Read-only rendering of the current catalog page: card grid, pager row,
//! loading placeholder and inline error text.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::domain::models::{Book, CatalogPage};
use crate::nav::pagination::Pagination;

const CARD_HEIGHT: u16 = 9;

fn column_count(width: u16) -> usize {
    match width {
        0..=59 => 1,
        60..=99 => 2,
        _ => 3,
    }
}

/// Rows of cards that fit in `area`, for clamping the scroll position.
pub fn max_scroll(area: Rect, book_count: usize) -> usize {
    let cols = column_count(area.width);
    let total_rows = book_count.div_ceil(cols);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    total_rows.saturating_sub(visible_rows)
}

pub fn render_loading(frame: &mut Frame, area: Rect) {
    let placeholder = Paragraph::new("Loading books...")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    let centered = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    frame.render_widget(placeholder, centered);
}

/// The error message replaces the grid, rendered verbatim.
pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let error = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });
    let centered = Rect {
        y: area.y + area.height / 2,
        height: area.height.saturating_sub(area.height / 2),
        ..area
    };
    frame.render_widget(error, centered);
}

pub fn render_results(frame: &mut Frame, area: Rect, page: &CatalogPage, scroll_row: usize) {
    if page.books.is_empty() {
        let empty = Paragraph::new("No books on this list.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let cols = column_count(area.width);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let first = scroll_row * cols;

    for (slot, book) in page.books.iter().skip(first).take(visible_rows * cols).enumerate() {
        let row = slot / cols;
        let col = slot % cols;
        let cell_width = area.width / cols as u16;
        let cell = Rect {
            x: area.x + col as u16 * cell_width,
            y: area.y + row as u16 * CARD_HEIGHT,
            width: cell_width,
            height: CARD_HEIGHT.min(area.height.saturating_sub(row as u16 * CARD_HEIGHT)),
        };
        if cell.height == 0 {
            break;
        }
        render_card(frame, cell, book);
    }
}

fn render_card(frame: &mut Frame, area: Rect, book: &Book) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", book.title),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let author = if book.author.is_empty() {
        book.contributor.clone()
    } else {
        book.author.clone()
    };
    let lines = vec![
        Line::from(Span::styled(author, Style::default().fg(Color::Cyan))),
        Line::from(book.description.clone()),
        Line::from(vec![
            Span::styled("Publisher: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(book.publisher.clone()),
        ]),
        Line::from(vec![
            Span::styled("ISBN-13: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(book.primary_isbn13.clone()),
        ]),
        Line::from(Span::styled(
            book.purchase_url(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )),
    ];
    let card = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}

/// One span per page, current page highlighted. Only called when the pager
/// should render (`total_pages > 1`).
pub fn render_pager(frame: &mut Frame, area: Rect, pagination: Pagination) {
    let mut spans = Vec::new();
    for page in 1..=pagination.total_pages {
        let style = if page == pagination.current_page {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {page} "), style));
    }
    let pager = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(pager, area);
}

/// Top bar: address line on the left, selected genre label on the right.
pub fn render_address_bar(frame: &mut Frame, area: Rect, address: &str, genre_label: &str) {
    let chunks =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(genre_label.len() as u16 + 2)])
            .split(area);
    let address_line = Paragraph::new(Span::styled(
        address.to_string(),
        Style::default().fg(Color::Green),
    ))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(address_line, chunks[0]);
    let genre = Paragraph::new(Span::styled(
        genre_label.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right)
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(genre, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_terminal_gets_one_column() {
        assert_eq!(column_count(40), 1);
        assert_eq!(column_count(80), 2);
        assert_eq!(column_count(140), 3);
    }

    #[test]
    fn max_scroll_accounts_for_visible_rows() {
        let area = Rect::new(0, 0, 80, CARD_HEIGHT * 2);
        // 10 books, 2 columns -> 5 rows, 2 visible
        assert_eq!(max_scroll(area, 10), 3);
        assert_eq!(max_scroll(area, 4), 0);
        assert_eq!(max_scroll(area, 0), 0);
    }
}
