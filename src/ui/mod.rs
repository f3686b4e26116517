//! Interactive terminal front end.
//!
//! Single-threaded state transitions: crossterm input and fetch completions
//! arrive over channels and are multiplexed with `tokio::select!`. Fetches
//! run as spawned tasks; stale ones are discarded by the generation check in
//! [`NavigationSync::apply`].

pub mod filter_select;
pub mod results;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};
use tokio::sync::mpsc;

use crate::catalog_client::CatalogClient;
use crate::domain::models::{CatalogPage, Genre};
use crate::nav::NavState;
use crate::nav::sync::{FetchOutcome, FetchSpec, NavigationSync, Phase};
use filter_select::FilterSelect;

const HELP_LINE: &str =
    "g genre   \u{2190}/\u{2192} page   Backspace back   f forward   \u{2191}/\u{2193} scroll   q quit";

pub struct App {
    sync: NavigationSync,
    filter: FilterSelect,
    grid_area: Rect,
    scroll_row: usize,
    should_quit: bool,
}

impl App {
    pub fn new(initial: NavState, first_page: CatalogPage, genres: Vec<Genre>) -> Self {
        let filter = FilterSelect::new(genres, initial.list.clone());
        App {
            sync: NavigationSync::new(initial, first_page),
            filter,
            grid_area: Rect::default(),
            scroll_row: 0,
            should_quit: false,
        }
    }

    pub async fn run(mut self, client: CatalogClient) -> Result<()> {
        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal, client).await;
        ratatui::restore();
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        client: CatalogClient,
    ) -> Result<()> {
        let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel::<FetchOutcome>();
        let (input_tx, mut input_rx) = mpsc::unbounded_channel::<Event>();
        std::thread::spawn(move || {
            while let Ok(event) = crossterm::event::read() {
                if input_tx.send(event).is_err() {
                    break;
                }
            }
        });

        loop {
            terminal.draw(|frame| self.draw(frame))?;
            let spec = tokio::select! {
                Some(event) = input_rx.recv() => self.handle_event(event),
                Some(outcome) = fetch_rx.recv() => {
                    self.apply_outcome(outcome);
                    None
                }
            };
            if let Some(spec) = spec {
                spawn_fetch(&client, spec, fetch_tx.clone());
            }
            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) {
        self.sync.apply(outcome);
        self.scroll_row = 0;
        let applied_list = self.sync.applied().list.clone();
        self.filter.set_selected(&applied_list);
    }

    fn handle_event(&mut self, event: Event) -> Option<FetchSpec> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if self.filter.is_open() {
            if let Some(code) = self.filter.handle_key(key) {
                return self.sync.select_genre(&code);
            }
            return None;
        }
        self.handle_key(key)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<FetchSpec> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('g') => {
                self.filter.open();
                None
            }
            KeyCode::Left | KeyCode::Char('[') => {
                let p = self.sync.pagination()?;
                if p.current_page > 1 {
                    self.sync.select_page(p.current_page - 1)
                } else {
                    None
                }
            }
            KeyCode::Right | KeyCode::Char(']') => {
                let p = self.sync.pagination()?;
                if p.current_page < p.total_pages {
                    self.sync.select_page(p.current_page + 1)
                } else {
                    None
                }
            }
            KeyCode::Backspace => self.sync.back(),
            KeyCode::Char('f') => self.sync.forward(),
            KeyCode::Up => {
                self.scroll_row = self.scroll_row.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                let max = results::max_scroll(self.grid_area, self.sync.page().books.len());
                if self.scroll_row < max {
                    self.scroll_row += 1;
                }
                None
            }
            _ => None,
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let [bar, grid, pager, help] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        self.grid_area = grid;

        results::render_address_bar(frame, bar, &self.sync.address(), self.filter.label());

        match self.sync.phase() {
            Phase::Loading => results::render_loading(frame, grid),
            Phase::Error(message) => results::render_error(frame, grid, message),
            Phase::Idle => results::render_results(frame, grid, self.sync.page(), self.scroll_row),
        }

        if let Some(p) = self.sync.pagination()
            && p.should_render()
        {
            results::render_pager(frame, pager, p);
        }

        let help_line =
            Paragraph::new(HELP_LINE).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help_line, help);

        if self.filter.is_open() {
            self.filter.render(frame, popup_area(frame.area()));
        }
    }
}

fn popup_area(area: Rect) -> Rect {
    let [area] = Layout::vertical([Constraint::Max(18)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Max(60)])
        .flex(Flex::Center)
        .areas(area);
    area
}

fn spawn_fetch(client: &CatalogClient, spec: FetchSpec, tx: mpsc::UnboundedSender<FetchOutcome>) {
    let client = client.clone();
    tokio::spawn(async move {
        let result = client.fetch_books(&spec.target.list, spec.target.offset).await;
        // receiver gone means the app is shutting down
        let _ = tx.send(FetchOutcome { spec, result });
    });
}
