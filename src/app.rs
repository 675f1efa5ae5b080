use crate::config::Config;
use crate::error::HuntError;
use crate::event::AppEvent;
use crate::github::record::RepoRecord;
use crate::github::search::Page;
use crate::session::{PageRequest, SearchSession};
use crate::ui::{
    card_list::{self, CardList},
    help_panel::HelpPanel,
    input::{self, Action},
    status_bar::StatusBar,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// One displayed result. The detail toggle is per-card state and never
/// shared between cards.
#[derive(Debug)]
pub struct Card {
    pub record: RepoRecord,
    pub expanded: bool,
}

/// State of the load-more affordance rendered after the last card.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadMore {
    Hidden,
    Visible,
    Loading,
    Exhausted,
    Failed(String),
}

pub struct App {
    pub session: SearchSession,
    pub cards: Vec<Card>,
    pub load_more: LoadMore,

    pub selected: usize,
    pub scroll: usize,
    pub search_mode: bool,
    pub search_text: String,
    pub show_help: bool,
    pub should_quit: bool,

    pending_fetch: Option<PageRequest>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            session: SearchSession::new(config.default_query.clone(), config.page_size),
            cards: Vec::new(),
            load_more: LoadMore::Hidden,
            selected: 0,
            scroll: 0,
            search_mode: false,
            search_text: config.default_query.clone(),
            show_help: false,
            should_quit: false,
            pending_fetch: None,
        }
    }

    /// Fetch request recorded by the last action, if any. The main loop takes
    /// it and spawns the network call; results come back as events.
    pub fn take_pending_fetch(&mut self) -> Option<PageRequest> {
        self.pending_fetch.take()
    }

    /// Start a new search. The term is passed through verbatim, empty or not.
    pub fn submit_search(&mut self, term: &str) {
        self.session.reset(term);
        self.cards.clear();
        self.selected = 0;
        self.scroll = 0;
        self.load_more = LoadMore::Loading;
        self.pending_fetch = Some(self.session.request());
    }

    /// Request the next page. Ignored while a fetch is in flight, before the
    /// first search, and after exhaustion; valid from Visible and Failed
    /// (retry).
    fn request_more(&mut self) {
        if matches!(self.load_more, LoadMore::Visible | LoadMore::Failed(_)) {
            self.load_more = LoadMore::Loading;
            self.pending_fetch = Some(self.session.request());
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => {
                let action = input::map_key(key, self.search_mode);
                self.handle_action(action);
            }
            AppEvent::Resize => {}
            AppEvent::FetchDone { generation, result } => self.on_fetch_done(generation, result),
        }
    }

    fn on_fetch_done(&mut self, generation: u64, result: Result<Page, HuntError>) {
        // Completion of a fetch issued before a reset: drop it, the record
        // list belongs to the new search now.
        if generation != self.session.generation() {
            return;
        }
        match result {
            Ok(page) => {
                self.session.apply(generation, page.has_more);
                self.cards.extend(
                    page.records
                        .into_iter()
                        .map(|record| Card { record, expanded: false }),
                );
                self.load_more = if self.session.exhausted() {
                    LoadMore::Exhausted
                } else {
                    LoadMore::Visible
                };
            }
            Err(e) => {
                self.load_more = LoadMore::Failed(e.to_string());
            }
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => {
                if self.selected + 1 < self.cards.len() {
                    self.selected += 1;
                }
            }
            Action::ScrollUp => {
                self.selected = self.selected.saturating_sub(1);
            }
            Action::ToggleDetail => {
                if let Some(card) = self.cards.get_mut(self.selected) {
                    card.expanded = !card.expanded;
                }
            }
            Action::LoadMore => self.request_more(),
            Action::Search => self.search_mode = true,
            Action::SearchChar(c) => self.search_text.push(c),
            Action::SearchBackspace => {
                self.search_text.pop();
            }
            Action::SearchConfirm => {
                self.search_mode = false;
                let term = self.search_text.clone();
                self.submit_search(&term);
            }
            Action::SearchCancel => {
                self.search_mode = false;
                self.search_text = self.session.query().to_string();
            }
            Action::OpenRepo => {
                if let Some(card) = self.cards.get(self.selected) {
                    if !card.record.url.is_empty() {
                        let _ = open::that(&card.record.url);
                    }
                }
            }
            Action::Help => self.show_help = !self.show_help,
            Action::ClosePopup => self.show_help = false,
            Action::None => {}
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(size);

        self.ensure_scroll_bounds(chunks[0]);

        let list = CardList {
            cards: &self.cards,
            selected: self.selected,
            scroll: self.scroll,
            load_more: &self.load_more,
            focused: !self.search_mode,
        };
        frame.render_widget(list, chunks[0]);

        let status = StatusBar {
            query: self.session.query(),
            shown: self.cards.len(),
            load_more: &self.load_more,
            search_mode: self.search_mode,
            search_text: &self.search_text,
        };
        frame.render_widget(status, chunks[1]);

        if self.show_help {
            frame.render_widget(HelpPanel, size);
        }
    }

    fn ensure_scroll_bounds(&mut self, area: Rect) {
        if self.cards.is_empty() {
            self.scroll = 0;
            return;
        }
        self.selected = self.selected.min(self.cards.len() - 1);
        if self.selected < self.scroll {
            self.scroll = self.selected;
            return;
        }
        if area.height == 0 {
            return;
        }
        let text_w = area.width.saturating_sub(4) as usize;
        // advance until the selected card fits in the viewport
        while self.scroll < self.selected {
            let used: u16 = self.cards[self.scroll..=self.selected]
                .iter()
                .map(|c| card_list::card_height(c, text_w))
                .sum();
            if used <= area.height {
                break;
            }
            self.scroll += 1;
        }
    }
}
