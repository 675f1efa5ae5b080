use crate::error::HuntError;
use crate::github::search::Page;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    /// A page fetch finished. `generation` is the search generation the fetch
    /// was issued under; results from a superseded search are discarded.
    FetchDone {
        generation: u64,
        result: std::result::Result<Page, HuntError>,
    },
}
