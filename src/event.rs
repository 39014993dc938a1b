use crate::error::Result;
use crate::github::types::Repository;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
    FetchResult(Result<Vec<Repository>>),
}
