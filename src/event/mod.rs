pub mod input;

use crate::catalog::loader::LoadOutcome;

#[derive(Debug)]
pub enum Event {
    Key(crossterm::event::KeyEvent),
    Resize(u16, u16),
    CatalogLoaded(LoadOutcome),
}
