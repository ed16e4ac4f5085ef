use crossbeam_channel::Sender;
use crossterm::event::{self, Event as CtEvent, KeyEventKind};
use std::time::Duration;

use super::Event;

pub fn spawn_input_thread(tx: Sender<Event>) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || loop {
        if event::poll(Duration::from_millis(100)).unwrap_or(false) {
            let sent = match event::read() {
                Ok(CtEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    tx.send(Event::Key(key))
                }
                Ok(CtEvent::Resize(w, h)) => tx.send(Event::Resize(w, h)),
                _ => Ok(()),
            };
            if sent.is_err() {
                break;
            }
        }
    })
}
