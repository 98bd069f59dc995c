//! Single-line text input with change notifications
//!
//! Listeners call [`TextInput::subscribe`] once and receive the full content
//! after every edit that actually changes it. Cursor movement and edits that
//! leave the text untouched send nothing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::trace;
use std::sync::mpsc::{channel, Receiver, Sender};

#[derive(Debug, Default)]
pub struct TextInput {
    chars: Vec<char>,
    /// Cursor position, in chars, between 0 and `chars.len()`
    cursor: usize,
    subscribers: Vec<Sender<String>>,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for content changes
    pub fn subscribe(&mut self) -> Receiver<String> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Characters before the cursor
    pub fn before_cursor(&self) -> &[char] {
        &self.chars[..self.cursor]
    }

    /// Replace the whole content and park the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.cursor = self.chars.len();
        self.notify();
    }

    /// Insert pasted text at the cursor. Line breaks become spaces.
    pub fn insert_str(&mut self, text: &str) {
        let pasted: Vec<char> = text
            .replace("\r\n", " ")
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        if pasted.is_empty() {
            return;
        }
        let tail = self.chars.split_off(self.cursor);
        self.cursor += pasted.len();
        self.chars.extend(pasted);
        self.chars.extend(tail);
        self.notify();
    }

    /// Apply one key press. Returns false when the key is not an editing key.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => {
                if self.cursor > 0 {
                    self.chars.drain(..self.cursor);
                    self.cursor = 0;
                    self.notify();
                }
            }
            KeyCode::Char('k') if ctrl => {
                if self.cursor < self.chars.len() {
                    self.chars.truncate(self.cursor);
                    self.notify();
                }
            }
            KeyCode::Char(_) if ctrl => return false,
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Tab => self.insert('\t'),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.chars.remove(self.cursor);
                    self.notify();
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.chars.len() {
                    self.chars.remove(self.cursor);
                    self.notify();
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            _ => return false,
        }
        true
    }

    fn insert(&mut self, c: char) {
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
        self.notify();
    }

    fn notify(&mut self) {
        let text = self.text();
        trace!("input changed ({} chars)", self.chars.len());
        // A dropped receiver just unsubscribes
        self.subscribers.retain(|tx| tx.send(text.clone()).is_ok());
    }
}
