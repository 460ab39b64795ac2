//! Toolbar badge display contracts.

use std::{cell::RefCell, rc::Rc};

/// Host service for the numeric overlay on the extension's toolbar icon.
///
/// Badge updates are synchronous UI writes; an empty string clears the badge.
pub trait BadgeService {
    /// Replaces the badge text.
    fn set_badge_text(&self, text: &str) -> Result<(), String>;
}

/// Formats a notification count as badge text: the decimal count, or empty when zero.
pub fn badge_text_for_count(count: usize) -> String {
    if count > 0 {
        count.to_string()
    } else {
        String::new()
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op badge service for unsupported targets.
pub struct NoopBadgeService;

impl BadgeService for NoopBadgeService {
    fn set_badge_text(&self, _text: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory badge that keeps every text it was given.
pub struct MemoryBadgeService {
    history: Rc<RefCell<Vec<String>>>,
}

impl MemoryBadgeService {
    /// Returns the most recently displayed text, if any update happened.
    pub fn current_text(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }

    /// Returns every update in order.
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl BadgeService for MemoryBadgeService {
    fn set_badge_text(&self, text: &str) -> Result<(), String> {
        self.history.borrow_mut().push(text.to_string());
        Ok(())
    }
}
