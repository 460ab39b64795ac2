//! Subscription to the extension's rewards and notification events.
//!
//! Each event is delivered as an [`ActionMessage`] whose kind matches the reducer's action
//! names, for example `ON_NOTIFICATION_ADDED` with `{id, type, timestamp, args}`.

use std::rc::Rc;

use panel_host::ActionMessage;

use crate::bridge;

/// Receiver for decoded extension events.
pub type ActionSink = Rc<dyn Fn(ActionMessage)>;

/// Registers listeners for wallet, publisher, report, and notification events.
///
/// # Errors
///
/// Returns an error when the extension namespaces are unavailable, which is always the case
/// outside a `wasm32` extension page.
pub fn install_event_listeners(sink: ActionSink) -> Result<(), String> {
    bridge::subscribe_events(Box::new(move |message| sink(message)))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn listeners_are_not_installed_outside_the_extension() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink_received = Rc::clone(&received);
        let sink: ActionSink = Rc::new(move |message| sink_received.borrow_mut().push(message));

        assert!(install_event_listeners(sink).is_err());
        assert!(received.borrow().is_empty());
    }
}
