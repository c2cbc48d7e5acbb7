//! # Navigation Collaborator
//!
//! The kiosk backend never drives the screen itself; after an order is
//! placed (or the customer backs out) it tells the shell where to go next
//! through this seam.
//!
//! ```text
//! place_order ──► navigator.go_to("/") ──► shell swaps the webview route
//! ```
//!
//! Keeping navigation behind a trait keeps `place_order` testable without a
//! shell: tests inject [`RecordingNavigator`] and assert on the routes.

use std::sync::Mutex;
use tracing::info;

/// Route the kiosk returns to after a completed order.
pub const HOME_ROUTE: &str = "/";

/// Navigation collaborator the embedding shell implements.
pub trait Navigator: Send + Sync {
    /// Requests a transition to `route`.
    fn go_to(&self, route: &str);
}

/// Navigator that publishes transitions to the log stream.
///
/// Shells that tail the structured log (the dev shell does) can react to
/// these events directly; production shells supply their own impl.
#[derive(Debug, Default)]
pub struct ShellNavigator;

impl Navigator for ShellNavigator {
    fn go_to(&self, route: &str) {
        info!(route = %route, "Navigation requested");
    }
}

/// Navigator fake that records every requested route. For tests.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the routes requested so far, oldest first.
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().expect("Navigator mutex poisoned").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, route: &str) {
        self.routes
            .lock()
            .expect("Navigator mutex poisoned")
            .push(route.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_navigator_keeps_order() {
        let nav = RecordingNavigator::new();
        nav.go_to("/checkout");
        nav.go_to(HOME_ROUTE);

        assert_eq!(nav.routes(), vec!["/checkout".to_string(), "/".to_string()]);
    }
}
