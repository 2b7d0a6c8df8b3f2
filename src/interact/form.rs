//! Submit state for newsletter and contact forms.

use std::time::Duration;

use indexmap::IndexMap;
use tokio::sync::watch;

use crate::interact::timer::Delay;

/// How long the confirmation shows before the form resets.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

/// Form state with a timed reset.
///
/// Submitting clears the typed field values, shows the confirmation,
/// and schedules the flip back to the blank form. Submitting again
/// while the confirmation is up restarts the clock rather than queueing
/// a second reset. Dropping the controller cancels the pending reset.
#[derive(Debug)]
pub struct SubmitReset {
    fields: IndexMap<String, String>,
    submitted: watch::Sender<bool>,
    delay: Delay,
}

impl SubmitReset {
    /// Creates a blank, unsubmitted form.
    #[must_use]
    pub fn new() -> Self {
        let (submitted, _) = watch::channel(false);
        Self {
            fields: IndexMap::new(),
            submitted,
            delay: Delay::new(RESET_DELAY),
        }
    }

    /// Records typed input for a named field.
    pub fn set_field(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }

    /// The current value of a field, empty if never typed into.
    #[must_use]
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }

    /// Returns `true` while the confirmation is showing.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        *self.submitted.borrow()
    }

    /// Subscribes to submitted-state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.submitted.subscribe()
    }

    /// Submits the form: clears the fields, flips to the confirmation,
    /// and schedules the reset.
    pub fn submit(&mut self) {
        self.fields.clear();
        self.submitted.send_replace(true);

        let submitted = self.submitted.clone();
        self.delay.start(move || {
            submitted.send_replace(false);
        });
    }
}

impl Default for SubmitReset {
    fn default() -> Self {
        Self::new()
    }
}
