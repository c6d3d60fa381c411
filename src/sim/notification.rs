//! Single-slot transient message
//!
//! Not a queue: setting a message while one is showing replaces it.

/// A message currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub text: String,
    /// Font size in logical pixels
    pub size: u32,
    /// Seconds since shown
    pub timer: f64,
    /// Seconds to stay visible
    pub duration: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notification {
    slot: Option<Message>,
}

impl Notification {
    /// Show `text`, replacing whatever was showing
    pub fn set(&mut self, text: impl Into<String>, size: u32, duration: f64) {
        self.slot = Some(Message {
            text: text.into(),
            size,
            timer: 0.0,
            duration,
        });
    }

    /// Age the message by `dt` and clear it once expired
    pub fn update(&mut self, dt: f64) {
        if let Some(message) = &mut self.slot {
            message.timer += dt;
            if message.timer >= message.duration {
                self.slot = None;
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.slot.is_some()
    }

    pub fn current(&self) -> Option<&Message> {
        self.slot.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.slot.as_ref().map(|m| m.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_duration() {
        let mut n = Notification::default();
        n.set("Show time: On", 16, 1.0);
        n.update(0.5);
        assert_eq!(n.text(), Some("Show time: On"));
        n.update(0.5);
        assert!(!n.is_active());
    }

    #[test]
    fn test_new_message_preempts_old() {
        let mut n = Notification::default();
        n.set("first", 16, 2.0);
        n.update(1.5);
        n.set("second", 12, 1.0);

        let message = n.current().unwrap();
        assert_eq!(message.text, "second");
        assert_eq!(message.size, 12);
        assert_eq!(message.timer, 0.0);

        // The old message never comes back, even after the new one expires
        n.update(1.0);
        assert_eq!(n.text(), None);
        n.update(10.0);
        assert_eq!(n.text(), None);
    }

    #[test]
    fn test_update_on_empty_slot_is_noop() {
        let mut n = Notification::default();
        n.update(1.0);
        assert_eq!(n, Notification::default());
    }
}
