//! Toast Notification State
//!
//! A single floating message. A newer message replaces the text and
//! restarts the hide countdown; messages are never queued.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toast {
    message: String,
    visible: bool,
    generation: u64,
}

impl Toast {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show `message`; returns the generation to pass to `expire`
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.message = message.into();
        self.visible = true;
        self.generation += 1;
        self.generation
    }

    /// Hide, unless a newer message was shown since `generation`
    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.visible = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_expire() {
        let mut toast = Toast::default();
        let gen = toast.show("📋 3 pedidos cargados");
        assert!(toast.is_visible());
        toast.expire(gen);
        assert!(!toast.is_visible());
        assert_eq!(toast.message(), "📋 3 pedidos cargados");
    }

    #[test]
    fn test_newer_message_restarts_timer() {
        let mut toast = Toast::default();
        let first = toast.show("primero");
        let second = toast.show("segundo");

        toast.expire(first);
        assert!(toast.is_visible());
        assert_eq!(toast.message(), "segundo");

        toast.expire(second);
        assert!(!toast.is_visible());
    }
}
