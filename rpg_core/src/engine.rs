//! EngineSink - The boundary the combat protocol reports into
//!
//! The driving loop supplies an implementation; the core only posts
//! messages, adjusts the score and clears the `working` flag on game over.

/// Notification, scoring and run-state collaborator supplied by the driver
pub trait EngineSink {
    /// Queue a message for display, in call order
    fn notify(&mut self, message: &str);

    fn score(&self) -> f64;

    fn set_score(&mut self, score: f64);

    fn add_score(&mut self, amount: f64) {
        let score = self.score();
        self.set_score(score + amount);
    }

    /// False once the game is over
    fn is_working(&self) -> bool;

    fn set_working(&mut self, working: bool);
}

/// In-memory sink collecting messages
#[derive(Debug, Clone, PartialEq)]
pub struct MessageLog {
    pub messages: Vec<String>,
    pub score: f64,
    pub working: bool,
}

impl Default for MessageLog {
    fn default() -> Self {
        MessageLog {
            messages: Vec::new(),
            score: 0.0,
            working: true,
        }
    }
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all queued messages, oldest first
    pub fn drain_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl EngineSink for MessageLog {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn set_score(&mut self, score: f64) {
        self.score = score;
    }

    fn is_working(&self) -> bool {
        self.working
    }

    fn set_working(&mut self, working: bool) {
        self.working = working;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_log_defaults() {
        let log = MessageLog::new();
        assert!(log.messages.is_empty());
        assert!(log.working);
        assert!(log.score.abs() < f64::EPSILON);
    }

    #[test]
    fn test_add_score_default_method() {
        let mut log = MessageLog::new();
        log.add_score(2.5);
        log.add_score(-0.5);
        assert!((log.score() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_drain_keeps_order() {
        let mut log = MessageLog::new();
        log.notify("first");
        log.notify("second");
        assert_eq!(log.drain_messages(), vec!["first", "second"]);
        assert!(log.messages.is_empty());
    }
}
