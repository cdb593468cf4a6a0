use crate::ports::outbound::reporter::Reporter;

const TARGET: &str = "image_disk";

pub struct LogReporter;

impl LogReporter {
    pub fn create() -> Self {
        Self
    }
}

impl Reporter for LogReporter {
    fn warn(&self, message: &str) {
        log::warn!(target: TARGET, "{message}");
    }

    fn error(&self, message: &str) {
        log::error!(target: TARGET, "{message}");
    }
}
