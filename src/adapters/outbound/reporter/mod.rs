mod logger;

use crate::adapters::outbound::reporter::logger::LogReporter;
use crate::ports::outbound::reporter::Reporter;

#[must_use]
pub fn init_reporter() -> impl Reporter {
    LogReporter::create()
}
