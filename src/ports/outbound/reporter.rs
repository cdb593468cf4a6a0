#[cfg(test)]
use mockall::automock;

/// Where the disk store sends diagnostics. Reporting never affects control flow.
#[cfg_attr(test, automock)]
pub trait Reporter {
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}
