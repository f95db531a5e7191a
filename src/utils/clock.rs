use chrono::{DateTime, Local};

/// Represents an entity responsible for providing dates across application. This can allow it to
/// be used for testing and for previewing reports at another date.
pub trait Clock: Sync + Send {
    fn time(&self) -> DateTime<Local>;
}

pub struct DefaultClock;

impl Clock for DefaultClock {
    fn time(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same moment.
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn time(&self) -> DateTime<Local> {
        self.0
    }
}
