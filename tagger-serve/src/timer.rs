use chrono::{DateTime, Utc};
use log::info;

/// Wall-clock stopwatch for the load and inference paths, reported at
/// `info` level when stopped.
pub struct Timer {
    label: String,
    started: DateTime<Utc>,
}

impl Timer {
    /// Start timing `label`.
    pub fn start(label: &str) -> Self {
        Timer {
            label: label.to_owned(),
            started: Utc::now(),
        }
    }

    /// Stop the stopwatch, log the elapsed time and return it in
    /// milliseconds.
    pub fn stop(self) -> i64 {
        let elapsed = (Utc::now() - self.started).num_milliseconds();
        info!("{}: {} msec", self.label, elapsed);
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_time_is_not_negative() {
        let timer = Timer::start("noop");
        assert!(timer.stop() >= 0);
    }
}
