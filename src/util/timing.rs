//! wall-clock timing helpers
use std::time::{Duration, Instant};

/// runs `f` and returns its output together with the elapsed time
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let output = f();
    (output, start.elapsed())
}

/// formats a duration as `{secs}.{millis} seconds`
pub fn format_seconds(elapsed: Duration) -> String {
    format!(
        "{}.{:03} seconds",
        elapsed.as_secs(),
        elapsed.subsec_millis()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_millisecond_padding() {
        assert_eq!(format_seconds(Duration::from_millis(1_005)), "1.005 seconds");
        assert_eq!(format_seconds(Duration::from_millis(42)), "0.042 seconds");
    }

    #[test]
    fn timed_returns_the_output() {
        let (value, elapsed) = timed(|| 6 * 7);
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(1));
    }
}
