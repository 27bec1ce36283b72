use std::time::Instant;

/// Milliseconds elapsed since `start`, with sub-millisecond precision.
/// A request that was never stamped reports 0.
pub fn elapsed_ms(start: Option<Instant>) -> f64 {
    match start {
        Some(s) => s.elapsed().as_secs_f64() * 1000.0,
        None => 0.0,
    }
}
