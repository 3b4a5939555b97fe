//! Text helpers

/// Repeat `unit` `count` times.
pub fn repeat(unit: &str, count: usize) -> String {
    unit.repeat(count)
}
