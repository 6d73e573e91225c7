//! Degree formatting for in-sign positions.

/// Renders a degree-in-sign as `D°MM'`.
///
/// Minutes are truncated, never rounded, so the output never shows `60'`.
pub fn format_position(degrees: f64) -> String {
    let whole = degrees.floor();
    let minutes = ((degrees - whole) * 60.0).floor().clamp(0.0, 59.0) as u32;
    format!("{}°{:02}'", whole as i64, minutes)
}
