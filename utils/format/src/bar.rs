const PARTIAL_BLOCKS: [char; 8] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

/// Draws `value` columns worth of horizontal bar.
///
/// The integer part becomes full blocks; the first decimal digit picks one
/// trailing partial block, so every bar (even zero) is at least one glyph.
pub fn horizontal_bar(value: f64) -> String {
    let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
    let whole = value.floor();
    let tenths = ((value - whole) * 10.0).floor();
    let idx = ((tenths / 10.0 * 8.0) as usize).min(PARTIAL_BLOCKS.len() - 1);

    let mut bar = "█".repeat(whole as usize);
    bar.push(PARTIAL_BLOCKS[idx]);
    bar
}
