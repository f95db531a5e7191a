//! Horizontal progress bars drawn with Unicode block elements. Every cell can be filled in eighths,
//! which gives 8 times the resolution of whole characters.

/// From empty to full. Index is the number of filled eighths.
const BLOCKS: [char; 9] = ['░', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

const EMPTY: char = BLOCKS[0];
const FULL: char = BLOCKS[8];

/// Renders `percent` as a bar that is exactly `size` characters wide.
pub fn render_bar(percent: f64, size: usize) -> String {
    // Float to integer casts saturate, so negative input ends up as an empty bar.
    let frac = (size as f64 * 8. * percent / 100.).floor() as usize;
    let bars_full = frac / 8;
    if bars_full >= size {
        return FULL.to_string().repeat(size);
    }
    let semi = frac % 8;

    let mut bar = FULL.to_string().repeat(bars_full);
    bar.push(BLOCKS[semi]);
    bar.extend(std::iter::repeat(EMPTY).take(size - bars_full - 1));
    bar
}
