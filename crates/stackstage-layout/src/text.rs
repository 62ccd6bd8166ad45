//! Fixed-box text fitting.
//!
//! There is no font measurement here: glyphs are assumed to average half an
//! em wide. Text that would overrun its box is cut and ellipsized; the
//! emitter also clips every run to its box.

/// Average glyph advance as a fraction of the font size.
pub const AVG_GLYPH_EM: f32 = 0.5;

const ELLIPSIS: &str = "...";

/// Estimated advance width of `text` at `size` points.
pub fn approx_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_GLYPH_EM
}

/// Maximum number of characters that fit in `width` at `size`.
pub fn max_chars(width: f32, size: f32) -> usize {
    if !(width > 0.0 && size > 0.0) {
        return 0;
    }
    (width / (size * AVG_GLYPH_EM)).floor() as usize
}

/// Cut `text` so it fits in `width` at `size`, ending in "..." when cut.
pub fn fit_text(text: &str, width: f32, size: f32) -> String {
    let limit = max_chars(width, size);
    let count = text.chars().count();
    if count <= limit {
        return text.to_string();
    }
    if limit <= ELLIPSIS.len() {
        return text.chars().take(limit).collect();
    }
    let mut out: String = text.chars().take(limit - ELLIPSIS.len()).collect();
    out.truncate(out.trim_end().len());
    out.push_str(ELLIPSIS);
    out
}

/// Keep the last `n` characters of an identifier.
pub fn tail_chars(text: &str, n: usize) -> String {
    let count = text.chars().count();
    text.chars().skip(count.saturating_sub(n)).collect()
}
