//! Deterministic series colours.

/// Fixed colours for the ten best-ranked series.
pub const PALETTE: [&str; 10] = [
    "#0033a0", "#dc3545", "#28a745", "#6f42c1", "#f39c12", "#16a085", "#8e44ad", "#e91e63",
    "#2c3e50", "#ff6f00",
];

/// Hue step for series beyond the palette.
const HUE_STEP: usize = 47;
/// Alpha suffix appended to palette colours for the area fill (0x33 = 20%).
const FILL_ALPHA_HEX: &str = "33";

/// Line and fill colour of one series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesColor {
    pub line: String,
    pub fill: String,
}

/// Colour for the series at rank `index`. Pure function of the index.
#[must_use]
pub fn series_color(index: usize) -> SeriesColor {
    match PALETTE.get(index) {
        Some(hex) => SeriesColor {
            line: (*hex).to_string(),
            fill: format!("{hex}{FILL_ALPHA_HEX}"),
        },
        None => {
            let hue = generated_hue(index);
            SeriesColor {
                line: format!("hsl({hue}, 70%, 45%)"),
                fill: format!("hsla({hue}, 70%, 45%, 0.2)"),
            }
        }
    }
}

/// Hue in degrees for a generated colour.
#[must_use]
pub fn generated_hue(index: usize) -> usize {
    (index * HUE_STEP) % 360
}
