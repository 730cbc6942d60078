//! Built-in default configuration (all sizes in SVG user units)

use serde_json::{Value, json};

pub const FONT_SIZE: f64 = 14.0;
pub const CHAR_WIDTH: f64 = 0.6;
pub const LINE_HEIGHT: f64 = 1.25;

pub const LEADERLINE_STYLE: &str = "curved";
pub const LEADERLINE_DIRECTION: &str = "hh";

pub const BODY_GAP: f64 = 4.0;
pub const BODY_WIDTH: f64 = 80.0;
pub const BODY_HEIGHT: f64 = 26.0;
pub const BODY_CORNER_RADIUS: f64 = 3.0;

pub const PANEL_INSET: [f64; 4] = [5.0, 5.0, 5.0, 5.0];
pub const PANEL_CORNER_RADIUS: f64 = 0.0;

pub const LEGEND_ENTRY_HEIGHT: f64 = 22.0;
pub const LEGEND_SWATCH_SIZE: f64 = 14.0;
pub const LEGEND_GAP: f64 = 6.0;
pub const LEGEND_COLUMN_WIDTH: f64 = 120.0;

pub const ANNOTATION_MARKER_SIZE: f64 = 6.0;
pub const ANNOTATION_PADDING: f64 = 6.0;
pub const ANNOTATION_BODY_WIDTH: f64 = 160.0;

pub const FOOTPRINT_LEG_LENGTH: f64 = 6.0;
pub const FOOTPRINT_LEG_WIDTH: f64 = 2.0;
pub const FOOTPRINT_MARKER_SIZE: f64 = 4.0;

/// The configuration tree every [`Config`](super::Config) starts from.
///
/// `text` and `leaderline` live at the top level only, so patching them
/// reaches every section that does not set its own.
pub fn default_config() -> Value {
    let text = json!({
        "font_size": FONT_SIZE,
        "char_width": CHAR_WIDTH,
        "line_height": LINE_HEIGHT,
    });
    json!({
        "strict": true,
        "text": text,
        "leaderline": {
            "style": LEADERLINE_STYLE,
            "direction": LEADERLINE_DIRECTION,
        },
        "pinlabel": {
            "body": {
                "x": BODY_GAP,
                "width": BODY_WIDTH,
                "height": BODY_HEIGHT,
                "corner_radius": BODY_CORNER_RADIUS,
            },
            "tags": {},
        },
        "panel": {
            "inset": PANEL_INSET,
            "corner_radius": PANEL_CORNER_RADIUS,
        },
        "legend": {
            "entry_height": LEGEND_ENTRY_HEIGHT,
            "swatch_size": LEGEND_SWATCH_SIZE,
            "gap": LEGEND_GAP,
            "column_width": LEGEND_COLUMN_WIDTH,
            "rows_per_column": null,
            "inset": PANEL_INSET,
        },
        "annotation": {
            "marker_size": ANNOTATION_MARKER_SIZE,
            "padding": ANNOTATION_PADDING,
            "body": {
                "width": ANNOTATION_BODY_WIDTH,
                "corner_radius": BODY_CORNER_RADIUS,
            },
            "leaderline": {
                "style": "angled",
                "direction": "vh",
            },
        },
        "footprint": {
            "leg_length": FOOTPRINT_LEG_LENGTH,
            "leg_width": FOOTPRINT_LEG_WIDTH,
            "marker_size": FOOTPRINT_MARKER_SIZE,
        },
    })
}
