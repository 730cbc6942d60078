//! Configuration tree and typed per-component sections
//!
//! [`Config`] wraps a JSON value tree seeded from [`defaults::default_config`].
//! Callers patch it with [`Config::deep_merge`]: nested objects merge key by
//! key, any other value replaces what was there. Components never read the
//! tree directly; they ask for a resolved, typed section:
//!
//! ```
//! use pinout::config::{Config, PinLabelConfig};
//! use serde_json::json;
//!
//! let mut config = Config::new();
//! config.deep_merge(&json!({ "pinlabel": { "tags": { "gnd": { "body": { "width": 40 } } } } }));
//!
//! let gnd: PinLabelConfig = config.section("pinlabel", Some("gnd"), None).unwrap();
//! assert_eq!(gnd.body.width, 40.0);
//! ```
//!
//! The top-level `leaderline` and `text` entries are shared by every
//! section. A section's own keys take precedence over them.
//!
//! Keys a section does not recognise are ignored.

pub mod defaults;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::{BuildError, Result};

/// Top-level entries layered beneath every section.
const SHARED_SECTIONS: [&str; 2] = ["leaderline", "text"];

#[derive(Debug, Clone, PartialEq)]
pub struct Config(Value);

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Built-in defaults.
    pub fn new() -> Self {
        Self(defaults::default_config())
    }

    /// A tree with no keys at all; every section falls back to its
    /// `Default` values.
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn get(&self, dotted_path: &str) -> Option<&Value> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        Some(cur)
    }

    pub fn get_str(&self, dotted_path: &str) -> Option<&str> {
        self.get(dotted_path)?.as_str()
    }

    pub fn get_f64(&self, dotted_path: &str) -> Option<f64> {
        self.get(dotted_path)?.as_f64()
    }

    pub fn get_bool(&self, dotted_path: &str) -> Option<bool> {
        self.get(dotted_path)?.as_bool()
    }

    /// Whether unknown leaderline codes are errors (the default) or are
    /// logged and drawn as empty paths.
    pub fn strict(&self) -> bool {
        self.get_bool("strict").unwrap_or(true)
    }

    /// Set the value at `dotted_path`, creating missing objects on the way.
    ///
    /// Fails rather than overwrite a non-object value in the middle of the
    /// path, so `set_value("strict.x", ..)` never discards `strict`.
    pub fn set_value(&mut self, dotted_path: &str, value: Value) -> Result<()> {
        let path_error = |segment: &str| BuildError::ConfigPath {
            path: dotted_path.to_string(),
            segment: segment.to_string(),
        };
        let Value::Object(root) = &mut self.0 else {
            return Err(path_error(""));
        };
        let (parents, leaf) = match dotted_path.rsplit_once('.') {
            Some((parents, leaf)) => (Some(parents), leaf),
            None => (None, dotted_path),
        };
        if leaf.is_empty() {
            return Err(path_error(leaf));
        }

        let mut cur = root;
        for segment in parents.into_iter().flat_map(|p| p.split('.')) {
            if segment.is_empty() {
                return Err(path_error(segment));
            }
            let slot = cur
                .entry(segment)
                .or_insert_with(|| Value::Object(Map::new()));
            cur = match slot {
                Value::Object(next) => next,
                _ => return Err(path_error(segment)),
            };
        }
        cur.insert(leaf.to_string(), value);
        Ok(())
    }

    pub fn deep_merge(&mut self, other: &Value) {
        deep_merge_value(&mut self.0, other);
    }

    /// Builder-style [`deep_merge`](Self::deep_merge).
    pub fn patched(mut self, other: &Value) -> Self {
        self.deep_merge(other);
        self
    }

    /// Resolve section `name` into `T`.
    ///
    /// Layers, last wins: the shared top-level `leaderline` and `text`
    /// entries, the section as currently patched, its `tags.<tag>` entry,
    /// then `overrides`.
    pub fn section<T: DeserializeOwned>(
        &self,
        name: &str,
        tag: Option<&str>,
        overrides: Option<&Value>,
    ) -> Result<T> {
        let shared: Map<String, Value> = SHARED_SECTIONS
            .iter()
            .filter_map(|key| Some((key.to_string(), self.get(key)?.clone())))
            .collect();
        let mut resolved = Value::Object(shared);
        if let Some(own) = self.get(name) {
            deep_merge_value(&mut resolved, own);
        }
        if let Some(tagged) = tag.and_then(|t| self.get(name)?.get("tags")?.get(t)) {
            deep_merge_value(&mut resolved, tagged);
        }
        if let Some(overrides) = overrides {
            deep_merge_value(&mut resolved, overrides);
        }
        serde_json::from_value(resolved).map_err(|source| BuildError::InvalidConfig {
            section: match tag {
                Some(t) => format!("{name} (tag {t})"),
                None => name.to_string(),
            },
            source,
        })
    }
}

/// Patch `base` with `incoming`: objects merge key-wise, anything else
/// (scalars, arrays, null) replaces the base value.
pub fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => {
            for (key, in_value) in in_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, in_value),
                    None => {
                        base_map.insert(key.clone(), in_value.clone());
                    }
                }
            }
        }
        (base_slot, in_value) => {
            *base_slot = in_value.clone();
        }
    }
}

// ============================================================================
// Typed sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub font_size: f64,
    /// Average glyph advance as a fraction of `font_size`
    pub char_width: f64,
    /// Baseline distance as a multiple of `font_size`
    pub line_height: f64,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_size: defaults::FONT_SIZE,
            char_width: defaults::CHAR_WIDTH,
            line_height: defaults::LINE_HEIGHT,
        }
    }
}

/// Unparsed leaderline settings; validated by the leaderline component.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LeaderlineConfig {
    pub style: String,
    pub direction: String,
}

impl Default for LeaderlineConfig {
    fn default() -> Self {
        Self {
            style: defaults::LEADERLINE_STYLE.to_string(),
            direction: defaults::LEADERLINE_DIRECTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    /// Horizontal gap between chained labels in a row
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            x: defaults::BODY_GAP,
            width: defaults::BODY_WIDTH,
            height: defaults::BODY_HEIGHT,
            corner_radius: defaults::BODY_CORNER_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PinLabelConfig {
    pub body: BodyConfig,
    pub leaderline: LeaderlineConfig,
    pub text: TextConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// `[top, right, bottom, left]`
    pub inset: [f64; 4],
    pub corner_radius: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            inset: defaults::PANEL_INSET,
            corner_radius: defaults::PANEL_CORNER_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub entry_height: f64,
    pub swatch_size: f64,
    /// Space between a swatch and its label
    pub gap: f64,
    pub column_width: f64,
    /// Start a new column after this many entries; `None` keeps one column.
    pub rows_per_column: Option<usize>,
    pub inset: [f64; 4],
    pub text: TextConfig,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            entry_height: defaults::LEGEND_ENTRY_HEIGHT,
            swatch_size: defaults::LEGEND_SWATCH_SIZE,
            gap: defaults::LEGEND_GAP,
            column_width: defaults::LEGEND_COLUMN_WIDTH,
            rows_per_column: None,
            inset: defaults::PANEL_INSET,
            text: TextConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnnotationBodyConfig {
    pub width: f64,
    pub corner_radius: f64,
}

impl Default for AnnotationBodyConfig {
    fn default() -> Self {
        Self {
            width: defaults::ANNOTATION_BODY_WIDTH,
            corner_radius: defaults::BODY_CORNER_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
    pub marker_size: f64,
    /// Space between the body outline and its text
    pub padding: f64,
    pub body: AnnotationBodyConfig,
    pub leaderline: LeaderlineConfig,
    pub text: TextConfig,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            marker_size: defaults::ANNOTATION_MARKER_SIZE,
            padding: defaults::ANNOTATION_PADDING,
            body: AnnotationBodyConfig::default(),
            leaderline: LeaderlineConfig {
                style: "angled".to_string(),
                direction: "vh".to_string(),
            },
            text: TextConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FootprintConfig {
    pub leg_length: f64,
    pub leg_width: f64,
    pub marker_size: f64,
}

impl Default for FootprintConfig {
    fn default() -> Self {
        Self {
            leg_length: defaults::FOOTPRINT_LEG_LENGTH,
            leg_width: defaults::FOOTPRINT_LEG_WIDTH,
            marker_size: defaults::FOOTPRINT_MARKER_SIZE,
        }
    }
}
