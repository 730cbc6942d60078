//! Pin labels: rows of tagged callouts chained off header pins

use serde_json::Value;

use super::leaderline::Leaderline;
use crate::config::{Config, PinLabelConfig};
use crate::errors::{BuildError, Result};
use crate::render::{Graphic, Group, Rect, Text};
use crate::types::{BoundingCoords, Coords, non_negative};

/// An arithmetic sequence of coordinates, `coord(i) = start + i * pitch`.
///
/// Stateless: asking for index `i` twice gives the same answer, and every
/// caller starts from index 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchSeries {
    pub start: Coords,
    pub pitch: Coords,
}

impl PitchSeries {
    pub fn new(start: Coords, pitch: Coords) -> Self {
        Self { start, pitch }
    }

    pub fn coord(&self, index: usize) -> Coords {
        self.start + self.pitch * index as f64
    }

    /// Unbounded sequence starting at index 0.
    pub fn coords(self) -> impl Iterator<Item = Coords> {
        (0..).map(move |i| self.coord(i))
    }
}

/// Content of one label and the config tag that styles it
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpec {
    pub content: String,
    pub tag: Option<String>,
}

impl LabelSpec {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tag: None,
        }
    }

    pub fn tagged(content: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tag: Some(tag.into()),
        }
    }
}

impl From<(&str, &str)> for LabelSpec {
    fn from((content, tag): (&str, &str)) -> Self {
        LabelSpec::tagged(content, tag)
    }
}

impl From<&str> for LabelSpec {
    fn from(content: &str) -> Self {
        LabelSpec::new(content)
    }
}

/// A single built label: the group plus where its body sits inside it.
///
/// The group's origin is the point the leaderline starts from; `body` is
/// the offset of the body's left-centre from that origin.
#[derive(Debug, Clone)]
pub struct PinLabel {
    pub group: Group,
    pub body: Coords,
}

impl PinLabel {
    /// Build a label at `position` with its body `body` away from it.
    pub fn build(
        spec: &LabelSpec,
        position: Coords,
        body: Coords,
        leaderline: &Leaderline,
        config: &PinLabelConfig,
    ) -> Result<PinLabel> {
        let width = checked(config.body.width, "body.width")?;
        let height = checked(config.body.height, "body.height")?;
        let font_size = checked(config.text.font_size, "text.font_size")?;
        let body = Coords::try_new(body.x, body.y).map_err(|e| {
            let bad = if body.x.is_finite() { body.y } else { body.x };
            BuildError::number("pinlabel", "body", bad, e)
        })?;

        let class = match &spec.tag {
            Some(tag) => format!("pinlabel {tag}"),
            None => "pinlabel".to_string(),
        };
        let mut group = Group::new(position.x, position.y).with_class(class);

        let rect = Rect::new(body.x, body.y - height / 2.0, width, height)
            .with_corner_radius(config.body.corner_radius)
            .with_class("pinlabel__body");
        let route = leaderline.route_bounds(&BoundingCoords::ZERO, &rect.bounding_coords());
        let text = Text::new(&*spec.content, body.x + width / 2.0, body.y, font_size)
            .with_char_width(config.text.char_width)
            .with_class("pinlabel__text");

        group.add(route.into_path(leaderline.class.as_deref()));
        group.add(rect);
        group.add(text);
        Ok(PinLabel { group, body })
    }
}

fn checked(value: f64, field: &'static str) -> Result<f64> {
    non_negative(value).map_err(|e| BuildError::number("pinlabel", field, value, e))
}

/// Builder for a block of label rows attached to a pin header.
///
/// Row `i` starts at pin `pin_series.coord(i)` with its first body at
/// `label_series.coord(i)`. Later labels in a row chain to the right of
/// their predecessor with straight leaderlines.
#[derive(Debug, Clone)]
pub struct PinLabelGroup {
    x: f64,
    y: f64,
    pin_pitch: Coords,
    label_start: Coords,
    label_pitch: Coords,
    scale: Coords,
    leaderline: Option<Leaderline>,
    overrides: Option<Value>,
    rows: Vec<Vec<LabelSpec>>,
}

impl PinLabelGroup {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            pin_pitch: Coords::ZERO,
            label_start: Coords::ZERO,
            label_pitch: Coords::ZERO,
            scale: Coords::ONE,
            leaderline: None,
            overrides: None,
            rows: Vec::new(),
        }
    }

    /// Step between consecutive pins.
    pub fn pin_pitch(mut self, pitch: Coords) -> Self {
        self.pin_pitch = pitch;
        self
    }

    /// First row's body position, relative to the group.
    pub fn label_start(mut self, start: Coords) -> Self {
        self.label_start = start;
        self
    }

    /// Step between consecutive rows' first bodies.
    pub fn label_pitch(mut self, pitch: Coords) -> Self {
        self.label_pitch = pitch;
        self
    }

    /// Mirror the whole block, e.g. `(-1, 1)` for labels left of the header.
    /// Only the signs count.
    pub fn scale(mut self, scale: Coords) -> Self {
        self.scale = scale;
        self
    }

    /// Leaderline from each pin to its row's first label; defaults to the
    /// configured one.
    pub fn leaderline(mut self, leaderline: Leaderline) -> Self {
        self.leaderline = Some(leaderline);
        self
    }

    /// Patch applied on top of the resolved `pinlabel` section of every label.
    pub fn overrides(mut self, overrides: Value) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn row<I, L>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<LabelSpec>,
    {
        self.rows.push(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn pin_series(&self) -> PitchSeries {
        PitchSeries::new(Coords::ZERO, self.pin_pitch)
    }

    pub fn label_series(&self) -> PitchSeries {
        PitchSeries::new(self.label_start, self.label_pitch)
    }

    /// Build every row. Nothing is returned unless all labels build.
    pub fn build(&self, config: &Config) -> Result<Group> {
        let mut group = Group::new(self.x, self.y).with_class("pinlabelgroup");
        let strict = config.strict();
        let rows = self
            .pin_series()
            .coords()
            .zip(self.label_series().coords())
            .zip(&self.rows);

        for ((pin, label), specs) in rows {
            let mut row = Group::new(0.0, 0.0).with_class("pinlabelrow");
            let mut prev: Option<PinLabel> = None;

            for spec in specs {
                let section: PinLabelConfig =
                    config.section("pinlabel", spec.tag.as_deref(), self.overrides.as_ref())?;

                let built = match &prev {
                    None => {
                        let leaderline = match &self.leaderline {
                            Some(line) => line.clone(),
                            None => Leaderline::from_config(&section.leaderline, strict, "pinlabel")?,
                        };
                        PinLabel::build(spec, pin, label - pin, &leaderline, &section)?
                    }
                    Some(prev) => {
                        let step = prev.group.width() * prev.group.local_scale().x;
                        let position = Coords::new(prev.group.position().x + step, prev.group.position().y + prev.body.y);
                        let body = Coords::new(section.body.x, 0.0);
                        PinLabel::build(spec, position, body, &Leaderline::straight(), &section)?
                    }
                };
                if let Some(done) = prev.replace(built) {
                    row.add(done.group);
                }
            }
            if let Some(last) = prev {
                row.add(last.group);
            }
            group.add(row);
        }

        // Set after the rows exist so the flip walks every attached label.
        group.set_scale(self.scale);
        crate::log::debug!(rows = self.rows.len(), x = self.x, y = self.y, "pin label group built");
        Ok(group)
    }
}
