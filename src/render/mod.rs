//! Rendering primitives.
//!
//! These types are backend-agnostic and are used by render backends (such as
//! the GPUI backend) to describe how a graph should be drawn.

use serde::{Deserialize, Serialize};

use crate::geom::{ScreenPoint, ScreenRect};

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.23, 0.19, 1.0);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0.2, 0.78, 0.35, 1.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0.0, 0.48, 1.0, 1.0);
    /// Nearly transparent fill that still captures pointer input.
    pub const HIT_AREA: Self = Self::new(0.0, 0.0, 0.0, 0.01);
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Text styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
        }
    }
}

/// A line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Segment start.
    pub start: ScreenPoint,
    /// Segment end.
    pub end: ScreenPoint,
}

impl LineSegment {
    /// Create a new line segment.
    pub fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self { start, end }
    }
}

/// A single drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Start clipping to a rectangle.
    ClipRect(ScreenRect),
    /// End clipping.
    ClipEnd,
    /// Fill a rectangle.
    FillRect {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Fill color.
        color: Color,
    },
    /// Draw line segments.
    LineSegments {
        /// Segments to draw.
        segments: Vec<LineSegment>,
        /// Styling for the segments.
        style: LineStyle,
    },
    /// Draw text with its top-left corner at `position`.
    Text {
        /// Text position.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

/// Ordered list of render commands.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Check whether nothing will be drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over every text command as `(position, text)`.
    pub fn texts(&self) -> impl Iterator<Item = (ScreenPoint, &str)> {
        self.commands.iter().filter_map(|command| match command {
            RenderCommand::Text { position, text, .. } => Some((*position, text.as_str())),
            _ => None,
        })
    }
}

/// Append the two strokes of a cross glyph centered on `center`.
pub fn push_cross(out: &mut Vec<LineSegment>, center: ScreenPoint, half: f32) {
    out.push(LineSegment::new(
        ScreenPoint::new(center.x - half, center.y),
        ScreenPoint::new(center.x + half, center.y),
    ));
    out.push(LineSegment::new(
        ScreenPoint::new(center.x, center.y - half),
        ScreenPoint::new(center.x, center.y + half),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_is_centered() {
        let mut out = Vec::new();
        push_cross(&mut out, ScreenPoint::new(10.0, 20.0), 5.0);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].start, ScreenPoint::new(5.0, 20.0));
        assert_eq!(out[0].end, ScreenPoint::new(15.0, 20.0));
        assert_eq!(out[1].start, ScreenPoint::new(10.0, 15.0));
        assert_eq!(out[1].end, ScreenPoint::new(10.0, 25.0));
    }

    #[test]
    fn texts_skip_other_commands() {
        let mut list = RenderList::new();
        list.push(RenderCommand::ClipEnd);
        list.push(RenderCommand::Text {
            position: ScreenPoint::new(1.0, 2.0),
            text: "label".to_string(),
            style: TextStyle::default(),
        });
        let texts: Vec<_> = list.texts().collect();
        assert_eq!(texts, vec![(ScreenPoint::new(1.0, 2.0), "label")]);
    }
}
