//! Axis label formatting, tick placement, and text measurement.

use std::fmt;
use std::str::FromStr;

use crate::error::{GraphError, GraphResult};
use crate::view::Range;

/// Default label format: two decimals.
pub const DEFAULT_FORMAT: &str = ".2";

/// Largest width or precision a format may request.
const MAX_FIELD: usize = 64;

/// Fixed-point label format in printf style.
///
/// The spec is the part of a `%…f` conversion between `%` and `f`: optional
/// flags (`-`, `+`, space, `0`), an optional minimum width, and an optional
/// `.precision`. Without a precision, six decimals are used. Width and
/// precision are limited to 64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisFormat {
    left_align: bool,
    plus_sign: bool,
    space_sign: bool,
    zero_pad: bool,
    width: usize,
    precision: usize,
}

impl AxisFormat {
    /// Parse a format spec such as `".2"` or `"+8.3"`.
    pub fn parse(spec: &str) -> GraphResult<Self> {
        let invalid = |reason| GraphError::InvalidFormat {
            spec: spec.to_string(),
            reason,
        };

        let mut format = Self {
            left_align: false,
            plus_sign: false,
            space_sign: false,
            zero_pad: false,
            width: 0,
            precision: 6,
        };

        let mut rest = spec;
        while let Some(flag) = rest.chars().next() {
            match flag {
                '-' => format.left_align = true,
                '+' => format.plus_sign = true,
                ' ' => format.space_sign = true,
                '0' => format.zero_pad = true,
                _ => break,
            }
            rest = &rest[1..];
        }

        let (width, after_width) = split_digits(rest);
        if !width.is_empty() {
            format.width = width
                .parse()
                .ok()
                .filter(|width| *width <= MAX_FIELD)
                .ok_or_else(|| invalid("width out of range"))?;
        }
        rest = after_width;

        if let Some(after_dot) = rest.strip_prefix('.') {
            let (precision, after_precision) = split_digits(after_dot);
            format.precision = if precision.is_empty() {
                0
            } else {
                precision
                    .parse()
                    .ok()
                    .filter(|precision| *precision <= MAX_FIELD)
                    .ok_or_else(|| invalid("precision out of range"))?
            };
            rest = after_precision;
        }

        if !rest.is_empty() {
            return Err(invalid("unexpected characters"));
        }
        Ok(format)
    }

    /// Number of decimals rendered.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Minimum rendered width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Render a value.
    pub fn format(&self, value: f64) -> String {
        let digits = format!("{:.*}", self.precision, value.abs());
        let sign = if value.is_sign_negative() && !value.is_nan() {
            "-"
        } else if self.plus_sign {
            "+"
        } else if self.space_sign {
            " "
        } else {
            ""
        };

        let len = sign.len() + digits.len();
        if len >= self.width {
            return format!("{sign}{digits}");
        }
        let fill = self.width - len;
        if self.left_align {
            format!("{sign}{digits}{}", " ".repeat(fill))
        } else if self.zero_pad && value.is_finite() {
            format!("{sign}{}{digits}", "0".repeat(fill))
        } else {
            format!("{}{sign}{digits}", " ".repeat(fill))
        }
    }
}

impl Default for AxisFormat {
    fn default() -> Self {
        Self {
            left_align: false,
            plus_sign: false,
            space_sign: false,
            zero_pad: false,
            width: 0,
            precision: 2,
        }
    }
}

impl FromStr for AxisFormat {
    type Err = GraphError;

    fn from_str(spec: &str) -> GraphResult<Self> {
        Self::parse(spec)
    }
}

impl fmt::Display for AxisFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.left_align {
            f.write_str("-")?;
        }
        if self.plus_sign {
            f.write_str("+")?;
        }
        if self.space_sign {
            f.write_str(" ")?;
        }
        if self.zero_pad {
            f.write_str("0")?;
        }
        if self.width > 0 {
            write!(f, "{}", self.width)?;
        }
        write!(f, ".{}", self.precision)
    }
}

fn split_digits(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(end)
}

/// Fractional tick positions `i / n` for `i` in `1..=n`.
///
/// Returns nothing when the axis has no segments.
pub fn tick_fractions(segment_count: usize) -> impl Iterator<Item = (usize, f64)> {
    (1..=segment_count).map(move |i| (i, i as f64 / segment_count as f64))
}

/// Data value at tick `index` of an axis split into `segment_count` parts.
pub fn tick_value(bounds: Range, index: usize, segment_count: usize) -> f64 {
    bounds.min + index as f64 * (bounds.width() / segment_count as f64)
}

/// Text measurement abstraction used by layout code.
pub trait TextMeasurer {
    /// Measure the size of a text string in pixels.
    fn measure(&self, text: &str, size: f32) -> (f32, f32);
}

/// Measurer assuming a fixed advance per character.
///
/// Used where no font system is available, such as headless layout.
#[derive(Debug, Clone, Copy)]
pub struct ApproxTextMeasurer {
    /// Character advance as a fraction of the font size.
    pub advance: f32,
}

impl Default for ApproxTextMeasurer {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl TextMeasurer for ApproxTextMeasurer {
    fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        (text.chars().count() as f32 * size * self.advance, size * 1.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_has_two_decimals() {
        let format = AxisFormat::parse(DEFAULT_FORMAT).unwrap();
        assert_eq!(format, AxisFormat::default());
        assert_eq!(format.format(0.3), "0.30");
        assert_eq!(format.format(-0.5), "-0.50");
    }

    #[test]
    fn flags_and_width() {
        assert_eq!(AxisFormat::parse("+.1").unwrap().format(2.0), "+2.0");
        assert_eq!(AxisFormat::parse("6.1").unwrap().format(-2.0), "  -2.0");
        assert_eq!(AxisFormat::parse("-6.1").unwrap().format(2.0), "2.0   ");
        assert_eq!(AxisFormat::parse("06.1").unwrap().format(-2.0), "-002.0");
        assert_eq!(AxisFormat::parse(" .0").unwrap().format(3.0), " 3");
    }

    #[test]
    fn missing_precision_defaults() {
        assert_eq!(AxisFormat::parse("").unwrap().format(1.0), "1.000000");
        assert_eq!(AxisFormat::parse("3.").unwrap().format(1.4), "  1");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            AxisFormat::parse(".2e"),
            Err(GraphError::InvalidFormat { .. })
        ));
        assert!("x".parse::<AxisFormat>().is_err());
        assert!(matches!(
            AxisFormat::parse(".70000"),
            Err(GraphError::InvalidFormat {
                reason: "precision out of range",
                ..
            })
        ));
        assert!(matches!(
            AxisFormat::parse("99999999999.2"),
            Err(GraphError::InvalidFormat {
                reason: "width out of range",
                ..
            })
        ));
    }

    #[test]
    fn accepts_fields_up_to_limit() {
        let format = AxisFormat::parse("64.64").unwrap();
        assert_eq!(format.width(), 64);
        assert_eq!(format.format(1.0).len(), 66);
        assert!(AxisFormat::parse(".65").is_err());
    }

    #[test]
    fn display_roundtrips_through_parse() {
        let format = AxisFormat::parse("+08.3").unwrap();
        assert_eq!(AxisFormat::parse(&format.to_string()).unwrap(), format);
    }

    #[test]
    fn ticks_split_axis_evenly() {
        let fractions: Vec<_> = tick_fractions(4).collect();
        assert_eq!(fractions, vec![(1, 0.25), (2, 0.5), (3, 0.75), (4, 1.0)]);
        assert_eq!(tick_fractions(0).count(), 0);
        let bounds = Range::new(0.1, 1.7);
        assert!((tick_value(bounds, 8, 8) - 1.7).abs() < 1e-12);
        assert!((tick_value(bounds, 0, 8) - 0.1).abs() < 1e-12);
    }
}
