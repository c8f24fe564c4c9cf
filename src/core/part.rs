//! Renderable message fragments
//!
//! A log call takes an ordered slice of [`Part`]s instead of a single
//! pre-formatted string. Each part knows how to render itself; the
//! formatter joins the rendered tokens with prose-aware spacing.

use std::borrow::Cow;
use std::fmt;

/// One heterogeneous fragment of a log message.
#[derive(Debug, Clone, PartialEq)]
pub enum Part<'a> {
    Int(i64),
    UInt(u64),
    Float(f64),
    Float32(f32),
    Bool(bool),
    Text(Cow<'a, str>),
}

impl<'a> Part<'a> {
    /// Render any displayable value into an owned text part.
    pub fn display(value: &impl fmt::Display) -> Part<'static> {
        Part::Text(Cow::Owned(value.to_string()))
    }

    /// Render this part to its canonical text.
    ///
    /// Integral floats keep one fractional digit so `100.0` never reads as
    /// the integer `100`.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Part::Int(v) => Cow::Owned(v.to_string()),
            Part::UInt(v) => Cow::Owned(v.to_string()),
            Part::Float(v) => Cow::Owned(render_float(*v, v.is_finite() && v.fract() == 0.0)),
            Part::Float32(v) => Cow::Owned(render_float(*v, v.is_finite() && v.fract() == 0.0)),
            Part::Bool(v) => Cow::Borrowed(if *v { "true" } else { "false" }),
            Part::Text(s) => Cow::Borrowed(s.as_ref()),
        }
    }
}

fn render_float<F: fmt::Display>(value: F, integral: bool) -> String {
    if integral {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

impl fmt::Display for Part<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

macro_rules! part_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Part<'_> {
            fn from(v: $t) -> Self {
                Part::Int(v as i64)
            }
        }
    )*};
}

macro_rules! part_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Part<'_> {
            fn from(v: $t) -> Self {
                Part::UInt(v as u64)
            }
        }
    )*};
}

part_from_signed!(i8, i16, i32, i64, isize);
part_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for Part<'_> {
    fn from(v: f64) -> Self {
        Part::Float(v)
    }
}

impl From<f32> for Part<'_> {
    fn from(v: f32) -> Self {
        Part::Float32(v)
    }
}

impl From<bool> for Part<'_> {
    fn from(v: bool) -> Self {
        Part::Bool(v)
    }
}

impl From<char> for Part<'_> {
    fn from(v: char) -> Self {
        Part::Text(Cow::Owned(v.to_string()))
    }
}

impl<'a> From<&'a str> for Part<'a> {
    fn from(v: &'a str) -> Self {
        Part::Text(Cow::Borrowed(v))
    }
}

impl<'a> From<&'a String> for Part<'a> {
    fn from(v: &'a String) -> Self {
        Part::Text(Cow::Borrowed(v.as_str()))
    }
}

impl From<String> for Part<'_> {
    fn from(v: String) -> Self {
        Part::Text(Cow::Owned(v))
    }
}

impl<'a> From<Cow<'a, str>> for Part<'a> {
    fn from(v: Cow<'a, str>) -> Self {
        Part::Text(v)
    }
}
