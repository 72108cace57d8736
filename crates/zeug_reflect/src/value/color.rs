use alloc::string::String;
use core::fmt;

use super::PropertyValue;
use crate::property::TypedProperty;
use crate::variant::Variant;
use crate::visitor::{PropertyMut, PropertyRef};

// -----------------------------------------------------------------------------
// Color

/// An 8-bit RGBA color.
///
/// The string form is `#RRGGBBAA` in upper-case hex. Parsing also accepts
/// `#RRGGBB`, with alpha set to `255`.
///
/// # Examples
///
/// ```
/// use zeug_reflect::value::Color;
///
/// let c = Color::rgb(255, 128, 0);
/// assert_eq!(c.to_hex(), "#FF8000FF");
/// assert_eq!(Color::from_hex("#ff800080"), Some(Color::rgba(255, 128, 0, 128)));
/// assert_eq!(Color::from_hex("ff8000"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Packs the color as `0xRRGGBBAA`.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }

    /// Unpacks a `0xRRGGBBAA` value.
    #[inline]
    pub const fn from_u32(rgba: u32) -> Self {
        let [r, g, b, a] = rgba.to_be_bytes();
        Self { r, g, b, a }
    }

    /// Renders the color as `#RRGGBBAA`.
    pub fn to_hex(self) -> String {
        alloc::format!("{self}")
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`, in either case.
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.trim().strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self::from_u32((value << 8) | 0xFF)),
            8 => Some(Self::from_u32(value)),
            _ => None,
        }
    }
}

impl Default for Color {
    #[inline]
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_u32())
    }
}

impl PropertyValue for Color {
    const TYPE_NAME: &'static str = "color";

    #[inline]
    fn to_property_string(&self) -> String {
        self.to_hex()
    }

    #[inline]
    fn from_property_string(s: &str) -> Option<Self> {
        Self::from_hex(s)
    }

    fn to_variant(&self) -> Variant {
        Variant::String(self.to_hex())
    }

    /// Accepts the hex string, or an array of three or four channels.
    fn from_variant(variant: &Variant) -> Option<Self> {
        match variant {
            Variant::String(s) => Self::from_hex(s),
            Variant::Array(channels) => {
                let channel = |index: usize| channels.get(index)?.value::<u8>();
                match channels.len() {
                    3 => Some(Self::rgb(channel(0)?, channel(1)?, channel(2)?)),
                    4 => Some(Self::rgba(channel(0)?, channel(1)?, channel(2)?, channel(3)?)),
                    _ => None,
                }
            }
            Variant::U32(rgba) => Some(Self::from_u32(*rgba)),
            _ => None,
        }
    }

    fn dispatch_ref<'a>(property: &'a dyn TypedProperty<Self>) -> PropertyRef<'a> {
        PropertyRef::Color(property)
    }

    fn dispatch_mut<'a>(property: &'a mut dyn TypedProperty<Self>) -> PropertyMut<'a> {
        PropertyMut::Color(property)
    }
}
