use crate::foundation::error::{WrapError, WrapResult};
use crate::foundation::math::{premultiply_rgba8_in_place, unpremultiply_rgba8_in_place};

pub use kurbo::{Point, Rect, Size};

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Integer pixel rectangle, `x1`/`y1` exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelRect {
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self {
            x0,
            y0,
            x1: x1.max(x0),
            y1: y1.max(y0),
        }
    }

    /// The rectangle `inset` pixels inside a `width x height` canvas on every side.
    ///
    /// Collapses to an empty rectangle centered on the canvas when the inset exceeds half the
    /// canvas.
    pub fn inset(width: u32, height: u32, inset: u32) -> Self {
        let x0 = inset.min(width / 2);
        let y0 = inset.min(height / 2);
        Self::new(x0, y0, width.saturating_sub(inset), height.saturating_sub(inset))
    }

    pub fn width(self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(self) -> u32 {
        self.y1 - self.y0
    }

    pub fn is_empty(self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn contains(self, x: u32, y: u32) -> bool {
        self.x0 <= x && x < self.x1 && self.y0 <= y && y < self.y1
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1),
            f64::from(self.y1),
        )
    }
}

/// A raster buffer: premultiplied RGBA8, tightly packed, row-major.
///
/// This is the currency exchanged with the design surface (snapshots, overlay sources) and the
/// final export artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Raster {
    /// Fully transparent raster.
    pub fn new(width: u32, height: u32) -> WrapResult<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    pub fn filled(width: u32, height: u32, color: Rgba8Premul) -> WrapResult<Self> {
        let px = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| WrapError::raster("raster size overflow"))?;
        Ok(Self {
            width,
            height,
            data: color.to_array().repeat(px),
        })
    }

    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> WrapResult<Self> {
        if data.len() != byte_len(width, height)? {
            return Err(WrapError::validation(format!(
                "raster data length {} does not match {width}x{height} rgba8",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Convert a straight-alpha image into a premultiplied raster.
    pub fn from_image(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut data = img.as_raw().clone();
        premultiply_rgba8_in_place(&mut data);
        Self {
            width,
            height,
            data,
        }
    }

    /// Convert back to a straight-alpha image for encoding.
    pub fn to_image(&self) -> WrapResult<image::RgbaImage> {
        let mut data = self.data.clone();
        unpremultiply_rgba8_in_place(&mut data);
        image::RgbaImage::from_raw(self.width, self.height, data)
            .ok_or_else(|| WrapError::raster("raster buffer does not fit image dimensions"))
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn bounds(&self) -> PixelRect {
        PixelRect::new(0, 0, self.width, self.height)
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /// Resample to a new size.
    ///
    /// Interpolating premultiplied samples keeps edges against transparency free of dark fringes.
    pub fn resized(&self, width: u32, height: u32) -> WrapResult<Self> {
        if width == self.width && height == self.height {
            return Ok(self.clone());
        }
        if self.is_empty() || width == 0 || height == 0 {
            return Self::new(width, height);
        }
        let src = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| WrapError::raster("raster buffer does not fit image dimensions"))?;
        let out = image::imageops::resize(
            &src,
            width,
            height,
            image::imageops::FilterType::CatmullRom,
        );
        Ok(Self {
            width,
            height,
            data: out.into_raw(),
        })
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

fn byte_len(width: u32, height: u32) -> WrapResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| WrapError::raster("raster size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
