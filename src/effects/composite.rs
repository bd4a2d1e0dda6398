use crate::foundation::core::{PixelRect, Raster, Rgba8Premul};
use crate::foundation::error::{WrapError, WrapResult};
use crate::foundation::math::mul_div255_u8;

pub type PremulRgba8 = [u8; 4];

/// Porter-Duff source-over for one premultiplied pixel.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> WrapResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(WrapError::validation(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Composite `src` over `dst`; both rasters must share dimensions.
pub fn composite_over(dst: &mut Raster, src: &Raster) -> WrapResult<()> {
    if dst.width != src.width || dst.height != src.height {
        return Err(WrapError::validation(format!(
            "cannot composite {}x{} over {}x{}",
            src.width, src.height, dst.width, dst.height
        )));
    }
    over_in_place(&mut dst.data, &src.data, 1.0)
}

/// Composite `src` over `dst` with its top-left corner at `(x, y)`, clipped to `dst`.
pub fn draw_over_at(dst: &mut Raster, src: &Raster, x: i64, y: i64) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + i64::from(src.width)).min(i64::from(dst.width));
    let y1 = (y + i64::from(src.height)).min(i64::from(dst.height));
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let dst_stride = dst.width as usize * 4;
    let src_stride = src.width as usize * 4;
    let row_bytes = (x1 - x0) as usize * 4;
    for dy in y0..y1 {
        let sy = (dy - y) as usize;
        let sx = (x0 - x) as usize;
        let d_off = dy as usize * dst_stride + x0 as usize * 4;
        let s_off = sy * src_stride + sx * 4;
        let d_row = &mut dst.data[d_off..d_off + row_bytes];
        let s_row = &src.data[s_off..s_off + row_bytes];
        for (d, s) in d_row.chunks_exact_mut(4).zip(s_row.chunks_exact(4)) {
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], 1.0);
            d.copy_from_slice(&out);
        }
    }
}

/// Overwrite every pixel inside `rect` with `color` (no blending).
pub fn fill_rect(dst: &mut Raster, rect: PixelRect, color: Rgba8Premul) {
    let rect = clip(rect, dst);
    if rect.is_empty() {
        return;
    }
    let px = color.to_array();
    let stride = dst.width as usize * 4;
    for y in rect.y0..rect.y1 {
        let off = y as usize * stride;
        let row = &mut dst.data[off + rect.x0 as usize * 4..off + rect.x1 as usize * 4];
        for d in row.chunks_exact_mut(4) {
            d.copy_from_slice(&px);
        }
    }
}

/// Erase `rect` to fully transparent.
pub fn clear_rect(dst: &mut Raster, rect: PixelRect) {
    fill_rect(dst, rect, Rgba8Premul::transparent());
}

fn clip(rect: PixelRect, dst: &Raster) -> PixelRect {
    PixelRect::new(
        rect.x0.min(dst.width),
        rect.y0.min(dst.height),
        rect.x1.min(dst.width),
        rect.y1.min(dst.height),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
