//! GDI text output onto the widget's DIB.
//!
//! GDI writes zero alpha, so after every `TextOutW` the touched region
//! gets its alpha restored for `UpdateLayeredWindow`.

use circlemon_core::Color;
use windows::Win32::Foundation::{COLORREF, SIZE};
use windows::Win32::Graphics::Gdi::{
    GdiFlush, GetTextExtentPoint32W, HDC, SetTextColor, TextOutW,
};

/// The GDI DC and pixel buffer shared by all draw helpers.
pub struct DrawCtx<'a> {
    pub dc: HDC,
    pub buf: &'a mut [u32],
    pub w: i32,
    pub h: i32,
}

/// Draws `text` horizontally centered with its vertical center at
/// `center_y`.
pub fn draw_centered(ctx: &mut DrawCtx, center_y: i32, text: &str, color: Color) {
    if text.is_empty() {
        return;
    }

    let wide: Vec<u16> = text.encode_utf16().collect();
    let size = measure(ctx.dc, &wide);
    let x = (ctx.w - size.cx) / 2;
    let y = center_y - size.cy / 2;

    // Snapshot the region so changed pixels can be detected afterwards.
    let before = snapshot(ctx, x, y, size.cx, size.cy);

    unsafe {
        let _ = SetTextColor(
            ctx.dc,
            COLORREF(u32::from(color.r) | (u32::from(color.g) << 8) | (u32::from(color.b) << 16)),
        );
        let _ = TextOutW(ctx.dc, x, y, &wide);
        // Batched GDI calls must land in the DIB before it is read.
        let _ = GdiFlush();
    }

    fix_alpha_region(ctx, x, y, size.cx, size.cy, &before);
}

fn measure(dc: HDC, wide: &[u16]) -> SIZE {
    let mut size = SIZE::default();
    unsafe {
        let _ = GetTextExtentPoint32W(dc, wide, &mut size);
    }
    size
}

fn clip(ctx: &DrawCtx, rx: i32, ry: i32, rw: i32, rh: i32) -> (i32, i32, i32, i32) {
    (
        rx.max(0),
        ry.max(0),
        (rx + rw).min(ctx.w),
        (ry + rh).min(ctx.h),
    )
}

fn snapshot(ctx: &DrawCtx, rx: i32, ry: i32, rw: i32, rh: i32) -> Vec<u32> {
    let (x0, y0, x1, y1) = clip(ctx, rx, ry, rw, rh);
    let mut out = Vec::new();
    for py in y0..y1 {
        for px in x0..x1 {
            out.push(ctx.buf[(py * ctx.w + px) as usize]);
        }
    }
    out
}

/// Sets alpha to 0xFF for pixels GDI changed, fixing its zero-alpha
/// text output.
fn fix_alpha_region(ctx: &mut DrawCtx, rx: i32, ry: i32, rw: i32, rh: i32, before: &[u32]) {
    let (x0, y0, x1, y1) = clip(ctx, rx, ry, rw, rh);
    let mut i = 0;
    for py in y0..y1 {
        for px in x0..x1 {
            let idx = (py * ctx.w + px) as usize;
            if before.get(i).is_some_and(|&old| old != ctx.buf[idx]) {
                ctx.buf[idx] |= 0xFF00_0000;
            }
            i += 1;
        }
    }
}
