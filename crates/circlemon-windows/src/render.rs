//! DIB-based rendering for the widget window.
//!
//! Rasterizes the rings into a 32-bit BGRA bitmap, overlays the labels
//! with GDI, then applies everything via `UpdateLayeredWindow` with the
//! current opacity as constant alpha.

use std::mem;

use circlemon_core::canvas::{self, RenderStyle};
use circlemon_core::{Color, Opacity, Presentation};
use windows::Win32::Foundation::{COLORREF, HWND, POINT, SIZE};
use windows::Win32::Graphics::Gdi::{
    BI_RGB, BITMAPINFO, BITMAPINFOHEADER, BLENDFUNCTION,
    CreateCompatibleDC, CreateDIBSection, CreateFontW, DIB_RGB_COLORS, DeleteDC, DeleteObject,
    FONT_CHARSET, FONT_CLIP_PRECISION, FONT_OUTPUT_PRECISION, FONT_QUALITY, GetDC, HDC,
    ReleaseDC, SelectObject, SetBkMode, TRANSPARENT,
};
use windows::Win32::UI::WindowsAndMessaging::{ULW_ALPHA, UpdateLayeredWindow};
use windows::core::w;

use crate::text::{DrawCtx, draw_centered};

const FONT_SIZE: i32 = 15;
const LINE_OFFSET: i32 = 9;

/// Colors and sizes the renderer needs besides the presentation.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub face: RenderStyle,
    pub text: Color,
}

/// Renders the widget face and applies it to the layered window.
///
/// The window keeps its current position; only the bitmap and the
/// constant alpha change.
pub fn render_widget(hwnd: HWND, p: &Presentation, style: &Style, opacity: Opacity) {
    let size = canvas::WIDGET_SIZE;
    let pixels = canvas::rasterize(p, &style.face, size);

    unsafe {
        let screen_dc = GetDC(None);
        let mem_dc = CreateCompatibleDC(Some(screen_dc));

        let bmi = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: size,
                biHeight: -size, // top-down
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB.0,
                ..Default::default()
            },
            ..Default::default()
        };

        let mut bits = std::ptr::null_mut();
        let Ok(bmp) = CreateDIBSection(Some(mem_dc), &bmi, DIB_RGB_COLORS, &mut bits, None, 0)
        else {
            let _ = DeleteDC(mem_dc);
            let _ = ReleaseDC(None, screen_dc);
            return;
        };
        if bits.is_null() {
            let _ = DeleteObject(bmp.into());
            let _ = DeleteDC(mem_dc);
            let _ = ReleaseDC(None, screen_dc);
            return;
        }

        let old_bmp = SelectObject(mem_dc, bmp.into());

        // SAFETY: `bits` is non-null (checked above) and points to
        // `size * size` pixels allocated by CreateDIBSection.
        let buf = std::slice::from_raw_parts_mut(bits as *mut u32, (size * size) as usize);
        buf.copy_from_slice(&pixels);

        let font = CreateFontW(
            FONT_SIZE,
            0,
            0,
            0,
            600,
            0,
            0,
            0,
            FONT_CHARSET(0),
            FONT_OUTPUT_PRECISION(0),
            FONT_CLIP_PRECISION(0),
            FONT_QUALITY(0),
            0,
            w!("Segoe UI"),
        );
        let old_font = SelectObject(mem_dc, font.into());
        let _ = SetBkMode(mem_dc, TRANSPARENT);

        let mut ctx = DrawCtx {
            dc: mem_dc,
            buf,
            w: size,
            h: size,
        };
        let center = size / 2;
        draw_centered(&mut ctx, center - LINE_OFFSET, &p.cpu_text, style.text);
        draw_centered(&mut ctx, center + LINE_OFFSET, &p.ram_text, style.text);

        apply_layered(hwnd, screen_dc, mem_dc, size, opacity);

        // Cleanup
        SelectObject(mem_dc, old_font);
        let _ = DeleteObject(font.into());
        SelectObject(mem_dc, old_bmp);
        let _ = DeleteObject(bmp.into());
        let _ = DeleteDC(mem_dc);
        let _ = ReleaseDC(None, screen_dc);
    }
}

/// Calls `UpdateLayeredWindow` to atomically present the bitmap.
unsafe fn apply_layered(hwnd: HWND, screen_dc: HDC, mem_dc: HDC, size: i32, opacity: Opacity) {
    let blend = BLENDFUNCTION {
        BlendOp: 0, // AC_SRC_OVER
        SourceConstantAlpha: opacity.alpha(),
        AlphaFormat: 1, // AC_SRC_ALPHA
        ..Default::default()
    };
    unsafe {
        let _ = UpdateLayeredWindow(
            hwnd,
            Some(screen_dc),
            None,
            Some(&SIZE { cx: size, cy: size }),
            Some(mem_dc),
            Some(&POINT::default()),
            COLORREF(0),
            Some(&blend),
            ULW_ALPHA,
        );
    }
}
