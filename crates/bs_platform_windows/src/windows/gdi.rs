// GDI painter for the selection overlay.
//
// Only lives for one WM_PAINT cycle; the runner owns BeginPaint/EndPaint.

use bs_platform::{Painter, Rgb};
use windows::Win32::Foundation::{COLORREF, RECT};
use windows::Win32::Graphics::Gdi::{
    CreatePen, CreateSolidBrush, DeleteObject, FillRect, HDC, PS_SOLID, Rectangle, SelectObject,
};

#[inline]
fn colorref(color: Rgb) -> COLORREF {
    let Rgb(r, g, b) = color;
    COLORREF((r as u32) | ((g as u32) << 8) | ((b as u32) << 16))
}

pub struct GdiPainter {
    hdc: HDC,
    client: RECT,
}

impl GdiPainter {
    pub fn new(hdc: HDC, client: RECT) -> Self {
        Self { hdc, client }
    }
}

impl Painter for GdiPainter {
    fn fill_background(&mut self, color: Rgb) {
        unsafe {
            let brush = CreateSolidBrush(colorref(color));
            FillRect(self.hdc, &self.client, brush);
            let _ = DeleteObject(brush.into());
        }
    }

    fn draw_rect(
        &mut self,
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
        fill: Rgb,
        outline: Rgb,
        outline_width: i32,
    ) {
        let (l, r) = (left.min(right), left.max(right));
        let (t, b) = (top.min(bottom), top.max(bottom));

        unsafe {
            let pen = CreatePen(PS_SOLID, outline_width, colorref(outline));
            let brush = CreateSolidBrush(colorref(fill));
            let old_pen = SelectObject(self.hdc, pen.into());
            let old_brush = SelectObject(self.hdc, brush.into());

            // GDI's Rectangle excludes the right/bottom edge; +1 keeps zero-size markers visible.
            let _ = Rectangle(self.hdc, l, t, r + 1, b + 1);

            SelectObject(self.hdc, old_brush);
            SelectObject(self.hdc, old_pen);
            let _ = DeleteObject(brush.into());
            let _ = DeleteObject(pen.into());
        }
    }
}
