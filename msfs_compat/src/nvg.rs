//! NanoVG drawing for gauges.
//!
//! ```ignore
//! let nvg = gauge.create_nanovg().ok_or("no render context")?;
//! let red = Style::new().fill(Color::from_rgb(255, 0, 0));
//! nvg.draw_frame(data.width() as f32, data.height() as f32, data.device_pixel_ratio(), |frame| {
//!     frame.draw_path(&red, |path| {
//!         path.rect(0.0, 0.0, 100.0, 100.0);
//!         Ok(())
//!     })
//! })?;
//! ```
use crate::error::{Error, Result};
use crate::sys;
use bitflags::bitflags;
use log::debug;
use std::ffi::{c_char, c_int, CString};
use uom::si::angle::{radian, revolution};
use uom::si::f32::Angle;

/// Result of drawing callbacks. A failed callback cancels the frame.
pub type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// A NanoVG context bound to a gauge.
#[derive(Debug)]
pub struct Context {
    ctx: *mut sys::NVGcontext,
}

impl Context {
    /// Creates a context for the gauge's `FsContext`.
    pub fn create(fs_ctx: sys::FsContext) -> Option<Self> {
        let mut params = sys::NVGparams {
            userPtr: fs_ctx,
            edgeAntiAlias: 1,
            ..Default::default()
        };
        let ctx = unsafe { sys::nvgCreateInternal(&mut params) };
        if ctx.is_null() {
            debug!("NanoVG context unavailable for {:?}", fs_ctx);
            None
        } else {
            Some(Self { ctx })
        }
    }

    /// Draw a frame. The frame is submitted if `f` succeeds and discarded otherwise.
    pub fn draw_frame<F>(&self, width: f32, height: f32, dpr: f32, f: F) -> DrawResult
    where
        F: FnOnce(&Frame) -> DrawResult,
    {
        unsafe {
            sys::nvgBeginFrame(self.ctx, width, height, dpr);
        }

        let frame = Frame { ctx: self.ctx };
        let result = f(&frame);
        unsafe {
            match result {
                Ok(()) => sys::nvgEndFrame(self.ctx),
                Err(_) => sys::nvgCancelFrame(self.ctx),
            }
        }
        result
    }

    /// Loads a `.ttf` font which can then be used with [`Frame::text`].
    ///
    /// Only solid color fill is supported for text.
    pub fn create_font(&self, name: &str, filename: &str) -> Result<Font> {
        let c_name = CString::new(name)?;
        let c_filename = CString::new(filename)?;
        let handle = unsafe { sys::nvgCreateFont(self.ctx, c_name.as_ptr(), c_filename.as_ptr()) };
        if handle < 0 {
            return Err(Error::Font(filename.to_owned()));
        }
        Ok(Font { handle })
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        unsafe {
            sys::nvgDeleteInternal(self.ctx);
        }
    }
}

/// Drawing operations, available inside `Context::draw_frame`.
pub struct Frame {
    ctx: *mut sys::NVGcontext,
}

impl Frame {
    /// Builds a path with `f` and paints it with `style`.
    pub fn draw_path<F>(&self, style: &Style, f: F) -> DrawResult
    where
        F: FnOnce(&Path) -> DrawResult,
    {
        unsafe {
            sys::nvgBeginPath(self.ctx);
        }
        f(&Path { ctx: self.ctx })?;

        unsafe {
            if let Some(fill) = &style.fill {
                sys::nvgFillColor(self.ctx, &fill.0);
                sys::nvgFill(self.ctx);
            }
            if let Some(stroke) = &style.stroke {
                sys::nvgStrokeColor(self.ctx, &stroke.0);
                sys::nvgStrokeWidth(self.ctx, style.stroke_width);
                sys::nvgStroke(self.ctx);
            }
        }
        Ok(())
    }

    /// Draws `text` at (`x`, `y`) with the current fill color.
    /// Returns the horizontal advance of the text.
    pub fn text(&self, font: &Font, size: f32, align: Align, x: f32, y: f32, text: &str) -> f32 {
        let range = text.as_bytes().as_ptr_range();
        unsafe {
            sys::nvgFontFaceId(self.ctx, font.handle);
            sys::nvgFontSize(self.ctx, size);
            sys::nvgTextAlign(self.ctx, align.bits() as c_int);
            sys::nvgText(
                self.ctx,
                x,
                y,
                range.start as *const c_char,
                range.end as *const c_char,
            )
        }
    }

    pub fn fill_color(&self, color: Color) {
        unsafe {
            sys::nvgFillColor(self.ctx, &color.0);
        }
    }

    /// Pushes the render state. Must be balanced by [`Frame::restore`].
    pub fn save(&self) {
        unsafe {
            sys::nvgSave(self.ctx);
        }
    }

    pub fn restore(&self) {
        unsafe {
            sys::nvgRestore(self.ctx);
        }
    }

    pub fn translate(&self, x: f32, y: f32) {
        unsafe {
            sys::nvgTranslate(self.ctx, x, y);
        }
    }

    pub fn rotate(&self, angle: Angle) {
        unsafe {
            sys::nvgRotate(self.ctx, angle.get::<radian>());
        }
    }

    pub fn scale(&self, x: f32, y: f32) {
        unsafe {
            sys::nvgScale(self.ctx, x, y);
        }
    }
}

/// A path.
pub struct Path {
    ctx: *mut sys::NVGcontext,
}

impl Path {
    /// Begins a sub-path at `(x, y)`.
    pub fn move_to(&self, x: f32, y: f32) {
        unsafe {
            sys::nvgMoveTo(self.ctx, x, y);
        }
    }

    /// Straight segment to `(x, y)`.
    pub fn line_to(&self, x: f32, y: f32) {
        unsafe {
            sys::nvgLineTo(self.ctx, x, y);
        }
    }

    /// Cubic bezier to `(x, y)` through two control points.
    pub fn bezier_to(&self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        unsafe {
            sys::nvgBezierTo(self.ctx, c1x, c1y, c2x, c2y, x, y);
        }
    }

    pub fn quad_to(&self, cx: f32, cy: f32, x: f32, y: f32) {
        unsafe {
            sys::nvgQuadTo(self.ctx, cx, cy, x, y);
        }
    }

    /// Rounded corner between the current point, `(x1, y1)` and `(x2, y2)`.
    pub fn arc_to(&self, x1: f32, y1: f32, x2: f32, y2: f32, radius: f32) {
        unsafe {
            sys::nvgArcTo(self.ctx, x1, y1, x2, y2, radius);
        }
    }

    pub fn close_path(&self) {
        unsafe {
            sys::nvgClosePath(self.ctx);
        }
    }

    /// Sets the winding of the current sub-path.
    pub fn winding(&self, dir: Direction) {
        unsafe {
            sys::nvgPathWinding(self.ctx, dir as c_int);
        }
    }

    /// Creates a new circle arc shaped sub-path centered at (`cx`, `cy`), swept from `a0` to `a1`.
    pub fn arc(&self, cx: f32, cy: f32, r: f32, a0: Angle, a1: Angle, dir: Direction) {
        unsafe {
            sys::nvgArc(
                self.ctx,
                cx,
                cy,
                r,
                a0.get::<radian>(),
                a1.get::<radian>(),
                dir as c_int,
            );
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn elliptical_arc(
        &self,
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        a0: Angle,
        a1: Angle,
        dir: Direction,
    ) {
        unsafe {
            sys::nvgEllipticalArc(
                self.ctx,
                cx,
                cy,
                rx,
                ry,
                a0.get::<radian>(),
                a1.get::<radian>(),
                dir as c_int,
            );
        }
    }

    pub fn rect(&self, x: f32, y: f32, w: f32, h: f32) {
        unsafe {
            sys::nvgRect(self.ctx, x, y, w, h);
        }
    }

    #[allow(clippy::many_single_char_names)]
    pub fn rounded_rect(&self, x: f32, y: f32, w: f32, h: f32, r: f32) {
        unsafe {
            sys::nvgRoundedRect(self.ctx, x, y, w, h, r);
        }
    }

    /// Rounded rectangle with radii given clockwise from the top left corner.
    #[allow(clippy::too_many_arguments)]
    pub fn rounded_rect_varying(
        &self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        top_left: f32,
        top_right: f32,
        bottom_right: f32,
        bottom_left: f32,
    ) {
        unsafe {
            sys::nvgRoundedRectVarying(
                self.ctx,
                x,
                y,
                w,
                h,
                top_left,
                top_right,
                bottom_right,
                bottom_left,
            );
        }
    }

    pub fn ellipse(&self, cx: f32, cy: f32, rx: f32, ry: f32) {
        unsafe {
            sys::nvgEllipse(self.ctx, cx, cy, rx, ry);
        }
    }

    pub fn circle(&self, cx: f32, cy: f32, r: f32) {
        unsafe {
            sys::nvgCircle(self.ctx, cx, cy, r);
        }
    }
}

/// Winding direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Direction {
    /// Winding for holes.
    Clockwise = sys::NVG_CW as i32,
    /// Solid shapes.
    CounterClockwise = sys::NVG_CCW as i32,
}

bitflags! {
    /// Horizontal and vertical text alignment. Combine one of each.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Align: u32 {
        const LEFT = sys::NVG_ALIGN_LEFT;
        const CENTER = sys::NVG_ALIGN_CENTER;
        const RIGHT = sys::NVG_ALIGN_RIGHT;
        const TOP = sys::NVG_ALIGN_TOP;
        const MIDDLE = sys::NVG_ALIGN_MIDDLE;
        const BOTTOM = sys::NVG_ALIGN_BOTTOM;
        const BASELINE = sys::NVG_ALIGN_BASELINE;
    }
}

impl Default for Align {
    fn default() -> Self {
        Align::LEFT | Align::BASELINE
    }
}

/// A font handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    handle: c_int,
}

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(sys::NVGcolor);

impl Color {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 255)
    }

    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_rgbaf(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub fn from_rgbaf(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(sys::NVGcolor { r, g, b, a })
    }

    /// Color from hue, saturation and lightness. Saturation and lightness are
    /// clamped to `0.0..=1.0`.
    pub fn from_hsla(hue: Angle, saturation: f32, lightness: f32, a: u8) -> Self {
        let h = hue.get::<revolution>().rem_euclid(1.0);
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);
        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;
        Self::from_rgbaf(
            hue_channel(h + 1.0 / 3.0, m1, m2).clamp(0.0, 1.0),
            hue_channel(h, m1, m2).clamp(0.0, 1.0),
            hue_channel(h - 1.0 / 3.0, m1, m2).clamp(0.0, 1.0),
            a as f32 / 255.0,
        )
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self(sys::NVGcolor { a, ..self.0 })
    }

    pub fn r(&self) -> f32 {
        self.0.r
    }

    pub fn g(&self) -> f32 {
        self.0.g
    }

    pub fn b(&self) -> f32 {
        self.0.b
    }

    pub fn a(&self) -> f32 {
        self.0.a
    }
}

fn hue_channel(h: f32, m1: f32, m2: f32) -> f32 {
    let h = if h < 0.0 {
        h + 1.0
    } else if h > 1.0 {
        h - 1.0
    } else {
        h
    };
    if h < 1.0 / 6.0 {
        m1 + (m2 - m1) * h * 6.0
    } else if h < 3.0 / 6.0 {
        m2
    } else if h < 4.0 / 6.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
    } else {
        m1
    }
}

/// How a path is painted. Neither fill nor stroke by default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: None,
            stroke_width: 1.0,
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn stroke(mut self, color: Color) -> Self {
        self.stroke = Some(color);
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_color(color: Color, r: f32, g: f32, b: f32) {
        let close = |x: f32, y: f32| (x - y).abs() < 1e-4;
        assert!(
            close(color.r(), r) && close(color.g(), g) && close(color.b(), b),
            "{:?} != ({}, {}, {})",
            color,
            r,
            g,
            b
        );
    }

    #[test]
    fn rgb_colors() {
        let color = Color::from_rgb(255, 0, 51);
        assert_color(color, 1.0, 0.0, 0.2);
        assert_eq!(color.a(), 1.0);
        assert_eq!(color.with_alpha(0.5).a(), 0.5);
        assert_eq!(color.with_alpha(0.5).r(), 1.0);
    }

    #[test]
    fn hsla_colors() {
        let red = Color::from_hsla(Angle::new::<revolution>(0.0), 1.0, 0.5, 255);
        assert_color(red, 1.0, 0.0, 0.0);
        let green = Color::from_hsla(Angle::new::<revolution>(1.0 / 3.0), 1.0, 0.5, 255);
        assert_color(green, 0.0, 1.0, 0.0);
        let blue = Color::from_hsla(Angle::new::<revolution>(-1.0 / 3.0), 1.0, 0.5, 0);
        assert_color(blue, 0.0, 0.0, 1.0);
        assert_eq!(blue.a(), 0.0);
        let grey = Color::from_hsla(Angle::new::<revolution>(0.25), 0.0, 0.5, 255);
        assert_color(grey, 0.5, 0.5, 0.5);
    }

    #[test]
    fn style_builder() {
        let style = Style::new()
            .fill(Color::from_rgb(0, 0, 0))
            .stroke_width(3.0);
        assert!(style.fill.is_some());
        assert!(style.stroke.is_none());
        assert_eq!(style.stroke_width, 3.0);
        assert_eq!(Style::new().stroke_width, 1.0);
    }

    #[test]
    fn align_and_direction_values() {
        assert_eq!((Align::CENTER | Align::MIDDLE).bits(), (1 << 1) | (1 << 4));
        assert_eq!(Direction::Clockwise as c_int, 2);
        assert_eq!(Direction::CounterClockwise as c_int, 1);
    }

    #[test]
    fn no_context_without_host() {
        assert!(Context::create(std::ptr::null_mut()).is_none());
    }

    #[test]
    fn frames_report_callback_result() {
        let context = Context {
            ctx: std::ptr::null_mut(),
        };
        let style = Style::new().fill(Color::from_rgb(255, 255, 255));
        let drawn = context.draw_frame(100.0, 100.0, 1.0, |frame| {
            frame.save();
            frame.rotate(Angle::new::<radian>(1.0));
            frame.draw_path(&style, |path| {
                path.circle(50.0, 50.0, 10.0);
                path.winding(Direction::CounterClockwise);
                Ok(())
            })?;
            frame.restore();
            Ok(())
        });
        assert!(drawn.is_ok());

        let cancelled = context.draw_frame(100.0, 100.0, 1.0, |frame| {
            frame.draw_path(&style, |_| Err("empty path".into()))
        });
        assert_eq!(cancelled.unwrap_err().to_string(), "empty path");
    }

    #[test]
    fn missing_font_is_an_error() {
        let context = Context {
            ctx: std::ptr::null_mut(),
        };
        let err = context.create_font("sans", "fonts/missing.ttf").unwrap_err();
        assert_eq!(err.to_string(), "failed to load font `fonts/missing.ttf`");
    }
}
