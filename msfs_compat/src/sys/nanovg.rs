//! The NanoVG subset of `MSFS/MSFS_Render.h`.

use std::ffi::{c_char, c_float, c_int, c_void};

/// Opaque render context.
#[repr(C)]
pub struct NVGcontext {
    _private: [u8; 0],
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct NVGcolor {
    pub r: c_float,
    pub g: c_float,
    pub b: c_float,
    pub a: c_float,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct NVGpaint {
    pub xform: [c_float; 6],
    pub extent: [c_float; 2],
    pub radius: c_float,
    pub feather: c_float,
    pub innerColor: NVGcolor,
    pub outerColor: NVGcolor,
    pub image: c_int,
}

/// Renderer parameters. The backend callbacks are filled in by the simulator.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NVGparams {
    pub userPtr: *mut c_void,
    pub edgeAntiAlias: c_int,
    pub renderCallbacks: [*mut c_void; 12],
}

impl Default for NVGparams {
    fn default() -> Self {
        Self {
            userPtr: std::ptr::null_mut(),
            edgeAntiAlias: 0,
            renderCallbacks: [std::ptr::null_mut(); 12],
        }
    }
}

pub type NVGwinding = u32;
pub const NVG_CCW: NVGwinding = 1;
pub const NVG_CW: NVGwinding = 2;

pub type NVGalign = u32;
pub const NVG_ALIGN_LEFT: NVGalign = 1 << 0;
pub const NVG_ALIGN_CENTER: NVGalign = 1 << 1;
pub const NVG_ALIGN_RIGHT: NVGalign = 1 << 2;
pub const NVG_ALIGN_TOP: NVGalign = 1 << 3;
pub const NVG_ALIGN_MIDDLE: NVGalign = 1 << 4;
pub const NVG_ALIGN_BOTTOM: NVGalign = 1 << 5;
pub const NVG_ALIGN_BASELINE: NVGalign = 1 << 6;

// Structs passed by value are declared by pointer: the Rust and clang WASM C
// ABIs disagree on aggregates (rustwasm/team#291).
imports! {
    pub fn nvgCreateInternal(params: *mut NVGparams) -> *mut NVGcontext => std::ptr::null_mut();
    pub fn nvgDeleteInternal(ctx: *mut NVGcontext) => ();

    pub fn nvgBeginFrame(ctx: *mut NVGcontext, windowWidth: c_float, windowHeight: c_float, devicePixelRatio: c_float) => ();
    pub fn nvgCancelFrame(ctx: *mut NVGcontext) => ();
    pub fn nvgEndFrame(ctx: *mut NVGcontext) => ();

    pub fn nvgSave(ctx: *mut NVGcontext) => ();
    pub fn nvgRestore(ctx: *mut NVGcontext) => ();
    pub fn nvgReset(ctx: *mut NVGcontext) => ();
    pub fn nvgTranslate(ctx: *mut NVGcontext, x: c_float, y: c_float) => ();
    pub fn nvgRotate(ctx: *mut NVGcontext, angle: c_float) => ();
    pub fn nvgScale(ctx: *mut NVGcontext, x: c_float, y: c_float) => ();

    pub fn nvgStrokeColor(ctx: *mut NVGcontext, color: *const NVGcolor) => ();
    pub fn nvgStrokePaint(ctx: *mut NVGcontext, paint: *const NVGpaint) => ();
    pub fn nvgFillColor(ctx: *mut NVGcontext, color: *const NVGcolor) => ();
    pub fn nvgFillPaint(ctx: *mut NVGcontext, paint: *const NVGpaint) => ();
    pub fn nvgStrokeWidth(ctx: *mut NVGcontext, size: c_float) => ();

    pub fn nvgBeginPath(ctx: *mut NVGcontext) => ();
    pub fn nvgMoveTo(ctx: *mut NVGcontext, x: c_float, y: c_float) => ();
    pub fn nvgLineTo(ctx: *mut NVGcontext, x: c_float, y: c_float) => ();
    pub fn nvgBezierTo(
        ctx: *mut NVGcontext,
        c1x: c_float,
        c1y: c_float,
        c2x: c_float,
        c2y: c_float,
        x: c_float,
        y: c_float,
    ) => ();
    pub fn nvgQuadTo(ctx: *mut NVGcontext, cx: c_float, cy: c_float, x: c_float, y: c_float) => ();
    pub fn nvgArcTo(ctx: *mut NVGcontext, x1: c_float, y1: c_float, x2: c_float, y2: c_float, radius: c_float) => ();
    pub fn nvgClosePath(ctx: *mut NVGcontext) => ();
    pub fn nvgPathWinding(ctx: *mut NVGcontext, dir: c_int) => ();
    pub fn nvgArc(
        ctx: *mut NVGcontext,
        cx: c_float,
        cy: c_float,
        r: c_float,
        a0: c_float,
        a1: c_float,
        dir: c_int,
    ) => ();
    pub fn nvgEllipticalArc(
        ctx: *mut NVGcontext,
        cx: c_float,
        cy: c_float,
        rx: c_float,
        ry: c_float,
        a0: c_float,
        a1: c_float,
        dir: c_int,
    ) => ();
    pub fn nvgRect(ctx: *mut NVGcontext, x: c_float, y: c_float, w: c_float, h: c_float) => ();
    pub fn nvgRoundedRect(ctx: *mut NVGcontext, x: c_float, y: c_float, w: c_float, h: c_float, r: c_float) => ();
    pub fn nvgRoundedRectVarying(
        ctx: *mut NVGcontext,
        x: c_float,
        y: c_float,
        w: c_float,
        h: c_float,
        radTopLeft: c_float,
        radTopRight: c_float,
        radBottomRight: c_float,
        radBottomLeft: c_float,
    ) => ();
    pub fn nvgEllipse(ctx: *mut NVGcontext, cx: c_float, cy: c_float, rx: c_float, ry: c_float) => ();
    pub fn nvgCircle(ctx: *mut NVGcontext, cx: c_float, cy: c_float, r: c_float) => ();
    pub fn nvgFill(ctx: *mut NVGcontext) => ();
    pub fn nvgStroke(ctx: *mut NVGcontext) => ();

    pub fn nvgCreateFont(ctx: *mut NVGcontext, name: *const c_char, filename: *const c_char) -> c_int => -1;
    pub fn nvgFontFaceId(ctx: *mut NVGcontext, font: c_int) => ();
    pub fn nvgFontSize(ctx: *mut NVGcontext, size: c_float) => ();
    pub fn nvgTextAlign(ctx: *mut NVGcontext, align: c_int) => ();
    pub fn nvgText(
        ctx: *mut NVGcontext,
        x: c_float,
        y: c_float,
        string: *const c_char,
        end: *const c_char,
    ) -> c_float => 0.0;
}
