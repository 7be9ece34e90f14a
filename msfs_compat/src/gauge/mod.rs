//! Gauge and standalone module runtime.
//!
//! A module is an `async fn` which receives events from the simulator. The
//! `#[gauge]` and `#[standalone_module]` attributes export the C entry points
//! the simulator calls and forward every call to an executor, which polls the
//! module future until it waits for the next event.

mod executor;

#[doc(hidden)]
pub use executor::{Executor, ExecutorFuture};

use crate::error::{Error, Result};
use crate::sim_connect::{RecvBuffer, SimConnect, SimConnectRecv};
use crate::sys;
use bitflags::bitflags;
use futures::{channel::mpsc, StreamExt};
use log::{debug, warn};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::ffi::{c_int, c_uint, c_void};
use std::pin::Pin;
use std::time::Duration;

/// `PanelServiceID` is passed to gauges for every panel service call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelServiceID<'a> {
    PostInstall,
    PreInitialize,
    PostInitialize,
    PreUpdate,
    PostUpdate,
    PreDraw(&'a sys::sGaugeDrawData),
    PostDraw(&'a sys::sGaugeDrawData),
    PreKill,
}

impl<'a> PanelServiceID<'a> {
    /// Decodes a `PANEL_SERVICE_*` id. Install, kill and unknown ids are
    /// handled by the executor and decode to `None`.
    pub fn from_raw(service_id: u32, draw_data: &'a sys::sGaugeDrawData) -> Option<Self> {
        Some(match service_id {
            sys::PANEL_SERVICE_POST_INSTALL => PanelServiceID::PostInstall,
            sys::PANEL_SERVICE_PRE_INITIALIZE => PanelServiceID::PreInitialize,
            sys::PANEL_SERVICE_POST_INITIALIZE => PanelServiceID::PostInitialize,
            sys::PANEL_SERVICE_PRE_UPDATE => PanelServiceID::PreUpdate,
            sys::PANEL_SERVICE_POST_UPDATE => PanelServiceID::PostUpdate,
            sys::PANEL_SERVICE_PRE_DRAW => PanelServiceID::PreDraw(draw_data),
            sys::PANEL_SERVICE_POST_DRAW => PanelServiceID::PostDraw(draw_data),
            sys::PANEL_SERVICE_PRE_KILL => PanelServiceID::PreKill,
            _ => return None,
        })
    }
}

fn is_draw(service_id: u32) -> bool {
    matches!(
        service_id,
        sys::PANEL_SERVICE_PRE_DRAW | sys::PANEL_SERVICE_POST_DRAW
    )
}

impl sys::sGaugeDrawData {
    pub fn width(&self) -> i32 {
        self.winWidth
    }

    pub fn height(&self) -> i32 {
        self.winHeight
    }

    /// Framebuffer pixels per window pixel.
    pub fn device_pixel_ratio(&self) -> f32 {
        if self.winWidth > 0 {
            self.fbWidth as f32 / self.winWidth as f32
        } else {
            1.0
        }
    }
}

bitflags! {
    /// Mouse state passed to gauge mouse callbacks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MouseFlags: u32 {
        const RIGHT_SINGLE = sys::MOUSE_RIGHTSINGLE;
        const MIDDLE_SINGLE = sys::MOUSE_MIDDLESINGLE;
        const LEFT_SINGLE = sys::MOUSE_LEFTSINGLE;
        const RIGHT_DOUBLE = sys::MOUSE_RIGHTDOUBLE;
        const MIDDLE_DOUBLE = sys::MOUSE_MIDDLEDOUBLE;
        const LEFT_DOUBLE = sys::MOUSE_LEFTDOUBLE;
        const RIGHT_DRAG = sys::MOUSE_RIGHTDRAG;
        const MIDDLE_DRAG = sys::MOUSE_MIDDLEDRAG;
        const LEFT_DRAG = sys::MOUSE_LEFTDRAG;
        const MOVE = sys::MOUSE_MOVE;
        const DOWN_REPEAT = sys::MOUSE_DOWN_REPEAT;
        const RIGHT_RELEASE = sys::MOUSE_RIGHTRELEASE;
        const MIDDLE_RELEASE = sys::MOUSE_MIDDLERELEASE;
        const LEFT_RELEASE = sys::MOUSE_LEFTRELEASE;
        const WHEEL_FLIP = sys::MOUSE_WHEEL_FLIP;
        const WHEEL_SKIP = sys::MOUSE_WHEEL_SKIP;
        const WHEEL_UP = sys::MOUSE_WHEEL_UP;
        const WHEEL_DOWN = sys::MOUSE_WHEEL_DOWN;
        const MOVE_REPEAT = sys::MOUSE_MOVE_REPEAT;
        const LEAVE = sys::MOUSE_LEAVE;
    }
}

#[derive(Debug)]
pub enum MSFSEvent<'a> {
    PanelServiceID(PanelServiceID<'a>),
    Mouse { x: f32, y: f32, flags: MouseFlags },
    SimConnect(SimConnectRecv<'a>),
}

/// An event as queued for a gauge. Borrowed data is copied so the event
/// outlives the simulator callback that produced it.
#[doc(hidden)]
#[derive(Debug)]
pub enum GaugeMessage {
    PanelService(u32, sys::sGaugeDrawData),
    Mouse { x: f32, y: f32, flags: MouseFlags },
    SimConnect(RecvBuffer),
}

impl GaugeMessage {
    fn as_event(&self) -> Option<MSFSEvent<'_>> {
        match self {
            GaugeMessage::PanelService(service_id, draw_data) => {
                PanelServiceID::from_raw(*service_id, draw_data).map(MSFSEvent::PanelServiceID)
            }
            GaugeMessage::Mouse { x, y, flags } => Some(MSFSEvent::Mouse {
                x: *x,
                y: *y,
                flags: *flags,
            }),
            GaugeMessage::SimConnect(buffer) => buffer.recv().map(MSFSEvent::SimConnect),
        }
    }
}

/// Gauge
pub struct Gauge {
    executor: *const GaugeExecutor,
    rx: mpsc::Receiver<GaugeMessage>,
    current: Option<GaugeMessage>,
}

impl Gauge {
    /// Send a request to the Microsoft Flight Simulator server to open up communications with a new client.
    ///
    /// Messages for the session arrive through [`Gauge::next_event`].
    pub fn open_simconnect(&self, name: &str) -> Result<Pin<Box<SimConnect<'static>>>> {
        let executor = self.executor;
        SimConnect::open(name, move |_sim, recv| unsafe { &*executor }.forward(&recv))
    }

    /// Consume the next event from MSFS.
    pub async fn next_event(&mut self) -> Option<MSFSEvent<'_>> {
        let message = self.rx.next().await?;
        self.current.insert(message).as_event()
    }

    /// The context this gauge was installed with.
    pub fn context(&self) -> sys::FsContext {
        unsafe { (*self.executor).fs_ctx.get() }
    }

    /// Create a NanoVG rendering context for this gauge.
    pub fn create_nanovg(&self) -> Option<crate::nvg::Context> {
        crate::nvg::Context::create(self.context())
    }
}

#[doc(hidden)]
pub struct GaugeExecutor {
    executor: Executor<Gauge, GaugeMessage>,
    fs_ctx: Cell<sys::FsContext>,
}

#[doc(hidden)]
impl GaugeExecutor {
    pub const fn new(handle: fn(Gauge) -> ExecutorFuture) -> Self {
        Self {
            executor: Executor::new(handle),
            fs_ctx: Cell::new(std::ptr::null_mut()),
        }
    }

    pub fn handle_gauge(&self, ctx: sys::FsContext, service_id: c_int, p_data: *mut c_void) -> bool {
        let service_id = service_id as u32;
        let result = match service_id {
            sys::PANEL_SERVICE_PRE_INSTALL => {
                self.fs_ctx.set(ctx);
                let executor = self as *const GaugeExecutor;
                self.executor.start(move |rx| Gauge {
                    executor,
                    rx,
                    current: None,
                })
            }
            sys::PANEL_SERVICE_POST_KILL => match self.executor.send(None) {
                Err(Error::ExecutorIdle) => Ok(()),
                result => result,
            },
            service_id => {
                let draw_data = if is_draw(service_id) && !p_data.is_null() {
                    unsafe { std::ptr::read_unaligned(p_data as *const sys::sGaugeDrawData) }
                } else {
                    sys::sGaugeDrawData::default()
                };
                if PanelServiceID::from_raw(service_id, &draw_data).is_none() {
                    return true;
                }
                self.executor
                    .send(Some(GaugeMessage::PanelService(service_id, draw_data)))
            }
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                warn!("gauge service {} failed: {}", service_id, e);
                false
            }
        }
    }

    pub fn handle_mouse(&self, x: f32, y: f32, flags: c_uint) {
        let flags = MouseFlags::from_bits_retain(flags);
        if let Err(e) = self.executor.send(Some(GaugeMessage::Mouse { x, y, flags })) {
            warn!("dropped mouse event: {}", e);
        }
    }

    fn forward(&self, recv: &SimConnectRecv) {
        if let SimConnectRecv::Null = recv {
            return;
        }
        let message = GaugeMessage::SimConnect(RecvBuffer::from(recv));
        if let Err(e) = self.executor.send(Some(message)) {
            warn!("dropped SimConnect message: {}", e);
        }
    }
}

pub struct StandaloneModule {
    executor: *const StandaloneModuleExecutor,
    rx: mpsc::Receiver<RecvBuffer>,
    current: Option<RecvBuffer>,
}

impl StandaloneModule {
    /// Send a request to the Microsoft Flight Simulator server to open up communications with a new client.
    pub fn open_simconnect(&self, name: &str) -> Result<Pin<Box<SimConnect<'static>>>> {
        let executor = self.executor;
        let mut sim =
            SimConnect::open(name, move |_sim, recv| unsafe { &*executor }.forward(&recv))?;
        StandaloneModuleExecutor::track(executor, sim.as_mut());
        Ok(sim)
    }

    /// Consume the next event from MSFS.
    pub async fn next_event(&mut self) -> Option<SimConnectRecv<'_>> {
        let message = self.rx.next().await?;
        self.current.insert(message).recv()
    }

    /// Runs a module outside of the simulator's module loader.
    ///
    /// Every session the module opens is dispatched every 10 ms. Returns once
    /// the module finishes or has no open session left. SimConnect only
    /// reaches a simulator from a desktop process with the `simconnect`
    /// feature, see [`sys::has_simconnect`].
    pub fn simulate(module: fn(StandaloneModule) -> ExecutorFuture) -> Result<()> {
        if !sys::has_simconnect() {
            warn!("SimConnect is not linked, sessions will fail to open");
        }
        let executor = Box::new(StandaloneModuleExecutor::new(module));
        executor.start()?;

        while executor.executor.is_running() {
            let sessions = executor.sessions.borrow().clone();
            if sessions.is_empty() {
                debug!("no SimConnect session left, stopping module");
                break;
            }
            for session in sessions {
                if !executor.sessions.borrow().contains(&session) {
                    continue;
                }
                executor.dispatching.set(true);
                let dispatched = unsafe { SimConnect::dispatch_raw(session) };
                executor.dispatching.set(false);
                if let Err(e) = dispatched {
                    warn!("SimConnect dispatch failed: {}", e);
                }
                executor.flush()?;
                if !executor.executor.is_running() {
                    break;
                }
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        if executor.executor.is_running() {
            executor.executor.send(None)?;
        }
        Ok(())
    }
}

#[doc(hidden)]
pub struct StandaloneModuleExecutor {
    // Dropped before `sessions`, which closing sessions still update.
    executor: Executor<StandaloneModule, RecvBuffer>,
    sessions: RefCell<Vec<*mut SimConnect<'static>>>,
    dispatching: Cell<bool>,
    // Messages of the dispatch in progress, handed over once it returns.
    pending: RefCell<VecDeque<RecvBuffer>>,
}

#[doc(hidden)]
impl StandaloneModuleExecutor {
    pub const fn new(handle: fn(StandaloneModule) -> ExecutorFuture) -> Self {
        Self {
            executor: Executor::new(handle),
            sessions: RefCell::new(Vec::new()),
            dispatching: Cell::new(false),
            pending: RefCell::new(VecDeque::new()),
        }
    }

    /// Registers `sim` with `simulate` until it is closed.
    fn track(executor: *const StandaloneModuleExecutor, mut sim: Pin<&mut SimConnect<'static>>) {
        let session: *mut SimConnect<'static> = unsafe { sim.as_mut().get_unchecked_mut() };
        unsafe { &*executor }.sessions.borrow_mut().push(session);
        sim.set_on_close(move || {
            let executor = unsafe { &*executor };
            executor.sessions.borrow_mut().retain(|s| *s != session);
        });
    }

    fn forward(&self, recv: &SimConnectRecv) {
        if let SimConnectRecv::Null = recv {
            return;
        }
        let message = RecvBuffer::from(recv);
        if self.dispatching.get() {
            self.pending.borrow_mut().push_back(message);
        } else if let Err(e) = self.executor.send(Some(message)) {
            warn!("dropped SimConnect message: {}", e);
        }
    }

    /// Hands the messages of the last dispatch to the module, one poll each.
    /// Messages the module is not ready for stay queued for the next round.
    fn flush(&self) -> Result<()> {
        loop {
            let Some(message) = self.pending.borrow_mut().pop_front() else {
                return Ok(());
            };
            match self.executor.send(Some(message.clone())) {
                Ok(()) => {}
                Err(Error::EventDropped) => {
                    self.pending.borrow_mut().push_front(message);
                    return Ok(());
                }
                Err(Error::ExecutorIdle) => {
                    self.pending.borrow_mut().clear();
                    return Ok(());
                }
                Err(e) => {
                    self.pending.borrow_mut().clear();
                    return Err(e);
                }
            }
        }
    }

    fn start(&self) -> Result<()> {
        let executor = self as *const StandaloneModuleExecutor;
        self.executor.start(move |rx| StandaloneModule {
            executor,
            rx,
            current: None,
        })
    }

    pub fn handle_init(&self) {
        if let Err(e) = self.start() {
            warn!("module init failed: {}", e);
        }
    }

    pub fn handle_deinit(&self) {
        match self.executor.send(None) {
            Ok(()) | Err(Error::ExecutorIdle) => {}
            Err(e) => warn!("module deinit failed: {}", e),
        }
    }
}
