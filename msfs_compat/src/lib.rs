//! # msfs-compat
//!
//! Portable bindings for the Microsoft Flight Simulator WASM SDK.
//!
//! These bindings include:
//!
//! - the SDK type shim and raw imports ([`sys`])
//! - Gauge and standalone module API ([`gauge`])
//! - Legacy aircraft variables and calculator code ([`legacy`])
//! - Vars API ([`vars`])
//! - SimConnect API ([`sim_connect`])
//! - CommBus, Network and NanoVG APIs
//!
//! Every import has a host fallback, so modules build and unit test on a
//! desktop. Outside the simulator SimConnect calls fail with `E_FAIL`,
//! variable lookups report unknown names and render contexts are unavailable.
//!
//! ## Building
//!
//! The `bindgen` feature generates the complete SDK surface into `sys::sdk`.
//! It needs an installed SDK, located through `MSFS2024_SDK`, `MSFS_SDK` or the
//! default install paths.
//!
//! ## Known Issues and Work-Arounds
//!
//! ### Symbol visibility bug in Rust
//! Until https://github.com/rust-lang/rfcs/issues/2771 is fixed, you will have
//! to run the `msfs-compat-fix` util on your output wasm files, like so:
//! ```shell
//! $ cargo build
//! $ msfs-compat-fix target/wasm32-wasip1/release/foo.wasm ./foo.wasm
//! ```

pub mod commbus;
mod error;
pub mod gauge;
pub mod legacy;
pub mod logging;
pub mod network;
pub mod nvg;
pub mod sim_connect;
pub mod sys;
pub mod vars;

pub use error::{Error, Result};
pub use gauge::{Gauge, MSFSEvent, MouseFlags, PanelServiceID, StandaloneModule};

#[cfg(feature = "derive")]
pub use msfs_compat_derive::{gauge, standalone_module};
