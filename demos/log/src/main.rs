//! Runs the log module against a simulator reachable from this machine.
//! Build with `--features simconnect` to link the desktop SimConnect library.
use msfs_compat::gauge::ExecutorFuture;
use msfs_compat::{logging, StandaloneModule};

fn log_module(module: StandaloneModule) -> ExecutorFuture {
    Box::pin(log_demo::log_module(module))
}

fn main() -> msfs_compat::Result<()> {
    logging::init_logger();
    StandaloneModule::simulate(log_module)
}
