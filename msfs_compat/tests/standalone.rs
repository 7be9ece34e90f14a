#[cfg(not(feature = "simconnect"))]
use msfs_compat::gauge::ExecutorFuture;
#[cfg(not(feature = "simconnect"))]
use msfs_compat::Error;
use msfs_compat::StandaloneModule;
use std::cell::Cell;

thread_local! {
    static RUNNING: Cell<bool> = const { Cell::new(false) };
}

#[msfs_compat::standalone_module]
async fn module(mut module: StandaloneModule) -> Result<(), Box<dyn std::error::Error>> {
    RUNNING.with(|running| running.set(true));
    while module.next_event().await.is_some() {}
    RUNNING.with(|running| running.set(false));
    Ok(())
}

#[cfg(not(feature = "simconnect"))]
fn open_session(module: StandaloneModule) -> ExecutorFuture {
    Box::pin(async move {
        let _sim = module.open_simconnect("standalone")?;
        Ok(())
    })
}

#[test]
fn module_runs_between_init_and_deinit() {
    module_init();
    assert!(RUNNING.with(Cell::get));
    module_deinit();
    assert!(!RUNNING.with(Cell::get));
}

#[test]
#[cfg(not(feature = "simconnect"))]
fn simulate_without_simulator_fails() {
    let err = StandaloneModule::simulate(open_session).unwrap_err();
    assert!(matches!(err, Error::Module(_)));
    assert_eq!(
        err.to_string(),
        "module failed: SimConnect call failed with HRESULT 0x80004005"
    );
}
