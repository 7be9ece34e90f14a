use msfs_compat::{Gauge, MSFSEvent, StandaloneModule};

#[msfs_compat::gauge]
async fn plain(mut gauge: Gauge) -> Result<(), Box<dyn std::error::Error>> {
    while let Some(event) = gauge.next_event().await {
        if let MSFSEvent::Mouse { x, y, .. } = event {
            let _ = (x, y);
        }
    }
    Ok(())
}

#[msfs_compat::gauge(name = RENAMED)]
async fn renamed(_gauge: Gauge) -> Result<(), Box<dyn std::error::Error>> {
    Ok(())
}

#[msfs_compat::standalone_module]
async fn module(_module: StandaloneModule) -> Result<(), Box<dyn std::error::Error>> {
    Ok(())
}

fn main() {
    let _: extern "C" fn(_, _, _) -> bool = plain_gauge_callback;
    let _: extern "C" fn(_, _, _) -> bool = RENAMED_gauge_callback;
    let _: extern "C" fn(_, _, _) = RENAMED_mouse_callback;
    let _: extern "C" fn() = module_init;
    let _: extern "C" fn() = module_deinit;
}
