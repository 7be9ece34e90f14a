use msfs_compat::{sys, Gauge, MSFSEvent, PanelServiceID};
use std::cell::RefCell;
use std::ffi::c_int;

thread_local! {
    static EVENTS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

fn push(event: String) {
    EVENTS.with(|events| events.borrow_mut().push(event));
}

#[msfs_compat::gauge(name = TEST)]
async fn test_gauge(mut gauge: Gauge) -> Result<(), Box<dyn std::error::Error>> {
    if gauge.create_nanovg().is_none() {
        push("no nanovg".to_owned());
    }
    while let Some(event) = gauge.next_event().await {
        match event {
            MSFSEvent::PanelServiceID(PanelServiceID::PostDraw(data)) => {
                push(format!("PostDraw {}", data.height()))
            }
            MSFSEvent::PanelServiceID(id) => push(format!("{:?}", id)),
            MSFSEvent::Mouse { flags, .. } => push(format!("{:?}", flags)),
            MSFSEvent::SimConnect(recv) => push(format!("{:?}", recv)),
        }
    }
    push("stopped".to_owned());
    Ok(())
}

#[test]
fn exported_callbacks_drive_the_gauge() {
    let ctx = std::ptr::null_mut();
    let null = std::ptr::null_mut();
    let mut draw = sys::sGaugeDrawData {
        winHeight: 480,
        ..Default::default()
    };

    assert!(TEST_gauge_callback(ctx, sys::PANEL_SERVICE_PRE_INSTALL as c_int, null));
    assert!(TEST_gauge_callback(ctx, sys::PANEL_SERVICE_PRE_UPDATE as c_int, null));
    assert!(TEST_gauge_callback(
        ctx,
        sys::PANEL_SERVICE_POST_DRAW as c_int,
        &mut draw as *mut sys::sGaugeDrawData as *mut _
    ));
    TEST_mouse_callback(10.0, 20.0, sys::MOUSE_LEFTRELEASE);
    assert!(TEST_gauge_callback(ctx, sys::PANEL_SERVICE_PANEL_OPEN as c_int, null));
    assert!(TEST_gauge_callback(ctx, sys::PANEL_SERVICE_PRE_KILL as c_int, null));
    assert!(TEST_gauge_callback(ctx, sys::PANEL_SERVICE_POST_KILL as c_int, null));

    let events = EVENTS.with(|events| events.borrow().clone());
    assert_eq!(
        events,
        [
            "no nanovg",
            "PreUpdate",
            "PostDraw 480",
            "MouseFlags(LEFT_RELEASE)",
            "PreKill",
            "stopped",
        ]
    );
}
