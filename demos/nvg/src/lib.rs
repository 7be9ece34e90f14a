//! Draws a white square on a black background.
use msfs_compat::nvg::{Color, Style};
use msfs_compat::{MSFSEvent, PanelServiceID};

#[msfs_compat::gauge(name = DEMO)]
async fn demo(mut gauge: msfs_compat::Gauge) -> Result<(), Box<dyn std::error::Error>> {
    msfs_compat::logging::install_panic_hook();
    let nvg = gauge.create_nanovg().ok_or("NanoVG is not available")?;
    let background = Style::new().fill(Color::from_rgb(0, 0, 0));
    let square = Style::new()
        .fill(Color::from_rgb(255, 255, 255))
        .stroke(Color::from_rgb(255, 0, 0))
        .stroke_width(2.0);

    while let Some(event) = gauge.next_event().await {
        if let MSFSEvent::PanelServiceID(PanelServiceID::PreDraw(d)) = event {
            let (width, height) = (d.width() as f32, d.height() as f32);
            nvg.draw_frame(width, height, d.device_pixel_ratio(), |f| {
                f.draw_path(&background, |p| {
                    p.rect(0.0, 0.0, width, height);
                    Ok(())
                })?;
                f.draw_path(&square, |p| {
                    p.rect(20.0, 20.0, 40.0, 40.0);
                    Ok(())
                })
            })?;
        }
    }

    Ok(())
}
