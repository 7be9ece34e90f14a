//! Log setup for modules and desktop tools.
//!
//! The crate itself only emits through the `log` facade. Binaries and modules
//! that want the output call [`init_logger`] once at startup.

use log::{error, LevelFilter};

/// Installs `env_logger` with a `[LEVEL] target: message` format.
///
/// The filter is read from `RUST_LOG` and defaults to `Info`. Calling this more
/// than once is harmless.
pub fn init_logger() {
    let mut builder = env_logger::Builder::from_default_env();

    if std::env::var("RUST_LOG").is_err() {
        builder.filter_level(LevelFilter::Info);
    }

    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(
            buf,
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        )
    });

    let _ = builder.try_init();
}

/// Routes panics through the logger.
///
/// A panic inside a WASM module aborts the module without unwinding, so the
/// message is otherwise lost.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        error!("{}", panic_message(info));
    }));
}

fn panic_message(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };

    match info.location() {
        Some(location) => format!(
            "panicked at {}:{}:{}: {}",
            location.file(),
            location.line(),
            location.column(),
            payload
        ),
        None => format!("panicked: {}", payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice() {
        init_logger();
        init_logger();
        log::info!("logger initialized");
    }
}
