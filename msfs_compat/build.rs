fn main() {
    println!("cargo:rerun-if-env-changed=MSFS2024_SDK");
    println!("cargo:rerun-if-env-changed=MSFS_SDK");

    #[cfg(feature = "bindgen")]
    generate_sdk_bindings();

    #[cfg(feature = "simconnect")]
    link_simconnect();
}

/// Points the linker at the desktop SimConnect client library.
#[cfg(feature = "simconnect")]
fn link_simconnect() {
    if std::env::var("CARGO_CFG_TARGET_ARCH").as_deref() == Ok("wasm32") {
        return;
    }
    match msfs_compat_sdk::locate() {
        Ok(root) => {
            let lib_dir = msfs_compat_sdk::SdkLayout::new(root).simconnect_lib_dir();
            println!("cargo:rustc-link-search=native={}", lib_dir.display());
        }
        // The library may still be on the linker's default search path.
        Err(e) => println!("cargo:warning={}", e),
    }
}

/// Generates `sys::sdk` from the installed SDK headers.
#[cfg(feature = "bindgen")]
fn generate_sdk_bindings() {
    use std::path::PathBuf;

    let root = match msfs_compat_sdk::locate() {
        Ok(root) => root,
        Err(e) => panic!("the `bindgen` feature needs an installed MSFS SDK: {}", e),
    };
    println!("Found MSFS SDK: {}", root.display());
    let layout = msfs_compat_sdk::SdkLayout::new(root);

    println!("cargo:rerun-if-changed=src/bindgen_support/wrapper.h");
    let bindings = bindgen::Builder::default()
        .clang_args(layout.clang_args(cfg!(debug_assertions)))
        .header("src/bindgen_support/wrapper.h")
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        .impl_debug(true)
        .generate()
        .unwrap_or_else(|e| panic!("failed to generate SDK bindings: {}", e));

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    bindings
        .write_to_file(out_dir.join("sdk_bindings.rs"))
        .unwrap_or_else(|e| panic!("failed to write SDK bindings: {}", e));
}
