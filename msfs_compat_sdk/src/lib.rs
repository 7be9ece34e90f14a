//! Locates an installed MSFS SDK and derives the clang configuration used to
//! bind its headers.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variables checked for the SDK root, in order.
pub const ENV_VARS: [&str; 2] = ["MSFS2024_SDK", "MSFS_SDK"];

/// Install locations checked when no environment variable points to an SDK.
pub const DEFAULT_PATHS: [&str; 4] = [
    r"C:\MSFS 2024 SDK",
    r"C:\MSFS SDK",
    "/mnt/c/MSFS 2024 SDK",
    "/mnt/c/MSFS SDK",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SdkError {
    #[error("{var} is set to `{}`, which does not exist", path.display())]
    InvalidEnv { var: &'static str, path: PathBuf },
    #[error("unable to find the MSFS SDK, install it or set MSFS2024_SDK or MSFS_SDK")]
    NotFound,
}

/// Finds the SDK root from the process environment and the default install paths.
pub fn locate() -> Result<PathBuf, SdkError> {
    locate_with(|var| std::env::var_os(var), Path::exists)
}

/// Finds the SDK root using `env` to read variables and `exists` to check paths.
///
/// A variable pointing to a missing directory is skipped. If no SDK is found
/// at all, the first such variable is reported instead of `NotFound`.
pub fn locate_with(
    env: impl Fn(&str) -> Option<OsString>,
    exists: impl Fn(&Path) -> bool,
) -> Result<PathBuf, SdkError> {
    let mut invalid = None;
    for var in ENV_VARS {
        let Some(value) = env(var) else { continue };
        let path = PathBuf::from(value);
        if exists(&path) {
            return Ok(path);
        }
        if invalid.is_none() {
            invalid = Some(SdkError::InvalidEnv { var, path });
        }
    }

    DEFAULT_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|path| exists(path))
        .ok_or(invalid.unwrap_or(SdkError::NotFound))
}

/// Directory layout of an SDK install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkLayout {
    root: PathBuf,
}

impl SdkLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn sysroot(&self) -> PathBuf {
        self.root.join("WASM").join("wasi-sysroot")
    }

    pub fn include_dirs(&self) -> Vec<PathBuf> {
        vec![
            self.sysroot().join("include"),
            self.sysroot().join("include").join("c++").join("v1"),
            self.root.join("WASM").join("include"),
            self.root.join("SimConnect SDK").join("include"),
        ]
    }

    /// Holds `SimConnect.lib` and `SimConnect.dll` for desktop clients.
    pub fn simconnect_lib_dir(&self) -> PathBuf {
        self.root.join("SimConnect SDK").join("lib")
    }

    /// Arguments matching what the SDK's own toolchain passes to clang when
    /// building a WASM module.
    pub fn clang_args(&self, debug: bool) -> Vec<String> {
        let mut args: Vec<String> = self
            .include_dirs()
            .iter()
            .map(|dir| format!("-I{}", dir.display()))
            .collect();
        args.push(format!("-D{}", if debug { "_DEBUG" } else { "NDEBUG" }));
        args.extend(
            [
                "-D_MSFS_WASM",
                "-D_STRING_H_CPLUSPLUS_98_CONFORMANCE_",
                "-D_WCHAR_H_CPLUSPLUS_98_CONFORMANCE_",
                "-D_LIBCPP_NO_EXCEPTIONS",
                "-D_LIBCPP_HAS_NO_THREADS",
                "-D_MBCS",
                "-fms-extensions",
                "-m32",
                "-xc++",
                "--target=wasm32-unknown-wasi",
            ]
            .map(String::from),
        );
        args.push(format!("--sysroot={}", self.sysroot().display()));
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<OsString> {
        let vars: HashMap<_, _> = vars.iter().copied().collect();
        move |var: &str| vars.get(var).map(OsString::from)
    }

    #[test]
    fn newer_sdk_variable_wins() {
        let found = locate_with(
            env(&[("MSFS2024_SDK", "/sdk/2024"), ("MSFS_SDK", "/sdk/2020")]),
            |_| true,
        );
        assert_eq!(found, Ok(PathBuf::from("/sdk/2024")));
    }

    #[test]
    fn missing_variable_path_is_skipped() {
        let found = locate_with(
            env(&[("MSFS2024_SDK", "/gone"), ("MSFS_SDK", "/sdk/2020")]),
            |path| path == Path::new("/sdk/2020"),
        );
        assert_eq!(found, Ok(PathBuf::from("/sdk/2020")));
    }

    #[test]
    fn falls_back_to_default_paths() {
        let found = locate_with(env(&[]), |path| path == Path::new("/mnt/c/MSFS SDK"));
        assert_eq!(found, Ok(PathBuf::from("/mnt/c/MSFS SDK")));
    }

    #[test]
    fn reports_invalid_variable() {
        let err = locate_with(env(&[("MSFS_SDK", "/gone")]), |_| false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "MSFS_SDK is set to `/gone`, which does not exist"
        );
        assert_eq!(locate_with(env(&[]), |_| false), Err(SdkError::NotFound));
    }

    #[test]
    fn clang_args_point_into_sdk() {
        let args = SdkLayout::new("/sdk").clang_args(true);
        let sysroot = Path::new("/sdk").join("WASM").join("wasi-sysroot");
        assert_eq!(args[0], format!("-I{}", sysroot.join("include").display()));
        assert!(args.contains(&"-D_DEBUG".to_owned()));
        assert!(args.contains(&"--target=wasm32-unknown-wasi".to_owned()));
        assert_eq!(args.last(), Some(&format!("--sysroot={}", sysroot.display())));
        assert!(SdkLayout::new("/sdk").clang_args(false).contains(&"-DNDEBUG".to_owned()));
    }

    #[test]
    fn simconnect_library_sits_next_to_headers() {
        let layout = SdkLayout::new("/sdk");
        let simconnect = Path::new("/sdk").join("SimConnect SDK");
        assert_eq!(layout.simconnect_lib_dir(), simconnect.join("lib"));
        assert!(layout.include_dirs().contains(&simconnect.join("include")));
    }
}
