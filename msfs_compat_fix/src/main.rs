//! Re-exports the allocator functions the simulator calls into, which rustc
//! does not export from `cdylib` WASM modules
//! (https://github.com/rust-lang/rfcs/issues/2771).

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

const EXPORTS: [&str; 2] = ["malloc", "free"];

fn main() -> Result<()> {
    let mut args = std::env::args_os().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        bail!("usage: msfs-compat-fix <input.wasm> <output.wasm>");
    };
    let (input, output) = (PathBuf::from(input), PathBuf::from(output));

    let mut module = walrus::Module::from_file(&input)
        .with_context(|| format!("failed to parse {}", input.display()))?;
    export_functions(&mut module, &EXPORTS)?;
    module
        .emit_wasm_file(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}

fn export_functions(module: &mut walrus::Module, names: &[&str]) -> Result<()> {
    for name in names {
        if module.exports.iter().any(|export| export.name == *name) {
            continue;
        }
        let func = module
            .funcs
            .by_name(name)
            .with_context(|| format!("module has no `{}` function to export", name))?;
        module.exports.add(name, func);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use walrus::{FunctionBuilder, Module, ValType};

    fn module_with(names: &[&str]) -> Module {
        let mut module = Module::default();
        for name in names {
            let mut builder = FunctionBuilder::new(&mut module.types, &[ValType::I32], &[]);
            builder.func_body();
            let func = builder.finish(vec![module.locals.add(ValType::I32)], &mut module.funcs);
            module.funcs.get_mut(func).name = Some(name.to_string());
        }
        module
    }

    #[test]
    fn exports_allocator() {
        let mut module = module_with(&["malloc", "free"]);
        export_functions(&mut module, &EXPORTS).unwrap();
        // Already exported functions are kept as they are.
        export_functions(&mut module, &EXPORTS).unwrap();
        let mut exported: Vec<_> = module.exports.iter().map(|e| e.name.clone()).collect();
        exported.sort();
        assert_eq!(exported, vec!["free", "malloc"]);
    }

    #[test]
    fn missing_function_is_named() {
        let mut module = module_with(&["malloc"]);
        let err = export_functions(&mut module, &EXPORTS).unwrap_err();
        assert_eq!(err.to_string(), "module has no `free` function to export");
    }
}
