use rquickjs::{Ctx, Module, Result};
use utils::add_internal_function;

/// Install `console` on the global object.
///
/// # Errors
/// Returns an error if module initialization fails
pub fn init(ctx: &Ctx<'_>) -> Result<()> {
    add_internal_function!(ctx, "print", |msg: String| {
        #[allow(clippy::print_stdout)] // Intentional: console.log implementation
        {
            println!("{msg}");
        }
    });
    add_internal_function!(ctx, "printErr", |msg: String| {
        #[allow(clippy::print_stderr)] // Intentional: console.error implementation
        {
            eprintln!("{msg}");
        }
    });

    let module = Module::evaluate(ctx.clone(), "boot_console", include_str!("console.js"))?;
    module.finish::<()>()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rquickjs::{Context, Runtime};

    fn with_console<F: FnOnce(&Ctx<'_>)>(f: F) {
        let runtime = Runtime::new().unwrap();
        let context = Context::full(&runtime).unwrap();
        context.with(|ctx| {
            utils::init_internal(&ctx).unwrap();
            init(&ctx).unwrap();
            f(&ctx);
        });
    }

    #[test]
    fn console_is_installed() {
        with_console(|ctx| {
            let kinds: String = ctx
                .eval("['log', 'info', 'debug', 'error', 'warn'].map((k) => typeof console[k]).join()")
                .unwrap();
            assert_eq!(kinds, "function,function,function,function,function");
        });
    }

    #[test]
    fn formats_mixed_arguments() {
        with_console(|ctx| {
            let line: String = ctx
                .eval(
                    "globalThis[Symbol.for('mboot.internal')].formatConsole(['a', 1, {b: [2]}, undefined])",
                )
                .unwrap();
            assert_eq!(line, r#"a 1 {"b":[2]} undefined"#);
        });
    }

    #[test]
    fn formats_errors_with_their_stack() {
        with_console(|ctx| {
            let line: String = ctx
                .eval(
                    "globalThis[Symbol.for('mboot.internal')].formatConsole([new Error('bad')])",
                )
                .unwrap();
            assert!(line.starts_with("Error: bad"), "{line}");
            let stack: String = ctx.eval("String(new Error('bad').stack ?? '')").unwrap();
            if !stack.is_empty() {
                assert!(line.contains('\n'), "{line}");
            }
        });
    }

    #[test]
    fn formats_cyclic_values_without_throwing() {
        with_console(|ctx| {
            let line: String = ctx
                .eval(
                    "const o = {}; o.self = o; globalThis[Symbol.for('mboot.internal')].formatConsole([o])",
                )
                .unwrap();
            assert_eq!(line, "[object Object]");
        });
    }
}
