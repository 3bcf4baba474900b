use rquickjs::{Ctx, Module};
use std::env;
use std::sync::OnceLock;
use std::time::Instant;
use utils::add_internal_function;

static STARTED: OnceLock<Instant> = OnceLock::new();

/// Seconds elapsed since the first call into this module.
fn clock() -> f64 {
    STARTED.get_or_init(Instant::now).elapsed().as_secs_f64()
}

/// Install `os` (`exit`, `getenv`, `clock`) on the global object.
///
/// # Errors
/// Returns an error if module initialization fails
pub fn init(ctx: &Ctx<'_>) -> rquickjs::Result<()> {
    STARTED.get_or_init(Instant::now);

    add_internal_function!(ctx, "exit", |code: i32| -> i32 {
        #[allow(clippy::exit)] // Intentional: implements os.exit()
        {
            std::process::exit(code);
        }
    });
    add_internal_function!(ctx, "getenv", |key: String| -> Option<String> {
        env::var(&key).ok()
    });
    add_internal_function!(ctx, "clock", clock);

    let module = Module::evaluate(ctx.clone(), "boot_os", include_str!("os.js"))?;
    module.finish::<()>()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rquickjs::{Context, Runtime};

    fn with_os<F: FnOnce(&Ctx<'_>)>(f: F) {
        let runtime = Runtime::new().unwrap();
        let context = Context::full(&runtime).unwrap();
        context.with(|ctx| {
            utils::init_internal(&ctx).unwrap();
            init(&ctx).unwrap();
            f(&ctx);
        });
    }

    #[test]
    fn getenv_reads_process_environment() {
        with_os(|ctx| {
            let path: bool = ctx.eval("typeof os.getenv('PATH') === 'string'").unwrap();
            assert!(path);
            let missing: bool = ctx
                .eval("os.getenv('MBOOT_SURELY_UNSET_VARIABLE') === undefined")
                .unwrap();
            assert!(missing);
        });
    }

    #[test]
    fn clock_is_monotonic() {
        with_os(|ctx| {
            let ordered: bool = ctx
                .eval("const a = os.clock(); const b = os.clock(); a >= 0 && b >= a")
                .unwrap();
            assert!(ordered);
        });
    }
}
