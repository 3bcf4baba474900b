use rquickjs::{Ctx, Result};

/// Registry key of the object holding native functions that the bundled
/// JavaScript shims wrap before exposing them as globals.
pub const INTERNAL_SYMBOL: &str = "mboot.internal";

/// Create the internal namespace object if it does not exist yet.
///
/// # Errors
/// Returns an error if the global object cannot be read or written.
pub fn init_internal(ctx: &Ctx<'_>) -> Result<()> {
    ctx.eval::<(), _>(format!(
        "globalThis[Symbol.for('{INTERNAL_SYMBOL}')] ||= {{}};"
    ))
}

/// Register a Rust closure under `globalThis[Symbol.for('mboot.internal')]`.
///
/// Dotted names (`"env.get"`) require the parent object to exist.
#[macro_export]
macro_rules! add_internal_function {
    ($ctx:expr, $name:expr, $func:expr) => {{
        use rquickjs::function::Func;
        let temp_name = format!("__mboot_internal_{}", $name.replace('.', "_"));
        let internal_path = format!(
            "globalThis[Symbol.for('{}')].{}",
            $crate::INTERNAL_SYMBOL,
            $name
        );

        let func = Func::from($func);
        $ctx.globals().set(temp_name.as_str(), func)?;
        $ctx.eval::<(), _>(format!(
            "{} = globalThis.{}; delete globalThis.{};",
            internal_path, temp_name, temp_name
        ))?
    }};
}
