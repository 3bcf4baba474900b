use rquickjs::{Ctx, Function, Module, Object, Result, Value};

/// Name of the global module-loading function.
pub const REQUIRE_GLOBAL: &str = "require";

/// Install `require`, with its module cache at `require.loaded` and the
/// search path at `require.path`.
///
/// `search_path` is only informative on the JavaScript side; resolution
/// goes through the runtime's resolver.
///
/// # Errors
/// Returns an error if the globals cannot be created.
pub fn init(ctx: &Ctx<'_>, search_path: &str) -> Result<()> {
    let require = Function::new(ctx.clone(), require)?;
    require.set("loaded", Object::new(ctx.clone())?)?;
    require.set("path", search_path)?;

    ctx.globals().set(REQUIRE_GLOBAL, require)?;
    Ok(())
}

fn loaded_table<'js>(ctx: &Ctx<'js>) -> Result<Object<'js>> {
    let require: Function = ctx.globals().get(REQUIRE_GLOBAL)?;
    require.get("loaded")
}

/// Names whose target depends on the calling module.
fn is_relative(name: &str) -> bool {
    name.starts_with("./") || name.starts_with("../")
}

/// Import `name` and hand back its namespace.
///
/// Search-path names are cached in `require.loaded`. Relative names are
/// left to the engine's module map, which is keyed by resolved path.
fn require<'js>(ctx: Ctx<'js>, name: String) -> Result<Value<'js>> {
    if is_relative(&name) {
        return Module::import(&ctx, name.as_str())?.finish();
    }

    let loaded = loaded_table(&ctx)?;
    if loaded.contains_key(name.as_str())? {
        return loaded.get(name.as_str());
    }

    let namespace: Value = Module::import(&ctx, name.as_str())?.finish()?;
    loaded.set(name.as_str(), namespace.clone())?;
    Ok(namespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_dot_prefixed_names_are_relative() {
        assert!(is_relative("./util.js"));
        assert!(is_relative("../util.js"));
        assert!(!is_relative("util"));
        assert!(!is_relative("util.math"));
        assert!(!is_relative("/abs/util.js"));
    }
}
