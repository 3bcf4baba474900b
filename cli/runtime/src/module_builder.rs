use rquickjs::{Ctx, Result};

type GlobalInit = Box<dyn Fn(&Ctx<'_>) -> Result<()>>;

/// Ordered list of global initializers making up the standard library.
pub struct ModuleBuilder {
    globals: Vec<GlobalInit>,
}

impl ModuleBuilder {
    pub fn new() -> Self {
        Self {
            globals: Vec::new(),
        }
    }

    pub fn with_global<F>(mut self, init: F) -> Self
    where
        F: Fn(&Ctx<'_>) -> Result<()> + 'static,
    {
        self.globals.push(Box::new(init));
        self
    }

    pub fn build(self) -> GlobalAttachment {
        GlobalAttachment {
            globals: self.globals,
        }
    }
}

impl Default for ModuleBuilder {
    fn default() -> Self {
        // The internal namespace must exist before any binding registers into it.
        Self::new()
            .with_global(utils::init_internal)
            .with_global(boot_console::init)
            .with_global(boot_os::init)
    }
}

pub struct GlobalAttachment {
    globals: Vec<GlobalInit>,
}

impl GlobalAttachment {
    pub fn attach(&self, ctx: &Ctx<'_>) -> Result<()> {
        for init in &self.globals {
            init(ctx)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rquickjs::{Context, Runtime};

    #[test]
    fn default_attaches_console_and_os() {
        let runtime = Runtime::new().unwrap();
        let context = Context::full(&runtime).unwrap();
        context.with(|ctx| {
            ModuleBuilder::default().build().attach(&ctx).unwrap();
            let kinds: String = ctx.eval("`${typeof console}:${typeof os}`").unwrap();
            assert_eq!(kinds, "object:object");
        });
    }

    #[test]
    fn globals_run_in_registration_order() {
        let runtime = Runtime::new().unwrap();
        let context = Context::full(&runtime).unwrap();
        context.with(|ctx| {
            ModuleBuilder::new()
                .with_global(|ctx| ctx.eval::<(), _>("globalThis.order = ['a'];"))
                .with_global(|ctx| ctx.eval::<(), _>("globalThis.order.push('b');"))
                .build()
                .attach(&ctx)
                .unwrap();
            let order: String = ctx.eval("order.join()").unwrap();
            assert_eq!(order, "a,b");
        });
    }
}
