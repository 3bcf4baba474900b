use crate::args::ArgList;
use crate::config::LaunchConfig;
use crate::error::LaunchError;
use crate::loader::{FileLoader, SearchPathResolver};
use crate::module_builder::ModuleBuilder;
use crate::require::{self, REQUIRE_GLOBAL};
use rquickjs::{CatchResultExt, Context, Function, Runtime, Value};

/// Stack limit QuickJS starts out with, in bytes.
pub const DEFAULT_STACK_SIZE: usize = 1024 * 1024;
/// Size of one interpreter value slot, in bytes.
pub const STACK_SLOT_SIZE: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Succeeded,
    Failed,
}

/// Stack limit with room for one extra slot per argument after `argv[0]`.
///
/// # Errors
/// [`LaunchError::StackCannotGrow`] if the size overflows or exceeds `max_stack_size`.
pub fn stack_size_for(argc: usize, max_stack_size: usize) -> Result<usize, LaunchError> {
    let requested = argc.saturating_sub(1);
    requested
        .checked_mul(STACK_SLOT_SIZE)
        .and_then(|extra| DEFAULT_STACK_SIZE.checked_add(extra))
        .filter(|size| *size <= max_stack_size)
        .ok_or(LaunchError::StackCannotGrow { requested })
}

/// An interpreter set up to run one entry module.
pub struct Launcher {
    runtime: Runtime,
    context: Context,
    config: LaunchConfig,
    state: State,
}

impl Launcher {
    /// Create the interpreter and load the standard library, `require` included.
    ///
    /// # Errors
    /// Returns an error if the runtime or context cannot be created.
    pub fn new(config: LaunchConfig) -> Result<Self, LaunchError> {
        let runtime = Runtime::new()?;

        // Set module loader before creating context
        runtime.set_loader(
            SearchPathResolver::new(config.search_path.clone()),
            FileLoader,
        );

        let context = Context::full(&runtime)?;

        let search_path = config.search_path.to_string();
        let stdlib = ModuleBuilder::default()
            .with_global(move |ctx| require::init(ctx, &search_path))
            .build();
        context.with(|ctx| stdlib.attach(&ctx))?;

        Ok(Self {
            runtime,
            context,
            config,
            state: State::Running,
        })
    }

    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Expose `args` as the global `arg`.
    ///
    /// # Errors
    /// Returns an error if the array cannot be created.
    pub fn bind_args(&self, args: &ArgList) -> Result<(), LaunchError> {
        self.context.with(|ctx| args.bind(&ctx))?;
        Ok(())
    }

    /// Raise the stack limit for `argc` arguments and return the new limit.
    ///
    /// # Errors
    /// [`LaunchError::StackCannotGrow`] if the limit cannot be satisfied.
    pub fn reserve_stack(&self, argc: usize) -> Result<usize, LaunchError> {
        let size = stack_size_for(argc, self.config.max_stack_size)?;
        self.runtime.set_max_stack_size(size);
        Ok(size)
    }

    /// Call `require(entry_module)` and record the outcome.
    ///
    /// # Errors
    /// [`LaunchError::EntryPoint`] for anything the entry module or its
    /// resolution throws.
    pub fn run_entry(&mut self) -> Result<(), LaunchError> {
        let entry = self.config.entry_module.as_str();
        let result = self.context.with(|ctx| {
            ctx.globals()
                .get::<_, Function>(REQUIRE_GLOBAL)
                .and_then(|require| require.call::<_, Value>((entry,)))
                .map(|_| ())
                .catch(&ctx)
                .map_err(LaunchError::from_caught)
        });

        self.state = if result.is_ok() {
            State::Succeeded
        } else {
            State::Failed
        };
        result
    }
}

/// Run the whole launch sequence for `args`.
///
/// # Errors
/// Any [`LaunchError`] from setup or the entry module.
pub fn launch(config: LaunchConfig, args: &ArgList) -> Result<(), LaunchError> {
    let mut launcher = Launcher::new(config)?;
    launcher.bind_args(args)?;
    launcher.reserve_stack(args.len())?;
    launcher.run_entry()
}
