use rquickjs::{CaughtError, Coerced};

/// Failure of a launch, reported as `Error:<message>` with exit code 1.
#[derive(Debug)]
pub enum LaunchError {
    /// The interpreter could not be created or set up.
    Engine(rquickjs::Error),
    /// The stack limit needed for the argument count is out of bounds.
    StackCannotGrow { requested: usize },
    /// The entry module failed to resolve, load or run.
    EntryPoint {
        message: String,
        stack: Option<String>,
    },
}

impl LaunchError {
    pub fn stack(&self) -> Option<&str> {
        match self {
            LaunchError::EntryPoint { stack, .. } => stack.as_deref(),
            _ => None,
        }
    }

    /// Collapse whatever the entry module threw into an entry-point failure.
    pub(crate) fn from_caught(caught: CaughtError<'_>) -> Self {
        match caught {
            CaughtError::Exception(exception) => {
                let message = exception
                    .message()
                    .unwrap_or_else(|| "Exception (no message)".to_string());
                let stack = exception.stack().filter(|stack| !stack.is_empty());
                LaunchError::EntryPoint { message, stack }
            }
            CaughtError::Value(value) => {
                let message = value
                    .get::<Coerced<String>>()
                    .map(|coerced| coerced.0)
                    .unwrap_or_else(|_| format!("{value:?}"));
                LaunchError::EntryPoint {
                    message,
                    stack: None,
                }
            }
            CaughtError::Error(error) => LaunchError::EntryPoint {
                message: error.to_string(),
                stack: None,
            },
        }
    }
}

impl std::fmt::Display for LaunchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaunchError::Engine(e) => write!(f, "{e}"),
            LaunchError::StackCannotGrow { .. } => write!(f, "Stack can not grow"),
            LaunchError::EntryPoint { message, .. } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LaunchError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<rquickjs::Error> for LaunchError {
    fn from(e: rquickjs::Error) -> Self {
        LaunchError::Engine(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rquickjs::{CatchResultExt, Context, Runtime, Value};

    fn caught_from(script: &str) -> LaunchError {
        let runtime = Runtime::new().unwrap();
        let context = Context::full(&runtime).unwrap();
        context.with(|ctx| {
            let caught = ctx.eval::<Value, _>(script).catch(&ctx).unwrap_err();
            LaunchError::from_caught(caught)
        })
    }

    #[test]
    fn error_objects_contribute_their_message() {
        let error = caught_from("throw new Error('boom')");
        assert_eq!(error.to_string(), "boom");
    }

    #[test]
    fn thrown_strings_are_used_verbatim() {
        let error = caught_from("throw 'boom'");
        assert_eq!(error.to_string(), "boom");
        assert!(error.stack().is_none());
    }

    #[test]
    fn other_values_are_stringified() {
        assert_eq!(caught_from("throw 42").to_string(), "42");
        assert_eq!(
            caught_from("throw { toString() { return 'custom'; } }").to_string(),
            "custom"
        );
    }

    #[test]
    fn stack_overflow_message() {
        let error = LaunchError::StackCannotGrow { requested: 3 };
        assert_eq!(error.to_string(), "Stack can not grow");
    }
}
