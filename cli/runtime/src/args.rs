use rquickjs::{Array, Ctx};
use std::ffi::OsString;

/// Name of the global holding the process arguments.
pub const ARG_GLOBAL: &str = "arg";

/// Process arguments in invocation order, `argv[0]` included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgList(Vec<String>);

impl ArgList {
    pub fn from_env() -> Self {
        Self::from_os(std::env::args_os())
    }

    /// Non-UTF-8 arguments are converted lossily.
    pub fn from_os<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        Self(
            args.into_iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Build the JavaScript array exposed as `arg`.
    pub fn to_js<'js>(&self, ctx: &Ctx<'js>) -> rquickjs::Result<Array<'js>> {
        let array = Array::new(ctx.clone())?;
        for (index, arg) in self.0.iter().enumerate() {
            array.set(index, arg.as_str())?;
        }
        Ok(array)
    }

    /// Bind the list to the global `arg`.
    pub fn bind(&self, ctx: &Ctx<'_>) -> rquickjs::Result<()> {
        ctx.globals().set(ARG_GLOBAL, self.to_js(ctx)?)
    }
}

impl<S: Into<String>> FromIterator<S> for ArgList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
