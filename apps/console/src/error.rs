use std::borrow::Cow;

/// Console application error type.
#[zoo_derive::zoo_error]
pub enum ConsoleError {
    #[error("Terminal I/O failed{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Registry failure{}: {source}", format_context(.context))]
    Registry { source: zoo::registry::RegistryError, context: Option<Cow<'static, str>> },

    #[error("Console error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
