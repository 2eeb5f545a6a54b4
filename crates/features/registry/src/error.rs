use std::borrow::Cow;

/// Registry error type.
#[zoo_derive::zoo_error]
pub enum RegistryError {
    /// No candidate was supplied.
    #[error("Invalid argument{}: {message}", format_context(.context))]
    InvalidArgument { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Registry error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
