use gamma_derive::gamma_error;
use std::borrow::Cow;

#[gamma_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Lookup failed{}: {key}", format_context(.context))]
    Missing { key: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("disk"))?;
    Ok(())
}

fn main() {
    let from_io: DemoError = std::io::Error::other("boom").into();
    assert!(matches!(from_io, DemoError::Io { context: None, .. }));

    let from_str: DemoError = "oops".into();
    assert!(matches!(from_str, DemoError::Internal { .. }));

    assert!(read().is_err());
}
