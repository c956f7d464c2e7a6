use gamma_derive::gamma_error;
use std::borrow::Cow;

#[gamma_error]
pub enum StepError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let raw: Result<(), std::io::Error> = Err(std::io::Error::other("denied"));
    let err = raw.context("opening manifest").unwrap_err();
    assert_eq!(err.to_string(), "IO error (opening manifest): denied");

    let internal: Result<(), StepError> = Err("bad state".into());
    let err = internal.context("bootstrap").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (bootstrap): bad state");
}
