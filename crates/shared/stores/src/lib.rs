//! Stores whose data is shared across domain packages.

pub mod honorifics;
