//! Pure derivations over validated content. Nothing here performs I/O or
//! reads the clock; callers pass `today` where a result depends on it.

pub mod display;
pub mod json_ld;
