//! Demonstrations for trellis: a sign-in form built from the stock widgets,
//! and a tiny line-based input script used to drive it headlessly.

pub mod form;
pub mod script;
