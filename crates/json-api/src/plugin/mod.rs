//! Rule install and uninstall.

mod errors;
pub(crate) mod install;
pub(crate) mod uninstall;
