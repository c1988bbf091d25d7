//! Authentication

pub(crate) mod middleware;
mod token;

pub(crate) use token::AdminToken;
