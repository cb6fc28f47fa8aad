//! back office client: sales entry and inventory screens over the remote api

mod auth;
pub(crate) mod command;
mod controller;
pub(crate) mod model;
mod normalize;
mod state;
#[cfg(test)]
mod testing;
mod transport;
mod util;

pub(crate) use command::{run, Cli};
