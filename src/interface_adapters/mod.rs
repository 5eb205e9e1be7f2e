// Interface adapters: JSON protocol, HTTP handlers and routing.

pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
