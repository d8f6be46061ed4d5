//! Payment processor adapter (YooKassa REST API).

mod api_types;
mod gateway;

pub use gateway::YookassaGateway;
