pub mod endpoint;
pub mod factory;
