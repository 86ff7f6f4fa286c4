pub mod app;
pub mod error;

mod deserializers;
mod routes;
