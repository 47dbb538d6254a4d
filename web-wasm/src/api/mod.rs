//! Backend endpoint wrappers

mod http;

pub mod categories;
pub mod routers;
