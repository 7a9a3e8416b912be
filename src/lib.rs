pub mod app;
pub mod capture;
pub mod core;
pub mod session;

include!(concat!(env!("OUT_DIR"), "/version.rs"));
