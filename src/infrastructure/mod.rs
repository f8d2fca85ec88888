pub mod console;
pub mod fixture;
pub mod http;
