pub mod client;
pub mod prelude;
