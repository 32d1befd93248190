pub mod environment;
pub mod system;
