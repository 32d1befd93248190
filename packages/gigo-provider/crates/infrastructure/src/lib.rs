pub mod environment;

pub use environment::process::ProcessEnvironment;
