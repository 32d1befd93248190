pub mod platform;

pub use platform::{HostFacts, HostFactsResolver, PlatformDetector};
