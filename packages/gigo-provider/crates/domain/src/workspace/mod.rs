pub mod facts;
pub mod resolver;

pub use facts::WorkspaceFacts;
pub use resolver::WorkspaceFactsResolver;
