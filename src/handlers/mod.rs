pub mod indexer;
pub mod preregister;
