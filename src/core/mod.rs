pub mod backup;
pub mod completion;
pub mod export;
pub mod jumble;
pub mod log;
pub mod store;
pub mod workflow;
