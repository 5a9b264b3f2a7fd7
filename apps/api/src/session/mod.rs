// Quiz session: state machine, the single in-memory session, and the workflow
// that drives the two model calls.

pub mod handlers;
pub mod machine;
pub mod store;
pub mod workflow;
