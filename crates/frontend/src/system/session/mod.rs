pub mod context;
pub mod storage;

pub use context::{active_role, use_session, SessionProvider};
