pub mod replay;
pub mod tracing;
pub mod upstream;

pub use replay::TestRun;
pub use tracing::{CapturedEvent, init_test_tracing};
pub use upstream::{ScriptedUpstream, refused_base_url};
