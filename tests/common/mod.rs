pub mod fixtures;
pub mod mock_engine;
pub mod mock_runner;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mock_engine::*;
#[allow(unused_imports)]
pub use mock_runner::*;
