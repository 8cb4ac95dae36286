mod errors;
mod fixture;
mod logging;

pub use errors::SharedError;
pub use fixture::load_fixture;
pub use logging::{init_logging, init_test_logging};
