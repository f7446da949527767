#![allow(dead_code)]

pub mod driver;
pub mod logging;
pub mod proptest_prelude;

// Logging is auto-installed for every test binary that declares `mod common`.
#[ctor::ctor]
fn init_logging() {
    logging::init();
}
