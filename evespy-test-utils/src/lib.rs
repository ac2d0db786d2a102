//! Shared scaffolding for the evespy integration tests: mock data
//! factories, mockito endpoint helpers and test setup wiring both
//! repositories against one mock server.

pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::{test_repositories, test_setup, TestRepositories, TestSetup};

pub mod prelude {
    pub use crate::{
        constant::TEST_USER_AGENT,
        fixtures::{endpoint, factory},
        setup::{test_repositories, test_setup},
        TestError, TestRepositories, TestSetup,
    };
}
