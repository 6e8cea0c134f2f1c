#![allow(dead_code, unused_imports)]

pub(crate) mod fake_logrotate;
pub(crate) mod test_context;

pub(crate) use fake_logrotate::FakeLogrotate;
pub(crate) use test_context::TestContext;
