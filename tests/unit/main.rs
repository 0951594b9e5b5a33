//! Unit test suite.

mod stats_test;
mod tracker_test;
