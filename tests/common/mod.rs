
pub use harness::StayHarness;
