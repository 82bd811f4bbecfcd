/// Integration test harness
mod basic_integration;
mod persistence_tests;
