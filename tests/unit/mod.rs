/// Unit test harness
mod basic_tests;
mod store_properties;
