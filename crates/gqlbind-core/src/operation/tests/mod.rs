mod field_collector_tests;
mod request_tests;
