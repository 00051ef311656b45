mod executable_schema_builder_tests;
mod executable_schema_tests;
mod response_tests;
