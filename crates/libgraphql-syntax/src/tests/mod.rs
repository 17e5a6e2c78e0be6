mod graphql_parser_error_tests;
mod graphql_parser_operation_tests;
mod graphql_parser_schema_tests;
mod graphql_parser_value_tests;
mod parser_options_tests;
pub(crate) mod utils;
