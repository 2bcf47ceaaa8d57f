mod dql_parse_error_tests;
mod fragment_resolver_tests;
mod query_parser_tests;
mod result_validator_tests;
mod utils;
