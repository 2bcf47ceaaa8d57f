mod query_node_tests;
mod value_tests;
