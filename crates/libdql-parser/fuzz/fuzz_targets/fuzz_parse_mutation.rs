#![no_main]

use libdql_parser::DqlParserOptions;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let options = DqlParserOptions::default().max_recursion_depth(32);
    if let Err(error) = libdql_parser::parse_mutation_with_options(s, &options) {
        let _ = error.format_detailed(Some(s));
    }
});
