#![no_main]

use libdql_parser::token_source::StrDqlTokenSource;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let token_source = StrDqlTokenSource::new(s);
    for _ in token_source {}
});
