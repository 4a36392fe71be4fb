//! Parse arbitrary text and run arbitrary queries against whatever tree
//! comes back: neither side may panic.
#![no_main]

use arbitrary::Arbitrary;
use jsontree::{ParserOptions, parse_with_options};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    path: &'a str,
    strict: bool,
}

fuzz_target!(|input: Input<'_>| {
    let options = ParserOptions {
        strict_unicode_escapes: input.strict,
    };
    if let Ok(tree) = parse_with_options(input.text, options) {
        let _ = tree.query(input.path);
        let _ = tree.query_node(input.path);
        let _ = tree.query_str(input.path);
        drop(tree);
    }
});
