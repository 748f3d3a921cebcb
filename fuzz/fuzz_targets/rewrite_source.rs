#![no_main]

use doxyreq::{rewrite_source, REQUIRES_PREFIX};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Non-UTF-8 input is rejected before rewriting, nothing to check
    if let Ok(input) = std::str::from_utf8(data) {
        let once = rewrite_source(input);
        assert_eq!(once.lines, input.split_inclusive('\n').count());
        assert_eq!(once.text.len(), input.len() + once.annotated * REQUIRES_PREFIX.len());

        let twice = rewrite_source(&once.text);
        assert_eq!(twice.text, once.text);
    }
});
