#![no_main]
use libfuzzer_sys::fuzz_target;
use variant_engine::parsers::{parse_variants_str, DocumentFormat};

/// Feed arbitrary text to the document loader in both formats, sniffing the
/// format the way file loading does when the extension is unknown.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse_variants_str(s, DocumentFormat::Json);
        let _ = parse_variants_str(s, DocumentFormat::Yaml);
        let _ = parse_variants_str(s, DocumentFormat::sniff(s));
    }
});
