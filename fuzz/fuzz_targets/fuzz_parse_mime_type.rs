#![no_main]

use libfuzzer_sys::fuzz_target;
use mimesniff::MimeType;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(mime) = MimeType::parse(s) {
            // Serialized output must parse back to the same value
            let serialized = mime.to_string();
            let reparsed = MimeType::parse(&serialized).expect("serialized MIME type must parse");
            assert_eq!(mime, reparsed);
        }
    }
});
