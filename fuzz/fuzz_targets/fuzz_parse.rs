#![no_main]

use libfuzzer_sys::fuzz_target;

use nttmul_core::digits::DigitVector;
use nttmul_core::multiplier::MulError;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    match DigitVector::parse(text) {
        Ok(digits) => {
            let rendered = digits.render();
            assert!(rendered.bytes().all(|b| b.is_ascii_digit()));
            assert!(rendered == "0" || !rendered.starts_with('0'));
            let reparsed = DigitVector::parse(&rendered).unwrap();
            assert_eq!(reparsed.render(), rendered);
        }
        Err(MulError::InvalidDigit { found, .. }) => assert!(!found.is_ascii_digit()),
        Err(MulError::EmptyNumeral) => {}
        Err(e) => panic!("unexpected parse error: {e}"),
    }
});
