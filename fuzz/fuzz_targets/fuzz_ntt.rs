#![no_main]

use libfuzzer_sys::fuzz_target;

use num_bigint::BigUint;

use nttmul_core::digits::DigitVector;
use nttmul_core::multiplier::Multiplier;
use nttmul_core::ntt_based::NttMultiplier;
use nttmul_core::options::Options;

fn numeral(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "0".into();
    }
    bytes.iter().map(|b| char::from(b'0' + b % 10)).collect()
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks the split point; cap each operand for speed.
    let split = usize::from(data[0]).min(data.len() - 1);
    let (a, b) = data[1..].split_at(split);
    let a = numeral(&a[..a.len().min(4096)]);
    let b = numeral(&b[..b.len().min(4096)]);

    let x = DigitVector::parse(&a).unwrap();
    let y = DigitVector::parse(&b).unwrap();
    let product = NttMultiplier::new()
        .multiply(&x, &y, &Options::default())
        .unwrap();

    let expected = BigUint::parse_bytes(a.as_bytes(), 10).unwrap()
        * BigUint::parse_bytes(b.as_bytes(), 10).unwrap();
    assert_eq!(product.render(), expected.to_str_radix(10));
});
