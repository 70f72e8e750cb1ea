#![no_main]

use libfuzzer_sys::fuzz_target;

use nttmul_core::digits::DigitVector;
use nttmul_core::multiplier::Multiplier;
use nttmul_core::options::Options;
use nttmul_core::registry::{DefaultFactory, MultiplierFactory};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Capped at 512 digits per operand for speed (schoolbook is quadratic)
    let half = data.len() / 2;
    let to_numeral = |bytes: &[u8]| -> String {
        bytes
            .iter()
            .take(512)
            .map(|b| char::from(b'0' + b % 10))
            .collect()
    };
    let a = DigitVector::parse(&to_numeral(&data[..half])).unwrap();
    let b = DigitVector::parse(&to_numeral(&data[half..])).unwrap();

    let factory = DefaultFactory::new();
    let opts = Options::default();
    let ntt = factory.get("ntt").unwrap().multiply(&a, &b, &opts).unwrap();
    let schoolbook = factory
        .get("schoolbook")
        .unwrap()
        .multiply(&a, &b, &opts)
        .unwrap();
    let bigint = factory.get("bigint").unwrap().multiply(&a, &b, &opts).unwrap();

    assert_eq!(ntt.render(), schoolbook.render(), "NTT != Schoolbook");
    assert_eq!(ntt.render(), bigint.render(), "NTT != BigUint");
});
