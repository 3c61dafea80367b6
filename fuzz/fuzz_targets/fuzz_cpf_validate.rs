#![no_main]

use libfuzzer_sys::fuzz_target;

use fisco::documents::{CnpjValidator, CpfValidator};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — `false` is fine, panics are bugs.
        let cpf = CpfValidator::default();
        let _ = cpf.is_valid(s);
        let _ = cpf.format(s);
        let _ = cpf.unformat(s);

        let cnpj = CnpjValidator::default();
        let _ = cnpj.is_valid(s);
        let _ = cnpj.format(s);
    }
});
