//! Document validators: one per Brazilian document type.
//!
//! Every validator follows the same contract: `format` pads/cleans and
//! applies the document's mask (returning already-formatted input
//! unchanged), `unformat` strips the separators, and `is_valid` checks
//! length and check digits, answering `false` for malformed input rather
//! than erroring. Constructors take a [`crate::core::BrazilConfig`] and
//! copy the lengths they need; `Default` wires in the registry values.

mod access_key;
mod bacen;
mod cep;
mod cnpj;
mod cpf;
mod gtin;
mod ibge;
mod phone;
mod suframa;

pub use access_key::*;
pub use bacen::*;
pub use cep::*;
pub use cnpj::*;
pub use cpf::*;
pub use gtin::*;
pub use ibge::*;
pub use phone::*;
pub use suframa::*;
