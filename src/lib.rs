//! # fisco
//!
//! Brazilian fiscal and civil document validation library: CPF, CNPJ, CEP,
//! phone numbers, SUFRAMA state registration, electronic fiscal document
//! access keys (NFe/NFCe/CTe/CTeOS/MDFe), BACEN country codes, IBGE
//! municipality codes, GTIN/CEAN barcodes, and decimal-exact installment
//! splitting.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Validators are pure functions of their input plus static check-digit
//! tables: malformed document input yields `false`, never an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use fisco::documents::{AccessKeyValidator, CpfValidator, DocumentKind};
//!
//! let cpf = CpfValidator::default();
//! assert_eq!(cpf.format("12345678909"), "123.456.789-09");
//! assert!(cpf.is_valid("123.456.789-09"));
//!
//! let keys = AccessKeyValidator::default();
//! assert!(!keys.is_valid("1234", DocumentKind::Nfe));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Mask engine, checksum library, configuration |
//! | `documents` (default) | One validator per document type |
//! | `installment` | Decimal-exact installment splitting |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "documents")]
pub mod documents;

#[cfg(feature = "installment")]
pub mod installment;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
