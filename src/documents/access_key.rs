//! Electronic fiscal document access key validation.
//!
//! NFe, NFCe, CTe, CTe OS and MDFe documents all carry a 44-digit access
//! key with the same layout, closed by a single mod-11 check digit over
//! cyclic 2..9 weights. The kind selector exists because callers know
//! which document they hold; every kind resolves to the shared NFe
//! routine.

use serde::{Deserialize, Serialize};

use crate::core::BrazilConfig;
use crate::core::checksum::{ChecksumSpec, ResiduePolicy, parse_digits};
use crate::core::mask::{apply_mask, strip_mask};

/// Display mask: eleven groups of four digits, space-separated, as
/// printed on DANFE documents.
pub const ACCESS_KEY_MASK: &str =
    "#### #### #### #### #### #### #### #### #### #### ####";

const ACCESS_KEY_CONTROL_CHARS: &str = " .-";

const ACCESS_KEY_DV: ChecksumSpec = ChecksumSpec {
    modulus: 11,
    weights: &[2, 3, 4, 5, 6, 7, 8, 9],
    fold_products: false,
    policy: ResiduePolicy::Mod11ZeroFloor,
};

/// The class of electronic fiscal document an access key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Nota Fiscal Eletrônica.
    Nfe,
    /// Nota Fiscal de Consumidor Eletrônica.
    Nfce,
    /// Conhecimento de Transporte Eletrônico.
    Cte,
    /// Conhecimento de Transporte Eletrônico para Outros Serviços.
    CteOs,
    /// Manifesto de Documento Fiscal Eletrônico.
    Mdfe,
}

impl DocumentKind {
    /// Short code, as used in fiscal messaging (`NFe`, `CTe`, …).
    pub fn code(&self) -> &'static str {
        match self {
            DocumentKind::Nfe => "NFe",
            DocumentKind::Nfce => "NFCe",
            DocumentKind::Cte => "CTe",
            DocumentKind::CteOs => "CTeOS",
            DocumentKind::Mdfe => "MDFe",
        }
    }

    /// Full document name.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Nfe => "Nota Fiscal Eletrônica",
            DocumentKind::Nfce => "Nota Fiscal de Consumidor Eletrônica",
            DocumentKind::Cte => "Conhecimento de Transporte Eletrônico",
            DocumentKind::CteOs => {
                "Conhecimento de Transporte Eletrônico para Outros Serviços"
            }
            DocumentKind::Mdfe => "Manifesto de Documento Fiscal Eletrônico",
        }
    }

    /// Stable numeric identifier.
    pub fn id(&self) -> u8 {
        match self {
            DocumentKind::Nfe => 1,
            DocumentKind::Nfce => 2,
            DocumentKind::Cte => 3,
            DocumentKind::CteOs => 4,
            DocumentKind::Mdfe => 5,
        }
    }

    /// All document kinds, in id order.
    pub fn all() -> &'static [DocumentKind] {
        &[
            DocumentKind::Nfe,
            DocumentKind::Nfce,
            DocumentKind::Cte,
            DocumentKind::CteOs,
            DocumentKind::Mdfe,
        ]
    }
}

/// Validator for 44-digit fiscal document access keys.
#[derive(Debug, Clone)]
pub struct AccessKeyValidator {
    length: usize,
}

impl AccessKeyValidator {
    /// Build a validator from the supplied configuration.
    pub fn new(config: &BrazilConfig) -> Self {
        Self {
            length: config.access_key_length,
        }
    }

    /// Format an access key in space-separated groups of four.
    ///
    /// Input already containing spaces, or of a width other than the
    /// configured key length, is returned unchanged.
    pub fn format(&self, key: &str) -> String {
        let trimmed = key.trim();
        if trimmed.contains(' ') || trimmed.chars().count() != self.length {
            return key.to_string();
        }
        apply_mask(trimmed, ACCESS_KEY_MASK, ACCESS_KEY_CONTROL_CHARS)
    }

    /// Strip grouping separators from a formatted key.
    pub fn unformat(&self, key: &str) -> String {
        strip_mask(key, ACCESS_KEY_CONTROL_CHARS)
    }

    /// Check the access key's check digit for the given document kind.
    ///
    /// Every kind shares the NFe key layout, so all of them resolve to
    /// the same mod-11 routine. A key whose width differs from the
    /// configured length is invalid regardless of content.
    pub fn is_valid(&self, key: &str, kind: DocumentKind) -> bool {
        match kind {
            DocumentKind::Nfe => self.verify_nfe(key),
            DocumentKind::Nfce
            | DocumentKind::Cte
            | DocumentKind::CteOs
            | DocumentKind::Mdfe => self.verify_nfe(key),
        }
    }

    fn verify_nfe(&self, key: &str) -> bool {
        let unformatted = self.unformat(key);
        let Some(digits) = parse_digits(unformatted.trim()) else {
            return false;
        };
        if digits.len() != self.length {
            return false;
        }
        ACCESS_KEY_DV.verify(&digits)
    }
}

impl Default for AccessKeyValidator {
    fn default() -> Self {
        Self::new(&BrazilConfig::default())
    }
}
