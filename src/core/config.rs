use serde::{Deserialize, Serialize};

use super::error::FiscoError;

/// Field lengths and limits for Brazilian documents.
///
/// These values are supplied once at startup — typically deserialized
/// from an external key-value configuration source — and treated as
/// constants thereafter. Validators copy what they need at construction,
/// so a config instance can be dropped after wiring.
///
/// [`BrazilConfig::default`] carries the national registry values; only
/// override fields when integrating with a system that disagrees with
/// the registries about field widths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrazilConfig {
    /// CPF digit count (registry: 11).
    pub cpf_length: usize,
    /// CNPJ digit count (registry: 14).
    pub cnpj_length: usize,
    /// CEP digit count (registry: 8).
    pub cep_length: usize,
    /// SUFRAMA model A digit count, including the check digit (8).
    pub suframa_model_a_length: usize,
    /// SUFRAMA model B digit count, including the check digit (9).
    pub suframa_model_b_length: usize,
    /// Minimum BACEN country code digit count (2).
    pub bacen_min_length: usize,
    /// Maximum BACEN country code digit count (4).
    pub bacen_max_length: usize,
    /// IBGE municipality code digit count (7).
    pub ibge_length: usize,
    /// Fiscal document access key digit count (44).
    pub access_key_length: usize,
}

impl Default for BrazilConfig {
    fn default() -> Self {
        Self {
            cpf_length: 11,
            cnpj_length: 14,
            cep_length: 8,
            suframa_model_a_length: 8,
            suframa_model_b_length: 9,
            bacen_min_length: 2,
            bacen_max_length: 4,
            ibge_length: 7,
            access_key_length: 44,
        }
    }
}

impl BrazilConfig {
    /// Sanity-check the configuration.
    ///
    /// A failure here is a deployment mistake, not a data-quality issue,
    /// so it surfaces as [`FiscoError::Config`] instead of being
    /// absorbed into validation results.
    pub fn validate(&self) -> Result<(), FiscoError> {
        let lengths = [
            ("cpf_length", self.cpf_length),
            ("cnpj_length", self.cnpj_length),
            ("cep_length", self.cep_length),
            ("suframa_model_a_length", self.suframa_model_a_length),
            ("suframa_model_b_length", self.suframa_model_b_length),
            ("bacen_min_length", self.bacen_min_length),
            ("bacen_max_length", self.bacen_max_length),
            ("ibge_length", self.ibge_length),
            ("access_key_length", self.access_key_length),
        ];
        for (name, value) in lengths {
            if value == 0 {
                return Err(FiscoError::Config(format!("{name} must not be zero")));
            }
        }
        if self.bacen_min_length > self.bacen_max_length {
            return Err(FiscoError::Config(format!(
                "bacen_min_length {} exceeds bacen_max_length {}",
                self.bacen_min_length, self.bacen_max_length
            )));
        }
        if self.suframa_model_a_length >= self.suframa_model_b_length {
            return Err(FiscoError::Config(format!(
                "suframa_model_a_length {} must be below suframa_model_b_length {}",
                self.suframa_model_a_length, self.suframa_model_b_length
            )));
        }
        Ok(())
    }
}
