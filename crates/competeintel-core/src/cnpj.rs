//! CNPJ (Brazilian business registry identifier) validation and formatting.
//!
//! Only the format and the two modulo-11 check digits are verified; whether the
//! number is actually registered is not known here.

use serde::Serialize;
use thiserror::Error;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CnpjError {
    #[error("CNPJ must have 14 digits (found {0})")]
    InvalidLength(usize),

    #[error("CNPJ with all digits equal is not valid")]
    RepeatedDigits,

    #[error("CNPJ check digits do not match")]
    CheckDigitMismatch,
}

/// Registry data returned by [`lookup_cnpj`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CnpjRecord {
    pub cnpj: String,
    pub name: String,
    pub trade_name: String,
    pub status: String,
    pub opening_date: String,
    pub legal_nature: String,
    pub main_activity: CnaeActivity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CnaeActivity {
    pub code: String,
    pub description: String,
}

fn digits_of(raw: &str) -> Vec<u32> {
    raw.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn check_digit(partial: &[u32], weights: &[u32]) -> u32 {
    let total: u32 = partial.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = total % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

/// Compute both check digits for the first 12 digits of a CNPJ.
#[must_use]
pub fn check_digits(base: &[u32; 12]) -> (u32, u32) {
    let first = check_digit(base, &FIRST_WEIGHTS);
    let mut extended = base.to_vec();
    extended.push(first);
    let second = check_digit(&extended, &SECOND_WEIGHTS);
    (first, second)
}

/// Validate a CNPJ with or without punctuation.
///
/// Returns the bare 14-digit string on success.
///
/// # Errors
///
/// Returns [`CnpjError`] when the digit count, repetition, or check digits
/// are wrong.
pub fn validate_cnpj(raw: &str) -> Result<String, CnpjError> {
    let digits = digits_of(raw);
    if digits.len() != 14 {
        return Err(CnpjError::InvalidLength(digits.len()));
    }
    if digits.iter().all(|d| *d == digits[0]) {
        return Err(CnpjError::RepeatedDigits);
    }

    let first = check_digit(&digits[..12], &FIRST_WEIGHTS);
    let second = check_digit(&digits[..13], &SECOND_WEIGHTS);
    if digits[12] != first || digits[13] != second {
        return Err(CnpjError::CheckDigitMismatch);
    }

    Ok(digits
        .iter()
        .filter_map(|d| char::from_digit(*d, 10))
        .collect())
}

/// Format a CNPJ as `XX.XXX.XXX/XXXX-XX`.
///
/// # Errors
///
/// Returns [`CnpjError::InvalidLength`] unless exactly 14 digits are present.
/// Check digits are not verified.
pub fn format_cnpj(raw: &str) -> Result<String, CnpjError> {
    let clean: String = raw.chars().filter(char::is_ascii_digit).collect();
    if clean.len() != 14 {
        return Err(CnpjError::InvalidLength(clean.len()));
    }
    Ok(format!(
        "{}.{}.{}/{}-{}",
        &clean[..2],
        &clean[2..5],
        &clean[5..8],
        &clean[8..12],
        &clean[12..]
    ))
}

/// Description for a CNAE activity code.
#[must_use]
pub fn cnae_description(code: &str) -> &'static str {
    match code {
        "4721-1/02" => "Padaria e confeitaria com predominância de produção própria",
        "5611-2/01" => "Restaurantes e similares",
        "5611-2/03" => "Lanchonetes, casas de chá, de sucos e similares",
        "5611-2/04" => "Bares e outros estabelecimentos especializados em servir bebidas",
        "4771-7/01" => {
            "Comércio varejista de produtos farmacêuticos sem manipulação de fórmulas"
        }
        "4711-3/02" => "Supermercado",
        "4712-1/00" => {
            "Comércio varejista de mercadorias em geral, com predominância de produtos alimentícios - minimercados, mercearias e armazéns"
        }
        "9313-1/00" => "Atividades de condicionamento físico",
        "4789-0/05" => {
            "Comércio varejista de animais vivos e de artigos e alimentos para animais de estimação"
        }
        "4721-1/03" => "Comércio varejista de laticínios e frios",
        "4722-9/01" => "Comércio varejista de carnes - açougues",
        _ => "Atividade não classificada",
    }
}

/// Look up registry data for a CNPJ.
///
/// No registry is queried: a valid number yields a fixed sample record
/// carrying the formatted input.
///
/// # Errors
///
/// Returns [`CnpjError`] when the CNPJ fails validation.
pub fn lookup_cnpj(raw: &str) -> Result<CnpjRecord, CnpjError> {
    let digits = validate_cnpj(raw)?;
    let main_code = "4721-1/02";
    Ok(CnpjRecord {
        cnpj: format_cnpj(&digits)?,
        name: "Empresa Exemplo Ltda".to_string(),
        trade_name: "Exemplo".to_string(),
        status: "ATIVA".to_string(),
        opening_date: "01/01/2020".to_string(),
        legal_nature: "Sociedade Empresária Limitada".to_string(),
        main_activity: CnaeActivity {
            code: "47.21-1/02".to_string(),
            description: cnae_description(main_code).to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_formatted_and_bare_valid_cnpj() {
        assert_eq!(
            validate_cnpj("11.222.333/0001-81"),
            Ok("11222333000181".to_string())
        );
        assert!(validate_cnpj("11222333000181").is_ok());
    }

    #[test]
    fn rejects_wrong_check_digits() {
        assert_eq!(
            validate_cnpj("11.222.333/0001-82"),
            Err(CnpjError::CheckDigitMismatch)
        );
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(validate_cnpj("1122233300018"), Err(CnpjError::InvalidLength(13)));
    }

    #[test]
    fn rejects_repeated_digits() {
        assert_eq!(
            validate_cnpj("00.000.000/0000-00"),
            Err(CnpjError::RepeatedDigits)
        );
    }

    #[test]
    fn check_digits_agree_with_validation() {
        let base = [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1];
        assert_eq!(check_digits(&base), (8, 1));
    }

    #[test]
    fn format_inserts_punctuation() {
        assert_eq!(
            format_cnpj("11222333000181").as_deref(),
            Ok("11.222.333/0001-81")
        );
        assert!(format_cnpj("123").is_err());
    }

    #[test]
    fn lookup_returns_record_for_valid_cnpj() {
        let record = lookup_cnpj("11222333000181").expect("record");
        assert_eq!(record.cnpj, "11.222.333/0001-81");
        assert_eq!(record.status, "ATIVA");
        assert!(record.main_activity.description.starts_with("Padaria"));
    }

    #[test]
    fn unknown_cnae_falls_back() {
        assert_eq!(cnae_description("0000-0/00"), "Atividade não classificada");
    }
}
