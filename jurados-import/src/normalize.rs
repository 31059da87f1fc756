//! Row validation and default filling
//!
//! Turns a raw CSV row into a validated [`InstitutionRecord`]. The only
//! rejection is a blank `nome`; every other blank column falls back to its
//! documented default, matching what the admin system pre-fills for a new
//! institution.

use crate::csv::RawRecord;
use jurados_common::db::models::InstitutionRecord;
use thiserror::Error;

pub const DEFAULT_CONTATO_NOME: &str = "Sr.(a). Diretor";
pub const DEFAULT_CIDADE: &str = "Capivari de Baixo";
pub const DEFAULT_UF: &str = "SC";
pub const DEFAULT_CEP: &str = "88745-000";
pub const DEFAULT_ATIVO: &str = "Sim";
pub const DEFAULT_QUANTIDADE: i64 = 10;

/// Why a row was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("line {line}: missing required field 'nome'")]
    MissingName { line: usize },
}

/// Validate one raw row and fill defaults
pub fn normalize_record(raw: &RawRecord) -> Result<InstitutionRecord, NormalizeError> {
    let nome = raw.get("nome");
    if nome.is_empty() {
        return Err(NormalizeError::MissingName { line: raw.line });
    }

    Ok(InstitutionRecord {
        nome: nome.to_string(),
        cnpj: optional(raw.get("cnpj")),
        contato_nome: defaulted(raw.get("contato_nome"), DEFAULT_CONTATO_NOME),
        contato_email: optional(raw.get("contato_email")),
        contato_telefone: optional(raw.get("contato_telefone")),
        endereco: optional(raw.get("endereco")),
        cidade: defaulted(raw.get("cidade"), DEFAULT_CIDADE),
        uf: defaulted(raw.get("uf"), DEFAULT_UF),
        cep: defaulted(raw.get("cep"), DEFAULT_CEP),
        ativo: defaulted(raw.get("ativo"), DEFAULT_ATIVO),
        quantidade: sanitize_quota(raw.get("quantidade")).unwrap_or(DEFAULT_QUANTIDADE),
    })
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn defaulted(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Two-stage juror quota sanitization
///
/// Stage 1 keeps only ASCII digits; stage 2 accepts the parsed value when
/// it lands in [1,99]. Anything else is None and the caller falls back to
/// the default, so the stored quota is never out of range.
pub fn sanitize_quota(raw: &str) -> Option<i64> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let value = digits.parse::<i64>().ok()?;
    (1..=99).contains(&value).then_some(value)
}
