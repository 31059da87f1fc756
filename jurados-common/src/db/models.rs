//! Database models

use sqlx::FromRow;

/// Juror gender as persisted in the `jurados.sexo` column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masculine,
    Feminine,
}

impl Gender {
    /// Stored spelling for this gender
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Masculine => "Masculino",
            Gender::Feminine => "Feminino",
        }
    }

    /// Parse a stored spelling; anything else is None
    pub fn parse(value: &str) -> Option<Gender> {
        match value {
            "Masculino" => Some(Gender::Masculine),
            "Feminino" => Some(Gender::Feminine),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated institution payload produced by the import normalizer
///
/// All defaults have already been applied and `quantidade` is in [1,99].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstitutionRecord {
    pub nome: String,
    pub cnpj: Option<String>,
    pub contato_nome: String,
    pub contato_email: Option<String>,
    pub contato_telefone: Option<String>,
    pub endereco: Option<String>,
    pub cidade: String,
    pub uf: String,
    pub cep: String,
    pub ativo: String,
    pub quantidade: i64,
}

/// Stored institution row
#[derive(Debug, Clone, FromRow)]
pub struct Institution {
    pub guid: String,
    pub nome: String,
    pub cnpj: Option<String>,
    pub contato_nome: String,
    pub contato_email: Option<String>,
    pub contato_telefone: Option<String>,
    pub endereco: Option<String>,
    pub cidade: String,
    pub uf: String,
    pub cep: String,
    pub ativo: String,
    pub quantidade: i64,
}

/// Juror row as seen by the classification pass
#[derive(Debug, Clone, FromRow)]
pub struct Juror {
    pub guid: String,
    pub nome: String,
    pub sexo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_round_trips_through_stored_spelling() {
        assert_eq!(Gender::parse(Gender::Masculine.as_str()), Some(Gender::Masculine));
        assert_eq!(Gender::parse(Gender::Feminine.as_str()), Some(Gender::Feminine));
    }

    #[test]
    fn gender_parse_rejects_unknown_spellings() {
        assert_eq!(Gender::parse("masculino"), None);
        assert_eq!(Gender::parse("M"), None);
        assert_eq!(Gender::parse(""), None);
    }
}
