//! Typed access to the jurados store
//!
//! The batch tools issue a deliberately small set of queries: the importer
//! finds, inserts and updates institutions by natural key; the classifier
//! scans jurors and writes `sexo` by guid. Everything else belongs to the
//! admin application, not these tools.

use crate::db::models::{Gender, Institution, InstitutionRecord, Juror};
use crate::Result;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Institution queries used by the import reconciler
pub struct InstitutionStore {
    pool: SqlitePool,
}

impl InstitutionStore {
    /// Create new store with database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Look up an institution by its natural key (exact, case-sensitive)
    pub async fn find_by_nome(&self, nome: &str) -> Result<Option<Institution>> {
        let institution = sqlx::query_as::<_, Institution>(
            r#"
            SELECT guid, nome, cnpj, contato_nome, contato_email, contato_telefone,
                   endereco, cidade, uf, cep, ativo, quantidade
            FROM instituicoes
            WHERE nome = ?
            "#,
        )
        .bind(nome)
        .fetch_optional(&self.pool)
        .await?;

        Ok(institution)
    }

    /// Insert a new institution, generating its guid
    pub async fn insert(&self, record: &InstitutionRecord) -> Result<String> {
        let guid = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO instituicoes (
                guid, nome, cnpj, contato_nome, contato_email, contato_telefone,
                endereco, cidade, uf, cep, ativo, quantidade
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&guid)
        .bind(&record.nome)
        .bind(&record.cnpj)
        .bind(&record.contato_nome)
        .bind(&record.contato_email)
        .bind(&record.contato_telefone)
        .bind(&record.endereco)
        .bind(&record.cidade)
        .bind(&record.uf)
        .bind(&record.cep)
        .bind(&record.ativo)
        .bind(record.quantidade)
        .execute(&self.pool)
        .await?;

        Ok(guid)
    }

    /// Replace every imported field of an existing institution
    ///
    /// The guid and created_at survive; all record fields are written
    /// whether or not they changed.
    pub async fn update(&self, guid: &str, record: &InstitutionRecord) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE instituicoes
            SET nome = ?, cnpj = ?, contato_nome = ?, contato_email = ?,
                contato_telefone = ?, endereco = ?, cidade = ?, uf = ?,
                cep = ?, ativo = ?, quantidade = ?,
                updated_at = CURRENT_TIMESTAMP
            WHERE guid = ?
            "#,
        )
        .bind(&record.nome)
        .bind(&record.cnpj)
        .bind(&record.contato_nome)
        .bind(&record.contato_email)
        .bind(&record.contato_telefone)
        .bind(&record.endereco)
        .bind(&record.cidade)
        .bind(&record.uf)
        .bind(&record.cep)
        .bind(&record.ativo)
        .bind(record.quantidade)
        .bind(guid)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Total number of stored institutions
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM instituicoes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Juror queries used by the classification pass
pub struct JurorStore {
    pool: SqlitePool,
}

impl JurorStore {
    /// Create new store with database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List jurors in a stable order, optionally capped
    ///
    /// Ordered by nome then guid so a limited run always sees the same
    /// prefix of the table.
    pub async fn list(&self, limit: Option<i64>) -> Result<Vec<Juror>> {
        let jurors = match limit {
            Some(n) => {
                sqlx::query_as::<_, Juror>(
                    "SELECT guid, nome, sexo FROM jurados ORDER BY nome, guid LIMIT ?",
                )
                .bind(n)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Juror>(
                    "SELECT guid, nome, sexo FROM jurados ORDER BY nome, guid",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(jurors)
    }

    /// Write an inferred gender for one juror
    pub async fn update_sexo(&self, guid: &str, sexo: Gender) -> Result<()> {
        sqlx::query(
            "UPDATE jurados SET sexo = ?, updated_at = CURRENT_TIMESTAMP WHERE guid = ?",
        )
        .bind(sexo.as_str())
        .bind(guid)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
