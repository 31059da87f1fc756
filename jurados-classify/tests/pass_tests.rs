//! End-to-end tests for the classification pass
//!
//! Each test seeds a fresh store with jurors, runs the pass, and checks
//! both the counters and what actually landed in the `sexo` column.

use jurados_classify::lexicon::Lexicon;
use jurados_classify::pass::{run_classification, ClassifySummary};
use jurados_common::db::init_database;
use jurados_common::db::store::JurorStore;
use sqlx::SqlitePool;
use tempfile::TempDir;

async fn setup() -> (TempDir, SqlitePool, JurorStore) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("jurados.db");
    let pool = init_database(&db_path).await.unwrap();
    let store = JurorStore::new(pool.clone());
    (temp_dir, pool, store)
}

async fn insert_juror(pool: &SqlitePool, guid: &str, nome: &str, sexo: Option<&str>) {
    sqlx::query("INSERT INTO jurados (guid, nome, sexo) VALUES (?, ?, ?)")
        .bind(guid)
        .bind(nome)
        .bind(sexo)
        .execute(pool)
        .await
        .unwrap();
}

async fn sexo_of(pool: &SqlitePool, guid: &str) -> Option<String> {
    sqlx::query_scalar("SELECT sexo FROM jurados WHERE guid = ?")
        .bind(guid)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_pass_writes_inferred_sexo() {
    let (_temp_dir, pool, store) = setup().await;
    insert_juror(&pool, "j-1", "Maria Silva", None).await;
    insert_juror(&pool, "j-2", "João Pedro", None).await;
    insert_juror(&pool, "j-3", "Yusuf", None).await;

    let lexicon = Lexicon::embedded().unwrap();
    let summary = run_classification(&store, &lexicon, None).await.unwrap();

    assert_eq!(
        summary,
        ClassifySummary { processed: 3, updated: 2, unchanged: 0, indeterminate: 1, skipped: 0 }
    );
    assert_eq!(sexo_of(&pool, "j-1").await.as_deref(), Some("Feminino"));
    assert_eq!(sexo_of(&pool, "j-2").await.as_deref(), Some("Masculino"));
    assert_eq!(sexo_of(&pool, "j-3").await, None);
}

#[tokio::test]
async fn test_second_pass_changes_nothing() {
    let (_temp_dir, pool, store) = setup().await;
    insert_juror(&pool, "j-1", "Maria Silva", None).await;
    insert_juror(&pool, "j-2", "João Pedro", None).await;
    insert_juror(&pool, "j-3", "Yusuf", None).await;

    let lexicon = Lexicon::embedded().unwrap();
    run_classification(&store, &lexicon, None).await.unwrap();
    let second = run_classification(&store, &lexicon, None).await.unwrap();

    assert_eq!(
        second,
        ClassifySummary { processed: 3, updated: 0, unchanged: 2, indeterminate: 1, skipped: 0 }
    );
}

#[tokio::test]
async fn test_differing_stored_value_is_corrected() {
    let (_temp_dir, pool, store) = setup().await;
    insert_juror(&pool, "j-1", "Maria Silva", Some("Masculino")).await;

    let lexicon = Lexicon::embedded().unwrap();
    let summary = run_classification(&store, &lexicon, None).await.unwrap();

    assert_eq!(summary.updated, 1);
    assert_eq!(sexo_of(&pool, "j-1").await.as_deref(), Some("Feminino"));
}

#[tokio::test]
async fn test_indeterminate_never_writes() {
    let (_temp_dir, pool, store) = setup().await;
    // Manually recorded value the rules cannot reproduce
    insert_juror(&pool, "j-1", "Yusuf", Some("Masculino")).await;

    let lexicon = Lexicon::embedded().unwrap();
    let summary = run_classification(&store, &lexicon, None).await.unwrap();

    assert_eq!(summary.indeterminate, 1);
    assert_eq!(summary.updated, 0);
    assert_eq!(
        sexo_of(&pool, "j-1").await.as_deref(),
        Some("Masculino"),
        "an Indeterminate result must leave the stored value alone"
    );
}

#[tokio::test]
async fn test_store_failure_rows_are_skipped_not_fatal() {
    let (_temp_dir, pool, store) = setup().await;
    insert_juror(&pool, "j-1", "Maria Silva", None).await;
    insert_juror(&pool, "j-2", "João Pedro", None).await;

    // Reject every sexo write while the scan keeps working
    sqlx::query(
        "CREATE TRIGGER block_sexo_writes BEFORE UPDATE ON jurados \
         BEGIN SELECT RAISE(ABORT, 'writes disabled'); END",
    )
    .execute(&pool)
    .await
    .unwrap();

    let lexicon = Lexicon::embedded().unwrap();
    let summary = run_classification(&store, &lexicon, None).await.unwrap();

    assert_eq!(
        summary,
        ClassifySummary { processed: 2, updated: 0, unchanged: 0, indeterminate: 0, skipped: 2 }
    );
    assert_eq!(
        sexo_of(&pool, "j-1").await,
        None,
        "a failed write must leave the row untouched"
    );
}

#[tokio::test]
async fn test_limit_bounds_the_ordered_scan() {
    let (_temp_dir, pool, store) = setup().await;
    insert_juror(&pool, "j-3", "Carla Dias", None).await;
    insert_juror(&pool, "j-1", "Ana Souza", None).await;
    insert_juror(&pool, "j-2", "Bruno Rosa", None).await;

    let lexicon = Lexicon::embedded().unwrap();
    let summary = run_classification(&store, &lexicon, Some(2)).await.unwrap();

    // The scan is ordered by nome, so Ana and Bruno are classified
    assert_eq!(summary.processed, 2);
    assert_eq!(sexo_of(&pool, "j-1").await.as_deref(), Some("Feminino"));
    assert_eq!(sexo_of(&pool, "j-2").await.as_deref(), Some("Masculino"));
    assert_eq!(sexo_of(&pool, "j-3").await, None, "juror beyond the limit must not be touched");
}

#[tokio::test]
async fn test_empty_table_is_a_noop_run() {
    let (_temp_dir, _pool, store) = setup().await;

    let lexicon = Lexicon::embedded().unwrap();
    let summary = run_classification(&store, &lexicon, None).await.unwrap();

    assert_eq!(summary, ClassifySummary::default());
}

#[tokio::test]
async fn test_alternative_lexicon_file_drives_the_pass() {
    let (temp_dir, pool, store) = setup().await;
    insert_juror(&pool, "j-1", "Zilda Ramos", None).await;

    // "zilda" ends in 'a', so even the vowel rule would catch it; use a
    // name the embedded rules cannot place to prove the file matters
    insert_juror(&pool, "j-2", "Nilvez Ramos", None).await;

    let path = temp_dir.path().join("extra.toml");
    std::fs::write(
        &path,
        r#"
[exact]
feminine = ["nilvez"]
masculine = []

[suffixes]
feminine = []
masculine = []
"#,
    )
    .unwrap();

    let lexicon = Lexicon::load(&path).unwrap();
    let summary = run_classification(&store, &lexicon, None).await.unwrap();

    assert_eq!(sexo_of(&pool, "j-2").await.as_deref(), Some("Feminino"));
    // "zilda" is not in the substitute lexicon and its vowel rule lives in
    // the classifier, not the data, so it is still classified
    assert_eq!(sexo_of(&pool, "j-1").await.as_deref(), Some("Feminino"));
    assert_eq!(summary.updated, 2);
}
