// Integration tests for the SQLite recording store.

use anyhow::Result;
use futures::TryStreamExt;
use tempfile::TempDir;
use voicebank::RecordingStore;

async fn temp_store(dir: &TempDir) -> Result<RecordingStore> {
    let db_path = dir.path().join("test.db");
    let store = RecordingStore::connect(&format!("sqlite:{}", db_path.display())).await?;
    store.init_schema().await?;
    Ok(store)
}

#[tokio::test]
async fn test_insert_assigns_increasing_ids() -> Result<()> {
    let dir = TempDir::new()?;
    let store = temp_store(&dir).await?;

    let first = store.insert("one", b"aaa").await?;
    let second = store.insert("two", b"bbb").await?;

    assert!(second > first, "ids must increase with insertion order");

    Ok(())
}

#[tokio::test]
async fn test_count_reflects_inserts() -> Result<()> {
    let dir = TempDir::new()?;
    let store = temp_store(&dir).await?;

    assert_eq!(store.count().await?, 0);

    for i in 0..5 {
        store.insert(&format!("prompt {}", i), b"audio").await?;
    }

    assert_eq!(store.count().await?, 5);

    Ok(())
}

#[tokio::test]
async fn test_audio_bytes_round_trip_exactly() -> Result<()> {
    let dir = TempDir::new()?;
    let store = temp_store(&dir).await?;

    // Non-UTF8 bytes, interior NULs
    let audio: Vec<u8> = vec![0x00, 0xff, 0x1a, 0x45, 0xdf, 0xa3, 0x00, 0x80];
    store.insert("binary", &audio).await?;

    let rows: Vec<_> = store.fetch_all_newest_first().try_collect().await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].audio, audio);
    assert_eq!(rows[0].prompt, "binary");

    Ok(())
}

#[tokio::test]
async fn test_fetch_orders_newest_first_with_id_tiebreak() -> Result<()> {
    let dir = TempDir::new()?;
    let store = temp_store(&dir).await?;

    // Back-to-back inserts can share a created_at; id breaks the tie
    let ids = vec![
        store.insert("first", b"1").await?,
        store.insert("second", b"2").await?,
        store.insert("third", b"3").await?,
    ];

    let rows: Vec<_> = store.fetch_all_newest_first().try_collect().await?;
    let fetched: Vec<i64> = rows.iter().map(|r| r.id).collect();
    let mut expected = ids.clone();
    expected.reverse();

    assert_eq!(fetched, expected);

    Ok(())
}

#[tokio::test]
async fn test_stats_on_empty_store() -> Result<()> {
    let dir = TempDir::new()?;
    let store = temp_store(&dir).await?;

    let stats = store.stats().await?;
    assert_eq!(stats.total_recordings, 0);
    assert_eq!(stats.total_audio_bytes, 0);
    assert!(stats.earliest.is_none());
    assert!(stats.latest.is_none());

    Ok(())
}

#[tokio::test]
async fn test_stats_sums_audio_sizes() -> Result<()> {
    let dir = TempDir::new()?;
    let store = temp_store(&dir).await?;

    store.insert("a", &[0u8; 100]).await?;
    store.insert("b", &[0u8; 250]).await?;

    let stats = store.stats().await?;
    assert_eq!(stats.total_recordings, 2);
    assert_eq!(stats.total_audio_bytes, 350);
    assert!(stats.earliest.is_some());
    assert!(stats.latest >= stats.earliest);

    Ok(())
}

#[tokio::test]
async fn test_init_schema_is_idempotent() -> Result<()> {
    let dir = TempDir::new()?;
    let store = temp_store(&dir).await?;

    store.insert("kept", b"audio").await?;

    // A second init must tolerate the existing table and keep its rows
    store.init_schema().await?;
    assert_eq!(store.count().await?, 1);

    Ok(())
}
