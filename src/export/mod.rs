//! Batch export of stored recordings to local files plus a CSV manifest.
//!
//! The export is not atomic: a failure mid-run (disk full, permissions)
//! aborts the remaining rows and can leave partial output on disk. The
//! fix is to re-run; every file and the manifest are overwritten on each
//! run, so two runs against an unchanged store produce identical output.

use crate::error::Result;
use crate::store::{Recording, RecordingStore};
use futures::TryStreamExt;
use std::path::Path;

/// Fixed extension for exported audio. The capture front-end records
/// WebM; the store never validates the actual container, so files can
/// be mislabeled if a client submits a different format.
const AUDIO_EXTENSION: &str = "webm";

const MANIFEST_NAME: &str = "recordings.csv";
const MANIFEST_HEADER: &str = "ID,Prompt,Filename,Date";

/// Print row count, summed audio size, and the created_at range.
/// Read-only; no effect on the store or the filesystem.
pub async fn show_database_stats(store: &RecordingStore) -> Result<()> {
    let stats = store.stats().await?;
    let total_size_mb = stats.total_audio_bytes as f64 / (1024.0 * 1024.0);

    println!("\nDatabase Statistics");
    println!("{}", "=".repeat(70));
    println!("Total recordings: {}", stats.total_recordings);
    println!("Total size: {:.2} MB", total_size_mb);
    if let (Some(earliest), Some(latest)) = (stats.earliest, stats.latest) {
        println!("Date range: {} to {}", earliest, latest);
    }
    println!("{}", "=".repeat(70));

    Ok(())
}

/// Write every stored recording into `out_dir`, newest first, plus a
/// `recordings.csv` manifest correlating filenames to rows. Rows are
/// streamed rather than buffered so the export scales with the largest
/// single recording, not the whole table.
pub async fn download_all_recordings(
    store: &RecordingStore,
    out_dir: impl AsRef<Path>,
) -> Result<()> {
    let out_dir = out_dir.as_ref();
    std::fs::create_dir_all(out_dir)?;

    println!("Fetching recordings from database...");

    // Counted before the row stream opens; a write landing in between
    // can make the banner disagree with the rows exported. The tool runs
    // offline from serving traffic, so the window is accepted.
    let total = store.count().await?;
    if total == 0 {
        println!("No recordings found in database.");
        return Ok(());
    }

    println!("\nFound {} recording(s)", total);
    println!("{}", "=".repeat(70));

    let mut manifest = vec![MANIFEST_HEADER.to_string()];
    let mut rows = store.fetch_all_newest_first();

    while let Some(recording) = rows.try_next().await? {
        let filename = export_filename(&recording);
        std::fs::write(out_dir.join(&filename), &recording.audio)?;

        manifest.push(format!(
            "{},{},{},{}",
            recording.id,
            csv_field(&recording.prompt),
            filename,
            recording.created_at.format("%Y-%m-%d %H:%M:%S"),
        ));

        let size_kb = recording.audio.len() as f64 / 1024.0;
        println!("✓ Downloaded: {} ({:.1} KB)", filename, size_kb);
        println!("  Prompt: {}", recording.prompt);
        println!("  Date: {}", recording.created_at);
        println!();
    }

    let manifest_path = out_dir.join(MANIFEST_NAME);
    std::fs::write(&manifest_path, manifest.join("\n"))?;

    println!("{}", "=".repeat(70));
    println!("✓ All recordings downloaded to: {}", out_dir.display());
    println!("✓ Index file created: {}", manifest_path.display());

    Ok(())
}

/// `{id}_{prompt fragment}_{YYYYMMDD_HHMMSS}.webm`. The id prefix keeps
/// filenames collision-free within one store.
fn export_filename(recording: &Recording) -> String {
    format!(
        "{}_{}_{}.{}",
        recording.id,
        safe_prompt_fragment(&recording.prompt),
        recording.created_at.format("%Y%m%d_%H%M%S"),
        AUDIO_EXTENSION,
    )
}

/// Filesystem-safe fragment from the first 50 characters of the prompt:
/// keep alphanumerics, space, hyphen, underscore; trim; spaces become
/// underscores.
fn safe_prompt_fragment(prompt: &str) -> String {
    prompt
        .chars()
        .take(50)
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim()
        .replace(' ', "_")
}

/// Quote a manifest field, doubling embedded quotes (RFC 4180).
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fragment_strips_unsafe_characters() {
        assert_eq!(
            safe_prompt_fragment("Say: \"hello, world!\" (loudly)"),
            "Say_hello_world_loudly"
        );
    }

    #[test]
    fn fragment_keeps_hyphen_and_underscore() {
        assert_eq!(safe_prompt_fragment("well-known_phrase"), "well-known_phrase");
    }

    #[test]
    fn fragment_truncates_to_fifty_characters() {
        let prompt = "a".repeat(80);
        assert_eq!(safe_prompt_fragment(&prompt).len(), 50);
    }

    #[test]
    fn fragment_trims_before_replacing_spaces() {
        assert_eq!(safe_prompt_fragment("  padded prompt  "), "padded_prompt");
    }

    #[test]
    fn csv_field_doubles_embedded_quotes() {
        assert_eq!(csv_field(r#"say "hi", ok"#), r#""say ""hi"", ok""#);
    }

    #[test]
    fn filename_has_id_prefix_and_timestamp() {
        let recording = Recording {
            id: 7,
            prompt: "Read this aloud".to_string(),
            audio: vec![1, 2, 3],
            created_at: chrono::Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap(),
        };
        assert_eq!(
            export_filename(&recording),
            "7_Read_this_aloud_20250314_092653.webm"
        );
    }
}
