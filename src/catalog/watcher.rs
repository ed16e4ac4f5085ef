use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, info, warn};

use super::loader::LoadOutcome;
use super::CatalogSource;

const DEBOUNCE: Duration = Duration::from_millis(750);

/// Watches a catalog file and reloads it after writes settle.
///
/// The parent directory is watched rather than the file itself so editors
/// that save by renaming a temp file still trigger a reload. Returns `None`
/// when the watcher cannot be set up; the session then keeps its first load.
pub fn spawn_watcher<F>(path: &Path, on_reload: F) -> Option<RecommendedWatcher>
where
    F: Fn(LoadOutcome) + Send + 'static,
{
    let file = path.to_path_buf();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = file.file_name()?.to_os_string();
    let (notify_tx, notify_rx) = crossbeam_channel::unbounded();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(ev) => {
                let relevant = matches!(
                    ev.kind,
                    EventKind::Create(_) | EventKind::Remove(_) | EventKind::Modify(_)
                ) && ev
                    .paths
                    .iter()
                    .any(|p| p.file_name() == Some(file_name.as_os_str()));
                if relevant {
                    let _ = notify_tx.send(());
                }
            }
            Err(err) => debug!(error = %err, "catalog watch error"),
        },
        notify::Config::default(),
    )
    .map_err(|err| warn!(error = %err, "cannot create catalog watcher"))
    .ok()?;

    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .map_err(|err| warn!(dir = %dir.display(), error = %err, "cannot watch catalog directory"))
        .ok()?;
    info!(file = %file.display(), "watching catalog for changes");

    std::thread::spawn(move || {
        let source = CatalogSource::File(file);
        let mut pending: Option<Instant> = None;

        loop {
            match notify_rx.recv_timeout(Duration::from_millis(250)) {
                Ok(()) => pending = Some(Instant::now()),
                Err(crossbeam_channel::RecvTimeoutError::Timeout) => {
                    if pending.is_some_and(|at| at.elapsed() >= DEBOUNCE) {
                        pending = None;
                        info!(%source, "catalog changed on disk, reloading");
                        on_reload(LoadOutcome::fetch(&source));
                    }
                }
                Err(crossbeam_channel::RecvTimeoutError::Disconnected) => break,
            }
        }
    });

    Some(watcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const ONE_SONG: &str = r#"[{"id":"1","title":"Spring Day","artist":"BTS"}]"#;
    const TWO_SONGS: &str = r#"[
        {"id":"1","title":"Spring Day","artist":"BTS"},
        {"id":"2","title":"Gravity","artist":"Lee"}
    ]"#;

    fn watch(path: &Path) -> (RecommendedWatcher, crossbeam_channel::Receiver<LoadOutcome>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        let watcher = spawn_watcher(path, move |outcome| {
            let _ = tx.send(outcome);
        })
        .expect("watcher should start on a temp dir");
        // let the backend register before touching files
        std::thread::sleep(Duration::from_millis(200));
        (watcher, rx)
    }

    #[test]
    fn rewriting_the_catalog_delivers_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.json");
        fs::write(&path, ONE_SONG).unwrap();
        let (_watcher, rx) = watch(&path);

        fs::write(&path, TWO_SONGS).unwrap();

        match rx.recv_timeout(Duration::from_secs(10)).unwrap() {
            LoadOutcome::Loaded(catalog) => assert_eq!(catalog.len(), 2),
            other => panic!("expected a loaded catalog, got {other:?}"),
        }
    }

    #[test]
    fn other_files_in_the_directory_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.json");
        fs::write(&path, ONE_SONG).unwrap();
        let (_watcher, rx) = watch(&path);

        fs::write(dir.path().join("notes.json"), TWO_SONGS).unwrap();
        fs::write(dir.path().join("song.json.bak"), TWO_SONGS).unwrap();

        assert!(rx.recv_timeout(DEBOUNCE * 3).is_err());
    }
}
