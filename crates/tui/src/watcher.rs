//! Watches the data view file and signals the runtime when it changes.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Starts watching `path`.
///
/// The parent directory is watched rather than the file itself so editors
/// that replace the file on save are still observed. The returned watcher
/// must be kept alive for events to keep flowing.
pub(crate) fn watch_data_view(path: &Path) -> Result<(RecommendedWatcher, mpsc::UnboundedReceiver<PathBuf>)> {
    let file_name = path
        .file_name()
        .map(ToOwned::to_owned)
        .with_context(|| format!("pages path {} has no file name", path.display()))?;
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let (change_tx, change_rx) = mpsc::unbounded_channel();
    let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| match result {
        Ok(event) => {
            if let Some(changed) = matching_path(&event, &file_name)
                && change_tx.send(changed).is_err()
            {
                debug!("Data view change receiver dropped");
            }
        }
        Err(error) => warn!(error = %error, "Data view watcher error"),
    })
    .context("failed to create file watcher")?;

    watcher
        .watch(&directory, RecursiveMode::NonRecursive)
        .with_context(|| format!("failed to watch {}", directory.display()))?;
    info!(path = %path.display(), "Watching data view for changes");
    Ok((watcher, change_rx))
}

/// The event's path naming `file_name`, for content-changing events only.
fn matching_path(event: &Event, file_name: &OsString) -> Option<PathBuf> {
    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)) {
        return None;
    }
    event
        .paths
        .iter()
        .find(|path| path.file_name() == Some(file_name.as_os_str()))
        .cloned()
}

#[cfg(test)]
mod tests {
    use notify::event::{AccessKind, CreateKind, ModifyKind};

    use super::*;

    #[test]
    fn only_content_events_for_the_file_match() {
        let file_name = OsString::from("pages.json");
        let modified = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(PathBuf::from("/tmp/nav/pages.json"));
        assert_eq!(matching_path(&modified, &file_name), Some(PathBuf::from("/tmp/nav/pages.json")));

        let sibling = Event::new(EventKind::Create(CreateKind::File)).add_path(PathBuf::from("/tmp/nav/other.json"));
        assert_eq!(matching_path(&sibling, &file_name), None);

        let accessed = Event::new(EventKind::Access(AccessKind::Any)).add_path(PathBuf::from("/tmp/nav/pages.json"));
        assert_eq!(matching_path(&accessed, &file_name), None);
    }
}
