//! Upload and delete coordination.
//!
//! Both operations are gated by the space's [`Capabilities`], report failures
//! without touching the view, and reload the listing after they succeed.
//!
//! Only one upload is in flight at a time: a second submission while the
//! busy flag is set is rejected with [`MutationError::Busy`]. The flag only
//! suppresses duplicate submissions; the backend does not require uploads to
//! be serialized.

use serde::Deserialize;

use super::api::StorageApi;
use super::error::{FetchError, MutationError};
use super::listing;
use super::state::StateStore;
use crate::models::DirectoryEntry;

/// Mutations the backend allows for this space, injected at mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub allow_upload: bool,
    pub allow_delete: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MutationState {
    capabilities: Capabilities,
    uploading: bool,
}

impl MutationState {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            uploading: false,
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Set the busy flag, refusing when uploads are disabled or already running.
    pub fn begin_upload(&mut self) -> Result<(), MutationError> {
        if !self.capabilities.allow_upload {
            return Err(MutationError::UploadDisabled);
        }
        if self.uploading {
            return Err(MutationError::Busy);
        }
        self.uploading = true;
        Ok(())
    }

    pub fn finish_upload(&mut self) {
        self.uploading = false;
    }

    pub fn check_delete(&self) -> Result<(), MutationError> {
        if self.capabilities.allow_delete {
            Ok(())
        } else {
            Err(MutationError::DeleteDisabled)
        }
    }
}

/// What became of a delete request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
}

#[derive(Deserialize)]
struct MutationReply {
    #[serde(default)]
    success: bool,
}

/// Interpret a `{ "success": bool }` reply.
pub fn check_reply(body: &str) -> Result<(), MutationError> {
    let reply: MutationReply =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    if reply.success {
        Ok(())
    } else {
        Err(MutationError::Rejected)
    }
}

/// Confirmation prompt shown before deleting `entry`.
pub fn delete_prompt(entry: &DirectoryEntry) -> String {
    format!("Delete \"{}\"?", entry.name)
}

/// Upload `file` into the directory displayed when the call was made.
///
/// Returns the target directory. The busy flag is cleared whatever the
/// outcome; on success the target directory's listing is reloaded.
pub async fn upload<S, A>(store: &S, api: &A, file: A::Upload) -> Result<String, MutationError>
where
    S: StateStore,
    A: StorageApi,
{
    let Some(started) = store.update_state(|s| {
        s.mutation
            .begin_upload()
            .map(|()| s.view().current_path().to_string())
    }) else {
        return Err(MutationError::Rejected);
    };
    let target = started?;

    let result = api.upload(&target, file).await;
    store.update_state(|s| s.mutation.finish_upload());
    check_reply(&result?)?;

    listing::load(store, api, &target)
        .await
        .map_err(MutationError::Refresh)?;
    Ok(target)
}

/// Delete `entry` after the caller-supplied confirmation succeeds.
///
/// The context menu is closed first in every outcome. On success, overlays
/// showing the entry are closed and the current directory is reloaded.
pub async fn delete_entry<S, A>(
    store: &S,
    api: &A,
    entry: &DirectoryEntry,
    confirm: impl FnOnce(&DirectoryEntry) -> bool,
) -> Result<DeleteOutcome, MutationError>
where
    S: StateStore,
    A: StorageApi,
{
    let allowed = store
        .update_state(|s| {
            s.overlay.close_context_menu();
            s.mutation.check_delete()
        })
        .unwrap_or(Err(MutationError::Rejected));
    allowed?;

    if !confirm(entry) {
        return Ok(DeleteOutcome::Cancelled);
    }

    let body = api.delete(&entry.path).await?;
    check_reply(&body)?;

    let Some(current) = store.update_state(|s| {
        s.overlay.forget(&entry.path);
        s.view().current_path().to_string()
    }) else {
        return Ok(DeleteOutcome::Deleted);
    };

    listing::load(store, api, &current)
        .await
        .map_err(MutationError::Refresh)?;
    Ok(DeleteOutcome::Deleted)
}
