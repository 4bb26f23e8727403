// SPDX-License-Identifier: MPL-2.0
//! End-to-end selection flows driven through the selector component.

use avatar_picker::avatar::upload::{self, DataUrl, FileHandle};
use avatar_picker::avatar::{catalog, CategoryKey, ConfirmedAvatar, CurrentAvatar, Selection};
use avatar_picker::error::ValidationError;
use avatar_picker::ui::avatar_selector::{Effect, Message, State};
use std::fs;
use tempfile::tempdir;

fn current_source(state: &State) -> Option<String> {
    state
        .selection()
        .current_avatar()
        .map(|avatar| avatar.source().to_string())
}

fn payload(value: &str) -> DataUrl {
    DataUrl::parse(value).expect("valid data url")
}

#[test]
fn preset_on_fresh_state_becomes_current() {
    let mut state = State::default();
    let _ = state.update(Message::PresetSelected("felix.svg".into()));

    assert_eq!(current_source(&state).as_deref(), Some("felix.svg"));
    assert!(state.can_confirm());
}

#[test]
fn completed_upload_replaces_preset() {
    let mut state = State::default();
    let _ = state.update(Message::PresetSelected("felix.svg".into()));
    let _ = state.update(Message::UploadChosen(Some(FileHandle::from_path(
        "/pictures/me.png",
    ))));

    let data = payload("data:image/png;base64,XYZ");
    let (effect, _) = state.update(Message::UploadDecoded(Ok(data)));

    assert_eq!(effect, Effect::UploadApplied);
    assert_eq!(
        current_source(&state).as_deref(),
        Some("data:image/png;base64,XYZ")
    );
    assert!(state.selection().selected_preset().is_none());
}

#[test]
fn non_image_upload_leaves_state_untouched() {
    let mut state = State::default();
    let _ = state.update(Message::CategorySelected(CategoryKey::BigSmile));
    let _ = state.update(Message::PresetSelected("felix.svg".into()));
    let before = state.selection().clone();

    let (effect, _) = state.update(Message::UploadChosen(Some(FileHandle::from_path(
        "/documents/cv.pdf",
    ))));

    match effect {
        Effect::UploadRejected { error, file_name } => {
            assert_eq!(
                error,
                ValidationError::NotAnImage {
                    declared: Some("application/pdf".into())
                }
            );
            assert_eq!(file_name, "cv.pdf");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(state.selection(), &before);
    assert!(!state.is_decoding());
}

#[test]
fn switching_category_keeps_current_avatar() {
    let mut state = State::default();
    let _ = state.update(Message::PresetSelected("felix.svg".into()));
    let _ = state.update(Message::CategorySelected(CategoryKey::BigSmile));

    assert_eq!(state.selection().active_category(), CategoryKey::BigSmile);
    assert_eq!(current_source(&state).as_deref(), Some("felix.svg"));
}

#[test]
fn overlapping_uploads_keep_last_completion() {
    let mut state = State::default();
    let _ = state.update(Message::UploadChosen(Some(FileHandle::from_path("/f1.png"))));
    let _ = state.update(Message::UploadChosen(Some(FileHandle::from_path("/f2.png"))));
    assert!(state.is_decoding());

    // F2 finishes first, F1 last
    let _ = state.update(Message::UploadDecoded(Ok(payload("data:image/png;base64,RjI="))));
    assert!(state.is_decoding());
    let _ = state.update(Message::UploadDecoded(Ok(payload("data:image/png;base64,RjE="))));

    assert!(!state.is_decoding());
    assert_eq!(
        current_source(&state).as_deref(),
        Some("data:image/png;base64,RjE=")
    );
}

#[test]
fn confirm_hands_over_the_uploaded_image() {
    let mut state = State::default();
    let data = payload("data:image/png;base64,AAAA");
    let _ = state.update(Message::UploadDecoded(Ok(data.clone())));

    let (effect, _) = state.update(Message::ApplyPressed);
    assert_eq!(effect, Effect::Confirmed(ConfirmedAvatar::Uploaded(data)));
}

#[test]
fn selection_stays_exclusive_across_a_mixed_sequence() {
    let presets: Vec<String> = catalog()
        .all_presets()
        .map(|preset| preset.image_reference().to_string())
        .collect();

    let mut selection = Selection::new();
    for (index, reference) in presets.iter().enumerate() {
        selection.select_preset(reference.clone());
        assert!(matches!(
            selection.current_avatar(),
            Some(CurrentAvatar::Preset(r)) if r == reference
        ));
        assert!(selection.uploaded_image().is_none());

        selection.apply_upload(DataUrl::encode("image/png", &[index as u8]));
        assert!(selection.selected_preset().is_none());
        assert!(selection.uploaded_image().is_some());
    }
}

#[tokio::test]
async fn decoded_file_becomes_data_url() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("avatar.png");
    fs::write(&path, b"hello").expect("failed to write file");

    let data = upload::decode(FileHandle::from_path(&path))
        .await
        .expect("decode succeeds");

    assert_eq!(data.as_str(), "data:image/png;base64,aGVsbG8=");
    assert_eq!(data.mime(), "image/png");
    assert_eq!(data.to_bytes().as_deref(), Some(&b"hello"[..]));
}

#[tokio::test]
async fn decode_of_missing_file_fails() {
    let dir = tempdir().expect("failed to create temp dir");
    let missing = dir.path().join("gone.png");

    let result = upload::decode(FileHandle::from_path(missing)).await;
    assert!(result.is_err());
}
