// SPDX-License-Identifier: MPL-2.0
//! Preset image cache.
//!
//! Preset references are remote SVG URLs. They are fetched once at startup
//! and kept as SVG handles keyed by reference. A failed fetch only changes
//! how the tile is drawn.

use super::Message;
use crate::avatar::Catalog;
use crate::error::Result;
use iced::widget::svg;
use iced::Task;
use std::collections::HashMap;

/// Fetch state of one preset image.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(svg::Handle),
    Failed,
}

#[derive(Debug, Default)]
pub struct Thumbnails {
    entries: HashMap<String, Thumbnail>,
}

impl Thumbnails {
    /// Marks every preset as loading and returns the batch of fetches.
    pub fn fetch_all(&mut self, catalog: &Catalog) -> Task<Message> {
        let tasks: Vec<Task<Message>> = catalog
            .all_presets()
            .map(|preset| {
                let reference = preset.image_reference().to_string();
                self.entries.insert(reference.clone(), Thumbnail::Loading);
                let url = reference.clone();
                Task::perform(fetch_preset(url), move |result| {
                    Message::PresetImageLoaded { reference, result }
                })
            })
            .collect();

        Task::batch(tasks)
    }

    /// Stores a fetch result.
    pub fn store(&mut self, reference: String, result: Result<Vec<u8>>) {
        let thumbnail = match result {
            Ok(bytes) => Thumbnail::Ready(svg::Handle::from_memory(bytes)),
            Err(err) => {
                tracing::warn!(%reference, %err, "preset image unavailable");
                Thumbnail::Failed
            }
        };
        self.entries.insert(reference, thumbnail);
    }

    /// `None` when fetching is disabled.
    pub fn get(&self, reference: &str) -> Option<&Thumbnail> {
        self.entries.get(reference)
    }
}

/// Downloads one preset image.
pub async fn fetch_preset(url: String) -> Result<Vec<u8>> {
    let response = reqwest::get(&url).await?.error_for_status()?;
    let bytes = response.bytes().await?;
    tracing::debug!(%url, bytes = bytes.len(), "fetched preset image");
    Ok(bytes.to_vec())
}
