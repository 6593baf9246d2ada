//! Cat image fetching, decoding and texture upload

use super::App;
use crate::constants::MAX_IMAGE_BYTES;
use crate::error::ImageError;
use crate::types::*;
use eframe::egui;
use futures::StreamExt;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

fn lock(state: &Mutex<ImageState>) -> MutexGuard<'_, ImageState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

/// Decode image bytes into egui pixels, downscaling so neither side exceeds `max_side`.
pub fn decode_image(bytes: &[u8], max_side: u32) -> Result<egui::ColorImage, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::EmptyBody);
    }
    let mut img = image::load_from_memory(bytes)?;
    if img.width() > max_side || img.height() > max_side {
        img = img.thumbnail(max_side, max_side);
    }
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Stream the response body, reporting progress and honouring cancellation.
/// Bodies over `max_bytes`, declared or actual, fail with `TooLarge`.
async fn download_bytes(
    url: &str,
    max_bytes: u64,
    state: &Mutex<ImageState>,
    client: &reqwest::Client,
    ctx: &egui::Context,
    token: &CancellationToken,
) -> Result<Vec<u8>, ImageError> {
    let response = tokio::select! {
        _ = token.cancelled() => return Err(ImageError::Cancelled),
        response = client.get(url).send() => response?,
    };
    if !response.status().is_success() {
        return Err(ImageError::Status(response.status()));
    }

    let total_size = response.content_length().unwrap_or(0);
    if total_size > max_bytes {
        return Err(ImageError::TooLarge { limit: max_bytes });
    }
    let mut downloaded: u64 = 0;
    let mut bytes_vec = Vec::with_capacity(total_size.min(max_bytes) as usize);
    let mut stream = response.bytes_stream();
    let mut last_repaint = std::time::Instant::now();

    loop {
        tokio::select! {
            _ = token.cancelled() => return Err(ImageError::Cancelled),
            chunk = stream.next() => {
                match chunk {
                    Some(Ok(data)) => {
                        downloaded += data.len() as u64;
                        if downloaded > max_bytes {
                            return Err(ImageError::TooLarge { limit: max_bytes });
                        }
                        bytes_vec.extend_from_slice(&data);
                        if let Some(status) = lock(state).images.get_mut(url) {
                            *status = ImageStatus::Fetching(downloaded, total_size);
                        }
                        if last_repaint.elapsed() >= std::time::Duration::from_millis(100) {
                            ctx.request_repaint();
                            last_repaint = std::time::Instant::now();
                        }
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
        }
    }

    Ok(bytes_vec)
}

/// Fetch one cat and record the outcome in the shared state.
async fn fetch_cat(
    url: String,
    max_side: u32,
    state: Arc<Mutex<ImageState>>,
    client: reqwest::Client,
    ctx: egui::Context,
    token: CancellationToken,
) {
    let result = match download_bytes(&url, MAX_IMAGE_BYTES, &state, &client, &ctx, &token).await {
        Ok(bytes) => match tokio::task::spawn_blocking(move || decode_image(&bytes, max_side)).await {
            Ok(decoded) => decoded,
            Err(e) => Err(e.into()),
        },
        Err(e) => Err(e),
    };

    {
        let mut s = lock(&state);
        let status = match result {
            Ok(img) => {
                debug!(url = %url, width = img.size[0], height = img.size[1], "Cat decoded");
                ImageStatus::Ready(img)
            }
            Err(ImageError::Cancelled) => {
                debug!(url = %url, "Cat fetch cancelled");
                ImageStatus::Cancelled
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Cat failed to load");
                ImageStatus::Failed(e.to_string())
            }
        };
        // a restart may have cleared the map while this fetch was running
        if s.images.contains_key(&url) {
            s.images.insert(url, status);
        }
    }
    ctx.request_repaint();
}

impl App {
    /// Start fetching `url` unless it is already on screen or in flight.
    pub fn ensure_image(&mut self, ctx: &egui::Context, url: &str) {
        if self.textures.contains_key(url) {
            return;
        }
        {
            let mut s = lock(&self.image_state);
            if s.images.contains_key(url) {
                return;
            }
            s.images.insert(url.to_string(), ImageStatus::Pending);
        }

        let url = url.to_string();
        let max_side = self.settings.max_image_side;
        let state = self.image_state.clone();
        let client = self.client.clone();
        let ctx = ctx.clone();
        let token = self.cancel_token.clone();
        let sem = self.fetch_limit.clone();

        self.runtime.spawn(async move {
            let _permit = tokio::select! {
                _ = token.cancelled() => return,
                permit = sem.acquire_owned() => permit.ok(),
            };
            fetch_cat(url, max_side, state, client, ctx, token).await;
        });
    }

    /// Upload every decoded cat to the GPU. Runs on the UI thread.
    pub fn upload_ready_images(&mut self, ctx: &egui::Context) {
        let ready: Vec<(String, egui::ColorImage)> = {
            let mut s = lock(&self.image_state);
            let urls: Vec<String> = s
                .images
                .iter()
                .filter(|(_, status)| matches!(status, ImageStatus::Ready(_)))
                .map(|(url, _)| url.clone())
                .collect();
            let taken: Vec<_> = urls
                .into_iter()
                .filter_map(|url| s.take_ready(&url).map(|img| (url, img)))
                .collect();
            taken
        };

        for (url, img) in ready {
            let texture = ctx.load_texture(url.clone(), img, egui::TextureOptions::LINEAR);
            self.textures.insert(url, texture);
        }
    }

    pub fn texture_for(&self, url: &str) -> Option<&egui::TextureHandle> {
        self.textures.get(url)
    }

    /// (received, total) bytes for a cat still downloading; total is 0 when unknown
    pub fn image_progress(&self, url: &str) -> Option<(u64, u64)> {
        match lock(&self.image_state).images.get(url) {
            Some(ImageStatus::Fetching(downloaded, total)) if *downloaded > 0 => {
                Some((*downloaded, *total))
            }
            _ => None,
        }
    }

    pub fn image_failed(&self, url: &str) -> bool {
        matches!(
            lock(&self.image_state).images.get(url),
            Some(ImageStatus::Failed(_))
        )
    }

    /// Drop everything belonging to the previous deck and cancel its fetches.
    pub fn reset_images(&mut self) {
        self.cancel_token.cancel();
        self.cancel_token = CancellationToken::new();
        self.textures.clear();
        let mut s = lock(&self.image_state);
        let in_flight = s.images.values().filter(|st| !st.is_settled()).count();
        debug!(in_flight, "Resetting image state");
        s.images.clear();
    }
}
