// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Card thumbnail loading.
//!
//! Local image files are decoded and downscaled by a small worker pool and
//! handed back over a channel, so the UI thread never blocks on disk.
//! Remote URLs are never fetched.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

/// Longest edge of a decoded thumbnail, in pixels.
pub const THUMBNAIL_EDGE: u32 = 480;

/// Decoded RGBA pixels ready to become a texture.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Resolve a media URL to a local file, if it refers to one.
///
/// `file://` URLs and bare paths are local; any other scheme is remote.
/// Relative paths are resolved against `base_dir`.
pub fn local_path(url: &str, base_dir: Option<&Path>) -> Option<PathBuf> {
    let raw = match url.strip_prefix("file://") {
        Some(rest) => rest,
        None if url.contains("://") => return None,
        None => url,
    };
    if raw.trim().is_empty() {
        return None;
    }

    let path = PathBuf::from(raw);
    match base_dir {
        Some(base) if path.is_relative() => Some(base.join(path)),
        _ => Some(path),
    }
}

/// Decode an image and shrink it to fit within `max_edge`.
pub fn load_thumbnail(path: &Path, max_edge: u32) -> Result<LoadedImage> {
    let img = image::open(path).with_context(|| format!("Failed to decode {}", path.display()))?;

    let img = if img.width() > max_edge || img.height() > max_edge {
        img.thumbnail(max_edge, max_edge)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    Ok(LoadedImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

type LoadResult = (String, Result<LoadedImage, String>);

/// Number of decoder threads per loader.
pub const THUMBNAIL_WORKERS: usize = 3;

/// A queued decode: the media URL and the file it resolved to.
struct LoadRequest {
    url: String,
    path: PathBuf,
}

/// Background thumbnail decoder keyed by media URL.
///
/// A fixed pool of workers pulls requests from a shared queue. Dropping
/// the loader closes the queue and the workers exit.
pub struct ThumbnailLoader {
    base_dir: Option<PathBuf>,
    requested: HashSet<String>,
    request_tx: flume::Sender<LoadRequest>,
    result_rx: flume::Receiver<LoadResult>,
    workers: Vec<JoinHandle<()>>,
}

impl ThumbnailLoader {
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        let (request_tx, request_rx) = flume::unbounded::<LoadRequest>();
        let (result_tx, result_rx) = flume::unbounded();

        let mut workers = Vec::with_capacity(THUMBNAIL_WORKERS);
        for worker_id in 0..THUMBNAIL_WORKERS {
            let rx = request_rx.clone();
            let tx = result_tx.clone();
            match std::thread::Builder::new()
                .name(format!("thumb-worker-{}", worker_id))
                .spawn(move || worker_loop(worker_id, rx, tx))
            {
                Ok(handle) => workers.push(handle),
                Err(e) => log::error!("Failed to spawn thumbnail worker {}: {}", worker_id, e),
            }
        }

        Self {
            base_dir,
            requested: HashSet::new(),
            request_tx,
            result_rx,
            workers,
        }
    }

    /// Queue `url` for decoding unless it was already requested or is remote.
    ///
    /// Returns `false` for URLs that will never produce a thumbnail.
    pub fn request(&mut self, url: &str) -> bool {
        let Some(path) = local_path(url, self.base_dir.as_deref()) else {
            return false;
        };
        if !self.requested.insert(url.to_string()) {
            return true;
        }

        let request = LoadRequest {
            url: url.to_string(),
            path,
        };
        if self.request_tx.send(request).is_err() {
            log::error!("Thumbnail queue disconnected");
            self.requested.remove(url);
            return false;
        }
        true
    }

    /// Collect every thumbnail finished since the last call.
    pub fn finished(&self) -> Vec<LoadResult> {
        self.result_rx.try_iter().collect()
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }
}

fn worker_loop(worker_id: usize, rx: flume::Receiver<LoadRequest>, tx: flume::Sender<LoadResult>) {
    log::debug!("Thumbnail worker {} started", worker_id);

    // Ends once the loader drops its sender
    while let Ok(LoadRequest { url, path }) = rx.recv() {
        let result = load_thumbnail(&path, THUMBNAIL_EDGE).map_err(|e| format!("{:#}", e));
        match &result {
            Ok(img) => log::debug!("Decoded {} ({}x{})", path.display(), img.width, img.height),
            Err(e) => log::warn!("Thumbnail failed: {}", e),
        }
        if tx.send((url, result)).is_err() {
            break;
        }
    }

    log::debug!("Thumbnail worker {} stopped", worker_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_local_path_schemes() {
        assert_eq!(local_path("https://example.com/a.jpg", None), None);
        assert_eq!(
            local_path("file:///tmp/a.png", None),
            Some(PathBuf::from("/tmp/a.png"))
        );
        assert_eq!(
            local_path("img/a.png", Some(Path::new("/data"))),
            Some(PathBuf::from("/data/img/a.png"))
        );
        assert_eq!(local_path("", None), None);
    }

    #[test]
    fn test_load_thumbnail_downscales() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        image::RgbaImage::new(960, 240).save(&path).unwrap();

        let thumb = load_thumbnail(&path, THUMBNAIL_EDGE).unwrap();
        assert_eq!(thumb.width, 480);
        assert_eq!(thumb.height, 120);
        assert_eq!(thumb.pixels.len(), (480 * 120 * 4) as usize);
    }

    #[test]
    fn test_loader_decodes_in_background() {
        let dir = tempfile::tempdir().unwrap();
        image::RgbaImage::new(8, 8)
            .save(dir.path().join("small.png"))
            .unwrap();

        let mut loader = ThumbnailLoader::new(Some(dir.path().to_path_buf()));
        assert!(!loader.request("https://example.com/remote.jpg"));
        assert!(loader.request("small.png"));
        assert!(loader.request("small.png"));

        let (url, result) = loader
            .result_rx
            .recv_timeout(Duration::from_secs(10))
            .unwrap();
        assert_eq!(url, "small.png");
        assert_eq!(result.unwrap().width, 8);
        assert!(loader.finished().is_empty());
    }

    #[test]
    fn test_many_requests_share_fixed_pool() {
        let dir = tempfile::tempdir().unwrap();
        let count = 40;
        for i in 0..count {
            image::RgbaImage::new(4, 4)
                .save(dir.path().join(format!("{}.png", i)))
                .unwrap();
        }

        let mut loader = ThumbnailLoader::new(Some(dir.path().to_path_buf()));
        for i in 0..count {
            assert!(loader.request(&format!("{}.png", i)));
        }
        assert_eq!(loader.worker_count(), THUMBNAIL_WORKERS);

        let mut urls: Vec<String> = (0..count)
            .map(|_| {
                let (url, result) = loader
                    .result_rx
                    .recv_timeout(Duration::from_secs(10))
                    .unwrap();
                assert!(result.is_ok());
                url
            })
            .collect();
        urls.sort();
        urls.dedup();
        assert_eq!(urls.len(), count);
    }
}
