//! Background image decoding.
//!
//! Decoding a PNG on the render thread would stall the first frames, so
//! each request spawns a worker that decodes to RGBA8 and sends the
//! pixels back over a channel. The engine polls once per frame and
//! uploads whatever arrived; a failed decode is logged and the renderer
//! keeps its placeholder texture.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use log::{debug, warn};

/// Which renderer slot a decoded image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// The cloud sprite (white puff on transparent background).
    CloudSprite,
    /// The matcap used to shade the debug title.
    Matcap,
}

/// A decoded image ready for GPU upload.
pub struct DecodedImage {
    pub kind: AssetKind,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Spawns decode workers and collects their results.
pub struct AssetLoader {
    sender: mpsc::Sender<DecodedImage>,
    receiver: mpsc::Receiver<DecodedImage>,
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetLoader {
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Decode `path` off-thread; the result surfaces through [`poll`].
    ///
    /// [`poll`]: AssetLoader::poll
    pub fn request(&self, kind: AssetKind, path: PathBuf) {
        let sender = self.sender.clone();
        thread::spawn(move || match image::open(&path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let (width, height) = rgba.dimensions();
                debug!(
                    "decoded {:?} asset {} ({width}x{height})",
                    kind,
                    path.display()
                );
                // The engine may have shut down; a closed channel just
                // drops the pixels.
                let _ = sender.send(DecodedImage {
                    kind,
                    width,
                    height,
                    pixels: rgba.into_raw(),
                });
            }
            Err(e) => {
                warn!("failed to decode {}: {e}", path.display());
            }
        });
    }

    /// Take the next decoded image, if any worker has finished.
    pub fn poll(&self) -> Option<DecodedImage> {
        self.receiver.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn missing_file_yields_nothing() {
        let loader = AssetLoader::new();
        loader.request(
            AssetKind::CloudSprite,
            PathBuf::from("/nonexistent/sprite.png"),
        );
        thread::sleep(Duration::from_millis(50));
        assert!(loader.poll().is_none());
    }

    #[test]
    fn decodes_a_png_off_thread() {
        let dir = std::env::temp_dir().join("cirrus-asset-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sprite.png");

        let img = image::RgbaImage::from_pixel(
            4,
            2,
            image::Rgba([255, 255, 255, 128]),
        );
        img.save(&path).unwrap();

        let loader = AssetLoader::new();
        loader.request(AssetKind::Matcap, path);

        let deadline = Instant::now() + Duration::from_secs(5);
        let decoded = loop {
            if let Some(d) = loader.poll() {
                break d;
            }
            assert!(Instant::now() < deadline, "decode timed out");
            thread::sleep(Duration::from_millis(10));
        };

        assert_eq!(decoded.kind, AssetKind::Matcap);
        assert_eq!((decoded.width, decoded.height), (4, 2));
        assert_eq!(decoded.pixels.len(), 4 * 2 * 4);
    }
}
