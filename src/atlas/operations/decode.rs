use crate::atlas::types::SourceImage;

use std::error::Error;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extensions accepted from drops and directory walks.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.iter().any(|known| *known == ext)
        })
        .unwrap_or(false)
}

/// Expand a drop payload into the ordered list of files to decode. Plain
/// files keep their drop order; a dropped directory contributes every image
/// file under it in walk order.
pub fn collect_image_files(dropped: &[PathBuf]) -> Vec<PathBuf> {
    let mut out = Vec::new();

    for path in dropped {
        if path.is_dir() {
            let walk = WalkDir::new(path).follow_links(false).sort_by_file_name();
            for entry in walk {
                let Ok(entry) = entry else { continue };
                if entry.file_type().is_file() && is_image_file(entry.path()) {
                    out.push(entry.path().to_path_buf());
                }
            }
        } else if is_image_file(path) {
            out.push(path.clone());
        }
    }

    out
}

pub fn decode_image(path: &Path) -> Result<SourceImage, Box<dyn Error>> {
    let image = image::open(path)?.to_rgba8();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(SourceImage { name, image })
}

/// Decode a batch with one thread per file. Threads may finish in any
/// order; joining in spawn order keeps the result in insertion order. A
/// failed decode drops only that file from the batch.
pub fn decode_batch(paths: Vec<PathBuf>) -> (Vec<SourceImage>, Vec<(PathBuf, String)>) {
    let handles: Vec<_> = paths
        .into_iter()
        .map(|path| {
            let worker_path = path.clone();
            let handle =
                std::thread::spawn(move || decode_image(&worker_path).map_err(|e| e.to_string()));
            (path, handle)
        })
        .collect();

    let mut images = Vec::new();
    let mut failures = Vec::new();
    for (path, handle) in handles {
        match handle.join() {
            Ok(Ok(image)) => images.push(image),
            Ok(Err(error)) => failures.push((path, error)),
            Err(_) => failures.push((path, "decoder thread panicked".to_string())),
        }
    }

    (images, failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tilesmith-{}-{}", tag, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_png(path: &Path, w: u32, h: u32) {
        RgbaImage::new(w, h).save(path).unwrap();
    }

    #[test]
    fn test_is_image_file_checks_extension() {
        assert!(is_image_file(Path::new("tiles/grass.png")));
        assert!(is_image_file(Path::new("PHOTO.JPG")));
        assert!(!is_image_file(Path::new("readme.txt")));
        assert!(!is_image_file(Path::new("no_extension")));
    }

    #[test]
    fn test_collect_walks_dropped_directories() {
        let dir = temp_dir("collect");
        write_png(&dir.join("a.png"), 2, 2);
        std::fs::write(dir.join("notes.txt"), "not an image").unwrap();
        std::fs::create_dir_all(dir.join("sub")).unwrap();
        write_png(&dir.join("sub/b.png"), 2, 2);

        let files = collect_image_files(&[dir.clone()]);
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_decode_batch_keeps_insertion_order_and_drops_failures() {
        let dir = temp_dir("decode");
        write_png(&dir.join("first.png"), 4, 2);
        write_png(&dir.join("third.png"), 2, 6);

        let paths = vec![
            dir.join("first.png"),
            dir.join("missing.png"),
            dir.join("third.png"),
        ];
        let (images, failures) = decode_batch(paths);

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].name, "first.png");
        assert_eq!((images[0].width(), images[0].height()), (4, 2));
        assert_eq!(images[1].name, "third.png");
        assert_eq!((images[1].width(), images[1].height()), (2, 6));

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, dir.join("missing.png"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
