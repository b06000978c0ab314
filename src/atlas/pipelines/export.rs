//! Export pipeline
//!
//! Writes the packed texture and its tileset descriptor into a directory
//! the user picked. The two writes run on their own threads and report
//! back individually; one failing never aborts or rolls back the other.

use crate::atlas::pure::descriptor;
use crate::atlas::types::TilesetDescriptor;

use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use image::RgbaImage;

/// Outcome of a single file write, delivered to the UI as a toast.
pub struct ExportReport {
    pub file_name: String,
    pub result: Result<(), String>,
}

pub fn write_texture(dir: &Path, basename: &str, composite: &RgbaImage) -> Result<(), Box<dyn Error>> {
    let path = dir.join(descriptor::texture_file_name(basename));
    composite.save(&path)?;
    Ok(())
}

pub fn write_descriptor(
    dir: &Path,
    basename: &str,
    desc: &TilesetDescriptor,
) -> Result<(), Box<dyn Error>> {
    let path = dir.join(descriptor::descriptor_file_name(basename));
    let json = serde_json::to_string_pretty(desc)?;
    std::fs::write(&path, json)?;
    Ok(())
}

/// Kick off both artifact writes. Each thread sends one `ExportReport`;
/// completions may be observed in either order.
pub fn export_atlas(
    dir: PathBuf,
    basename: String,
    composite: RgbaImage,
    desc: TilesetDescriptor,
    tx: Sender<ExportReport>,
) {
    {
        let tx = tx.clone();
        let dir = dir.clone();
        let basename = basename.clone();
        let file_name = descriptor::texture_file_name(&basename);
        std::thread::spawn(move || {
            let result = write_texture(&dir, &basename, &composite).map_err(|e| e.to_string());
            let _ = tx.send(ExportReport { file_name, result });
        });
    }

    {
        let file_name = descriptor::descriptor_file_name(&basename);
        std::thread::spawn(move || {
            let result = write_descriptor(&dir, &basename, &desc).map_err(|e| e.to_string());
            let _ = tx.send(ExportReport { file_name, result });
        });
    }
}
