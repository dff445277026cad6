#![allow(dead_code)]

use anyhow::Result;
use image::{GrayImage, Luma, Rgb, RgbImage};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const BOARD_COLOR: Rgb<u8> = Rgb([200, 120, 40]);

pub fn init_logger() {
    let _ = pretty_env_logger::try_init();
}

/// Create `<root>/<name>` and return its path.
pub fn make_dir(root: &Path, name: &str) -> Result<PathBuf> {
    let dir = root.join(name);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Write `rec<rec>.jpg` filled with the board color.
pub fn write_image(pcb_dir: &Path, rec: usize, width: u32, height: u32) -> Result<()> {
    let image = RgbImage::from_pixel(width, height, BOARD_COLOR);
    image.save(pcb_dir.join(format!("rec{}.jpg", rec)))?;
    Ok(())
}

/// Write `rec<rec>-mask.png` with the given `[t, l, h, w]` regions set to 255
/// and the `holes` cleared again.
pub fn write_mask(
    pcb_dir: &Path,
    rec: usize,
    width: u32,
    height: u32,
    regions: &[[u32; 4]],
    holes: &[[u32; 4]],
) -> Result<()> {
    let contains = |rects: &[[u32; 4]], x: u32, y: u32| {
        rects
            .iter()
            .any(|&[t, l, h, w]| (t..t + h).contains(&y) && (l..l + w).contains(&x))
    };
    let mask = GrayImage::from_fn(width, height, |x, y| {
        let value = contains(regions, x, y) && !contains(holes, x, y);
        Luma([if value { 255 } else { 0 }])
    });
    mask.save(pcb_dir.join(format!("rec{}-mask.png", rec)))?;
    Ok(())
}

/// Write `rec<rec>-annot.txt` with one annotation per line.
pub fn write_annotations(pcb_dir: &Path, rec: usize, lines: &[&str]) -> Result<()> {
    let text: String = lines.iter().map(|line| format!("{}\n", line)).collect();
    fs::write(pcb_dir.join(format!("rec{}-annot.txt", rec)), text)?;
    Ok(())
}

/// A complete 100x100 recording with a centered 50x50 board.
pub fn write_recording(pcb_dir: &Path, rec: usize, lines: &[&str]) -> Result<()> {
    write_image(pcb_dir, rec, 100, 100)?;
    write_mask(pcb_dir, rec, 100, 100, &[[25, 25, 50, 50]], &[])?;
    write_annotations(pcb_dir, rec, lines)?;
    Ok(())
}
