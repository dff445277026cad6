//! Dataset access configuration format.

use crate::{
    common::*,
    dataset::{Bounds, Pcb, PcbDataset},
};
use anyhow::Context as _;

/// The dataset access configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The dataset root containing `pcb<ID>` directories.
    pub dataset_dir: PathBuf,
    /// The scale factor in `(0, 2]` applied to images and annotations.
    #[serde(default = "default_scale")]
    pub scale: R64,
    #[serde(default)]
    pub ics: IcsConfig,
}

impl Config {
    pub fn open<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config = json5::from_str(&text)
            .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
        Ok(config)
    }

    pub fn open_dataset(&self) -> Result<PcbDataset> {
        PcbDataset::new(&self.dataset_dir)
    }

    /// Open a PCB of the dataset at the configured scale.
    pub fn pcb(&self, dataset: &PcbDataset, id: usize) -> Result<Pcb> {
        dataset.get_pcb(id, self.scale.raw())
    }
}

/// Annotation query options, see [Pcb::ics].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IcsConfig {
    /// Return coordinates in the cropped image.
    #[serde(default)]
    pub cropped: bool,
    /// `[min, max]` area in cm² at the unscaled resolution, 0 = unbounded.
    #[serde(default)]
    pub size: Bounds,
    /// `[min, max]` aspect ratio, 0 = unbounded.
    #[serde(default)]
    pub aspect: Bounds,
}

fn default_scale() -> R64 {
    r64(1.0)
}
