use super::{validate_root, Pcb};
use crate::{common::*, naming};

/// A collection of PCB directories named `pcb<ID>`.
#[derive(Debug, Clone)]
pub struct PcbDataset {
    root: PathBuf,
    pcb_paths: BTreeMap<usize, PathBuf>,
}

impl PcbDataset {
    /// Scan the dataset directory for PCB directories.
    ///
    /// Names that look like a PCB directory but carry an out-of-range ID
    /// are skipped with a warning. If two names map to the same ID, such as
    /// `pcb1` and `pcb01`, the lexicographically smaller one is kept.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        validate_root(root)?;

        let paths: Vec<PathBuf> = fs::read_dir(root)
            .map_err(Error::io(root))?
            .map(|entry| Ok(entry.map_err(Error::io(root))?.path()))
            .collect::<Result<_>>()?;

        let mut pcb_paths: BTreeMap<usize, PathBuf> = BTreeMap::new();

        for path in paths.into_iter().sorted() {
            if !path.is_dir() {
                continue;
            }
            let name = match path.file_name().and_then(|name| name.to_str()) {
                Some(name) => name,
                None => continue,
            };

            match naming::parse_pcb_dir_name(name) {
                Some(Ok(id)) => {
                    if let Some(prev) = pcb_paths.get(&id) {
                        warn!(
                            "skip '{}' since PCB {} is already provided by '{}'",
                            path.display(),
                            id,
                            prev.display()
                        );
                        continue;
                    }
                    pcb_paths.insert(id, path);
                }
                Some(Err(err)) => {
                    warn!("skip PCB directory '{}': {}", path.display(), err);
                }
                None => {}
            }
        }

        if pcb_paths.is_empty() {
            return Err(Error::EmptyDataset {
                path: root.to_owned(),
            });
        }

        info!(
            "found {} PCB directories in '{}'",
            pcb_paths.len(),
            root.display()
        );

        Ok(Self {
            root: root.to_owned(),
            pcb_paths,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn num_pcbs(&self) -> usize {
        self.pcb_paths.len()
    }

    /// IDs of all PCBs in ascending order.
    pub fn pcb_ids(&self) -> Vec<usize> {
        self.pcb_paths.keys().copied().collect()
    }

    /// Open the PCB with the given ID, see [Pcb::new].
    pub fn get_pcb(&self, id: usize, scale: f64) -> Result<Pcb> {
        let path = self
            .pcb_paths
            .get(&id)
            .ok_or(Error::NotFound(Entry::Pcb(id)))?;
        Pcb::new(path, scale)
    }

    /// Open every PCB in ascending ID order.
    pub fn pcbs(&self, scale: f64) -> impl Iterator<Item = Result<Pcb>> + '_ {
        self.pcb_paths
            .values()
            .map(move |path| Pcb::new(path, scale))
    }
}
