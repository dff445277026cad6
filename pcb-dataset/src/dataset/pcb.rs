use super::{crop_box, load_annotation_file, validate_root, Bounds, IcFilter};
use crate::{
    cache::WriteOnceCache,
    common::*,
    config::IcsConfig,
    naming,
    processor::{apply_mask, rescale_image, rescale_mask},
};

/// A printed circuit board and its recordings.
///
/// Images, masks and annotations are loaded on request. Crop boxes and
/// annotation lists are cached per recording for the lifetime of the
/// instance.
#[derive(Debug)]
pub struct Pcb {
    root: PathBuf,
    scale: R64,
    recordings: BTreeMap<usize, PathBuf>,
    crop_cache: WriteOnceCache<usize, TLBR<u32>>,
    ics_cache: WriteOnceCache<usize, Vec<Annotation>>,
}

impl Pcb {
    /// Open the PCB directory at `root`.
    ///
    /// * `root` - The PCB directory, which must not end with a path separator.
    /// * `scale` - The scale factor in `(0, 2]` applied to images and annotations.
    pub fn new(root: impl AsRef<Path>, scale: f64) -> Result<Self> {
        let root = root.as_ref();
        validate_root(root)?;

        if !(scale > 0.0 && scale <= 2.0) {
            return Err(Error::InvalidScale { scale });
        }

        let mut recordings = BTreeMap::new();
        for entry in fs::read_dir(root).map_err(Error::io(root))? {
            let path = entry.map_err(Error::io(root))?.path();
            if !path.is_file() {
                continue;
            }
            let name = match path.file_name().and_then(|name| name.to_str()) {
                Some(name) => name,
                None => continue,
            };

            match naming::parse_recording_file_name(name) {
                Some(Ok(rec)) => {
                    recordings.insert(rec, path);
                }
                Some(Err(err)) => {
                    warn!("skip recording file '{}': {}", path.display(), err);
                }
                None => {}
            }
        }

        debug!(
            "found {} recordings in '{}'",
            recordings.len(),
            root.display()
        );

        Ok(Self {
            root: root.to_owned(),
            scale: r64(scale),
            recordings,
            crop_cache: WriteOnceCache::new(),
            ics_cache: WriteOnceCache::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn scale(&self) -> f64 {
        self.scale.raw()
    }

    /// The PCB ID encoded in the directory name `pcb<ID>`.
    pub fn id(&self) -> Result<usize> {
        self.root
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(naming::parse_pcb_dir_name)
            .and_then(|id| id.ok())
            .ok_or_else(|| Error::MalformedPath {
                path: self.root.clone(),
            })
    }

    /// IDs of all recordings in ascending order.
    pub fn recordings(&self) -> Vec<usize> {
        self.recordings.keys().copied().collect()
    }

    pub fn image_path(&self, rec: usize) -> Result<&Path> {
        self.recordings
            .get(&rec)
            .map(|path| path.as_path())
            .ok_or(Error::NotFound(Entry::Recording(rec)))
    }

    pub fn mask_path(&self, rec: usize) -> Result<PathBuf> {
        self.sibling_path(rec, naming::mask_file_name(rec))
    }

    pub fn annotation_path(&self, rec: usize) -> Result<PathBuf> {
        self.sibling_path(rec, naming::annotation_file_name(rec))
    }

    /// The recording image, rescaled by the scale factor.
    pub fn image(&self, rec: usize) -> Result<DynamicImage> {
        let path = self.image_path(rec)?;
        let image = image::open(path).map_err(Error::decode(path))?;
        Ok(rescale_image(image, self.scale))
    }

    /// The single-channel recording mask, rescaled by the scale factor.
    pub fn mask(&self, rec: usize) -> Result<GrayImage> {
        let path = self.mask_path(rec)?;
        if !path.is_file() {
            return Err(Error::MissingMask { path });
        }
        let mask = image::open(&path).map_err(Error::decode(&path))?.into_luma8();
        Ok(rescale_mask(mask, self.scale))
    }

    /// The recording image with background pixels set to black, cropped to
    /// the board region.
    pub fn image_masked(&self, rec: usize) -> Result<DynamicImage> {
        let image = self.image(rec)?;
        let mask = self.mask(rec)?;

        let image_size = [image.width(), image.height()];
        let mask_size = [mask.width(), mask.height()];
        if image_size != mask_size {
            return Err(Error::SizeMismatch {
                rec,
                image: image_size,
                mask: mask_size,
            });
        }

        let crop = self.crop_box(rec)?;
        let [t, l, h, w] = crop.tlhw();
        let masked = apply_mask(image, &mask);
        Ok(masked.crop_imm(l, t, w, h))
    }

    /// The board region within the rescaled mask of a recording.
    pub fn crop_box(&self, rec: usize) -> Result<TLBR<u32>> {
        self.crop_cache.get_or_try_insert_with(rec, || {
            let mask = self.mask(rec)?;
            let crop = crop_box(&mask).ok_or(Error::NoContours { rec })?;
            debug!("crop box of recording {} is {:?}", rec, crop.tlhw());
            Ok(crop)
        })
    }

    /// Annotated components of a recording.
    ///
    /// Components are selected by their unscaled area in cm² and their
    /// aspect ratio, where a zero bound disables that side. The survivors
    /// are rescaled by the scale factor, and if `cropped` is set, moved into
    /// the coordinates of [image_masked](Self::image_masked).
    ///
    /// The result is cached by recording ID only. The arguments of the first
    /// successful call for a recording determine the result of every later
    /// call for that recording on this instance, whatever arguments those
    /// calls pass.
    pub fn ics(
        &self,
        rec: usize,
        cropped: bool,
        size: impl Into<Bounds>,
        aspect: impl Into<Bounds>,
    ) -> Result<Vec<Annotation>> {
        let filter = IcFilter {
            size: size.into(),
            aspect: aspect.into(),
        };
        self.ics_cache
            .get_or_try_insert_with(rec, || self.load_ics(rec, cropped, &filter))
    }

    /// Call [ics](Self::ics) with configured arguments.
    pub fn ics_with(&self, rec: usize, config: &IcsConfig) -> Result<Vec<Annotation>> {
        let IcsConfig {
            cropped,
            size,
            aspect,
        } = *config;
        self.ics(rec, cropped, size, aspect)
    }

    fn load_ics(&self, rec: usize, cropped: bool, filter: &IcFilter) -> Result<Vec<Annotation>> {
        let path = self.annotation_path(rec)?;
        let annotations = load_annotation_file(&path)?;
        let num_annotations = annotations.len();

        let selected: Vec<_> = annotations
            .into_iter()
            .filter(|annot| filter.admits(annot))
            .collect();

        debug!(
            "selected {} out of {} annotations in '{}'",
            selected.len(),
            num_annotations,
            path.display()
        );

        if selected.is_empty() {
            return Ok(selected);
        }

        let transform = {
            let scale = Transform::scale(self.scale);
            if cropped {
                let crop = self.crop_box(rec)?;
                let offset = Transform::translate(-r64(crop.t() as f64), -r64(crop.l() as f64));
                &offset * &scale
            } else {
                scale
            }
        };

        Ok(selected.iter().map(|annot| &transform * annot).collect())
    }

    fn sibling_path(&self, rec: usize, file_name: String) -> Result<PathBuf> {
        let image_path = self.image_path(rec)?;
        let dir = image_path.parent().unwrap_or(&self.root);
        Ok(dir.join(file_name))
    }
}

impl fmt::Display for Pcb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num_recordings = self.recordings.len();
        match self.id() {
            Ok(id) => write!(f, "PCB {} ({} recordings)", id, num_recordings),
            Err(_) => write!(
                f,
                "PCB '{}' ({} recordings)",
                self.root.display(),
                num_recordings
            ),
        }
    }
}
