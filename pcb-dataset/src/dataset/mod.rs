//! Dataset, board and annotation access.

mod annotation_file;
mod crop;
mod filter;
mod pcb;
mod pcb_dataset;

pub use annotation_file::*;
pub use crop::*;
pub use filter::*;
pub use pcb::*;
pub use pcb_dataset::*;

use crate::{common::*, naming};

/// Check that the root is an existing directory given without a trailing separator.
pub(crate) fn validate_root(root: &Path) -> Result<()> {
    if !root.is_dir() || naming::has_trailing_separator(root) {
        return Err(Error::InvalidRoot {
            path: root.to_owned(),
        });
    }
    Ok(())
}
