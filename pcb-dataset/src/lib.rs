//! Read-only access to a dataset of PCB photographs.
//!
//! The dataset holds one `pcb<ID>` directory per board. Each recording of
//! a board consists of an image, a mask marking the board pixels and a list
//! of rotated-rectangle component annotations. [PcbDataset] enumerates the
//! boards and [Pcb] serves masked and cropped images and filtered
//! annotations of one board.

mod common;

pub mod cache;
pub mod config;
pub mod dataset;
pub mod error;
pub mod naming;
pub mod processor;

pub use bbox::{RotatedRect, Transform, TLBR};
pub use dataset::{Bounds, Pcb, PcbDataset};
pub use error::{Entry, Error, Result};
pub use label::{Annotation, PIXELS_PER_CM};
