pub use crate::error::{Entry, Error, Result};
pub use bbox::{prelude::*, RotatedRect, Transform, TLBR};
pub use dashmap::DashMap;
pub use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Pixel};
pub use itertools::Itertools as _;
pub use label::Annotation;
pub use log::{debug, info, warn};
pub use noisy_float::prelude::*;
pub use once_cell::sync::Lazy;
pub use regex::Regex;
pub use serde::{Deserialize, Serialize};
pub use std::{
    collections::BTreeMap,
    fmt,
    fs,
    hash::Hash,
    num::ParseIntError,
    path::{Path, PathBuf},
};
