//! On-disk naming conventions of the dataset.
//!
//! ```text
//! <dataset_root>/
//!   pcb<ID>/
//!     rec<RID>.jpg
//!     rec<RID>-mask.png
//!     rec<RID>-annot.txt
//! ```

use crate::common::*;

static PCB_DIR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^pcb([0-9]+)$").unwrap());
static RECORDING_FILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^rec([0-9]+)\.jpg$").unwrap());

/// Parse the ID out of a `pcb<ID>` directory name.
///
/// Returns `None` if the name does not follow the pattern, or the integer
/// parsing error if the digits do not fit into an ID.
pub fn parse_pcb_dir_name(name: &str) -> Option<Result<usize, ParseIntError>> {
    parse_id(&PCB_DIR_REGEX, name)
}

/// Parse the ID out of a `rec<ID>.jpg` image file name, see [parse_pcb_dir_name].
pub fn parse_recording_file_name(name: &str) -> Option<Result<usize, ParseIntError>> {
    parse_id(&RECORDING_FILE_REGEX, name)
}

pub fn recording_file_name(rec: usize) -> String {
    format!("rec{}.jpg", rec)
}

pub fn mask_file_name(rec: usize) -> String {
    format!("rec{}-mask.png", rec)
}

pub fn annotation_file_name(rec: usize) -> String {
    format!("rec{}-annot.txt", rec)
}

/// Check if the path string ends with a path separator, such as `data/`.
pub fn has_trailing_separator(path: &Path) -> bool {
    path.as_os_str()
        .to_str()
        .map(|text| text.ends_with(std::path::is_separator))
        .unwrap_or(false)
}

fn parse_id(regex: &Regex, name: &str) -> Option<Result<usize, ParseIntError>> {
    let captures = regex.captures(name)?;
    Some(captures[1].parse())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcb_dir_names() {
        assert_eq!(parse_pcb_dir_name("pcb1"), Some(Ok(1)));
        assert_eq!(parse_pcb_dir_name("pcb042"), Some(Ok(42)));
        assert_eq!(parse_pcb_dir_name("pcb"), None);
        assert_eq!(parse_pcb_dir_name("pcbx"), None);
        assert_eq!(parse_pcb_dir_name("pcb+3"), None);
        assert_eq!(parse_pcb_dir_name("pcb3.bak"), None);
        assert_eq!(parse_pcb_dir_name("mypcb3"), None);
        assert!(matches!(
            parse_pcb_dir_name("pcb99999999999999999999999999"),
            Some(Err(_))
        ));
    }

    #[test]
    fn recording_file_names() {
        assert_eq!(parse_recording_file_name("rec7.jpg"), Some(Ok(7)));
        assert_eq!(parse_recording_file_name(&recording_file_name(12)), Some(Ok(12)));
        assert_eq!(parse_recording_file_name("rec7-mask.png"), None);
        assert_eq!(parse_recording_file_name("rec7-mask.jpg"), None);
        assert_eq!(parse_recording_file_name("rec7.JPG"), None);
        assert_eq!(parse_recording_file_name("rec.jpg"), None);
        assert_eq!(parse_recording_file_name("rec7.jpg.txt"), None);
    }

    #[test]
    fn sibling_file_names() {
        assert_eq!(mask_file_name(3), "rec3-mask.png");
        assert_eq!(annotation_file_name(3), "rec3-annot.txt");
    }

    #[test]
    fn trailing_separator() {
        assert!(has_trailing_separator(Path::new("data/")));
        assert!(!has_trailing_separator(Path::new("data")));
        assert!(!has_trailing_separator(Path::new("data/pcb1")));
    }
}
