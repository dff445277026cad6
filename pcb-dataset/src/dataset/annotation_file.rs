use crate::common::*;

/// Load all annotations of an annotation file at the unscaled resolution.
///
/// Each line holds `cx cy w h angle [label...]` separated by whitespace.
/// Label tokens are joined back with single spaces.
pub fn load_annotation_file(path: &Path) -> Result<Vec<Annotation>> {
    if !path.is_file() {
        return Err(Error::MissingAnnotationFile {
            path: path.to_owned(),
        });
    }
    let text = fs::read_to_string(path).map_err(Error::io(path))?;

    text.lines()
        .enumerate()
        .map(|(index, line)| {
            parse_annotation_line(line).map_err(|err| Error::MalformedAnnotation {
                path: path.to_owned(),
                line: index + 1,
                reason: format!("{:#}", err),
            })
        })
        .collect()
}

/// Parse one line of an annotation file, see [load_annotation_file].
pub fn parse_annotation_line(line: &str) -> anyhow::Result<Annotation> {
    use anyhow::{ensure, format_err, Context as _};

    let tokens: Vec<&str> = line.split_whitespace().collect();
    ensure!(
        tokens.len() >= 5,
        "expect at least 5 fields, but found {}",
        tokens.len()
    );
    let (numbers, label) = tokens.split_at(5);

    let numbers: Vec<R64> = numbers
        .iter()
        .map(|token| -> anyhow::Result<_> {
            let value: f64 = token
                .parse()
                .with_context(|| format!("'{}' is not a number", token))?;
            R64::try_new(value).ok_or_else(|| format_err!("'{}' is not a finite number", token))
        })
        .try_collect()?;
    let [cx, cy, w, h, angle]: [R64; 5] = numbers
        .try_into()
        .map_err(|_| format_err!("expect exactly 5 numeric fields"))?;

    let rect = RotatedRect::try_from_cycxhw_angle([cy, cx, h, w], angle)?;
    Annotation::try_new(rect, r64(1.0), label.join(" "))
}
