//! Splicing the generated section into an existing README

/// Replace the text between `start` and `stop` with `section`.
///
/// Text before the first start marker and after the first stop marker that
/// follows it is preserved. A README without a start marker gets the section
/// appended; a start marker without a matching stop marker loses everything
/// after it.
pub fn splice_readme(readme: &str, section: &str, start: &str, stop: &str) -> String {
    let (before, rest) = match readme.find(start) {
        Some(idx) => (&readme[..idx], Some(&readme[idx + start.len()..])),
        None => (readme, None),
    };
    let after = rest
        .and_then(|rest| rest.find(stop).map(|idx| &rest[idx + stop.len()..]))
        .unwrap_or("");

    format!("{before}{start}\n{section}\n{stop}{after}")
}
