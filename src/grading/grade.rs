/// Converts a numerical grade (typically 0–100) into a letter grade.
///
/// | Range   | Grade |
/// |---------|-------|
/// | >= 90   | A     |
/// | 80–89   | B     |
/// | 70–79   | C     |
/// | 60–69   | D     |
/// | < 60    | F     |
pub fn letter(score: i64) -> String {
    match score {
        s if s >= 90 => "A".into(),
        s if s >= 80 => "B".into(),
        s if s >= 70 => "C".into(),
        s if s >= 60 => "D".into(),
        _ => "F".into(),
    }
}
