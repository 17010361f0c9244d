/// How a blur pass reads taps that fall outside the signal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BorderMode {
    /// Repeat the nearest edge sample.
    #[default]
    Clamp,
    /// Read a fixed value.
    Constant(f32),
    /// Mirror around the edge sample without repeating it (`dcb|abcd|cba`).
    Reflect101,
}

/// Maps a possibly out-of-range tap index into `0..len`.
///
/// Returns `None` when the tap should read the constant fill value, or when
/// the signal is empty.
pub fn map_index(i: isize, len: usize, mode: BorderMode) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if (0..len as isize).contains(&i) {
        return Some(i as usize);
    }

    match mode {
        BorderMode::Constant(_) => None,
        BorderMode::Clamp => Some(if i < 0 { 0 } else { len - 1 }),
        BorderMode::Reflect101 if len == 1 => Some(0),
        BorderMode::Reflect101 => {
            let period = 2 * len as isize - 2;
            let r = i.rem_euclid(period) as usize;
            Some(if r < len { r } else { 2 * len - 2 - r })
        }
    }
}
