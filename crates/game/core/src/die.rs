//! Die face values and result formatting.

/// Value shown on a single die face.
///
/// Faces are drawn independently per slot; the painter picks the matching
/// tile and [`format_sum`] renders the settled total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DieValue {
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "0")]
    Zero,
    #[strum(serialize = "+")]
    Plus,
}

impl DieValue {
    /// Maps a uniform sample in `[0, 1)` onto a face by equal thirds:
    /// `[0, 1/3)` is zero, `[1/3, 2/3)` is plus, `[2/3, 1)` is minus.
    ///
    /// The interval layout is part of the contract; every face has the same
    /// probability mass and boundaries resolve to the higher interval.
    pub fn from_unit(sample: f64) -> Self {
        if sample < 1.0 / 3.0 {
            DieValue::Zero
        } else if sample < 2.0 / 3.0 {
            DieValue::Plus
        } else {
            DieValue::Minus
        }
    }

    /// Signed contribution of this face to the roll total.
    pub fn score(self) -> i32 {
        match self {
            DieValue::Minus => -1,
            DieValue::Zero => 0,
            DieValue::Plus => 1,
        }
    }
}

/// Formats a roll total for the accessibility sink.
///
/// Positive totals carry an explicit `+` prefix; zero and negative totals
/// print as-is (`+3`, `0`, `-2`).
pub fn format_sum(sum: i32) -> String {
    if sum > 0 {
        format!("+{sum}")
    } else {
        sum.to_string()
    }
}
