use std::fmt::Display;

use crate::KhError;

/// Generator label of a single circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Neg,
    Pos
}

impl Label {
    pub fn from_bit(b: bool) -> Self {
        if b { Label::Pos } else { Label::Neg }
    }

    pub fn is_pos(&self) -> bool {
        self == &Label::Pos
    }

    pub fn is_neg(&self) -> bool {
        self == &Label::Neg
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Pos => f.write_str("+"),
            Label::Neg => f.write_str("-")
        }
    }
}

/// Merge rule: equal labels give `-`, distinct labels give `+`.
pub fn merge_label(a: Label, b: Label) -> Label {
    Label::from_bit(a != b)
}

/// Split rule: `+` maps to `--` and `++`, `-` maps to `+-` and `-+`.
pub fn split_labels(a: Label) -> [(Label, Label); 2] {
    use Label::{Neg, Pos};
    match a {
        Pos => [(Neg, Neg), (Pos, Pos)],
        Neg => [(Pos, Neg), (Neg, Pos)]
    }
}

/// Merge rule in the annular theory. The resulting terms depend on
/// which of the two circles wind around the puncture:
///
/// * neither: the plain merge rule,
/// * exactly one: the punctured circle passes its label on,
/// * both: distinct labels give a single `-` term, equal labels vanish.
pub fn annular_merge(a: Label, a_punct: bool, b: Label, b_punct: bool) -> Vec<Label> {
    match (a_punct, b_punct) {
        (false, false) => vec![merge_label(a, b)],
        (true,  false) => vec![a],
        (false, true)  => vec![b],
        (true,  true)  => {
            if a == b { vec![] } else { vec![Label::Neg] }
        }
    }
}

/// Split rule in the annular theory. A punctured circle always splits
/// into one punctured and one unpunctured successor; the punctured one
/// inherits the label and the other is filled with `-`. An unpunctured
/// circle either splits plainly or into two punctured successors, which
/// take `+-` and `-+` independently of the source label. Any other
/// puncture pattern is rejected.
pub fn annular_split(a: Label, src_punct: bool, fst_punct: bool, snd_punct: bool)
    -> Result<Vec<(Label, Label)>, KhError>
{
    use Label::{Neg, Pos};
    match (src_punct, fst_punct, snd_punct) {
        (false, false, false) => Ok(split_labels(a).to_vec()),
        (true,  true,  false) => Ok(vec![(a, Neg)]),
        (true,  false, true)  => Ok(vec![(Neg, a)]),
        (false, true,  true)  => Ok(vec![(Pos, Neg), (Neg, Pos)]),
        _ => Err(KhError::InvalidSplit(src_punct, fst_punct, snd_punct))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Label::{Neg, Pos};

    #[test]
    fn merge() {
        assert_eq!(merge_label(Neg, Neg), Neg);
        assert_eq!(merge_label(Neg, Pos), Pos);
        assert_eq!(merge_label(Pos, Neg), Pos);
        assert_eq!(merge_label(Pos, Pos), Neg);
    }

    #[test]
    fn split() {
        assert_eq!(split_labels(Pos), [(Neg, Neg), (Pos, Pos)]);
        assert_eq!(split_labels(Neg), [(Pos, Neg), (Neg, Pos)]);
    }

    #[test]
    fn ann_merge_plain() {
        assert_eq!(annular_merge(Pos, false, Pos, false), vec![Neg]);
        assert_eq!(annular_merge(Pos, false, Neg, false), vec![Pos]);
    }

    #[test]
    fn ann_merge_one_punctured() {
        assert_eq!(annular_merge(Pos, true, Neg, false), vec![Pos]);
        assert_eq!(annular_merge(Pos, false, Neg, true), vec![Neg]);
    }

    #[test]
    fn ann_merge_both_punctured() {
        assert_eq!(annular_merge(Pos, true, Pos, true), vec![]);
        assert_eq!(annular_merge(Neg, true, Neg, true), vec![]);
        assert_eq!(annular_merge(Pos, true, Neg, true), vec![Neg]);
        assert_eq!(annular_merge(Neg, true, Pos, true), vec![Neg]);
    }

    #[test]
    fn ann_split_plain() {
        assert_eq!(annular_split(Pos, false, false, false).unwrap(), vec![(Neg, Neg), (Pos, Pos)]);
        assert_eq!(annular_split(Neg, false, false, false).unwrap(), vec![(Pos, Neg), (Neg, Pos)]);
    }

    #[test]
    fn ann_split_punctured_src() {
        assert_eq!(annular_split(Pos, true, true, false).unwrap(), vec![(Pos, Neg)]);
        assert_eq!(annular_split(Neg, true, false, true).unwrap(), vec![(Neg, Neg)]);
    }

    #[test]
    fn ann_split_into_punctured() {
        assert_eq!(annular_split(Pos, false, true, true).unwrap(), vec![(Pos, Neg), (Neg, Pos)]);
        assert_eq!(annular_split(Neg, false, true, true).unwrap(), vec![(Pos, Neg), (Neg, Pos)]);
    }

    #[test]
    fn ann_split_invalid() {
        assert_eq!(annular_split(Pos, true, false, false), Err(KhError::InvalidSplit(true, false, false)));
        assert_eq!(annular_split(Pos, false, true, false), Err(KhError::InvalidSplit(false, true, false)));
        assert_eq!(annular_split(Pos, true, true, true), Err(KhError::InvalidSplit(true, true, true)));
    }
}
