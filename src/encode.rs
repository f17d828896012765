//! Conversion of label sequences into encoded target matrices.

use std::collections::HashMap;

use crate::{
    labels,
    matrix::Matrix,
    typ::{Elem, Num},
    Error, Label, Result,
};

/// A mapping from labels to the code each one is encoded as.
///
/// All codes have the same non-zero width, which is checked on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodingRule<E> {
    codes: HashMap<Label, Vec<E>>,
    width: usize,
}

impl<E> EncodingRule<E>
where
    E: Elem,
{
    /// Create a rule from a map of label to code.
    pub fn new(codes: HashMap<Label, Vec<E>>) -> Result<Self> {
        let width = codes
            .values()
            .next()
            .ok_or(Error::Empty("encoding rule"))?
            .len();
        if width == 0 {
            return Err(Error::ZeroDimension {
                rows: codes.len(),
                cols: 0,
            });
        }
        if let Some(code) = codes.values().find(|c| c.len() != width) {
            return Err(Error::ShapeMismatch {
                expected: width,
                actual: code.len(),
            });
        }
        Ok(Self { codes, width })
    }

    /// Create a rule from `(label, code)` pairs. Later pairs replace earlier ones.
    pub fn from_pairs<I, C>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Label, C)>,
        C: Into<Vec<E>>,
    {
        Self::new(pairs.into_iter().map(|(l, c)| (l, c.into())).collect())
    }

    /// Return the length of every code.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Return the number of labels with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Return whether no label has a code. Always false for a constructed rule.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Return the code for `label`.
    pub fn get(&self, label: Label) -> Option<&[E]> {
        self.codes.get(&label).map(Vec::as_slice)
    }

    /// Return whether `label` has a code.
    pub fn contains(&self, label: Label) -> bool {
        self.codes.contains_key(&label)
    }
}

impl<E> EncodingRule<E>
where
    E: Num,
{
    /// Create the standard one-hot rule for `classes` labels: label `v` maps to a code with `ONE`
    /// at index `v` and `ZERO` elsewhere.
    pub fn one_hot(classes: usize) -> Result<Self> {
        if classes == 0 {
            return Err(Error::Empty("classes"));
        }
        let codes = (0..classes)
            .map(|label| {
                let mut code = vec![E::ZERO; classes];
                code[label] = E::ONE;
                (label, code)
            })
            .collect();
        Ok(Self {
            codes,
            width: classes,
        })
    }
}

/// Encode every label with the code `rule` assigns it.
///
/// Row `i` of the result equals the code of `labels[i]`. Fails without a partial result if any
/// label has no code.
pub fn encode_with_rule<E>(labels: &[Label], rule: &EncodingRule<E>) -> Result<Matrix<E>>
where
    E: Elem,
{
    if labels.is_empty() {
        return Err(Error::Empty("labels"));
    }
    let mut data = Vec::with_capacity(labels.len() * rule.width());
    for &label in labels {
        let code = rule.get(label).ok_or(Error::MissingEncoding(label))?;
        data.extend_from_slice(code);
    }
    log::debug!(
        "encoded {} labels into {} columns",
        labels.len(),
        rule.width()
    );
    Matrix::new(labels.len(), rule.width(), data)
}

/// One-hot encode labels drawn from the dense range `0..k`, where `k` is the number of distinct
/// labels.
///
/// ```
/// use prepnet::encode::auto_encode;
///
/// let targets = auto_encode::<i32>(&[0, 2, 1]).unwrap();
/// assert_eq!(targets.to_rows(), vec![vec![1, 0, 0], vec![0, 0, 1], vec![0, 1, 0]]);
/// ```
pub fn auto_encode<E>(labels: &[Label]) -> Result<Matrix<E>>
where
    E: Num,
{
    let classes = labels::count_unique(labels)?;
    if let Some(&label) = labels.iter().find(|&&l| l >= classes) {
        return Err(Error::NotDense { label, classes });
    }
    encode_with_rule(labels, &EncodingRule::one_hot(classes)?)
}
