//! Traits for types that can be used as elements in a matrix.

/// Matrix elements.
pub trait Elem: 'static + Clone + PartialEq + std::fmt::Debug {}

impl Elem for bool {}
impl Elem for u8 {}
impl Elem for i32 {}
impl Elem for i64 {}
impl Elem for usize {}
impl Elem for f32 {}
impl Elem for f64 {}

/// Elements that have a zero and a one.
///
/// One-hot codes are built from these two values, and `ONE` is the default bias.
pub trait Num: Elem {
    /// The zero value of the type.
    const ZERO: Self;

    /// The one value of the type.
    const ONE: Self;
}

impl Num for bool {
    const ZERO: Self = false;
    const ONE: Self = true;
}

impl Num for u8 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
}

impl Num for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
}

impl Num for i64 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
}

impl Num for usize {
    const ZERO: Self = 0;
    const ONE: Self = 1;
}

impl Num for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}

impl Num for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}
