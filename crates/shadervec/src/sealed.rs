/// A marker trait used to prevent other traits from being implemented outside
/// of `shadervec`.
pub trait Sealed {}

impl Sealed for crate::Float2 {}
impl Sealed for crate::Float3 {}
impl Sealed for crate::Float4 {}
