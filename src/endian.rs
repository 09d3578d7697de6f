use core::fmt::Debug;

/// Little endian field inside a packed on-disk structure
#[derive(Copy, Clone, Default, Debug, PartialEq)]
#[repr(transparent)]
pub struct Little<T: Copy + Default + Debug + PartialEq>(T);

macro_rules! define {
    ($($type:ty),+) => {
        $(
            impl Little<$type> {
                #[inline]
                pub fn to_ne(self) -> $type {
                    <$type>::from_le(self.0)
                }
            }
        )+
    };
}

define!(u16, u32);
