// Macro to generate SquareMultiply impls for each int type
#[macro_export]
macro_rules! impl_square_multiply {
    ( $( $t:ty ),+ ) => {
        $(
            impl $crate::power::SquareMultiply for $t {
                const ONE: Self = 1;

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }
            }
        )+
    };
}
