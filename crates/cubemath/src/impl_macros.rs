macro_rules! impl_componentwise_ops {
    () => {};

    (
        impl $trait:ident for $type:ty { fn $func:ident() }
        $($remainder:tt)*
    ) => {
        impl std::ops::$trait for $type {
            type Output = $type;

            fn $func(self, rhs: $type) -> $type {
                Self {
                    x: std::ops::$trait::$func(self.x, rhs.x),
                    y: std::ops::$trait::$func(self.y, rhs.y),
                    z: std::ops::$trait::$func(self.z, rhs.z),
                }
            }
        }
        impl<'a> std::ops::$trait<&'a $type> for $type {
            type Output = $type;

            fn $func(self, rhs: &'a $type) -> $type {
                std::ops::$trait::$func(self, *rhs)
            }
        }
        impl<'a> std::ops::$trait<$type> for &'a $type {
            type Output = $type;

            fn $func(self, rhs: $type) -> $type {
                std::ops::$trait::$func(*self, rhs)
            }
        }
        impl_componentwise_ops! { $($remainder)* }
    };
}

macro_rules! impl_componentwise_assign_ops {
    ($(impl $trait:ident for $type:ty { fn $func:ident() => $op:tt })*) => {
        $(
            impl std::ops::$trait for $type {
                fn $func(&mut self, rhs: $type) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}
