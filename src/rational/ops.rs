//! # Operators
//!
//! The std operator traits, for values and references, built on the checked methods. Operators
//! panic where the checked methods return an error.

macro_rules! impl_field_operation {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $checked:ident, $symbol:literal) => {
        impl $trait for Rational {
            type Output = Self;

            #[track_caller]
            fn $method(self, rhs: Self) -> Self::Output {
                or_panic(
                    self.$checked(&rhs),
                    || format!("{} {} {}", self, $symbol, rhs),
                )
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Self;

            #[track_caller]
            fn $method(self, rhs: &Rational) -> Self::Output {
                $trait::$method(self, *rhs)
            }
        }

        impl $trait<Rational> for &Rational {
            type Output = Rational;

            #[track_caller]
            fn $method(self, rhs: Rational) -> Self::Output {
                $trait::$method(*self, rhs)
            }
        }

        impl $trait for &Rational {
            type Output = Rational;

            #[track_caller]
            fn $method(self, rhs: Self) -> Self::Output {
                $trait::$method(*self, *rhs)
            }
        }

        impl $assign_trait for Rational {
            #[track_caller]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $trait::$method(*self, rhs);
            }
        }

        impl $assign_trait<&Rational> for Rational {
            #[track_caller]
            fn $assign_method(&mut self, rhs: &Self) {
                *self = $trait::$method(*self, *rhs);
            }
        }
    }
}

mod field {
    mod add {
        use std::iter::Sum;
        use std::ops::{Add, AddAssign};

        use crate::error::or_panic;
        use crate::rational::Rational;

        impl_field_operation!(Add, add, AddAssign, add_assign, try_add, "+");

        impl Sum for Rational {
            fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, Add::add)
            }
        }

        impl<'a> Sum<&'a Rational> for Rational {
            fn sum<I: Iterator<Item=&'a Rational>>(iter: I) -> Self {
                iter.fold(Self::ZERO, Add::add)
            }
        }
    }

    mod sub {
        use std::ops::{Sub, SubAssign};

        use crate::error::or_panic;
        use crate::rational::Rational;

        impl_field_operation!(Sub, sub, SubAssign, sub_assign, try_sub, "-");
    }

    mod mul {
        use std::iter::Product;
        use std::ops::{Mul, MulAssign};

        use crate::error::or_panic;
        use crate::rational::Rational;

        impl_field_operation!(Mul, mul, MulAssign, mul_assign, try_mul, "*");

        impl Product for Rational {
            fn product<I: Iterator<Item=Self>>(iter: I) -> Self {
                iter.fold(Self::ONE, Mul::mul)
            }
        }

        impl<'a> Product<&'a Rational> for Rational {
            fn product<I: Iterator<Item=&'a Rational>>(iter: I) -> Self {
                iter.fold(Self::ONE, Mul::mul)
            }
        }
    }

    mod div {
        use std::ops::{Div, DivAssign};

        use crate::error::or_panic;
        use crate::rational::Rational;

        impl_field_operation!(Div, div, DivAssign, div_assign, try_div, "/");
    }

    mod neg {
        use std::ops::Neg;

        use crate::error::or_panic;
        use crate::rational::Rational;

        impl Neg for Rational {
            type Output = Self;

            #[track_caller]
            fn neg(self) -> Self::Output {
                or_panic(self.try_neg(), || format!("-({})", self))
            }
        }

        impl Neg for &Rational {
            type Output = Rational;

            #[track_caller]
            fn neg(self) -> Self::Output {
                Neg::neg(*self)
            }
        }
    }
}
