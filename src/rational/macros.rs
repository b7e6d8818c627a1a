/// Shorthand for creating a rational number in tests.
///
/// `R64!(n)` is the integer `n`, `R64!(n, d)` is `n / d` for signed `n` and `d`.
#[macro_export]
macro_rules! R64 {
    ($value:expr) => {
        $crate::Rational::from_integer($value as i64)
    };
    ($numer:expr, $denom:expr) => {
        $crate::Rational::from_signed($numer as i64, $denom as i64)
    };
}
