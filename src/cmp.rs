//! Equality and ordering.
//!
//! An empty wrapper sorts before every non-empty one, two empty wrappers are equal, and two
//! non-empty wrappers compare the way their pointees do. The same rule applies against [`Null`],
//! which stands for "no value", and against plain values, where an empty wrapper is less than
//! and unequal to any value.
//!
//! The `==` and `<` operators against plain values exist for the primitive types, `String` and
//! `str` only. For any other pointee type, including your own, use the comparison methods
//! [`eq_value`](IndirectValue::eq_value), [`ne_value`](IndirectValue::ne_value),
//! [`partial_cmp_value`](IndirectValue::partial_cmp_value),
//! [`lt_value`](IndirectValue::lt_value) and friends, which accept any `U` the pointee compares
//! with.

use alloc::string::String;
use core::cmp::Ordering;

use crate::policy::Deleter;
use crate::IndirectValue;

/// The "no value" sentinel.
///
/// `value == Null` holds exactly when `value` is empty, and `Null` is less than or equal to every
/// wrapper. To compare a wrapper with a plain value of a type that has no operator impl here, use
/// [`IndirectValue::eq_value`] and the other `*_value` methods.
///
/// ```
/// use indirect_value::{IndirectValue, Null};
///
/// let empty = IndirectValue::<u32>::empty();
/// let full = IndirectValue::new(1u32);
///
/// assert!(empty == Null);
/// assert!(full != Null);
/// assert!(Null < full);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Null;

impl<T, C, D, U, C2, D2> PartialEq<IndirectValue<U, C2, D2>> for IndirectValue<T, C, D>
where
    T: ?Sized + PartialEq<U>,
    U: ?Sized,
    D: Deleter<T>,
    D2: Deleter<U>,
{
    #[inline]
    fn eq(&self, other: &IndirectValue<U, C2, D2>) -> bool {
        match (IndirectValue::get(self), IndirectValue::get(other)) {
            (Some(lhs), Some(rhs)) => PartialEq::eq(lhs, rhs),
            (lhs, rhs) => lhs.is_none() && rhs.is_none(),
        }
    }
    #[inline]
    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &IndirectValue<U, C2, D2>) -> bool {
        match (IndirectValue::get(self), IndirectValue::get(other)) {
            (Some(lhs), Some(rhs)) => PartialEq::ne(lhs, rhs),
            (lhs, rhs) => lhs.is_some() || rhs.is_some(),
        }
    }
}

impl<T: ?Sized + Eq, C, D: Deleter<T>> Eq for IndirectValue<T, C, D> {}

impl<T, C, D, U, C2, D2> PartialOrd<IndirectValue<U, C2, D2>> for IndirectValue<T, C, D>
where
    T: ?Sized + PartialOrd<U>,
    U: ?Sized,
    D: Deleter<T>,
    D2: Deleter<U>,
{
    #[inline]
    fn partial_cmp(&self, other: &IndirectValue<U, C2, D2>) -> Option<Ordering> {
        match (IndirectValue::get(self), IndirectValue::get(other)) {
            (Some(lhs), Some(rhs)) => PartialOrd::partial_cmp(lhs, rhs),
            _ => Some(self.has_value().cmp(&other.has_value())),
        }
    }
    #[inline]
    fn lt(&self, other: &IndirectValue<U, C2, D2>) -> bool {
        match (IndirectValue::get(self), IndirectValue::get(other)) {
            (Some(lhs), Some(rhs)) => PartialOrd::lt(lhs, rhs),
            (lhs, rhs) => lhs.is_none() && rhs.is_some(),
        }
    }
    #[inline]
    fn le(&self, other: &IndirectValue<U, C2, D2>) -> bool {
        match (IndirectValue::get(self), IndirectValue::get(other)) {
            (Some(lhs), Some(rhs)) => PartialOrd::le(lhs, rhs),
            (lhs, _) => lhs.is_none(),
        }
    }
    #[inline]
    fn gt(&self, other: &IndirectValue<U, C2, D2>) -> bool {
        match (IndirectValue::get(self), IndirectValue::get(other)) {
            (Some(lhs), Some(rhs)) => PartialOrd::gt(lhs, rhs),
            (lhs, rhs) => lhs.is_some() && rhs.is_none(),
        }
    }
    #[inline]
    fn ge(&self, other: &IndirectValue<U, C2, D2>) -> bool {
        match (IndirectValue::get(self), IndirectValue::get(other)) {
            (Some(lhs), Some(rhs)) => PartialOrd::ge(lhs, rhs),
            (_, rhs) => rhs.is_none(),
        }
    }
}

impl<T: ?Sized + Ord, C, D: Deleter<T>> Ord for IndirectValue<T, C, D> {
    #[inline]
    fn cmp(&self, other: &IndirectValue<T, C, D>) -> Ordering {
        match (IndirectValue::get(self), IndirectValue::get(other)) {
            (Some(lhs), Some(rhs)) => Ord::cmp(lhs, rhs),
            _ => self.has_value().cmp(&other.has_value()),
        }
    }
}

impl<T: ?Sized, C, D: Deleter<T>> PartialEq<Null> for IndirectValue<T, C, D> {
    #[inline]
    fn eq(&self, _: &Null) -> bool {
        !self.has_value()
    }
}

impl<T: ?Sized, C, D: Deleter<T>> PartialEq<IndirectValue<T, C, D>> for Null {
    #[inline]
    fn eq(&self, other: &IndirectValue<T, C, D>) -> bool {
        !other.has_value()
    }
}

impl<T: ?Sized, C, D: Deleter<T>> PartialOrd<Null> for IndirectValue<T, C, D> {
    #[inline]
    fn partial_cmp(&self, _: &Null) -> Option<Ordering> {
        Some(self.has_value().cmp(&false))
    }
}

impl<T: ?Sized, C, D: Deleter<T>> PartialOrd<IndirectValue<T, C, D>> for Null {
    #[inline]
    fn partial_cmp(&self, other: &IndirectValue<T, C, D>) -> Option<Ordering> {
        Some(false.cmp(&other.has_value()))
    }
}

/// Comparisons against plain values. An empty wrapper is unequal to, and less than, any value.
impl<T: ?Sized, C, D: Deleter<T>> IndirectValue<T, C, D> {
    /// Returns true if the wrapper holds a value equal to `rhs`.
    ///
    /// ```
    /// use indirect_value::IndirectValue;
    ///
    /// let name = IndirectValue::new(String::from("ferris"));
    /// assert!(name.eq_value("ferris"));
    /// assert!(!IndirectValue::<String>::empty().eq_value("ferris"));
    /// ```
    #[inline]
    pub fn eq_value<U: ?Sized>(&self, rhs: &U) -> bool
    where
        T: PartialEq<U>,
    {
        IndirectValue::get(self).is_some_and(|lhs| PartialEq::eq(lhs, rhs))
    }

    /// Returns true if the wrapper is empty or holds a value unequal to `rhs`.
    #[inline]
    pub fn ne_value<U: ?Sized>(&self, rhs: &U) -> bool
    where
        T: PartialEq<U>,
    {
        IndirectValue::get(self).map_or(true, |lhs| PartialEq::ne(lhs, rhs))
    }

    /// Compares the pointee with `rhs`; an empty wrapper is [`Ordering::Less`].
    #[inline]
    pub fn partial_cmp_value<U: ?Sized>(&self, rhs: &U) -> Option<Ordering>
    where
        T: PartialOrd<U>,
    {
        match IndirectValue::get(self) {
            Some(lhs) => PartialOrd::partial_cmp(lhs, rhs),
            None => Some(Ordering::Less),
        }
    }

    /// Returns true if the wrapper is empty or holds a value less than `rhs`.
    #[inline]
    pub fn lt_value<U: ?Sized>(&self, rhs: &U) -> bool
    where
        T: PartialOrd<U>,
    {
        IndirectValue::get(self).map_or(true, |lhs| PartialOrd::lt(lhs, rhs))
    }

    /// Returns true if the wrapper is empty or holds a value less than or equal to `rhs`.
    #[inline]
    pub fn le_value<U: ?Sized>(&self, rhs: &U) -> bool
    where
        T: PartialOrd<U>,
    {
        IndirectValue::get(self).map_or(true, |lhs| PartialOrd::le(lhs, rhs))
    }

    /// Returns true if the wrapper holds a value greater than `rhs`.
    #[inline]
    pub fn gt_value<U: ?Sized>(&self, rhs: &U) -> bool
    where
        T: PartialOrd<U>,
    {
        IndirectValue::get(self).is_some_and(|lhs| PartialOrd::gt(lhs, rhs))
    }

    /// Returns true if the wrapper holds a value greater than or equal to `rhs`.
    #[inline]
    pub fn ge_value<U: ?Sized>(&self, rhs: &U) -> bool
    where
        T: PartialOrd<U>,
    {
        IndirectValue::get(self).is_some_and(|lhs| PartialOrd::ge(lhs, rhs))
    }
}

// Operator forms of the value comparisons, in both directions. A blanket `PartialEq<U>` would
// overlap with the wrapper-to-wrapper and `Null` impls, so these are spelled out per type.
macro_rules! impl_value_eq {
    ($lhs:ty, $rhs:ty) => {
        impl<'a, C, D: Deleter<$lhs>> PartialEq<$rhs> for IndirectValue<$lhs, C, D> {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool {
                self.eq_value(other)
            }
        }

        impl<'a, C, D: Deleter<$lhs>> PartialEq<IndirectValue<$lhs, C, D>> for $rhs {
            #[inline]
            fn eq(&self, other: &IndirectValue<$lhs, C, D>) -> bool {
                IndirectValue::get(other).is_some_and(|rhs| PartialEq::eq(self, rhs))
            }
        }
    };
}

macro_rules! impl_value_ord {
    ($($ty:ty),* $(,)?) => {$(
        impl_value_eq!($ty, $ty);

        impl<C, D: Deleter<$ty>> PartialOrd<$ty> for IndirectValue<$ty, C, D> {
            #[inline]
            fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                self.partial_cmp_value(other)
            }
            #[inline]
            fn lt(&self, other: &$ty) -> bool {
                self.lt_value(other)
            }
            #[inline]
            fn le(&self, other: &$ty) -> bool {
                self.le_value(other)
            }
            #[inline]
            fn gt(&self, other: &$ty) -> bool {
                self.gt_value(other)
            }
            #[inline]
            fn ge(&self, other: &$ty) -> bool {
                self.ge_value(other)
            }
        }

        impl<C, D: Deleter<$ty>> PartialOrd<IndirectValue<$ty, C, D>> for $ty {
            #[inline]
            fn partial_cmp(&self, other: &IndirectValue<$ty, C, D>) -> Option<Ordering> {
                match IndirectValue::get(other) {
                    Some(rhs) => PartialOrd::partial_cmp(self, rhs),
                    None => Some(Ordering::Greater),
                }
            }
            #[inline]
            fn lt(&self, other: &IndirectValue<$ty, C, D>) -> bool {
                IndirectValue::get(other).is_some_and(|rhs| PartialOrd::lt(self, rhs))
            }
            #[inline]
            fn le(&self, other: &IndirectValue<$ty, C, D>) -> bool {
                IndirectValue::get(other).is_some_and(|rhs| PartialOrd::le(self, rhs))
            }
            #[inline]
            fn gt(&self, other: &IndirectValue<$ty, C, D>) -> bool {
                IndirectValue::get(other).map_or(true, |rhs| PartialOrd::gt(self, rhs))
            }
            #[inline]
            fn ge(&self, other: &IndirectValue<$ty, C, D>) -> bool {
                IndirectValue::get(other).map_or(true, |rhs| PartialOrd::ge(self, rhs))
            }
        }
    )*};
}

impl_value_ord!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, String,
);

impl_value_eq!(String, str);
impl_value_eq!(String, &'a str);
impl_value_eq!(str, str);
impl_value_eq!(str, String);

#[cfg(test)]
mod tests {
    use super::Null;
    use crate::IndirectValue;
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cmp::Ordering;

    #[test]
    fn empty_sorts_first() {
        let empty = IndirectValue::<i32>::empty();
        let full = IndirectValue::new(i32::MIN);

        assert!(empty < full);
        assert!(!(full < empty));
        assert!(empty <= full);
        assert!(full > empty);
        assert!(full >= empty);
        assert_eq!(empty.cmp(&full), Ordering::Less);
        assert_eq!(full.partial_cmp(&empty), Some(Ordering::Greater));
    }

    #[test]
    fn empties_are_equal() {
        let a = IndirectValue::<i32>::empty();
        let b = IndirectValue::<i32>::empty();

        assert!(a == b);
        assert!(!(a != b));
        assert!(!(a < b));
        assert!(!(b < a));
        assert!(a <= b && a >= b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn values_delegate_to_pointee() {
        let one = IndirectValue::new(1i32);
        let two = IndirectValue::new(2i32);

        assert!(one != two);
        assert!(one < two);
        assert!(two > one);
        assert_eq!(one.cmp(&two), Ordering::Less);
        assert_eq!(one, IndirectValue::new(1));
    }

    #[test]
    fn mixed_pointee_types() {
        let owned = IndirectValue::new(String::from("abc"));
        let borrowed = IndirectValue::new("abc");
        assert!(owned == borrowed);
    }

    #[test]
    fn partial_order_follows_pointee() {
        let nan = IndirectValue::new(f64::NAN);
        let one = IndirectValue::new(1.0f64);

        assert_eq!(nan.partial_cmp(&one), None);
        assert!(!(nan < one) && !(nan > one) && !(nan <= one) && !(nan >= one));
        assert!(nan != nan.clone());
    }

    #[test]
    fn sort_places_empties_first() {
        let mut values: Vec<IndirectValue<u8>> = vec![
            IndirectValue::new(3),
            IndirectValue::empty(),
            IndirectValue::new(1),
        ];
        values.sort();

        assert!(!values[0].has_value());
        assert_eq!(*values[1], 1);
        assert_eq!(*values[2], 3);
    }

    #[test]
    fn null_sentinel() {
        let empty = IndirectValue::<u32>::empty();
        let full = IndirectValue::new(0u32);

        assert!(empty == Null && Null == empty);
        assert!(full != Null && Null != full);

        assert!(Null <= empty && Null <= full);
        assert!(Null < full && full > Null);
        assert!(!(Null < empty) && !(empty > Null));
        assert!(empty >= Null && empty <= Null);
        assert_eq!(full.partial_cmp(&Null), Some(Ordering::Greater));
        assert_eq!(Null.partial_cmp(&empty), Some(Ordering::Equal));
    }

    #[test]
    fn raw_value_methods() {
        let empty = IndirectValue::<i32>::empty();
        let five = IndirectValue::new(5i32);

        assert!(!empty.eq_value(&5) && empty.ne_value(&5));
        assert!(empty.lt_value(&i32::MIN) && empty.le_value(&i32::MIN));
        assert!(!empty.gt_value(&i32::MIN) && !empty.ge_value(&i32::MIN));
        assert_eq!(empty.partial_cmp_value(&0), Some(Ordering::Less));

        assert!(five.eq_value(&5) && !five.ne_value(&5));
        assert!(five.lt_value(&6) && five.le_value(&5));
        assert!(five.gt_value(&4) && five.ge_value(&5));
        assert_eq!(five.partial_cmp_value(&5), Some(Ordering::Equal));
    }

    #[test]
    fn raw_value_operators() {
        let empty = IndirectValue::<i32>::empty();
        let five = IndirectValue::new(5i32);

        assert!(five == 5 && 5 == five);
        assert!(empty != 5 && 5 != empty);
        assert!(empty < 0 && 0 > empty);
        assert!(!(0 < empty) && !(0 <= empty));
        assert!(0 >= empty);
        assert!(4 < five && five < 6);
        assert!(5 <= five && five >= 5);
        assert_eq!(0i32.partial_cmp(&empty), Some(Ordering::Greater));
    }

    #[test]
    fn string_operators() {
        let name = IndirectValue::new(String::from("ferris"));
        assert!(name == "ferris" && "ferris" == name);
        assert!(name == *"ferris");
        assert!(name == String::from("ferris"));
        assert!(name < String::from("z"));
        assert!(IndirectValue::<String>::empty() != "ferris");
    }

    #[test]
    fn str_operators() {
        let name: IndirectValue<str> = IndirectValue::from(Box::<str>::from("ferris"));
        assert!(name == *"ferris" && *"ferris" == name);
        assert!(name == String::from("ferris") && String::from("ferris") == name);
        assert!(name != *"crab");
    }

    #[test]
    fn custom_types_use_value_methods() {
        #[derive(Debug, PartialEq, PartialOrd)]
        struct Meters(u32);

        let height = IndirectValue::new(Meters(3));
        assert!(height.eq_value(&Meters(3)));
        assert!(height.lt_value(&Meters(4)));
        assert!(IndirectValue::<Meters>::empty().lt_value(&Meters(0)));
    }
}
