//! Optional values: presence checks and filtering out the gaps.

pub const OPTIONAL_INTS: [Option<i32>; 6] = [None, Some(1), None, Some(3), None, Some(5)];

/// `Some("Value is nil")` while the value is absent.
pub fn nil_check(value: Option<i32>) -> Option<&'static str> {
    if value.is_none() {
        Some("Value is nil")
    } else {
        None
    }
}

/// Lazily yields the present values, in input order.
pub fn present_values<'a, I>(values: I) -> impl Iterator<Item = i32> + 'a
where
    I: IntoIterator<Item = &'a Option<i32>>,
    I::IntoIter: 'a,
{
    values.into_iter().flatten().copied()
}

pub fn value_lines<'a, I>(values: I) -> impl Iterator<Item = String> + 'a
where
    I: IntoIterator<Item = &'a Option<i32>>,
    I::IntoIter: 'a,
{
    present_values(values).map(|v| format!("Value: {v}"))
}
