use core::fmt::{self, Display, Formatter};

/// Writes `[a, b, c]`.
pub(crate) fn bracketed<'a, T, I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

/// Writes `a -> b -> c -> `, separator after every item.
pub(crate) fn arrowed<'a, T, I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .try_for_each(|item| write!(f, "{item} -> "))
}
