// std::borrow::Cow
// std::option::Option

/// This macro extracts owned value from cow
/// but if cow is borrowed it returns default given value
/// 
/// it's helpful when function returns `Cow<'_, T>` as result,
/// where `Cow::Borrowed` option marks that value was not modified
/// and we can use owned original instead of copying it.
///
/// The cow is consumed before `$default` is evaluated, so `$default`
/// may move the value the cow was borrowing from.
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        let owned = if let std::borrow::Cow::Owned(s) = $getcow {
            Some(s)
        } else {
            None
        };
        match owned {
            Some(s) => s,
            None => $default,
        }
    }};
}

pub(crate) use owned_from_cow_or;
