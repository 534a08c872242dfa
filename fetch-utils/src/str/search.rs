/// Returns `true` if `s` equals any item produced by `candidates`,
/// using ASCII case insensitive comparison.
pub fn any_eq_ignore_ascii_case<T, I>(s: T, candidates: I) -> bool
where
    T: AsRef<[u8]>,
    I: IntoIterator<Item: AsRef<[u8]>>,
{
    let s = s.as_ref();
    candidates
        .into_iter()
        .any(|candidate| s.eq_ignore_ascii_case(candidate.as_ref()))
}

/// Returns `true` if `s` starts with `sub`, using ASCII case insensitive comparison.
///
/// If `sub` is empty, this returns `true`.
pub fn starts_with_ignore_ascii_case<T1, T2>(s: T1, sub: T2) -> bool
where
    T1: AsRef<[u8]>,
    T2: AsRef<[u8]>,
{
    let s = s.as_ref();
    let sub = sub.as_ref();

    s.get(..sub.len())
        .is_some_and(|start| start.eq_ignore_ascii_case(sub))
}

/// Returns `true` if `s` starts with any prefix from `sub_iter`,
/// using ASCII case insensitive comparison.
///
/// Iteration order does not matter for the result, only for the amount of work performed.
pub fn any_starts_with_ignore_ascii_case<T, I>(s: T, sub_iter: I) -> bool
where
    T: AsRef<[u8]>,
    I: IntoIterator<Item: AsRef<[u8]>>,
{
    let search_space = s.as_ref();
    sub_iter
        .into_iter()
        .any(|prefix| starts_with_ignore_ascii_case(search_space, prefix))
}
