// Index arithmetic for array-backed d-ary heaps.
//
// Every subtree's root ranks no worse than any other node in the subtree. The
// nodes live in a flat array traversed level by level, so with `A = 4`,
//
// ```text
//                                   0
//          1              2                   3                4
//    5  6  7  8     9 10 11 12         13 14 15 16       17 18 19 20
// ```
//
// The last level will often be incomplete.
//
// Moving around the tree from index `i`,
//   - Up:          `(i-1) / A`
//   - First child: `(A*i) + 1`
//   - Last child:  `A*(i+1)`

/// The parent node
///
/// ```
/// use puzzle_search::heap_primitives::index_parent;
/// assert_eq!(index_parent::<2>(1), 0);
/// assert_eq!(index_parent::<2>(2), 0);
/// assert_eq!(index_parent::<2>(6), 2);
/// assert_eq!(index_parent::<4>(1), 0);
/// assert_eq!(index_parent::<4>(4), 0);
/// assert_eq!(index_parent::<4>(5), 1);
/// assert_eq!(index_parent::<4>(20), 4);
/// ```
#[inline(always)]
#[must_use]
pub fn index_parent<const A: usize>(i: usize) -> usize {
    debug_assert!(i != 0, "The root has no parent");
    (i - 1) / A
}

/// The first (left-most) child
///
/// ```
/// use puzzle_search::heap_primitives::index_first_children;
/// assert_eq!(index_first_children::<2usize>(0), 1);
/// assert_eq!(index_first_children::<2usize>(3), 7);
/// assert_eq!(index_first_children::<4usize>(0), 1);
/// assert_eq!(index_first_children::<4usize>(1), 5);
/// assert_eq!(index_first_children::<4usize>(4), 17);
/// ```
#[inline(always)]
#[must_use]
pub fn index_first_children<const A: usize>(i: usize) -> usize {
    (A * i) + 1
}

/// The last (right-most) child
///
/// ```
/// use puzzle_search::heap_primitives::index_last_children;
/// assert_eq!(index_last_children::<2usize>(0), 2);
/// assert_eq!(index_last_children::<2usize>(6), 14);
/// assert_eq!(index_last_children::<4usize>(0), 4);
/// assert_eq!(index_last_children::<4usize>(1), 8);
/// assert_eq!(index_last_children::<4usize>(4), 20);
/// ```
#[inline(always)]
#[must_use]
pub fn index_last_children<const A: usize>(i: usize) -> usize {
    A * (i + 1)
}
