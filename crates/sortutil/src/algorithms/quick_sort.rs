use std::cmp::Ordering;

/// In-place quicksort over the whole slice.
///
/// Same comparator convention as merge sort: `Ordering::Greater` puts the
/// first argument first. The relative order of elements that compare equal
/// is unspecified. Middle-index pivot selection; worst case O(n^2) on
/// adversarial inputs, with recursion depth linear in the slice length.
pub fn quick_sort<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if data.len() < 2 {
        return;
    }
    quick_sort_range(data, &mut compare, 0, data.len() - 1);
}

fn quick_sort_range<T, F>(data: &mut [T], compare: &mut F, i: usize, j: usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if i >= j {
        return;
    }

    let pivot = partition(data, compare, i, j);
    if pivot > i {
        quick_sort_range(data, compare, i, pivot - 1);
    }
    if pivot < j {
        quick_sort_range(data, compare, pivot + 1, j);
    }
}

/// Partitions the inclusive range `[i, j]` and returns the pivot's final
/// index. The middle element is the pivot; it is parked at `j` for the
/// duration of the cursor loop, so every comparison below reads it from
/// `data[j]`.
fn partition<T, F>(data: &mut [T], compare: &mut F, i: usize, j: usize) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let pivot_index = (i + j) / 2;
    data.swap(pivot_index, j);

    let mut l = i;
    let mut r = j - 1;

    // Two-element range: the cursors start on the same slot and the loop
    // below cannot make progress, so resolve it with one comparison.
    if l == r {
        if compare(&data[l], &data[j]) == Ordering::Less {
            data.swap(l, j);
            return l;
        }
        return j;
    }

    loop {
        // Elements that sort before the pivot belong on the left as-is.
        while l < j && compare(&data[l], &data[j]) == Ordering::Greater {
            l += 1;
        }

        // Elements that sort after the pivot belong on the right as-is.
        while r > i && compare(&data[r], &data[j]) == Ordering::Less {
            r -= 1;
        }

        if l >= r {
            break;
        }

        data.swap(l, r);
        l += 1;
        r -= 1;
    }

    // `l` is the first slot from the left that must not stay there; the
    // pivot takes it.
    data.swap(l, j);
    l
}
