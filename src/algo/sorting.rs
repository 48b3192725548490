//! Sorting trace producers.
//!
//! Each sorter works on a private copy of the input, records every
//! comparison and structural move as it happens, and returns the trace
//! together with the sorted sequence as the final state.

use rand::Rng;

use crate::step::{SortStep, Trace, Value};

/// Bubble sort: one compare per adjacent inspection, a swap whenever the
/// pair is out of order, early exit on an already-sorted pass.
pub fn bubble_sort(array: &[Value]) -> Trace<SortStep> {
    let mut a = array.to_vec();
    let mut steps = Vec::new();
    let n = a.len();

    for i in 0..n {
        let mut already_sorted = true;

        for j in 0..n.saturating_sub(i + 1) {
            steps.push(SortStep::Compare { i: j, j: j + 1 });
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                steps.push(SortStep::Swap { i: j, j: j + 1 });
                already_sorted = false;
            }
        }

        if already_sorted {
            break;
        }
    }

    Trace::new(steps, a)
}

/// Insertion sort: mark the key, compare-and-shift the larger prefix right,
/// then write the key into its slot.
pub fn insertion_sort(array: &[Value]) -> Trace<SortStep> {
    let mut a = array.to_vec();
    let mut steps = Vec::new();
    let n = a.len();

    for i in 1..n {
        let key = a[i].clone();
        steps.push(SortStep::Key {
            i,
            value: key.clone(),
        });

        let mut j = i;
        while j > 0 && a[j - 1] > key {
            steps.push(SortStep::Compare { i: j - 1, j });
            a[j] = a[j - 1].clone();
            steps.push(SortStep::Shift { from: j - 1, to: j });
            j -= 1;
        }

        a[j] = key.clone();
        steps.push(SortStep::Overwrite { index: j, value: key });
    }

    Trace::new(steps, a)
}

/// Merge sort over index ranges of a single working buffer, recording the
/// split before recursing and one overwrite per merged write-back.
pub fn merge_sort(array: &[Value]) -> Trace<SortStep> {
    let mut a = array.to_vec();
    let mut steps = Vec::new();
    let len = a.len();
    merge_rec(&mut a, 0, len, &mut steps);
    Trace::new(steps, a)
}

fn merge_rec(a: &mut [Value], left: usize, right: usize, steps: &mut Vec<SortStep>) {
    if right - left <= 1 {
        return;
    }

    let mid = (left + right) / 2;
    steps.push(SortStep::Split {
        start: left,
        mid,
        end: right,
    });

    merge_rec(a, left, mid, steps);
    merge_rec(a, mid, right, steps);

    let mut merged = Vec::with_capacity(right - left);
    let (mut i, mut j) = (left, mid);

    while i < mid && j < right {
        steps.push(SortStep::Compare { i, j });
        if a[i] <= a[j] {
            merged.push(a[i].clone());
            i += 1;
        } else {
            merged.push(a[j].clone());
            j += 1;
        }
    }
    while i < mid {
        merged.push(a[i].clone());
        i += 1;
    }
    while j < right {
        merged.push(a[j].clone());
        j += 1;
    }

    for (k, value) in merged.into_iter().enumerate() {
        a[left + k] = value.clone();
        steps.push(SortStep::Overwrite {
            index: left + k,
            value,
        });
    }
}

/// Quick sort with a random pivot moved to the end (Lomuto partition).
/// Every partition records pivot selection, the setup swap, one compare per
/// scanned element, the final placement swap, and a done marker.
pub fn quick_sort(array: &[Value]) -> Trace<SortStep> {
    let mut a = array.to_vec();
    let mut steps = Vec::new();
    if !a.is_empty() {
        let right = a.len() - 1;
        let mut rng = rand::rng();
        quick_rec(&mut a, 0, right, &mut rng, &mut steps);
    }
    Trace::new(steps, a)
}

fn quick_rec<R: Rng>(
    a: &mut [Value],
    left: usize,
    right: usize,
    rng: &mut R,
    steps: &mut Vec<SortStep>,
) {
    let pivot_index = rng.random_range(left..=right);
    let pivot_value = a[pivot_index].clone();
    steps.push(SortStep::Pivot { index: pivot_index });

    a.swap(pivot_index, right);
    steps.push(SortStep::Swap {
        i: pivot_index,
        j: right,
    });

    let mut store = left;
    for i in left..right {
        steps.push(SortStep::Compare { i, j: right });
        if a[i] < pivot_value {
            steps.push(SortStep::Swap { i, j: store });
            a.swap(i, store);
            store += 1;
        }
    }

    steps.push(SortStep::Swap { i: store, j: right });
    a.swap(store, right);
    steps.push(SortStep::Done { index: store });

    if store > left {
        quick_rec(a, left, store - 1, rng, steps);
    }
    if store < right {
        quick_rec(a, store + 1, right, rng, steps);
    }
}
