// src/collections.rs

//! Pure, single-pass collection transforms.
//!
//! Sequences are slices and key-value mappings are [`HashMap`]s. Every
//! function leaves its input untouched and preserves element order
//! unless it says otherwise.

// dependencies
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::hash::Hash;

/// Returns its argument unchanged.
pub fn identity<T>(value: T) -> T {
    value
}

/// First element of a slice, if any.
pub fn first<T>(slice: &[T]) -> Option<&T> {
    slice.first()
}

/// At most the first `n` elements of a slice.
pub fn first_n<T>(slice: &[T], n: usize) -> &[T] {
    &slice[..n.min(slice.len())]
}

/// Last element of a slice, if any.
pub fn last<T>(slice: &[T]) -> Option<&T> {
    slice.last()
}

/// At most the last `n` elements of a slice.
pub fn last_n<T>(slice: &[T], n: usize) -> &[T] {
    &slice[slice.len() - n.min(slice.len())..]
}

/// Calls `action(index, value)` for each element in order.
pub fn each<T, F>(slice: &[T], mut action: F)
where
    F: FnMut(usize, &T),
{
    for (index, value) in slice.iter().enumerate() {
        action(index, value);
    }
}

/// Index of the first element equal to `target`.
pub fn index_of<T: PartialEq>(slice: &[T], target: &T) -> Option<usize> {
    slice.iter().position(|value| value == target)
}

/// Whether any element equals `target`.
pub fn contains<T: PartialEq>(slice: &[T], target: &T) -> bool {
    index_of(slice, target).is_some()
}

/// Elements that pass the test, in order.
pub fn filter<T, F>(slice: &[T], mut test: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut passed = Vec::new();
    for value in slice {
        if test(value) {
            passed.push(value.clone());
        }
    }
    passed
}

/// Elements that fail the test, in order.
pub fn reject<T, F>(slice: &[T], mut test: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    filter(slice, |value| !test(value))
}

/// Distinct elements, keeping the first occurrence of each.
pub fn uniq<T: PartialEq + Clone>(slice: &[T]) -> Vec<T> {
    let mut seen: Vec<T> = Vec::new();
    for value in slice {
        if !contains(&seen, value) {
            seen.push(value.clone());
        }
    }
    seen
}

/// Applies `transform` to each element and collects the results.
pub fn map<T, U, F>(slice: &[T], transform: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    slice.iter().map(transform).collect()
}

/// Looks up `key` in each mapping; `None` where the key is absent.
pub fn pluck<K, V>(collection: &[HashMap<K, V>], key: &K) -> Vec<Option<V>>
where
    K: Hash + Eq,
    V: Clone,
{
    collection
        .iter()
        .map(|entry| entry.get(key).cloned())
        .collect()
}

/// Applies `operation` to each element in place and collects the returns.
pub fn invoke<T, R, F>(collection: &mut [T], mut operation: F) -> Vec<R>
where
    F: FnMut(&mut T) -> R,
{
    collection.iter_mut().map(|value| operation(value)).collect()
}

/// Folds the slice into an accumulator, starting from `initial`.
pub fn fold<T, Acc, F>(slice: &[T], initial: Acc, mut step: F) -> Acc
where
    F: FnMut(Acc, &T) -> Acc,
{
    let mut accumulator = initial;
    for value in slice {
        accumulator = step(accumulator, value);
    }
    accumulator
}

/// Like [`fold`], but seeds the accumulator with the first element.
/// Returns `None` on an empty slice.
pub fn reduce<T, F>(slice: &[T], step: F) -> Option<T>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    let (seed, rest) = slice.split_first()?;
    Some(fold(rest, seed.clone(), step))
}

/// Whether every element passes the test. True on an empty slice.
pub fn every<T, F>(slice: &[T], mut test: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    for value in slice {
        if !test(value) {
            return false;
        }
    }
    true
}

/// Whether at least one element passes the test. False on an empty slice.
pub fn some<T, F>(slice: &[T], mut test: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    !every(slice, |value| !test(value))
}

/// Copies every entry of every source into `destination`.
/// Later sources win on key collisions.
pub fn extend<K, V>(destination: &mut HashMap<K, V>, sources: &[HashMap<K, V>])
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    for source in sources {
        for (key, value) in source {
            destination.insert(key.clone(), value.clone());
        }
    }
}

/// Like [`extend`], but never overwrites a key already present.
pub fn defaults<K, V>(destination: &mut HashMap<K, V>, sources: &[HashMap<K, V>])
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    for source in sources {
        for (key, value) in source {
            destination
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }
}

/// Copy of the slice in random order; the input is left as-is.
pub fn shuffle<T: Clone>(slice: &[T]) -> Vec<T> {
    let mut shuffled = slice.to_vec();
    shuffled.shuffle(&mut rand::thread_rng());
    shuffled
}

/// Copy of the slice sorted by a computed key. The sort is stable, so
/// equal keys keep their relative order.
pub fn sort_by<T, K, F>(slice: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut sorted = slice.to_vec();
    sorted.sort_by_key(|value| key(value));
    sorted
}

/// Zips any number of sequences together positionally.
/// Shorter inputs are padded with `None` up to the longest one.
pub fn zip<T: Clone>(sequences: &[Vec<T>]) -> Vec<Vec<Option<T>>> {
    let longest = sequences.iter().map(Vec::len).max().unwrap_or(0);
    let mut zipped = Vec::with_capacity(longest);
    for position in 0..longest {
        zipped.push(
            sequences
                .iter()
                .map(|sequence| sequence.get(position).cloned())
                .collect(),
        );
    }
    zipped
}

/// An arbitrarily nested sequence of values.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Value(T),
    List(Vec<Nested<T>>),
}

/// Flattens arbitrary nesting into a single-level vector, in order.
pub fn flatten<T>(nested: Nested<T>) -> Vec<T> {
    let mut flat = Vec::new();
    flatten_into(nested, &mut flat);
    flat
}

fn flatten_into<T>(nested: Nested<T>, flat: &mut Vec<T>) {
    match nested {
        Nested::Value(value) => flat.push(value),
        Nested::List(children) => {
            for child in children {
                flatten_into(child, flat);
            }
        }
    }
}

/// Distinct elements of the first sequence that appear in all others.
pub fn intersection<T: PartialEq + Clone>(sequences: &[Vec<T>]) -> Vec<T> {
    let Some((head, rest)) = sequences.split_first() else {
        return Vec::new();
    };
    filter(&uniq(head), |value| {
        every(rest, |other| contains(other, value))
    })
}

/// Elements of `slice` that appear in none of the other sequences.
pub fn difference<T: PartialEq + Clone>(slice: &[T], others: &[Vec<T>]) -> Vec<T> {
    reject(slice, |value| {
        some(others, |other| contains(other, value))
    })
}
