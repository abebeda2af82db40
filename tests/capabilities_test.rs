use std::cell::Cell;

use itertools::assert_equal;
use sequence_adaptive::markers::{Infinite, KnownSize, Multipass, UnknownSize};
use sequence_adaptive::prelude::*;
use sequence_adaptive::{from_iter, take, Distance};

/// Multipass sequence over a slice counting how often it is used.
struct Watched<'a> {
    slice: &'a [i32],
    steps: usize,
    bulk_traversals: usize,
    reads: Cell<usize>,
}

impl<'a> Watched<'a> {
    fn new(slice: &'a [i32]) -> Self {
        Watched {
            slice,
            steps: 0,
            bulk_traversals: 0,
            reads: Cell::new(0),
        }
    }
}

impl<'a> Sequence for Watched<'a> {
    type Cursor = usize;
    type Element = i32;
    type Pass = Multipass;
    type Extent = UnknownSize;
    fn first(&mut self) -> usize {
        0
    }
    fn is_last(&self, cursor: &usize) -> bool {
        *cursor >= self.slice.len()
    }
    fn inc(&mut self, cursor: &mut usize) {
        self.steps += 1;
        *cursor += 1
    }
    fn read_at(&self, cursor: &usize) -> i32 {
        self.reads.set(self.reads.get() + 1);
        self.slice[*cursor]
    }
    fn for_each_while<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(Self::Element) -> bool,
    {
        self.bulk_traversals += 1;
        let mut cursor = self.first();
        while !self.is_last(&cursor) && predicate(self.read_at(&cursor)) {
            self.inc(&mut cursor);
        }
        cursor
    }
}

impl<'a> MultipassSequence for Watched<'a> {}

/// Sized but only forward: `n, n-1, ..., 1`.
struct Countdown(Distance);

impl Sequence for Countdown {
    type Cursor = Distance;
    type Element = Distance;
    type Pass = Multipass;
    type Extent = KnownSize;
    fn first(&mut self) -> Distance {
        self.0
    }
    fn is_last(&self, cursor: &Distance) -> bool {
        *cursor == 0
    }
    fn inc(&mut self, cursor: &mut Distance) {
        *cursor -= 1
    }
    fn read_at(&self, cursor: &Distance) -> Distance {
        *cursor
    }
}

impl MultipassSequence for Countdown {}

impl SizedSequence for Countdown {
    fn size(&self) -> Distance {
        self.0
    }
}

/// Infinite and only forward: powers of two.
struct Powers;

impl Sequence for Powers {
    type Cursor = u32;
    type Element = u64;
    type Pass = Multipass;
    type Extent = Infinite;
    fn first(&mut self) -> u32 {
        0
    }
    fn is_last(&self, _cursor: &u32) -> bool {
        false
    }
    fn inc(&mut self, cursor: &mut u32) {
        *cursor += 1
    }
    fn read_at(&self, cursor: &u32) -> u64 {
        1 << *cursor
    }
}

impl MultipassSequence for Powers {}

impl InfiniteSequence for Powers {}

#[test]
fn test_single_pass_base_is_not_overstepped() {
    let pulled = Cell::new(0);
    let mut t = take(from_iter((0..10).inspect(|_| pulled.set(pulled.get() + 1))), 3);
    let mut cursor = t.first();
    let mut seen = Vec::new();
    while !t.is_last(&cursor) {
        seen.push(t.read_at(&cursor));
        t.inc(&mut cursor);
    }
    assert_eq!(seen, vec![0, 1, 2]);
    assert_eq!(pulled.get(), 3);
    assert_eq!(cursor.length(), 0);
    assert_eq!(cursor.base().position(), 2);
}

#[test]
fn test_single_pass_bulk_traversal_is_not_overstepped() {
    let pulled = Cell::new(0);
    let mut t = take(from_iter((0..10).inspect(|_| pulled.set(pulled.get() + 1))), 4);
    let mut seen = Vec::new();
    let stop = t.for_each_while(|e| {
        seen.push(e);
        true
    });
    assert_eq!(seen, vec![0, 1, 2, 3]);
    assert_eq!(pulled.get(), 4);
    assert!(t.is_last(&stop));
    assert_eq!(stop.base().position(), 3);
}

#[test]
fn test_single_pass_in_for_loops() {
    let words = "one two three four".split(' ');
    let mut collected = Vec::new();
    for word in take(from_iter(words), 2) {
        collected.push(word);
    }
    assert_eq!(collected, vec!["one", "two"]);
    assert_equal(from_iter(0..4), 0..4);
}

#[test]
fn test_single_pass_resumes_after_predicate() {
    let mut t = from_iter(1..8).take(5);
    let mut cursor = t.for_each_while(|e| e != 3);
    assert_eq!(cursor.length(), 3);
    let mut rest = Vec::new();
    while !t.is_last(&cursor) {
        rest.push(t.read_at(&cursor));
        t.inc(&mut cursor);
    }
    assert_eq!(rest, vec![3, 4, 5]);
}

#[test]
fn test_multipass_base_steps_once_more() {
    let v = [1, 2, 3, 4, 5];
    let mut t = take(Watched::new(&v), 3);
    let mut cursor = t.first();
    while !t.is_last(&cursor) {
        t.inc(&mut cursor);
    }
    assert_eq!(t.base().steps, 3);
    assert_eq!(*cursor.base(), 3);

    let mut t = take(Watched::new(&v), 3);
    let stop = t.for_each_while(|_| true);
    assert_eq!(stop, cursor);
    assert_eq!(t.base().steps, 3);
    assert_eq!(t.base().bulk_traversals, 1);
}

#[test]
fn test_zero_count_never_touches_the_base() {
    let v = [1, 2, 3];
    let mut t = take(Watched::new(&v), 0);
    let stop = t.for_each_while(|_| panic!("nothing should be visited"));
    assert!(t.is_last(&stop));
    let base = t.into_base();
    assert_eq!(base.bulk_traversals, 0);
    assert_eq!(base.reads.get(), 0);
    assert_eq!(base.steps, 0);

    let mut t = take(Watched::new(&[]), 0);
    let stop = t.for_each_while(|_| true);
    assert_eq!(*stop.base(), 0);
    assert_eq!(t.base().bulk_traversals, 0);
}

#[test]
fn test_zero_count_pulls_nothing_from_single_pass() {
    let pulled = Cell::new(0);
    let mut t = take(from_iter((0..10).inspect(|_| pulled.set(pulled.get() + 1))), 0);
    let stop = t.for_each_while(|_| true);
    assert!(t.is_last(&stop));
    assert_eq!(pulled.get(), 0);
    assert_equal(t.into_base().into_inner(), 0..10);
}

#[test]
fn test_single_pass_first_pulls_nothing() {
    let mut s = from_iter(0..3);
    let cursor = s.first();
    assert_eq!(cursor.position(), 0);
    assert_equal(s.into_inner(), 0..3);
}

fn elements_from<S: Sequence>(
    sequence: &mut S,
    mut cursor: S::Cursor,
) -> (Vec<S::Element>, S::Cursor) {
    let mut elements = Vec::new();
    while !sequence.is_last(&cursor) {
        elements.push(sequence.read_at(&cursor));
        sequence.inc(&mut cursor);
    }
    (elements, cursor)
}

/// Saves the cursor after `skip` steps and traverses twice from it.
fn traverse_twice<S: MultipassSequence>(
    sequence: &mut S,
    skip: usize,
) -> (Vec<S::Element>, Vec<S::Element>) {
    let mut cursor = sequence.first();
    for _ in 0..skip {
        sequence.inc(&mut cursor);
    }
    let saved = cursor.clone();
    assert!(saved == cursor);
    let (once, end_once) = elements_from(sequence, cursor);
    let (again, end_again) = elements_from(sequence, saved.clone());
    assert!(end_once == end_again);
    assert!(end_once != saved || once.is_empty());
    (once, again)
}

#[test]
fn test_multipass_cursors_can_be_saved() {
    let v = [1, 2, 3, 4, 5];
    let (once, again) = traverse_twice(&mut take(&v[..], 4), 1);
    assert_eq!(once, vec![&2, &3, &4]);
    assert_eq!(once, again);

    let (once, again) = traverse_twice(&mut take(Watched::new(&v), 3), 2);
    assert_eq!(once, vec![3]);
    assert_eq!(once, again);

    let (once, again) = traverse_twice(&mut take(Powers, 3), 0);
    assert_eq!(once, vec![1, 2, 4]);
    assert_eq!(once, again);

    let (once, again) = traverse_twice(&mut take(&v[..], 2), 2);
    assert!(once.is_empty());
    assert!(again.is_empty());
}

#[test]
fn test_sized_forward_base() {
    let mut t = take(Countdown(5), 3);
    assert_eq!(t.size(), 3);
    assert_eq!(t.to_vec(), vec![5, 4, 3]);
    assert_eq!(take(Countdown(2), 3).size(), 2);
    assert_eq!(take(Countdown(2), 3).count(), 2);
}

#[test]
fn test_infinite_forward_base() {
    let mut t = take(Powers, 4);
    assert_eq!(t.size(), 4);
    assert_eq!(t.to_vec(), vec![1, 2, 4, 8]);
    let mut cursor = t.first();
    for _ in 0..4 {
        t.inc(&mut cursor);
    }
    let last = t.last();
    assert_eq!(last, cursor);
    assert_eq!(*last.base(), 4);
}

#[test]
fn test_move_out_of_single_pass() {
    let mut t = take(from_iter(vec![String::from("a"), String::from("b")]), 1);
    let cursor = t.first();
    assert_eq!(t.read_at(&cursor), "a");
    assert_eq!(t.move_at(&cursor), "a");
}

#[test]
#[should_panic(expected = "exhausted")]
fn test_read_after_move_out() {
    let mut t = take(from_iter(vec![String::from("a")]), 1);
    let cursor = t.first();
    t.move_at(&cursor);
    t.read_at(&cursor);
}

#[test]
#[should_panic(expected = "read at position 3")]
fn test_read_past_slice_end() {
    let v = [1, 2, 3];
    let mut t = take(&v[..], 10);
    let mut cursor = t.first();
    t.inc_by(&mut cursor, 3);
    t.read_at(&cursor);
}

#[test]
fn test_take_keeps_multipass() {
    fn multipass<S: MultipassSequence>(_: &S) -> bool {
        true
    }
    let v = [1];
    assert!(multipass(&take(&v[..], 1)));
    assert!(multipass(&take(Countdown(3), 1)));
}
