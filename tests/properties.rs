//! Model-based checks of both orientations against the standard collections.

#![cfg(feature = "auto")]

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use anchor_vec::{
    uninit_boxed, Anchored, BackBuf, BackVec, Doubling, FrontBuf, FrontVec, Growth, Linear,
    ThreeHalves,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Cut(usize),
    Extend(Vec<i32>),
    Reserve(usize),
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        1 => (0usize..4).prop_map(Op::Cut),
        1 => prop::collection::vec(any::<i32>(), 0..6).prop_map(Op::Extend),
        1 => (0usize..8).prop_map(Op::Reserve),
        1 => Just(Op::Clear),
    ]
}

struct Counted(Rc<Cell<usize>>);

impl Drop for Counted {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

proptest! {
    #[test]
    fn back_vec_matches_vec(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut model: Vec<i32> = Vec::new();
        let mut v: BackVec<i32> = BackVec::new();
        for op in ops {
            match op {
                Op::Push(x) => {
                    model.push(x);
                    v.push_back(x);
                }
                Op::Pop => prop_assert_eq!(v.pop_back(), model.pop()),
                Op::Cut(n) => {
                    let n = n.min(model.len());
                    model.truncate(model.len() - n);
                    v.cut_back(n);
                }
                Op::Extend(items) => {
                    model.extend_from_slice(&items);
                    v.extend_back_from_slice(&items);
                }
                Op::Reserve(extra) => {
                    v.reserve_back(model.len() + extra);
                    prop_assert_eq!(v.capacity(), model.len() + extra);
                }
                Op::Clear => {
                    model.clear();
                    v.clear();
                }
            }
            prop_assert!(v.len() <= v.capacity());
            prop_assert_eq!(v.as_slice(), model.as_slice());
            prop_assert_eq!(v.back(), model.last());
        }
    }

    #[test]
    fn front_vec_matches_vec_deque(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut model: VecDeque<i32> = VecDeque::new();
        let mut v: FrontVec<i32> = FrontVec::new();
        for op in ops {
            match op {
                Op::Push(x) => {
                    model.push_front(x);
                    v.push_front(x);
                }
                Op::Pop => prop_assert_eq!(v.pop_front(), model.pop_front()),
                Op::Cut(n) => {
                    let n = n.min(model.len());
                    model.drain(..n).for_each(drop);
                    v.cut_front(n);
                }
                Op::Extend(items) => {
                    for &x in items.iter().rev() {
                        model.push_front(x);
                    }
                    v.extend_front_from_slice(&items);
                }
                Op::Reserve(extra) => {
                    v.reserve_front(model.len() + extra);
                    prop_assert_eq!(v.spare_len(), extra);
                }
                Op::Clear => {
                    model.clear();
                    v.clear_and_release();
                }
            }
            prop_assert!(v.len() <= v.capacity());
            prop_assert!(v.iter().eq(model.iter()));
            prop_assert_eq!(v.front(), model.front());
        }
    }

    #[test]
    fn manual_back_push_pop_matches_vec(
        capacity in 0usize..16,
        ops in prop::collection::vec(prop::option::of(any::<u16>()), 0..48),
    ) {
        let mut model: Vec<u16> = Vec::new();
        let mut v: BackBuf<u16, _> = Anchored::new(uninit_boxed::<u16>(capacity));
        for op in ops {
            match op {
                Some(x) if !v.is_full() => {
                    model.push(x);
                    v.push_back(x);
                }
                Some(_) => prop_assert_eq!(model.len(), capacity),
                None => prop_assert_eq!(v.pop_back(), model.pop()),
            }
            prop_assert_eq!(v.spare_len(), capacity - model.len());
            prop_assert_eq!(v.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn manual_front_reserve_preserves_order(
        items in prop::collection::vec(any::<i64>(), 0..16),
        extra in 0usize..16,
    ) {
        let mut v: FrontBuf<i64, _> = Anchored::new(uninit_boxed::<i64>(items.len()));
        v.extend_front_from_slice(&items);
        prop_assert!(v.is_full());
        let _old = v.reserve_front(uninit_boxed::<i64>(items.len() + extra));
        prop_assert_eq!(v.as_slice(), items.as_slice());
        prop_assert_eq!(v.spare_len(), extra);

        let (buf, len) = v.into_raw_parts();
        prop_assert_eq!(len, items.len());
        let mut restored: FrontBuf<i64, _> = unsafe { Anchored::from_raw_parts(buf, len) };
        prop_assert_eq!(restored.pop_front(), items.first().copied());
    }

    #[test]
    fn growth_policies_strictly_increase(cap in 0usize..(usize::MAX / 2), step in 1usize..1024) {
        let linear = Linear::new(std::num::NonZeroUsize::new(step).unwrap());
        for next in [
            ThreeHalves.next_capacity(cap),
            Doubling.next_capacity(cap),
            linear.next_capacity(cap),
        ] {
            let next = next.unwrap();
            prop_assert!(next > cap);
        }
    }

    #[test]
    fn every_element_is_dropped_once(
        pushes in 0usize..64,
        pops in 0usize..64,
        front in any::<bool>(),
    ) {
        let drops = Rc::new(Cell::new(0));
        let popped = if front {
            let mut v: FrontVec<Counted> = FrontVec::new();
            for _ in 0..pushes {
                v.push_front(Counted(drops.clone()));
            }
            (0..pops).filter_map(|_| v.pop_front()).count()
        } else {
            let mut v: BackVec<Counted> = BackVec::with_capacity(3);
            for _ in 0..pushes {
                v.push_back(Counted(drops.clone()));
            }
            (0..pops).filter_map(|_| v.pop_back()).count()
        };
        prop_assert_eq!(popped, pushes.min(pops));
        prop_assert_eq!(drops.get(), pushes);
    }
}
