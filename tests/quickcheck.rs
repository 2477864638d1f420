use quickcheck::{Arbitrary, Gen};

/// An operation on a set of small integers.
///
/// The key space is deliberately small so that random sequences hit
/// duplicates and removals of present items often.
#[derive(Clone, Debug)]
pub enum Op {
    Insert(u8),
    Remove(u8),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(u8::arbitrary(g))
        } else {
            Op::Remove(u8::arbitrary(g))
        }
    }
}

pub fn exec(ops: Vec<Op>) -> avl::Set<u8> {
    let mut set = avl::Set::new();

    for op in ops {
        match op {
            Op::Insert(item) => { set.insert(item); }
            Op::Remove(item) => { set.remove(&item); }
        }
    }

    set
}

mod insert {
    use avl::{Map, Set};
    use quickcheck::quickcheck;

    #[test]
    fn returns_old_value() {
        fn test(mut map: Map<u32, u16>, key: u32, value: u16) -> bool {
            map.get(&key).cloned() == map.insert(key, value)
        }

        quickcheck(test as fn(_, _, _) -> _);
    }

    #[test]
    fn inserts_key() {
        fn test(mut map: Map<u32, u16>, key: u32, mut value: u16) -> bool {
            map.insert(key, value);

            map.contains_key(&key) &&
            map.get(&key) == Some(&value) &&
            map.get_mut(&key) == Some(&mut value) &&
            map.iter().filter(|e| *e.0 == key).collect::<Vec<_>>() == [(&key, &value)]
        }

        quickcheck(test as fn(_, _, _) -> _);
    }

    #[test]
    fn sets_len() {
        fn test(mut map: Map<u32, u16>, key: u32, value: u16) -> bool {
            let old_len = map.len();

            if map.insert(key, value).is_some() {
                map.len() == old_len
            } else {
                map.len() == old_len + 1
            }
        }

        quickcheck(test as fn(_, _, _) -> _);
    }

    #[test]
    fn affects_no_others() {
        fn test(mut map: Map<u32, u16>, key: u32, value: u16) -> bool {
            let old_map = map.clone();
            map.insert(key, value);

            map.iter().filter(|e| *e.0 != key).collect::<Vec<_>>() ==
                old_map.iter().filter(|e| *e.0 != key).collect::<Vec<_>>()
        }

        quickcheck(test as fn(_, _, _) -> _);
    }

    #[test]
    fn is_idempotent() {
        fn test(mut set: Set<u8>, item: u8) -> bool {
            set.insert(item);
            let len = set.len();

            !set.insert(item) && set.len() == len && set.contains(&item)
        }

        quickcheck(test as fn(_, _) -> _);
    }
}

mod remove {
    use avl::{Map, Set};
    use quickcheck::{quickcheck, TestResult};

    #[test]
    fn removes_key() {
        fn test(mut map: Map<u32, u16>, key: u32) -> TestResult {
            match map.remove(&key) {
                None => TestResult::discard(),
                Some((removed, _)) => TestResult::from_bool(
                    removed == key &&
                    !map.contains_key(&key) &&
                    map.get(&key).is_none() &&
                    map.iter().find(|e| *e.0 == key).is_none()
                ),
            }
        }

        quickcheck(test as fn(_, _) -> _);
    }

    #[test]
    fn sets_len() {
        fn test(mut map: Map<u32, u16>, key: u32) -> bool {
            let old_len = map.len();

            match map.remove(&key) {
                None => map.len() == old_len,
                Some(_) => map.len() == old_len - 1,
            }
        }

        quickcheck(test as fn(_, _) -> _);
    }

    #[test]
    fn affects_no_others() {
        fn test(mut map: Map<u32, u16>, key: u32) -> bool {
            let old_map = map.clone();

            match map.remove(&key) {
                None => map == old_map,
                Some(_) => map.iter().collect::<Vec<_>>() ==
                    old_map.iter().filter(|e| *e.0 != key).collect::<Vec<_>>(),
            }
        }

        quickcheck(test as fn(_, _) -> _);
    }

    #[test]
    fn then_contains_is_false() {
        fn test(mut set: Set<u8>, item: u8) -> bool {
            let old_len = set.len();

            if set.remove(&item) {
                !set.contains(&item) && set.len() == old_len - 1
            } else {
                set.len() == old_len
            }
        }

        quickcheck(test as fn(_, _) -> _);
    }
}

mod iter {
    use avl::{Map, Set};
    use quickcheck::quickcheck;

    #[test]
    fn ascends() {
        fn test(set: Set<u8>) -> bool {
            set.iter().zip(set.iter().skip(1)).all(|(a, b)| a < b)
        }

        quickcheck(test as fn(_) -> _);
    }

    #[test]
    fn descends_when_reversed() {
        fn test(set: Set<u8>) -> bool {
            set.iter().rev().zip(set.iter().rev().skip(1)).all(|(b, a)| b > a)
        }

        quickcheck(test as fn(_) -> _);
    }

    #[test]
    fn size_hint_is_exact() {
        fn test(map: Map<u32, u16>) -> bool {
            let mut len = map.len();
            let mut it = map.iter();

            loop {
                if it.size_hint() != (len, Some(len)) { return false; }
                if it.next().is_none() { break; }
                len -= 1;
            }

            len == 0 && it.size_hint() == (0, Some(0))
        }

        quickcheck(test as fn(_) -> _);
    }

    #[test]
    fn count_agrees_with_len() {
        fn test(set: Set<u8>) -> bool {
            set.iter().count() == set.len()
        }

        quickcheck(test as fn(_) -> _);
    }
}

mod extrema {
    use avl::{Map, Set};
    use quickcheck::{quickcheck, TestResult};

    #[test]
    fn first_and_last_agree_with_iter() {
        fn test(map: Map<u32, u16>) -> bool {
            map.first() == map.iter().next() && map.last() == map.iter().next_back()
        }

        quickcheck(test as fn(_) -> _);
    }

    #[test]
    fn remove_first_and_last_pop_the_ends() {
        fn test(mut set: Set<u8>) -> TestResult {
            if set.len() < 2 { return TestResult::discard(); }

            let first = set.first().cloned();
            let last = set.last().cloned();
            let old_len = set.len();

            TestResult::from_bool(
                set.remove_first() == first &&
                set.remove_last() == last &&
                set.len() == old_len - 2 &&
                set.is_balanced()
            )
        }

        quickcheck(test as fn(_) -> _);
    }
}

mod balance {
    use quickcheck::quickcheck;
    use super::{exec, Op};

    #[test]
    fn stays_balanced() {
        fn test(ops: Vec<Op>) -> bool {
            let set = exec(ops);
            let bound = (((set.len() + 2) as f64).log2() * 1.44).ceil() as i32;

            set.is_balanced() && set.height() <= bound
        }

        quickcheck(test as fn(_) -> _);
    }
}

mod oracle {
    use quickcheck::quickcheck;
    use std::collections::HashSet;
    use super::Op;

    #[test]
    fn agrees_with_hash_set() {
        fn test(ops: Vec<Op>) -> bool {
            let mut set = avl::Set::new();
            let mut reference = HashSet::new();

            for op in ops {
                let (changed, expected) = match op {
                    Op::Insert(item) => (set.insert(item), reference.insert(item)),
                    Op::Remove(item) => (set.remove(&item), reference.remove(&item)),
                };

                if changed != expected { return false; }
            }

            set.len() == reference.len() &&
                (0..=255u8).all(|item| set.contains(&item) == reference.contains(&item))
        }

        quickcheck(test as fn(_) -> _);
    }
}
