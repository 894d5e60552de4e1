use contacts::{ContactRecord, ContactTree};

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Contact names are the decimal rendering of small integers so random inputs collide often.
fn name(k: i8) -> String {
    k.to_string()
}

fn contact(k: i8, v: i8) -> ContactRecord {
    ContactRecord::new(&name(k), &v.to_string()).unwrap()
}

/// Applies a set of operations to a tree and a map that keeps the first phone stored for a
/// name. This way we can ensure that after a random smattering of inserts and deletes we have
/// the same contacts in both.
fn do_ops(ops: &[Op<i8, i8>], tree: &mut ContactTree, map: &mut BTreeMap<String, String>) {
    for op in ops {
        match *op {
            Op::Insert(k, v) => {
                let _ = tree.insert(contact(k, v));
                map.entry(name(k)).or_insert_with(|| v.to_string());
            }
            Op::Remove(k) => {
                tree.remove(&name(k));
                map.remove(&name(k));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = ContactTree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map);

    let listed: Vec<_> = tree.iter().map(|c| (c.name(), c.phone())).collect();
    let expected: Vec<_> = map.iter().map(|(n, p)| (n.as_str(), p.as_str())).collect();
    listed == expected && tree.len() == map.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = ContactTree::new();
    for x in &xs {
        let _ = tree.insert(contact(*x, *x));
    }

    xs.iter()
        .all(|x| tree.find(&name(*x)).map(|c| c.phone().to_string()) == Some(x.to_string()))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = ContactTree::new();
    for x in &xs {
        let _ = tree.insert(contact(*x, *x));
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(&name(*x)).is_none())
}

#[quickcheck]
fn first_phone_wins(xs: Vec<(i8, i8)>) -> bool {
    let mut tree = ContactTree::new();
    let mut first = BTreeMap::new();
    for (k, v) in &xs {
        let inserted = tree.insert(contact(*k, *v)).is_ok();
        let fresh = !first.contains_key(k);
        first.entry(*k).or_insert(*v);
        if inserted != fresh {
            return false;
        }
    }

    first
        .iter()
        .all(|(k, v)| tree.find(&name(*k)).map(|c| c.phone().to_string()) == Some(v.to_string()))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = ContactTree::new();
    for x in &xs {
        let _ = tree.insert(contact(*x, *x));
    }
    for delete in &deletes {
        tree.remove(&name(*delete));
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.find(&name(*x)).is_none())
        && still_present.iter().all(|x| tree.find(&name(*x)).is_some())
}

#[quickcheck]
fn clear_empties_any_tree(xs: Vec<i8>) -> bool {
    let mut tree = ContactTree::new();
    for x in &xs {
        let _ = tree.insert(contact(*x, *x));
    }
    tree.clear();

    tree.is_empty()
        && tree.iter().next().is_none()
        && xs.iter().all(|x| tree.find(&name(*x)).is_none())
}
