use orx_forward_list::*;
use orx_iterable::{Collection, CollectionMut};
use test_case::test_case;

fn sum<C: Collection<Item = usize>>(col: &C) -> usize {
    col.iter().sum()
}

fn double_all<C: CollectionMut<Item = usize>>(col: &mut C) {
    for x in col.iter_mut() {
        *x *= 2;
    }
}

#[test_case(0)]
#[test_case(1)]
#[test_case(10)]
#[test_case(1000)]
fn list_as_collection(n: usize) {
    let mut list: LinkedList<usize> = (0..n).collect();

    assert_eq!(sum(&list), (0..n).sum());

    double_all(&mut list);
    assert_eq!(sum(&list), 2 * (0..n).sum::<usize>());
    assert_eq!(list.len(), n);
}

#[test]
fn for_loops() {
    let mut list = LinkedList::from([1, 2, 3]);

    let mut collected = vec![];
    for x in &list {
        collected.push(*x);
    }
    assert_eq!(collected, [1, 2, 3]);

    for x in &mut list {
        *x += 1;
    }

    let mut collected = vec![];
    for x in list {
        collected.push(x);
    }
    assert_eq!(collected, [2, 3, 4]);
}
