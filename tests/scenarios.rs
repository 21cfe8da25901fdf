use threaded_bst::{Error, Tree};

#[test]
fn single_value() {
    let tree = Tree::new(1).unwrap();

    assert_eq!(tree.to_string(), "1 ");
}

#[test]
fn remove_evens_from_five() {
    let mut tree = Tree::new(5).unwrap();
    assert_eq!(tree.to_string(), "1 2 3 4 5 ");

    assert!(tree.remove_even());
    assert_eq!(tree.to_string(), "1 3 5 ");
}

#[test]
fn remove_the_root() {
    let mut tree = Tree::new(7).unwrap();

    assert!(tree.remove(4));
    assert_eq!(tree.to_string(), "1 2 3 5 6 7 ");
}

#[test]
fn remove_down_to_nothing() {
    let mut tree = Tree::new(2).unwrap();
    assert_eq!(tree.to_string(), "1 2 ");

    assert!(tree.remove(1));
    assert_eq!(tree.to_string(), "2 ");

    assert!(tree.remove(2));
    assert_eq!(tree.to_string(), "");
    assert!(tree.is_empty());
}

#[test]
fn remove_missing() {
    let mut tree = Tree::new(3).unwrap();

    assert!(!tree.remove(5));
    assert_eq!(tree.to_string(), "1 2 3 ");
}

#[test]
fn remove_from_empty() {
    let mut tree = Tree::new(3).unwrap();
    tree.clear();

    assert!(!tree.remove(1));
    assert!(!tree.remove_even());
}

#[test]
fn invalid_sizes() {
    assert_eq!(Tree::new(0).unwrap_err(), Error::NonPositiveSize(0));
    assert_eq!(
        Tree::new(i32::MIN).unwrap_err(),
        Error::NonPositiveSize(i32::MIN)
    );
}

#[test]
fn copy_then_remove_evens() {
    let tree = Tree::new(10).unwrap();
    let mut copy = tree.clone();
    assert_eq!(copy.to_string(), tree.to_string());

    assert!(copy.remove_even());
    assert_eq!(copy.to_string(), "1 3 5 7 9 ");
    assert_eq!(tree.to_string(), "1 2 3 4 5 6 7 8 9 10 ");

    drop(tree);
    assert_eq!(copy.iter().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
}

#[test]
fn large_tree() {
    let n = 1 << 16;
    let mut tree = Tree::new(n).unwrap();

    assert!(tree.iter().eq(1..=n));
    assert!(tree.remove_even());
    assert_eq!(tree.len(), (n / 2) as usize);
    assert!(tree.iter().eq((1..=n).step_by(2)));
}
