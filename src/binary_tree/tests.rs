use super::*;
use crate::Side;
use alloc::{sync::Arc, vec::Vec};

/// `1(2(4, _), 3(_, 5))`
fn sample() -> Cursor<u64> {
    let left = Node::new(2, Some(Node::leaf(4)), None);
    let right = Node::new(3, None, Some(Node::leaf(5)));
    Cursor::from_root(Node::new(1, Some(left), Some(right)))
}

#[test]
fn new_is_a_lone_root() {
    let cursor = Cursor::new(1987_u64);
    assert!(cursor.is_root());
    assert!(!cursor.has_left());
    assert!(!cursor.has_right());
    assert_eq!(cursor.get(), 1987);
    assert_eq!(cursor.depth(), 0);
    assert_eq!(cursor.side(), None);
}

#[test]
fn push_left_then_walk() {
    let root = Cursor::new(10);
    let pushed = root.push_left(5);
    assert_eq!(pushed.get(), 5);
    assert!(pushed.has_left());
    assert!(!pushed.has_right());

    let down = pushed.move_left();
    assert_eq!(down.get(), 10);
    assert!(!down.has_left());
    assert!(!down.has_right());
    assert_eq!(down.side(), Some(Side::Left));

    let up = down.move_up();
    assert_eq!(up.get(), 5);
    assert_eq!(up, pushed);
    assert_eq!(up.tree(), pushed.tree());
}

#[test]
fn move_left_records_breadcrumb() {
    let root = sample();
    let left = root.move_left();
    assert_eq!(left.get(), 2);
    assert!(!left.is_root());

    let crumb = left.path().expect("moved down, so there is a breadcrumb");
    assert_eq!(*crumb.parent_value(), 1);
    assert_eq!(crumb.side(), Side::Left);
    assert!(Arc::ptr_eq(
        crumb.sibling().expect("root has a right child"),
        root.focus().right().expect("root has a right child"),
    ));
    assert!(crumb.parent().is_none());
}

#[test]
fn move_right_records_breadcrumb() {
    let root = sample();
    let right = root.move_right();
    assert_eq!(right.get(), 3);

    let crumb = right.path().expect("moved down, so there is a breadcrumb");
    assert_eq!(crumb.side(), Side::Right);
    assert!(Arc::ptr_eq(
        crumb.sibling().expect("root has a left child"),
        root.focus().left().expect("root has a left child"),
    ));
}

#[test]
fn moving_towards_missing_child_stays() {
    let root = sample();
    let left = root.move_left();
    assert!(!left.has_right());
    assert!(left.move_right().ptr_eq(&left));

    let leaf = left.move_left();
    assert!(leaf.move_left().ptr_eq(&leaf));
    assert!(leaf.move_right().ptr_eq(&leaf));
}

#[test]
fn move_up_at_root_stays() {
    let root = sample();
    assert!(root.move_up().ptr_eq(&root));
    assert_eq!(root.move_up(), root);
}

#[test]
fn move_up_reuses_sibling() {
    let root = sample();
    let back = root.move_left().move_up();
    assert!(back.is_root());
    assert_eq!(back, root);
    // The parent is rebuilt, but both children are the original allocations.
    assert!(!Arc::ptr_eq(back.focus(), root.focus()));
    assert!(Arc::ptr_eq(
        back.focus().left().expect("left child survives"),
        root.focus().left().expect("left child exists"),
    ));
    assert!(Arc::ptr_eq(
        back.focus().right().expect("right child survives"),
        root.focus().right().expect("right child exists"),
    ));
}

#[test]
fn deep_round_trip() {
    let root = sample();
    let deep = root.move_right().move_right();
    assert_eq!(deep.get(), 5);
    assert_eq!(deep.depth(), 2);
    assert_eq!(deep.move_up().move_up(), root);
    assert_eq!(deep.to_root(), root);
    assert_eq!(deep.tree(), Arc::clone(root.focus()));
}

#[test]
fn ancestors_go_towards_root() {
    let deep = sample().move_left().move_left();
    let ancestors: Vec<_> = deep.ancestors().collect();
    assert_eq!(ancestors, [(Side::Left, &2), (Side::Left, &1)]);
    assert_eq!(sample().ancestors().count(), 0);
}

#[test]
fn set_keeps_children_and_path() {
    let right = sample().move_right();
    let edited = right.set(33);
    assert_eq!(edited.get(), 33);
    assert_eq!(edited.has_left(), right.has_left());
    assert_eq!(edited.has_right(), right.has_right());
    assert!(Arc::ptr_eq(
        edited.path().expect("not at root"),
        right.path().expect("not at root"),
    ));
    assert!(Arc::ptr_eq(
        edited.focus().right().expect("child kept"),
        right.focus().right().expect("child exists"),
    ));
    assert_eq!(edited.move_right().move_up().get(), 33);
    assert_eq!(right.get(), 3);
}

#[test]
fn edit_propagates_to_root_only_through_new_cursor() {
    let root = sample();
    let edited_root = root.move_left().move_left().set(40).to_root();
    assert_eq!(edited_root.move_left().move_left().get(), 40);
    assert_eq!(root.move_left().move_left().get(), 4);
    // Untouched right half is shared.
    assert!(Arc::ptr_eq(
        edited_root.focus().right().expect("right child exists"),
        root.focus().right().expect("right child exists"),
    ));
}

#[test]
fn push_left_structure() {
    let cursor = sample().move_left().set(7).move_up();
    // cursor is `1(7(4, _), 3(_, 5))`
    let pushed = cursor.push_left(100);
    assert_eq!(pushed.get(), 100);
    assert!(pushed.is_root());
    assert!(Arc::ptr_eq(
        pushed.focus().right().expect("old right subtree promoted"),
        cursor.focus().right().expect("right child exists"),
    ));
    assert_eq!(pushed.move_right().get(), 3);

    let demoted = pushed.move_left();
    assert_eq!(demoted.get(), 1);
    assert!(!demoted.has_right());
    assert_eq!(demoted.move_left().get(), 7);
    assert!(Arc::ptr_eq(
        demoted.focus().left().expect("old left subtree kept"),
        cursor.focus().left().expect("left child exists"),
    ));
}

#[test]
fn push_right_structure() {
    let cursor = sample();
    let pushed = cursor.push_right(100);
    assert_eq!(pushed.get(), 100);
    assert!(Arc::ptr_eq(
        pushed.focus().left().expect("old left subtree promoted"),
        cursor.focus().left().expect("left child exists"),
    ));

    let demoted = pushed.move_right();
    assert_eq!(demoted.get(), 1);
    assert!(!demoted.has_left());
    assert!(Arc::ptr_eq(
        demoted.focus().right().expect("old right subtree kept"),
        cursor.focus().right().expect("right child exists"),
    ));
}

#[test]
fn push_on_leaf_keeps_path() {
    let leaf = sample().move_right().move_right();
    let pushed = leaf.push_right(6);
    assert_eq!(pushed.depth(), 2);
    assert!(Arc::ptr_eq(
        pushed.path().expect("not at root"),
        leaf.path().expect("not at root"),
    ));
    assert!(!pushed.has_left());
    assert_eq!(pushed.move_right().get(), 5);
    assert!(pushed.move_right().focus().is_leaf());
    assert_eq!(pushed.tree().size(), 6);
}

#[test]
fn prune_left_keeps_right_child_in_place() {
    let root = sample();
    let pruned = root.prune_left();
    assert_eq!(pruned.get(), 3);
    assert!(pruned.is_root());
    assert!(Arc::ptr_eq(
        pruned.focus(),
        root.focus().right().expect("right child exists"),
    ));
    assert_ne!(root.move_right().is_root(), pruned.is_root());
}

#[test]
fn prune_right_keeps_left_child_in_place() {
    let right = sample().move_right();
    // No left child to keep.
    assert!(right.prune_right().ptr_eq(&right));

    let left = sample().move_left();
    let pruned = left.prune_right();
    assert_eq!(pruned.get(), 4);
    assert_eq!(pruned.depth(), 1);
    assert_eq!(pruned.side(), Some(Side::Left));
    assert_eq!(pruned.move_up().focus().size(), 4);
}

#[test]
fn prune_without_kept_child_is_noop() {
    let leaf = Cursor::new('x');
    assert!(leaf.prune_left().ptr_eq(&leaf));
    assert!(leaf.prune_right().ptr_eq(&leaf));
}

#[test]
fn side_parameterized_forms_match() {
    let root = sample();
    assert_eq!(root.move_to(Side::Left), root.move_left());
    assert_eq!(root.move_to(Side::Right), root.move_right());
    assert_eq!(root.has_child(Side::Left), root.has_left());
    assert_eq!(root.focus().child(Side::Right).map(|n| *n.value()), Some(3));
}

#[test]
fn node_children_and_size() {
    let root = sample();
    let values: Vec<u64> = root.focus().children().iter().map(|n| *n.value()).collect();
    assert_eq!(values, [2, 3]);
    assert_eq!(root.move_left().focus().children().len(), 1);
    assert!(Node::leaf(0).children().is_empty());
    assert_eq!(root.focus().size(), 5);
}

#[test]
fn equality_is_by_value() {
    let a = sample().move_left();
    let b = sample().move_left();
    assert!(!a.ptr_eq(&b));
    assert_eq!(a, b);
    assert_ne!(a, a.set(20));
    assert_ne!(a, sample().move_right());
}

#[test]
fn cursors_are_send_and_sync() {
    fn is_send_sync<T: Send + Sync>() {}
    is_send_sync::<Cursor<u64>>();
    is_send_sync::<Arc<Node<u64>>>();
    is_send_sync::<Arc<Breadcrumb<u64>>>();
}

#[cfg(feature = "std")]
#[test]
fn shared_tree_read_from_threads() {
    let root = sample().move_right().set(9).to_root();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cursor = root.clone();
            std::thread::spawn(move || cursor.move_right().get())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("reader thread panicked"), 9);
    }
}

#[test]
fn debug_output_names_fields() {
    let text = alloc::format!("{:?}", sample().move_left());
    assert!(text.starts_with("Cursor"));
    assert!(text.contains("focus"));
    assert!(text.contains("Breadcrumb"));
    assert_eq!(alloc::format!("{:?}", sample().move_left().ancestors()), "[(Left, 1)]");
}

#[test]
fn deep_trees_compare_and_drop() {
    const DEPTH: u64 = 200_000;
    // A left spine `DEPTH - 1(DEPTH - 2(... 0(DEPTH, _) ...), _)`.
    let spine = || (0..DEPTH).fold(Cursor::new(DEPTH), |cursor, value| cursor.push_left(value));
    let a = spine();
    let b = spine();
    assert!(!a.ptr_eq(&b));
    assert_eq!(a, b);
    assert_eq!(a.focus().size(), DEPTH as usize + 1);

    let bottom = (0..DEPTH).fold(a.clone(), |cursor, _| cursor.move_left());
    assert_eq!(bottom.get(), DEPTH);
    assert_eq!(bottom.depth(), DEPTH as usize);
    let other_bottom = (0..DEPTH).fold(b.clone(), |cursor, _| cursor.move_left());
    assert_eq!(bottom, other_bottom);

    let edited = bottom.set(0).to_root();
    assert_ne!(edited, a);
    assert_eq!(a.focus().size(), edited.focus().size());

    drop(bottom);
    drop(other_bottom);
    drop(edited);
    // `a` and `b` share nothing, so each one gets dismantled in full.
    drop(a);
    drop(b);
}
