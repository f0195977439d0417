use custom_lists::{CustomArrayList, CustomLinkedList, CustomList, ListError};

fn filled<L: CustomList<i32> + Default>(values: &[i32]) -> L {
    let mut list = L::default();
    for value in values {
        list.add(*value);
    }
    list
}

fn check_positional_edits<L: CustomList<i32> + Default>() {
    let mut list: L = filled(&[1, 2, 3]);

    list.insert(0, 0).unwrap();
    list.insert(4, 4).unwrap();
    list.insert(2, 99).unwrap();
    assert_eq!(list.to_vec(), vec![0, 1, 99, 2, 3, 4]);

    assert_eq!(list.remove(2).unwrap(), 99);
    assert_eq!(list.remove(4).unwrap(), 4);
    assert_eq!(list.remove(0).unwrap(), 0);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
}

fn check_bounds<L: CustomList<i32> + Default>() {
    let mut list: L = filled(&[5]);

    match list.get(1) {
        Err(ListError::IndexOutOfBounds { index, size }) => {
            assert_eq!(index, 1);
            assert_eq!(size, 1);
        }
        other => panic!("expected IndexOutOfBounds, got {:?}", other),
    }
    assert!(list.insert(2, 0).is_err());
    assert!(list.remove(1).is_err());
    assert_eq!(list.to_vec(), vec![5]);

    list.clear();
    assert!(list.get(0).is_err());
    assert!(list.remove(0).is_err());
    list.insert(0, 8).unwrap();
    assert_eq!(list.to_vec(), vec![8]);
}

fn check_search<L: CustomList<i32> + Default>() {
    let mut list: L = filled(&[4, 7, 4, 9]);

    assert_eq!(list.index_of(&4), Some(0));
    assert!(list.contains(&9));
    assert!(!list.contains(&1));

    assert!(list.remove_item(&4));
    assert_eq!(list.to_vec(), vec![7, 4, 9]);
    assert!(list.remove_item(&4));
    assert!(!list.remove_item(&4));
    assert_eq!(list.len(), 2);
}

fn check_sorting<L: CustomList<i32> + Default>() {
    let mut list: L = filled(&[20, 19, 17, 15, 14, 12, 21, 1, 17, 3, 0]);
    list.sort();
    assert_eq!(list.to_vec(), vec![0, 1, 3, 12, 14, 15, 17, 17, 19, 20, 21]);

    list.sort_by(|a, b| b.cmp(a));
    assert_eq!(list.to_vec(), vec![21, 20, 19, 17, 17, 15, 14, 12, 3, 1, 0]);

    let mut single: L = filled(&[42]);
    single.sort();
    assert_eq!(single.to_vec(), vec![42]);

    let mut empty: L = filled(&[]);
    empty.sort();
    assert!(empty.is_empty());
}

fn check_growth<L: CustomList<i32> + Default>() {
    let mut list = L::default();
    for value in 0..1_000 {
        list.add(value);
    }
    for index in (0..1_000).step_by(97) {
        assert_eq!(*list.get(index).unwrap(), index as i32);
    }
    assert_eq!(list.iter().count(), 1_000);
}

#[test]
fn test_positional_edits() {
    check_positional_edits::<CustomArrayList<i32>>();
    check_positional_edits::<CustomLinkedList<i32>>();
}

#[test]
fn test_bounds() {
    check_bounds::<CustomArrayList<i32>>();
    check_bounds::<CustomLinkedList<i32>>();
}

#[test]
fn test_search_and_remove_by_value() {
    check_search::<CustomArrayList<i32>>();
    check_search::<CustomLinkedList<i32>>();
}

#[test]
fn test_sorting() {
    check_sorting::<CustomArrayList<i32>>();
    check_sorting::<CustomLinkedList<i32>>();
}

#[test]
fn test_growth() {
    check_growth::<CustomArrayList<i32>>();
    check_growth::<CustomLinkedList<i32>>();
}

#[test]
fn test_implementations_agree_after_same_edits() {
    let mut array: CustomArrayList<String> = CustomArrayList::new();
    let mut linked: CustomLinkedList<String> = CustomLinkedList::new();

    for word in ["pear", "fig", "apple", "kiwi", "fig"] {
        array.add(word.to_string());
        linked.add(word.to_string());
    }
    array.remove_item(&"fig".to_string());
    linked.remove_item(&"fig".to_string());
    array.sort();
    linked.sort();

    assert!(array.content_eq(&linked));
    assert_eq!(array.to_vec(), vec!["apple", "fig", "kiwi", "pear"]);
}
