use super::*;

fn entry(number: u64, is_control_point: bool) -> CollectionEntry<u64> {
    CollectionEntry {
        number,
        filename: format!("IMG_{number}.xmp"),
        store: number * 10,
        is_control_point,
    }
}

#[test]
fn lookup_by_name_and_number() {
    let c = Collection::from_sorted(vec![entry(3, true), entry(4, false), entry(5, true)]);
    assert_eq!(c.len(), 3);
    assert_eq!(c.get("IMG_4.xmp"), Some(&40));
    assert_eq!(c.get("IMG_6.xmp"), None);
    assert!(c.entry(5).is_some_and(|e| e.is_control_point));
    assert!(c.entry(2).is_none());
    let names: Vec<&str> = c.filenames().collect();
    assert_eq!(names, vec!["IMG_3.xmp", "IMG_4.xmp", "IMG_5.xmp"]);
}

#[test]
fn clear_empties() {
    let mut c = Collection::from_sorted(vec![entry(1, true), entry(2, true)]);
    assert_eq!((&c).into_iter().count(), 2);
    c.clear();
    assert!(c.is_empty());
    assert!(c.into_entries().is_empty());
}
