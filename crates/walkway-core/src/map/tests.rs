use super::*;

#[test]
fn test_put_contains_and_get() {
    let mut map: KeyedMap<String, i32> = KeyedMap::new();
    map.put("one".to_string(), 1).unwrap();
    map.put("two".to_string(), 2).unwrap();

    assert!(map.contains_key(&"one".to_string()));
    assert!(!map.contains_key(&"three".to_string()));
    assert_eq!(*map.get(&"one".to_string()).unwrap(), 1);
    assert_eq!(*map.get(&"two".to_string()).unwrap(), 2);
    assert_eq!(map.size(), 2);
}

#[test]
fn test_put_duplicate_key_is_rejected() {
    let mut map: KeyedMap<String, i32> = KeyedMap::new();
    map.put("one".to_string(), 1).unwrap();

    let err = map.put("one".to_string(), 100).unwrap_err();
    assert!(matches!(err, WalkwayError::DuplicateKey { .. }));

    // The original value survives
    assert_eq!(*map.get(&"one".to_string()).unwrap(), 1);
    assert_eq!(map.size(), 1);
}

#[test]
fn test_put_unset_key_is_rejected() {
    let mut map: KeyedMap<String, i32> = KeyedMap::new();
    let err = map.put(None::<String>, 1).unwrap_err();
    assert!(matches!(err, WalkwayError::NullKey));
    assert_eq!(map.size(), 0);
}

#[test]
fn test_empty_string_key_is_valid() {
    let mut map: KeyedMap<String, i32> = KeyedMap::new();
    map.put(String::new(), 7).unwrap();
    assert!(map.contains_key(&String::new()));
    assert_eq!(*map.get(&String::new()).unwrap(), 7);
}

#[test]
fn test_get_missing_key() {
    let map: KeyedMap<String, i32> = KeyedMap::new();
    let err = map.get(&"ghost".to_string()).unwrap_err();
    assert!(matches!(err, WalkwayError::KeyNotFound { .. }));
}

#[test]
fn test_remove() {
    let mut map: KeyedMap<String, i32> = KeyedMap::new();
    map.put("one".to_string(), 1).unwrap();
    map.put("two".to_string(), 2).unwrap();

    assert_eq!(map.remove(&"one".to_string()).unwrap(), 1);
    assert!(!map.contains_key(&"one".to_string()));
    assert_eq!(map.size(), 1);

    let err = map.remove(&"one".to_string()).unwrap_err();
    assert!(matches!(err, WalkwayError::KeyNotFound { .. }));
    assert_eq!(map.size(), 1);
}

#[test]
fn test_get_mut_updates_in_place() {
    let mut map: KeyedMap<&str, Vec<u32>> = KeyedMap::new();
    map.put("a", vec![1]).unwrap();
    map.get_mut(&"a").unwrap().push(2);
    assert_eq!(map.get(&"a").unwrap(), &vec![1, 2]);
    assert!(map.get_mut(&"b").is_err());
}

#[test]
fn test_clear_keeps_capacity() {
    let mut map: KeyedMap<u32, u32> = KeyedMap::with_capacity(4).unwrap();
    for i in 0..10 {
        map.put(i, i * 10).unwrap();
    }
    let capacity = map.capacity();

    map.clear();

    assert_eq!(map.size(), 0);
    assert!(map.is_empty());
    assert_eq!(map.capacity(), capacity);
    assert!(!map.contains_key(&3));
    assert!(map.keys().is_empty());

    // Usable again after clearing
    map.put(3, 30).unwrap();
    assert_eq!(*map.get(&3).unwrap(), 30);
}

#[test]
fn test_default_and_explicit_capacity() {
    let map: KeyedMap<String, i32> = KeyedMap::new();
    assert_eq!(map.capacity(), DEFAULT_CAPACITY);

    let map: KeyedMap<String, i32> = KeyedMap::with_capacity(30).unwrap();
    assert_eq!(map.capacity(), 30);

    let err = KeyedMap::<String, i32>::with_capacity(0).unwrap_err();
    assert!(matches!(err, WalkwayError::InvalidCapacity));
}

#[test]
fn test_resize_doubles_at_threshold() {
    let mut map: KeyedMap<u32, u32> = KeyedMap::with_capacity(5).unwrap();

    // 3/5 = 0.6, still below the threshold
    for i in 0..3 {
        map.put(i, i).unwrap();
    }
    assert_eq!(map.capacity(), 5);

    // 4/5 = 0.8 triggers the resize
    map.put(3, 3).unwrap();
    assert_eq!(map.capacity(), 10);
    assert_eq!(map.size(), 4);
    assert!(map.load_factor() < RESIZE_THRESHOLD);
}

#[test]
fn test_resize_preserves_every_pair() {
    let mut map: KeyedMap<String, usize> = KeyedMap::with_capacity(2).unwrap();
    for i in 0..200 {
        map.put(format!("key-{i}"), i).unwrap();
        assert!(map.load_factor() < RESIZE_THRESHOLD);
    }

    assert_eq!(map.size(), 200);
    assert!(map.capacity() >= 256);
    for i in 0..200 {
        assert_eq!(*map.get(&format!("key-{i}")).unwrap(), i);
    }

    let mut keys = map.keys();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), 200);
}

#[test]
fn test_iter_and_values() {
    let mut map: KeyedMap<&str, u32> = KeyedMap::new();
    map.put("a", 1).unwrap();
    map.put("b", 2).unwrap();
    map.put("c", 3).unwrap();

    let mut pairs: Vec<(&str, u32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    pairs.sort();
    assert_eq!(pairs, vec![("a", 1), ("b", 2), ("c", 3)]);
    assert_eq!(map.values().sum::<u32>(), 6);

    for v in map.values_mut() {
        *v *= 10;
    }
    assert_eq!(*map.get(&"b").unwrap(), 20);
}

#[test]
fn test_debug_lists_entries() {
    let mut map: KeyedMap<&str, u32> = KeyedMap::new();
    map.put("only", 1).unwrap();
    assert_eq!(format!("{:?}", map), "{\"only\": 1}");
}
