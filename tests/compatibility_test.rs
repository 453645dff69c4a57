use collsort::prelude::*;

// Simulate an external struct (like a record type from another crate).
#[derive(Debug, PartialEq)]
struct Reading {
    sensor: String,
    magnitude: f64,
}

impl Reading {
    fn new(sensor: &str, magnitude: f64) -> Self {
        Self {
            sensor: sensor.to_owned(),
            magnitude,
        }
    }
}

// Implement AsSortable for the external struct.
// This proves the trait is implementable by "outside crates".
impl AsSortable for Reading {
    fn as_sortable(&self) -> SortableValue {
        SortableValue::Number(self.magnitude)
    }
}

#[test]
fn test_external_struct_compatibility() {
    let readings = vec![
        Reading::new("b", 2.5),
        Reading::new("a", 0.5),
        Reading::new("c", 1.5),
    ];
    let sorted = sort_elements(readings, &SortOptions::new());

    let sensors: Vec<&str> = sorted.iter().map(|r| r.sensor.as_str()).collect();
    assert_eq!(sensors, vec!["a", "c", "b"]);
}

#[test]
fn test_external_struct_with_selector() {
    // Same data, sorted by the other field through a selector instead.
    let readings = vec![
        Reading::new("b", 2.5),
        Reading::new("a", 0.5),
        Reading::new("c", 1.5),
    ];
    let sorted = sort_elements_by_selector(
        readings,
        |r| r.sensor.as_sortable(),
        &SortOptions::new(),
    );

    let sensors: Vec<&str> = sorted.iter().map(|r| r.sensor.as_str()).collect();
    assert_eq!(sensors, vec!["a", "b", "c"]);
}

#[test]
fn test_plain_string_sort_matches_std() {
    let input = vec!["delta", "alpha", "echo", "bravo", "charlie", "alpha"];
    let sorted = sort_strings(input.clone(), &SortOptions::new());

    let mut expected = input;
    expected.sort();
    assert_eq!(sorted, expected);
}

#[test]
fn test_integer_sort_matches_std() {
    let input = vec![5i64, -3, 12, 0, -3, 7];
    let sorted = sort_numerics(input.clone(), &SortOptions::new());

    let mut expected = input;
    expected.sort();
    assert_eq!(sorted, expected);
}
