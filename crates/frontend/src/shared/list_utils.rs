//! Client-side sort helpers for table headers.
//!
//! Sorting is display-only over the loaded page; it never refetches.

use std::cmp::Ordering;

/// Row types that can be sorted by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator for a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Toggle rule for clicking a column header: same column flips direction, a
/// new column starts ascending.
pub fn toggle_sort(sort_field: &mut String, sort_ascending: &mut bool, field: &str) {
    if sort_field == field {
        *sort_ascending = !*sort_ascending;
    } else {
        *sort_field = field.to_string();
        *sort_ascending = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, u64);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "duration" => self.1.cmp(&other.1),
                _ => self.0.cmp(other.0),
            }
        }
    }

    #[test]
    fn test_sort_both_directions() {
        let mut rows = vec![Row("b", 2), Row("a", 3), Row("c", 1)];
        sort_list(&mut rows, "duration", true);
        assert_eq!(rows.iter().map(|r| r.1).collect::<Vec<_>>(), vec![1, 2, 3]);
        sort_list(&mut rows, "name", false);
        assert_eq!(rows.iter().map(|r| r.0).collect::<Vec<_>>(), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_toggle_sort_rules() {
        let mut field = "name".to_string();
        let mut ascending = true;
        toggle_sort(&mut field, &mut ascending, "name");
        assert!(!ascending);
        toggle_sort(&mut field, &mut ascending, "duration");
        assert_eq!(field, "duration");
        assert!(ascending);
    }
}
