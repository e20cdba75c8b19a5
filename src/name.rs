//! Naming utilities: name-based sorting and collision-free name generation.

use std::collections::HashSet;

/// Types that expose a comparable name.
pub trait HasName {
    fn get_name(&self) -> &str;
}

// Delegate HasName to references (and smart pointers if useful)
impl<T: HasName + ?Sized> HasName for &T {
    fn get_name(&self) -> &str {
        (*self).get_name()
    }
}
impl<T: HasName + ?Sized> HasName for Box<T> {
    fn get_name(&self) -> &str {
        (**self).get_name()
    }
}

/// Sorting helpers for slices of `T: HasName`.
pub trait SortByName {
    /// Stable, ascending sort by `get_name()`.
    fn sort_by_name(&mut self);
}

impl<T: HasName> SortByName for [T] {
    fn sort_by_name(&mut self) {
        self.sort_by(|a, b| a.get_name().cmp(b.get_name()));
    }
}

/// Returns `candidate` if it is not taken, otherwise `candidate_<n>` for the
/// first free `n` counting up from `start_suffix`.
///
/// Pure function: the caller is responsible for inserting the returned name
/// into `used` before generating the next one.
pub fn unique_name(candidate: &str, used: &HashSet<String>, start_suffix: u32) -> String {
    if !used.contains(candidate) {
        return candidate.to_string();
    }
    let mut suffix = start_suffix;
    loop {
        let name = format!("{candidate}_{suffix}");
        if !used.contains(&name) {
            return name;
        }
        suffix += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(String);
    impl HasName for Named {
        fn get_name(&self) -> &str {
            &self.0
        }
    }

    #[test]
    fn test_sort_by_name() {
        let mut items = vec![
            Named("charlie".to_string()),
            Named("alice".to_string()),
            Named("bob".to_string()),
        ];
        items.as_mut_slice().sort_by_name();
        assert_eq!(items[0].get_name(), "alice");
        assert_eq!(items[1].get_name(), "bob");
        assert_eq!(items[2].get_name(), "charlie");
    }

    #[test]
    fn test_unique_name_free() {
        let used = HashSet::new();
        assert_eq!(unique_name("Room", &used, 1), "Room");
    }

    #[test]
    fn test_unique_name_taken() {
        let used: HashSet<String> = ["Room".to_string()].into_iter().collect();
        assert_eq!(unique_name("Room", &used, 1), "Room_1");
    }

    #[test]
    fn test_unique_name_scans_forward() {
        let used: HashSet<String> = ["Room", "Room_1", "Room_2"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(unique_name("Room", &used, 1), "Room_3");
    }

    #[test]
    fn test_unique_name_start_suffix() {
        let used: HashSet<String> = ["Room".to_string()].into_iter().collect();
        assert_eq!(unique_name("Room", &used, 5), "Room_5");
    }

    #[test]
    fn test_unique_name_is_deterministic() {
        let used: HashSet<String> = ["Room", "Room_1"].iter().map(|s| s.to_string()).collect();
        let a = unique_name("Room", &used, 1);
        let b = unique_name("Room", &used, 1);
        assert_eq!(a, b);
        assert!(!used.contains(&a));
    }
}
