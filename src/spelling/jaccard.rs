//! Jaccard set similarity.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// Calculate the Jaccard similarity `|A ∩ B| / |A ∪ B|` of two sets.
///
/// Returns exactly 0.0 when either set is empty.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use lexmatch::spelling::jaccard::jaccard;
///
/// let a: HashSet<&str> = ["ca", "at"].into_iter().collect();
/// let b: HashSet<&str> = ["ca", "at", "ts"].into_iter().collect();
/// assert!((jaccard(&a, &b) - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn jaccard<T, S>(a: &HashSet<T, S>, b: &HashSet<T, S>) -> f64
where
    T: Eq + Hash,
    S: BuildHasher,
{
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    // Iterate the smaller set for the intersection count
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|item| large.contains(*item)).count();
    let union = a.len() + b.len() - intersection;

    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_jaccard() {
        let a = set(&["ca", "at"]);
        let b = set(&["ca", "at", "ts"]);
        assert!((jaccard(&a, &b) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_jaccard_disjoint() {
        assert_eq!(jaccard(&set(&["ab"]), &set(&["cd"])), 0.0);
    }

    #[test]
    fn test_jaccard_identity() {
        let a = set(&["ab", "bc", "cd"]);
        assert_eq!(jaccard(&a, &a), 1.0);
    }

    #[test]
    fn test_jaccard_empty() {
        let empty = set(&[]);
        let a = set(&["ab"]);
        assert_eq!(jaccard(&empty, &a), 0.0);
        assert_eq!(jaccard(&a, &empty), 0.0);
        assert_eq!(jaccard(&empty, &empty), 0.0);
    }

    #[test]
    fn test_jaccard_symmetric() {
        let a = set(&["ab", "bc", "cd", "de"]);
        let b = set(&["bc", "xy"]);
        assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
        assert!((jaccard(&a, &b) - 0.2).abs() < 1e-12);
    }
}
