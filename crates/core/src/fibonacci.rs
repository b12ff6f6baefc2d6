/// Whether `n` is a term of 1, 1, 2, 3, 5, 8, ...
///
/// Zero is never matched. Round logic treats an empty final pile as closed
/// on its own.
pub fn is_fibonacci(n: u32) -> bool {
    let (mut a, mut b) = (0u32, 1u32);
    while b <= n {
        if b == n {
            return true;
        }
        let Some(next) = a.checked_add(b) else {
            return false;
        };
        a = b;
        b = next;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_matched() {
        assert!(!is_fibonacci(0));
    }

    #[test]
    fn small_terms() {
        let hits: Vec<u32> = (0..=100).filter(|n| is_fibonacci(*n)).collect();
        assert_eq!(hits, vec![1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
    }

    #[test]
    fn largest_u32_term_terminates() {
        assert!(is_fibonacci(2_971_215_073));
        assert!(!is_fibonacci(u32::MAX));
    }
}
