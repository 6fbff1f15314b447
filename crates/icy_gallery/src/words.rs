/// Built-in keywords for the "random keyword" command
pub const RANDOM_KEYWORDS: &[&str] = &[
    "cat", "dog", "horse", "bird", "flower", "ship", "moon", "sun", "river", "mountain", "portrait", "garden", "dragon", "armor", "vase", "tea", "dance",
    "music", "winter", "ocean", "lion", "tree", "bridge", "mask",
];

/// Pick a keyword from `custom`, or from the built-in list if `custom` is empty
pub fn random_keyword(rng: &mut fastrand::Rng, custom: &[String]) -> String {
    if custom.is_empty() {
        RANDOM_KEYWORDS[rng.usize(..RANDOM_KEYWORDS.len())].to_string()
    } else {
        custom[rng.usize(..custom.len())].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_list() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..50 {
            let word = random_keyword(&mut rng, &[]);
            assert!(RANDOM_KEYWORDS.contains(&word.as_str()));
        }
    }

    #[test]
    fn test_custom_list() {
        let mut rng = fastrand::Rng::with_seed(7);
        let custom = vec!["owl".to_string()];
        assert_eq!(random_keyword(&mut rng, &custom), "owl");
    }
}
