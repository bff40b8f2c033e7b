

#[inline]
pub fn resource_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}


#[inline]
pub fn resource_collection(name: &str) -> Option<&str> {
    name.split_once('/').map(|(collection, _)| collection)
}


pub fn split_csv(value: Option<&str>) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}


pub fn truncate_detail(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        format!("{}...", s.chars().take(max_chars).collect::<String>())
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_id_takes_last_segment() {
        assert_eq!(resource_id("folders/123"), "123");
        assert_eq!(resource_id("organizations/42"), "42");
        assert_eq!(resource_id("liens/p1234-abc"), "p1234-abc");
    }

    #[test]
    fn test_resource_id_bare() {
        assert_eq!(resource_id("123"), "123");
    }

    #[test]
    fn test_resource_collection() {
        assert_eq!(resource_collection("folders/123"), Some("folders"));
        assert_eq!(resource_collection("organizations/1"), Some("organizations"));
        assert_eq!(resource_collection("123"), None);
    }

    #[test]
    fn test_split_csv() {
        assert_eq!(
            split_csv(Some("folders/1, 2,,3 ")),
            vec!["folders/1", "2", "3"]
        );
        assert!(split_csv(None).is_empty());
        assert!(split_csv(Some("")).is_empty());
    }

    #[test]
    fn test_truncate_detail() {
        assert_eq!(truncate_detail("hello world", 5), "hello...");
        assert_eq!(truncate_detail("hi", 10), "hi");
    }
}
