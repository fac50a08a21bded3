use std::collections::HashMap;

#[derive(Debug, PartialEq)]
pub enum TrieLookupResult {
    None,
    Prefix,
    Exact(String),
    ExactAndPrefix(String),
}

struct Node {
    children: HashMap<char, Node>,
    target: Option<String>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            target: None,
        }
    }
}

/// Character trie over the source symbols of a phoneme table.
pub struct PhonemeTrie {
    root: Node,
}

impl PhonemeTrie {
    /// Build from ordered pairs. A repeated source keeps its first target.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut trie = PhonemeTrie { root: Node::new() };
        for (source, target) in pairs {
            trie.insert(source, target);
        }
        trie
    }

    pub fn lookup(&self, source: &str) -> TrieLookupResult {
        let mut node = &self.root;
        for c in source.chars() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => return TrieLookupResult::None,
            }
        }
        let has_children = !node.children.is_empty();
        match &node.target {
            Some(target) => {
                if has_children {
                    TrieLookupResult::ExactAndPrefix(target.clone())
                } else {
                    TrieLookupResult::Exact(target.clone())
                }
            }
            None => {
                if has_children {
                    TrieLookupResult::Prefix
                } else {
                    TrieLookupResult::None
                }
            }
        }
    }

    /// Longest source symbol that `text` starts with.
    ///
    /// Returns the byte length of the matched source and its target.
    pub fn longest_match(&self, text: &str) -> Option<(usize, &str)> {
        let mut node = &self.root;
        let mut best = None;
        for (i, c) in text.char_indices() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(target) = &node.target {
                best = Some((i + c.len_utf8(), target.as_str()));
            }
        }
        best
    }

    fn insert(&mut self, source: &str, target: &str) {
        let mut node = &mut self.root;
        for c in source.chars() {
            node = node.children.entry(c).or_insert_with(Node::new);
        }
        if node.target.is_none() {
            node.target = Some(target.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PhonemeTrie {
        PhonemeTrie::from_pairs([
            ("siˈ", "sy"),
            ("siˈɪ", "syy"),
            ("s", "s"),
            ("ə", "u"),
            ("əʊ", "uO"),
            ("ə", "x"),
        ])
    }

    #[test]
    fn test_exact() {
        assert_eq!(sample().lookup("s"), TrieLookupResult::ExactAndPrefix("s".into()));
        assert_eq!(sample().lookup("əʊ"), TrieLookupResult::Exact("uO".into()));
    }

    #[test]
    fn test_prefix() {
        assert_eq!(sample().lookup("si"), TrieLookupResult::Prefix);
    }

    #[test]
    fn test_none_for_unknown() {
        assert_eq!(sample().lookup("q"), TrieLookupResult::None);
        assert_eq!(sample().lookup("əʊʊ"), TrieLookupResult::None);
    }

    #[test]
    fn test_first_insert_wins() {
        assert_eq!(sample().lookup("ə"), TrieLookupResult::ExactAndPrefix("u".into()));
    }

    #[test]
    fn test_longest_match_prefers_longer_key() {
        let trie = sample();
        assert_eq!(trie.longest_match("siˈɪŋ"), Some(("siˈɪ".len(), "syy")));
        assert_eq!(trie.longest_match("siˈt"), Some(("siˈ".len(), "sy")));
    }

    #[test]
    fn test_longest_match_falls_back_to_shorter_key() {
        // "si" is only a prefix, so the walk settles on "s".
        assert_eq!(sample().longest_match("sit"), Some((1, "s")));
    }

    #[test]
    fn test_longest_match_none() {
        assert_eq!(sample().longest_match("kat"), None);
        assert_eq!(sample().longest_match(""), None);
    }
}
