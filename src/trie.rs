use std::collections::HashMap;

/// A node of the phrase index. The terminal flag records exact-key
/// membership; phrase continuation during segmentation only consults
/// `children`.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_end: bool,
}

/// Character-path index over the phrase dictionary keys. Keys are only
/// ever added; the index is read-only once segmentation starts.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

/// Cursor for incremental matching. `None` means unset: the next
/// `advance` starts over from the root. Each segmentation call owns its
/// own cursor, so concurrent walks over one trie never interfere.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cursor<'a> {
    node: Option<&'a TrieNode>,
}

impl Cursor<'_> {
    /// Forget the current position; the next `advance` starts from the root.
    pub fn reset(&mut self) {
        self.node = None;
    }
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, creating one node per character not yet on its path
    /// and marking the final node terminal. Re-inserting is a no-op.
    pub fn insert(&mut self, key: &str) {
        let mut node = &mut self.root;
        for ch in key.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.is_end = true;
    }

    /// Exact-key membership, via the terminal flag.
    pub fn contains(&self, key: &str) -> bool {
        let mut node = &self.root;
        for ch in key.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_end
    }

    /// An unset cursor for a fresh incremental walk.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::default()
    }

    /// Try to extend the walk by one character. Returns true and moves the
    /// cursor when some key continues this way; otherwise leaves the
    /// cursor where it was.
    pub fn advance<'a>(&'a self, cursor: &mut Cursor<'a>, ch: char) -> bool {
        let node = cursor.node.unwrap_or(&self.root);
        match node.children.get(&ch) {
            Some(child) => {
                cursor.node = Some(child);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_exact_keys_only() {
        let mut trie = Trie::new();
        trie.insert("你好");
        assert!(trie.contains("你好"));
        assert!(!trie.contains("你"));
        assert!(!trie.contains("你好嗎"));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut trie = Trie::new();
        trie.insert("早晨");
        trie.insert("早晨");
        assert!(trie.contains("早晨"));
    }

    #[test]
    fn test_advance_walks_prefixes() {
        let mut trie = Trie::new();
        trie.insert("你好");

        let mut cursor = trie.cursor();
        assert!(trie.advance(&mut cursor, '你'));
        assert!(trie.advance(&mut cursor, '好'));
        assert!(!trie.advance(&mut cursor, '嗎'));
    }

    #[test]
    fn test_failed_advance_leaves_cursor_in_place() {
        let mut trie = Trie::new();
        trie.insert("你好");

        let mut cursor = trie.cursor();
        assert!(trie.advance(&mut cursor, '你'));
        assert!(!trie.advance(&mut cursor, '人'));
        // still positioned after 你
        assert!(trie.advance(&mut cursor, '好'));
    }

    #[test]
    fn test_reset_restarts_from_root() {
        let mut trie = Trie::new();
        trie.insert("你好");

        let mut cursor = trie.cursor();
        assert!(trie.advance(&mut cursor, '你'));
        cursor.reset();
        assert!(!trie.advance(&mut cursor, '好'));
        assert!(trie.advance(&mut cursor, '你'));
    }

    #[test]
    fn test_shared_prefixes_branch() {
        let mut trie = Trie::new();
        trie.insert("香港");
        trie.insert("香蕉");

        let mut cursor = trie.cursor();
        assert!(trie.advance(&mut cursor, '香'));
        let fork = cursor;
        assert!(trie.advance(&mut cursor, '港'));

        let mut other = fork;
        assert!(trie.advance(&mut other, '蕉'));
    }
}
