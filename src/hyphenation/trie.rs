//! Character trie over hyphenation patterns.
//!
//! Nodes live in a single arena vector owned by the trie; node 0 is the root.
//! Edges are `(char, child index)` pairs sorted by label when the trie is built,
//! so lookups can switch to binary search on wide nodes. Once built, the trie is
//! immutable and can be shared across threads without synchronization.

use tracing::debug;

use super::pattern::{Pattern, Points};
#[cfg(any(feature = "serialization", test))]
use crate::error::{Error, Result};

/// An immutable trie mapping pattern letter sequences to their weights.
///
/// # Performance
///
/// - **Construction**: O(total pattern length)
/// - **Matching**: O(n · k) for a padded word of length n and longest pattern k
/// - **Thread-safe**: Fully immutable, safe for concurrent access
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct PatternTrie {
    nodes: Vec<TrieNode>,
    pattern_count: usize,
}

/// A node in the pattern trie.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub(crate) struct TrieNode {
    /// Edges to child nodes: (letter, target node index)
    edges: Vec<(char, usize)>,
    /// Weights of the pattern ending here, if any
    points: Option<Points>,
}

/// Builder for constructing a [`PatternTrie`].
///
/// Inserting a letter sequence that is already present replaces its weights.
pub struct PatternTrieBuilder {
    nodes: Vec<TrieNode>,
    pattern_count: usize,
}

impl PatternTrieBuilder {
    /// Create a builder holding only the root node.
    pub fn new() -> Self {
        PatternTrieBuilder {
            nodes: vec![TrieNode::default()],
            pattern_count: 0,
        }
    }

    /// Add a pattern, walking or creating one node per letter.
    pub fn insert(&mut self, pattern: Pattern) {
        let (letters, points) = pattern.into_parts();
        let mut node_idx = 0;

        for letter in letters {
            let existing = self.nodes[node_idx]
                .edges
                .iter()
                .find(|(l, _)| *l == letter)
                .map(|(_, idx)| *idx);

            node_idx = match existing {
                Some(idx) => idx,
                None => {
                    let new_idx = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node_idx].edges.push((letter, new_idx));
                    new_idx
                }
            };
        }

        if self.nodes[node_idx].points.replace(points).is_none() {
            self.pattern_count += 1;
        }
    }

    /// Finish building and return the trie.
    pub fn build(mut self) -> PatternTrie {
        // Sort all edges to enable binary search in child()
        for node in &mut self.nodes {
            node.edges.sort_unstable_by_key(|(label, _)| *label);
            node.edges.shrink_to_fit();
        }

        debug!(
            patterns = self.pattern_count,
            nodes = self.nodes.len(),
            "built hyphenation pattern trie"
        );

        PatternTrie {
            nodes: self.nodes,
            pattern_count: self.pattern_count,
        }
    }
}

impl Default for PatternTrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternTrie {
    /// Create an empty trie. It matches nothing.
    pub fn new() -> Self {
        PatternTrieBuilder::new().build()
    }

    /// Build a trie from parsed patterns.
    pub fn from_patterns<I>(patterns: I) -> Self
    where
        I: IntoIterator<Item = Pattern>,
    {
        let mut builder = PatternTrieBuilder::new();
        for pattern in patterns {
            builder.insert(pattern);
        }
        builder.build()
    }

    /// Rebuild a trie from a stored node arena, checking its structure.
    ///
    /// The arena must be a tree in builder order: node 0 is the root, every edge
    /// points to a later node, each node other than the root has exactly one
    /// parent, edges are sorted by label and each weight vector is one longer
    /// than the path leading to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTable`] describing the first inconsistency.
    #[cfg(any(feature = "serialization", test))]
    pub(crate) fn from_nodes(nodes: Vec<TrieNode>, pattern_count: usize) -> Result<Self> {
        if nodes.is_empty() {
            return Err(invalid("trie has no root node".to_string()));
        }

        let mut depths: Vec<Option<usize>> = vec![None; nodes.len()];
        depths[0] = Some(0);
        let mut stored = 0;

        for (idx, node) in nodes.iter().enumerate() {
            let depth = depths[idx]
                .ok_or_else(|| invalid(format!("node {} is unreachable", idx)))?;

            if node.edges.windows(2).any(|pair| pair[0].0 >= pair[1].0) {
                return Err(invalid(format!("edges of node {} are not sorted", idx)));
            }

            for &(label, child) in &node.edges {
                if child <= idx || child >= nodes.len() {
                    return Err(invalid(format!(
                        "edge '{}' of node {} points to node {} of {}",
                        label,
                        idx,
                        child,
                        nodes.len()
                    )));
                }
                if depths[child].replace(depth + 1).is_some() {
                    return Err(invalid(format!("node {} has more than one parent", child)));
                }
            }

            if let Some(points) = &node.points {
                if depth == 0 || points.len() != depth + 1 {
                    return Err(invalid(format!(
                        "node {} at depth {} stores {} weights",
                        idx,
                        depth,
                        points.len()
                    )));
                }
                if points.iter().any(|&weight| weight > 9) {
                    return Err(invalid(format!("node {} stores a weight above 9", idx)));
                }
                stored += 1;
            }
        }

        if stored != pattern_count {
            return Err(invalid(format!(
                "pattern count is {} but {} nodes store weights",
                pattern_count, stored
            )));
        }

        Ok(PatternTrie {
            nodes,
            pattern_count,
        })
    }

    /// Number of distinct letter sequences stored.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no pattern has been stored.
    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }

    /// Weights stored for an exact letter sequence.
    pub fn get(&self, letters: &str) -> Option<&[u8]> {
        let mut node_idx = 0;
        for c in letters.chars() {
            node_idx = self.child(node_idx, c)?;
        }
        self.nodes[node_idx].points.as_deref()
    }

    /// Merge every pattern starting at `start` in `padded` into `points`.
    ///
    /// `points` must hold at least `padded.len() + 1` entries. Each weight is
    /// combined by element-wise maximum with what is already there.
    pub fn apply_at(&self, padded: &[char], start: usize, points: &mut [u8]) {
        let mut node_idx = 0;

        for &c in &padded[start..] {
            match self.child(node_idx, c) {
                Some(idx) => node_idx = idx,
                None => return,
            }

            if let Some(weights) = &self.nodes[node_idx].points {
                for (slot, &weight) in points[start..].iter_mut().zip(weights.iter()) {
                    if weight > *slot {
                        *slot = weight;
                    }
                }
            }
        }
    }

    /// Compute the raw break-point vector of a padded word.
    ///
    /// The result has `padded.len() + 1` entries and has not had its edges zeroed.
    pub fn superimpose(&self, padded: &[char]) -> Vec<u8> {
        let mut points = vec![0u8; padded.len() + 1];
        for start in 0..padded.len() {
            self.apply_at(padded, start, &mut points);
        }
        points
    }

    /// Collect every stored pattern by depth-first traversal.
    ///
    /// Patterns come out in label order, which keeps serialized output stable.
    pub fn patterns(&self) -> Vec<Pattern> {
        let mut patterns = Vec::with_capacity(self.pattern_count);
        let mut letters = Vec::with_capacity(16);

        fn dfs(
            nodes: &[TrieNode],
            node_idx: usize,
            letters: &mut Vec<char>,
            patterns: &mut Vec<Pattern>,
        ) {
            let node = &nodes[node_idx];
            if let Some(points) = &node.points {
                if let Some(pattern) = Pattern::from_parts(letters.clone(), points) {
                    patterns.push(pattern);
                }
            }
            for &(label, child_idx) in &node.edges {
                letters.push(label);
                dfs(nodes, child_idx, letters, patterns);
                letters.pop();
            }
        }

        dfs(&self.nodes, 0, &mut letters, &mut patterns);
        patterns
    }

    #[inline]
    fn child(&self, node_idx: usize, label: char) -> Option<usize> {
        let edges = &self.nodes[node_idx].edges;

        // The root fans out to the whole alphabet; most other nodes have a few edges
        if edges.len() < 16 {
            edges.iter().find(|(l, _)| *l == label).map(|(_, idx)| *idx)
        } else {
            edges
                .binary_search_by_key(&label, |(l, _)| *l)
                .ok()
                .map(|pos| edges[pos].1)
        }
    }
}

impl Default for PatternTrie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(feature = "serialization", test))]
fn invalid(reason: String) -> Error {
    Error::InvalidTable(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hyphenation::pattern::parse_patterns;

    fn trie(text: &str) -> PatternTrie {
        PatternTrie::from_patterns(parse_patterns(text).unwrap())
    }

    fn padded(word: &str) -> Vec<char> {
        std::iter::once('.')
            .chain(word.chars())
            .chain(std::iter::once('.'))
            .collect()
    }

    #[test]
    fn test_empty_trie() {
        let trie = PatternTrie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.superimpose(&padded("abc")), vec![0; 6]);
    }

    #[test]
    fn test_shared_prefixes() {
        let trie = trie("he2n hena4 hen5at");
        assert_eq!(trie.pattern_count(), 3);
        // h, e, n, a, t
        assert_eq!(trie.node_count(), 6);
        assert_eq!(trie.get("hen"), Some(&[0, 0, 2, 0][..]));
        assert_eq!(trie.get("hena"), Some(&[0, 0, 0, 0, 4][..]));
        assert_eq!(trie.get("he"), None);
        assert_eq!(trie.get("x"), None);
    }

    #[test]
    fn test_duplicate_pattern_last_write_wins() {
        let trie = trie("a1b a3b");
        assert_eq!(trie.pattern_count(), 1);
        assert_eq!(trie.get("ab"), Some(&[0, 3, 0][..]));
    }

    #[test]
    fn test_superimpose_takes_maximum() {
        // "n2at" and "1na" overlap on the break before 'a'
        let trie = trie("1na n2at");
        let points = trie.superimpose(&padded("nat"));
        // .  n  a  t  .
        assert_eq!(points, vec![0, 1, 2, 0, 0, 0]);
    }

    #[test]
    fn test_apply_at_anchored_pattern() {
        let trie = trie(".a1b");
        let word = padded("ab");
        let mut points = vec![0; word.len() + 1];
        trie.apply_at(&word, 0, &mut points);
        assert_eq!(points, vec![0, 0, 1, 0, 0]);

        // Not anchored at an interior offset
        let word = padded("cab");
        let points = trie.superimpose(&word);
        assert!(points.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_wide_node_uses_sorted_edges() {
        let tokens: Vec<String> = ('a'..='z').map(|c| format!("{}1", c)).collect();
        let trie = trie(&tokens.join(" "));
        assert_eq!(trie.pattern_count(), 26);
        for c in 'a'..='z' {
            assert_eq!(trie.get(&c.to_string()), Some(&[0, 1][..]));
        }
    }

    fn node(edges: &[(char, usize)], points: Option<&[u8]>) -> TrieNode {
        TrieNode {
            edges: edges.to_vec(),
            points: points.map(Points::from_slice),
        }
    }

    #[test]
    fn test_from_nodes_accepts_built_arena() {
        let built = trie("he2n hena4 hen5at 1na");
        let rebuilt =
            PatternTrie::from_nodes(built.nodes.clone(), built.pattern_count()).unwrap();
        assert_eq!(rebuilt, built);
    }

    #[test]
    fn test_from_nodes_rejects_bad_arenas() {
        let cases: Vec<(Vec<TrieNode>, usize)> = vec![
            // No root
            (vec![], 0),
            // Edge past the end of the arena
            (vec![node(&[('a', 7)], None)], 0),
            // Edge pointing back at the root
            (vec![node(&[('a', 1)], None), node(&[('b', 0)], None)], 0),
            // Two parents for one node
            (
                vec![
                    node(&[('a', 1), ('b', 1)], None),
                    node(&[], Some(&[0, 1][..])),
                ],
                1,
            ),
            // Unsorted edges
            (
                vec![
                    node(&[('b', 1), ('a', 2)], None),
                    node(&[], None),
                    node(&[], None),
                ],
                0,
            ),
            // Weight vector too short for its depth
            (vec![node(&[('a', 1)], None), node(&[], Some(&[1][..]))], 1),
            // Weights on the root
            (vec![node(&[], Some(&[1][..]))], 1),
            // Weight that is not a digit
            (vec![node(&[('a', 1)], None), node(&[], Some(&[0, 12][..]))], 1),
            // Count disagrees with the stored weights
            (vec![node(&[('a', 1)], None), node(&[], Some(&[0, 1][..]))], 2),
            // Orphan node
            (vec![node(&[], None), node(&[], None)], 0),
        ];

        for (nodes, count) in cases {
            let description = format!("{:?}", nodes);
            assert!(
                matches!(
                    PatternTrie::from_nodes(nodes, count),
                    Err(Error::InvalidTable(_))
                ),
                "accepted {}",
                description
            );
        }
    }

    #[test]
    fn test_patterns_roundtrip() {
        let trie = trie("hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n");
        let tokens: Vec<String> = trie.patterns().iter().map(|p| p.to_string()).collect();
        assert_eq!(tokens.len(), 9);
        let rebuilt = PatternTrie::from_patterns(trie.patterns());
        assert_eq!(rebuilt.patterns(), trie.patterns());
        assert_eq!(rebuilt.node_count(), trie.node_count());
        assert!(tokens.contains(&"hen5at".to_string()));
    }
}
