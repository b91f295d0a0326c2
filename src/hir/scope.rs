//! Position-indexed scope tree over one document's symbols.
//!
//! Built on demand per query and never stored: symbols are nested by their
//! declared ranges, so the tree follows directly from a sorted pass.

use rustc_hash::FxHashSet;

use crate::base::Position;

use super::symbols::Symbol;

/// One node of the tree, wrapping a single symbol.
#[derive(Clone, Debug)]
pub struct ScopeNode<'a> {
    pub symbol: &'a Symbol,
    pub parent: Option<usize>,
    /// Child node indices, in source order.
    pub children: Vec<usize>,
}

/// Arena of scope nodes. Top-level nodes hang off an implicit file scope.
#[derive(Clone, Debug, Default)]
pub struct ScopeTree<'a> {
    nodes: Vec<ScopeNode<'a>>,
    roots: Vec<usize>,
}

impl<'a> ScopeTree<'a> {
    /// Build the tree in one stack pass over the symbols sorted by start.
    ///
    /// Each symbol is attached under the innermost open node whose declared
    /// range contains its own; nodes that do not contain it are popped.
    pub fn build(symbols: &'a [Symbol]) -> Self {
        let mut order: Vec<&Symbol> = symbols.iter().collect();
        // outer ranges first when two start together
        order.sort_by(|a, b| {
            a.declared_range
                .start
                .cmp(&b.declared_range.start)
                .then_with(|| b.declared_range.end.cmp(&a.declared_range.end))
        });

        let mut tree = Self {
            nodes: Vec::with_capacity(order.len()),
            roots: Vec::new(),
        };
        let mut stack: Vec<usize> = Vec::new();

        for symbol in order {
            while let Some(&top) = stack.last() {
                if tree.nodes[top]
                    .symbol
                    .declared_range
                    .contains_span(&symbol.declared_range)
                {
                    break;
                }
                stack.pop();
            }

            let index = tree.nodes.len();
            let parent = stack.last().copied();
            tree.nodes.push(ScopeNode {
                symbol,
                parent,
                children: Vec::new(),
            });
            match parent {
                Some(parent) => tree.nodes[parent].children.push(index),
                None => tree.roots.push(index),
            }
            stack.push(index);
        }

        tree
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> Option<&ScopeNode<'a>> {
        self.nodes.get(index)
    }

    /// Top-level node indices.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Index of the innermost node whose declared range contains `position`.
    pub fn innermost_at(&self, position: Position) -> Option<usize> {
        let mut found = None;
        let mut level = &self.roots;
        while let Some(&index) = level
            .iter()
            .find(|&&i| self.nodes[i].symbol.declared_range.contains(position))
        {
            found = Some(index);
            level = &self.nodes[index].children;
        }
        found
    }

    /// Symbols visible at `position`, innermost scope first.
    ///
    /// That is the innermost containing node with its direct children, then
    /// every ancestor with its direct children, then the file-level symbols.
    /// Nodes nested inside unrelated siblings are never included.
    pub fn resolve_at(&self, position: Position) -> Vec<&'a Symbol> {
        let mut seen = FxHashSet::default();
        let mut visible = Vec::new();
        let mut take = |index: usize, visible: &mut Vec<&'a Symbol>| {
            if seen.insert(index) {
                visible.push(self.nodes[index].symbol);
            }
        };

        let mut current = self.innermost_at(position);
        while let Some(index) = current {
            let node = &self.nodes[index];
            take(index, &mut visible);
            for &child in &node.children {
                take(child, &mut visible);
            }
            current = node.parent;
        }
        for &root in &self.roots {
            take(root, &mut visible);
        }

        visible
    }
}
