use std::{collections::BTreeMap, convert::Infallible, str::FromStr};

/// Whitelist of relationship paths a mapper may traverse.
///
/// Parsed from a comma separated list of dotted paths such as `"genre,gameTags.tag"`.
/// Segments are transfer object field names. A relationship is only mapped when its
/// field name is a child of the tree handed to the mapper for the parent object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncludeTree {
    children: BTreeMap<String, IncludeTree>,
}

impl IncludeTree {
    /// Tree that includes no relationships.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn parse(paths: &str) -> Self {
        let mut tree = Self::empty();
        for path in paths.split(',') {
            tree.add_path(path);
        }
        tree
    }

    /// Adds one dotted path. Blank segments are ignored.
    pub fn add_path(&mut self, path: &str) {
        let mut node = self;
        for segment in path.split('.').map(str::trim).filter(|s| !s.is_empty()) {
            node = node.children.entry(segment.to_string()).or_default();
        }
    }

    pub fn merge(&mut self, other: IncludeTree) {
        for (name, subtree) in other.children {
            self.children.entry(name).or_default().merge(subtree);
        }
    }

    /// Subtree for the named relationship, `None` when it is not included.
    pub fn child(&self, name: &str) -> Option<&IncludeTree> {
        self.children.get(name)
    }

    /// True when the full dotted path is included.
    pub fn contains(&self, path: &str) -> bool {
        let mut node = self;
        for segment in path.split('.') {
            match node.child(segment) {
                Some(next) => node = next,
                None => return false,
            }
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl FromStr for IncludeTree {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
