// 遍历结果树

use crate::file::FileWithPath;

/// 嵌套的解析结果
///
/// 目录遍历按批次产生嵌套结构，在边界处统一展平
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTree {
    Leaf(FileWithPath),
    Branch(Vec<FileTree>),
}

impl FileTree {
    pub fn empty() -> Self {
        Self::Branch(Vec::new())
    }

    /// 叶子数量
    pub fn len(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(children) => children.iter().map(FileTree::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 深度优先、从左到右展平
    ///
    /// 用显式栈代替递归，嵌套深度不受调用栈限制
    pub fn flatten(self) -> Vec<FileWithPath> {
        let mut files = Vec::new();
        let mut stack = match self {
            Self::Leaf(file) => return vec![file],
            Self::Branch(children) => vec![children.into_iter()],
        };

        while let Some(level) = stack.last_mut() {
            match level.next() {
                Some(Self::Leaf(file)) => files.push(file),
                Some(Self::Branch(children)) => stack.push(children.into_iter()),
                None => {
                    stack.pop();
                }
            }
        }

        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::{to_file_with_path, RawFile};
    use proptest::prelude::*;

    fn leaf(name: &str) -> FileTree {
        FileTree::Leaf(to_file_with_path(&RawFile::new(name, Vec::new()), None))
    }

    #[test]
    fn test_flatten_preserves_structural_order() {
        let tree = FileTree::Branch(vec![
            leaf("a"),
            FileTree::Branch(vec![
                FileTree::Branch(vec![leaf("b"), leaf("c")]),
                FileTree::empty(),
                leaf("d"),
            ]),
            leaf("e"),
        ]);

        assert_eq!(tree.len(), 5);
        let names: Vec<String> = tree
            .flatten()
            .into_iter()
            .map(|f| f.name().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_flatten_single_leaf() {
        let files = leaf("only").flatten();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path(), "only");
    }

    #[test]
    fn test_empty_tree() {
        let tree = FileTree::Branch(vec![FileTree::empty(), FileTree::empty()]);
        assert!(tree.is_empty());
        assert!(tree.flatten().is_empty());
    }

    #[test]
    fn test_deep_nesting() {
        let mut tree = leaf("bottom");
        for _ in 0..10_000 {
            tree = FileTree::Branch(vec![tree]);
        }
        let files = tree.flatten();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name(), "bottom");
    }

    fn arb_tree() -> impl Strategy<Value = FileTree> {
        let leaves = "[a-z]{1,4}".prop_map(|name| leaf(&name));
        leaves.prop_recursive(5, 64, 6, |inner| {
            prop::collection::vec(inner, 0..6).prop_map(FileTree::Branch)
        })
    }

    proptest! {
        #[test]
        fn prop_flatten_keeps_every_leaf(tree in arb_tree()) {
            let expected = tree.len();
            prop_assert_eq!(tree.flatten().len(), expected);
        }
    }
}
