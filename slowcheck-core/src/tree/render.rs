//! Tree rendering for debugging shrink spaces.

use super::Tree;

impl<T> Tree<T>
where
    T: std::fmt::Display,
{
    /// Render the tree as an indented structure, forcing candidates down
    /// to `max_depth` levels. Lazy shrink spaces can be enormous, so the
    /// depth bound is mandatory.
    pub fn render(&self, max_depth: usize) -> String {
        let mut result = String::new();
        self.render_recursive(&mut result, "", true, max_depth);
        result
    }

    fn render_recursive(&self, result: &mut String, prefix: &str, is_last: bool, depth: usize) {
        result.push_str(prefix);
        if is_last {
            result.push_str("└── ");
        } else {
            result.push_str("├── ");
        }
        result.push_str(&format!("{}\n", self.value));

        if depth == 0 {
            return;
        }

        let child_prefix = if is_last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };

        let children = self.children();
        for (i, child) in children.iter().enumerate() {
            let child_is_last = i == children.len() - 1;
            child.render_recursive(result, &child_prefix, child_is_last, depth - 1);
        }
    }

    /// Render the value and its immediate shrink candidates on one line.
    pub fn render_shrinks(&self) -> String {
        let children = self.children();
        if children.is_empty() {
            format!("{} (no shrinks)", self.value)
        } else {
            let shrink_strs: Vec<String> =
                children.iter().map(|c| format!("{}", c.value)).collect();
            format!("{} → [{}]", self.value, shrink_strs.join(", "))
        }
    }
}
