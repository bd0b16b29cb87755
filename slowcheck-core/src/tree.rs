//! Rose tree pairing a generated value with its shrink candidates.

use std::fmt;
use std::rc::Rc;

pub mod render;

type ChildrenFn<T> = Rc<dyn Fn() -> Vec<Tree<T>>>;

/// A generated value together with its shrink possibilities.
///
/// Children are the shrink candidates for the value, ordered from most
/// aggressive simplification to least. They are produced by a thunk and
/// only forced on demand: shrink spaces of composed generators are far
/// too large to materialize eagerly, and a shrink search only ever walks
/// one path through them.
pub struct Tree<T> {
    pub value: T,
    children: ChildrenFn<T>,
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Tree {
            value: self.value.clone(),
            children: Rc::clone(&self.children),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl<T> Tree<T> {
    /// Create a tree whose candidates are produced by the given thunk.
    pub fn new<F>(value: T, children: F) -> Self
    where
        F: Fn() -> Vec<Tree<T>> + 'static,
    {
        Tree {
            value,
            children: Rc::new(children),
        }
    }

    /// Force and return the shrink candidates for this value.
    pub fn children(&self) -> Vec<Tree<T>> {
        (self.children)()
    }

    /// Force one level of candidates and return just their values.
    pub fn shrinks(&self) -> Vec<T> {
        self.children().into_iter().map(|tree| tree.value).collect()
    }
}

impl<T: 'static> Tree<T> {
    /// Create a tree with the given value and no shrink candidates.
    pub fn singleton(value: T) -> Self {
        Tree {
            value,
            children: Rc::new(Vec::new) as ChildrenFn<T>,
        }
    }

    /// Map a function over the tree, reapplying it lazily to candidates.
    pub fn map<U, F>(&self, f: F) -> Tree<U>
    where
        U: 'static,
        F: Fn(&T) -> U + 'static,
    {
        self.map_rc(Rc::new(f))
    }

    pub(crate) fn map_rc<U: 'static>(&self, f: Rc<dyn Fn(&T) -> U>) -> Tree<U> {
        let value = f(&self.value);
        let children = Rc::clone(&self.children);
        Tree {
            value,
            children: Rc::new(move || {
                children()
                    .iter()
                    .map(|child| child.map_rc(Rc::clone(&f)))
                    .collect()
            }),
        }
    }
}

impl<T: Clone + 'static> Tree<T> {
    /// Create a tree with the given value and pre-built candidates.
    pub fn with_children(value: T, children: Vec<Tree<T>>) -> Self {
        Tree {
            value,
            children: Rc::new(move || children.clone()),
        }
    }

    /// Build a tree by repeatedly applying a shrink rule to the value.
    ///
    /// Each candidate produced by `shrink` is unfolded with the same rule,
    /// so a rule whose candidates strictly decrease in some measure yields
    /// a finite search space.
    pub fn unfold<F>(value: T, shrink: F) -> Self
    where
        F: Fn(&T) -> Vec<T> + 'static,
    {
        Tree::unfold_rc(value, Rc::new(shrink))
    }

    fn unfold_rc(value: T, shrink: Rc<dyn Fn(&T) -> Vec<T>>) -> Self {
        let here = value.clone();
        let rule = Rc::clone(&shrink);
        Tree {
            value,
            children: Rc::new(move || {
                rule(&here)
                    .into_iter()
                    .map(|candidate| Tree::unfold_rc(candidate, Rc::clone(&rule)))
                    .collect()
            }),
        }
    }

    /// Keep only values satisfying the predicate, pruning failing subtrees.
    ///
    /// Returns `None` when the root itself does not satisfy it.
    pub fn filter<F>(&self, predicate: F) -> Option<Tree<T>>
    where
        F: Fn(&T) -> bool + 'static,
    {
        self.filter_rc(Rc::new(predicate))
    }

    pub(crate) fn filter_rc(&self, predicate: Rc<dyn Fn(&T) -> bool>) -> Option<Tree<T>> {
        if !predicate(&self.value) {
            return None;
        }
        let children = Rc::clone(&self.children);
        Some(Tree {
            value: self.value.clone(),
            children: Rc::new(move || {
                children()
                    .iter()
                    .filter_map(|child| child.filter_rc(Rc::clone(&predicate)))
                    .collect()
            }),
        })
    }
}

impl<T: 'static> From<T> for Tree<T> {
    fn from(value: T) -> Self {
        Tree::singleton(value)
    }
}
