//! Human-readable renderings of a [`CartesianTree`].

use std::fmt::{Display, Formatter, Result};

use crate::{iter::PreOrder, node::Node, CartesianTree};

impl<T> CartesianTree<T> {
    /// Render the tree as an indented outline, one node per line from the root
    /// down.
    ///
    /// ```text
    /// Root: val=1, idx=1
    ///     L--- val=2, idx=0
    ///     R--- None
    /// ```
    pub fn pretty(&self) -> Pretty<'_, T> {
        Pretty { root: self.root() }
    }

    /// Render the tree as a Graphviz digraph.
    pub fn dot(&self) -> Dot<'_, T> {
        Dot { root: self.root() }
    }
}

/// An indented outline of a [`CartesianTree`], returned by
/// [`CartesianTree::pretty()`].
///
/// Children are indented four spaces deeper than their parent. A node with
/// any children prints both child slots, printing `None` for the missing one.
#[derive(Debug)]
pub struct Pretty<'a, T> {
    root: Option<&'a Node<T>>,
}

impl<T> Display for Pretty<'_, T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut stack = self
            .root
            .map(|v| vec![(Some(v), 0_usize, "Root: ")])
            .unwrap_or_default();

        while let Some((n, level, prefix)) = stack.pop() {
            let indent = level * 4;

            let n = match n {
                Some(v) => v,
                None => {
                    writeln!(f, "{:indent$}{prefix}None", "")?;
                    continue;
                }
            };

            writeln!(
                f,
                "{:indent$}{prefix}val={}, idx={}",
                "",
                n.value(),
                n.position()
            )?;

            if !n.is_leaf() {
                stack.push((n.right(), level + 1, "R--- "));
                stack.push((n.left(), level + 1, "L--- "));
            }
        }

        Ok(())
    }
}

/// A Graphviz rendering of a [`CartesianTree`], returned by
/// [`CartesianTree::dot()`].
///
/// Nodes are identified by position and labelled with their position and
/// value.
#[derive(Debug)]
pub struct Dot<'a, T> {
    root: Option<&'a Node<T>>,
}

impl<T> Display for Dot<'_, T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "digraph {{")?;
        writeln!(f, r#"bgcolor = "transparent";"#)?;
        writeln!(
            f,
            r#"node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];"#
        )?;

        for n in PreOrder::new(self.root) {
            let pos = n.position();
            writeln!(f, r#""{pos}" [label="{pos} | {}"];"#, n.value())?;

            for (side, child) in [("l", n.left()), ("r", n.right())] {
                match child {
                    Some(v) => {
                        writeln!(f, "\"{pos}\" -> \"{}\" [color = \"orange1\";];", v.position())?;
                    }
                    None => {
                        // Invisible placeholders keep left and right children
                        // on their respective sides when rendered.
                        writeln!(f, "\"null_{pos}_{side}\" [shape=point,style=invis];")?;
                        writeln!(f, "\"{pos}\" -> \"null_{pos}_{side}\" [style=invis];")?;
                    }
                }
            }
        }

        writeln!(f, "}}")
    }
}
