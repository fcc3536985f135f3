use crate::artifacts::diff::view::Window;

#[derive(Debug, Clone, Copy)]
struct StackNode {
    /// The window still to be diffed, `None` for a node that only pads equals.
    window: Option<Window>,
    /// Equal entries left over from a reduction, emitted when popped.
    remainder: usize,
    /// The node below this one, or the next free node in the graveyard.
    prev: Option<usize>,
}

/// A LIFO of windows which drives the divide and conquer without recursion.
///
/// Nodes live in one arena. Popped nodes are linked into a graveyard and
/// reused by later pushes, so after warming up the stack stops allocating.
#[derive(Debug, Default)]
pub(crate) struct Stack {
    nodes: Vec<StackNode>,
    top: Option<usize>,
    graveyard: Option<usize>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn push(&mut self, window: Option<Window>, remainder: usize) {
        let node = StackNode {
            window,
            remainder,
            prev: self.top,
        };

        let index = match self.graveyard {
            Some(index) => {
                self.graveyard = self.nodes[index].prev;
                self.nodes[index] = node;
                index
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };

        self.top = Some(index);
    }

    pub fn pop(&mut self) -> Option<(Option<Window>, usize)> {
        let index = self.top?;
        let node = self.nodes[index];

        self.top = node.prev;
        self.nodes[index].prev = self.graveyard;
        self.graveyard = Some(index);

        Some((node.window, node.remainder))
    }

    /// Moves every live node into the graveyard.
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    #[cfg(test)]
    fn chain_length(&self, mut link: Option<usize>) -> usize {
        let mut count = 0;
        while let Some(index) = link {
            count += 1;
            link = self.nodes[index].prev;
        }
        count
    }
}
