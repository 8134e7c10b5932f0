use crate::combatant::Combatant;
use crate::errors::{RosterError, RosterResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One tree node, exclusively owning its combatant and both subtrees.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Node {
    combatant: Combatant,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn leaf(combatant: Combatant) -> Box<Node> {
        Box::new(Node {
            combatant,
            left: None,
            right: None,
        })
    }
}

/// A trainer's collection of combatants, stored as a binary search tree
/// keyed by combatant name (case-sensitive, lexicographic).
///
/// The tree is not rebalanced, so lookups are O(depth) with an O(n) worst
/// case. Equal names descend right on insert and form a right-leaning
/// chain; lookups stop at the shallowest match. Cloning a roster deep-copies
/// every node and combatant, so the copy's combatants can be mutated without
/// touching the original.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    root: Option<Box<Node>>,
}

impl Roster {
    pub fn new() -> Self {
        Roster { root: None }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        let mut count = 0;
        self.for_each_in_order(|_| count += 1);
        count
    }

    /// Insert a combatant, descending left on lexicographically smaller
    /// names and right on ties or greater.
    pub fn insert(&mut self, combatant: Combatant) -> RosterResult<()> {
        if combatant.get_name().is_empty() {
            return Err(RosterError::InvalidArgument(
                "cannot insert a combatant with an empty name".to_string(),
            ));
        }
        Self::insert_node(&mut self.root, combatant);
        Ok(())
    }

    /// Look up a combatant by name and return a mutable handle to it in
    /// place. The roster keeps ownership; the handle is only good until the
    /// roster is mutated again, which the borrow rules enforce.
    pub fn retrieve(&mut self, name: &str) -> RosterResult<&mut Combatant> {
        if name.is_empty() {
            return Err(RosterError::InvalidArgument(
                "name to find cannot be empty".to_string(),
            ));
        }
        Self::retrieve_node(&mut self.root, name)
    }

    /// Remove the named combatant, freeing it. Returns `Ok(false)` when the
    /// name is absent. A node with two children is replaced by its in-order
    /// successor, and the successor is then deleted from the right subtree.
    pub fn remove_specific(&mut self, name: &str) -> RosterResult<bool> {
        if name.is_empty() {
            return Err(RosterError::InvalidArgument(
                "name to remove cannot be empty".to_string(),
            ));
        }
        Ok(Self::remove_node(&mut self.root, name))
    }

    /// Drop every node and combatant and reset to empty. Safe to call on an
    /// already-empty roster.
    pub fn remove_all(&mut self) {
        self.root = None;
    }

    /// Print every combatant in name order. Returns `false` when the roster
    /// is empty.
    pub fn display_all(&self) -> bool {
        if self.is_empty() {
            println!("Roster is empty.");
            return false;
        }
        self.for_each_in_order(|combatant| {
            println!("\n===================");
            println!("{}", combatant);
            println!("===================");
        });
        true
    }

    /// Visit every combatant in ascending name order.
    pub fn for_each_in_order<F: FnMut(&Combatant)>(&self, mut visit: F) {
        Self::visit_in_order(&self.root, &mut visit);
    }

    fn insert_node(slot: &mut Option<Box<Node>>, combatant: Combatant) {
        match slot {
            None => *slot = Some(Node::leaf(combatant)),
            Some(node) => {
                if combatant.get_name() < node.combatant.get_name() {
                    Self::insert_node(&mut node.left, combatant);
                } else {
                    Self::insert_node(&mut node.right, combatant);
                }
            }
        }
    }

    fn retrieve_node<'a>(
        slot: &'a mut Option<Box<Node>>,
        name: &str,
    ) -> RosterResult<&'a mut Combatant> {
        match slot {
            None => Err(RosterError::NotFound(name.to_string())),
            Some(node) => match name.cmp(node.combatant.get_name()) {
                Ordering::Less => Self::retrieve_node(&mut node.left, name),
                Ordering::Greater => Self::retrieve_node(&mut node.right, name),
                Ordering::Equal => Ok(&mut node.combatant),
            },
        }
    }

    fn remove_node(slot: &mut Option<Box<Node>>, name: &str) -> bool {
        let Some(node) = slot else {
            return false;
        };
        match name.cmp(node.combatant.get_name()) {
            Ordering::Less => Self::remove_node(&mut node.left, name),
            Ordering::Greater => Self::remove_node(&mut node.right, name),
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    // Two children: take over the in-order successor's
                    // combatant, then delete the successor node below.
                    if let Some(successor) = Self::find_min(&node.right) {
                        let replacement = successor.clone();
                        let successor_name = replacement.get_name().to_string();
                        node.combatant = replacement;
                        Self::remove_node(&mut node.right, &successor_name);
                    }
                } else {
                    let child = node.left.take().or_else(|| node.right.take());
                    *slot = child;
                }
                true
            }
        }
    }

    fn find_min(slot: &Option<Box<Node>>) -> Option<&Combatant> {
        let node = slot.as_deref()?;
        match &node.left {
            Some(_) => Self::find_min(&node.left),
            None => Some(&node.combatant),
        }
    }

    fn visit_in_order<F: FnMut(&Combatant)>(slot: &Option<Box<Node>>, visit: &mut F) {
        if let Some(node) = slot {
            Self::visit_in_order(&node.left, visit);
            visit(&node.combatant);
            Self::visit_in_order(&node.right, visit);
        }
    }
}
