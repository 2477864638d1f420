mod iter;


use compare::Compare;
use std::cmp::Ordering::*;
use std::mem::{replace, swap};

pub use self::iter::Iter;

pub type Link<K, V> = Option<Box<Node<K, V>>>;

pub trait LinkExt: Sized {
    type K;
    type V;
    fn as_node_ref(&self) -> Option<&Node<Self::K, Self::V>>;
}

impl<K, V> LinkExt for Link<K, V> {
    type K = K;
    type V = V;

    fn as_node_ref(&self) -> Option<&Node<K, V>> {
        self.as_ref().map(|node| &**node)
    }
}

/// Returns the height of the subtree rooted at the link, where an empty
/// subtree has height -1.
pub fn height<K, V>(link: &Link<K, V>) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}

#[derive(Clone)]
pub struct Node<K, V> {
    left: Link<K, V>,
    right: Link<K, V>,
    height: i32,
    balance: i32,
    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Node { left: None, right: None, height: 0, balance: 0, key, value }
    }

    pub fn key_value(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    // Recomputes the cached height and balance factor from the children.
    fn update(&mut self) {
        let left_height = height(&self.left);
        let right_height = height(&self.right);
        self.height = 1 + std::cmp::max(left_height, right_height);
        self.balance = right_height - left_height;
    }

    // Promotes the node's right child, demoting the node to its left child.
    // Touches child links and cached fields only, never keys or values.
    fn rotate_left(node: &mut Box<Self>) {
        let mut save = node.right.take().unwrap();
        swap(&mut node.right, &mut save.left); // save.left now None
        swap(node, &mut save);
        save.update();
        node.left = Some(save);
        node.update();
    }

    // Mirror image of `rotate_left`.
    fn rotate_right(node: &mut Box<Self>) {
        let mut save = node.left.take().unwrap();
        swap(&mut node.left, &mut save.right); // save.right now None
        swap(node, &mut save);
        save.update();
        node.right = Some(save);
        node.update();
    }

    // Restores the balance invariant at the node after a structural change in
    // one of its subtrees, assuming `update` was just called. The balance
    // factor is at most 2 in magnitude here, so at most two rotations are
    // needed.
    fn rebalance(node: &mut Box<Self>) {
        match node.balance {
            2 => {
                if node.right.as_ref().map_or(false, |right| right.balance < 0) {
                    Self::rotate_right(node.right.as_mut().unwrap()); // right-left
                }
                Self::rotate_left(node);
            }
            -2 => {
                if node.left.as_ref().map_or(false, |left| left.balance > 0) {
                    Self::rotate_left(node.left.as_mut().unwrap()); // left-right
                }
                Self::rotate_right(node);
            }
            _ => {}
        }
    }
}

pub fn insert<K, V, C>(link: &mut Link<K, V>, cmp: &C, key: K, value: V) -> Option<V>
    where C: Compare<K> {

    match *link {
        None => {
            *link = Some(Box::new(Node::new(key, value)));
            None
        }
        Some(ref mut node) => {
            let old_value = match cmp.compare(&key, &node.key) {
                Equal => return Some(replace(&mut node.value, value)),
                Less => insert(&mut node.left, cmp, key, value),
                Greater => insert(&mut node.right, cmp, key, value),
            };

            // `None` means a new node was created somewhere below this one.
            if old_value.is_none() {
                node.update();
                Node::rebalance(node);
            }

            old_value
        }
    }
}

pub fn remove<K, V, C, Q: ?Sized>(link: &mut Link<K, V>, cmp: &C, key: &Q) -> Option<(K, V)>
    where C: Compare<Q, K> {

    let ordering = match *link {
        None => return None,
        Some(ref node) => cmp.compare(key, &node.key),
    };

    let removed = match ordering {
        Less => remove(&mut link.as_mut().unwrap().left, cmp, key),
        Greater => remove(&mut link.as_mut().unwrap().right, cmp, key),
        Equal => {
            let node = link.as_mut().unwrap();

            if node.left.is_some() && node.right.is_some() {
                // Take the donor from the taller subtree to keep the
                // rebalancing work below small. `remove_extremum` restores
                // the balance invariant in the donor subtree on its way out.
                let donor = if height(&node.left) >= height(&node.right) {
                    Right::remove_extremum(&mut node.left)
                } else {
                    Left::remove_extremum(&mut node.right)
                };

                donor.map(|(key, value)| {
                    (replace(&mut node.key, key), replace(&mut node.value, value))
                })
            } else {
                // At most one child: splice the node out. The surviving
                // subtree is untouched, so no rebalancing is needed here.
                return link.take().map(|node| {
                    let node = *node;
                    *link = if node.left.is_some() { node.left } else { node.right };
                    (node.key, node.value)
                });
            }
        }
    };

    if removed.is_some() {
        if let Some(ref mut node) = *link {
            node.update();
            Node::rebalance(node);
        }
    }

    removed
}

pub fn get<'a, K, V, C, Q: ?Sized>(link: &'a Link<K, V>, cmp: &C, key: &Q)
    -> Option<&'a Node<K, V>> where C: Compare<Q, K> {

    match *link {
        None => None,
        Some(ref node) => match cmp.compare(key, &node.key) {
            Equal => Some(&**node),
            Less => get(&node.left, cmp, key),
            Greater => get(&node.right, cmp, key),
        },
    }
}

pub fn get_mut<'a, K, V, C, Q: ?Sized>(link: &'a mut Link<K, V>, cmp: &C, key: &Q)
    -> Option<&'a mut Node<K, V>> where C: Compare<Q, K> {

    match *link {
        None => None,
        Some(ref mut node) => match cmp.compare(key, &node.key) {
            Equal => Some(&mut **node),
            Less => get_mut(&mut node.left, cmp, key),
            Greater => get_mut(&mut node.right, cmp, key),
        },
    }
}

/// Checks that the cached balance factor of every node in the subtree lies in
/// [-1, 1]. Diagnostic only.
pub fn is_balanced<K, V>(link: &Link<K, V>) -> bool {
    link.as_ref().map_or(true, |node| {
        node.balance.abs() <= 1 && is_balanced(&node.left) && is_balanced(&node.right)
    })
}

pub trait Dir: Sized {
    type Opposite: Dir<Opposite = Self>;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V>;
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V>;

    fn extremum<K, V>(link: &Link<K, V>) -> Option<&Node<K, V>> {
        let mut node = link.as_node_ref()?;

        while let Some(next) = Self::forward(node).as_node_ref() {
            node = next;
        }

        Some(node)
    }

    fn remove_extremum<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
        match *link {
            Some(ref mut node) if Self::forward(node).is_some() => {
                let key_value = Self::remove_extremum(Self::forward_mut(node));
                node.update();
                Node::rebalance(node);
                key_value
            }
            _ => link.take().map(|node| {
                let mut node = *node;
                *link = Self::Opposite::forward_mut(&mut node).take();
                (node.key, node.value)
            }),
        }
    }
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.left }
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V> { &mut node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.right }
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V> { &mut node.right }
}
