//! Reactive positioning relative to the parent or to sibling windows.
//!
//! Every operation binds a recompute callback to `Reconfigure` on each window
//! it depends on, then runs the callback once. Positions only update when a
//! dependency is sent `Reconfigure`; nothing is polled.

use std::str::FromStr;

use crate::{
    error::{Error, Result},
    event::EventKind,
    id::WindowId,
    tree::Tree,
};

/// Vertical alignment against a reference window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VAlign {
    /// Share the reference's top edge.
    #[default]
    Top,
    /// Share the reference's vertical centre.
    Middle,
    /// Share the reference's bottom edge.
    Bottom,
}

impl FromStr for VAlign {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "top" => Ok(Self::Top),
            "middle" => Ok(Self::Middle),
            "bottom" => Ok(Self::Bottom),
            _ => Err(Error::Invalid(format!("unknown vertical alignment: {s:?}"))),
        }
    }
}

/// Positions one target window. Sibling-relative results are stored as local
/// offsets, so they stay consistent with the resolver adding the parent's
/// inset back.
pub struct Poser<'a> {
    /// Tree holding the target.
    tree: &'a mut Tree,
    /// Window being positioned.
    target: WindowId,
}

impl<'a> Poser<'a> {
    /// Start positioning `target`.
    pub fn new(tree: &'a mut Tree, target: impl Into<WindowId>) -> Self {
        Self {
            tree,
            target: target.into(),
        }
    }

    /// Centre the target inside its parent's content area.
    pub fn centre(self) -> Result<Self> {
        let target = self.target;
        let parent = self
            .tree
            .parent(target)?
            .ok_or_else(|| Error::InvalidOperation("cannot centre the root".into()))?;
        self.bind(&[parent], move |tree| {
            let x = tree
                .available_width(parent)?
                .saturating_sub(tree.actual_width(target)?)
                .div_euclid(2);
            let y = tree
                .available_height(parent)?
                .saturating_sub(tree.actual_height(target)?)
                .div_euclid(2);
            tree.set_x(target, x)?;
            tree.set_y(target, y)
        })
    }

    /// Place the target directly above the highest of `others`.
    pub fn above(self, others: &[WindowId]) -> Result<Self> {
        let target = self.target;
        let deps = non_empty(others, "above")?;
        self.bind(&deps.clone(), move |tree| {
            let top = max_of(&deps, |w| tree.requested_y(w))?;
            let y = top
                .saturating_sub(tree.actual_height(target)?)
                .saturating_sub(parent_inset(tree, target)?);
            tree.set_y(target, y)
        })
    }

    /// Place the target directly below the lowest of `others`.
    pub fn below(self, others: &[WindowId]) -> Result<Self> {
        let target = self.target;
        let deps = non_empty(others, "below")?;
        self.bind(&deps.clone(), move |tree| {
            let bottom = max_of(&deps, |w| Ok(tree.requested_y(w)?.saturating_add(tree.actual_height(w)?)))?;
            let y = bottom.saturating_sub(parent_inset(tree, target)?);
            tree.set_y(target, y)
        })
    }

    /// Place the target directly left of the leftmost of `others`.
    pub fn left_of(self, others: &[WindowId]) -> Result<Self> {
        let target = self.target;
        let deps = non_empty(others, "left_of")?;
        self.bind(&deps.clone(), move |tree| {
            let left = min_of(&deps, |w| tree.requested_x(w))?;
            let x = left
                .saturating_sub(tree.actual_width(target)?)
                .saturating_sub(parent_inset(tree, target)?);
            tree.set_x(target, x)
        })
    }

    /// Place the target directly right of the rightmost of `others`.
    pub fn right_of(self, others: &[WindowId]) -> Result<Self> {
        let target = self.target;
        let deps = non_empty(others, "right_of")?;
        self.bind(&deps.clone(), move |tree| {
            let right = max_of(&deps, |w| Ok(tree.requested_x(w)?.saturating_add(tree.actual_width(w)?)))?;
            let x = right.saturating_sub(parent_inset(tree, target)?);
            tree.set_x(target, x)
        })
    }

    /// Align the target's top, centre or bottom with a reference window.
    pub fn align_vertical(self, reference: impl Into<WindowId>, align: VAlign) -> Result<Self> {
        let target = self.target;
        let reference = reference.into();
        self.bind(&[reference], move |tree| {
            let top = tree
                .requested_y(reference)?
                .saturating_sub(parent_inset(tree, target)?);
            let ref_h = tree.actual_height(reference)?;
            let h = tree.actual_height(target)?;
            let y = match align {
                VAlign::Top => top,
                VAlign::Middle => top.saturating_sub(h.saturating_sub(ref_h).div_euclid(2)),
                VAlign::Bottom => top.saturating_add(ref_h).saturating_sub(h),
            };
            tree.set_y(target, y)
        })
    }

    /// Bind `recompute` to `Reconfigure` on every dependency and run it once.
    fn bind<F>(self, deps: &[WindowId], recompute: F) -> Result<Self>
    where
        F: Fn(&mut Tree) -> Result<()> + Clone + 'static,
    {
        for dep in deps {
            let f = recompute.clone();
            self.tree
                .bind(*dep, EventKind::Reconfigure, move |tree, _, _| f(tree))?;
        }
        recompute(&mut *self.tree)?;
        Ok(self)
    }
}

/// Copy a dependency list, rejecting an empty one.
fn non_empty(others: &[WindowId], op: &str) -> Result<Vec<WindowId>> {
    if others.is_empty() {
        return Err(Error::Invalid(format!("{op} needs at least one window")));
    }
    Ok(others.to_vec())
}

/// The largest value of `f` over `ids`.
fn max_of(ids: &[WindowId], mut f: impl FnMut(WindowId) -> Result<i32>) -> Result<i32> {
    let mut best = i32::MIN;
    for id in ids {
        best = best.max(f(*id)?);
    }
    Ok(best)
}

/// The smallest value of `f` over `ids`.
fn min_of(ids: &[WindowId], mut f: impl FnMut(WindowId) -> Result<i32>) -> Result<i32> {
    let mut best = i32::MAX;
    for id in ids {
        best = best.min(f(*id)?);
    }
    Ok(best)
}

/// Inset of the target's parent, zero for the root.
fn parent_inset(tree: &Tree, target: WindowId) -> Result<i32> {
    match tree.parent(target)? {
        Some(p) => tree.inset(p),
        None => Ok(0),
    }
}
