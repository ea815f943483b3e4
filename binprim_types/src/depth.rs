use crate::error::{Error, Result};
use std::ops::{Deref, DerefMut};
use tracing::debug;

/// Bounds how many containers may be open at once within one encode or decode call tree.
///
/// `remaining` starts at `max`, drops by one on [`DepthBudget::enter`] and
/// climbs back by one on [`DepthBudget::exit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthBudget {
    max: usize,
    remaining: usize,
}

impl DepthBudget {
    pub fn new(max: usize) -> Self {
        Self {
            max,
            remaining: max,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        if self.remaining == 0 {
            debug!(max = self.max, "container depth budget exhausted");
            return Err(Error::DepthExceeded { max: self.max });
        }
        self.remaining -= 1;
        Ok(())
    }

    /// Unbalanced exits are ignored rather than lifting the budget above `max`.
    pub fn exit(&mut self) {
        if self.remaining < self.max {
            self.remaining += 1;
        }
    }

    pub fn reset(&mut self) {
        self.remaining = self.max;
    }

    pub fn max(&self) -> usize {
        self.max
    }
    pub fn remaining(&self) -> usize {
        self.remaining
    }
    /// Count of containers currently open.
    pub fn depth(&self) -> usize {
        self.max - self.remaining
    }
}

/// Anything that owns a [`DepthBudget`], i.e. the encoder and the decoder.
pub trait DepthTracked {
    fn depth_mut(&mut self) -> &mut DepthBudget;

    fn increase_container_depth(&mut self) -> Result<()> {
        self.depth_mut().enter()
    }
    fn decrease_container_depth(&mut self) {
        self.depth_mut().exit()
    }

    /// Opens one container and hands back a guard that closes it when dropped.
    fn enter_container(&mut self) -> Result<Nested<'_, Self>>
    where
        Self: Sized,
    {
        self.depth_mut().enter()?;
        Ok(Nested { codec: self })
    }
}

/// Scoped container guard.
///
/// Derefs to the codec, so the container's contents are written or read through the guard.
/// The budget unit is returned on drop, including on `?` early returns.
pub struct Nested<'a, C: DepthTracked> {
    codec: &'a mut C,
}

impl<'a, C: DepthTracked> Deref for Nested<'a, C> {
    type Target = C;
    fn deref(&self) -> &C {
        self.codec
    }
}
impl<'a, C: DepthTracked> DerefMut for Nested<'a, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.codec
    }
}

impl<'a, C: DepthTracked> Drop for Nested<'a, C> {
    fn drop(&mut self) {
        self.codec.depth_mut().exit();
    }
}
