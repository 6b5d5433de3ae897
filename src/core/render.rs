//! QR rendering collaborator
//!
//! The library only produces envelope text. Turning that text into a
//! scannable image or module matrix is left to an implementation of
//! [`QrRenderer`] supplied by the caller.

use crate::error::Result;

pub trait QrRenderer {
    type Output;

    fn render(&self, text: &str) -> Result<Self::Output>;
}

impl<R: QrRenderer + ?Sized> QrRenderer for &R {
    type Output = R::Output;

    fn render(&self, text: &str) -> Result<Self::Output> {
        (**self).render(text)
    }
}
