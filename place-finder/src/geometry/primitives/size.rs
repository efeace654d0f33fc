use anyhow::Result;
use anyhow::ensure;

/// Width and height of a canvas or an image, in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn try_new(width: u32, height: u32) -> Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "invalid size, width: {width}, height: {height}"
        );
        Ok(Size { width, height })
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}
