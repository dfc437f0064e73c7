use crate::machine::{Machine, MachineError};
use tui::style::Color;

/// foreground for lit cells, background for everything else
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub foreground: Color,
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            foreground: Color::White,
            background: Color::Black,
        }
    }
}

/// widest or tallest surface; leaves room for a border each side in a u16 rect
pub const MAX_SURFACE_SIDE: usize = u16::MAX as usize - 2;

/// The pixel canvas the renderer paints into. Every machine cell becomes a
/// scale x scale square, so the surface is (width * scale) x (height * scale).
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSurface {
    width: usize,
    height: usize,
    scale: usize,
    palette: Palette,
    pixels: Vec<Color>,
}

impl RenderSurface {
    /// A surface for a `cols` x `rows` buffer, filled with background.
    /// `None` if either side, borders included, won't fit a terminal
    /// coordinate, or the pixel count overflows.
    pub fn new(cols: usize, rows: usize, scale: usize, palette: Palette) -> Option<Self> {
        let width = cols.checked_mul(scale)?;
        let height = rows.checked_mul(scale)?;
        if width > MAX_SURFACE_SIDE || height > MAX_SURFACE_SIDE {
            return None;
        }
        let len = width.checked_mul(height)?;
        Some(RenderSurface {
            width,
            height,
            scale,
            palette,
            pixels: vec![palette.background; len],
        })
    }

    /// a surface sized for `machine`'s display buffer
    pub fn for_machine<M: Machine + ?Sized>(
        machine: &M,
        scale: usize,
        palette: Palette,
    ) -> Option<Self> {
        Self::new(machine.buffer_width(), machine.buffer_height(), scale, palette)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// colour at surface pixel (x, y); `None` off the surface
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// surface coordinates of every pixel painted in `colour`, row by row
    pub fn coords_of(&self, colour: Color) -> impl Iterator<Item = (usize, usize)> + '_ {
        let w = self.width;
        self.pixels
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == colour)
            .map(move |(i, _)| (i % w, i / w))
    }

    /// paint the whole surface background
    pub fn clear(&mut self) {
        let bg = self.palette.background;
        self.pixels.fill(bg);
    }

    /// paint the scale x scale square for buffer cell (x, y) foreground
    fn fill_cell(&mut self, x: usize, y: usize) {
        let fg = self.palette.foreground;
        let (left, top) = (x * self.scale, y * self.scale);
        for row in top..top + self.scale {
            let start = row * self.width + left;
            self.pixels[start..start + self.scale].fill(fg);
        }
    }
}

/// Repaint `surface` from the machine's display buffer. The whole surface is
/// cleared first, then every lit cell is painted; there are no partial updates.
pub fn render<M: Machine + ?Sized>(machine: &M, surface: &mut RenderSurface) -> Result<(), MachineError> {
    let cols = machine.buffer_width();
    let rows = machine.buffer_height();
    // a surface sized for a different buffer would index out of range below
    if cols * surface.scale != surface.width || rows * surface.scale != surface.height {
        return Err(MachineError::OutOfBounds { x: cols, y: rows });
    }

    surface.clear();
    for y in 0..rows {
        for x in 0..cols {
            if machine.get_buffer(x, y)? {
                surface.fill_cell(x, y);
            }
        }
    }
    Ok(())
}
