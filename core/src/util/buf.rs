//! Two-dimensional buffers, used for color and depth buffers.

use alloc::vec::Vec;
use core::fmt::{self, Debug, Formatter};
use core::ops::{Index, IndexMut};

/// A rectangular 2D buffer that owns its elements, backed by a `Vec`.
///
/// `Buf2` stores its elements contiguously, in standard row-major order,
/// such that element (x, y) maps to element at index
/// ```text
/// buf.width() * y + x
/// ```
/// in the backing vector.
///
/// # Examples
/// ```
/// # use fogcoord_core::util::buf::Buf2;
/// let mut buf = Buf2::new((4, 4));
/// // Indexing with an array [x, y] yields element at row y, column x:
/// buf[[2, 1]] = 123;
/// // Indexing with an usize i yields row with index i as a slice:
/// assert_eq!(&buf[1usize], &[0, 0, 123, 0]);
/// // Thus you can also do this, row first, column second:
/// assert_eq!(buf[1usize][2], 123)
/// ```
#[derive(Clone, PartialEq)]
pub struct Buf2<T> {
    data: Vec<T>,
    dims: (u32, u32),
}

impl<T> Buf2<T> {
    /// Returns a buffer of size `w` × `h`, with each element initialized
    /// by calling `init_fn(x, y)`.
    pub fn new_with<F>((w, h): (u32, u32), mut init_fn: F) -> Self
    where
        F: FnMut(u32, u32) -> T,
    {
        let data = (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .map(|(x, y)| init_fn(x, y))
            .collect();
        Self { data, dims: (w, h) }
    }

    /// Returns the width and height of `self`.
    #[inline]
    pub fn dims(&self) -> (u32, u32) {
        self.dims
    }
    #[inline]
    pub fn width(&self) -> u32 {
        self.dims.0
    }
    #[inline]
    pub fn height(&self) -> u32 {
        self.dims.1
    }

    /// Returns the backing data of `self` as a slice.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }
    /// Returns the backing data of `self` as a mutable slice.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns an iterator over the rows of `self`, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // A zero width would make chunks_exact panic
        self.data.chunks_exact(self.dims.0.max(1) as usize)
    }

    /// Returns a reference to the element at (x, y), or `None` if out
    /// of bounds.
    pub fn get(&self, [x, y]: [u32; 2]) -> Option<&T> {
        let (w, h) = self.dims;
        (x < w && y < h).then(|| &self.data[(w * y + x) as usize])
    }
}

impl<T: Clone> Buf2<T> {
    /// Sets every element of `self` to `val`.
    pub fn fill(&mut self, val: T) {
        self.data.fill(val);
    }
}

impl<T: Clone + Default> Buf2<T> {
    /// Returns a buffer of size `w` × `h`, with every element initialized
    /// to `T::default()`.
    pub fn new(dims: (u32, u32)) -> Self {
        Self::new_with(dims, |_, _| T::default())
    }
}

impl<T> Index<usize> for Buf2<T> {
    type Output = [T];

    /// Returns row `i` of `self`.
    #[inline]
    fn index(&self, i: usize) -> &[T] {
        let w = self.dims.0 as usize;
        &self.data[w * i..w * (i + 1)]
    }
}

impl<T> IndexMut<usize> for Buf2<T> {
    /// Returns row `i` of `self`.
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [T] {
        let w = self.dims.0 as usize;
        &mut self.data[w * i..w * (i + 1)]
    }
}

impl<T> Index<[u32; 2]> for Buf2<T> {
    type Output = T;

    /// Returns the element at (x, y).
    ///
    /// # Panics
    /// If x or y is out of bounds.
    #[inline]
    fn index(&self, [x, y]: [u32; 2]) -> &T {
        &self[y as usize][x as usize]
    }
}

impl<T> IndexMut<[u32; 2]> for Buf2<T> {
    #[inline]
    fn index_mut(&mut self, [x, y]: [u32; 2]) -> &mut T {
        &mut self[y as usize][x as usize]
    }
}

impl<T> Debug for Buf2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buf2")
            .field("dims", &self.dims)
            .finish_non_exhaustive()
    }
}
