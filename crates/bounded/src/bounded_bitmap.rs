use super::{
    BoundedArray,
    Index,
    OutOfBoundsAccess,
};
use core::marker::PhantomData;

/// Types that can be stored as a single bit in a [`BoundedBitmap`].
pub trait Bool {
    fn from_bool(value: bool) -> Self;
    fn into_bool(self) -> bool;
}

impl Bool for bool {
    #[inline(always)]
    fn from_bool(value: bool) -> Self {
        value
    }

    #[inline(always)]
    fn into_bool(self) -> bool {
        self
    }
}

type Chunk = u32;
const CHUNK_LEN: usize = core::mem::size_of::<Chunk>() * 8;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
struct ChunkIndex {
    value: usize,
}

impl Index for ChunkIndex {
    #[inline]
    fn from_index(index: usize) -> Self {
        Self { value: index }
    }

    #[inline]
    fn into_index(self) -> usize {
        self.value
    }
}

/// Returns the chunk and the mask of the bit at the given raw index.
#[inline]
fn split_index(index: usize) -> (ChunkIndex, Chunk) {
    (
        ChunkIndex::from_index(index / CHUNK_LEN),
        1 << (index % CHUNK_LEN),
    )
}

/// A packed array of bits addressed by a typed index.
///
/// Bits past `len` in the last chunk are always kept `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedBitmap<Idx, T> {
    len: usize,
    chunks: BoundedArray<ChunkIndex, Chunk>,
    marker: PhantomData<fn() -> (Idx, T)>,
}

impl<Idx, T> Default for BoundedBitmap<Idx, T> {
    fn default() -> Self {
        Self {
            len: 0,
            chunks: BoundedArray::default(),
            marker: Default::default(),
        }
    }
}

impl<Idx, T> BoundedBitmap<Idx, T> {
    /// Returns the number of chunks required to store the given amount of bits.
    fn required_chunks(len: usize) -> usize {
        (len + CHUNK_LEN - 1) / CHUNK_LEN
    }

    /// Creates a new bounded bitmap with the given length and all bits unset.
    pub fn with_len(len: usize) -> Self {
        let len_chunks = Self::required_chunks(len);
        Self {
            len,
            chunks: BoundedArray::with_len(len_chunks, |_| 0),
            marker: Default::default(),
        }
    }

    /// Returns the number of bits stored in the bounded bitmap.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the bounded bitmap stores no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.chunks
            .iter()
            .map(|chunk| chunk.count_ones() as usize)
            .sum()
    }

    /// Returns the mask of valid bits within the last chunk.
    fn last_chunk_mask(&self) -> Chunk {
        match self.len % CHUNK_LEN {
            0 => !0,
            rest => (1 << rest) - 1,
        }
    }
}

impl<Idx, T> BoundedBitmap<Idx, T>
where
    T: Bool,
{
    /// Sets every bit of the bounded bitmap to the given value.
    pub fn fill(&mut self, value: T) {
        let pattern = if value.into_bool() { !0 } else { 0 };
        for chunk in self.chunks.iter_mut() {
            *chunk = pattern;
        }
        let tail_mask = self.last_chunk_mask();
        if let Some(last) = self.chunks.iter_mut().last() {
            *last &= tail_mask;
        }
    }
}

impl<Idx, T> BoundedBitmap<Idx, T>
where
    Idx: Index,
    T: Bool,
{
    /// Ensures that the given index is valid for the bounded bitmap.
    ///
    /// # Errors
    ///
    /// If the given index is out of bounds.
    #[inline]
    fn ensure_valid_index(&self, index: Idx) -> Result<usize, OutOfBoundsAccess> {
        let index = index.into_index();
        if index >= self.len() {
            return Err(OutOfBoundsAccess)
        }
        Ok(index)
    }

    /// Returns the bit at the given index.
    ///
    /// # Errors
    ///
    /// If the given index is out of bounds for the bounded bitmap.
    #[inline]
    pub fn get(&self, index: Idx) -> Result<T, OutOfBoundsAccess> {
        let (chunk_idx, mask) = split_index(self.ensure_valid_index(index)?);
        let chunk = self.chunks.get(chunk_idx)?;
        Ok(T::from_bool(chunk & mask != 0))
    }

    /// Sets the bit at the given index.
    ///
    /// # Errors
    ///
    /// If the given index is out of bounds for the bounded bitmap.
    #[inline]
    pub fn set(&mut self, index: Idx, new_value: T) -> Result<(), OutOfBoundsAccess> {
        let (chunk_idx, mask) = split_index(self.ensure_valid_index(index)?);
        let chunk = self.chunks.get_mut(chunk_idx)?;
        if new_value.into_bool() {
            *chunk |= mask;
        } else {
            *chunk &= !mask;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_works() {
        let map = <BoundedBitmap<usize, bool>>::default();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert_eq!(map.count_ones(), 0);
    }

    #[test]
    fn with_len_works() {
        let map = <BoundedBitmap<usize, bool>>::with_len(10);
        assert_eq!(map.len(), 10);
        assert!(!map.is_empty());
        for i in 0..10 {
            assert_eq!(map.get(i), Ok(false));
        }
    }

    #[test]
    fn set_works() {
        let mut map = <BoundedBitmap<usize, bool>>::with_len(3);
        assert_eq!(map.get(0), Ok(false));
        map.set(0, true).unwrap();
        assert_eq!(map.get(0), Ok(true));
        assert_eq!(map.get(1), Ok(false));
        map.set(0, false).unwrap();
        assert_eq!(map.get(0), Ok(false));
    }

    #[test]
    fn out_of_bounds_fails() {
        let mut map = <BoundedBitmap<usize, bool>>::with_len(3);
        assert!(map.get(2).is_ok());
        assert_eq!(map.get(3), Err(OutOfBoundsAccess));
        assert_eq!(map.set(3, true), Err(OutOfBoundsAccess));
    }

    #[test]
    fn fill_keeps_tail_clear() {
        let len = 70;
        let mut map = <BoundedBitmap<usize, bool>>::with_len(len);
        map.fill(true);
        assert_eq!(map.count_ones(), len);
        for i in 0..len {
            assert_eq!(map.get(i), Ok(true));
        }
        map.fill(false);
        assert_eq!(map.count_ones(), 0);
    }

    #[test]
    fn set_all_multiword_works() {
        let len = 100;
        let mut map = <BoundedBitmap<usize, bool>>::with_len(len);
        for i in (0..len).step_by(3) {
            map.set(i, true).unwrap();
        }
        assert_eq!(map.count_ones(), 34);
        for i in 0..len {
            assert_eq!(map.get(i), Ok(i % 3 == 0));
        }
    }
}
