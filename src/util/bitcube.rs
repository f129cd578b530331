use serde::{Deserialize, Serialize};

use crate::error::IndexError;

/// Dense 3D bit array with linear index `x*Y*Z + y*Z + z`. Backed by 64-bit
/// words so the `(x, y, z, rawData)` serialization is exact: little-endian
/// bit order within each word, lowest linear index is word 0 bit 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BitCube {
    x: usize,
    y: usize,
    z: usize,
    #[serde(rename = "data")]
    words: Vec<u64>,
}

impl BitCube {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        let bits = x * y * z;
        let word_count = bits.div_ceil(64);
        Self {
            x,
            y,
            z,
            words: vec![0u64; word_count],
        }
    }

    /// Reconstruct from raw words, as read back from serialized state.
    pub fn from_raw(x: usize, y: usize, z: usize, words: Vec<u64>) -> Self {
        Self { x, y, z, words }
    }

    pub fn dims(&self) -> (usize, usize, usize) {
        (self.x, self.y, self.z)
    }

    pub fn raw_data(&self) -> &[u64] {
        &self.words
    }

    fn linear_index(&self, x: usize, y: usize, z: usize) -> Result<usize, IndexError> {
        if x >= self.x || y >= self.y || z >= self.z {
            return Err(IndexError::OutOfBounds {
                x,
                y,
                z,
                sx: self.x,
                sy: self.y,
                sz: self.z,
            });
        }
        Ok(x * self.y * self.z + y * self.z + z)
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> Result<bool, IndexError> {
        let index = self.linear_index(x, y, z)?;
        let (word, bit) = (index / 64, index % 64);
        Ok(self.words[word] & (1u64 << bit) != 0)
    }

    pub fn set(&mut self, x: usize, y: usize, z: usize) -> Result<(), IndexError> {
        let index = self.linear_index(x, y, z)?;
        let (word, bit) = (index / 64, index % 64);
        self.words[word] |= 1u64 << bit;
        Ok(())
    }

    pub fn clear(&mut self, x: usize, y: usize, z: usize) -> Result<(), IndexError> {
        let index = self.linear_index(x, y, z)?;
        let (word, bit) = (index / 64, index % 64);
        self.words[word] &= !(1u64 << bit);
        Ok(())
    }

    pub fn flip(&mut self, x: usize, y: usize, z: usize) -> Result<(), IndexError> {
        let index = self.linear_index(x, y, z)?;
        let (word, bit) = (index / 64, index % 64);
        self.words[word] ^= 1u64 << bit;
        Ok(())
    }

    /// All bits along the z axis at a fixed `(x, y)`.
    pub fn get_z_line(&self, x: usize, y: usize) -> Result<Vec<bool>, IndexError> {
        (0..self.z).map(|z| self.get(x, y, z)).collect()
    }

    /// All bits along the y axis at a fixed `(x, z)`.
    pub fn get_y_line(&self, x: usize, z: usize) -> Result<Vec<bool>, IndexError> {
        (0..self.y).map(|y| self.get(x, y, z)).collect()
    }

    /// All bits along the x axis at a fixed `(y, z)`.
    pub fn get_x_line(&self, y: usize, z: usize) -> Result<Vec<bool>, IndexError> {
        (0..self.x).map(|x| self.get(x, y, z)).collect()
    }
}
