//! src/decryptor/blocks.rs
//! Hashed block stream reader
//!
//! Wire layout of every block, little-endian:
//!
//! ```text
//! u32 index | [u8; 32] sha256(data) | u32 length | data[length]
//! ```
//!
//! The stream ends with a block whose hash is all zero and whose length is zero.

use crate::builders::decrypt_options::DecryptOptions;
use crate::consts::HASH_LENGTH;
use crate::decryptor::read::ByteCursor;
use crate::error::KdbxError;
use crate::utils::{is_all_zero, sha256};
use log::{debug, trace};

/// One verified block, borrowing its data from the stream buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashedBlock<'a> {
    pub index: u32,
    pub hash: [u8; HASH_LENGTH],
    pub data: &'a [u8],
}

#[derive(Debug, Clone, Copy)]
enum BlockState {
    Header,
    Body {
        index: u32,
        hash: [u8; HASH_LENGTH],
        length: usize,
    },
    Done,
}

/// Iterator over the verified blocks of a hashed block stream.
///
/// Yields each block after its hash checks out and stops at the terminator. The first
/// error is yielded once, then the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct HashedBlocks<'a> {
    cursor: ByteCursor<'a>,
    state: BlockState,
    strict_indices: bool,
    expected_index: u32,
}

impl<'a> HashedBlocks<'a> {
    /// `strict_indices` requires indices 0, 1, 2, … including the terminator.
    #[must_use]
    pub fn new(stream: &'a [u8], strict_indices: bool) -> Self {
        Self {
            cursor: ByteCursor::new(stream),
            state: BlockState::Header,
            strict_indices,
            expected_index: 0,
        }
    }

    /// Bytes not yet consumed. After the terminator, any trailing data.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        self.cursor.rest()
    }

    fn check_index(&mut self, index: u32) -> Result<(), KdbxError> {
        if self.strict_indices && index != self.expected_index {
            return Err(KdbxError::Integrity(format!(
                "block index out of sequence: expected {}, found {index}",
                self.expected_index
            )));
        }
        self.expected_index = self.expected_index.wrapping_add(1);
        Ok(())
    }

    fn step(&mut self) -> Result<Option<HashedBlock<'a>>, KdbxError> {
        loop {
            match std::mem::replace(&mut self.state, BlockState::Done) {
                BlockState::Done => return Ok(None),
                BlockState::Header => {
                    let index = self.cursor.read_u32_le("block index")?;
                    let hash = self.cursor.read_span::<HASH_LENGTH>("block hash")?;
                    let length = self.cursor.read_u32_le("block length")?;
                    self.check_index(index)?;

                    if length == 0 && is_all_zero(&hash) {
                        trace!("terminator block at index {index}");
                        return Ok(None);
                    }
                    self.state = BlockState::Body {
                        index,
                        hash,
                        length: length as usize,
                    };
                }
                BlockState::Body {
                    index,
                    hash,
                    length,
                } => {
                    let data = self.cursor.take(length, "block data")?;
                    if sha256(data) != hash {
                        return Err(KdbxError::Integrity(format!(
                            "block hash verification failed at block {index}"
                        )));
                    }
                    self.state = BlockState::Header;
                    return Ok(Some(HashedBlock { index, hash, data }));
                }
            }
        }
    }
}

impl<'a> Iterator for HashedBlocks<'a> {
    type Item = Result<HashedBlock<'a>, KdbxError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().transpose()
    }
}

/// Verify every block and concatenate their data.
///
/// # Errors
///
/// - [`KdbxError::Integrity`] on a hash mismatch (or a bad index in strict mode)
/// - [`KdbxError::Format`] if the stream ends before the terminator
pub fn read_block_stream(stream: &[u8], options: &DecryptOptions) -> Result<Vec<u8>, KdbxError> {
    let mut payload = Vec::with_capacity(stream.len());
    let mut blocks = HashedBlocks::new(stream, options.strict_block_indices());
    let mut count = 0usize;

    for block in blocks.by_ref() {
        payload.extend_from_slice(block?.data);
        count += 1;
    }

    let trailing = blocks.remaining().len();
    if trailing > 0 {
        trace!("ignoring {trailing} bytes after the terminator block");
    }
    debug!("block stream: {count} blocks, {} payload bytes", payload.len());
    Ok(payload)
}
