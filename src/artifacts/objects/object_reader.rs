//! Streaming loose object decoder
//!
//! Loose objects are zlib streams holding `<kind> <size>\0<payload>`. The
//! decoder walks them in a single forward pass:
//!
//! 1. init: wrap the source in a zlib decoder and make sure it really is zlib
//! 2. header: kind and size (see [`ObjectHeader`])
//! 3. transfer: copy exactly `size` bytes to the sink, never reading further
//! 4. close: flush the sink, then release the decoder and the source
//!
//! The payload is never held in memory as a whole, so object size is not
//! bounded by available memory.

use crate::artifacts::objects::error::{ObjectError, ObjectResult, Stage};
use crate::artifacts::objects::object_header::ObjectHeader;
use flate2::read::ZlibDecoder;
use std::io::{self, BufRead, BufReader, Read, Write};

const COPY_BUFFER_SIZE: usize = 8 * 1024;

pub struct ObjectReader<R: Read> {
    reader: BufReader<ZlibDecoder<R>>,
}

impl<R: Read> ObjectReader<R> {
    /// Wrap a raw object source
    ///
    /// The first block is decompressed eagerly so that a source which is not a
    /// zlib stream at all fails here with [`ObjectError::CorruptObject`]
    /// instead of surfacing later as a header error.
    pub fn new(source: R) -> ObjectResult<Self> {
        let mut reader = BufReader::new(ZlibDecoder::new(source));

        let is_empty = reader
            .fill_buf()
            .map_err(|e| ObjectError::from_read(Stage::Decompress, e))?
            .is_empty();

        // flate2 treats a source that ends before the zlib header as an empty stream
        if is_empty && reader.get_ref().total_in() == 0 {
            return Err(ObjectError::CorruptObject {
                stage: Stage::Decompress,
                source: io::Error::new(io::ErrorKind::UnexpectedEof, "missing zlib header"),
            });
        }

        tracing::trace!("zlib stream opened");

        Ok(Self { reader })
    }

    pub fn read_header(&mut self) -> ObjectResult<ObjectHeader> {
        let header = ObjectHeader::read_from(&mut self.reader)?;

        tracing::debug!(
            kind = %header.object_type(),
            size = header.size(),
            "parsed object header"
        );

        Ok(header)
    }

    /// Copy exactly `header.size()` payload bytes to `writer`
    ///
    /// Must be called right after [`Self::read_header`]. Bytes past the
    /// declared size are left unread.
    pub fn copy_payload<W: Write + ?Sized>(
        &mut self,
        header: &ObjectHeader,
        writer: &mut W,
    ) -> ObjectResult<u64> {
        let expected = header.size();
        let mut payload = (&mut self.reader).take(expected);
        let mut buffer = [0u8; COPY_BUFFER_SIZE];
        let mut copied = 0u64;

        loop {
            let read = match payload.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => read,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(ObjectError::from_read(Stage::Transfer, e)),
            };

            writer
                .write_all(&buffer[..read])
                .map_err(ObjectError::SinkWriteError)?;
            copied += read as u64;
        }

        if copied < expected {
            return Err(ObjectError::TruncatedPayload {
                expected,
                actual: copied,
            });
        }

        tracing::debug!(bytes = copied, "payload transferred");

        Ok(copied)
    }

    /// Release the decompression state and hand back the raw source
    ///
    /// Buffered and compressed bytes that were never consumed are discarded.
    pub fn close(self) -> R {
        self.reader.into_inner().into_inner()
    }
}

/// Run `f` over a decoder for `source`, releasing both on every exit path
///
/// The decoder is torn down before the source is dropped. An error returned by
/// `f` is passed through untouched.
pub fn with_object<R, T, F>(source: R, f: F) -> ObjectResult<T>
where
    R: Read,
    F: FnOnce(&mut ObjectReader<R>) -> ObjectResult<T>,
{
    let mut reader = ObjectReader::new(source)?;
    let result = f(&mut reader);

    drop(reader.close());

    result
}

/// Decode a complete object from `source`, streaming its payload to `writer`
///
/// A failure to flush `writer` on close is only reported when nothing failed
/// before it.
pub fn decode<R, W>(source: R, writer: &mut W) -> ObjectResult<ObjectHeader>
where
    R: Read,
    W: Write + ?Sized,
{
    let result = with_object(source, |reader| {
        let header = reader.read_header()?;
        reader.copy_payload(&header, writer)?;
        Ok(header)
    });

    let closed = writer.flush().map_err(|source| ObjectError::Io {
        stage: Stage::Close,
        source,
    });

    result.and_then(|header| closed.map(|()| header))
}

/// Decode only the header of the object in `source`
pub fn decode_header<R: Read>(source: R) -> ObjectResult<ObjectHeader> {
    with_object(source, |reader| reader.read_header())
}
