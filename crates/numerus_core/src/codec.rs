//! Length-prefixed stream persistence for `RomanNumeral`.
//!
//! # Responsibility
//! - Write a numeral as one length byte followed by its normalized UTF-8 text.
//! - Read it back through the same validation path as `RomanNumeral::parse`.
//!
//! # Invariants
//! - Persisted bytes are never trusted: every read re-validates.
//! - I/O failures stay distinct from validation failures.

use crate::model::error::NumeralError;
use crate::model::numeral::RomanNumeral;
use crate::model::syntax::MAX_NUMERAL_LEN;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

pub type CodecResult<T> = Result<T, CodecError>;

#[derive(Debug)]
pub enum CodecError {
    Io(io::Error),
    /// Stream ended before the declared number of bytes.
    Truncated { expected: usize, actual: usize },
    LengthExceeded { len: usize, max: usize },
    InvalidUtf8,
    Numeral(NumeralError),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "numeral stream I/O failed: {err}"),
            Self::Truncated { expected, actual } => write!(
                f,
                "numeral stream truncated: expected {expected} bytes, got {actual}"
            ),
            Self::LengthExceeded { len, max } => {
                write!(f, "persisted numeral length {len} exceeds maximum {max}")
            }
            Self::InvalidUtf8 => write!(f, "persisted numeral is not valid UTF-8"),
            Self::Numeral(err) => write!(f, "persisted numeral is invalid: {err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Numeral(err) => Some(err),
            Self::Truncated { .. } | Self::LengthExceeded { .. } | Self::InvalidUtf8 => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<NumeralError> for CodecError {
    fn from(value: NumeralError) -> Self {
        Self::Numeral(value)
    }
}

/// Writes `numeral` as `[len: u8][text: len bytes]`.
pub fn write_numeral<W: Write>(writer: &mut W, numeral: &RomanNumeral) -> CodecResult<()> {
    let text = numeral.numeral().as_bytes();
    let len = u8::try_from(text.len()).map_err(|_| CodecError::LengthExceeded {
        len: text.len(),
        max: MAX_NUMERAL_LEN,
    })?;
    writer.write_all(&[len])?;
    writer.write_all(text)?;
    Ok(())
}

/// Reads one numeral written by [`write_numeral`].
///
/// # Errors
/// - `Io` / `Truncated` when the stream cannot supply the record.
/// - `LengthExceeded` when the declared length is longer than any numeral.
/// - `InvalidUtf8` / `Numeral` when the payload fails validation.
pub fn read_numeral<R: Read>(reader: &mut R) -> CodecResult<RomanNumeral> {
    let mut len = [0u8; 1];
    reader.read_exact(&mut len)?;
    let len = usize::from(len[0]);
    if len > MAX_NUMERAL_LEN {
        return Err(CodecError::LengthExceeded {
            len,
            max: MAX_NUMERAL_LEN,
        });
    }

    let mut text = Vec::with_capacity(len);
    reader.by_ref().take(len as u64).read_to_end(&mut text)?;
    if text.len() != len {
        return Err(CodecError::Truncated {
            expected: len,
            actual: text.len(),
        });
    }

    let text = String::from_utf8(text).map_err(|_| CodecError::InvalidUtf8)?;
    Ok(RomanNumeral::parse(&text)?)
}

/// Writes `numeral` to a new file at `path`, replacing any existing file.
pub fn save_numeral(path: impl AsRef<Path>, numeral: &RomanNumeral) -> CodecResult<()> {
    let path = path.as_ref();
    let result = File::create(path).map_err(CodecError::from).and_then(|file| {
        let mut writer = BufWriter::new(file);
        write_numeral(&mut writer, numeral)?;
        writer.flush()?;
        Ok(())
    });

    match &result {
        Ok(()) => info!(
            "event=numeral_save module=codec status=ok path={}",
            path.display()
        ),
        Err(err) => error!(
            "event=numeral_save module=codec status=error path={} error={}",
            path.display(),
            err
        ),
    }
    result
}

/// Reads a numeral previously written by [`save_numeral`].
pub fn load_numeral(path: impl AsRef<Path>) -> CodecResult<RomanNumeral> {
    let path = path.as_ref();
    let result = File::open(path)
        .map_err(CodecError::from)
        .and_then(|file| read_numeral(&mut BufReader::new(file)));

    match &result {
        Ok(_) => info!(
            "event=numeral_load module=codec status=ok path={}",
            path.display()
        ),
        Err(err) => error!(
            "event=numeral_load module=codec status=error path={} error={}",
            path.display(),
            err
        ),
    }
    result
}
