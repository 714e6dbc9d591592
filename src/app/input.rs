//! Console line input.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error_handling::InputError;

/// Reads one line, including its `\n` terminator.
///
/// Input that ends before a `\n` is an error, even if some bytes were read.
pub async fn read_line<R>(reader: &mut R) -> Result<String, InputError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let n = reader.read_line(&mut line).await?;
    if n == 0 || !line.ends_with('\n') {
        return Err(InputError::UnexpectedEof);
    }
    Ok(line)
}

/// Reads the domain to query.
///
/// Surrounding whitespace is stripped, which removes both `\n` and `\r\n`
/// terminators. The name is not otherwise validated.
pub async fn read_domain<R>(reader: &mut R) -> Result<String, InputError>
where
    R: AsyncBufRead + Unpin,
{
    let line = read_line(reader).await?;
    Ok(line.trim().to_string())
}
