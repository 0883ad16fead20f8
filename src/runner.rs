use std::io::Write;

use crate::args::parse_decimal;
use crate::key_service::KeyService;
use crate::Result;

/// Runs the whole pipeline once: parse the two positional arguments, ask the
/// service for a key code, and write the JSON document to `out` as raw UTF-8
/// bytes with no trailing newline. Arguments beyond the first two are
/// ignored; a missing or non-numeric argument becomes the `None` sentinel
/// and is still forwarded. Any failure bubbles up before a byte is written.
pub async fn run<S, W>(args: &[String], service: &S, out: &mut W) -> Result<()>
where
    S: KeyService + ?Sized,
    W: Write,
{
    let content_id = args.first().and_then(|arg| parse_decimal(arg));
    let code_number = args.get(1).and_then(|arg| parse_decimal(arg));

    let value = service.derive(content_id, code_number).await?;

    let buf = serde_json::to_vec(&value)?;

    out.write_all(&buf)?;
    out.flush()?;

    Ok(())
}
