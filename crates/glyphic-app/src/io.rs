use glyphic_core::language::Transliterator;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::state::AppState;

/// Convert each input line, writing the transliteration and then the
/// diagnostics (when there are any) to `output`
pub async fn convert_lines<R, W>(state: &AppState, input: R, mut output: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let conversion = state.transliterator.convert(&line);
        tracing::debug!("converted {} chars", line.chars().count());

        output.write_all(conversion.output.as_bytes()).await?;
        output.write_all(b"\n").await?;
        if !conversion.diagnostics.is_empty() {
            output.write_all(conversion.diagnostics.as_bytes()).await?;
            output.write_all(b"\n").await?;
        }
        output.flush().await?;
    }

    tracing::info!("Input closed");
    Ok(())
}
