// ABOUTME: Stdio transport for the MCP server.
// ABOUTME: Reads JSON-RPC lines and answers each from its own task via one writer.

use std::sync::Arc;

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle, JoinSet};

use super::{McpResponse, McpRpcError, McpServer};
use crate::error::McpError;

/// Responses buffered between request tasks and the writer.
const RESPONSE_BUFFER: usize = 64;

/// Serve MCP over the process's stdin and stdout until stdin closes.
pub async fn serve_stdio(server: Arc<McpServer>) -> Result<(), McpError> {
    serve(server, tokio::io::stdin(), tokio::io::stdout()).await
}

/// Serve MCP over an arbitrary line-delimited byte stream.
///
/// Returns after `reader` hits EOF and every in-flight request has been answered.
pub async fn serve<R, W>(server: Arc<McpServer>, reader: R, writer: W) -> Result<(), McpError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<McpResponse>(RESPONSE_BUFFER);
    let writer_handle = spawn_writer(writer, rx);

    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut in_flight = JoinSet::new();

    let read_result = loop {
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break Ok(()),
            Ok(_) => {}
            Err(e) => break Err(McpError::from(e)),
        }

        let line = match String::from_utf8(std::mem::take(&mut buf)) {
            Ok(line) => line,
            Err(e) => {
                // A bad line gets a parse error; later lines are still served.
                let response = McpResponse::failure(Value::Null, McpRpcError::parse_error(e));
                let _ = tx.send(response).await;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let server = server.clone();
        let tx = tx.clone();
        in_flight.spawn(async move {
            if let Some(response) = server.handle_line(line.trim_end()).await {
                // Only fails once the writer has died; its error surfaces below.
                let _ = tx.send(response).await;
            }
        });

        while let Some(joined) = in_flight.try_join_next() {
            log_join_error(joined);
        }
    };

    while let Some(joined) = in_flight.join_next().await {
        log_join_error(joined);
    }
    drop(tx);

    let write_result = writer_handle
        .await
        .map_err(|e| McpError::Protocol(format!("writer task failed: {}", e)))?;

    read_result.and(write_result)
}

fn log_join_error(joined: Result<(), JoinError>) {
    if let Err(e) = joined {
        tracing::error!(error = %e, "request task panicked");
    }
}

fn spawn_writer<W>(
    mut writer: W,
    mut rx: mpsc::Receiver<McpResponse>,
) -> JoinHandle<Result<(), McpError>>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        while let Some(response) = rx.recv().await {
            let json = serde_json::to_string(&response)?;
            writer.write_all(json.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
        Ok(())
    })
}
