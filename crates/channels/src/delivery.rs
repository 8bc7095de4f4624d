use tracing::{debug, trace, warn};

use crate::{
    Error, Result,
    plugin::{ChunkSink, ReplyTarget},
};

/// Send `chunks` through `sink` strictly in order, one at a time.
///
/// Chunk `i + 1` is only sent after chunk `i` succeeded. The first failure
/// stops delivery and is returned as [`Error::Delivery`] carrying the index
/// of the failed chunk; nothing after it is sent. Returns the number of
/// chunks delivered.
pub async fn deliver_chunks<S>(sink: &S, target: &ReplyTarget, chunks: &[String]) -> Result<usize>
where
    S: ChunkSink + ?Sized,
{
    let total = chunks.len();
    for (index, chunk) in chunks.iter().enumerate() {
        trace!(
            chat_id = %target.chat_id,
            index,
            total,
            len = chunk.len(),
            "sending chunk"
        );
        if let Err(e) = sink.send_chunk(target, chunk).await {
            warn!(
                chat_id = %target.chat_id,
                index,
                total,
                error = %e,
                "chunk delivery failed, dropping remaining chunks"
            );
            return Err(Error::Delivery {
                index,
                total,
                source: Box::new(e),
            });
        }
    }
    debug!(chat_id = %target.chat_id, chunks = total, "reply delivered");
    Ok(total)
}
