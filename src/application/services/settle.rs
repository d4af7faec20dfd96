use std::fmt::Display;
use std::future::Future;

use futures::StreamExt;
use futures::stream::FuturesUnordered;
use tracing::{debug, warn};

/// Await every future and keep the successes in input order.
///
/// Failures are logged and dropped; a batch where everything fails is empty.
pub async fn settle_all<I, F, T, E>(futures: I) -> Vec<T>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    futures::future::join_all(futures)
        .await
        .into_iter()
        .filter_map(|result| match result {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(error = %err, "catalog call failed");
                None
            }
        })
        .collect()
}

/// Race the futures and return the first `Some` to complete.
///
/// Futures still pending at that point are dropped.
pub async fn first_some<I, F, T, E>(futures: I) -> Option<T>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<Option<T>, E>>,
    E: Display,
{
    let mut pending: FuturesUnordered<F> = futures.into_iter().collect();
    while let Some(result) = pending.next().await {
        match result {
            Ok(Some(value)) => return Some(value),
            Ok(None) => {}
            Err(err) => debug!(error = %err, "lookup attempt failed"),
        }
    }
    None
}
