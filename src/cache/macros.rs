/// Serves a value from the cache, computing and storing it on a miss.
///
/// Cache failures never fail the caller: a read error is logged and the
/// value is computed as if it were a miss.
///
/// # Arguments
/// * `$cache`: a [`Cache`](crate::cache::Cache) with `get_from_cache` and `set_in_background`.
/// * `$key`: the [`CacheKey`](crate::cache::CacheKey) to read and write.
/// * `$ttl`: time-to-live of a stored value in seconds.
/// * `$block`: future computing the value on a miss.
///
/// # Example
/// ```rust,ignore
/// let response = cached!(cache, CacheKey::Recommend { title, limit }, 3600, async {
///     compute_response()
/// });
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        let key = $key;
        match $cache.get_from_cache(&key).await {
            Ok(Some(cached)) => {
                tracing::debug!(key = %key, "Cache hit");
                cached
            }
            Ok(None) => {
                let value = $block.await;
                $cache.set_in_background(&key, &value, $ttl);
                value
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Cache read failed, computing directly");
                $block.await
            }
        }
    }};
}
