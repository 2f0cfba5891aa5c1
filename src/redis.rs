use fred::pool::RedisPool;
use fred::prelude::*;
use fred::types::ReconnectPolicy;

use crate::prelude::*;

pub async fn connect(uri: &str, pool_size: usize) -> Result<RedisPool> {
    let config = RedisConfig::from_url(uri).context("failed to parse the Redis URI")?;
    let pool = RedisPool::new(config, pool_size).context("failed to create the Redis pool")?;
    let _ = pool.connect(Some(ReconnectPolicy::default()));
    pool.wait_for_connect().await.context("failed to connect to Redis")?;
    Ok(pool)
}

pub trait CacheKey {
    fn cache_key(&self) -> String;
}
