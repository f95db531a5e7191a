use anyhow::Result;

/// Runtime that drives every task on the thread calling `block_on`.
pub fn single_thread_runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
