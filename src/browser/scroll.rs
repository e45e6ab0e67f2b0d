//! Scroll-to-bottom loop for lazily loaded listings

use tracing::debug;

use crate::browser::traits::Scrollable;
use crate::core::{Result, ScrollPolicy};

/// Scroll until the page height stops changing or the round cap is hit.
///
/// Returns the number of scrolls performed.
pub async fn scroll_until_stable<S>(page: &S, policy: &ScrollPolicy) -> Result<u32>
where
    S: Scrollable + ?Sized,
{
    let mut last_height = page.page_height().await?;
    let mut rounds = 0;

    loop {
        if policy.max_rounds.is_some_and(|max| rounds >= max) {
            debug!(rounds, "scroll cap reached");
            break;
        }

        page.scroll_to_bottom().await?;
        rounds += 1;
        tokio::time::sleep(policy.pause).await;

        let new_height = page.page_height().await?;
        debug!(rounds, last_height, new_height, "scrolled");
        if new_height == last_height {
            break;
        }
        last_height = new_height;
    }

    Ok(rounds)
}
