//! Pagination helpers
//!
//! A paginated envelope carries its originating request context, so a
//! different page of the same logical query can be fetched by re-issuing
//! that request with only the `page` query parameter replaced.
//!
//! [`Client::get_all_pages`] is the one genuinely concurrent operation in
//! the client: it issues every missing page as an independent request and
//! joins on all of them before merging.

mod types;

pub use types::PaginatedData;

use crate::client::Client;
use crate::error::Result;
use crate::response::Envelope;
use futures::future;
use serde::de::DeserializeOwned;
use types::page_in_bounds;

impl Client {
    /// Get another page of a paginated result.
    ///
    /// Returns `Ok(None)` when the requested page is out of bounds; in
    /// bounds, re-issues the original request with every parameter
    /// preserved except `page`.
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        response: &Envelope<PaginatedData<T>>,
        page: u64,
    ) -> Result<Option<Envelope<PaginatedData<T>>>> {
        let data = &response.data;
        if !page_in_bounds(page, data.limit, data.total) {
            return Ok(None);
        }
        let mut ctx = response.meta.request.clone();
        ctx.query_params.insert("page".to_string(), page.to_string());
        self.send(ctx, None).await.map(Some)
    }

    /// Get the next page of a paginated result, or `None` on the last page
    pub async fn get_next_page<T: DeserializeOwned>(
        &self,
        response: &Envelope<PaginatedData<T>>,
    ) -> Result<Option<Envelope<PaginatedData<T>>>> {
        self.get_page(response, response.data.page + 1).await
    }

    /// Get the previous page of a paginated result, or `None` on the first
    pub async fn get_previous_page<T: DeserializeOwned>(
        &self,
        response: &Envelope<PaginatedData<T>>,
    ) -> Result<Option<Envelope<PaginatedData<T>>>> {
        self.get_page(response, response.data.page.saturating_sub(1))
            .await
    }

    /// Fetch every other page of a paginated result concurrently and merge
    /// all items, in page order, into a single synthetic page.
    ///
    /// > **Warning:** memory use and latency are proportional to the total
    /// > item count; for large results this can take a long time.
    ///
    /// A single failed page fetch fails the whole aggregate; no partial
    /// result is returned.
    pub async fn get_all_pages<T>(
        &self,
        response: &Envelope<PaginatedData<T>>,
    ) -> Result<PaginatedData<T>>
    where
        T: DeserializeOwned + Clone,
    {
        let data = &response.data;
        if data.limit == 0 {
            return Ok(PaginatedData {
                items: data.items.clone(),
                total: data.total,
                limit: data.limit,
                page: 1,
            });
        }

        let total_pages = data.total.div_ceil(data.limit);
        let missing: Vec<u64> = (1..=total_pages).filter(|p| *p != data.page).collect();
        let fetched = future::try_join_all(
            missing.iter().map(|page| self.get_page(response, *page)),
        )
        .await?;

        // try_join_all preserves input order, so walking the page numbers
        // again reinserts the held page at its position.
        let mut fetched = fetched.into_iter();
        let mut items = Vec::with_capacity(data.items.len());
        for page in 1..=total_pages {
            if page == data.page {
                items.extend(data.items.iter().cloned());
            } else if let Some(envelope) = fetched.next().flatten() {
                items.extend(envelope.data.items);
            }
        }

        Ok(PaginatedData {
            items,
            total: data.total,
            limit: data.limit,
            page: 1,
        })
    }
}
